use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn stockroom(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stockroom").unwrap();
    cmd.env("STOCKROOM_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("STOCKROOM_LOG");
    cmd
}

fn add(home: &Path, title: &str, price: &str, category: &str) -> String {
    let output = stockroom(home)
        .args(["add", "-t", title, "-p", price, "-s", "5", "-c", category])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Product added with ID: "))
        .map(|id| id.trim().to_string())
        .expect("add prints the new id")
}

#[test]
fn add_list_view_delete() {
    let temp = tempfile::tempdir().unwrap();
    let home = temp.path();

    let id = add(home, "Desk Lamp", "24.5", "home");

    stockroom(home)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("home"));

    stockroom(home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Desk Lamp"))
        .stdout(predicate::str::contains("24.50"));

    stockroom(home)
        .args(["view", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Desk Lamp"))
        .stdout(predicate::str::contains("5 in stock"));

    stockroom(home)
        .args(["delete", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted: Desk Lamp"));

    stockroom(home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found."));

    // The emptied category document stays behind
    stockroom(home)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("home"));
}

#[test]
fn delete_can_be_declined() {
    let temp = tempfile::tempdir().unwrap();
    let home = temp.path();
    let id = add(home, "Kettle", "30", "kitchen");

    stockroom(home)
        .args(["delete", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete cancelled."));

    stockroom(home)
        .args(["view", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kettle"));
}

#[test]
fn blank_category_is_rejected() {
    let temp = tempfile::tempdir().unwrap();

    stockroom(temp.path())
        .args(["add", "-t", "Nothing", "-c", "   "])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Category name cannot be empty"));

    stockroom(temp.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("No categories yet."));
}

#[test]
fn new_category_wins_over_selected() {
    let temp = tempfile::tempdir().unwrap();

    stockroom(temp.path())
        .args(["add", "-t", "Tent", "-c", "home", "--new-category", " outdoor "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created category: outdoor"));

    stockroom(temp.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("outdoor"))
        .stdout(predicate::str::contains("home").not());
}

#[test]
fn unparsable_price_is_stored_as_unknown() {
    let temp = tempfile::tempdir().unwrap();
    let id = add(temp.path(), "Mystery Box", "abc", "misc");

    stockroom(temp.path())
        .args(["view", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("n/a"));
}

#[test]
fn list_pages_through_results() {
    let temp = tempfile::tempdir().unwrap();
    let home = temp.path();
    for (title, price) in [("First", "1"), ("Second", "2"), ("Third", "3")] {
        add(home, title, price, "books");
    }

    stockroom(home)
        .args(["list", "-n", "2", "-p", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("First"))
        .stdout(predicate::str::contains("Third").not())
        .stdout(predicate::str::contains("Showing 3-3 of 3 (page 2 of 2)"));

    stockroom(home)
        .args(["list", "-n", "2", "-s", "price-desc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Third"))
        .stdout(predicate::str::contains("First").not());

    stockroom(home)
        .args(["list", "-p", "18446744073709551615"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found."))
        .stdout(predicate::str::contains("past the last page"));

    stockroom(home)
        .args(["list", "-n", "zero"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid page size"));
}

#[test]
fn config_default_page_size_is_used() {
    let temp = tempfile::tempdir().unwrap();
    let home = temp.path();

    stockroom(home)
        .args(["config", "results-per-page", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("results-per-page set to 1"));

    add(home, "Only", "1", "books");
    add(home, "Another", "2", "books");

    stockroom(home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("page 1 of 2"));
}

#[test]
fn unknown_id_fails() {
    let temp = tempfile::tempdir().unwrap();

    stockroom(temp.path())
        .args(["view", "12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product not found: 12345"));

    stockroom(temp.path())
        .args(["delete", "12345", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product not found"));
}
