use serde_json::json;
use stockroom::api::{CatalogApi, CategorySelection, ListQuery, StockroomPaths};
use stockroom::error::CatalogError;
use stockroom::model::{ProductDraft, CATEGORIES};
use stockroom::store::fs::FileStore;
use stockroom::store::{DocumentStore, Fields};
use tempfile::TempDir;

fn fields(value: serde_json::Value) -> Fields {
    value.as_object().cloned().unwrap()
}

#[test]
fn set_get_update_roundtrip_on_disk() {
    let temp = TempDir::new().unwrap();
    let mut store = FileStore::new(temp.path().to_path_buf());

    store
        .set(CATEGORIES, "books", fields(json!({"name": "books", "products": []})))
        .unwrap();
    store
        .update(CATEGORIES, "books", fields(json!({"products": [{"id": 1}]})))
        .unwrap();

    let doc = store.get(CATEGORIES, "books").unwrap().unwrap();
    assert_eq!(doc["name"], json!("books"));
    assert_eq!(doc["products"], json!([{"id": 1}]));

    // A fresh handle on the same directory sees the same data
    let reopened = FileStore::new(temp.path().to_path_buf());
    assert_eq!(reopened.get(CATEGORIES, "books").unwrap().unwrap(), doc);
}

#[test]
fn update_of_missing_document_fails() {
    let temp = TempDir::new().unwrap();
    let mut store = FileStore::new(temp.path().to_path_buf());

    let err = store
        .update(CATEGORIES, "ghost", fields(json!({"products": []})))
        .unwrap_err();
    assert!(matches!(err, CatalogError::DocumentNotFound { .. }));
    assert!(store.get(CATEGORIES, "ghost").unwrap().is_none());
}

#[test]
fn awkward_category_names_survive_listing() {
    let temp = TempDir::new().unwrap();
    let mut store = FileStore::new(temp.path().to_path_buf());

    for name in ["men's clothing", "jewelery", "a/b"] {
        store
            .set(CATEGORIES, name, fields(json!({"name": name, "products": []})))
            .unwrap();
    }

    let ids: Vec<String> = store
        .list_all(CATEGORIES)
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec!["a/b", "jewelery", "men's clothing"]);
}

#[test]
fn writes_leave_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let mut store = FileStore::new(temp.path().to_path_buf());

    for i in 0..5 {
        store
            .set(CATEGORIES, "books", fields(json!({"name": "books", "n": i})))
            .unwrap();
    }

    let entries: Vec<_> = std::fs::read_dir(temp.path().join(CATEGORIES))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["books.json"]);
}

#[test]
fn api_over_file_store() {
    let temp = TempDir::new().unwrap();
    let mut api = CatalogApi::new(
        FileStore::new(temp.path().to_path_buf()),
        StockroomPaths {
            data_dir: temp.path().to_path_buf(),
        },
    );

    let mut draft = ProductDraft {
        title: "Ring".into(),
        price: "99.99".into(),
        stock: "2".into(),
        ..Default::default()
    };
    let added = api
        .add_product(&mut draft, &CategorySelection::existing("jewelery"))
        .unwrap();
    assert_eq!(draft, ProductDraft::default());
    let id = added.affected_products[0].id.to_string();

    let listed = api.list_products(ListQuery::default(), 1, "20").unwrap();
    assert_eq!(listed.listed_products.len(), 1);
    assert_eq!(listed.listed_products[0].price, Some(99.99));

    let target = api.preview_delete(&id).unwrap();
    let deleted = api.delete_product(&target).unwrap();
    assert_eq!(deleted.affected_products.len(), 1);

    let doc = api.store().get(CATEGORIES, "jewelery").unwrap().unwrap();
    assert_eq!(doc["products"], json!([]));
}
