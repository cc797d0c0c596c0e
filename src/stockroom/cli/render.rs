//! # Rendering
//!
//! Turns command results into terminal text. Layout (column widths,
//! truncation, padding) is computed on plain strings with Unicode-aware
//! widths; color is applied last so it never skews alignment.
//!
//! Every `render_*` function returns a `String`, which keeps them testable;
//! only [`print_messages`] writes to stdout directly.

use chrono::{DateTime, Utc};
use colored::Colorize;
use stockroom::api::{CmdMessage, DeleteTarget, MessageLevel};
use stockroom::model::Product;
use stockroom::pagination::PageInfo;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 14;
const CATEGORY_WIDTH: usize = 18;
const PRICE_WIDTH: usize = 10;
const STOCK_WIDTH: usize = 7;
const TIME_WIDTH: usize = 16;
const COLUMN_GAPS: usize = 5;
const TITLE_WIDTH: usize =
    LINE_WIDTH - ID_WIDTH - CATEGORY_WIDTH - PRICE_WIDTH - STOCK_WIDTH - TIME_WIDTH - COLUMN_GAPS;

const CARD_WIDTH: usize = 30;
const CARDS_PER_ROW: usize = 3;
const CARD_GAP: &str = "   ";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// One product per line: id, title, category, price, stock, age.
pub fn render_product_list(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products found.\n".to_string();
    }

    let mut out = String::new();
    let header = format!(
        "{} {} {} {} {} {}",
        pad_to_width("ID", ID_WIDTH),
        pad_to_width("TITLE", TITLE_WIDTH),
        pad_to_width("CATEGORY", CATEGORY_WIDTH),
        pad_left("PRICE", PRICE_WIDTH),
        pad_left("STOCK", STOCK_WIDTH),
        pad_left("ADDED", TIME_WIDTH),
    );
    out.push_str(&format!("{}\n", header.dimmed()));

    for p in products {
        let stock = pad_left(&format_stock(p.stock), STOCK_WIDTH);
        let stock = if is_out_of_stock(p) {
            stock.red()
        } else {
            stock.normal()
        };
        out.push_str(&format!(
            "{} {} {} {} {} {}\n",
            pad_to_width(&p.id.to_string(), ID_WIDTH).yellow(),
            pad_to_width(&p.title, TITLE_WIDTH).bold(),
            pad_to_width(&p.category, CATEGORY_WIDTH),
            pad_left(&format_price(p.price), PRICE_WIDTH).green(),
            stock,
            pad_left(&format_added(p), TIME_WIDTH).dimmed(),
        ));
    }
    out
}

/// Products as cards, a few to a row.
pub fn render_product_grid(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products found.\n".to_string();
    }

    let mut out = String::new();
    for (row_index, row) in products.chunks(CARDS_PER_ROW).enumerate() {
        if row_index > 0 {
            out.push('\n');
        }
        let cards: Vec<Vec<String>> = row.iter().map(card_lines).collect();
        for line in 0..cards[0].len() {
            let joined: Vec<&str> = cards.iter().map(|c| c[line].as_str()).collect();
            out.push_str(joined.join(CARD_GAP).trim_end());
            out.push('\n');
        }
    }
    out
}

fn card_lines(p: &Product) -> Vec<String> {
    let rule = "-".repeat(CARD_WIDTH);
    let meta = format!("{} | stock {}", p.category, format_stock(p.stock));
    vec![
        rule.dimmed().to_string(),
        pad_to_width(&p.title, CARD_WIDTH).bold().to_string(),
        pad_to_width(&format_price(p.price), CARD_WIDTH)
            .green()
            .to_string(),
        pad_to_width(&meta, CARD_WIDTH),
        pad_to_width(&format!("#{}", p.id), CARD_WIDTH)
            .yellow()
            .to_string(),
    ]
}

pub fn render_page_footer(info: &PageInfo) -> String {
    if info.total_results == 0 || info.is_past_end() {
        return String::new();
    }
    let text = format!(
        "Showing {}-{} of {} (page {} of {})",
        info.first_item(),
        info.last_item(),
        info.total_results,
        info.page,
        info.total_pages
    );
    format!("\n{}\n", text.dimmed())
}

pub fn render_product_detail(p: &Product) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", p.title.bold()));
    out.push_str("--------------------------------\n");
    out.push_str(&format!("{:<10}{}\n", "ID:", p.id.to_string().yellow()));
    out.push_str(&format!("{:<10}{}\n", "Category:", p.category));
    out.push_str(&format!("{:<10}{}\n", "Price:", format_price(p.price).green()));

    let stock = match p.stock {
        Some(n) if n > 0 => format!("{} in stock", n).normal(),
        Some(_) => "out of stock".red(),
        None => "unknown".dimmed(),
    };
    out.push_str(&format!("{:<10}{}\n", "Stock:", stock));
    out.push_str(&format!(
        "{:<10}{:.1} ({} reviews)\n",
        "Rating:", p.rating.rate, p.rating.count
    ));

    let added = format_added(p);
    if !added.is_empty() {
        out.push_str(&format!("{:<10}{}\n", "Added:", added.dimmed()));
    }
    if !p.image.is_empty() {
        out.push_str(&format!("{:<10}{}\n", "Image:", p.image));
    }
    if !p.description.is_empty() {
        out.push('\n');
        out.push_str(&p.description);
        out.push('\n');
    }
    out
}

pub fn render_categories(names: &[String]) -> String {
    if names.is_empty() {
        return "No categories yet.\n".to_string();
    }
    names.iter().map(|name| format!("  {}\n", name)).collect()
}

pub fn render_delete_prompt(target: &DeleteTarget) -> String {
    format!(
        "Delete \"{}\" ({}) from {}? [y/N]: ",
        target.title.bold(),
        target.id,
        target.category
    )
}

fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("{:.2}", p),
        None => "n/a".to_string(),
    }
}

fn format_stock(stock: Option<i64>) -> String {
    match stock {
        Some(n) => n.to_string(),
        None => "n/a".to_string(),
    }
}

fn is_out_of_stock(p: &Product) -> bool {
    matches!(p.stock, Some(n) if n <= 0)
}

fn format_added(p: &Product) -> String {
    p.id.created_at().map(format_time_ago).unwrap_or_default()
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let text = truncate_to_width(s, width);
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn pad_left(s: &str, width: usize) -> String {
    let text = truncate_to_width(s, width);
    let padding = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(padding), text)
}
