//! # Command Layer
//!
//! The catalog's business logic. Each operation lives in its own submodule as
//! plain functions over a [`DocumentStore`](crate::store::DocumentStore).
//!
//! Commands:
//! - Operate on `Product` and `CategoryDocument`
//! - Return a structured [`CmdResult`] with products, page info and messages
//! - Log diagnostics through `tracing`, and return failures as typed errors
//!
//! Commands never print, never prompt and never exit. Confirmation before a
//! delete is the caller's job: [`delete::preview`] returns what would go, and
//! the UI decides whether to call [`delete::run`].
//!
//! ## Command Modules
//!
//! - [`add`]: Append a new product to its category document
//! - [`categories`]: Enumerate category names
//! - [`list`]: Flatten, sort, filter and paginate every product
//! - [`view`]: Locate a single product by id
//! - [`delete`]: Remove a product from its category document
//! - [`config`]: Show and change configuration
//! - [`init`]: Create the data directory
//! - [`helpers`]: Typed access to category documents

use crate::config::StockroomConfig;
use crate::model::Product;
use crate::pagination::PageInfo;
use std::path::PathBuf;

pub mod add;
pub mod categories;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod init;
pub mod list;
pub mod view;

#[derive(Debug, Clone)]
pub struct StockroomPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub listed_products: Vec<Product>,
    pub product: Option<Product>,
    pub categories: Vec<String>,
    pub page: Option<PageInfo>,
    pub config: Option<StockroomConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.product = Some(product);
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_page(mut self, page: PageInfo) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_config(mut self, config: StockroomConfig) -> Self {
        self.config = Some(config);
        self
    }
}
