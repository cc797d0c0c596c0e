use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Category name cannot be empty")]
    EmptyCategory,

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("No document to update: {collection}/{id}")]
    DocumentNotFound { collection: String, id: String },

    #[error("Invalid page size: {0:?} (expected a positive whole number)")]
    InvalidPageSize(String),

    #[error("Invalid page: {0} (pages start at 1)")]
    InvalidPage(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
