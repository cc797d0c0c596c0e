use crate::commands::CmdResult;
use crate::error::{CatalogError, Result};
use crate::store::DocumentStore;
use tracing::info;

use super::helpers::find_product;

/// Looks a product up by the id text it was addressed with.
///
/// Every category is scanned, so the cost grows with the whole catalog.
pub fn run<S: DocumentStore>(store: &S, id: &str) -> Result<CmdResult> {
    match find_product(store, id)? {
        Some(product) => Ok(CmdResult::default().with_product(product)),
        None => {
            info!(id, "product not found");
            Err(CatalogError::ProductNotFound(id.to_string()))
        }
    }
}
