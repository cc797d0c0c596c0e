use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::{CategoryDocument, ProductId, CATEGORIES};
use crate::store::DocumentStore;
use tracing::{info, warn};

use super::helpers::{find_product, load_category};

/// What a delete would remove, shown to the user before they confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: ProductId,
    /// The category recorded on the product, which names the document to rewrite
    pub category: String,
    pub title: String,
}

/// Locates the product so the caller can ask for confirmation.
///
/// Nothing is written. Call [`run`] with the returned target once confirmed.
pub fn preview<S: DocumentStore>(store: &S, id: &str) -> Result<DeleteTarget> {
    let product =
        find_product(store, id)?.ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))?;
    Ok(DeleteTarget {
        id: product.id,
        category: product.category,
        title: product.title,
    })
}

/// Rewrites the target's category document without the target.
///
/// An id that is no longer in the category is not an error: the array is
/// written back unchanged.
pub fn run<S: DocumentStore>(store: &mut S, target: &DeleteTarget) -> Result<CmdResult> {
    let Some(doc) = load_category(store, &target.category)? else {
        warn!(category = %target.category, "category does not exist");
        return Err(CatalogError::CategoryNotFound(target.category.clone()));
    };

    let (removed, kept): (Vec<_>, Vec<_>) =
        doc.products.into_iter().partition(|p| p.id == target.id);

    let fields = CategoryDocument::products_fields(&kept)?;
    store
        .update(CATEGORIES, &target.category, fields)
        .inspect_err(|e| warn!(id = %target.id, error = %e, "failed to delete product"))?;

    let mut result = CmdResult::default();
    if removed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Product {} was not in {}; nothing removed",
            target.id, target.category
        )));
    } else {
        info!(id = %target.id, category = %target.category, "product deleted");
        result.add_message(CmdMessage::success(format!(
            "Deleted: {} ({})",
            target.title, target.id
        )));
    }
    Ok(result.with_affected_products(removed))
}
