use crate::error::Result;
use crate::model::{CategoryDocument, Product, CATEGORIES};
use crate::store::DocumentStore;

pub fn load_category<S: DocumentStore>(store: &S, name: &str) -> Result<Option<CategoryDocument>> {
    store
        .get(CATEGORIES, name)?
        .map(|fields| CategoryDocument::from_fields(name, fields))
        .transpose()
}

/// Every category document, ordered by category name.
pub fn load_all_categories<S: DocumentStore>(store: &S) -> Result<Vec<CategoryDocument>> {
    store
        .list_all(CATEGORIES)?
        .into_iter()
        .map(|snapshot| CategoryDocument::from_fields(&snapshot.id, snapshot.data))
        .collect()
}

/// All products of all categories, in storage order.
pub fn all_products<S: DocumentStore>(store: &S) -> Result<Vec<Product>> {
    Ok(load_all_categories(store)?
        .into_iter()
        .flat_map(|doc| doc.products)
        .collect())
}

/// Linear scan for a product whose id reads exactly as `id`.
///
/// Categories are scanned in name order and the first match wins.
pub fn find_product<S: DocumentStore>(store: &S, id: &str) -> Result<Option<Product>> {
    for doc in load_all_categories(store)? {
        if let Some(found) = doc.products.into_iter().find(|p| p.id.to_string() == id) {
            return Ok(Some(found));
        }
    }
    Ok(None)
}
