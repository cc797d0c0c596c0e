use super::{DocumentStore, Fields, Snapshot};
use crate::error::{CatalogError, Result};
use std::collections::BTreeMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    documents: BTreeMap<(String, String), Fields>,
    fail_writes: bool,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set`/`update` fail, to exercise error paths.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes {
            return Err(CatalogError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl DocumentStore for InMemoryStore {
    fn get(&self, collection: &str, id: &str) -> Result<Option<Fields>> {
        Ok(self
            .documents
            .get(&(collection.to_string(), id.to_string()))
            .cloned())
    }

    fn set(&mut self, collection: &str, id: &str, fields: Fields) -> Result<()> {
        self.check_writable()?;
        self.documents
            .insert((collection.to_string(), id.to_string()), fields);
        self.writes += 1;
        Ok(())
    }

    fn update(&mut self, collection: &str, id: &str, fields: Fields) -> Result<()> {
        self.check_writable()?;
        let existing = self
            .documents
            .get_mut(&(collection.to_string(), id.to_string()))
            .ok_or_else(|| CatalogError::DocumentNotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        existing.extend(fields);
        self.writes += 1;
        Ok(())
    }

    fn list_all(&self, collection: &str) -> Result<Vec<Snapshot>> {
        Ok(self
            .documents
            .iter()
            .filter(|((c, _), _)| c == collection)
            .map(|((_, id), data)| Snapshot {
                id: id.clone(),
                data: data.clone(),
            })
            .collect())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{CategoryDocument, Product, ProductId, Rating, CATEGORIES};

    pub fn product(id: i64, title: &str, category: &str, price: f64) -> Product {
        Product {
            id: ProductId::new(id),
            image: format!("https://example.com/{}.png", id),
            title: title.to_string(),
            price: Some(price),
            description: format!("About {}", title),
            stock: Some(10),
            category: category.to_string(),
            rating: Rating::default(),
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Writes a category document holding the given products, in order.
        pub fn with_category(mut self, name: &str, products: Vec<Product>) -> Self {
            let doc = CategoryDocument {
                name: name.to_string(),
                products,
            };
            self.store
                .set(CATEGORIES, name, doc.to_fields().unwrap())
                .unwrap();
            self
        }

        /// Adds `count` products to `category` with ids `first_id..`.
        pub fn with_products(self, category: &str, first_id: i64, count: usize) -> Self {
            let products = (0..count as i64)
                .map(|i| {
                    product(
                        first_id + i,
                        &format!("{} item {}", category, i + 1),
                        category,
                        (i + 1) as f64,
                    )
                })
                .collect();
            self.with_category(category, products)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: serde_json::Value) -> Fields {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn get_missing_document_is_none() {
        let store = InMemoryStore::new();
        assert!(store.get("categories", "books").unwrap().is_none());
    }

    #[test]
    fn update_merges_top_level_fields() {
        let mut store = InMemoryStore::new();
        store
            .set("c", "a", fields(json!({"name": "a", "products": [1]})))
            .unwrap();
        store
            .update("c", "a", fields(json!({"products": [1, 2]})))
            .unwrap();

        let doc = store.get("c", "a").unwrap().unwrap();
        assert_eq!(doc["name"], json!("a"));
        assert_eq!(doc["products"], json!([1, 2]));
    }

    #[test]
    fn update_of_missing_document_fails() {
        let mut store = InMemoryStore::new();
        let err = store.update("c", "nope", Fields::new()).unwrap_err();
        assert!(matches!(err, CatalogError::DocumentNotFound { .. }));
    }

    #[test]
    fn list_all_is_scoped_and_ordered() {
        let mut store = InMemoryStore::new();
        store.set("c", "b", Fields::new()).unwrap();
        store.set("c", "a", Fields::new()).unwrap();
        store.set("other", "z", Fields::new()).unwrap();

        let ids: Vec<_> = store
            .list_all("c")
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn simulated_write_failure() {
        let mut store = InMemoryStore::new();
        store.set_fail_writes(true);
        assert!(store.set("c", "a", Fields::new()).is_err());
        assert_eq!(store.write_count(), 0);
    }
}
