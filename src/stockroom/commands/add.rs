use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::{CategoryDocument, ProductDraft, ProductId, CATEGORIES};
use crate::store::DocumentStore;
use tracing::{info, warn};

use super::helpers::load_category;

/// Which category a new product goes into: one picked from the existing list,
/// or a freshly typed name, which takes precedence when non-blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySelection {
    pub selected: String,
    pub typed: Option<String>,
}

impl CategorySelection {
    pub fn existing(name: impl Into<String>) -> Self {
        Self {
            selected: name.into(),
            typed: None,
        }
    }

    pub fn typed(name: impl Into<String>) -> Self {
        Self {
            selected: String::new(),
            typed: Some(name.into()),
        }
    }

    pub fn resolve(&self) -> Result<String> {
        let typed = self.typed.as_deref().map(str::trim).unwrap_or_default();
        let name = if typed.is_empty() {
            self.selected.trim()
        } else {
            typed
        };
        if name.is_empty() {
            return Err(CatalogError::EmptyCategory);
        }
        Ok(name.to_string())
    }
}

pub fn run<S: DocumentStore>(
    store: &mut S,
    draft: &mut ProductDraft,
    selection: &CategorySelection,
) -> Result<CmdResult> {
    run_with_id(store, draft, selection, ProductId::now())
}

/// Appends the drafted product to its category document, creating the
/// document on first use. One read, one write.
///
/// On success the draft is cleared. On failure nothing is written and the
/// draft is left as it was.
pub fn run_with_id<S: DocumentStore>(
    store: &mut S,
    draft: &mut ProductDraft,
    selection: &CategorySelection,
    id: ProductId,
) -> Result<CmdResult> {
    let category = selection
        .resolve()
        .inspect_err(|_| warn!("add aborted: category name is empty"))?;

    let product = draft.build(id, &category);
    let mut result = CmdResult::default();

    let existing = load_category(store, &category)
        .inspect_err(|e| warn!(category = %category, error = %e, "failed to read category"))?;

    let write = match existing {
        Some(mut doc) => {
            doc.products.push(product.clone());
            let fields = CategoryDocument::products_fields(&doc.products)?;
            store.update(CATEGORIES, &category, fields)
        }
        None => {
            let doc = CategoryDocument {
                name: category.clone(),
                products: vec![product.clone()],
            };
            result.add_message(CmdMessage::info(format!("Created category: {}", category)));
            store.set(CATEGORIES, &category, doc.to_fields()?)
        }
    };
    write.inspect_err(|e| warn!(category = %category, error = %e, "failed to add product"))?;

    info!(id = %product.id, category = %category, "product added");

    if product.price.is_none() {
        result.add_message(CmdMessage::warning(format!(
            "Price {:?} is not a number; stored as empty",
            draft.price
        )));
    }
    if product.stock.is_none() {
        result.add_message(CmdMessage::warning(format!(
            "Stock {:?} is not a whole number; stored as empty",
            draft.stock
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Product added with ID: {}",
        product.id
    )));

    draft.clear();
    Ok(result.with_affected_products(vec![product]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::load_category;
    use crate::store::memory::InMemoryStore;

    fn draft(title: &str) -> ProductDraft {
        ProductDraft {
            image: "https://example.com/a.png".into(),
            title: title.into(),
            price: "12.5".into(),
            description: "desc".into(),
            stock: "4".into(),
        }
    }

    fn add(store: &mut InMemoryStore, title: &str, category: &str, id: i64) -> Result<CmdResult> {
        run_with_id(
            store,
            &mut draft(title),
            &CategorySelection::existing(category),
            ProductId::new(id),
        )
    }

    #[test]
    fn first_product_creates_category_document() {
        let mut store = InMemoryStore::new();
        add(&mut store, "Dune", "books", 100).unwrap();

        let doc = load_category(&store, "books").unwrap().unwrap();
        assert_eq!(doc.name, "books");
        assert_eq!(doc.products.len(), 1);
        assert_eq!(doc.products[0].id, ProductId::new(100));
        assert_eq!(doc.products[0].category, "books");
        assert_eq!(store.list_all(CATEGORIES).unwrap().len(), 1);
    }

    #[test]
    fn second_product_appends_in_order() {
        let mut store = InMemoryStore::new();
        add(&mut store, "Dune", "books", 100).unwrap();
        add(&mut store, "Emma", "books", 200).unwrap();

        let doc = load_category(&store, "books").unwrap().unwrap();
        let ids: Vec<i64> = doc.products.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![100, 200]);
        assert_eq!(doc.products[0].title, "Dune");
    }

    #[test]
    fn one_write_per_add() {
        let mut store = InMemoryStore::new();
        add(&mut store, "Dune", "books", 100).unwrap();
        add(&mut store, "Emma", "books", 200).unwrap();
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn typed_category_wins_and_is_trimmed() {
        let mut store = InMemoryStore::new();
        let selection = CategorySelection {
            selected: "books".into(),
            typed: Some("  garden ".into()),
        };
        run_with_id(&mut store, &mut draft("Rake"), &selection, ProductId::new(1)).unwrap();

        assert!(load_category(&store, "garden").unwrap().is_some());
        assert!(load_category(&store, "books").unwrap().is_none());
    }

    #[test]
    fn blank_typed_category_falls_back_to_selection() {
        let selection = CategorySelection {
            selected: "books".into(),
            typed: Some("   ".into()),
        };
        assert_eq!(selection.resolve().unwrap(), "books");
    }

    #[test]
    fn empty_category_aborts_without_writing() {
        let mut store = InMemoryStore::new();
        let mut form = draft("Nothing");
        let err = run_with_id(
            &mut store,
            &mut form,
            &CategorySelection::existing("   "),
            ProductId::new(1),
        )
        .unwrap_err();

        assert!(matches!(err, CatalogError::EmptyCategory));
        assert_eq!(store.write_count(), 0);
        assert_eq!(form, draft("Nothing"));
    }

    #[test]
    fn success_clears_the_draft() {
        let mut store = InMemoryStore::new();
        let mut form = draft("Dune");
        run_with_id(
            &mut store,
            &mut form,
            &CategorySelection::existing("books"),
            ProductId::new(1),
        )
        .unwrap();
        assert_eq!(form, ProductDraft::default());
    }

    #[test]
    fn store_failure_is_returned_and_draft_kept() {
        let mut store = InMemoryStore::new();
        store.set_fail_writes(true);
        let mut form = draft("Dune");
        let err = run_with_id(
            &mut store,
            &mut form,
            &CategorySelection::existing("books"),
            ProductId::new(1),
        )
        .unwrap_err();

        assert!(matches!(err, CatalogError::Store(_)));
        assert_eq!(form, draft("Dune"));
        assert!(load_category(&store, "books").unwrap().is_none());
    }

    #[test]
    fn unparsable_numbers_are_stored_with_warning() {
        let mut store = InMemoryStore::new();
        let mut form = ProductDraft {
            title: "Mystery".into(),
            price: "ask".into(),
            stock: "some".into(),
            ..Default::default()
        };
        let result = run_with_id(
            &mut store,
            &mut form,
            &CategorySelection::existing("misc"),
            ProductId::new(5),
        )
        .unwrap();

        let product = &result.affected_products[0];
        assert_eq!(product.price, None);
        assert_eq!(product.stock, None);
        let warnings = result
            .messages
            .iter()
            .filter(|m| m.level == crate::commands::MessageLevel::Warning)
            .count();
        assert_eq!(warnings, 2);
    }
}
