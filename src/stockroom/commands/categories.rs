use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::CATEGORIES;
use crate::store::DocumentStore;

/// Names of every category document, the choices offered when adding a product.
pub fn run<S: DocumentStore>(store: &S) -> Result<CmdResult> {
    let names = store
        .list_all(CATEGORIES)?
        .into_iter()
        .map(|snapshot| snapshot.id)
        .collect();
    Ok(CmdResult::default().with_categories(names))
}
