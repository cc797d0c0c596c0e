//! # API Facade
//!
//! The single entry point for catalog operations, whatever the UI. The facade
//! dispatches to the command layer and turns user text (page sizes, ids) into
//! typed values. It holds no business logic and does no I/O of its own.
//!
//! `CatalogApi<S: DocumentStore>` is generic over the storage backend:
//! - Production: `CatalogApi<FileStore>`
//! - Testing: `CatalogApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::ProductDraft;
use crate::pagination::Pagination;
use crate::store::DocumentStore;

pub struct CatalogApi<S: DocumentStore> {
    store: S,
    paths: commands::StockroomPaths,
}

impl<S: DocumentStore> CatalogApi<S> {
    pub fn new(store: S, paths: commands::StockroomPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_product(
        &mut self,
        draft: &mut ProductDraft,
        selection: &CategorySelection,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft, selection)
    }

    pub fn categories(&self) -> Result<commands::CmdResult> {
        commands::categories::run(&self.store)
    }

    /// One page of the catalog. `per_page` is the page size as typed.
    pub fn list_products(
        &self,
        query: ListQuery,
        page: usize,
        per_page: &str,
    ) -> Result<commands::CmdResult> {
        let pagination = Pagination::parse(page, per_page)?;
        commands::list::run(&self.store, query, &pagination)
    }

    /// A fetched listing that can be paged repeatedly without touching the store.
    pub fn listing(&self, query: ListQuery) -> Result<Listing> {
        Listing::fetch(&self.store, query)
    }

    pub fn refetch(&self, listing: &mut Listing) -> Result<()> {
        listing.refetch(&self.store)
    }

    pub fn view_product(&self, id: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id.trim())
    }

    pub fn preview_delete(&self, id: &str) -> Result<DeleteTarget> {
        commands::delete::preview(&self.store, id.trim())
    }

    pub fn delete_product(&mut self, target: &DeleteTarget) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, target)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn paths(&self) -> &commands::StockroomPaths {
        &self.paths
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::add::CategorySelection;
pub use crate::commands::config::ConfigAction;
pub use crate::commands::delete::DeleteTarget;
pub use crate::commands::list::{ListQuery, Listing, SortOrder};
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, StockroomPaths};
