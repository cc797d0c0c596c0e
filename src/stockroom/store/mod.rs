//! # Storage Layer
//!
//! The catalog lives in a document-oriented store: named collections of JSON
//! documents keyed by string ids. The [`DocumentStore`] trait exposes exactly the
//! four primitives the catalog needs, so the command layer never knows whether it
//! talks to disk or memory.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON file per document
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── config.json
//! └── categories/
//!     ├── books.json
//!     └── men%27s%20clothing.json
//! ```
//!
//! Document ids are escaped into file names, so any category name is a valid id.

use crate::error::Result;
use serde_json::{Map, Value};

pub mod fs;
pub mod memory;

/// The top-level fields of a document.
pub type Fields = Map<String, Value>;

/// A document read back from a collection listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub id: String,
    pub data: Fields,
}

/// Abstract interface for document storage.
pub trait DocumentStore {
    /// Fetch a document. `Ok(None)` means it does not exist.
    fn get(&self, collection: &str, id: &str) -> Result<Option<Fields>>;

    /// Create or overwrite a document.
    fn set(&mut self, collection: &str, id: &str, fields: Fields) -> Result<()>;

    /// Merge top-level fields into an existing document.
    /// Fails with `DocumentNotFound` if the document does not exist.
    fn update(&mut self, collection: &str, id: &str, fields: Fields) -> Result<()>;

    /// Every document in a collection, ordered by id.
    fn list_all(&self, collection: &str) -> Result<Vec<Snapshot>>;
}
