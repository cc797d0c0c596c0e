//! # Stockroom Architecture
//!
//! Stockroom is a **UI-agnostic catalog administration library**: add products,
//! page through the catalog, look one product up, delete one. The `stockroom`
//! binary is one client of it; a web front-end could be another.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, asks for confirmation  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Parses typed-in ids and page sizes                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, categories, list, view, delete                      │
//! │  - Returns CmdResult or a typed CatalogError                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DocumentStore trait: get / set / update / list_all       │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Layout
//!
//! The catalog is bucketed by category: the `categories` collection holds one
//! document per category name, and each document embeds the full array of its
//! products. There is no per-product record, so every mutation reads the whole
//! category document, edits the array, and writes it back. Two writers on the
//! same category at once can lose an update; the last write wins.
//!
//! Product ids are creation timestamps in milliseconds, which makes "sort by id,
//! descending" the same as "newest first".
//!
//! ## Failures
//!
//! Nothing is swallowed. Commands log a diagnostic through `tracing` and return
//! a [`error::CatalogError`]; the caller decides what the user sees. Nothing is
//! retried.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Document store abstraction and implementations
//! - [`model`]: `Product`, `CategoryDocument`, `ProductDraft`
//! - [`pagination`]: Client-side page windows
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod pagination;
pub mod store;
