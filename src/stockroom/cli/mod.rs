//! # CLI Layer
//!
//! One possible UI client for the catalog library, and the only place that
//! touches the terminal: argument parsing, rendering, the delete confirmation
//! prompt, logging setup and exit codes.
//!
//! - `setup`: clap definitions
//! - `commands`: dispatch and per-command handlers
//! - `render`: turns `CmdResult`s into terminal text
//! - `logger`: tracing subscriber installation

mod commands;
mod logger;
mod render;
mod setup;

pub use commands::run;
