//! Logging setup for the binary.
//!
//! Diagnostics go to stderr so they never mix with rendered output.

use tracing_subscriber::EnvFilter;

/// EnvFilter directives, e.g. `STOCKROOM_LOG=debug`.
pub const LOG_ENV: &str = "STOCKROOM_LOG";

pub fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignored if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
