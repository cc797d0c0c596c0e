use crate::api::{CatalogApi, StockroomPaths};
use crate::config::StockroomConfig;
use crate::error::{CatalogError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Overrides the data directory when set.
pub const HOME_ENV: &str = "STOCKROOM_HOME";

pub struct StockroomContext {
    pub api: CatalogApi<FileStore>,
    pub config: StockroomConfig,
}

/// Picks the data directory: an explicit path, then `$STOCKROOM_HOME`, then the
/// platform data dir (e.g. `~/.local/share/stockroom`).
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    resolve_data_dir_from(explicit, std::env::var_os(HOME_ENV).map(PathBuf::from))
}

fn resolve_data_dir_from(explicit: Option<&Path>, env_home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(home) = env_home.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(home);
    }
    ProjectDirs::from("com", "stockroom", "stockroom")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CatalogError::Store("Could not determine a data directory".to_string()))
}

pub fn initialize(data_dir: PathBuf) -> StockroomContext {
    debug!(data_dir = %data_dir.display(), "opening catalog store");

    let config = StockroomConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "unreadable config, using defaults");
        StockroomConfig::default()
    });

    let store = FileStore::new(data_dir.clone());
    let paths = StockroomPaths { data_dir };
    let api = CatalogApi::new(store, paths);

    StockroomContext { api, config }
}
