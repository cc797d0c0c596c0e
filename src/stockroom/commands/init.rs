use crate::commands::{CmdMessage, CmdResult, StockroomPaths};
use crate::config::StockroomConfig;
use crate::error::{CatalogError, Result};
use std::fs;

/// Creates the data directory and writes a default config if there is none.
pub fn run(paths: &StockroomPaths) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    fs::create_dir_all(dir).map_err(CatalogError::Io)?;

    let mut result = CmdResult::default();
    if StockroomConfig::exists(dir) {
        result.add_message(CmdMessage::info(format!(
            "Already initialized at {}",
            dir.display()
        )));
    } else {
        StockroomConfig::default().save(dir)?;
        result.add_message(CmdMessage::success(format!(
            "Initialized catalog store at {}",
            dir.display()
        )));
    }
    Ok(result)
}
