use crate::commands::{CmdMessage, CmdResult, StockroomPaths};
use crate::config::StockroomConfig;
use crate::error::{CatalogError, Result};

pub const KEY_RESULTS_PER_PAGE: &str = "results-per-page";
pub const KEY_DEFAULT_CATEGORY: &str = "default-category";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &StockroomPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = StockroomConfig::load(&paths.data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = value_of(&config, &key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
        }
        ConfigAction::Set(key, value) => {
            match key.as_str() {
                KEY_RESULTS_PER_PAGE => config.set_results_per_page(&value)?,
                KEY_DEFAULT_CATEGORY => config.set_default_category(&value)?,
                _ => return Err(unknown_key(&key)),
            }
            config.save(&paths.data_dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                value_of(&config, &key)?
            )));
        }
    }

    Ok(result.with_config(config))
}

fn value_of(config: &StockroomConfig, key: &str) -> Result<String> {
    match key {
        KEY_RESULTS_PER_PAGE => Ok(config.results_per_page.to_string()),
        KEY_DEFAULT_CATEGORY => Ok(config.default_category.clone()),
        _ => Err(unknown_key(key)),
    }
}

fn unknown_key(key: &str) -> CatalogError {
    CatalogError::Api(format!(
        "Unknown config key: {} (expected {} or {})",
        key, KEY_RESULTS_PER_PAGE, KEY_DEFAULT_CATEGORY
    ))
}
