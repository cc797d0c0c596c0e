use crate::error::{CatalogError, Result};
use crate::pagination::DEFAULT_PER_PAGE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CATEGORY: &str = "electronics";

/// Configuration for stockroom, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockroomConfig {
    /// Page size used by `list` when none is given
    #[serde(default = "default_results_per_page")]
    pub results_per_page: usize,

    /// Category preselected for new products
    #[serde(default = "default_category")]
    pub default_category: String,
}

fn default_results_per_page() -> usize {
    DEFAULT_PER_PAGE
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Default for StockroomConfig {
    fn default() -> Self {
        Self {
            results_per_page: default_results_per_page(),
            default_category: default_category(),
        }
    }
}

impl StockroomConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CatalogError::Io)?;
        let config: StockroomConfig =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CatalogError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CatalogError::Serialization)?;
        fs::write(config_path, content).map_err(CatalogError::Io)?;
        Ok(())
    }

    pub fn exists<P: AsRef<Path>>(config_dir: P) -> bool {
        config_dir.as_ref().join(CONFIG_FILENAME).exists()
    }

    pub fn set_results_per_page(&mut self, value: &str) -> Result<()> {
        match value.trim().parse::<usize>() {
            Ok(n) if n > 0 => {
                self.results_per_page = n;
                Ok(())
            }
            _ => Err(CatalogError::InvalidPageSize(value.to_string())),
        }
    }

    pub fn set_default_category(&mut self, value: &str) -> Result<()> {
        let name = value.trim();
        if name.is_empty() {
            return Err(CatalogError::EmptyCategory);
        }
        self.default_category = name.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StockroomConfig::default();
        assert_eq!(config.results_per_page, 20);
        assert_eq!(config.default_category, "electronics");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = StockroomConfig::load(temp.path().join("missing")).unwrap();
        assert_eq!(config, StockroomConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let mut config = StockroomConfig::default();
        config.set_results_per_page("50").unwrap();
        config.set_default_category("  books ").unwrap();
        config.save(temp.path()).unwrap();

        let loaded = StockroomConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.results_per_page, 50);
        assert_eq!(loaded.default_category, "books");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"results_per_page": 5}"#).unwrap();

        let loaded = StockroomConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.results_per_page, 5);
        assert_eq!(loaded.default_category, "electronics");
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = StockroomConfig::default();
        assert!(config.set_results_per_page("0").is_err());
        assert!(config.set_results_per_page("many").is_err());
        assert!(config.set_default_category("   ").is_err());
        assert_eq!(config, StockroomConfig::default());
    }
}
