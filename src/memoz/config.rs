use crate::error::{MemozError, Result};
use crate::query::{Filter, SortKey};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for memoz, stored in config.json next to the memo data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemozConfig {
    /// Filter applied when `list` is run without `--filter`.
    #[serde(default = "default_filter")]
    pub default_filter: String,

    /// Sort key applied when `list` is run without `--sort`.
    #[serde(default = "default_sort")]
    pub default_sort: String,
}

fn default_filter() -> String {
    Filter::All.to_string()
}

fn default_sort() -> String {
    SortKey::Updated.to_string()
}

impl Default for MemozConfig {
    fn default() -> Self {
        Self {
            default_filter: default_filter(),
            default_sort: default_sort(),
        }
    }
}

impl MemozConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MemozError::Io)?;
        let config: MemozConfig =
            serde_json::from_str(&content).map_err(MemozError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MemozError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MemozError::Serialization)?;
        fs::write(config_path, content).map_err(MemozError::Io)?;
        Ok(())
    }

    pub fn filter(&self) -> Filter {
        self.default_filter.parse().unwrap_or_default()
    }

    pub fn sort(&self) -> SortKey {
        self.default_sort.parse().unwrap_or_default()
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-filter" => {
                let filter: Filter = value.parse().map_err(MemozError::Api)?;
                self.default_filter = filter.to_string();
            }
            "default-sort" => {
                let sort: SortKey = value.parse().map_err(MemozError::Api)?;
                self.default_sort = sort.to_string();
            }
            other => return Err(MemozError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-filter" => Some(self.default_filter.clone()),
            "default-sort" => Some(self.default_sort.clone()),
            _ => None,
        }
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        vec![
            ("default-filter", self.default_filter.clone()),
            ("default-sort", self.default_sort.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_lists_all_memos_by_update_time() {
        let config = MemozConfig::default();
        assert_eq!(config.filter(), Filter::All);
        assert_eq!(config.sort(), SortKey::Updated);
    }

    #[test]
    fn set_validates_values() {
        let mut config = MemozConfig::default();
        config.set("default-sort", "title").unwrap();
        assert_eq!(config.sort(), SortKey::Title);

        assert!(config.set("default-sort", "sideways").is_err());
        assert!(config.set("unknown-key", "x").is_err());
    }

    #[test]
    fn load_missing_config_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = MemozConfig::load(dir.path().join("none")).unwrap();
        assert_eq!(config, MemozConfig::default());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = MemozConfig::default();
        config.set("default-filter", "favorites").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = MemozConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.filter(), Filter::Favorites);
    }
}
