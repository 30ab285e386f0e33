//! Configuration management for keycat.
//!
//! The configuration decides where the catalog is read from and a few
//! defaults for the command line front end.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::APP_NAME;

/// Configuration structure for the application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Shortcut catalog JSON. Uses the built-in catalog when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcuts_path: Option<PathBuf>,

    /// Category catalog JSON. Uses the built-in catalog when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories_path: Option<PathBuf>,

    /// Number of shortcuts drawn for a practice round
    #[serde(
        default = "default_practice_count",
        skip_serializing_if = "is_default_practice_count"
    )]
    pub practice_count: u32,

    /// Log filter, e.g. "debug" or "keycat_catalog=trace"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

fn default_practice_count() -> u32 {
    10
}

fn is_default_practice_count(v: &u32) -> bool {
    *v == default_practice_count()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shortcuts_path: None,
            categories_path: None,
            practice_count: default_practice_count(),
            log_level: None,
        }
    }
}

impl Config {
    /// Both catalog paths, when the catalog should come from disk.
    pub fn catalog_paths(&self) -> Option<(&Path, &Path)> {
        match (&self.shortcuts_path, &self.categories_path) {
            (Some(shortcuts), Some(categories)) => {
                Some((shortcuts.as_path(), categories.as_path()))
            }
            _ => None,
        }
    }

    /// Get the configured log filter
    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new ConfigManager with the default configuration directory.
    pub fn new() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        Ok(Self { config_path })
    }

    /// Creates a ConfigManager for an explicit config file.
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            config_path: path.into(),
        }
    }

    /// Returns the default path to the configuration file.
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = config_dir().context("Failed to retrieve configuration directory")?;
        Ok(config_dir.join(APP_NAME).join(format!("{}.toml", APP_NAME)))
    }

    /// Loads the configuration from the config file or returns default.
    pub fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }

        let config_content = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config file at {:?}", self.config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file at {:?}", self.config_path))?;

        if config.shortcuts_path.is_some() != config.categories_path.is_some() {
            warn!(
                "Only one of shortcuts_path and categories_path is set. \
                 Both are needed to load a catalog from disk, using the built-in catalog."
            );
        }

        Ok(config)
    }

    /// Saves the configuration to the config file.
    pub fn save(&self, config: &Config) -> Result<()> {
        let config_dir = self
            .config_path
            .parent()
            .with_context(|| format!("Failed to get parent directory of {:?}", self.config_path))?;

        fs::create_dir_all(config_dir)
            .with_context(|| format!("Failed to create config directory at {:?}", config_dir))?;

        let serialized =
            toml::to_string_pretty(&config).context("Failed to serialize configuration")?;

        fs::write(&self.config_path, serialized)
            .with_context(|| format!("Failed to write config file at {:?}", self.config_path))?;

        Ok(())
    }

    /// Returns the path to the configuration file.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.shortcuts_path.is_none());
        assert!(config.catalog_paths().is_none());
        assert_eq!(config.practice_count, 10);
        assert_eq!(toml::from_str::<Config>("").unwrap(), config);
    }

    #[test]
    fn test_catalog_paths_need_both() {
        let config = Config {
            shortcuts_path: Some(PathBuf::from("shortcuts.json")),
            ..Default::default()
        };
        assert!(config.catalog_paths().is_none());

        let config = Config {
            categories_path: Some(PathBuf::from("categories.json")),
            ..config
        };
        let (shortcuts, categories) = config.catalog_paths().unwrap();
        assert_eq!(shortcuts, Path::new("shortcuts.json"));
        assert_eq!(categories, Path::new("categories.json"));
    }

    #[test]
    fn test_missing_file_gives_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("absent.toml"));
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn test_config_manager_save_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("nested").join("keycat.toml"));

        let config = Config {
            practice_count: 3,
            log_level: Some("debug".to_string()),
            ..Default::default()
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(config, loaded);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("keycat.toml");
        fs::write(&path, "practice_count = \"many\"").unwrap();

        let err = ConfigManager::with_path(&path).load().unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
