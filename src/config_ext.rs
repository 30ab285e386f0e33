//! App-specific configuration extensions.
//!
//! This module maps the core Config onto a catalog source.

use keycat_catalog::CatalogSource;

use crate::Config;

/// Extension trait for Config to pick the catalog source.
pub trait ConfigExt {
    /// Files named by the config, or the built-in catalog when either path
    /// is missing.
    fn catalog_source(&self) -> CatalogSource;
}

impl ConfigExt for Config {
    fn catalog_source(&self) -> CatalogSource {
        match self.catalog_paths() {
            Some((shortcuts, categories)) => CatalogSource::files(shortcuts, categories),
            None => CatalogSource::Embedded,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_default_config_uses_embedded() {
        assert_eq!(Config::default().catalog_source(), CatalogSource::Embedded);
    }

    #[test]
    fn test_half_configured_paths_use_embedded() {
        let config = Config {
            shortcuts_path: Some(PathBuf::from("/tmp/shortcuts.json")),
            ..Config::default()
        };
        assert_eq!(config.catalog_source(), CatalogSource::Embedded);
    }

    #[test]
    fn test_both_paths_use_files() {
        let config = Config {
            shortcuts_path: Some(PathBuf::from("/tmp/shortcuts.json")),
            categories_path: Some(PathBuf::from("/tmp/categories.json")),
            ..Config::default()
        };
        assert_eq!(
            config.catalog_source(),
            CatalogSource::files("/tmp/shortcuts.json", "/tmp/categories.json")
        );
    }
}
