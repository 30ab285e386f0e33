// Re-export from sub-crates
pub use keycat_catalog::{
    Catalog, CatalogError, CatalogSource, CategoryWithShortcuts, DiagnosticSink, LinkReport,
    Statistics, TracingSink, format_key_combination, global, install_global, sanitize_input,
};
pub use keycat_core::{
    APP_NAME, Category, Config, ConfigManager, DEFAULT_LOG_LEVEL, Difficulty, Frequency,
    KeyCombination, LOG_ENV_VAR, ModifierKey, Shortcut,
};

// App-specific modules
pub mod check;
pub mod config_ext;
pub mod render;

// Version from this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
