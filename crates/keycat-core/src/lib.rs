//! Core types and configuration for keycat.
//!
//! This crate provides the shortcut data model shared by the catalog query
//! layer and the command line front end. It carries no query logic.

mod config;
mod progress;
mod shortcut;

pub use config::{Config, ConfigManager};
pub use progress::{CategoryProgress, Theme, UserPreferences, UserProgress, UserStats};
pub use shortcut::{
    Category, Difficulty, Frequency, KeyCombination, ModifierKey, ParseLevelError, Shortcut,
};

/// Application name
pub const APP_NAME: &str = "keycat";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "KEYCAT_LOG";
