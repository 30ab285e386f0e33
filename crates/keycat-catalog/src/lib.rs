//! Read-only query layer over a keyboard shortcut catalog.
//!
//! A [`Catalog`] holds the shortcut and category collections loaded once at
//! startup and answers lookups, filters, searches, random draws and
//! statistics over them. Queries never fail: an internal fault is reported
//! to a [`DiagnosticSink`] and the query returns its empty fallback.

mod catalog;
mod format;
mod global;
mod loader;
mod sample;
mod sanitize;
mod stats;
mod validate;

pub use catalog::{Catalog, CategoryWithShortcuts};
pub use format::{format_key_combination, format_raw_key_combination};
pub use global::{global, install_global};
pub use keycat_core::{Category, Difficulty, Frequency, KeyCombination, ModifierKey, Shortcut};
pub use loader::{CatalogSource, LinkReport, raw_records};
pub use sanitize::{MAX_INPUT_LEN, sanitize_input};
pub use stats::{DifficultyBreakdown, FrequencyBreakdown, Statistics};
pub use validate::{validate_category, validate_shortcut};

use thiserror::Error;

/// Errors that can occur while loading or reading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog document: {0}")]
    InvalidDocument(String),

    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Receives internal query failures.
///
/// Every query that hits a fault reports `(operation, error)` here before
/// returning its fallback value. Implement this to route failures somewhere
/// other than the tracing subscriber.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, operation: &str, error: &CatalogError);
}

/// Default sink, forwards failures to `tracing` at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, operation: &str, error: &CatalogError) {
        tracing::error!(operation, error = %error, "Catalog query failed");
    }
}
