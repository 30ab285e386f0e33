//! Reading catalog documents into typed collections.
//!
//! Documents are JSON objects holding a single array, `{"shortcuts": [..]}`
//! and `{"categories": [..]}`; a bare array is accepted too. Each record is
//! shape-checked before it is deserialized and bad records are skipped with
//! a warning instead of failing the whole load.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use keycat_core::{Category, Shortcut};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::validate::{validate_category, validate_shortcut};
use crate::{CatalogError, Result};

const EMBEDDED_SHORTCUTS: &str = include_str!("../data/shortcuts.json");
const EMBEDDED_CATEGORIES: &str = include_str!("../data/categories.json");

/// Where the catalog documents come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The catalog compiled into this crate
    Embedded,
    /// Two JSON files on disk
    Files {
        shortcuts: PathBuf,
        categories: PathBuf,
    },
    /// JSON documents already in memory
    Json {
        shortcuts: String,
        categories: String,
    },
}

impl CatalogSource {
    pub fn files(shortcuts: impl Into<PathBuf>, categories: impl Into<PathBuf>) -> Self {
        Self::Files {
            shortcuts: shortcuts.into(),
            categories: categories.into(),
        }
    }

    pub fn json(shortcuts: impl Into<String>, categories: impl Into<String>) -> Self {
        Self::Json {
            shortcuts: shortcuts.into(),
            categories: categories.into(),
        }
    }
}

/// Parsed contents of a source.
pub(crate) struct Loaded {
    pub shortcuts: Vec<Shortcut>,
    pub categories: Vec<Category>,
}

pub(crate) fn read_source(source: &CatalogSource) -> Result<Loaded> {
    let (shortcuts, categories) = match source {
        CatalogSource::Embedded => (
            parse_shortcuts(EMBEDDED_SHORTCUTS)?,
            parse_categories(EMBEDDED_CATEGORIES)?,
        ),
        CatalogSource::Files {
            shortcuts,
            categories,
        } => (
            parse_shortcuts(&read_file(shortcuts)?)?,
            parse_categories(&read_file(categories)?)?,
        ),
        CatalogSource::Json {
            shortcuts,
            categories,
        } => (parse_shortcuts(shortcuts)?, parse_categories(categories)?),
    };

    debug!(
        shortcuts = shortcuts.len(),
        categories = categories.len(),
        "Catalog loaded"
    );
    Ok(Loaded {
        shortcuts,
        categories,
    })
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })
}

pub(crate) fn parse_shortcuts(text: &str) -> Result<Vec<Shortcut>> {
    parse_records(text, "shortcuts", validate_shortcut)
}

pub(crate) fn parse_categories(text: &str) -> Result<Vec<Category>> {
    parse_records(text, "categories", validate_category)
}

/// Pulls the record array out of a `root_key` document without checking
/// the records.
pub fn raw_records(text: &str, root_key: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(records) => Ok(records),
        Value::Object(mut root) => match root.remove(root_key) {
            Some(Value::Array(records)) => Ok(records),
            Some(_) => Err(CatalogError::InvalidDocument(format!(
                "\"{root_key}\" is not an array"
            ))),
            None => Err(CatalogError::InvalidDocument(format!(
                "missing \"{root_key}\" array"
            ))),
        },
        _ => Err(CatalogError::InvalidDocument(format!(
            "expected an object with a \"{root_key}\" array"
        ))),
    }
}

fn parse_records<T: DeserializeOwned>(
    text: &str,
    root_key: &str,
    validate: fn(&Value) -> bool,
) -> Result<Vec<T>> {
    let records = raw_records(text, root_key)?;
    let mut parsed = Vec::with_capacity(records.len());

    for (index, raw) in records.into_iter().enumerate() {
        let id = raw
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        if !validate(&raw) {
            warn!(kind = root_key, index, id = %id, "Skipping record with invalid shape");
            continue;
        }

        match serde_json::from_value(raw) {
            Ok(record) => parsed.push(record),
            Err(err) => {
                warn!(kind = root_key, index, id = %id, error = %err, "Skipping unreadable record")
            }
        }
    }

    Ok(parsed)
}

/// Dangling references between the two collections.
///
/// Category membership is always derived from `Shortcut::category`; this
/// report only surfaces records that disagree with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkReport {
    /// Shortcut ids whose category is not a known category id
    pub orphaned_shortcuts: Vec<String>,
    /// `(category id, shortcut id)` where the listed shortcut does not exist
    pub missing_members: Vec<(String, String)>,
    /// `(category id, shortcut id)` where the listed shortcut belongs elsewhere
    pub misfiled_members: Vec<(String, String)>,
    /// Shortcut ids that appear more than once; lookups see the first
    pub duplicate_shortcut_ids: Vec<String>,
    /// Category ids that appear more than once; lookups see the first
    pub duplicate_category_ids: Vec<String>,
}

impl LinkReport {
    pub(crate) fn check(shortcuts: &[Shortcut], categories: &[Category]) -> Self {
        let mut report = Self::default();

        let mut owner: HashMap<&str, &str> = HashMap::new();
        for shortcut in shortcuts {
            if owner.contains_key(shortcut.id.as_str()) {
                report.duplicate_shortcut_ids.push(shortcut.id.clone());
            } else {
                owner.insert(&shortcut.id, &shortcut.category);
            }
        }

        let mut known: HashSet<&str> = HashSet::new();
        for category in categories {
            if !known.insert(&category.id) {
                report.duplicate_category_ids.push(category.id.clone());
            }
        }

        report.orphaned_shortcuts = shortcuts
            .iter()
            .filter(|s| !known.contains(s.category.as_str()))
            .map(|s| s.id.clone())
            .collect();

        for category in categories {
            for member in &category.shortcut_ids {
                let pair = (category.id.clone(), member.clone());
                match owner.get(member.as_str()) {
                    None => report.missing_members.push(pair),
                    Some(&actual) if actual != category.id => report.misfiled_members.push(pair),
                    Some(_) => {}
                }
            }
        }

        report
    }

    pub fn is_clean(&self) -> bool {
        self == &Self::default()
    }

    pub(crate) fn log(&self) {
        if self.is_clean() {
            return;
        }
        warn!(
            orphaned = ?self.orphaned_shortcuts,
            missing = ?self.missing_members,
            misfiled = ?self.misfiled_members,
            duplicate_shortcuts = ?self.duplicate_shortcut_ids,
            duplicate_categories = ?self.duplicate_category_ids,
            "Catalog has inconsistent references"
        );
    }
}
