//! Shortcut and category records.
//!
//! Field names follow the camelCase layout of the catalog JSON so records
//! deserialize without a translation step.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How much practice a shortcut takes to learn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Every level, easiest first.
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

/// How often a shortcut comes up in day to day use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Common,
    Occasional,
    Rare,
}

impl Frequency {
    /// Every level, most frequent first.
    pub const ALL: [Frequency; 3] = [Self::Common, Self::Occasional, Self::Rare];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Occasional => "occasional",
            Self::Rare => "rare",
        }
    }
}

/// Returned when a difficulty or frequency name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} level: {value:?}")]
pub struct ParseLevelError {
    kind: &'static str,
    value: String,
}

impl FromStr for Difficulty {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(ParseLevelError {
                kind: "difficulty",
                value: s.to_owned(),
            }),
        }
    }
}

impl FromStr for Frequency {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "common" => Ok(Self::Common),
            "occasional" => Ok(Self::Occasional),
            "rare" => Ok(Self::Rare),
            _ => Err(ParseLevelError {
                kind: "frequency",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A modifier key held together with the base key.
///
/// Names outside the known set are kept verbatim in `Other` so a catalog
/// with an unexpected modifier still loads and displays something sensible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ModifierKey {
    Cmd,
    Option,
    Ctrl,
    Shift,
    Other(String),
}

impl ModifierKey {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cmd => "cmd",
            Self::Option => "option",
            Self::Ctrl => "ctrl",
            Self::Shift => "shift",
            Self::Other(name) => name,
        }
    }

    /// Display symbol for the modifier, or the literal name when unknown.
    pub fn symbol(&self) -> &str {
        match self {
            Self::Cmd => "⌘",
            Self::Option => "⌥",
            Self::Ctrl => "⌃",
            Self::Shift => "⇧",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for ModifierKey {
    fn from(name: String) -> Self {
        match name.as_str() {
            "cmd" => Self::Cmd,
            "option" => Self::Option,
            "ctrl" => Self::Ctrl,
            "shift" => Self::Shift,
            _ => Self::Other(name),
        }
    }
}

impl From<&str> for ModifierKey {
    fn from(name: &str) -> Self {
        Self::from(name.to_owned())
    }
}

impl From<ModifierKey> for String {
    fn from(key: ModifierKey) -> Self {
        match key {
            ModifierKey::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ModifierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modifiers plus a single base key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyCombination {
    /// Modifiers in display order. Duplicates are allowed.
    pub modifiers: Vec<ModifierKey>,
    /// Base key token, stored as written in the source.
    pub key: String,
    /// Precomputed display string, e.g. "⌘⇧A"
    pub display_format: String,
}

/// A single documented keyboard command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortcut {
    pub id: String,
    /// Id of the owning [`Category`].
    pub category: String,
    pub name: String,
    pub description: String,
    pub keys: KeyCombination,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub frequency: Frequency,
    /// Program the shortcut belongs to. `None` means system-wide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
}

impl Shortcut {
    /// Case-insensitive exact tag match. `tag` must already be lower-cased.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

/// A named grouping of shortcuts.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Symbolic icon name
    pub icon: String,
    pub description: String,
    /// Declared members. Lookups group by [`Shortcut::category`] instead.
    pub shortcut_ids: Vec<String>,
    /// Display position, any JSON number. Not required to be unique.
    pub order: f64,
}
