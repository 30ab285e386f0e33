//! Aggregate counts over the catalog.

use indexmap::IndexMap;
use keycat_core::{Difficulty, Frequency};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DifficultyBreakdown {
    pub beginner: usize,
    pub intermediate: usize,
    pub advanced: usize,
}

impl DifficultyBreakdown {
    pub(crate) fn add(&mut self, level: Difficulty) {
        match level {
            Difficulty::Beginner => self.beginner += 1,
            Difficulty::Intermediate => self.intermediate += 1,
            Difficulty::Advanced => self.advanced += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.beginner + self.intermediate + self.advanced
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyBreakdown {
    pub common: usize,
    pub occasional: usize,
    pub rare: usize,
}

impl FrequencyBreakdown {
    pub(crate) fn add(&mut self, level: Frequency) {
        match level {
            Frequency::Common => self.common += 1,
            Frequency::Occasional => self.occasional += 1,
            Frequency::Rare => self.rare += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.common + self.occasional + self.rare
    }
}

/// Catalog wide counts.
///
/// `Default` is the all-zero value returned when the catalog cannot be read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_shortcuts: usize,
    pub total_categories: usize,
    pub by_difficulty: DifficultyBreakdown,
    pub by_frequency: FrequencyBreakdown,
    /// Shortcut count per known category id, in category order
    pub by_category: IndexMap<String, usize>,
}
