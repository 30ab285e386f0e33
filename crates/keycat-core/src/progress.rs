//! Practice progress and preference records.
//!
//! These are part of the data model only; the catalog never reads or
//! writes them.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Practice history for one shortcut.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub shortcut_id: String,
    pub attempts: u32,
    pub successes: u32,
    pub last_practiced: DateTime<Utc>,
    pub mastered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl UserProgress {
    /// Fraction of attempts that succeeded, 0 before the first attempt.
    pub fn success_rate(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        f64::from(self.successes) / f64::from(self.attempts)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgress {
    pub category_id: String,
    pub total_shortcuts: u32,
    pub learned_shortcuts: u32,
    pub mastered_shortcuts: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_learned: u32,
    pub total_mastered: u32,
    pub streak_days: u32,
    pub last_practice_date: DateTime<Utc>,
    /// Keyed by category id
    pub category_progress: HashMap<String, CategoryProgress>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub theme: Theme,
    /// Shortcuts per practice session
    #[serde(default = "default_session_length")]
    pub practice_session_length: u32,
    #[serde(default = "default_true")]
    pub show_keyboard_visual: bool,
    #[serde(default)]
    pub sound_enabled: bool,
}

fn default_session_length() -> u32 {
    15
}

fn default_true() -> bool {
    true
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            practice_session_length: default_session_length(),
            show_keyboard_visual: true,
            sound_enabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_success_rate() {
        let mut progress = UserProgress {
            shortcut_id: "general-copy".to_string(),
            attempts: 10,
            successes: 8,
            last_practiced: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            mastered: false,
            notes: Some("Getting better at this".to_string()),
        };
        assert!((progress.success_rate() - 0.8).abs() < f64::EPSILON);

        progress.attempts = 0;
        progress.successes = 0;
        assert_eq!(progress.success_rate(), 0.0);
    }

    #[test]
    fn test_preferences_defaults_fill_missing_fields() {
        let prefs: UserPreferences = serde_json::from_str(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.practice_session_length, 15);
        assert!(prefs.show_keyboard_visual);
        assert!(!prefs.sound_enabled);
        assert_eq!(UserPreferences::default().theme, Theme::System);
    }

    #[test]
    fn test_user_stats_camel_case() {
        let stats: UserStats = serde_json::from_str(
            r#"{
                "totalLearned": 25,
                "totalMastered": 10,
                "streakDays": 5,
                "lastPracticeDate": "2024-01-15T00:00:00Z",
                "categoryProgress": {
                    "finder": {
                        "categoryId": "finder",
                        "totalShortcuts": 15,
                        "learnedShortcuts": 8,
                        "masteredShortcuts": 5
                    }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(stats.streak_days, 5);
        assert_eq!(stats.category_progress["finder"].mastered_shortcuts, 5);
    }
}
