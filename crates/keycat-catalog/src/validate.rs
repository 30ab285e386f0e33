//! Structural checks for raw catalog records.
//!
//! These run on untyped JSON before a record is trusted. A record that does
//! not match is an ordinary `false`, never an error.

use keycat_core::{Difficulty, Frequency};
use serde_json::Value;

fn is_string(value: &Value, field: &str) -> bool {
    value.get(field).is_some_and(Value::is_string)
}

fn is_array(value: &Value, field: &str) -> bool {
    value.get(field).is_some_and(Value::is_array)
}

fn is_one_of(value: &Value, field: &str, allowed: &[&str]) -> bool {
    value
        .get(field)
        .and_then(Value::as_str)
        .is_some_and(|s| allowed.contains(&s))
}

/// True when `candidate` has the shape of a shortcut record.
///
/// Requires string `id`, `category`, `name` and `description`, a `keys`
/// object with a `modifiers` array and string `key` and `displayFormat`, a
/// known `difficulty` and `frequency`, and a `tags` array. Other fields are
/// not inspected.
pub fn validate_shortcut(candidate: &Value) -> bool {
    let difficulties = Difficulty::ALL.map(|d| d.as_str());
    let frequencies = Frequency::ALL.map(|f| f.as_str());
    let keys_ok = candidate.get("keys").is_some_and(|keys| {
        is_array(keys, "modifiers") && is_string(keys, "key") && is_string(keys, "displayFormat")
    });

    ["id", "category", "name", "description"]
        .iter()
        .all(|field| is_string(candidate, field))
        && keys_ok
        && is_one_of(candidate, "difficulty", &difficulties)
        && is_array(candidate, "tags")
        && is_one_of(candidate, "frequency", &frequencies)
}

/// True when `candidate` has the shape of a category record.
///
/// Requires string `id`, `name`, `icon` and `description`, a `shortcutIds`
/// array of strings and a numeric `order`.
pub fn validate_category(candidate: &Value) -> bool {
    let ids_ok = candidate
        .get("shortcutIds")
        .and_then(Value::as_array)
        .is_some_and(|ids| ids.iter().all(Value::is_string));

    ["id", "name", "icon", "description"]
        .iter()
        .all(|field| is_string(candidate, field))
        && ids_ok
        && candidate.get("order").is_some_and(Value::is_number)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn valid_shortcut() -> Value {
        json!({
            "id": "test",
            "category": "general",
            "name": "Test",
            "description": "Test description",
            "keys": {"modifiers": ["cmd"], "key": "T", "displayFormat": "⌘T"},
            "difficulty": "beginner",
            "tags": ["test"],
            "frequency": "common"
        })
    }

    fn valid_category() -> Value {
        json!({
            "id": "test",
            "name": "Test Category",
            "icon": "TestIcon",
            "description": "Test category description",
            "shortcutIds": ["shortcut1", "shortcut2"],
            "order": 1
        })
    }

    #[test]
    fn test_accepts_conforming_shortcut() {
        assert!(validate_shortcut(&valid_shortcut()));

        let mut with_app = valid_shortcut();
        with_app["application"] = json!("Safari");
        assert!(validate_shortcut(&with_app));
    }

    #[test]
    fn test_rejects_shortcut_missing_fields() {
        let partial = json!({"id": "invalid", "category": "general", "name": "Invalid"});
        assert!(!validate_shortcut(&partial));

        for field in ["description", "keys", "difficulty", "tags", "frequency"] {
            let mut candidate = valid_shortcut();
            candidate.as_object_mut().unwrap().remove(field);
            assert!(!validate_shortcut(&candidate), "missing {field} accepted");
        }
    }

    #[test]
    fn test_rejects_unknown_levels() {
        let mut expert = valid_shortcut();
        expert["difficulty"] = json!("expert");
        assert!(!validate_shortcut(&expert));

        let mut always = valid_shortcut();
        always["frequency"] = json!("always");
        assert!(!validate_shortcut(&always));

        let mut shouting = valid_shortcut();
        shouting["difficulty"] = json!("BEGINNER");
        assert!(!validate_shortcut(&shouting));
    }

    #[test]
    fn test_rejects_malformed_keys() {
        let mut candidate = valid_shortcut();
        candidate["keys"] = json!("⌘T");
        assert!(!validate_shortcut(&candidate));

        candidate["keys"] = json!({"modifiers": "cmd", "key": "T", "displayFormat": "⌘T"});
        assert!(!validate_shortcut(&candidate));

        candidate["keys"] = json!({"modifiers": [], "key": 7, "displayFormat": "7"});
        assert!(!validate_shortcut(&candidate));
    }

    #[test]
    fn test_non_objects_are_rejected() {
        assert!(!validate_shortcut(&Value::Null));
        assert!(!validate_shortcut(&json!(["id", "category"])));
        assert!(!validate_category(&json!("general")));
    }

    #[test]
    fn test_category_validation() {
        assert!(validate_category(&valid_category()));

        let partial = json!({"id": "test", "name": "Test"});
        assert!(!validate_category(&partial));

        let mut not_array = valid_category();
        not_array["shortcutIds"] = json!("not-an-array");
        assert!(!validate_category(&not_array));

        let mut mixed_ids = valid_category();
        mixed_ids["shortcutIds"] = json!(["a", 2]);
        assert!(!validate_category(&mixed_ids));

        let mut string_order = valid_category();
        string_order["order"] = json!("1");
        assert!(!validate_category(&string_order));
    }
}
