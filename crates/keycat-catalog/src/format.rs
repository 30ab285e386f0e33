//! Display formatting for key combinations.

use keycat_core::KeyCombination;
use serde_json::Value;

use crate::{CatalogError, DiagnosticSink};

/// Renders modifiers as symbols followed by the upper-cased key, e.g. "⌘⇧T".
///
/// Modifiers keep their given order and unknown modifiers appear as their
/// literal name. The key is used as stored, so surrounding spaces stay and an
/// empty key renders the modifiers alone.
pub fn format_key_combination(keys: &KeyCombination) -> String {
    let mut out: String = keys.modifiers.iter().map(|m| m.symbol()).collect();
    out.push_str(&keys.key.to_uppercase());
    out
}

/// Formats an untyped `keys` record.
///
/// A record that is not a key combination is reported to `sink` and
/// formats as its `displayFormat` string, or as nothing when that is
/// missing too.
pub fn format_raw_key_combination(raw: &Value, sink: &dyn DiagnosticSink) -> String {
    match serde_json::from_value::<KeyCombination>(raw.clone()) {
        Ok(keys) => format_key_combination(&keys),
        Err(err) => {
            sink.record("format_key_combination", &CatalogError::Json(err));
            raw.get("displayFormat")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use keycat_core::ModifierKey;
    use parking_lot::Mutex;
    use serde_json::json;

    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        operations: Mutex<Vec<String>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn record(&self, operation: &str, _error: &CatalogError) {
            self.operations.lock().push(operation.to_string());
        }
    }

    fn combo(modifiers: &[&str], key: &str, display: &str) -> KeyCombination {
        KeyCombination {
            modifiers: modifiers.iter().map(|m| ModifierKey::from(*m)).collect(),
            key: key.to_string(),
            display_format: display.to_string(),
        }
    }

    #[test]
    fn test_single_modifier() {
        assert_eq!(format_key_combination(&combo(&["cmd"], "C", "⌘C")), "⌘C");
        assert_eq!(format_key_combination(&combo(&["cmd"], "z", "⌘Z")), "⌘Z");
    }

    #[test]
    fn test_modifier_order_is_preserved() {
        assert_eq!(
            format_key_combination(&combo(&["cmd", "shift"], "t", "x")),
            "⌘⇧T"
        );
        assert_eq!(
            format_key_combination(&combo(&["cmd", "option", "ctrl", "shift"], "x", "")),
            "⌘⌥⌃⇧X"
        );
        assert_eq!(
            format_key_combination(&combo(&["shift", "cmd"], "a", "")),
            "⇧⌘A"
        );
    }

    #[test]
    fn test_unknown_modifier_passes_through() {
        assert_eq!(
            format_key_combination(&combo(&["fn", "cmd"], "f", "")),
            "fn⌘F"
        );
    }

    #[test]
    fn test_named_keys_are_upper_cased() {
        assert_eq!(
            format_key_combination(&combo(&["cmd"], "space", "⌘Space")),
            "⌘SPACE"
        );
        assert_eq!(format_key_combination(&combo(&[], "f11", "F11")), "F11");
    }

    #[test]
    fn test_key_is_not_trimmed_or_replaced() {
        assert_eq!(format_key_combination(&combo(&["cmd"], " x", "⌘X")), "⌘ X");
        assert_eq!(format_key_combination(&combo(&["cmd"], "", "DF")), "⌘");
        assert_eq!(format_key_combination(&combo(&[], "", "DF")), "");
    }

    #[test]
    fn test_raw_combination_formats_like_typed() {
        let sink = RecordingSink::default();
        let raw = json!({"modifiers": ["cmd", "shift"], "key": "t", "displayFormat": "x"});
        assert_eq!(format_raw_key_combination(&raw, &sink), "⌘⇧T");
        assert!(sink.operations.lock().is_empty());
    }

    #[test]
    fn test_malformed_raw_combination_falls_back_and_reports() {
        let sink = RecordingSink::default();

        let no_key = json!({"modifiers": ["cmd"], "displayFormat": "⌘␣"});
        assert_eq!(format_raw_key_combination(&no_key, &sink), "⌘␣");

        let bad_modifiers = json!({"modifiers": "cmd", "key": "c"});
        assert_eq!(format_raw_key_combination(&bad_modifiers, &sink), "");

        assert_eq!(
            *sink.operations.lock(),
            ["format_key_combination", "format_key_combination"]
        );
    }
}
