//! Record-by-record validation of catalog documents on disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use keycat_catalog::{raw_records, validate_category, validate_shortcut};
use serde_json::Value;

/// Which kind of catalog document a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Shortcuts,
    Categories,
}

impl DocumentKind {
    fn root_key(self) -> &'static str {
        match self {
            Self::Shortcuts => "shortcuts",
            Self::Categories => "categories",
        }
    }

    fn validate(self, record: &Value) -> bool {
        match self {
            Self::Shortcuts => validate_shortcut(record),
            Self::Categories => validate_category(record),
        }
    }
}

/// Validity of one record, by position in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCheck {
    pub index: usize,
    pub id: Option<String>,
    pub valid: bool,
}

/// Result of checking every record in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReport {
    pub kind: DocumentKind,
    pub records: Vec<RecordCheck>,
}

impl DocumentReport {
    pub fn invalid(&self) -> impl Iterator<Item = &RecordCheck> {
        self.records.iter().filter(|r| !r.valid)
    }

    pub fn is_valid(&self) -> bool {
        self.invalid().next().is_none()
    }
}

/// Checks the document at `path` record by record.
///
/// Fails only when the file cannot be read or is not a catalog document at
/// all; bad records show up in the report.
pub fn check_document(path: &Path, kind: DocumentKind) -> Result<DocumentReport> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let records = raw_records(&text, kind.root_key())
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let records = records
        .iter()
        .enumerate()
        .map(|(index, record)| RecordCheck {
            index,
            id: record.get("id").and_then(Value::as_str).map(str::to_owned),
            valid: kind.validate(record),
        })
        .collect();

    Ok(DocumentReport { kind, records })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_reports_each_record() {
        let file = write_temp(
            r#"{"shortcuts": [
                {"id": "ok", "category": "general", "name": "Ok", "description": "fine",
                 "keys": {"modifiers": ["cmd"], "key": "o", "displayFormat": "⌘O"},
                 "difficulty": "beginner", "tags": [], "frequency": "common"},
                {"id": "bad", "category": "general", "name": "Bad", "description": "nope",
                 "keys": {"modifiers": [], "key": "b", "displayFormat": "B"},
                 "difficulty": "expert", "tags": [], "frequency": "common"},
                {"name": "no id"}
            ]}"#,
        );

        let report = check_document(file.path(), DocumentKind::Shortcuts).unwrap();
        assert_eq!(report.records.len(), 3);
        assert!(report.records[0].valid);
        assert!(!report.is_valid());

        let invalid: Vec<_> = report.invalid().map(|r| (r.index, r.id.clone())).collect();
        assert_eq!(invalid, [(1, Some("bad".to_string())), (2, None)]);
    }

    #[test]
    fn test_valid_categories() {
        let file = write_temp(
            r#"[{"id": "general", "name": "General", "icon": "Command",
                 "description": "Everyday", "shortcutIds": ["a"], "order": 1}]"#,
        );
        let report = check_document(file.path(), DocumentKind::Categories).unwrap();
        assert!(report.is_valid());
        assert_eq!(report.records[0].id.as_deref(), Some("general"));
    }

    #[test]
    fn test_wrong_document_kind_fails() {
        let file = write_temp(r#"{"categories": []}"#);
        assert!(check_document(file.path(), DocumentKind::Shortcuts).is_err());
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = check_document(&dir.path().join("missing.json"), DocumentKind::Shortcuts)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
