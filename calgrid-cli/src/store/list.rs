//! List definition documents in the calendar directory.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use calgrid_core::EventDefinition;

use super::StoredDefinition;

/// List all definitions in the calendar directory.
///
/// Returns a map of id -> StoredDefinition for every parseable .json
/// document. Unreadable or malformed files are skipped.
pub fn list(dir: &Path) -> Result<HashMap<String, StoredDefinition>> {
    let mut definitions: HashMap<String, StoredDefinition> = HashMap::new();

    if !dir.exists() {
        return Ok(definitions);
    }

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().map(|e| e == "json").unwrap_or(false)
            && let Ok(content) = std::fs::read_to_string(&path)
            && let Ok(definition) = serde_json::from_str::<EventDefinition>(&content)
        {
            definitions.insert(definition.id.clone(), StoredDefinition { path, definition });
        }
    }

    Ok(definitions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calgrid_core::{DEFAULT_COLOR, Recurrence};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn make_test_definition(id: &str) -> EventDefinition {
        let day = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        EventDefinition {
            id: id.to_string(),
            title: "Test Event".to_string(),
            description: None,
            start: day.and_hms_opt(15, 0, 0).unwrap(),
            end: day.and_hms_opt(16, 0, 0).unwrap(),
            all_day: false,
            color: DEFAULT_COLOR.to_string(),
            category: None,
            recurrence: Recurrence::None,
        }
    }

    #[test]
    fn test_list_missing_directory_is_empty() {
        let dir = tempdir().unwrap();
        let listed = list(&dir.path().join("nope")).unwrap();
        assert!(listed.is_empty());
    }

    #[test]
    fn test_list_returns_all_documents() {
        let dir = tempdir().unwrap();
        super::super::create(dir.path(), &make_test_definition("a")).unwrap();
        super::super::create(dir.path(), &make_test_definition("b")).unwrap();

        let listed = list(dir.path()).unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.contains_key("a"));
        assert!(listed.contains_key("b"));
    }

    #[test]
    fn test_list_skips_malformed_documents() {
        let dir = tempdir().unwrap();
        super::super::create(dir.path(), &make_test_definition("a")).unwrap();
        std::fs::write(dir.path().join("broken.json"), "not json").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let listed = list(dir.path()).unwrap();
        assert_eq!(listed.len(), 1);
    }
}
