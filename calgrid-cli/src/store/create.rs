//! Create definition documents in the calendar directory.

use std::path::Path;

use anyhow::{Context, Result};
use calgrid_core::EventDefinition;

use super::{StoredDefinition, document_path};

/// Create a new definition document in the calendar directory.
///
/// The directory is created on first use. Returns the created
/// StoredDefinition.
pub fn create(dir: &Path, definition: &EventDefinition) -> Result<StoredDefinition> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = document_path(dir, &definition.id);
    let content = serde_json::to_string_pretty(definition)?;

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(StoredDefinition {
        path,
        definition: definition.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use calgrid_core::{DEFAULT_COLOR, Recurrence};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn make_test_definition() -> EventDefinition {
        let day = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        EventDefinition {
            id: "test-definition-123".to_string(),
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
    fn test_create_writes_document() {
        let dir = tempdir().unwrap();
        let definition = make_test_definition();

        let stored = create(dir.path(), &definition).unwrap();

        assert!(stored.path.exists());
        assert_eq!(
            stored.path.file_name().unwrap(),
            "test-definition-123.json"
        );
    }

    #[test]
    fn test_create_round_trips() {
        let dir = tempdir().unwrap();
        let definition = make_test_definition();
        create(dir.path(), &definition).unwrap();

        let found = super::super::find(dir.path(), &definition.id)
            .unwrap()
            .unwrap();
        assert_eq!(found.definition, definition);
    }
}
