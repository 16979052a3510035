//! Update definition documents in the calendar directory.

use std::path::Path;

use anyhow::Result;
use calgrid_core::EventDefinition;

use super::{StoredDefinition, document_path};

/// Overwrite an existing definition document.
///
/// Errors when no document with the definition's id exists; creation must go
/// through `create`.
pub fn update(dir: &Path, definition: &EventDefinition) -> Result<StoredDefinition> {
    let path = document_path(dir, &definition.id);

    if !path.exists() {
        anyhow::bail!("No event with id {}", definition.id);
    }

    super::create::create(dir, definition)
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
    fn test_update_missing_document_fails() {
        let dir = tempdir().unwrap();
        let definition = make_test_definition();

        assert!(update(dir.path(), &definition).is_err());
    }

    #[test]
    fn test_update_overwrites_document() {
        let dir = tempdir().unwrap();
        let mut definition = make_test_definition();
        super::super::create(dir.path(), &definition).unwrap();

        definition.title = "Renamed".to_string();
        update(dir.path(), &definition).unwrap();

        let found = super::super::find(dir.path(), &definition.id)
            .unwrap()
            .unwrap();
        assert_eq!(found.definition.title, "Renamed");
    }
}
