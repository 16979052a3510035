//! Delete definition documents from the calendar directory.

use std::path::Path;

use anyhow::{Context, Result};

use super::document_path;

/// Delete the definition document with the given id.
pub fn delete(dir: &Path, id: &str) -> Result<()> {
    let path = document_path(dir, id);

    if !path.exists() {
        anyhow::bail!("No event with id {}", id);
    }

    std::fs::remove_file(&path)
        .with_context(|| format!("Failed to delete {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calgrid_core::{DEFAULT_COLOR, EventDefinition, Recurrence};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn make_test_definition() -> EventDefinition {
        let day = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        EventDefinition {
            id: "doomed".to_string(),
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
    fn test_delete_removes_document() {
        let dir = tempdir().unwrap();
        let stored = super::super::create(dir.path(), &make_test_definition()).unwrap();

        delete(dir.path(), "doomed").unwrap();
        assert!(!stored.path.exists());
    }

    #[test]
    fn test_delete_missing_document_fails() {
        let dir = tempdir().unwrap();
        assert!(delete(dir.path(), "missing").is_err());
    }
}
