//! Look up a single definition document by id.

use std::path::Path;

use anyhow::{Context, Result};

use super::{StoredDefinition, document_path};

/// Find the definition with the given id.
///
/// Returns `Ok(None)` when no document exists for the id.
pub fn find(dir: &Path, id: &str) -> Result<Option<StoredDefinition>> {
    let path = document_path(dir, id);

    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let definition = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(Some(StoredDefinition { path, definition }))
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
            id: "lookup-me".to_string(),
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
    fn test_find_absent_is_none() {
        let dir = tempdir().unwrap();
        assert!(find(dir.path(), "missing").unwrap().is_none());
    }

    #[test]
    fn test_find_returns_stored_definition() {
        let dir = tempdir().unwrap();
        let definition = make_test_definition();
        super::super::create(dir.path(), &definition).unwrap();

        let found = find(dir.path(), "lookup-me").unwrap().unwrap();
        assert_eq!(found.definition, definition);
    }
}
