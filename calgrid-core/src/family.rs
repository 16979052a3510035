//! Occurrence family operations.
//!
//! A family is every occurrence materialized from one definition, identified
//! by `source_definition_id`. These operations take the caller's occurrence
//! set by value and return the new set; no shared state is involved.

use crate::occurrence::Occurrence;

/// Whether an edit or deletion targets a whole family or one instance.
///
/// The choice belongs to the caller (typically a UI decision); these
/// operations only carry it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyScope {
    All,
    SingleInstance,
}

/// Replace a definition's entire family with `replacement`.
///
/// Used after any edit to a definition's timing or rule: the old occurrences
/// are discarded wholesale and the freshly expanded set is appended.
pub fn replace_family(
    occurrences: Vec<Occurrence>,
    definition_id: &str,
    replacement: Vec<Occurrence>,
) -> Vec<Occurrence> {
    let mut kept = remove_family(occurrences, definition_id);
    kept.extend(replacement);
    kept
}

/// Remove every occurrence belonging to `definition_id`.
pub fn remove_family(occurrences: Vec<Occurrence>, definition_id: &str) -> Vec<Occurrence> {
    occurrences
        .into_iter()
        .filter(|o| o.source_definition_id != definition_id)
        .collect()
}

/// Remove the single occurrence with exactly `occurrence_id`.
pub fn remove_single(occurrences: Vec<Occurrence>, occurrence_id: &str) -> Vec<Occurrence> {
    occurrences
        .into_iter()
        .filter(|o| o.occurrence_id != occurrence_id)
        .collect()
}

/// Scope-driven removal: the whole family, or one instance by id.
pub fn remove_scoped(
    occurrences: Vec<Occurrence>,
    scope: ApplyScope,
    definition_id: &str,
    occurrence_id: &str,
) -> Vec<Occurrence> {
    match scope {
        ApplyScope::All => remove_family(occurrences, definition_id),
        ApplyScope::SingleInstance => remove_single(occurrences, occurrence_id),
    }
}
