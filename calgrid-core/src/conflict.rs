//! Interval conflict detection against an occurrence set.

use chrono::NaiveDateTime;

use crate::occurrence::Occurrence;

/// Closed-interval membership: `point` lies within `[start, end]`.
fn within(point: NaiveDateTime, start: NaiveDateTime, end: NaiveDateTime) -> bool {
    point >= start && point <= end
}

/// Report whether `[candidate_start, candidate_end]` overlaps any occurrence.
///
/// Two intervals conflict when either endpoint of one falls inside the other,
/// under closed-interval comparison: touching endpoints count. Occurrences
/// belonging to `exclude_definition_id` are skipped, so an event being edited
/// can be checked against everything but its own family. Stops at the first
/// match; only existence is reported.
pub fn has_conflict(
    candidate_start: NaiveDateTime,
    candidate_end: NaiveDateTime,
    occurrences: &[Occurrence],
    exclude_definition_id: Option<&str>,
) -> bool {
    occurrences
        .iter()
        .filter(|o| exclude_definition_id != Some(o.source_definition_id.as_str()))
        .any(|o| {
            within(candidate_start, o.start, o.end)
                || within(candidate_end, o.start, o.end)
                || within(o.start, candidate_start, candidate_end)
        })
}
