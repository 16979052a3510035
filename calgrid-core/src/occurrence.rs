//! Concrete dated instances derived from event definitions.
//!
//! Occurrences are ephemeral: they are regenerated wholesale from their
//! definition whenever it changes and are never stored on their own.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::event::EventDefinition;

/// One concrete instance of an event definition.
///
/// Display fields (`title`, `all_day`, `color`, `category`) are copied from
/// the definition so rendering needs no lookup. `source_definition_id` ties
/// the occurrence back to its family for grouping and conflict exclusion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occurrence {
    pub occurrence_id: String,
    pub source_definition_id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub all_day: bool,
    pub color: String,
    pub category: Option<String>,
}

/// Deterministic occurrence identity: `<definition id>_<YYYYMMDD>`.
///
/// All occurrences of one definition share the definition-id prefix.
pub fn occurrence_id(definition_id: &str, date: NaiveDate) -> String {
    format!("{}_{}", definition_id, date.format("%Y%m%d"))
}

impl Occurrence {
    /// Materialize the instance of `definition` whose start falls on `date`.
    ///
    /// The instance starts at the definition's original time-of-day and runs
    /// for the definition's base duration.
    pub fn for_date(definition: &EventDefinition, date: NaiveDate) -> Self {
        let start = date.and_time(definition.start.time());
        let end = start + definition.duration();

        Occurrence {
            occurrence_id: occurrence_id(&definition.id, date),
            source_definition_id: definition.id.clone(),
            title: definition.title.clone(),
            start,
            end,
            all_day: definition.all_day,
            color: definition.color.clone(),
            category: definition.category.clone(),
        }
    }

    /// Calendar date this occurrence starts on.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }
}
