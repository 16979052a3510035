//! User-authored event definition types.
//!
//! An `EventDefinition` is the canonical record the editor produces: one
//! document per event, recurring or not. Front ends work exclusively with
//! these types and derive display instances from them via `recurrence::expand`.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Default display color for events without an explicit one.
pub const DEFAULT_COLOR: &str = "#3788d8";

pub(crate) fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// A user-authored calendar event.
///
/// `id` is assigned at creation and never changes for the lifetime of the
/// definition. `start`/`end` are local wall-clock times with `end > start`
/// (enforced at normalization, assumed everywhere else).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDefinition {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Display-only flag; has no effect on expansion or conflicts.
    #[serde(default)]
    pub all_day: bool,
    #[serde(default = "default_color")]
    pub color: String,
    pub category: Option<String>,
    #[serde(default)]
    pub recurrence: Recurrence,
}

impl EventDefinition {
    /// Base duration, carried unchanged into every generated occurrence.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn is_recurring(&self) -> bool {
        !matches!(self.recurrence, Recurrence::None)
    }
}

/// Recurrence rule attached to an event definition.
///
/// `days_of_week` uses Sunday = 0 numbering. `end_date` is the inclusive
/// generation horizon; without one, expansion stops 12 months after the
/// event's start.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "frequency", rename_all = "lowercase")]
pub enum Recurrence {
    #[default]
    None,
    Daily {
        interval: u32,
        #[serde(default)]
        end_date: Option<NaiveDate>,
    },
    Weekly {
        interval: u32,
        // A document without days simply produces no occurrences.
        #[serde(default)]
        days_of_week: BTreeSet<u8>,
        #[serde(default)]
        end_date: Option<NaiveDate>,
    },
    Monthly {
        day_of_month: u32,
        #[serde(default)]
        end_date: Option<NaiveDate>,
    },
    Custom {
        pattern: CustomPattern,
        #[serde(default)]
        end_date: Option<NaiveDate>,
    },
}

impl Recurrence {
    pub fn end_date(&self) -> Option<NaiveDate> {
        match self {
            Recurrence::None => None,
            Recurrence::Daily { end_date, .. }
            | Recurrence::Weekly { end_date, .. }
            | Recurrence::Monthly { end_date, .. }
            | Recurrence::Custom { end_date, .. } => *end_date,
        }
    }
}

/// Free-form pattern for `Recurrence::Custom`.
///
/// Dispatches to the daily/weekly/monthly logic via `pattern_type`; the
/// fields the chosen type does not use are simply ignored. A weekly pattern
/// with an empty day set (or a monthly one without `day_of_month`) produces
/// zero occurrences rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPattern {
    #[serde(rename = "type")]
    pub pattern_type: PatternKind,
    pub interval: u32,
    #[serde(default)]
    pub days_of_week: BTreeSet<u8>,
    #[serde(default)]
    pub day_of_month: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Daily,
    Weekly,
    Monthly,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_definition() -> EventDefinition {
        let day = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        EventDefinition {
            id: "def-1".to_string(),
            title: "Standup".to_string(),
            description: None,
            start: day.and_hms_opt(9, 0, 0).unwrap(),
            end: day.and_hms_opt(9, 30, 0).unwrap(),
            all_day: false,
            color: DEFAULT_COLOR.to_string(),
            category: None,
            recurrence: Recurrence::None,
        }
    }

    #[test]
    fn test_duration() {
        let definition = make_definition();
        assert_eq!(definition.duration(), Duration::minutes(30));
    }

    #[test]
    fn test_is_recurring() {
        let mut definition = make_definition();
        assert!(!definition.is_recurring());

        definition.recurrence = Recurrence::Daily {
            interval: 1,
            end_date: None,
        };
        assert!(definition.is_recurring());
    }

    #[test]
    fn test_recurrence_serde_tagging() {
        let rule = Recurrence::Weekly {
            interval: 2,
            days_of_week: BTreeSet::from([1, 3]),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 1),
        };
        let json = serde_json::to_string(&rule).unwrap();
        assert!(json.contains("\"frequency\":\"weekly\""));

        let back: Recurrence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rule);
    }

    #[test]
    fn test_missing_recurrence_defaults_to_none() {
        let json = r#"{
            "id": "def-2",
            "title": "One-off",
            "description": null,
            "start": "2024-03-20T09:00:00",
            "end": "2024-03-20T10:00:00",
            "category": null
        }"#;
        let definition: EventDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(definition.recurrence, Recurrence::None);
        assert_eq!(definition.color, DEFAULT_COLOR);
    }
}
