//! Normalization of raw form input into event definitions.
//!
//! UIs and the CLI collect strings and booleans; this module parses and
//! validates them into the `EventDefinition` shape the rest of the crate
//! assumes. Everything the expander takes for granted (non-empty title,
//! `end > start`, `interval >= 1`, weekday and day-of-month ranges) is
//! enforced here.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::error::{CalGridError, CalGridResult};
use crate::event::{CustomPattern, EventDefinition, PatternKind, Recurrence, default_color};

/// Raw event input as a UI form or CLI flags deliver it.
#[derive(Debug, Clone, Default)]
pub struct EventForm {
    pub title: String,
    pub description: Option<String>,
    /// `YYYY-MM-DDTHH:MM[:SS]`, or bare `YYYY-MM-DD` (midnight).
    pub start: String,
    pub end: String,
    pub all_day: bool,
    pub color: Option<String>,
    pub category: Option<String>,
    pub recurrence: Option<RecurrenceForm>,
}

/// Raw recurrence input; absent fields fall back to sensible defaults
/// (`interval` 1, no end date).
#[derive(Debug, Clone, Default)]
pub struct RecurrenceForm {
    /// "none", "daily", "weekly", "monthly" or "custom".
    pub frequency: String,
    pub interval: Option<u32>,
    pub days_of_week: Vec<u8>,
    pub day_of_month: Option<u32>,
    /// `YYYY-MM-DD`, inclusive.
    pub end_date: Option<String>,
    /// For "custom": the pattern type to dispatch to.
    pub custom_kind: Option<String>,
}

impl EventForm {
    /// Parse and validate this form into a definition.
    ///
    /// A fresh UUID is minted when `id` is not supplied (i.e. on creation;
    /// edits pass the existing id through unchanged).
    pub fn normalize(self, id: Option<String>) -> CalGridResult<EventDefinition> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(CalGridError::Validation("title must not be empty".into()));
        }

        let start = parse_datetime(&self.start)?;
        let end = parse_datetime(&self.end)?;
        if end <= start {
            return Err(CalGridError::Validation(format!(
                "end ({}) must be after start ({})",
                end, start
            )));
        }

        let recurrence = match self.recurrence {
            Some(form) => normalize_recurrence(form)?,
            None => Recurrence::None,
        };

        Ok(EventDefinition {
            id: id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            title,
            description: self.description.filter(|d| !d.trim().is_empty()),
            start,
            end,
            all_day: self.all_day,
            color: self.color.unwrap_or_else(default_color),
            category: self.category.filter(|c| !c.trim().is_empty()),
            recurrence,
        })
    }
}

fn normalize_recurrence(form: RecurrenceForm) -> CalGridResult<Recurrence> {
    let interval = form.interval.unwrap_or(1);
    let end_date = form.end_date.as_deref().map(parse_date).transpose()?;

    match form.frequency.as_str() {
        "" | "none" => Ok(Recurrence::None),
        "daily" => {
            check_interval(interval)?;
            Ok(Recurrence::Daily { interval, end_date })
        }
        "weekly" => {
            check_interval(interval)?;
            Ok(Recurrence::Weekly {
                interval,
                days_of_week: check_days_of_week(&form.days_of_week)?,
                end_date,
            })
        }
        "monthly" => {
            let day_of_month = form.day_of_month.ok_or_else(|| {
                CalGridError::Validation("monthly recurrence requires a day of month".into())
            })?;
            check_day_of_month(day_of_month)?;
            Ok(Recurrence::Monthly {
                day_of_month,
                end_date,
            })
        }
        "custom" => {
            check_interval(interval)?;
            let pattern_type = match form.custom_kind.as_deref() {
                Some("daily") => PatternKind::Daily,
                Some("weekly") => PatternKind::Weekly,
                Some("monthly") => PatternKind::Monthly,
                Some(other) => {
                    return Err(CalGridError::Validation(format!(
                        "unknown custom pattern type '{}'",
                        other
                    )));
                }
                None => {
                    return Err(CalGridError::Validation(
                        "custom recurrence requires a pattern type".into(),
                    ));
                }
            };
            if let Some(day) = form.day_of_month {
                check_day_of_month(day)?;
            }
            Ok(Recurrence::Custom {
                pattern: CustomPattern {
                    pattern_type,
                    interval,
                    days_of_week: check_days_of_week(&form.days_of_week)?,
                    day_of_month: form.day_of_month,
                },
                end_date,
            })
        }
        other => Err(CalGridError::Validation(format!(
            "unknown recurrence frequency '{}'",
            other
        ))),
    }
}

fn check_interval(interval: u32) -> CalGridResult<()> {
    if interval == 0 {
        return Err(CalGridError::Validation("interval must be at least 1".into()));
    }
    Ok(())
}

fn check_day_of_month(day: u32) -> CalGridResult<()> {
    if !(1..=31).contains(&day) {
        return Err(CalGridError::Validation(format!(
            "day of month must be 1-31, got {}",
            day
        )));
    }
    Ok(())
}

fn check_days_of_week(days: &[u8]) -> CalGridResult<BTreeSet<u8>> {
    for day in days {
        if *day > 6 {
            return Err(CalGridError::Validation(format!(
                "weekday must be 0-6 (Sunday = 0), got {}",
                day
            )));
        }
    }
    Ok(days.iter().copied().collect())
}

/// Parse `YYYY-MM-DDTHH:MM[:SS]`, or `YYYY-MM-DD` as midnight.
pub fn parse_datetime(s: &str) -> CalGridResult<NaiveDateTime> {
    let s = s.trim();

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_hms_opt(0, 0, 0).unwrap());
    }

    Err(CalGridError::Parse(format!(
        "Invalid date/time '{}'. Expected YYYY-MM-DDTHH:MM or YYYY-MM-DD",
        s
    )))
}

/// Parse `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> CalGridResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        CalGridError::Parse(format!("Invalid date '{}'. Expected YYYY-MM-DD", s))
    })
}
