//! Recurrence expansion for recurring events.
//!
//! Expands an event definition into the ordered set of concrete occurrences
//! it produces, bounded by the rule's end date or a default horizon. Pure
//! function of its input; callers own the resulting occurrence set.

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::event::{EventDefinition, PatternKind, Recurrence};
use crate::occurrence::Occurrence;

/// Months of lookahead when a rule has no explicit end date.
const DEFAULT_HORIZON_MONTHS: u32 = 12;

/// Expand a definition into its concrete occurrences.
///
/// A non-recurring definition yields exactly one occurrence mirroring its own
/// interval. Recurring definitions are walked one candidate date at a time
/// from the start date up to and including the horizon, with each matching
/// date producing one occurrence at the definition's original time-of-day.
///
/// An `interval` of zero is rejected at input normalization, not here.
pub fn expand(definition: &EventDefinition) -> Vec<Occurrence> {
    let start_date = definition.start.date();

    let rule = match normalize_rule(&definition.recurrence) {
        Some(rule) => rule,
        None => return vec![Occurrence::for_date(definition, start_date)],
    };

    let horizon = definition
        .recurrence
        .end_date()
        .unwrap_or_else(|| start_date + Months::new(DEFAULT_HORIZON_MONTHS));

    let mut occurrences = Vec::new();

    match rule {
        Rule::Daily { interval } => {
            // Cursor jumps by `interval` days at a time; skipped days are
            // never examined.
            let mut cursor = start_date;
            while cursor <= horizon {
                occurrences.push(Occurrence::for_date(definition, cursor));
                cursor += Duration::days(i64::from(interval));
            }
        }
        Rule::Weekly { interval, days } => {
            // Week blocks are counted in 7-day steps from the start date;
            // only blocks at multiples of `interval` contribute.
            let mut cursor = start_date;
            while cursor <= horizon {
                let block = (cursor - start_date).num_days() / 7;
                let weekday = cursor.weekday().num_days_from_sunday() as u8;
                if block % i64::from(interval) == 0 && days.contains(&weekday) {
                    occurrences.push(Occurrence::for_date(definition, cursor));
                }
                cursor += Duration::days(1);
            }
        }
        Rule::Monthly { day_of_month } => {
            // No clamping: a day the month lacks simply never matches.
            let mut cursor = start_date;
            while cursor <= horizon {
                if Some(cursor.day()) == day_of_month {
                    occurrences.push(Occurrence::for_date(definition, cursor));
                }
                cursor += Duration::days(1);
            }
        }
    }

    occurrences
}

/// Recurrence rule reduced to the three expansion shapes.
enum Rule<'a> {
    Daily { interval: u32 },
    Weekly { interval: u32, days: &'a BTreeSet<u8> },
    Monthly { day_of_month: Option<u32> },
}

/// Collapse `Recurrence` into a `Rule`, resolving custom patterns onto the
/// shape their `pattern_type` names. Returns `None` for non-recurring events.
fn normalize_rule(recurrence: &Recurrence) -> Option<Rule<'_>> {
    match recurrence {
        Recurrence::None => None,
        Recurrence::Daily { interval, .. } => Some(Rule::Daily {
            interval: *interval,
        }),
        Recurrence::Weekly {
            interval,
            days_of_week,
            ..
        } => Some(Rule::Weekly {
            interval: *interval,
            days: days_of_week,
        }),
        Recurrence::Monthly { day_of_month, .. } => Some(Rule::Monthly {
            day_of_month: Some(*day_of_month),
        }),
        Recurrence::Custom { pattern, .. } => match pattern.pattern_type {
            PatternKind::Daily => Some(Rule::Daily {
                interval: pattern.interval,
            }),
            PatternKind::Weekly => Some(Rule::Weekly {
                interval: pattern.interval,
                days: &pattern.days_of_week,
            }),
            PatternKind::Monthly => Some(Rule::Monthly {
                day_of_month: pattern.day_of_month,
            }),
        },
    }
}
