//! Terminal formatting helpers for occurrences.

use calgrid_core::Occurrence;
use chrono::NaiveDate;

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
pub fn format_date_label(date: NaiveDate) -> String {
    let today = chrono::Local::now().date_naive();

    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// Format the time portion of an occurrence (e.g. "15:00" or "all-day")
pub fn format_time(occurrence: &Occurrence) -> String {
    if occurrence.all_day {
        "all-day".to_string()
    } else {
        format!("{:>7}", occurrence.start.format("%H:%M"))
    }
}

/// Format an occurrence's full span (e.g. "2024-01-08 10:00-11:00")
pub fn format_span(occurrence: &Occurrence) -> String {
    if occurrence.all_day {
        format!("{} all-day", occurrence.date().format("%Y-%m-%d"))
    } else {
        format!(
            "{} {}-{}",
            occurrence.date().format("%Y-%m-%d"),
            occurrence.start.format("%H:%M"),
            occurrence.end.format("%H:%M")
        )
    }
}
