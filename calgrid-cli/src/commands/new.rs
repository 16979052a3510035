use std::path::Path;

use anyhow::Result;
use calgrid_core::form::{EventForm, RecurrenceForm, parse_datetime};
use calgrid_core::{expand, has_conflict};
use chrono::Duration;
use clap::Args;
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::store;

#[derive(Args)]
pub struct NewArgs {
    /// Event title
    pub title: Option<String>,

    /// Start date/time (e.g. "2025-03-20T15:00", or "2025-03-20" for all-day)
    #[arg(short, long)]
    pub start: Option<String>,

    /// End date/time; defaults to one hour after start (one day when all-day)
    #[arg(short, long)]
    pub end: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    /// Display color as a hex string
    #[arg(long)]
    pub color: Option<String>,

    #[arg(long)]
    pub all_day: bool,

    /// Repeat frequency: daily, weekly, monthly or custom
    #[arg(long, value_name = "FREQ")]
    pub repeat: Option<String>,

    /// Repeat every N days/weeks (with --repeat)
    #[arg(long, value_name = "N")]
    pub every: Option<u32>,

    /// Weekdays for weekly repeats, comma-separated (e.g. "mon,wed")
    #[arg(long, value_name = "DAYS", value_delimiter = ',')]
    pub on: Vec<String>,

    /// Day of month for monthly repeats
    #[arg(long, value_name = "DAY")]
    pub day_of_month: Option<u32>,

    /// Last date to generate occurrences for (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub until: Option<String>,

    /// Pattern type for --repeat custom: daily, weekly or monthly
    #[arg(long, value_name = "KIND")]
    pub custom_kind: Option<String>,
}

pub fn run(dir: &Path, args: NewArgs) -> Result<()> {
    let interactive = args.title.is_none() || args.start.is_none();

    // --- Title ---
    let title = match args.title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    // --- Start ---
    let start = match args.start {
        Some(s) => s,
        None => Input::<String>::new()
            .with_prompt("  When? (YYYY-MM-DDTHH:MM)")
            .interact_text()?,
    };

    // --- End ---
    let end = match args.end {
        Some(e) => e,
        None => default_end(&start, args.all_day)?,
    };

    // --- Recurrence ---
    let days_of_week = args
        .on
        .iter()
        .map(|day| parse_weekday(day))
        .collect::<Result<Vec<u8>>>()?;

    let recurrence = args.repeat.map(|frequency| RecurrenceForm {
        frequency,
        interval: args.every,
        days_of_week,
        day_of_month: args.day_of_month,
        end_date: args.until,
        custom_kind: args.custom_kind,
    });

    let form = EventForm {
        title,
        description: args.description,
        start,
        end,
        all_day: args.all_day,
        color: args.color,
        category: args.category,
        recurrence,
    };
    let definition = form.normalize(None)?;

    // Check-then-commit: the new event's base interval must be free.
    let stored = store::list(dir)?;
    let occurrences: Vec<_> = stored
        .values()
        .flat_map(|s| expand(&s.definition))
        .collect();

    if has_conflict(definition.start, definition.end, &occurrences, None) {
        anyhow::bail!(
            "There is a conflict with an existing event. Please choose a different time."
        );
    }

    let family_size = expand(&definition).len();
    store::create(dir, &definition)?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Created: {}", definition.title).green());
    if definition.is_recurring() {
        println!(
            "  {}",
            format!("{} occurrences through the horizon", family_size).dimmed()
        );
    }
    println!("  {}", format!("id: {}", definition.id).dimmed());

    Ok(())
}

/// Default end for an event given its raw start: one hour later, or one day
/// for all-day events.
fn default_end(start: &str, all_day: bool) -> Result<String> {
    let start = parse_datetime(start)?;
    let end = if all_day {
        start + Duration::days(1)
    } else {
        start + Duration::hours(1)
    };
    Ok(end.format("%Y-%m-%dT%H:%M").to_string())
}

/// Map a weekday name or number to Sunday = 0 numbering.
fn parse_weekday(s: &str) -> Result<u8> {
    let day = match s.trim().to_lowercase().as_str() {
        "sun" | "sunday" | "0" => 0,
        "mon" | "monday" | "1" => 1,
        "tue" | "tues" | "tuesday" | "2" => 2,
        "wed" | "wednesday" | "3" => 3,
        "thu" | "thur" | "thursday" | "4" => 4,
        "fri" | "friday" | "5" => 5,
        "sat" | "saturday" | "6" => 6,
        other => anyhow::bail!("Unknown weekday '{}'", other),
    };
    Ok(day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weekday() {
        assert_eq!(parse_weekday("sun").unwrap(), 0);
        assert_eq!(parse_weekday("Mon").unwrap(), 1);
        assert_eq!(parse_weekday("wednesday").unwrap(), 3);
        assert_eq!(parse_weekday("6").unwrap(), 6);
        assert!(parse_weekday("noday").is_err());
    }

    #[test]
    fn test_default_end_timed() {
        assert_eq!(
            default_end("2025-03-20T15:00", false).unwrap(),
            "2025-03-20T16:00"
        );
    }

    #[test]
    fn test_default_end_all_day() {
        assert_eq!(
            default_end("2025-03-20", true).unwrap(),
            "2025-03-21T00:00"
        );
    }
}
