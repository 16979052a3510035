use std::path::Path;

use anyhow::Result;
use calgrid_core::form::parse_date;
use calgrid_core::{EventDefinition, Occurrence, expand};
use chrono::{Duration, NaiveDate};
use owo_colors::OwoColorize;

use crate::render;
use crate::store;

/// Days shown when no --to is given.
const DEFAULT_AGENDA_DAYS: i64 = 7;

pub fn run(
    dir: &Path,
    from: Option<String>,
    to: Option<String>,
    search: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let from = match from {
        Some(s) => parse_date(&s)?,
        None => today,
    };
    let to = match to {
        Some(s) => parse_date(&s)?,
        None => from + Duration::days(DEFAULT_AGENDA_DAYS),
    };

    let stored = store::list(dir)?;

    let mut occurrences: Vec<Occurrence> = stored
        .values()
        .filter(|s| matches_search(&s.definition, search.as_deref()))
        .filter(|s| matches_category(&s.definition, category.as_deref()))
        .flat_map(|s| expand(&s.definition))
        .filter(|o| o.date() >= from && o.date() <= to)
        .collect();

    occurrences.sort_by(|a, b| a.start.cmp(&b.start));

    if occurrences.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    // Group occurrences by day and print
    let mut current_date: Option<NaiveDate> = None;

    for occurrence in &occurrences {
        if current_date != Some(occurrence.date()) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", render::format_date_label(occurrence.date()).bold());
            current_date = Some(occurrence.date());
        }

        let time = render::format_time(occurrence);
        match &occurrence.category {
            Some(category) => println!(
                "  {} {} {}",
                time,
                occurrence.title,
                format!("[{}]", category).dimmed()
            ),
            None => println!("  {} {}", time, occurrence.title),
        }
    }

    Ok(())
}

/// Case-insensitive match against title and description.
fn matches_search(definition: &EventDefinition, term: Option<&str>) -> bool {
    let Some(term) = term else { return true };
    let term = term.to_lowercase();

    definition.title.to_lowercase().contains(&term)
        || definition
            .description
            .as_ref()
            .is_some_and(|d| d.to_lowercase().contains(&term))
}

fn matches_category(definition: &EventDefinition, category: Option<&str>) -> bool {
    match category {
        None => true,
        Some(c) => definition.category.as_deref() == Some(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calgrid_core::{DEFAULT_COLOR, Recurrence};

    fn make_definition() -> EventDefinition {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        EventDefinition {
            id: "def-1".to_string(),
            title: "Sprint Review".to_string(),
            description: Some("Demo of the quarter's work".to_string()),
            start: day.and_hms_opt(14, 0, 0).unwrap(),
            end: day.and_hms_opt(15, 0, 0).unwrap(),
            all_day: false,
            color: DEFAULT_COLOR.to_string(),
            category: Some("work".to_string()),
            recurrence: Recurrence::None,
        }
    }

    #[test]
    fn test_matches_search_title_and_description() {
        let definition = make_definition();
        assert!(matches_search(&definition, None));
        assert!(matches_search(&definition, Some("sprint")));
        assert!(matches_search(&definition, Some("QUARTER")));
        assert!(!matches_search(&definition, Some("standup")));
    }

    #[test]
    fn test_matches_category_exact() {
        let definition = make_definition();
        assert!(matches_category(&definition, None));
        assert!(matches_category(&definition, Some("work")));
        assert!(!matches_category(&definition, Some("home")));
    }
}
