use std::path::Path;

use anyhow::{Context, Result};
use calgrid_core::form::parse_datetime;
use calgrid_core::{expand, has_conflict, replace_family};
use owo_colors::OwoColorize;

use crate::store;

pub fn run(
    dir: &Path,
    id: &str,
    title: Option<String>,
    start: Option<String>,
    end: Option<String>,
) -> Result<()> {
    let stored = store::find(dir, id)?.with_context(|| format!("No event with id {}", id))?;
    let mut definition = stored.definition;

    if let Some(title) = title {
        if title.trim().is_empty() {
            anyhow::bail!("title must not be empty");
        }
        definition.title = title;
    }

    match (start, end) {
        (Some(start), Some(end)) => {
            definition.start = parse_datetime(&start)?;
            definition.end = parse_datetime(&end)?;
        }
        (Some(start), None) => {
            // Move the event, keeping its duration.
            let duration = definition.duration();
            definition.start = parse_datetime(&start)?;
            definition.end = definition.start + duration;
        }
        (None, Some(end)) => {
            definition.end = parse_datetime(&end)?;
        }
        (None, None) => {}
    }

    if definition.end <= definition.start {
        anyhow::bail!(
            "end ({}) must be after start ({})",
            definition.end,
            definition.start
        );
    }

    // Check-then-commit against everything except this event's own family.
    let all = store::list(dir)?;
    let occurrences: Vec<_> = all.values().flat_map(|s| expand(&s.definition)).collect();

    if has_conflict(definition.start, definition.end, &occurrences, Some(id)) {
        anyhow::bail!("Cannot move event: there is a conflict with an existing event.");
    }

    // The old family is discarded wholesale and regenerated from the
    // updated definition.
    let refreshed = replace_family(occurrences, id, expand(&definition));
    let family_size = refreshed
        .iter()
        .filter(|o| o.source_definition_id == id)
        .count();

    store::update(dir, &definition)?;

    println!("{}", format!("  Updated: {}", definition.title).green());
    println!(
        "  {}",
        format!("{} occurrences regenerated", family_size).dimmed()
    );

    Ok(())
}
