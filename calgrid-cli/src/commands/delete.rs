use std::path::Path;

use anyhow::{Context, Result};
use calgrid_core::{ApplyScope, Occurrence, expand, remove_scoped};
use dialoguer::Select;
use owo_colors::OwoColorize;

use crate::render;
use crate::store;

pub fn run(
    dir: &Path,
    id: &str,
    scope: Option<ApplyScope>,
    occurrence: Option<String>,
) -> Result<()> {
    let stored = store::find(dir, id)?.with_context(|| format!("No event with id {}", id))?;
    let definition = stored.definition;

    let scope = match scope {
        Some(scope) => scope,
        None if definition.is_recurring() => prompt_scope()?,
        None => ApplyScope::All,
    };

    let family = expand(&definition);

    match scope {
        ApplyScope::All => {
            store::delete(dir, id)?;
            println!(
                "{}",
                format!(
                    "  Deleted: {} ({} occurrences)",
                    definition.title,
                    family.len()
                )
                .green()
            );
        }
        ApplyScope::SingleInstance => {
            let occurrence_id = match occurrence {
                Some(o) => o,
                None => prompt_occurrence(&family)?,
            };
            if !family.iter().any(|o| o.occurrence_id == occurrence_id) {
                anyhow::bail!("No occurrence {} on event {}", occurrence_id, id);
            }

            let remaining =
                remove_scoped(family, ApplyScope::SingleInstance, id, &occurrence_id);

            println!(
                "{}",
                format!(
                    "  Removed {} ({} occurrences remain)",
                    occurrence_id,
                    remaining.len()
                )
                .green()
            );
            println!(
                "  {}",
                "calgrid does not store per-instance exceptions; the schedule itself is unchanged."
                    .yellow()
            );
        }
    }

    Ok(())
}

fn prompt_scope() -> Result<ApplyScope> {
    let choice = Select::new()
        .with_prompt("This is a recurring event. Delete all instances?")
        .items(&["All instances", "Only this instance"])
        .default(0)
        .interact()?;

    Ok(match choice {
        0 => ApplyScope::All,
        _ => ApplyScope::SingleInstance,
    })
}

fn prompt_occurrence(family: &[Occurrence]) -> Result<String> {
    if family.is_empty() {
        anyhow::bail!("The event has no occurrences");
    }

    let labels: Vec<String> = family.iter().map(render::format_span).collect();
    let choice = Select::new()
        .with_prompt("Which instance?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(family[choice].occurrence_id.clone())
}
