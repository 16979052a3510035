use std::path::Path;

use anyhow::Result;
use calgrid_core::form::parse_datetime;
use calgrid_core::{expand, has_conflict};
use owo_colors::OwoColorize;

use crate::store;

/// Probe an interval against every stored event's occurrences.
///
/// Exits non-zero on conflict so the result is scriptable.
pub fn run(dir: &Path, start: &str, end: &str, exclude: Option<&str>) -> Result<()> {
    let start = parse_datetime(start)?;
    let end = parse_datetime(end)?;

    let stored = store::list(dir)?;
    let occurrences: Vec<_> = stored
        .values()
        .flat_map(|s| expand(&s.definition))
        .collect();

    if has_conflict(start, end, &occurrences, exclude) {
        println!("{}", "Conflict: the interval overlaps an existing event".red());
        std::process::exit(1);
    }

    println!("{}", "Free: no conflicting events".green());
    Ok(())
}
