mod commands;
mod render;
mod store;

use std::path::PathBuf;

use anyhow::Result;
use calgrid_core::ApplyScope;
use calgrid_core::config::GlobalConfig;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "calgrid")]
#[command(about = "Manage calendar events with recurrence and conflict detection")]
struct Cli {
    /// Directory holding event documents (defaults to the configured calendar dir)
    #[arg(long, global = true, value_name = "DIR")]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new event
    New(commands::new::NewArgs),
    /// Show upcoming events as an agenda
    Events {
        /// Show events from this date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        from: Option<String>,

        /// Show events until this date (YYYY-MM-DD, defaults to a week out)
        #[arg(long)]
        to: Option<String>,

        /// Only events whose title or description contains this term
        #[arg(long)]
        search: Option<String>,

        /// Only events in this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Re-time or rename an event, regenerating its occurrences
    Update {
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New start (YYYY-MM-DDTHH:MM); without --end the duration is kept
        #[arg(long)]
        start: Option<String>,

        /// New end (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        end: Option<String>,
    },
    /// Delete an event, entirely or a single instance
    Delete {
        id: String,

        /// Whether to delete all instances or only one
        #[arg(long, value_enum)]
        scope: Option<ScopeArg>,

        /// Occurrence id (<id>_YYYYMMDD) when scope is "this"
        #[arg(long)]
        occurrence: Option<String>,
    },
    /// Check an interval for conflicts without committing anything
    Check {
        /// Candidate start (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        start: String,

        /// Candidate end (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        end: String,

        /// Definition id to leave out of the check (the event being edited)
        #[arg(long)]
        exclude: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ScopeArg {
    /// The definition and every instance
    All,
    /// One instance only
    This,
}

impl From<ScopeArg> for ApplyScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::All => ApplyScope::All,
            ScopeArg::This => ApplyScope::SingleInstance,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let dir = resolve_dir(cli.dir)?;

    match cli.command {
        Commands::New(args) => commands::new::run(&dir, args),
        Commands::Events {
            from,
            to,
            search,
            category,
        } => commands::events::run(&dir, from, to, search, category),
        Commands::Update {
            id,
            title,
            start,
            end,
        } => commands::update::run(&dir, &id, title, start, end),
        Commands::Delete {
            id,
            scope,
            occurrence,
        } => commands::delete::run(&dir, &id, scope.map(Into::into), occurrence),
        Commands::Check {
            start,
            end,
            exclude,
        } => commands::check::run(&dir, &start, &end, exclude.as_deref()),
    }
}

fn resolve_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(dir) => Ok(dir),
        None => Ok(GlobalConfig::load()?.calendar_dir),
    }
}
