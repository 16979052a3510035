//! Core types and logic for the calgrid calendar.
//!
//! This crate provides everything the calgrid front ends share:
//! - `EventDefinition` and related types for user-authored events
//! - `expand` for materializing recurring events into occurrences
//! - `has_conflict` for interval conflict detection
//! - family operations for replacing/removing a definition's occurrences

pub mod config;
pub mod conflict;
pub mod error;
pub mod event;
pub mod family;
pub mod form;
pub mod occurrence;
pub mod recurrence;

// Re-export the main types and operations at crate root for convenience
pub use conflict::has_conflict;
pub use event::*;
pub use family::{ApplyScope, remove_family, remove_scoped, remove_single, replace_family};
pub use occurrence::Occurrence;
pub use recurrence::expand;
