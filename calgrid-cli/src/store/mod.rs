//! Event definition storage.
//!
//! Stores each definition as a JSON document named `<id>.json` in the
//! calgrid calendar directory.

mod create;
mod delete;
mod find;
mod list;
mod update;

pub use create::create;
pub use delete::delete;
pub use find::find;
pub use list::list;
pub use update::update;

use std::path::{Path, PathBuf};

use calgrid_core::EventDefinition;

/// An event definition stored as a local .json document.
pub struct StoredDefinition {
    /// Path to the .json file
    pub path: PathBuf,
    /// The definition data
    pub definition: EventDefinition,
}

fn document_path(dir: &Path, id: &str) -> PathBuf {
    dir.join(format!("{}.json", id))
}
