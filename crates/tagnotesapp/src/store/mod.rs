//! # Storage Layer
//!
//! The core (model, registry, resolution, filtering) never does I/O. Somebody
//! still has to hand it the notes and the tag registry and take the updated
//! registry back after a rename or delete; the [`DataStore`] trait is that
//! hand-off point.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: two JSON files in a directory, written atomically.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── notes.json      # Vec<Note>, in display order
//! └── tags.json       # the tag registry, in insertion order
//! ```
//!
//! Deleting a tag rewrites `tags.json` only. `notes.json` keeps whatever tag
//! ids it had; dangling ones are dropped when notes are resolved.

use crate::error::Result;
use crate::model::Note;
use crate::tags::TagRegistry;

pub mod fs;
pub mod memory;

/// Abstract interface for note and tag storage.
pub trait DataStore {
    /// Load every note, in display order.
    fn load_notes(&self) -> Result<Vec<Note>>;

    /// Replace the stored notes.
    fn save_notes(&mut self, notes: &[Note]) -> Result<()>;

    /// Load the tag registry.
    fn load_tags(&self) -> Result<TagRegistry>;

    /// Replace the stored tag registry.
    fn save_tags(&mut self, tags: &TagRegistry) -> Result<()>;
}
