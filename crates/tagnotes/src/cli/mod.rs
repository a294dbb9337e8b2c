//! # CLI Behavior
//!
//! This is **one possible UI client** for tagnotes, not the application itself.
//!
//! ### Naked Execution (`tagnotes`)
//!
//! Running `tagnotes` with no arguments lists every note.
//!
//! ### Filtering (`tagnotes list`)
//!
//! - `--title <text>`: case-insensitive substring of the title
//! - `--tag <ref>` (repeatable): the note must carry *all* given tags
//!
//! Tags can be referenced by id or by exact label everywhere.
//!
//! ### Tag Editing (`tagnotes tags ...`)
//!
//! Renaming or deleting an unknown tag prints a warning and changes nothing.
//! Deleting a tag never edits notes; `tagnotes doctor` shows the references
//! left behind.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Output formatting
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styles

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
