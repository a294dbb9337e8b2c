//! # Tagnotes Architecture
//!
//! Tagnotes is a **UI-agnostic note library**. Notes carry a title, free-text
//! content and any number of reusable tags; the library decides which notes a
//! (title, selected tags) query shows and how tag renames and deletes reach the
//! notes that use them.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI (e.g. the `tagnotes` CLI)                               │
//! │  - Owns mutable state, turns user events into calls         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, resolves tag references       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Load from the store, run the core, save, report          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model, tags, resolve, filter)                        │
//! │  - Pure data and functions, no I/O                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Two Rules That Matter
//!
//! **Filtering** ([`filter`]): a note is shown when its title contains the query
//! (case-insensitive, empty query matches all) *and* it carries every selected
//! tag (by id).
//!
//! **Tag lifecycle** ([`tags`], [`resolve`]): renaming changes a label in the
//! registry; deleting removes a tag from the registry. Neither edits notes.
//! Notes are resolved against the registry every time they are shown, so renames
//! show up immediately and ids of deleted tags quietly disappear.
//!
//! ## Module Overview
//!
//! - [`model`]: `Note`, `Tag`, `SimplifiedNote` and their ids
//! - [`tags`]: The tag registry and tag-editing intents
//! - [`resolve`]: Note → `SimplifiedNote` projection
//! - [`filter`]: `FilterQuery` and the matching rule
//! - [`commands`]: Business logic for each command
//! - [`api`]: The API facade
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod resolve;
pub mod store;
pub mod tags;
