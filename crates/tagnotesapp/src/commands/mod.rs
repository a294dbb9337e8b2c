//! # Command Layer
//!
//! This module contains the business logic of tagnotes. Each command lives in its
//! own submodule and is a plain function over a [`DataStore`](crate::store::DataStore).
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Load what they need from the store, run the core logic
//!   ([`crate::resolve`], [`crate::filter`], [`crate::tags`]) and save what changed
//! - Return structured [`CmdResult`] values with notes, tags and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr or formatting
//! - **Argument parsing**: that's the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Unknown Ids
//!
//! Renaming or deleting a tag that doesn't exist is not an error: the command
//! returns a warning message and leaves the store alone. Filtering on a tag that
//! doesn't exist just matches nothing. Looking up a note that doesn't exist is an
//! error ([`NotesError::NoteNotFound`](crate::error::NotesError::NoteNotFound)),
//! which a UI typically handles by going back to the list.
//!
//! ## Command Modules
//!
//! - [`list`]: Filter notes by title and tags
//! - [`view`]: Retrieve one note with its resolved tags
//! - [`create`]: Create a note
//! - [`tags`]: List, create, rename and delete tags
//! - [`doctor`]: Report dangling tag references
//! - [`helpers`]: Note and tag lookup

use crate::model::{NoteId, SimplifiedNote, Tag, TagId};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub mod create;
pub mod doctor;
pub mod helpers;
pub mod list;
pub mod tags;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A single note with everything a detail view shows.
#[derive(Debug, Clone, Serialize)]
pub struct NoteDetail {
    #[serde(flatten)]
    pub note: SimplifiedNote,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A note that still references tags the registry no longer has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingRefs {
    pub note_id: NoteId,
    pub title: String,
    pub tag_ids: Vec<TagId>,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub listed_notes: Vec<SimplifiedNote>,
    pub viewed_notes: Vec<NoteDetail>,
    pub listed_tags: Vec<Tag>,
    pub affected_tags: Vec<Tag>,
    pub dangling: Vec<DanglingRefs>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_notes(mut self, notes: Vec<SimplifiedNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_listed_tags(mut self, tags: Vec<Tag>) -> Self {
        self.listed_tags = tags;
        self
    }

    pub fn with_affected_tags(mut self, tags: Vec<Tag>) -> Self {
        self.affected_tags = tags;
        self
    }
}

/// "1 note", "2 notes".
pub(crate) fn plural(count: usize, word: &str) -> String {
    format!("{} {}{}", count, word, if count == 1 { "" } else { "s" })
}
