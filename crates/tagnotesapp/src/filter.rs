//! Note filtering.
//!
//! A [`FilterQuery`] holds what a user typed into the title box and the tags
//! they picked. A note is shown when both hold:
//!
//! 1. **Title**: the query title is empty, or the note title contains it,
//!    compared case-insensitively. The query is used as typed (no trimming), so
//!    `" "` only matches titles containing a space.
//! 2. **Tags**: no tags are selected, or the note carries *every* selected tag
//!    (matched by id, AND logic). Extra tags on the note don't matter.
//!
//! Filtering never mutates its inputs and keeps the input order. It is a linear
//! scan, cheap enough to rerun on every keystroke.

use crate::model::{SimplifiedNote, Tag};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub title: String,
    /// Selected tags. Only ids are compared; labels are carried for display.
    #[serde(default)]
    pub selected_tags: Vec<Tag>,
}

/// Filter-box signals sent by a UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterIntent {
    TitleChanged(String),
    SelectedTagsChanged(Vec<Tag>),
}

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.selected_tags = tags;
        self
    }

    /// True when the query matches every note.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.selected_tags.is_empty()
    }

    pub fn apply(&mut self, intent: FilterIntent) {
        match intent {
            FilterIntent::TitleChanged(title) => self.title = title,
            FilterIntent::SelectedTagsChanged(tags) => self.selected_tags = tags,
        }
    }

    pub fn matches(&self, note: &SimplifiedNote) -> bool {
        self.matches_title(&note.title) && self.matches_tags(note)
    }

    fn matches_title(&self, title: &str) -> bool {
        self.title.is_empty() || title.to_lowercase().contains(&self.title.to_lowercase())
    }

    fn matches_tags(&self, note: &SimplifiedNote) -> bool {
        self.selected_tags.iter().all(|tag| note.has_tag(&tag.id))
    }
}

/// Returns the notes matching `query`, in input order.
pub fn filter(notes: &[SimplifiedNote], query: &FilterQuery) -> Vec<SimplifiedNote> {
    notes.iter().filter(|n| query.matches(n)).cloned().collect()
}
