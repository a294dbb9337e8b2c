//! # Domain Model: Notes, Tags and their Resolved Projection
//!
//! This module defines the data structures shared by every layer: [`Tag`], [`Note`]
//! and [`SimplifiedNote`], plus the identifier newtypes [`TagId`] and [`NoteId`].
//!
//! ## Ownership
//!
//! ```text
//! TagRegistry ──owns──▶ Tag { id, label }
//!                          ▲
//!                          │ referenced by id (never owned)
//!                          │
//! Note { id, title, content, tag_ids: [TagId] }
//! ```
//!
//! A note owns its ordered list of tag ids, not the tags. The relationship is
//! many-to-many and is only materialized when a note is *resolved* against the
//! current registry (see [`crate::resolve`]), producing a [`SimplifiedNote`] whose
//! `tags` carry the labels as they are at resolution time.
//!
//! ## Identifiers
//!
//! Ids are opaque strings. Fresh ids are v4 UUIDs rendered as strings, so an id
//! removed from the registry is never handed out again within a process. Any
//! string is accepted when ids come from the outside (e.g. a snapshot file or a
//! command-line argument).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Allocates a fresh, never-before-seen id.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Stable identity of a [`Tag`]. Immutable for the tag's lifetime.
    TagId
);

string_id!(
    /// Stable identity of a [`Note`].
    NoteId
);

/// A labeled category. The label is the only mutable part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub label: String,
}

impl Tag {
    pub fn new(id: impl Into<TagId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A titled content record referencing zero or more tags by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Ordered references into the tag registry. May contain ids of deleted tags.
    #[serde(default)]
    pub tag_ids: Vec<TagId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_id(NoteId::generate(), title, content)
    }

    pub fn with_id(
        id: impl Into<NoteId>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            tag_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_tags<I, T>(mut self, tag_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TagId>,
    {
        self.tag_ids = tag_ids.into_iter().map(Into::into).collect();
        self
    }
}

/// A note projected for list display: tag ids resolved to full tags, with any
/// id that no longer exists in the registry left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifiedNote {
    pub id: NoteId,
    pub title: String,
    pub tags: Vec<Tag>,
}

impl SimplifiedNote {
    pub fn new(id: impl Into<NoteId>, title: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
        }
    }

    pub fn has_tag(&self, id: &TagId) -> bool {
        self.tags.iter().any(|t| &t.id == id)
    }
}
