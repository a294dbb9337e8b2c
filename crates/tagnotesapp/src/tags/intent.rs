//! Tag-editing signals sent by a UI.
//!
//! A UI that edits tags inline (one text field per tag, one delete button per
//! tag) emits a stream of these. Applying them in order to the registry is all
//! the state handling the UI needs.

use super::TagRegistry;
use crate::model::TagId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TagIntent {
    Renamed { id: TagId, label: String },
    Deleted { id: TagId },
}

impl TagIntent {
    pub fn renamed(id: impl Into<TagId>, label: impl Into<String>) -> Self {
        Self::Renamed {
            id: id.into(),
            label: label.into(),
        }
    }

    pub fn deleted(id: impl Into<TagId>) -> Self {
        Self::Deleted { id: id.into() }
    }
}

impl TagRegistry {
    /// Applies one intent. Returns whether the registry changed.
    pub fn apply(&mut self, intent: &TagIntent) -> bool {
        match intent {
            TagIntent::Renamed { id, label } => self.rename(id, label.clone()),
            TagIntent::Deleted { id } => self.delete(id).is_some(),
        }
    }
}
