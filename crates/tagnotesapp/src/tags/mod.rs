//! Tag registry for tagnotes.
//!
//! The registry is the single owner of every [`Tag`]. Notes only hold tag ids,
//! so the registry is where a tag's lifecycle plays out:
//!
//! - **Create**: a tag enters the registry with a fresh id.
//! - **Rename**: the label changes in place, the id stays.
//! - **Delete**: the tag leaves the registry. Notes are *not* touched; any id
//!   they still carry becomes dangling and is dropped when the note is resolved
//!   (see [`crate::resolve`]).
//!
//! Rename and delete are total: an unknown id is a no-op, not an error. Both are
//! available as `&mut self` methods for the owner of the state, and as the free
//! functions [`rename_tag`] and [`delete_tag`] that return an updated snapshot.
//!
//! The registry keeps insertion order, which is also the order tags are listed in.

pub mod intent;

use crate::model::{Tag, TagId};
use log::debug;
use serde::{Deserialize, Serialize};

pub use intent::TagIntent;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Tag>", into = "Vec<Tag>")]
pub struct TagRegistry {
    tags: Vec<Tag>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from already-loaded tags.
    ///
    /// When the same id appears more than once, the first occurrence wins.
    pub fn from_tags(tags: impl IntoIterator<Item = Tag>) -> Self {
        let mut registry = Self::new();
        for tag in tags {
            registry.insert(tag);
        }
        registry
    }

    /// Creates a tag with a fresh id and adds it to the registry.
    pub fn create(&mut self, label: impl Into<String>) -> Tag {
        let tag = Tag::new(TagId::generate(), label);
        debug!("tag created id={} label={:?}", tag.id, tag.label);
        self.tags.push(tag.clone());
        tag
    }

    /// Adds an existing tag. Returns `false` (and leaves the registry as is)
    /// when a tag with that id is already registered.
    pub fn insert(&mut self, tag: Tag) -> bool {
        if self.contains(&tag.id) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Replaces the label of the tag with `id`. Returns whether a tag was found.
    pub fn rename(&mut self, id: &TagId, label: impl Into<String>) -> bool {
        match self.tags.iter_mut().find(|t| &t.id == id) {
            Some(tag) => {
                tag.label = label.into();
                debug!("tag renamed id={} label={:?}", tag.id, tag.label);
                true
            }
            None => {
                debug!("tag rename ignored, unknown id={}", id);
                false
            }
        }
    }

    /// Removes the tag with `id`, returning it if it was present.
    pub fn delete(&mut self, id: &TagId) -> Option<Tag> {
        let pos = self.tags.iter().position(|t| &t.id == id)?;
        let removed = self.tags.remove(pos);
        debug!("tag deleted id={} label={:?}", removed.id, removed.label);
        Some(removed)
    }

    pub fn get(&self, id: &TagId) -> Option<&Tag> {
        self.tags.iter().find(|t| &t.id == id)
    }

    pub fn contains(&self, id: &TagId) -> bool {
        self.get(id).is_some()
    }

    /// Exact, case-sensitive label lookup. Returns the first match.
    pub fn find_by_label(&self, label: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.label == label)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn as_slice(&self) -> &[Tag] {
        &self.tags
    }
}

impl From<Vec<Tag>> for TagRegistry {
    fn from(tags: Vec<Tag>) -> Self {
        Self::from_tags(tags)
    }
}

impl From<TagRegistry> for Vec<Tag> {
    fn from(registry: TagRegistry) -> Self {
        registry.tags
    }
}

impl<'a> IntoIterator for &'a TagRegistry {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

/// Returns a copy of `registry` with the tag `id` relabeled. Unknown ids leave it unchanged.
pub fn rename_tag(registry: &TagRegistry, id: &TagId, label: impl Into<String>) -> TagRegistry {
    let mut next = registry.clone();
    next.rename(id, label);
    next
}

/// Returns a copy of `registry` without the tag `id`. Unknown ids leave it unchanged.
pub fn delete_tag(registry: &TagRegistry, id: &TagId) -> TagRegistry {
    let mut next = registry.clone();
    next.delete(id);
    next
}
