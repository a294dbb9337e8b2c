//! Resolution of notes against the tag registry.
//!
//! This is the only place where a note's tag ids are turned into tags, and so
//! the only place that has to deal with dangling ids. An id that is no longer
//! registered is silently dropped from the resolved note; the note itself keeps
//! it. Labels are read from the registry on every call, so a rename or delete
//! that happened before a resolution is always visible to it.

use crate::model::{Note, SimplifiedNote, TagId};
use crate::tags::TagRegistry;

/// Projects a note for display, keeping only tags present in `registry`.
///
/// The order of `note.tag_ids` is preserved. Repeated ids are kept as repeated.
pub fn resolve(note: &Note, registry: &TagRegistry) -> SimplifiedNote {
    let tags = note
        .tag_ids
        .iter()
        .filter_map(|id| registry.get(id).cloned())
        .collect();
    SimplifiedNote {
        id: note.id.clone(),
        title: note.title.clone(),
        tags,
    }
}

pub fn resolve_all(notes: &[Note], registry: &TagRegistry) -> Vec<SimplifiedNote> {
    notes.iter().map(|n| resolve(n, registry)).collect()
}

/// Ids referenced by `note` that `registry` cannot resolve.
pub fn dangling_tag_ids<'a>(note: &'a Note, registry: &TagRegistry) -> Vec<&'a TagId> {
    note.tag_ids
        .iter()
        .filter(|id| !registry.contains(id))
        .collect()
}
