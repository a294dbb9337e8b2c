use crate::error::{NotesError, Result};
use crate::model::{Note, NoteId, Tag};
use crate::tags::TagRegistry;

pub fn find_note<'a>(notes: &'a [Note], id: &NoteId) -> Option<&'a Note> {
    notes.iter().find(|n| &n.id == id)
}

pub fn require_note<'a>(notes: &'a [Note], id: &NoteId) -> Result<&'a Note> {
    find_note(notes, id).ok_or_else(|| NotesError::NoteNotFound(id.clone()))
}

/// Resolves a user-supplied note reference: an exact id, or a prefix shared by
/// exactly one note id.
pub fn resolve_note_ref(notes: &[Note], reference: &str) -> Result<NoteId> {
    let id = NoteId::from(reference);
    if find_note(notes, &id).is_some() {
        return Ok(id);
    }
    let mut candidates = notes.iter().filter(|n| n.id.as_str().starts_with(reference));
    match (candidates.next(), candidates.next()) {
        (Some(note), None) if !reference.is_empty() => Ok(note.id.clone()),
        (Some(_), Some(_)) if !reference.is_empty() => Err(NotesError::Api(format!(
            "Note id '{}' is ambiguous",
            reference
        ))),
        _ => Err(NotesError::NoteNotFound(id)),
    }
}

/// Looks a tag up by id, then by exact label, then by a prefix shared by
/// exactly one tag id.
pub fn lookup_tag<'a>(registry: &'a TagRegistry, reference: &str) -> Option<&'a Tag> {
    registry
        .get(&reference.into())
        .or_else(|| registry.find_by_label(reference))
        .or_else(|| unique_tag_prefix(registry, reference))
}

fn unique_tag_prefix<'a>(registry: &'a TagRegistry, prefix: &str) -> Option<&'a Tag> {
    if prefix.is_empty() {
        return None;
    }
    let mut candidates = registry.iter().filter(|t| t.id.as_str().starts_with(prefix));
    match (candidates.next(), candidates.next()) {
        (Some(tag), None) => Some(tag),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_note() {
        let notes = vec![Note::with_id("1", "One", ""), Note::with_id("2", "Two", "")];
        assert_eq!(find_note(&notes, &"2".into()).unwrap().title, "Two");
        assert!(find_note(&notes, &"3".into()).is_none());
    }

    #[test]
    fn test_require_note_missing_is_not_found() {
        let notes = vec![Note::with_id("1", "One", "")];
        match require_note(&notes, &"9".into()) {
            Err(NotesError::NoteNotFound(id)) => assert_eq!(id.as_str(), "9"),
            other => panic!("Expected NoteNotFound, got {:?}", other.map(|n| &n.title)),
        }
    }

    #[test]
    fn test_lookup_tag_prefers_id() {
        let registry = TagRegistry::from_tags(vec![Tag::new("a", "b"), Tag::new("b", "work")]);
        assert_eq!(lookup_tag(&registry, "b").unwrap().label, "work");
        assert_eq!(lookup_tag(&registry, "work").unwrap().id.as_str(), "b");
        assert!(lookup_tag(&registry, "nope").is_none());
    }

    #[test]
    fn test_lookup_tag_by_unique_prefix() {
        let registry =
            TagRegistry::from_tags(vec![Tag::new("abc1", "home"), Tag::new("abd2", "work")]);
        assert_eq!(lookup_tag(&registry, "abd").unwrap().label, "work");
        assert!(lookup_tag(&registry, "ab").is_none());
        assert!(lookup_tag(&registry, "").is_none());
    }

    #[test]
    fn test_resolve_note_ref() {
        let notes = vec![
            Note::with_id("7f3a9", "One", ""),
            Note::with_id("7f3b1", "Two", ""),
            Note::with_id("7f3", "Three", ""),
        ];
        assert_eq!(resolve_note_ref(&notes, "7f3").unwrap().as_str(), "7f3");
        assert_eq!(resolve_note_ref(&notes, "7f3b").unwrap().as_str(), "7f3b1");
        assert!(matches!(
            resolve_note_ref(&notes, "7f"),
            Err(NotesError::Api(_))
        ));
        assert!(matches!(
            resolve_note_ref(&notes, "zz"),
            Err(NotesError::NoteNotFound(_))
        ));
        assert!(matches!(
            resolve_note_ref(&notes, ""),
            Err(NotesError::NoteNotFound(_))
        ));
    }
}
