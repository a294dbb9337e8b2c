use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotesError, Result};
use crate::model::{Note, TagId};
use crate::resolve::resolve;
use crate::store::DataStore;

/// Creates a note. Every tag id must already be registered.
pub fn run<S: DataStore>(
    store: &mut S,
    title: String,
    content: String,
    tag_ids: Vec<TagId>,
) -> Result<CmdResult> {
    if title.trim().is_empty() {
        return Err(NotesError::Api("Title cannot be empty".into()));
    }

    let tags = store.load_tags()?;
    if let Some(unknown) = tag_ids.iter().find(|id| !tags.contains(id)) {
        return Err(NotesError::Api(format!("Tag '{}' not found", unknown)));
    }

    let note = Note::new(title, content).with_tags(tag_ids);
    let mut notes = store.load_notes()?;
    notes.push(note.clone());
    store.save_notes(&notes)?;

    let mut result = CmdResult::default();
    result.listed_notes.push(resolve(&note, &tags));
    result.add_message(CmdMessage::success(format!("Note created: {}", note.title)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_create_note_with_tags() {
        let mut store = StoreFixture::sample().store;
        let result = run(
            &mut store,
            "Trip".into(),
            "Pack bags".into(),
            vec![TagId::from("b"), TagId::from("a")],
        )
        .unwrap();

        assert!(result.messages[0].content.contains("Note created: Trip"));
        let notes = store.load_notes().unwrap();
        assert_eq!(notes.len(), 3);
        assert_eq!(notes[2].title, "Trip");
        assert_eq!(notes[2].tag_ids, vec![TagId::from("b"), TagId::from("a")]);
        assert_eq!(result.listed_notes[0].tags.len(), 2);
    }

    #[test]
    fn test_create_rejects_blank_title() {
        let mut store = StoreFixture::new().store;
        let result = run(&mut store, "   ".into(), "".into(), Vec::new());
        assert!(result.unwrap_err().to_string().contains("Title cannot be empty"));
        assert!(store.load_notes().unwrap().is_empty());
    }

    #[test]
    fn test_create_rejects_unknown_tag() {
        let mut store = StoreFixture::sample().store;
        let result = run(&mut store, "Trip".into(), "".into(), vec![TagId::from("zzz")]);
        assert!(result.unwrap_err().to_string().contains("Tag 'zzz' not found"));
        assert_eq!(store.load_notes().unwrap().len(), 2);
    }
}
