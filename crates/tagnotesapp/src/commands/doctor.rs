use crate::commands::{plural, CmdMessage, CmdResult, DanglingRefs};
use crate::error::Result;
use crate::resolve::dangling_tag_ids;
use crate::store::DataStore;

/// Reports notes that reference deleted tags. Read-only: nothing is cleaned up,
/// since resolution already hides dangling ids.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let tags = store.load_tags()?;
    let notes = store.load_notes()?;

    let mut result = CmdResult::default();
    for note in &notes {
        let ids = dangling_tag_ids(note, &tags);
        if !ids.is_empty() {
            result.dangling.push(DanglingRefs {
                note_id: note.id.clone(),
                title: note.title.clone(),
                tag_ids: ids.into_iter().cloned().collect(),
            });
        }
    }

    if result.dangling.is_empty() {
        result.add_message(CmdMessage::success("No dangling tag references"));
    } else {
        let refs: usize = result.dangling.iter().map(|d| d.tag_ids.len()).sum();
        result.add_message(CmdMessage::info(format!(
            "{} in {} (hidden when listing)",
            plural(refs, "dangling tag reference"),
            plural(result.dangling.len(), "note")
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TagId;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_clean_store() {
        let store = StoreFixture::sample().store;
        let result = run(&store).unwrap();
        assert!(result.dangling.is_empty());
        assert!(result.messages[0].content.contains("No dangling"));
    }

    #[test]
    fn test_reports_dangling_after_delete() {
        let mut store = StoreFixture::sample()
            .with_note("3", "Both", &["a", "b"])
            .store;
        let mut tags = store.load_tags().unwrap();
        tags.delete(&TagId::from("a"));
        store.save_tags(&tags).unwrap();

        let result = run(&store).unwrap();
        assert_eq!(result.dangling.len(), 2);
        assert_eq!(result.dangling[0].note_id.as_str(), "1");
        assert_eq!(result.dangling[1].tag_ids, vec![TagId::from("a")]);
        assert!(result.messages[0]
            .content
            .contains("2 dangling tag references in 2 notes"));
    }
}
