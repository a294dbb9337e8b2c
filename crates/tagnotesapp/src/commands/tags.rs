//! Tag management commands.
//!
//! - `list_tags`: List all tags in the registry
//! - `create_tag`: Create a new tag
//! - `rename_tag`: Relabel a tag (notes see the new label on their next resolution)
//! - `delete_tag`: Remove a tag from the registry (notes are left as they are)
//!
//! Rename and delete never fail on an unknown id; they report a warning and
//! leave the store unchanged.

use crate::commands::{plural, CmdMessage, CmdResult};
use crate::error::{NotesError, Result};
use crate::model::TagId;
use crate::store::DataStore;

/// List all tags in the registry.
pub fn list_tags<S: DataStore>(store: &S) -> Result<CmdResult> {
    let tags = store.load_tags()?;
    let mut result = CmdResult::default();

    if tags.is_empty() {
        result.add_message(CmdMessage::info("No tags defined"));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} defined",
            plural(tags.len(), "tag")
        )));
    }

    Ok(result.with_listed_tags(tags.as_slice().to_vec()))
}

/// Create a new tag in the registry.
///
/// Returns an error if the label is blank.
pub fn create_tag<S: DataStore>(store: &mut S, label: &str) -> Result<CmdResult> {
    if label.trim().is_empty() {
        return Err(NotesError::Api("Tag label cannot be empty".into()));
    }

    let mut tags = store.load_tags()?;
    let tag = tags.create(label);
    store.save_tags(&tags)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Created tag '{}'", tag.label)));
    Ok(result.with_affected_tags(vec![tag]))
}

/// Relabel the tag `id`.
pub fn rename_tag<S: DataStore>(store: &mut S, id: &TagId, label: &str) -> Result<CmdResult> {
    let mut tags = store.load_tags()?;
    let mut result = CmdResult::default();

    let Some(old_label) = tags.get(id).map(|t| t.label.clone()) else {
        result.add_message(CmdMessage::warning(format!("Tag '{}' not found", id)));
        return Ok(result);
    };

    tags.rename(id, label);
    store.save_tags(&tags)?;

    let notes = store.load_notes()?;
    let using = notes.iter().filter(|n| n.tag_ids.contains(id)).count();

    result.add_message(CmdMessage::success(format!("Renamed tag '{}' to '{}'", old_label, label)));
    if using > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} tagged with it",
            plural(using, "note")
        )));
    }
    let renamed = tags.get(id).cloned().into_iter().collect();
    Ok(result.with_affected_tags(renamed))
}

/// Remove the tag `id` from the registry.
///
/// Notes referencing it keep the id; it is dropped when they are resolved.
pub fn delete_tag<S: DataStore>(store: &mut S, id: &TagId) -> Result<CmdResult> {
    let mut tags = store.load_tags()?;
    let mut result = CmdResult::default();

    let Some(removed) = tags.delete(id) else {
        result.add_message(CmdMessage::warning(format!("Tag '{}' not found", id)));
        return Ok(result);
    };
    store.save_tags(&tags)?;

    let notes = store.load_notes()?;
    let using = notes.iter().filter(|n| n.tag_ids.contains(id)).count();

    result.add_message(CmdMessage::success(format!("Deleted tag '{}'", removed.label)));
    if using > 0 {
        result.add_message(CmdMessage::info(format!(
            "Still referenced by {} (hidden when listing)",
            plural(using, "note")
        )));
    }
    Ok(result.with_affected_tags(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::filter::FilterQuery;
    use crate::model::Tag;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_list_tags_empty() {
        let store = StoreFixture::new().store;
        let result = list_tags(&store).unwrap();
        assert!(result.messages[0].content.contains("No tags defined"));
        assert!(result.listed_tags.is_empty());
    }

    #[test]
    fn test_list_tags_shows_count() {
        let store = StoreFixture::sample().store;
        let result = list_tags(&store).unwrap();
        assert!(result.messages[0].content.contains("2 tags defined"));
        assert_eq!(
            result.listed_tags,
            vec![Tag::new("a", "home"), Tag::new("b", "work")]
        );
    }

    #[test]
    fn test_create_tag() {
        let mut store = StoreFixture::new().store;
        let result = create_tag(&mut store, "work").unwrap();
        assert!(result.messages[0].content.contains("Created tag 'work'"));

        let tags = store.load_tags().unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.iter().next().unwrap().label, "work");
        assert_eq!(result.affected_tags[0].id, tags.iter().next().unwrap().id);
    }

    #[test]
    fn test_create_tag_blank_label() {
        let mut store = StoreFixture::new().store;
        assert!(create_tag(&mut store, "  ").is_err());
        assert!(store.load_tags().unwrap().is_empty());
    }

    #[test]
    fn test_rename_tag() {
        let mut store = StoreFixture::sample().store;
        let result = rename_tag(&mut store, &TagId::from("a"), "house").unwrap();
        assert!(result.messages[0]
            .content
            .contains("Renamed tag 'home' to 'house'"));
        assert!(result.messages[1].content.contains("1 note tagged with it"));
        assert_eq!(result.affected_tags, vec![Tag::new("a", "house")]);

        let tags = store.load_tags().unwrap();
        assert_eq!(tags.get(&TagId::from("a")).unwrap().label, "house");
        assert_eq!(tags.get(&TagId::from("b")).unwrap().label, "work");
    }

    #[test]
    fn test_rename_visible_in_next_list() {
        let mut store = StoreFixture::sample().store;
        rename_tag(&mut store, &TagId::from("a"), "house").unwrap();
        let listed = list::run(&store, &FilterQuery::new()).unwrap().listed_notes;
        assert_eq!(listed[0].tags[0].label, "house");
    }

    #[test]
    fn test_rename_unknown_tag_is_noop() {
        let mut store = StoreFixture::sample().store;
        let before = store.load_tags().unwrap();
        let result = rename_tag(&mut store, &TagId::from("zzz"), "x").unwrap();
        assert_eq!(result.messages[0].level, crate::commands::MessageLevel::Warning);
        assert!(result.affected_tags.is_empty());
        assert_eq!(store.load_tags().unwrap(), before);
    }

    #[test]
    fn test_delete_tag_leaves_notes_untouched() {
        let mut store = StoreFixture::sample().store;
        let notes_before = store.load_notes().unwrap();

        let result = delete_tag(&mut store, &TagId::from("a")).unwrap();
        assert!(result.messages[0].content.contains("Deleted tag 'home'"));
        assert_eq!(
            result.messages[1].content,
            "Still referenced by 1 note (hidden when listing)"
        );

        assert!(!store.load_tags().unwrap().contains(&TagId::from("a")));
        assert_eq!(store.load_notes().unwrap(), notes_before);

        let listed = list::run(&store, &FilterQuery::new()).unwrap().listed_notes;
        assert!(listed[0].tags.is_empty());
    }

    #[test]
    fn test_delete_tag_twice_is_noop() {
        let mut store = StoreFixture::sample().store;
        delete_tag(&mut store, &TagId::from("a")).unwrap();
        let after_first = store.load_tags().unwrap();

        let result = delete_tag(&mut store, &TagId::from("a")).unwrap();
        assert!(result.messages[0].content.contains("not found"));
        assert_eq!(store.load_tags().unwrap(), after_first);
    }

    #[test]
    fn test_delete_propagates_store_errors() {
        let mut store = StoreFixture::sample().store;
        store.set_simulate_write_error(true);
        assert!(delete_tag(&mut store, &TagId::from("a")).is_err());
    }
}
