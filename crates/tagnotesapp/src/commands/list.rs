use crate::commands::{plural, CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{filter, FilterQuery};
use crate::resolve::resolve_all;
use crate::store::DataStore;
use log::debug;

pub fn run<S: DataStore>(store: &S, query: &FilterQuery) -> Result<CmdResult> {
    let tags = store.load_tags()?;
    let notes = store.load_notes()?;

    let resolved = resolve_all(&notes, &tags);
    let matched = filter(&resolved, query);
    debug!(
        "filter title={:?} tags={} matched {}/{}",
        query.title,
        query.selected_tags.len(),
        matched.len(),
        resolved.len()
    );

    let mut result = CmdResult::default();
    for tag in &query.selected_tags {
        if !tags.contains(&tag.id) {
            result.add_message(CmdMessage::warning(format!(
                "Tag '{}' does not exist, no note can match it",
                tag.label
            )));
        }
    }
    if matched.is_empty() && !resolved.is_empty() && !query.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No match among {}",
            plural(resolved.len(), "note")
        )));
    }

    Ok(result.with_listed_notes(matched))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Tag, TagId};
    use crate::store::memory::fixtures::StoreFixture;

    fn titles(result: &CmdResult) -> Vec<&str> {
        result.listed_notes.iter().map(|n| n.title.as_str()).collect()
    }

    #[test]
    fn test_list_all() {
        let store = StoreFixture::sample().store;
        let result = run(&store, &FilterQuery::new()).unwrap();
        assert_eq!(titles(&result), vec!["Groceries", "Work plan"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_list_by_title() {
        let store = StoreFixture::sample().store;
        let result = run(&store, &FilterQuery::new().with_title("wo")).unwrap();
        assert_eq!(titles(&result), vec!["Work plan"]);
    }

    #[test]
    fn test_list_by_tag() {
        let store = StoreFixture::sample().store;
        let query = FilterQuery::new().with_tags(vec![Tag::new("a", "home")]);
        let result = run(&store, &query).unwrap();
        assert_eq!(titles(&result), vec!["Groceries"]);
    }

    #[test]
    fn test_list_resolves_against_current_registry() {
        let mut store = StoreFixture::sample().store;
        let mut tags = store.load_tags().unwrap();
        tags.rename(&TagId::from("a"), "house");
        tags.delete(&TagId::from("b"));
        store.save_tags(&tags).unwrap();

        let result = run(&store, &FilterQuery::new()).unwrap();
        assert_eq!(result.listed_notes[0].tags, vec![Tag::new("a", "house")]);
        assert!(result.listed_notes[1].tags.is_empty());
    }

    #[test]
    fn test_list_deleted_tag_matches_nothing() {
        let mut store = StoreFixture::sample().store;
        let mut tags = store.load_tags().unwrap();
        tags.delete(&TagId::from("a"));
        store.save_tags(&tags).unwrap();

        let query = FilterQuery::new().with_tags(vec![Tag::new("a", "home")]);
        let result = run(&store, &query).unwrap();
        assert!(result.listed_notes.is_empty());
        assert!(result.messages[0].content.contains("does not exist"));
        assert!(result.messages[1].content.contains("No match among 2 notes"));
    }

    #[test]
    fn test_list_empty_store() {
        let store = StoreFixture::new().store;
        let result = run(&store, &FilterQuery::new().with_title("x")).unwrap();
        assert!(result.listed_notes.is_empty());
        assert!(result.messages.is_empty());
    }
}
