//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every tagnotes operation, whatever UI drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs**: tag references given as ids *or* labels are turned
//!   into tags through the registry; notes may be named by a unique id prefix
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! Business logic stays in `commands/*.rs`; presentation stays in the UI.
//!
//! ## Tag References
//!
//! A tag reference is first tried as an id, then as an exact label, then as an
//! id prefix shared by exactly one tag. A reference
//! that resolves to nothing is still usable in a filter (it matches no note) and
//! in rename/delete (a no-op with a warning), but not when creating a note.
//!
//! ## Generic Over DataStore
//!
//! `NotesApi<S: DataStore>` is generic over the storage backend:
//! - Production: `NotesApi<FileStore>`
//! - Testing: `NotesApi<InMemoryStore>`

use crate::commands::helpers::{lookup_tag, resolve_note_ref};
use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::filter::FilterQuery;
use crate::model::{Tag, TagId};
use crate::store::DataStore;
use crate::tags::{TagIntent, TagRegistry};

pub use crate::commands::{CmdMessage, MessageLevel};

pub struct NotesApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> NotesApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Lists notes whose title contains `title` and that carry every referenced tag.
    pub fn list_notes<I: AsRef<str>>(&self, title: &str, tag_refs: &[I]) -> Result<CmdResult> {
        let registry = self.store.load_tags()?;
        let query = FilterQuery::new()
            .with_title(title)
            .with_tags(selected_tags(&registry, tag_refs));
        commands::list::run(&self.store, &query)
    }

    pub fn filter_notes(&self, query: &FilterQuery) -> Result<CmdResult> {
        commands::list::run(&self.store, query)
    }

    /// Shows one note, given its id or a unique id prefix.
    pub fn view_note(&self, note_ref: &str) -> Result<CmdResult> {
        let notes = self.store.load_notes()?;
        let id = resolve_note_ref(&notes, note_ref)?;
        commands::view::run(&self.store, &id)
    }

    pub fn create_note<I: AsRef<str>>(
        &mut self,
        title: String,
        content: String,
        tag_refs: &[I],
    ) -> Result<CmdResult> {
        let registry = self.store.load_tags()?;
        let tag_ids = tag_refs
            .iter()
            .map(|r| tag_id_for(&registry, r.as_ref()))
            .collect();
        commands::create::run(&mut self.store, title, content, tag_ids)
    }

    pub fn list_tags(&self) -> Result<CmdResult> {
        commands::tags::list_tags(&self.store)
    }

    pub fn create_tag(&mut self, label: &str) -> Result<CmdResult> {
        commands::tags::create_tag(&mut self.store, label)
    }

    pub fn rename_tag(&mut self, tag_ref: &str, label: &str) -> Result<CmdResult> {
        let id = tag_id_for(&self.store.load_tags()?, tag_ref);
        commands::tags::rename_tag(&mut self.store, &id, label)
    }

    pub fn delete_tag(&mut self, tag_ref: &str) -> Result<CmdResult> {
        let id = tag_id_for(&self.store.load_tags()?, tag_ref);
        commands::tags::delete_tag(&mut self.store, &id)
    }

    /// Applies a tag-editing signal from a UI.
    pub fn apply_tag_intent(&mut self, intent: &TagIntent) -> Result<CmdResult> {
        match intent {
            TagIntent::Renamed { id, label } => {
                commands::tags::rename_tag(&mut self.store, id, label)
            }
            TagIntent::Deleted { id } => commands::tags::delete_tag(&mut self.store, id),
        }
    }

    pub fn doctor(&self) -> Result<CmdResult> {
        commands::doctor::run(&self.store)
    }
}

fn tag_id_for(registry: &TagRegistry, reference: &str) -> TagId {
    lookup_tag(registry, reference)
        .map(|t| t.id.clone())
        .unwrap_or_else(|| TagId::from(reference))
}

fn selected_tags<I: AsRef<str>>(registry: &TagRegistry, refs: &[I]) -> Vec<Tag> {
    refs.iter()
        .map(|r| {
            let r = r.as_ref();
            lookup_tag(registry, r)
                .cloned()
                .unwrap_or_else(|| Tag::new(r, r))
        })
        .collect()
}
