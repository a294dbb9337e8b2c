use super::DataStore;
use crate::error::{NotesError, Result};
use crate::model::Note;
use crate::tags::TagRegistry;

/// In-memory store for testing.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    notes: Vec<Note>,
    tags: TagRegistry,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error {
            return Err(NotesError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl DataStore for InMemoryStore {
    fn load_notes(&self) -> Result<Vec<Note>> {
        Ok(self.notes.clone())
    }

    fn save_notes(&mut self, notes: &[Note]) -> Result<()> {
        self.check_writable()?;
        self.notes = notes.to_vec();
        Ok(())
    }

    fn load_tags(&self) -> Result<TagRegistry> {
        Ok(self.tags.clone())
    }

    fn save_tags(&mut self, tags: &TagRegistry) -> Result<()> {
        self.check_writable()?;
        self.tags = tags.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Tag, TagId};

    /// Builds a store with the two-note set used throughout the tests:
    /// "Groceries" tagged `home` (id `a`) and "Work plan" tagged `work` (id `b`).
    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn sample() -> Self {
            Self::new()
                .with_tag("a", "home")
                .with_tag("b", "work")
                .with_note("1", "Groceries", &["a"])
                .with_note("2", "Work plan", &["b"])
        }

        pub fn with_tag(mut self, id: &str, label: &str) -> Self {
            self.store.tags.insert(Tag::new(id, label));
            self
        }

        pub fn with_note(mut self, id: &str, title: &str, tag_ids: &[&str]) -> Self {
            let note = Note::with_id(id, title, format!("Content for {}", title))
                .with_tags(tag_ids.iter().copied().map(TagId::from));
            self.store.notes.push(note);
            self
        }
    }
}
