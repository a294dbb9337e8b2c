use super::DataStore;
use crate::error::{NotesError, Result};
use crate::model::Note;
use crate::tags::TagRegistry;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const NOTES_FILE: &str = "notes.json";
pub const TAGS_FILE: &str = "tags.json";

/// JSON-file store rooted at a data directory.
///
/// Missing files read as empty. Writes go to a temporary file that is then
/// renamed over the target, so a crash never leaves a half-written file.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_json<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T> {
        let path = self.root.join(name);
        if !path.exists() {
            debug!("{} missing, starting empty", path.display());
            return Ok(T::default());
        }
        let content = fs::read_to_string(&path).map_err(NotesError::Io)?;
        serde_json::from_str(&content).map_err(NotesError::Serialization)
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NotesError::Io)?;
        }
        let content = serde_json::to_string_pretty(value).map_err(NotesError::Serialization)?;

        let tmp_file = self.root.join(format!(".{}-{}.tmp", name, Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(NotesError::Io)?;
        fs::rename(&tmp_file, self.root.join(name)).map_err(NotesError::Io)?;
        debug!("wrote {}", self.root.join(name).display());
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_notes(&self) -> Result<Vec<Note>> {
        self.read_json(NOTES_FILE)
    }

    fn save_notes(&mut self, notes: &[Note]) -> Result<()> {
        self.write_json(NOTES_FILE, notes)
    }

    fn load_tags(&self) -> Result<TagRegistry> {
        self.read_json(TAGS_FILE)
    }

    fn save_tags(&mut self, tags: &TagRegistry) -> Result<()> {
        self.write_json(TAGS_FILE, tags)
    }
}
