use crate::commands::helpers::require_note;
use crate::commands::{CmdResult, NoteDetail};
use crate::error::Result;
use crate::model::NoteId;
use crate::resolve::resolve;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: &NoteId) -> Result<CmdResult> {
    let tags = store.load_tags()?;
    let notes = store.load_notes()?;
    let note = require_note(&notes, id)?;

    let mut result = CmdResult::default();
    result.viewed_notes.push(NoteDetail {
        note: resolve(note, &tags),
        content: note.content.clone(),
        created_at: note.created_at,
        updated_at: note.updated_at,
    });
    Ok(result)
}
