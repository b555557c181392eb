//! Notes on an existing hillfort.

use crate::session::EditorSession;
use hillfort_core::{
    HillfortError, HillfortResult, Note, NoteId, Notification, ValidationError,
};
use tracing::{debug, info};

const CREATE_FIRST_NOTICE: &str = "Please create a hillfort before adding notes to it!";
const FILL_FIELDS_NOTICE: &str = "Please fill out all fields!";

impl EditorSession {
    /// Attach a note to the record being edited and refresh the note list.
    ///
    /// New records cannot take notes until committed. Blank title or content
    /// is rejected before the store is touched.
    pub async fn add_note(&mut self, title: &str, content: &str) -> HillfortResult<NoteId> {
        self.ensure_open()?;
        if let Err(err) = self.ensure_editing("add_note") {
            self.ctx
                .callbacks
                .notify(Notification::warning(CREATE_FIRST_NOTICE));
            return Err(err);
        }

        let blank = [("title", title), ("content", content)]
            .into_iter()
            .find(|(_, value)| value.trim().is_empty());
        if let Some((field, _)) = blank {
            self.ctx
                .callbacks
                .notify(Notification::warning(FILL_FIELDS_NOTICE));
            return Err(HillfortError::Validation(
                ValidationError::RequiredFieldMissing {
                    field: field.to_string(),
                },
            ));
        }

        let user = self.ctx.user;
        let hillfort = self.persisted_id()?;
        let note_id = self
            .ctx
            .store
            .note_create(user, hillfort, &Note::new(title, content))
            .await?;
        info!(hillfort_id = %hillfort, note_id = %note_id, "Added note");

        let notes = self.ctx.store.note_list_by_hillfort(user, hillfort).await?;
        self.draft.record_mut().notes = notes;
        self.ctx.callbacks.show_notes(&self.draft.record().notes);
        Ok(note_id)
    }

    /// Show a note's title and content as a notice.
    pub fn show_note(&self, note: &Note) {
        debug!(note_id = ?note.note_id, "Showing note");
        self.ctx.callbacks.notify(Notification::info(note.describe()));
    }
}
