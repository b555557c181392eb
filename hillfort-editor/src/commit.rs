//! Commit, delete, and the confirmation flow around delete.

use crate::session::EditorSession;
use hillfort_core::{
    HillfortError, HillfortId, HillfortResult, Notification, SessionError, SessionMode,
    SessionState,
};
use tracing::{error, info};

const DELETE_PROMPT: &str = "Are you sure you want to delete this Hillfort?";

impl EditorSession {
    /// Hand the draft to the store: create when new, update when editing.
    ///
    /// The editing path re-reads the record's notes before updating. On
    /// success the session ends and the UI returns to the list. On failure
    /// the error is shown and returned and the session stays open.
    pub async fn commit(&mut self) -> HillfortResult<HillfortId> {
        self.ensure_open()?;

        match self.persist().await {
            Ok(id) => {
                self.state = SessionState::Committed;
                info!(hillfort_id = %id, mode = ?self.draft.mode(), "Committed hillfort");
                self.ctx.callbacks.return_to_list();
                Ok(id)
            }
            Err(err) => {
                error!(error = %err, "Failed to commit hillfort");
                self.ctx.callbacks.notify(Notification::from(&err));
                Err(err)
            }
        }
    }

    async fn persist(&mut self) -> HillfortResult<HillfortId> {
        let user = self.ctx.user;
        match self.draft.mode() {
            SessionMode::New => {
                let id = self
                    .ctx
                    .store
                    .hillfort_create(user, self.draft.record())
                    .await?;
                self.draft.record_mut().id = Some(id);
                Ok(id)
            }
            SessionMode::Editing => {
                let id = self.persisted_id()?;
                let notes = self.ctx.store.note_list_by_hillfort(user, id).await?;
                self.draft.record_mut().notes = notes;
                self.ctx
                    .store
                    .hillfort_update(user, self.draft.record())
                    .await?;
                Ok(id)
            }
        }
    }

    /// Delete the record being edited.
    ///
    /// The session only ends when the store confirms the delete; a failed
    /// delete is shown, returned, and leaves the session open for a retry.
    pub async fn delete(&mut self) -> HillfortResult<()> {
        self.ensure_open()?;
        self.ensure_editing("delete")?;
        let id = self.persisted_id()?;

        match self.ctx.store.hillfort_delete(self.ctx.user, id).await {
            Ok(()) => {
                self.state = SessionState::Deleted;
                info!(hillfort_id = %id, "Deleted hillfort");
                self.ctx.callbacks.return_to_list();
                Ok(())
            }
            Err(err) => {
                error!(hillfort_id = %id, error = %err, "Failed to delete hillfort");
                self.ctx.callbacks.notify(Notification::from(&err));
                Err(err)
            }
        }
    }

    /// Ask for confirmation (when configured), then delete.
    ///
    /// Returns `Ok(false)` if the user declined.
    pub async fn request_delete(&mut self) -> HillfortResult<bool> {
        self.ensure_open()?;
        self.ensure_editing("delete")?;

        if self.ctx.config.confirm_delete && !self.ctx.callbacks.confirm(DELETE_PROMPT).await {
            return Ok(false);
        }

        self.delete().await.map(|()| true)
    }

    pub(crate) fn persisted_id(&self) -> HillfortResult<HillfortId> {
        self.draft.record().id.ok_or_else(|| {
            HillfortError::Session(SessionError::MissingIdentity {
                id: self
                    .draft
                    .record()
                    .remote_id
                    .clone()
                    .unwrap_or_else(|| "<unsaved>".to_string()),
            })
        })
    }
}
