//! Editor session: owns the draft from open to commit, discard or delete.
//!
//! Each operation takes `&mut self`, so completions from collaborators are
//! applied one at a time by the session's single owner.

use crate::context::SessionContext;
use crate::draft::{Draft, DraftFields};
use hillfort_core::{
    Direction, EditorLaunch, HillfortError, HillfortRecord, HillfortResult, Notification, SessionError,
    SessionMode, SessionState,
};
use tracing::{debug, info};

#[derive(Debug)]
pub struct EditorSession {
    pub(crate) ctx: SessionContext,
    pub(crate) draft: Draft,
    pub(crate) state: SessionState,
}

impl EditorSession {
    /// Open a session from a launch payload.
    ///
    /// An edit launch renders the hydrated record; a create launch tries a
    /// one-shot device location when configured to.
    pub async fn start(ctx: SessionContext, launch: EditorLaunch) -> HillfortResult<Self> {
        let prior = launch.prior_record()?;
        let mut session = Self {
            ctx,
            draft: Draft::start(prior),
            state: SessionState::Open,
        };

        match session.draft.mode() {
            SessionMode::Editing => {
                let record = session.draft.record();
                info!(hillfort_id = ?record.id, "Opened hillfort for editing");
                session.ctx.callbacks.show_record(record);
                session.ctx.callbacks.show_images(&record.images);
                session.ctx.callbacks.show_notes(&record.notes);
            }
            SessionMode::New => {
                info!(user_id = %session.ctx.user, "Opened new hillfort");
                if session.ctx.config.acquire_location_on_create {
                    session.acquire_current_location().await?;
                }
            }
        }

        Ok(session)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn record(&self) -> &HillfortRecord {
        self.draft.record()
    }

    pub fn mode(&self) -> SessionMode {
        self.draft.mode()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }

    /// Merge the form fields into the draft.
    pub fn apply_fields(&mut self, fields: DraftFields) -> HillfortResult<&HillfortRecord> {
        self.ensure_open()?;
        debug!(name = %fields.name, visited = fields.visited, "Applying form fields");
        Ok(self.draft.apply_fields(fields))
    }

    /// Move to the next or previous of the user's hillforts.
    ///
    /// On success the UI is asked to open the sibling; at either end of the
    /// list a notice is shown and `OutOfRange` returned. The draft is untouched.
    pub async fn navigate(&mut self, direction: Direction) -> HillfortResult<HillfortRecord> {
        self.ensure_open()?;
        let ordered = self.ctx.store.hillfort_list_by_user(self.ctx.user).await?;

        match crate::nav::navigate(direction, &ordered, self.draft.record()) {
            Ok(sibling) => {
                debug!(?direction, hillfort_id = ?sibling.id, "Navigating to sibling hillfort");
                self.ctx.callbacks.open_record(sibling);
                Ok(sibling.clone())
            }
            Err(err) => {
                debug!(?direction, "No sibling hillfort in that direction");
                let err = HillfortError::from(err);
                self.ctx.callbacks.notify(Notification::from(&err));
                Err(err)
            }
        }
    }

    /// End the session without persisting anything.
    pub fn discard(&mut self) -> HillfortResult<()> {
        self.ensure_open()?;
        self.state = SessionState::Discarded;
        info!(hillfort_id = ?self.draft.record().id, "Discarded hillfort draft");
        self.ctx.callbacks.return_to_list();
        Ok(())
    }

    pub(crate) fn ensure_open(&self) -> HillfortResult<()> {
        if self.state.is_open() {
            Ok(())
        } else {
            Err(SessionError::Closed { state: self.state }.into())
        }
    }

    /// Fail with `NotEditing` unless the draft came from a persisted record.
    pub(crate) fn ensure_editing(&self, operation: &'static str) -> HillfortResult<()> {
        if self.draft.is_editing() {
            Ok(())
        } else {
            Err(SessionError::NotEditing { operation }.into())
        }
    }
}
