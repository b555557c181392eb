//! Async store trait for the persistence collaborator.
//!
//! The editor only depends on this contract. Implementations may be backed
//! by a local JSON file, a remote document store, or memory.

use ::async_trait::async_trait;
use hillfort_core::{
    HillfortId, HillfortRecord, HillfortResult, HillfortStats, Note, NoteId, User, UserId,
};

/// Async store for users, their hillforts, and hillfort notes.
///
/// Every operation is scoped to the owning user. Failures surface as
/// `HillfortError::Storage`; retry policy is the implementation's business.
#[async_trait]
pub trait HillfortStore: Send + Sync {
    // ========================================================================
    // USER OPERATIONS
    // ========================================================================

    /// List every registered user with their hillforts.
    async fn user_find_all(&self) -> HillfortResult<Vec<User>>;

    /// Remove a user together with every hillfort and note they own.
    async fn user_delete(&self, user: UserId) -> HillfortResult<()>;

    // ========================================================================
    // HILLFORT OPERATIONS
    // ========================================================================

    /// Persist a new hillfort and return its assigned id.
    async fn hillfort_create(&self, user: UserId, h: &HillfortRecord) -> HillfortResult<HillfortId>;

    /// Replace a stored hillfort, including its notes and images.
    async fn hillfort_update(&self, user: UserId, h: &HillfortRecord) -> HillfortResult<()>;

    /// Delete a hillfort and its notes.
    async fn hillfort_delete(&self, user: UserId, id: HillfortId) -> HillfortResult<()>;

    /// Delete every hillfort the user owns and return how many were removed.
    async fn hillfort_delete_all(&self, user: UserId) -> HillfortResult<usize>;

    /// The user's hillforts in display order.
    async fn hillfort_list_by_user(&self, user: UserId) -> HillfortResult<Vec<HillfortRecord>>;

    // ========================================================================
    // NOTE OPERATIONS
    // ========================================================================

    /// Notes currently stored for a hillfort.
    async fn note_list_by_hillfort(
        &self,
        user: UserId,
        hillfort: HillfortId,
    ) -> HillfortResult<Vec<Note>>;

    /// Attach a new note to a hillfort and return its assigned id.
    async fn note_create(
        &self,
        user: UserId,
        hillfort: HillfortId,
        note: &Note,
    ) -> HillfortResult<NoteId>;

    // ========================================================================
    // DIAGNOSTICS
    // ========================================================================

    /// Aggregate counts across every user.
    async fn get_statistics(&self) -> HillfortResult<HillfortStats> {
        let users = self.user_find_all().await?;
        Ok(HillfortStats::from_users(&users))
    }
}
