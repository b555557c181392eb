//! Hillfort Storage - Store Trait and Mock Implementation
//!
//! Defines the persistence collaborator the editor delegates to, plus an
//! in-memory implementation used by tests and demos.

pub mod async_trait;

pub use self::async_trait::HillfortStore;

use ::async_trait::async_trait as async_trait_attr;
use hillfort_core::{
    EntityType, HillfortError, HillfortId, HillfortRecord, HillfortResult, ImageId,
    Note, NoteId, StorageError, User, UserId,
};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

// ============================================================================
// MOCK STORAGE
// ============================================================================

/// In-memory store. Users keep insertion order, hillforts keep creation order.
#[derive(Debug, Default, Clone)]
pub struct MockStorage {
    users: Arc<RwLock<Vec<User>>>,
}

impl MockStorage {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user and return their id.
    pub fn add_user(&self, user: User) -> HillfortResult<UserId> {
        let user_id = user.user_id;
        self.write()?.push(user);
        Ok(user_id)
    }

    /// Register a fresh user with the given email.
    pub fn with_user(&self, email: &str) -> HillfortResult<UserId> {
        self.add_user(User::new(email))
    }

    /// Clear all stored data.
    pub fn clear(&self) -> HillfortResult<()> {
        self.write()?.clear();
        Ok(())
    }

    /// Total number of stored hillforts across users.
    pub fn hillfort_count(&self) -> HillfortResult<usize> {
        Ok(self.read()?.iter().map(|u| u.hillforts.len()).sum())
    }

    /// Total number of stored notes across users.
    pub fn note_count(&self) -> HillfortResult<usize> {
        Ok(self
            .read()?
            .iter()
            .flat_map(|u| u.hillforts.iter())
            .map(|h| h.notes.len())
            .sum())
    }

    /// Fetch a stored hillfort by id.
    pub fn hillfort_get(&self, id: HillfortId) -> HillfortResult<Option<HillfortRecord>> {
        Ok(self
            .read()?
            .iter()
            .flat_map(|u| u.hillforts.iter())
            .find(|h| h.id == Some(id))
            .cloned())
    }

    fn read(&self) -> HillfortResult<RwLockReadGuard<'_, Vec<User>>> {
        self.users
            .read()
            .map_err(|_| HillfortError::Storage(StorageError::LockPoisoned))
    }

    fn write(&self) -> HillfortResult<RwLockWriteGuard<'_, Vec<User>>> {
        self.users
            .write()
            .map_err(|_| HillfortError::Storage(StorageError::LockPoisoned))
    }
}

fn user_not_found(user: UserId) -> HillfortError {
    HillfortError::Storage(StorageError::NotFound {
        entity_type: EntityType::User,
        id: user.to_string(),
    })
}

fn user_ref(users: &[User], user: UserId) -> HillfortResult<&User> {
    users
        .iter()
        .find(|u| u.user_id == user)
        .ok_or_else(|| user_not_found(user))
}

fn user_mut(users: &mut [User], user: UserId) -> HillfortResult<&mut User> {
    users
        .iter_mut()
        .find(|u| u.user_id == user)
        .ok_or_else(|| user_not_found(user))
}

fn hillfort_mut(user: &mut User, id: HillfortId) -> HillfortResult<&mut HillfortRecord> {
    user.hillforts
        .iter_mut()
        .find(|h| h.id == Some(id))
        .ok_or_else(|| HillfortError::Storage(StorageError::hillfort_not_found(id)))
}

/// Assign store identities to everything in a record that lacks one.
fn stamp_identities(record: &mut HillfortRecord, id: HillfortId) {
    record.id = Some(id);
    if record.remote_id.is_none() {
        record.remote_id = Some(id.to_string());
    }
    for image in &mut record.images {
        image.image_id.get_or_insert_with(ImageId::now_v7);
        image.hillfort_remote_id = record.remote_id.clone();
    }
    for note in &mut record.notes {
        note.note_id.get_or_insert_with(NoteId::now_v7);
        note.hillfort_id = Some(id);
    }
}

#[async_trait_attr]
impl HillfortStore for MockStorage {
    async fn user_find_all(&self) -> HillfortResult<Vec<User>> {
        Ok(self.read()?.clone())
    }

    async fn user_delete(&self, user: UserId) -> HillfortResult<()> {
        let mut users = self.write()?;
        let position = users
            .iter()
            .position(|u| u.user_id == user)
            .ok_or_else(|| user_not_found(user))?;
        let removed = users.remove(position);
        tracing::info!(user_id = %user, hillforts = removed.hillforts.len(), "Deleted user");
        Ok(())
    }

    async fn hillfort_create(&self, user: UserId, h: &HillfortRecord) -> HillfortResult<HillfortId> {
        let mut users = self.write()?;
        let owner = user_mut(&mut users, user)?;
        if let Some(existing) = h.id {
            if owner.hillforts.iter().any(|stored| stored.id == Some(existing)) {
                return Err(HillfortError::Storage(StorageError::InsertFailed {
                    entity_type: EntityType::Hillfort,
                    reason: "already exists".to_string(),
                }));
            }
        }

        let id = h.id.unwrap_or_else(HillfortId::now_v7);
        let mut record = h.clone();
        stamp_identities(&mut record, id);
        owner.hillforts.push(record);
        tracing::debug!(hillfort_id = %id, user_id = %user, "Stored new hillfort");
        Ok(id)
    }

    async fn hillfort_update(&self, user: UserId, h: &HillfortRecord) -> HillfortResult<()> {
        let id = h.id.ok_or_else(|| {
            HillfortError::Storage(StorageError::UpdateFailed {
                entity_type: EntityType::Hillfort,
                id: "<none>".to_string(),
                reason: "record has no id".to_string(),
            })
        })?;
        let mut users = self.write()?;
        let owner = user_mut(&mut users, user)?;
        let stored = hillfort_mut(owner, id)?;
        let mut record = h.clone();
        stamp_identities(&mut record, id);
        *stored = record;
        Ok(())
    }

    async fn hillfort_delete(&self, user: UserId, id: HillfortId) -> HillfortResult<()> {
        let mut users = self.write()?;
        let owner = user_mut(&mut users, user)?;
        let before = owner.hillforts.len();
        owner.hillforts.retain(|h| h.id != Some(id));
        if owner.hillforts.len() == before {
            return Err(HillfortError::Storage(StorageError::hillfort_not_found(id)));
        }
        Ok(())
    }

    async fn hillfort_delete_all(&self, user: UserId) -> HillfortResult<usize> {
        let mut users = self.write()?;
        let owner = user_mut(&mut users, user)?;
        let removed = owner.hillforts.len();
        owner.hillforts.clear();
        tracing::info!(user_id = %user, removed, "Deleted all hillforts for user");
        Ok(removed)
    }

    async fn hillfort_list_by_user(&self, user: UserId) -> HillfortResult<Vec<HillfortRecord>> {
        let users = self.read()?;
        Ok(user_ref(&users, user)?.hillforts.clone())
    }

    async fn note_list_by_hillfort(
        &self,
        user: UserId,
        hillfort: HillfortId,
    ) -> HillfortResult<Vec<Note>> {
        let users = self.read()?;
        user_ref(&users, user)?
            .hillforts
            .iter()
            .find(|h| h.id == Some(hillfort))
            .map(|h| h.notes.clone())
            .ok_or_else(|| HillfortError::Storage(StorageError::hillfort_not_found(hillfort)))
    }

    async fn note_create(
        &self,
        user: UserId,
        hillfort: HillfortId,
        note: &Note,
    ) -> HillfortResult<NoteId> {
        let mut users = self.write()?;
        let owner = user_mut(&mut users, user)?;
        let record = hillfort_mut(owner, hillfort)?;
        let note_id = NoteId::now_v7();
        record.notes.push(Note {
            note_id: Some(note_id),
            hillfort_id: Some(hillfort),
            ..note.clone()
        });
        Ok(note_id)
    }
}

// ============================================================================
// TESTS
// ============================================================================
