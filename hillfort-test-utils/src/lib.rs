//! Hillfort Test Utilities
//!
//! Centralized test infrastructure for the workspace:
//! - Recording and failing mock collaborators
//! - Proptest generators for records and image selections
//! - Fixtures for common scenarios

// Re-export mock storage from its source crate
pub use hillfort_storage::{HillfortStore, MockStorage};

// Re-export core types for convenience
pub use hillfort_core::{
    DatePicker, Direction, EditorCallbacks, HillfortError, HillfortId, HillfortRecord,
    HillfortResult, HillfortStats, ImageAttachment, ImageRef, Location, LocationError,
    LocationProvider, MediaPicker, Note, NoteId, Notification, NotificationLevel, StorageError,
    User, UserId, VisitDate,
};

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ============================================================================
// RECORDING STORE
// ============================================================================

/// Store operation, used both to record calls and to inject failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    UserFindAll,
    UserDelete,
    HillfortCreate,
    HillfortUpdate,
    HillfortDelete,
    HillfortDeleteAll,
    HillfortListByUser,
    NoteListByHillfort,
    NoteCreate,
}

/// A recorded store call with the record it carried, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreCall {
    pub op: StoreOp,
    pub record: Option<HillfortRecord>,
}

/// Wraps `MockStorage`, recording every call and failing selected operations.
#[derive(Debug, Clone, Default)]
pub struct RecordingStore {
    inner: MockStorage,
    calls: Arc<Mutex<Vec<StoreCall>>>,
    failing: Arc<Mutex<Vec<StoreOp>>>,
}

impl RecordingStore {
    pub fn new(inner: MockStorage) -> Self {
        Self {
            inner,
            ..Default::default()
        }
    }

    /// The wrapped store, for seeding and inspection.
    pub fn inner(&self) -> &MockStorage {
        &self.inner
    }

    /// Make every future call to `op` fail with `StorageError::Unavailable`.
    pub fn fail_on(&self, op: StoreOp) {
        lock(&self.failing).push(op);
    }

    /// Stop injecting failures.
    pub fn heal(&self) {
        lock(&self.failing).clear();
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        lock(&self.calls).clone()
    }

    /// Recorded calls of one kind.
    pub fn calls_of(&self, op: StoreOp) -> Vec<StoreCall> {
        lock(&self.calls)
            .iter()
            .filter(|c| c.op == op)
            .cloned()
            .collect()
    }

    fn record(&self, op: StoreOp, record: Option<&HillfortRecord>) -> HillfortResult<()> {
        lock(&self.calls).push(StoreCall {
            op,
            record: record.cloned(),
        });
        if lock(&self.failing).contains(&op) {
            return Err(HillfortError::Storage(StorageError::Unavailable {
                reason: format!("injected failure for {op:?}"),
            }));
        }
        Ok(())
    }
}

#[async_trait]
impl HillfortStore for RecordingStore {
    async fn user_find_all(&self) -> HillfortResult<Vec<User>> {
        self.record(StoreOp::UserFindAll, None)?;
        self.inner.user_find_all().await
    }

    async fn user_delete(&self, user: UserId) -> HillfortResult<()> {
        self.record(StoreOp::UserDelete, None)?;
        self.inner.user_delete(user).await
    }

    async fn hillfort_create(&self, user: UserId, h: &HillfortRecord) -> HillfortResult<HillfortId> {
        self.record(StoreOp::HillfortCreate, Some(h))?;
        self.inner.hillfort_create(user, h).await
    }

    async fn hillfort_update(&self, user: UserId, h: &HillfortRecord) -> HillfortResult<()> {
        self.record(StoreOp::HillfortUpdate, Some(h))?;
        self.inner.hillfort_update(user, h).await
    }

    async fn hillfort_delete(&self, user: UserId, id: HillfortId) -> HillfortResult<()> {
        self.record(StoreOp::HillfortDelete, None)?;
        self.inner.hillfort_delete(user, id).await
    }

    async fn hillfort_delete_all(&self, user: UserId) -> HillfortResult<usize> {
        self.record(StoreOp::HillfortDeleteAll, None)?;
        self.inner.hillfort_delete_all(user).await
    }

    async fn hillfort_list_by_user(&self, user: UserId) -> HillfortResult<Vec<HillfortRecord>> {
        self.record(StoreOp::HillfortListByUser, None)?;
        self.inner.hillfort_list_by_user(user).await
    }

    async fn note_list_by_hillfort(
        &self,
        user: UserId,
        hillfort: HillfortId,
    ) -> HillfortResult<Vec<Note>> {
        self.record(StoreOp::NoteListByHillfort, None)?;
        self.inner.note_list_by_hillfort(user, hillfort).await
    }

    async fn note_create(
        &self,
        user: UserId,
        hillfort: HillfortId,
        note: &Note,
    ) -> HillfortResult<NoteId> {
        self.record(StoreOp::NoteCreate, None)?;
        self.inner.note_create(user, hillfort, note).await
    }
}

// ============================================================================
// MOCK PLATFORM COLLABORATORS
// ============================================================================

/// Location provider returning a fixed answer and counting lookups.
#[derive(Debug)]
pub struct MockLocationProvider {
    answer: Result<Option<Location>, LocationError>,
    lookups: Mutex<usize>,
}

impl MockLocationProvider {
    pub fn fixed(location: Location) -> Self {
        Self::answering(Ok(Some(location)))
    }

    pub fn no_fix() -> Self {
        Self::answering(Ok(None))
    }

    pub fn denied() -> Self {
        Self::answering(Err(LocationError::PermissionDenied))
    }

    pub fn answering(answer: Result<Option<Location>, LocationError>) -> Self {
        Self {
            answer,
            lookups: Mutex::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        *lock(&self.lookups)
    }
}

#[async_trait]
impl LocationProvider for MockLocationProvider {
    async fn last_known_location(&self) -> Result<Option<Location>, LocationError> {
        *lock(&self.lookups) += 1;
        self.answer.clone()
    }
}

/// Media picker returning a scripted selection.
#[derive(Debug, Default)]
pub struct MockMediaPicker {
    selection: Option<Vec<ImageRef>>,
}

impl MockMediaPicker {
    /// Picker that returns these URIs on every call.
    pub fn selecting<I, S>(uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selection: Some(uris.into_iter().map(ImageRef::new).collect()),
        }
    }

    /// Picker the user always cancels.
    pub fn cancelled() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MediaPicker for MockMediaPicker {
    async fn pick_images(&self) -> Option<Vec<ImageRef>> {
        self.selection.clone()
    }
}

/// Date picker returning a fixed date, remembering the date it was seeded with.
#[derive(Debug, Default)]
pub struct MockDatePicker {
    answer: Option<VisitDate>,
    seeded_with: Mutex<Option<VisitDate>>,
}

impl MockDatePicker {
    pub fn picking(date: VisitDate) -> Self {
        Self {
            answer: Some(date),
            ..Default::default()
        }
    }

    pub fn cancelled() -> Self {
        Self::default()
    }

    pub fn seeded_with(&self) -> Option<VisitDate> {
        *lock(&self.seeded_with)
    }
}

#[async_trait]
impl DatePicker for MockDatePicker {
    async fn pick_date(&self, initial: VisitDate) -> Option<VisitDate> {
        *lock(&self.seeded_with) = Some(initial);
        self.answer
    }
}

/// Something the editor asked the UI to do.
#[derive(Debug, Clone, PartialEq)]
pub enum CallbackEvent {
    ShowRecord(HillfortRecord),
    ShowImages(Vec<ImageAttachment>),
    ShowNotes(Vec<Note>),
    ShowLocation(Location),
    Notify(Notification),
    Confirm(String),
    OpenRecord(HillfortRecord),
    ReturnToList,
}

/// Callbacks that record every event and answer confirmations with a fixed reply.
#[derive(Debug)]
pub struct RecordingCallbacks {
    confirm_reply: bool,
    events: Mutex<Vec<CallbackEvent>>,
}

impl Default for RecordingCallbacks {
    fn default() -> Self {
        Self::confirming(true)
    }
}

impl RecordingCallbacks {
    pub fn confirming(reply: bool) -> Self {
        Self {
            confirm_reply: reply,
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<CallbackEvent> {
        lock(&self.events).clone()
    }

    /// Messages of every notification raised so far.
    pub fn notices(&self) -> Vec<String> {
        lock(&self.events)
            .iter()
            .filter_map(|e| match e {
                CallbackEvent::Notify(n) => Some(n.message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn returned_to_list(&self) -> bool {
        lock(&self.events).contains(&CallbackEvent::ReturnToList)
    }

    /// Records passed to `open_record`, in order.
    pub fn opened(&self) -> Vec<HillfortRecord> {
        lock(&self.events)
            .iter()
            .filter_map(|e| match e {
                CallbackEvent::OpenRecord(r) => Some(r.clone()),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: CallbackEvent) {
        lock(&self.events).push(event);
    }
}

#[async_trait]
impl EditorCallbacks for RecordingCallbacks {
    fn show_record(&self, record: &HillfortRecord) {
        self.push(CallbackEvent::ShowRecord(record.clone()));
    }

    fn show_images(&self, images: &[ImageAttachment]) {
        self.push(CallbackEvent::ShowImages(images.to_vec()));
    }

    fn show_notes(&self, notes: &[Note]) {
        self.push(CallbackEvent::ShowNotes(notes.to_vec()));
    }

    fn show_location(&self, location: Location) {
        self.push(CallbackEvent::ShowLocation(location));
    }

    fn notify(&self, notification: Notification) {
        self.push(CallbackEvent::Notify(notification));
    }

    async fn confirm(&self, prompt: &str) -> bool {
        self.push(CallbackEvent::Confirm(prompt.to_string()));
        self.confirm_reply
    }

    fn open_record(&self, record: &HillfortRecord) {
        self.push(CallbackEvent::OpenRecord(record.clone()));
    }

    fn return_to_list(&self) {
        self.push(CallbackEvent::ReturnToList);
    }
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    use super::*;
    use proptest::prelude::*;

    /// A single image URI reference.
    pub fn arb_image_ref() -> impl Strategy<Value = ImageRef> {
        "[a-z0-9]{1,12}".prop_map(|s| ImageRef::new(format!("content://media/{s}")))
    }

    /// Image selections with a length in `len`.
    pub fn arb_image_refs(
        len: std::ops::Range<usize>,
    ) -> impl Strategy<Value = Vec<ImageRef>> {
        prop::collection::vec(arb_image_ref(), len)
    }

    pub fn arb_location() -> impl Strategy<Value = Location> {
        (-90.0f64..90.0, -180.0f64..180.0).prop_map(|(lat, lng)| Location::new(lat, lng))
    }

    /// A persisted hillfort with a unique id.
    pub fn arb_hillfort_record() -> impl Strategy<Value = HillfortRecord> {
        (
            any::<[u8; 16]>(),
            ".{0,24}",
            ".{0,48}",
            any::<bool>(),
            arb_location(),
            arb_image_refs(0..5),
        )
            .prop_map(|(id_bytes, name, description, visited, location, uris)| {
                let id = HillfortId::new(uuid::Uuid::from_bytes(id_bytes));
                let remote_id = Some(id.to_string());
                HillfortRecord {
                    id: Some(id),
                    images: uris
                        .into_iter()
                        .map(|uri| ImageAttachment::fresh(uri, remote_id.clone()))
                        .collect(),
                    remote_id,
                    name,
                    description,
                    visited,
                    location,
                    ..Default::default()
                }
            })
    }

    /// An ordered list of records with distinct ids.
    pub fn arb_ordered_records(
        len: std::ops::Range<usize>,
    ) -> impl Strategy<Value = Vec<HillfortRecord>> {
        prop::collection::vec(arb_hillfort_record(), len).prop_map(|mut records| {
            // Random bytes can collide; re-key to keep identities distinct.
            for record in &mut records {
                record.id = Some(HillfortId::now_v7());
            }
            records
        })
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

pub mod fixtures {
    use super::*;
    use chrono::NaiveDate;

    /// A stored-looking record with an id and remote id.
    pub fn persisted_hillfort(name: &str) -> HillfortRecord {
        let id = HillfortId::now_v7();
        HillfortRecord {
            id: Some(id),
            remote_id: Some(format!("remote-{id}")),
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// A persisted record already carrying `count` images.
    pub fn hillfort_with_images(name: &str, count: usize) -> HillfortRecord {
        let mut record = persisted_hillfort(name);
        record.images = (0..count)
            .map(|i| {
                ImageAttachment::fresh(
                    ImageRef::new(format!("content://old/{i}")),
                    record.remote_id.clone(),
                )
            })
            .collect();
        record
    }

    /// `n` persisted records named `fort-0 .. fort-n`.
    pub fn ordered_hillforts(n: usize) -> Vec<HillfortRecord> {
        (0..n)
            .map(|i| persisted_hillfort(&format!("fort-{i}")))
            .collect()
    }

    pub fn date(year: i32, month: u32, day: u32) -> VisitDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
    }

    /// URIs `content://new/0 .. content://new/n`.
    pub fn image_refs(n: usize) -> Vec<ImageRef> {
        (0..n)
            .map(|i| ImageRef::new(format!("content://new/{i}")))
            .collect()
    }

    /// A store seeded with one user owning `records`; returns the user id.
    pub async fn seeded_store(records: &[HillfortRecord]) -> HillfortResult<(MockStorage, UserId)> {
        let store = MockStorage::new();
        let user = store.with_user("tester@example.com")?;
        for record in records {
            store.hillfort_create(user, record).await?;
        }
        Ok((store, user))
    }
}
