//! End-to-end editor workflow tests against the in-memory store and
//! recording collaborators.

use hillfort_core::{
    Direction, EditorLaunch, HillfortError, HillfortRecord, LocationError, LocationResult,
    MediaError, NavigationError, SessionError, SessionMode, SessionState, ValidationError,
};
use hillfort_editor::{
    delete_account, delete_all_hillforts, DraftFields, EditorConfig, EditorSession, LocationOutcome,
    SessionContext,
};
use hillfort_test_utils::{
    fixtures, CallbackEvent, HillfortStore, Location, MockDatePicker, MockLocationProvider,
    MockMediaPicker, RecordingCallbacks, RecordingStore, StoreOp, UserId,
};
use std::sync::Arc;

struct Harness {
    store: Arc<RecordingStore>,
    callbacks: Arc<RecordingCallbacks>,
    location: Arc<MockLocationProvider>,
    ctx: SessionContext,
    user: UserId,
}

struct HarnessBuilder {
    records: Vec<HillfortRecord>,
    location: MockLocationProvider,
    media: MockMediaPicker,
    dates: MockDatePicker,
    callbacks: RecordingCallbacks,
    config: EditorConfig,
}

impl HarnessBuilder {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            location: MockLocationProvider::no_fix(),
            media: MockMediaPicker::cancelled(),
            dates: MockDatePicker::cancelled(),
            callbacks: RecordingCallbacks::confirming(true),
            config: EditorConfig::default(),
        }
    }

    fn records(mut self, records: Vec<HillfortRecord>) -> Self {
        self.records = records;
        self
    }

    fn location(mut self, location: MockLocationProvider) -> Self {
        self.location = location;
        self
    }

    fn media(mut self, media: MockMediaPicker) -> Self {
        self.media = media;
        self
    }

    fn dates(mut self, dates: MockDatePicker) -> Self {
        self.dates = dates;
        self
    }

    fn callbacks(mut self, callbacks: RecordingCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    fn config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    async fn build(self) -> Harness {
        let (inner, user) = fixtures::seeded_store(&self.records).await.unwrap();
        let store = Arc::new(RecordingStore::new(inner));
        let callbacks = Arc::new(self.callbacks);
        let location = Arc::new(self.location);
        let ctx = SessionContext::new(
            user,
            store.clone(),
            location.clone(),
            Arc::new(self.media),
            Arc::new(self.dates),
            callbacks.clone(),
        )
        .with_config(self.config);
        Harness {
            store,
            callbacks,
            location,
            ctx,
            user,
        }
    }
}

impl Harness {
    async fn stored(&self) -> Vec<HillfortRecord> {
        self.store.inner().hillfort_list_by_user(self.user).await.unwrap()
    }

    async fn open_new(&self) -> EditorSession {
        EditorSession::start(self.ctx.clone(), EditorLaunch::create())
            .await
            .unwrap()
    }

    async fn open_stored(&self, index: usize) -> EditorSession {
        let record = self.stored().await.remove(index);
        EditorSession::start(self.ctx.clone(), EditorLaunch::edit(record))
            .await
            .unwrap()
    }
}

fn dun_aengus() -> DraftFields {
    DraftFields {
        name: "Dun Aengus".to_string(),
        description: "stone fort".to_string(),
        visited: true,
        date_visited: Some(fixtures::date(2024, 5, 1)),
    }
}

// ============================================================================
// Session start
// ============================================================================

#[tokio::test]
async fn test_start_new_session_is_empty() {
    let h = HarnessBuilder::new().build().await;
    let session = h.open_new().await;

    assert_eq!(session.mode(), SessionMode::New);
    assert_eq!(session.state(), SessionState::Open);
    assert!(session.record().id.is_none());
    assert!(session.record().images.is_empty());
}

#[tokio::test]
async fn test_start_edit_session_renders_record() {
    let h = HarnessBuilder::new()
        .records(vec![fixtures::hillfort_with_images("Staigue", 2)])
        .build()
        .await;
    let session = h.open_stored(0).await;

    assert_eq!(session.mode(), SessionMode::Editing);
    assert_eq!(session.record().name, "Staigue");
    let events = h.callbacks.events();
    assert!(matches!(events[0], CallbackEvent::ShowRecord(_)));
    assert!(matches!(&events[1], CallbackEvent::ShowImages(images) if images.len() == 2));
    assert_eq!(h.location.lookups(), 0);
}

#[tokio::test]
async fn test_start_edit_without_identity_is_rejected() {
    let h = HarnessBuilder::new().build().await;
    let result = EditorSession::start(h.ctx.clone(), EditorLaunch::edit(HillfortRecord::default())).await;

    assert!(matches!(
        result,
        Err(HillfortError::Validation(ValidationError::RequiredFieldMissing { .. }))
    ));
}

// ============================================================================
// Location acquisition
// ============================================================================

#[tokio::test]
async fn test_new_session_applies_device_location() {
    let h = HarnessBuilder::new()
        .location(MockLocationProvider::fixed(Location::new(53.12, -9.77)))
        .build()
        .await;
    let mut session = h.open_new().await;

    assert_eq!(session.record().location, Location::new(53.12, -9.77));
    assert_eq!(h.location.lookups(), 1);

    // A second lookup on the same draft does not overwrite the first fix.
    let again = session.acquire_current_location().await.unwrap();
    assert_eq!(again, LocationOutcome::Ignored(Location::new(53.12, -9.77)));
}

#[tokio::test]
async fn test_edit_session_location_not_overwritten() {
    let mut record = fixtures::persisted_hillfort("Grianan");
    record.location = Location::new(55.0, -7.5);
    let h = HarnessBuilder::new()
        .records(vec![record])
        .location(MockLocationProvider::fixed(Location::new(1.0, 1.0)))
        .build()
        .await;
    let mut session = h.open_stored(0).await;

    let outcome = session.acquire_current_location().await.unwrap();
    assert_eq!(outcome, LocationOutcome::Ignored(Location::new(1.0, 1.0)));
    assert_eq!(session.record().location, Location::new(55.0, -7.5));
}

#[tokio::test]
async fn test_denied_location_is_silent() {
    let h = HarnessBuilder::new()
        .location(MockLocationProvider::denied())
        .build()
        .await;
    let mut session = h.open_new().await;

    assert!(session.record().location.is_unset());
    assert!(h.callbacks.notices().is_empty());
    let outcome = session.acquire_current_location().await.unwrap();
    assert_eq!(
        outcome,
        LocationOutcome::Unavailable(Some(LocationError::PermissionDenied))
    );
}

#[tokio::test]
async fn test_location_lookup_can_be_disabled() {
    let config = EditorConfig {
        acquire_location_on_create: false,
        ..EditorConfig::default()
    };
    let h = HarnessBuilder::new()
        .location(MockLocationProvider::fixed(Location::new(2.0, 2.0)))
        .config(config)
        .build()
        .await;
    let session = h.open_new().await;

    assert_eq!(h.location.lookups(), 0);
    assert!(session.record().location.is_unset());
}

#[tokio::test]
async fn test_map_location_result() {
    let h = HarnessBuilder::new().build().await;
    let mut session = h.open_new().await;

    let missing = session.apply_location_result(LocationResult::default());
    assert!(matches!(
        missing,
        Err(HillfortError::Validation(ValidationError::RequiredFieldMissing { .. }))
    ));

    let picked = Location::new(52.5, -6.3);
    session
        .apply_location_result(LocationResult {
            location: Some(picked),
        })
        .unwrap();
    assert_eq!(session.record().location, picked);
    assert!(h.callbacks.events().contains(&CallbackEvent::ShowLocation(picked)));
}

// ============================================================================
// Field application
// ============================================================================

#[tokio::test]
async fn test_apply_fields_keeps_location_images_and_notes() {
    let mut record = fixtures::hillfort_with_images("Old name", 2);
    record.location = Location::new(54.0, -8.0);
    let h = HarnessBuilder::new().records(vec![record]).build().await;
    let mut session = h.open_stored(0).await;
    let before = session.record().clone();

    let after = session.apply_fields(dun_aengus()).unwrap();

    assert_eq!(after.name, "Dun Aengus");
    assert_eq!(after.description, "stone fort");
    assert!(after.visited);
    assert_eq!(after.location, before.location);
    assert_eq!(after.images, before.images);
    assert_eq!(after.notes, before.notes);
}

// ============================================================================
// Media attachment
// ============================================================================

#[tokio::test]
async fn test_replace_images_on_record_with_two() {
    let h = HarnessBuilder::new()
        .records(vec![fixtures::hillfort_with_images("Staigue", 2)])
        .build()
        .await;
    let mut session = h.open_stored(0).await;
    let remote_id = session.record().remote_id.clone();
    let selected = fixtures::image_refs(3);

    let images = session.replace_images(selected.clone()).unwrap();

    assert_eq!(images.len(), 3);
    let uris: Vec<_> = images.iter().map(|i| i.uri.clone()).collect();
    assert_eq!(uris, selected);
    assert!(images.iter().all(|i| i.hillfort_remote_id == remote_id));
    assert_eq!(session.record().images, images);
    assert!(h
        .callbacks
        .events()
        .contains(&CallbackEvent::ShowImages(images)));
}

#[tokio::test]
async fn test_replace_images_too_many_leaves_list() {
    let h = HarnessBuilder::new()
        .records(vec![fixtures::hillfort_with_images("Staigue", 2)])
        .build()
        .await;
    let mut session = h.open_stored(0).await;
    let before = session.record().images.clone();

    let result = session.replace_images(fixtures::image_refs(5));

    assert_eq!(
        result,
        Err(HillfortError::Media(MediaError::TooMany {
            selected: 5,
            max: 4
        }))
    );
    assert_eq!(session.record().images, before);
    assert!(h
        .callbacks
        .notices()
        .iter()
        .any(|n| n == "Exceeded maximum of 4 images"));
}

#[tokio::test]
async fn test_select_images_cancelled_picker() {
    let h = HarnessBuilder::new().build().await;
    let mut session = h.open_new().await;

    assert_eq!(session.select_images().await.unwrap(), None);
    assert!(h.callbacks.events().is_empty());
}

#[tokio::test]
async fn test_select_images_declined_reset() {
    let h = HarnessBuilder::new()
        .records(vec![fixtures::hillfort_with_images("Staigue", 1)])
        .media(MockMediaPicker::selecting(["content://a", "content://b"]))
        .callbacks(RecordingCallbacks::confirming(false))
        .build()
        .await;
    let mut session = h.open_stored(0).await;
    let before = session.record().images.clone();

    assert_eq!(session.select_images().await.unwrap(), None);
    assert_eq!(session.record().images, before);
    assert!(h.callbacks.events().contains(&CallbackEvent::Confirm(
        "This will reset the existing images, continue?".to_string()
    )));
}

#[tokio::test]
async fn test_select_images_without_confirmation() {
    let config = EditorConfig {
        confirm_image_reset: false,
        ..EditorConfig::default()
    };
    let h = HarnessBuilder::new()
        .media(MockMediaPicker::selecting(["content://a"]))
        .config(config)
        .build()
        .await;
    let mut session = h.open_new().await;

    let images = session.select_images().await.unwrap().unwrap();
    assert_eq!(images.len(), 1);
    assert!(!h
        .callbacks
        .events()
        .iter()
        .any(|e| matches!(e, CallbackEvent::Confirm(_))));
}

// ============================================================================
// Sibling navigation
// ============================================================================

#[tokio::test]
async fn test_navigate_from_last_of_three() {
    let records = fixtures::ordered_hillforts(3);
    let h = HarnessBuilder::new().records(records).build().await;
    let mut session = h.open_stored(2).await;

    let next = session.navigate(Direction::Next).await;
    assert_eq!(
        next,
        Err(HillfortError::Navigation(NavigationError::OutOfRange {
            direction: Direction::Next
        }))
    );
    assert!(h.callbacks.notices().contains(&"Next Hillfort is Empty!".to_string()));

    let prev = session.navigate(Direction::Previous).await.unwrap();
    assert_eq!(prev.name, "fort-1");
    assert_eq!(h.callbacks.opened(), vec![prev.clone()]);

    // The caller opens a fresh editing session on the sibling.
    let sibling = EditorSession::start(h.ctx.clone(), EditorLaunch::edit(prev))
        .await
        .unwrap();
    assert_eq!(sibling.mode(), SessionMode::Editing);
    assert_eq!(sibling.record().name, "fort-1");
}

#[tokio::test]
async fn test_navigate_leaves_draft_untouched() {
    let h = HarnessBuilder::new()
        .records(fixtures::ordered_hillforts(2))
        .build()
        .await;
    let mut session = h.open_stored(0).await;
    session.apply_fields(dun_aengus()).unwrap();
    let before = session.record().clone();

    session.navigate(Direction::Next).await.unwrap();

    assert_eq!(session.record(), &before);
    assert_eq!(session.state(), SessionState::Open);
}

#[tokio::test]
async fn test_navigate_from_unsaved_record() {
    let h = HarnessBuilder::new()
        .records(fixtures::ordered_hillforts(3))
        .build()
        .await;
    let mut session = h.open_new().await;

    assert!(session.navigate(Direction::Next).await.is_err());
    assert!(session.navigate(Direction::Previous).await.is_err());
    assert!(h.callbacks.opened().is_empty());
}

// ============================================================================
// Commit / discard
// ============================================================================

#[tokio::test]
async fn test_commit_new_record_creates_once() {
    let h = HarnessBuilder::new().build().await;
    let mut session = h.open_new().await;
    session.apply_fields(dun_aengus()).unwrap();

    let id = session.commit().await.unwrap();

    let creates = h.store.calls_of(StoreOp::HillfortCreate);
    assert_eq!(creates.len(), 1);
    let sent = creates[0].record.clone().unwrap();
    assert_eq!(sent.name, "Dun Aengus");
    assert_eq!(sent.description, "stone fort");
    assert!(sent.visited);
    assert_eq!(sent.date_visited, Some(fixtures::date(2024, 5, 1)));
    assert!(sent.images.is_empty());
    assert!(sent.notes.is_empty());
    assert!(h.store.calls_of(StoreOp::HillfortUpdate).is_empty());

    assert_eq!(session.state(), SessionState::Committed);
    assert!(h.callbacks.returned_to_list());
    assert_eq!(h.stored().await[0].id, Some(id));
}

#[tokio::test]
async fn test_commit_edit_attaches_current_notes() {
    let h = HarnessBuilder::new()
        .records(vec![fixtures::persisted_hillfort("Navan")])
        .build()
        .await;
    let mut session = h.open_stored(0).await;
    let id = session.record().id.unwrap();

    // A note added elsewhere after this session loaded its snapshot.
    h.store
        .inner()
        .note_create(h.user, id, &hillfort_test_utils::Note::new("Mound", "Large"))
        .await
        .unwrap();
    session.apply_fields(dun_aengus()).unwrap();
    session.commit().await.unwrap();

    let updates = h.store.calls_of(StoreOp::HillfortUpdate);
    assert_eq!(updates.len(), 1);
    let sent = updates[0].record.clone().unwrap();
    assert_eq!(sent.notes.len(), 1);
    assert_eq!(sent.notes[0].title, "Mound");
    assert_eq!(h.stored().await[0].name, "Dun Aengus");
    assert!(h.store.calls_of(StoreOp::HillfortCreate).is_empty());
}

#[tokio::test]
async fn test_commit_failure_keeps_session_open() {
    let h = HarnessBuilder::new().build().await;
    let mut session = h.open_new().await;
    session.apply_fields(dun_aengus()).unwrap();
    h.store.fail_on(StoreOp::HillfortCreate);

    let err = session.commit().await.unwrap_err();

    assert!(matches!(err, HillfortError::Storage(_)));
    assert_eq!(session.state(), SessionState::Open);
    assert!(!h.callbacks.returned_to_list());
    assert_eq!(h.callbacks.notices().len(), 1);

    h.store.heal();
    session.commit().await.unwrap();
    assert_eq!(session.state(), SessionState::Committed);
}

#[tokio::test]
async fn test_discard_skips_store() {
    let h = HarnessBuilder::new().build().await;
    let mut session = h.open_new().await;
    session.apply_fields(dun_aengus()).unwrap();

    session.discard().unwrap();

    assert_eq!(session.state(), SessionState::Discarded);
    assert!(h.store.calls().is_empty());
    assert!(h.callbacks.returned_to_list());
}

#[tokio::test]
async fn test_closed_session_rejects_operations() {
    let h = HarnessBuilder::new().build().await;
    let mut session = h.open_new().await;
    session.discard().unwrap();

    let closed = HillfortError::Session(SessionError::Closed {
        state: SessionState::Discarded,
    });
    assert_eq!(session.apply_fields(dun_aengus()).unwrap_err(), closed);
    assert_eq!(session.commit().await.unwrap_err(), closed);
    assert_eq!(session.discard().unwrap_err(), closed);
    assert_eq!(
        session.replace_images(fixtures::image_refs(1)).unwrap_err(),
        closed
    );
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_editing_record() {
    let h = HarnessBuilder::new()
        .records(fixtures::ordered_hillforts(2))
        .build()
        .await;
    let mut session = h.open_stored(0).await;

    assert!(session.request_delete().await.unwrap());

    assert_eq!(session.state(), SessionState::Deleted);
    assert_eq!(h.stored().await.len(), 1);
    assert!(h.callbacks.returned_to_list());
}

#[tokio::test]
async fn test_delete_declined() {
    let h = HarnessBuilder::new()
        .records(fixtures::ordered_hillforts(1))
        .callbacks(RecordingCallbacks::confirming(false))
        .build()
        .await;
    let mut session = h.open_stored(0).await;

    assert!(!session.request_delete().await.unwrap());

    assert_eq!(session.state(), SessionState::Open);
    assert!(h.store.calls_of(StoreOp::HillfortDelete).is_empty());
}

#[tokio::test]
async fn test_delete_failure_keeps_session_open() {
    let h = HarnessBuilder::new()
        .records(fixtures::ordered_hillforts(1))
        .build()
        .await;
    let mut session = h.open_stored(0).await;
    h.store.fail_on(StoreOp::HillfortDelete);

    let err = session.delete().await.unwrap_err();

    assert!(matches!(err, HillfortError::Storage(_)));
    assert_eq!(session.state(), SessionState::Open);
    assert!(!h.callbacks.returned_to_list());
    assert_eq!(h.stored().await.len(), 1);

    h.store.heal();
    session.delete().await.unwrap();
    assert_eq!(session.state(), SessionState::Deleted);
}

#[tokio::test]
async fn test_delete_new_record_not_allowed() {
    let h = HarnessBuilder::new().build().await;
    let mut session = h.open_new().await;

    assert_eq!(
        session.delete().await.unwrap_err(),
        HillfortError::Session(SessionError::NotEditing { operation: "delete" })
    );
    assert_eq!(session.state(), SessionState::Open);
}

// ============================================================================
// Notes and dates
// ============================================================================

#[tokio::test]
async fn test_add_note_requires_existing_record() {
    let h = HarnessBuilder::new().build().await;
    let mut session = h.open_new().await;

    let err = session.add_note("Gate", "East").await.unwrap_err();

    assert!(matches!(
        err,
        HillfortError::Session(SessionError::NotEditing { .. })
    ));
    assert_eq!(
        h.callbacks.notices(),
        vec!["Please create a hillfort before adding notes to it!".to_string()]
    );
}

#[tokio::test]
async fn test_add_note_rejects_blank_fields() {
    let h = HarnessBuilder::new()
        .records(fixtures::ordered_hillforts(1))
        .build()
        .await;
    let mut session = h.open_stored(0).await;

    let err = session.add_note("Gate", "   ").await.unwrap_err();

    assert_eq!(
        err,
        HillfortError::Validation(ValidationError::RequiredFieldMissing {
            field: "content".to_string()
        })
    );
    assert!(h.store.calls_of(StoreOp::NoteCreate).is_empty());
}

#[tokio::test]
async fn test_add_note_refreshes_notes() {
    let h = HarnessBuilder::new()
        .records(fixtures::ordered_hillforts(1))
        .build()
        .await;
    let mut session = h.open_stored(0).await;

    let note_id = session.add_note("Gate", "East-facing").await.unwrap();

    let notes = &session.record().notes;
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].note_id, Some(note_id));
    assert!(h
        .callbacks
        .events()
        .contains(&CallbackEvent::ShowNotes(notes.clone())));

    session.show_note(&notes[0].clone());
    assert!(h
        .callbacks
        .notices()
        .contains(&"Gate\n\nEast-facing".to_string()));
}

#[tokio::test]
async fn test_pick_date_seeds_and_stores() {
    let picked = fixtures::date(2023, 8, 14);
    let today = fixtures::date(2026, 10, 19);
    let dates = Arc::new(MockDatePicker::picking(picked));
    let h = HarnessBuilder::new().build().await;
    let ctx = SessionContext {
        dates: dates.clone(),
        ..h.ctx.clone()
    };
    let mut session = EditorSession::start(ctx, EditorLaunch::create())
        .await
        .unwrap();

    let result = session.pick_date(today).await.unwrap().unwrap();

    assert_eq!(dates.seeded_with(), Some(today));
    assert_eq!(result.date, picked);
    assert_eq!(result.display, "14/8/2023");
    assert_eq!(session.record().date_visited, Some(picked));
}

#[tokio::test]
async fn test_pick_date_cancelled() {
    let h = HarnessBuilder::new()
        .dates(MockDatePicker::cancelled())
        .build()
        .await;
    let mut session = h.open_new().await;

    assert_eq!(
        session.pick_date(fixtures::date(2026, 1, 1)).await.unwrap(),
        None
    );
    assert_eq!(session.record().date_visited, None);
}

#[tokio::test]
async fn test_store_statistics_after_commits() {
    let h = HarnessBuilder::new().build().await;
    for visited in [true, false] {
        let mut session = EditorSession::start(h.ctx.clone(), EditorLaunch::create())
            .await
            .unwrap();
        session
            .apply_fields(DraftFields {
                visited,
                ..dun_aengus()
            })
            .unwrap();
        session.replace_images(fixtures::image_refs(2)).unwrap();
        session.commit().await.unwrap();
    }

    let stats = h.store.inner().get_statistics().await.unwrap();
    assert_eq!(stats.hillfort_count, 2);
    assert_eq!(stats.image_count, 4);
    assert_eq!(stats.visited_count, 1);
    assert_eq!(stats.most_active_user.as_deref(), Some("tester@example.com"));
}

// ============================================================================
// Account bulk deletes
// ============================================================================

#[tokio::test]
async fn test_delete_all_hillforts_confirmed() {
    let h = HarnessBuilder::new()
        .records(fixtures::ordered_hillforts(3))
        .build()
        .await;

    let removed = delete_all_hillforts(&h.ctx).await.unwrap();

    assert_eq!(removed, Some(3));
    assert!(h.stored().await.is_empty());
    assert!(h.callbacks.events().contains(&CallbackEvent::Confirm(
        "Are you sure you want to delete all your hillforts?".to_string()
    )));
    assert_eq!(h.callbacks.notices(), vec!["Deleted 3 hillforts".to_string()]);
}

#[tokio::test]
async fn test_delete_all_hillforts_declined() {
    let h = HarnessBuilder::new()
        .records(fixtures::ordered_hillforts(2))
        .callbacks(RecordingCallbacks::confirming(false))
        .build()
        .await;

    assert_eq!(delete_all_hillforts(&h.ctx).await.unwrap(), None);
    assert!(h.store.calls_of(StoreOp::HillfortDeleteAll).is_empty());
    assert_eq!(h.stored().await.len(), 2);
}

#[tokio::test]
async fn test_delete_all_hillforts_failure_is_reported() {
    let h = HarnessBuilder::new()
        .records(fixtures::ordered_hillforts(2))
        .build()
        .await;
    h.store.fail_on(StoreOp::HillfortDeleteAll);

    let err = delete_all_hillforts(&h.ctx).await.unwrap_err();

    assert!(matches!(err, HillfortError::Storage(_)));
    assert_eq!(h.stored().await.len(), 2);
    assert_eq!(h.callbacks.notices().len(), 1);
}

#[tokio::test]
async fn test_delete_account() {
    let h = HarnessBuilder::new()
        .records(fixtures::ordered_hillforts(1))
        .build()
        .await;

    assert!(delete_account(&h.ctx).await.unwrap());

    assert!(h.store.inner().user_find_all().await.unwrap().is_empty());
    assert!(h.callbacks.events().contains(&CallbackEvent::Confirm(
        "Are you sure you want to delete your account?".to_string()
    )));

    // A second attempt has no user left to remove.
    let again = delete_account(&h.ctx).await;
    assert!(matches!(again, Err(HillfortError::Storage(_))));
}

#[tokio::test]
async fn test_delete_account_declined() {
    let h = HarnessBuilder::new()
        .callbacks(RecordingCallbacks::confirming(false))
        .build()
        .await;

    assert!(!delete_account(&h.ctx).await.unwrap());
    assert!(h.store.calls_of(StoreOp::UserDelete).is_empty());
    assert_eq!(h.store.inner().user_find_all().await.unwrap().len(), 1);
}
