//! Hillfort Core - Entity Types
//!
//! Pure data structures and collaborator contracts. All other crates depend
//! on this. No I/O happens here.

pub mod collaborators;
pub mod entities;
pub mod enums;
pub mod error;
pub mod identity;
pub mod notifications;
pub mod payload;
pub mod stats;

pub use collaborators::{DatePicker, EditorCallbacks, LocationProvider, MediaPicker};
pub use entities::{
    HillfortRecord, ImageAttachment, ImageRef, Location, Note, User, MAX_IMAGES,
};
pub use enums::{Direction, SessionMode, SessionState};
pub use error::{
    EntityType, HillfortError, HillfortResult, LocationError, MediaError, NavigationError,
    SessionError, StorageError, ValidationError,
};
pub use identity::{
    new_local_id, HillfortId, ImageId, NoteId, Timestamp, UserId, VisitDate,
};
pub use notifications::{Notification, NotificationLevel};
pub use payload::{EditorLaunch, LocationResult};
pub use stats::HillfortStats;

// ============================================================================
// PROPERTY TESTS
// ============================================================================
