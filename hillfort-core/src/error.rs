//! Error types for hillfort editor operations

use crate::{Direction, HillfortId, SessionState};
use thiserror::Error;

/// Kind of entity a storage error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    User,
    Hillfort,
}

/// Media attachment errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MediaError {
    #[error("Exceeded maximum of {max} images")]
    TooMany { selected: usize, max: usize },
}

/// Sibling navigation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("{} Hillfort is Empty!", .direction.title())]
    OutOfRange { direction: Direction },
}

/// Persistence collaborator errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Entity not found: {entity_type:?} with id {id}")]
    NotFound { entity_type: EntityType, id: String },

    #[error("Insert failed for {entity_type:?}: {reason}")]
    InsertFailed { entity_type: EntityType, reason: String },

    #[error("Update failed for {entity_type:?} with id {id}: {reason}")]
    UpdateFailed {
        entity_type: EntityType,
        id: String,
        reason: String,
    },

    #[error("Store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

/// Validation errors for cross-boundary payloads and user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredFieldMissing { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Editor session lifecycle errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Operation {operation} requires an existing hillfort")]
    NotEditing { operation: &'static str },

    #[error("Session already {state}")]
    Closed { state: SessionState },

    #[error("Hillfort {id} has no persisted identity")]
    MissingIdentity { id: String },
}

/// Device location errors.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("No location fix available")]
    Unavailable,
}

/// Master error type for all hillfort editor errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HillfortError {
    #[error("Media error: {0}")]
    Media(#[from] MediaError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Location error: {0}")]
    Location(#[from] LocationError),
}

impl HillfortError {
    /// Whether the user can simply retry the same action.
    pub fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Media(_) | Self::Navigation(_) | Self::Validation(_)
        )
    }
}

impl StorageError {
    pub fn hillfort_not_found(id: HillfortId) -> Self {
        Self::NotFound {
            entity_type: EntityType::Hillfort,
            id: id.to_string(),
        }
    }
}

/// Result type alias for hillfort operations.
pub type HillfortResult<T> = Result<T, HillfortError>;

// =============================================================================
// TESTS
// =============================================================================
