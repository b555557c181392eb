//! User-facing notices raised by the editor.

use crate::{HillfortError, Timestamp};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: Timestamp,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }
}

impl From<&HillfortError> for Notification {
    /// Recoverable errors become warnings carrying the bare message;
    /// collaborator failures become errors.
    fn from(err: &HillfortError) -> Self {
        match err {
            HillfortError::Media(e) => Self::warning(e.to_string()),
            HillfortError::Navigation(e) => Self::warning(e.to_string()),
            HillfortError::Validation(e) => Self::warning(e.to_string()),
            other => Self::new(NotificationLevel::Error, other.to_string()),
        }
    }
}
