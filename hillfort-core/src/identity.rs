//! Identity types for hillfort entities

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Calendar date a hillfort was visited.
pub type VisitDate = NaiveDate;

macro_rules! define_entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub const fn new(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Generate a new UUIDv7 id (timestamp-sortable).
            pub fn now_v7() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

define_entity_id!(
    /// Persisted identity of a hillfort record.
    HillfortId
);
define_entity_id!(
    /// Persisted identity of a note.
    NoteId
);
define_entity_id!(
    /// Persisted identity of an image attachment.
    ImageId
);
define_entity_id!(
    /// Identity of an application user.
    UserId
);

/// Generate a random session-local id for an attachment that has not been
/// persisted yet.
pub fn new_local_id() -> Uuid {
    Uuid::new_v4()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_id_roundtrips_uuid() {
        let raw = Uuid::now_v7();
        let id = HillfortId::new(raw);
        assert_eq!(id.as_uuid(), raw);
        assert_eq!(id.to_string(), raw.to_string());
    }

    #[test]
    fn test_typed_id_serializes_transparently() {
        let id = NoteId::new(Uuid::nil());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
    }

    #[test]
    fn test_local_ids_are_random() {
        assert_ne!(new_local_id(), new_local_id());
        assert_eq!(new_local_id().get_version_num(), 4);
    }
}
