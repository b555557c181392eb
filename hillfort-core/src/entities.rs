//! Core entity structures

use crate::{new_local_id, HillfortId, ImageId, NoteId, UserId, VisitDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of images a hillfort record can hold.
pub const MAX_IMAGES: usize = 4;

/// Geographic position of a hillfort.
/// Defaults to (0, 0) until acquired from the device or edited on a map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether this is still the unset (0, 0) default.
    pub fn is_unset(&self) -> bool {
        self.lat == 0.0 && self.lng == 0.0
    }
}

/// Reference to an image chosen through the media picker (a URI string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(uri: &str) -> Self {
        Self::new(uri)
    }
}

/// Image attached to a hillfort record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAttachment {
    /// Persisted identity, assigned by the store.
    pub image_id: Option<ImageId>,
    /// Random id used before the attachment is persisted.
    pub local_id: Uuid,
    pub uri: ImageRef,
    /// Remote id of the owning hillfort, absent for records never synced.
    pub hillfort_remote_id: Option<String>,
}

impl ImageAttachment {
    /// Build a fresh, unpersisted attachment for the given owner.
    pub fn fresh(uri: ImageRef, hillfort_remote_id: Option<String>) -> Self {
        Self {
            image_id: None,
            local_id: new_local_id(),
            uri,
            hillfort_remote_id,
        }
    }
}

/// Free-text note attached to a hillfort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub note_id: Option<NoteId>,
    pub title: String,
    pub content: String,
    pub hillfort_id: Option<HillfortId>,
}

impl Note {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            note_id: None,
            title: title.into(),
            content: content.into(),
            hillfort_id: None,
        }
    }

    /// Text shown when a note is opened.
    pub fn describe(&self) -> String {
        format!("{}\n\n{}", self.title, self.content)
    }
}

/// Hillfort record - a visit log entry for one archaeological site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HillfortRecord {
    /// Local identity; `None` until the record is first persisted.
    pub id: Option<HillfortId>,
    /// Identity in the remote store, if the record has been synced.
    pub remote_id: Option<String>,
    pub name: String,
    pub description: String,
    pub visited: bool,
    pub date_visited: Option<VisitDate>,
    pub location: Location,
    pub images: Vec<ImageAttachment>,
    pub notes: Vec<Note>,
}

impl HillfortRecord {
    /// Identity equality: both records carry the same persisted id.
    /// Records without an id never match anything.
    pub fn same_identity(&self, other: &HillfortRecord) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}

/// Application user owning a list of hillforts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub email: String,
    pub hillforts: Vec<HillfortRecord>,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            user_id: UserId::now_v7(),
            email: email.into(),
            hillforts: Vec::new(),
        }
    }
}
