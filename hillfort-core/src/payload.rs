//! Payloads handed to the editor across the UI boundary.
//!
//! Every field that may be missing is an `Option`; extraction goes through
//! a validating accessor instead of an assertion.

use crate::{HillfortRecord, HillfortResult, Location, ValidationError};
use serde::{Deserialize, Serialize};

/// Launch payload for an editor session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorLaunch {
    /// Record to edit; absent when creating a new hillfort.
    #[serde(default)]
    pub hillfort_edit: Option<HillfortRecord>,
}

impl EditorLaunch {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn edit(record: HillfortRecord) -> Self {
        Self {
            hillfort_edit: Some(record),
        }
    }

    /// Parse a JSON launch payload.
    pub fn from_json(json: &str) -> HillfortResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            ValidationError::InvalidValue {
                field: "launch".to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// The prior record, checked to carry a persisted identity.
    pub fn prior_record(self) -> HillfortResult<Option<HillfortRecord>> {
        match self.hillfort_edit {
            Some(record) if record.id.is_none() => Err(ValidationError::RequiredFieldMissing {
                field: "id".to_string(),
            }
            .into()),
            other => Ok(other),
        }
    }
}

/// Result returned by the map-based location editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationResult {
    #[serde(default)]
    pub location: Option<Location>,
}

impl LocationResult {
    pub fn required(self) -> HillfortResult<Location> {
        self.location.ok_or_else(|| {
            ValidationError::RequiredFieldMissing {
                field: "location".to_string(),
            }
            .into()
        })
    }
}
