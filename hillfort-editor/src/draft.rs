//! The in-progress hillfort record owned by an editor session.

use hillfort_core::{
    HillfortRecord, ImageAttachment, ImageRef, Location, MediaError, SessionMode, VisitDate,
};
use serde::{Deserialize, Serialize};

/// The four user-editable text/flag fields of a hillfort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftFields {
    pub name: String,
    pub description: String,
    pub visited: bool,
    pub date_visited: Option<VisitDate>,
}

/// Mutable copy of a hillfort during an edit session.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    record: HillfortRecord,
    mode: SessionMode,
    /// Set once the location has been acquired or edited by hand.
    location_settled: bool,
}

impl Draft {
    /// Hydrate from a prior record (editing) or start empty (new).
    pub fn start(prior: Option<HillfortRecord>) -> Self {
        match prior {
            Some(record) => Self {
                record,
                mode: SessionMode::Editing,
                location_settled: true,
            },
            None => Self {
                record: HillfortRecord::default(),
                mode: SessionMode::New,
                location_settled: false,
            },
        }
    }

    pub fn record(&self) -> &HillfortRecord {
        &self.record
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == SessionMode::Editing
    }

    /// Overwrite name, description, visited and date. Location, images and
    /// notes are left alone.
    pub fn apply_fields(&mut self, fields: DraftFields) -> &HillfortRecord {
        self.record.name = fields.name;
        self.record.description = fields.description;
        self.record.visited = fields.visited;
        self.record.date_visited = fields.date_visited;
        &self.record
    }

    pub fn set_date(&mut self, date: VisitDate) {
        self.record.date_visited = Some(date);
    }

    /// Offer an automatically acquired location. Only the first offer on a
    /// new record is taken; returns whether it was applied.
    pub fn offer_location(&mut self, location: Location) -> bool {
        if self.mode != SessionMode::New || self.location_settled {
            return false;
        }
        self.record.location = location;
        self.location_settled = true;
        true
    }

    /// Location chosen explicitly by the user. Always applied.
    pub fn set_location(&mut self, location: Location) {
        self.record.location = location;
        self.location_settled = true;
    }

    /// Replace the whole image list with fresh attachments for `selected`.
    ///
    /// All-or-nothing: a selection longer than `max` is rejected and the
    /// current list is left untouched. Output order matches input order.
    pub fn replace_images(
        &mut self,
        selected: Vec<ImageRef>,
        max: usize,
    ) -> Result<&[ImageAttachment], MediaError> {
        if selected.len() > max {
            return Err(MediaError::TooMany {
                selected: selected.len(),
                max,
            });
        }
        let remote_id = self.record.remote_id.clone();
        self.record.images = selected
            .into_iter()
            .map(|uri| ImageAttachment::fresh(uri, remote_id.clone()))
            .collect();
        Ok(&self.record.images)
    }

    pub(crate) fn record_mut(&mut self) -> &mut HillfortRecord {
        &mut self.record
    }
}
