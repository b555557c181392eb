//! Contracts for the platform services the editor drives.
//!
//! The editor never talks to widgets or OS services directly. A host adapter
//! implements these traits and the editor calls them by name.

use crate::{
    HillfortRecord, ImageAttachment, ImageRef, Location, LocationError, Note, Notification,
    VisitDate,
};
use async_trait::async_trait;

/// One-shot device location lookup.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Best-effort last known position of the device.
    ///
    /// # Returns
    /// * `Ok(Some(location))` - A fix is available
    /// * `Ok(None)` - The provider answered but has no fix
    /// * `Err(LocationError)` - Permission denied or provider failure
    async fn last_known_location(&self) -> Result<Option<Location>, LocationError>;
}

/// Platform image picker.
#[async_trait]
pub trait MediaPicker: Send + Sync {
    /// Present the picker. `None` means the user cancelled.
    async fn pick_images(&self) -> Option<Vec<ImageRef>>;
}

/// Platform date picker.
#[async_trait]
pub trait DatePicker: Send + Sync {
    /// Present the picker seeded with `initial`. `None` means the user cancelled.
    async fn pick_date(&self, initial: VisitDate) -> Option<VisitDate>;
}

/// Rendering and dialog hooks implemented by the hosting UI.
#[async_trait]
pub trait EditorCallbacks: Send + Sync {
    fn show_record(&self, record: &HillfortRecord);

    fn show_images(&self, images: &[ImageAttachment]);

    fn show_notes(&self, notes: &[Note]);

    fn show_location(&self, location: Location);

    fn notify(&self, notification: Notification);

    /// Ask the user a yes/no question.
    async fn confirm(&self, prompt: &str) -> bool;

    /// Open a new editor session on a sibling record.
    fn open_record(&self, record: &HillfortRecord);

    /// Leave the editor and go back to the hillfort list.
    fn return_to_list(&self);
}
