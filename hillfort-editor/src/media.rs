//! Image attachment: picker-driven selection and whole-list replacement.

use crate::session::EditorSession;
use hillfort_core::{HillfortError, HillfortResult, ImageAttachment, ImageRef, Notification};
use tracing::{info, warn};

const RESET_IMAGES_PROMPT: &str = "This will reset the existing images, continue?";

impl EditorSession {
    /// Replace the draft's images with `selected`.
    ///
    /// More than `max_images` entries is rejected as a unit with
    /// `MediaError::TooMany`, a notice is shown, and the list is unchanged.
    pub fn replace_images(&mut self, selected: Vec<ImageRef>) -> HillfortResult<Vec<ImageAttachment>> {
        self.ensure_open()?;
        let max = self.ctx.config.max_images;
        let count = selected.len();

        match self.draft.replace_images(selected, max) {
            Ok(images) => {
                info!(count, "Replaced hillfort images");
                self.ctx.callbacks.show_images(images);
                Ok(images.to_vec())
            }
            Err(err) => {
                warn!(selected = count, max, "Rejected image selection");
                let err = HillfortError::from(err);
                self.ctx.callbacks.notify(Notification::from(&err));
                Err(err)
            }
        }
    }

    /// Run the picker and, after confirmation, replace the images.
    ///
    /// Returns `Ok(None)` when the user cancels the picker or declines the
    /// reset prompt.
    pub async fn select_images(&mut self) -> HillfortResult<Option<Vec<ImageAttachment>>> {
        self.ensure_open()?;
        let Some(selected) = self.ctx.media.pick_images().await else {
            return Ok(None);
        };

        if self.ctx.config.confirm_image_reset
            && !self.ctx.callbacks.confirm(RESET_IMAGES_PROMPT).await
        {
            return Ok(None);
        }

        self.replace_images(selected).map(Some)
    }
}
