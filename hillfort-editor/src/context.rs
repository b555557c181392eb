//! Explicit session context threaded through every editor operation.

use crate::config::EditorConfig;
use hillfort_core::{DatePicker, EditorCallbacks, LocationProvider, MediaPicker, UserId};
use hillfort_storage::HillfortStore;
use std::sync::Arc;

/// The active user plus every collaborator the editor drives.
#[derive(Clone)]
pub struct SessionContext {
    pub user: UserId,
    pub store: Arc<dyn HillfortStore>,
    pub location: Arc<dyn LocationProvider>,
    pub media: Arc<dyn MediaPicker>,
    pub dates: Arc<dyn DatePicker>,
    pub callbacks: Arc<dyn EditorCallbacks>,
    pub config: EditorConfig,
}

impl SessionContext {
    pub fn new(
        user: UserId,
        store: Arc<dyn HillfortStore>,
        location: Arc<dyn LocationProvider>,
        media: Arc<dyn MediaPicker>,
        dates: Arc<dyn DatePicker>,
        callbacks: Arc<dyn EditorCallbacks>,
    ) -> Self {
        Self {
            user,
            store,
            location,
            media,
            dates,
            callbacks,
            config: EditorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("user", &self.user)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
