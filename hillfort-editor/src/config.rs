//! Configuration loading for the hillfort editor.
//!
//! Every field must be present in the TOML file. `EditorConfig::default()`
//! is the standard policy for hosts that do not ship a file.

use chrono::format::{Item, StrftimeItems};
use hillfort_core::MAX_IMAGES;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditorConfig {
    /// Largest selection accepted by a single image replace.
    pub max_images: usize,
    /// Ask before a picked selection replaces the existing images.
    pub confirm_image_reset: bool,
    /// Ask before deleting a hillfort.
    pub confirm_delete: bool,
    /// Try the device location when a new record is opened.
    pub acquire_location_on_create: bool,
    /// chrono strftime pattern for displaying visit dates.
    pub date_format: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_images: MAX_IMAGES,
            confirm_image_reset: true,
            confirm_delete: true,
            acquire_location_on_create: true,
            date_format: "%-d/%-m/%Y".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (set HILLFORT_EDITOR_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl EditorConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_env().ok_or(ConfigError::MissingConfigPath)?;
        Self::from_path(&path)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_images == 0 || self.max_images > MAX_IMAGES {
            return Err(ConfigError::InvalidValue {
                field: "max_images",
                reason: format!("must be between 1 and {MAX_IMAGES}"),
            });
        }
        if self.date_format.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "date_format",
                reason: "must not be empty".to_string(),
            });
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidValue {
                field: "date_format",
                reason: format!("'{}' is not a valid strftime pattern", self.date_format),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("HILLFORT_EDITOR_CONFIG").ok().map(PathBuf::from)
}
