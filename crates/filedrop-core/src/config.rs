//! Serializable zone configuration.
//!
//! Covers everything about a zone that is plain data: limits, message
//! durations, and the click-to-browse flag. Copy and styles live in
//! [`crate::text`] and [`crate::style`] because templates are closures.

use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::message::MessageKind;
use crate::validate::UploadRules;

/// Errors loading a [`ZoneConfig`] from disk.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid zone configuration.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// How long each kind of status message stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageDurations {
    /// Milliseconds a success message stays up.
    pub success_ms: u32,
    /// Milliseconds an error message stays up.
    pub error_ms: u32,
}

impl MessageDurations {
    /// Default success message duration in milliseconds.
    pub const DEFAULT_SUCCESS_MS: u32 = 1000;
    /// Default error message duration in milliseconds.
    pub const DEFAULT_ERROR_MS: u32 = 2000;

    /// Display duration for a message of `kind`.
    #[must_use]
    pub fn for_kind(&self, kind: MessageKind) -> Duration {
        let ms = match kind {
            MessageKind::Success => self.success_ms,
            MessageKind::Error => self.error_ms,
        };
        Duration::from_millis(u64::from(ms))
    }
}

impl Default for MessageDurations {
    fn default() -> Self {
        Self {
            success_ms: Self::DEFAULT_SUCCESS_MS,
            error_ms: Self::DEFAULT_ERROR_MS,
        }
    }
}

/// Plain-data configuration for one drop zone.
///
/// Immutable for the lifetime of the zone that holds it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    /// Maximum files per batch. Absent means unlimited.
    pub max_files: Option<NonZeroUsize>,
    /// Accepted filename extensions. Empty means unrestricted.
    pub formats: Vec<String>,
    /// Status message durations.
    pub durations: MessageDurations,
    /// Whether clicking the zone opens the native file picker.
    pub open_dialog_on_click: bool,
}

impl ZoneConfig {
    /// Validation rules derived from this configuration.
    #[must_use]
    pub fn rules(&self) -> UploadRules {
        UploadRules {
            max_files: self.max_files,
            formats: self.formats.clone(),
        }
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if `json` is malformed or a field
    /// has the wrong type (e.g. `"max_files": 0`).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Json`] if it cannot be parsed.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
