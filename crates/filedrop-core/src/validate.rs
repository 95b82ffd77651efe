//! Upload batch validation.
//!
//! Rules are checked in a fixed order: file count first, then file
//! extensions. Only the first failing rule is reported, and a rejected
//! batch is rejected as a whole.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Reason a batch was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum Rejection {
    /// The batch holds more files than the configured maximum.
    #[error("{actual} files dropped but at most {max} allowed")]
    CountExceeded {
        /// Configured maximum.
        max: NonZeroUsize,
        /// Number of files in the batch.
        actual: usize,
    },

    /// At least one file name does not end with a whitelisted extension.
    #[error("{file:?} does not match any of: {}", .formats.join(", "))]
    FormatRejected {
        /// First file in batch order that failed the whitelist.
        file: String,
        /// The configured whitelist.
        formats: Vec<String>,
    },
}

/// Result of validating a batch that was not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Non-empty batch that passed every rule.
    Accepted,
    /// Nothing to upload (e.g. a text selection was dropped).
    Empty,
}

/// Count limit and extension whitelist applied to every batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRules {
    /// Maximum files per batch. `None` means unlimited.
    pub max_files: Option<NonZeroUsize>,
    /// Accepted filename suffixes, matched case-insensitively.
    /// Empty means every file is accepted.
    pub formats: Vec<String>,
}

impl UploadRules {
    /// Build rules from a raw count where `0` means unlimited.
    #[must_use]
    pub fn new(count: usize, formats: Vec<String>) -> Self {
        Self {
            max_files: NonZeroUsize::new(count),
            formats,
        }
    }

    /// Check a batch of file names against the rules.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::CountExceeded`] if the batch is larger than
    /// `max_files`, otherwise [`Rejection::FormatRejected`] if any name
    /// fails the whitelist.
    pub fn check<S: AsRef<str>>(&self, names: &[S]) -> Result<Verdict, Rejection> {
        if let Some(max) = self.max_files
            && names.len() > max.get()
        {
            return Err(Rejection::CountExceeded {
                max,
                actual: names.len(),
            });
        }

        if let Some(bad) = names.iter().find(|name| !self.accepts(name.as_ref())) {
            return Err(Rejection::FormatRejected {
                file: bad.as_ref().to_owned(),
                formats: self.formats.clone(),
            });
        }

        if names.is_empty() {
            Ok(Verdict::Empty)
        } else {
            Ok(Verdict::Accepted)
        }
    }

    /// Whether a single file name passes the extension whitelist.
    #[must_use]
    pub fn accepts(&self, name: &str) -> bool {
        if self.formats.is_empty() {
            return true;
        }
        let name = name.to_lowercase();
        self.formats
            .iter()
            .any(|format| name.ends_with(&format.to_lowercase()))
    }

    /// Whether a file picker should allow selecting more than one file.
    #[must_use]
    pub fn allows_multiple(&self) -> bool {
        self.max_files.is_none_or(|max| max.get() != 1)
    }

    /// Value for an `<input type="file" accept=...>` filter.
    ///
    /// Each format is dot-prefixed (`jpg` becomes `.jpg`). Returns `None`
    /// when there is no whitelist.
    #[must_use]
    pub fn accept_attribute(&self) -> Option<String> {
        if self.formats.is_empty() {
            return None;
        }
        let parts: Vec<String> = self
            .formats
            .iter()
            .map(|format| {
                if format.starts_with('.') {
                    format.clone()
                } else {
                    format!(".{format}")
                }
            })
            .collect();
        Some(parts.join(","))
    }
}
