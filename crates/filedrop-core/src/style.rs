//! Inline CSS for the zone container and its overlays.
//!
//! Caller overrides are appended after the defaults, so any property
//! they set wins by the usual last-declaration rule.

use crate::message::MessageKind;

/// Container: a positioning context filling its parent.
pub const CONTAINER: &str = "position: relative; width: 100%; height: 100%;";

/// Shared overlay look for hover and status messages.
pub const MESSAGE: &str = "position: absolute; top: 0; left: 0; right: 0; bottom: 0; \
     width: 100%; height: 100%; z-index: 9999; display: flex; align-items: center; \
     justify-content: center; flex-flow: column nowrap; background-color: #e7e7e7; \
     color: #7f8e99; font-size: 24px; font-family: Tahoma, sans-serif; opacity: 1; \
     text-align: center;";

/// Success tint. Status messages let drag events through so a drag
/// over the zone never targets a node that its timer removes.
pub const MESSAGE_SUCCESS: &str =
    "background-color: #e7f7e7; color: #8ecf99; pointer-events: none;";

/// Error tint. Passes drag events through like [`MESSAGE_SUCCESS`].
pub const MESSAGE_ERROR: &str =
    "background-color: #f7e7e7; color: #cf8e99; pointer-events: none;";

/// Caller overrides, each a string of CSS declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneStyles {
    /// Applied to the zone container.
    pub container: String,
    /// Applied to the hover overlay and, underneath the kind-specific
    /// overrides, to every status message.
    pub hover: String,
    /// Applied to success messages.
    pub success: String,
    /// Applied to error messages.
    pub error: String,
}

impl ZoneStyles {
    /// Full inline style for the container.
    #[must_use]
    pub fn container_style(&self) -> String {
        join(&[CONTAINER, &self.container])
    }

    /// Full inline style for the hover overlay.
    #[must_use]
    pub fn hover_style(&self) -> String {
        join(&[MESSAGE, &self.hover])
    }

    /// Full inline style for a status message of `kind`.
    #[must_use]
    pub fn message_style(&self, kind: MessageKind) -> String {
        let (tint, custom) = match kind {
            MessageKind::Success => (MESSAGE_SUCCESS, self.success.as_str()),
            MessageKind::Error => (MESSAGE_ERROR, self.error.as_str()),
        };
        join(&[MESSAGE, tint, &self.hover, custom])
    }
}

/// Concatenate declaration blocks, skipping empty ones and making sure
/// each ends in `;`.
fn join(parts: &[&str]) -> String {
    let mut out = String::new();
    for part in parts {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
        if !part.ends_with(';') {
            out.push(';');
        }
    }
    out
}
