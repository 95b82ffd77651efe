//! Native file picker activation.
//!
//! Dioxus cannot open a file dialog on its own. Each zone renders a
//! hidden `<input type="file">` with a unique id; clicking the zone
//! looks the input up and calls `click()` on it.
//!
//! All functions except [`next_input_id`] require a browser environment
//! (`wasm32-unknown-unknown` target).

use std::sync::atomic::{AtomicUsize, Ordering};

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

/// Errors that can occur when driving the hidden file input.
#[derive(Debug, thiserror::Error)]
pub enum DialogError {
    /// A browser API call returned an error or a required object was missing.
    #[error("browser API error: {0}")]
    JsError(String),

    /// No element with the zone's input id is in the document.
    #[error("file input #{0} not found")]
    MissingInput(String),
}

impl From<JsValue> for DialogError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

static NEXT_INPUT_ID: AtomicUsize = AtomicUsize::new(0);

/// Allocate a document-unique id for a zone's hidden input.
#[must_use]
pub fn next_input_id() -> String {
    let n = NEXT_INPUT_ID.fetch_add(1, Ordering::Relaxed);
    format!("filedrop-input-{n}")
}

/// Open the native file picker behind the input with `id`.
///
/// # Errors
///
/// Returns [`DialogError::MissingInput`] if the input is not mounted, or
/// [`DialogError::JsError`] if the window or document is unavailable or
/// the element is not an `<input>`.
pub fn open(id: &str) -> Result<(), DialogError> {
    find_input(id)?.click();
    Ok(())
}

/// Clear the input's selection so picking the same file again fires
/// another `change` event.
///
/// # Errors
///
/// Same as [`open`].
pub fn reset(id: &str) -> Result<(), DialogError> {
    find_input(id)?.set_value("");
    Ok(())
}

fn find_input(id: &str) -> Result<web_sys::HtmlInputElement, DialogError> {
    let window =
        web_sys::window().ok_or_else(|| DialogError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DialogError::JsError("no document".into()))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| DialogError::MissingInput(id.to_owned()))?
        .dyn_into::<web_sys::HtmlInputElement>()
        .map_err(|e| DialogError::JsError(format!("failed to cast element: {e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_ids_are_unique() {
        let a = next_input_id();
        let b = next_input_id();
        assert_ne!(a, b);
        assert!(a.starts_with("filedrop-input-"));
    }

    #[test]
    fn missing_input_display() {
        let err = DialogError::MissingInput("filedrop-input-7".into());
        assert_eq!(err.to_string(), "file input #filedrop-input-7 not found");
    }
}
