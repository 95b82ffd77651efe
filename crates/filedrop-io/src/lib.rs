//! filedrop-io: Browser I/O and Dioxus component library.
//!
//! Wires the sans-IO [`filedrop_core::DropZone`] to real drag events,
//! a hidden native file input, and browser timers, and exposes the
//! result as the [`FileDropZone`] component.

pub mod components;
pub mod dialog;
pub mod timer;

pub use components::FileDropZone;
pub use filedrop_core::{MessageDurations, Text, TextContext, Texts, ZoneStyles};
