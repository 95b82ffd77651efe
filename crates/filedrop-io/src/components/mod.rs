//! Dioxus UI components for filedrop.

mod drop_zone;

pub use drop_zone::FileDropZone;
