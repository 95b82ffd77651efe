//! filedrop-core: Drop zone state and validation (sans-IO).
//!
//! Everything a drag-and-drop upload zone decides, without touching the
//! browser: enter/leave hover tracking, batch validation against a count
//! limit and an extension whitelist, and the single transient status
//! message with its dismissal bookkeeping.
//!
//! This crate has **no I/O dependencies** -- it operates on file names
//! and returns outcomes. All DOM interaction lives in `filedrop-io`.

pub mod config;
pub mod drag;
pub mod message;
pub mod style;
pub mod text;
pub mod validate;
pub mod zone;

pub use config::{ConfigError, MessageDurations, ZoneConfig};
pub use drag::{DragTracker, DragTransition};
pub use message::{Message, MessageKind, MessagePresenter, MessageTicket};
pub use style::ZoneStyles;
pub use text::{Text, TextContext, Texts};
pub use validate::{Rejection, UploadRules, Verdict};
pub use zone::{DropZone, Outcome, Scheduled};
