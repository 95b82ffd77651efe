//! Transient status overlay.
//!
//! At most one message is visible. Each [`MessagePresenter::show`] call
//! replaces whatever is on screen and hands back a [`MessageTicket`]; the
//! dismissal timer later presents that ticket, and only the newest ticket
//! can hide the overlay.

use serde::{Deserialize, Serialize};

/// Category of a status message, used to pick styling and duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// The batch was accepted and handed to the upload callback.
    Success,
    /// The batch was rejected.
    Error,
}

impl MessageKind {
    /// Lowercase name, suitable for CSS class suffixes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A visible status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Resolved display text.
    pub text: String,
    /// Success or error.
    pub kind: MessageKind,
}

/// Identifies one [`MessagePresenter::show`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageTicket(u64);

/// Holds the single current message.
#[derive(Debug, Clone, Default)]
pub struct MessagePresenter {
    current: Option<Message>,
    generation: u64,
}

impl MessagePresenter {
    /// Create a presenter with nothing shown.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }

    /// Display `text`, superseding any current message.
    pub fn show(&mut self, text: String, kind: MessageKind) -> MessageTicket {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(Message { text, kind });
        MessageTicket(self.generation)
    }

    /// Hide the message shown under `ticket`.
    ///
    /// Returns `false` and leaves the overlay alone when a newer message
    /// has been shown since, or when nothing is visible.
    pub fn dismiss(&mut self, ticket: MessageTicket) -> bool {
        if ticket.0 != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    /// The visible message, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Message> {
        self.current.as_ref()
    }

    /// Whether a message is visible.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let presenter = MessagePresenter::new();
        assert!(!presenter.is_visible());
        assert_eq!(presenter.current(), None);
    }

    #[test]
    fn show_then_dismiss() {
        let mut presenter = MessagePresenter::new();
        let ticket = presenter.show("done".into(), MessageKind::Success);
        assert_eq!(presenter.current().unwrap().text, "done");
        assert!(presenter.dismiss(ticket));
        assert!(!presenter.is_visible());
    }

    #[test]
    fn newer_message_supersedes_older() {
        let mut presenter = MessagePresenter::new();
        let first = presenter.show("first".into(), MessageKind::Error);
        let second = presenter.show("second".into(), MessageKind::Success);

        let current = presenter.current().unwrap();
        assert_eq!(current.text, "second");
        assert_eq!(current.kind, MessageKind::Success);

        // The first timer fires late: must not hide the second message.
        assert!(!presenter.dismiss(first));
        assert!(presenter.is_visible());

        assert!(presenter.dismiss(second));
        assert!(!presenter.is_visible());
    }

    #[test]
    fn double_dismiss_is_noop() {
        let mut presenter = MessagePresenter::new();
        let ticket = presenter.show("x".into(), MessageKind::Error);
        assert!(presenter.dismiss(ticket));
        assert!(!presenter.dismiss(ticket));
    }

    #[test]
    fn tickets_increase() {
        let mut presenter = MessagePresenter::new();
        let a = presenter.show("a".into(), MessageKind::Error);
        let b = presenter.show("b".into(), MessageKind::Error);
        assert!(b > a);
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&MessageKind::Error).unwrap();
        assert_eq!(json, "\"error\"");
        assert_eq!(MessageKind::Success.as_str(), "success");
    }
}
