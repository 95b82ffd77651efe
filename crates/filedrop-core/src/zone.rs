//! Drop zone controller.
//!
//! [`DropZone`] is the sans-IO heart of the widget. The UI layer feeds it
//! drag events and file-name batches and acts on what comes back:
//! prevent the browser default, call the upload callback, and schedule a
//! dismissal for the message the zone just put on screen.

use std::time::Duration;

use crate::config::ZoneConfig;
use crate::drag::{DragTracker, DragTransition};
use crate::message::{Message, MessageKind, MessagePresenter, MessageTicket};
use crate::text::{TextContext, Texts};
use crate::validate::{Rejection, UploadRules, Verdict};

/// A status message that was just shown and must be dismissed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    /// Hand back to [`DropZone::dismiss`] when the timer fires.
    pub ticket: MessageTicket,
    /// How long to wait before dismissing.
    pub dismiss_after: Duration,
}

/// What happened to a submitted batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The batch passed validation. The caller must hand it to the
    /// upload callback.
    Accepted(Scheduled),
    /// The batch was refused and an error message is showing.
    Rejected(Rejection, Scheduled),
    /// Nothing was carried; no message, no upload.
    Empty,
}

impl Outcome {
    /// Whether the batch should be uploaded.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The dismissal to schedule, if a message was shown.
    #[must_use]
    pub const fn scheduled(&self) -> Option<Scheduled> {
        match self {
            Self::Accepted(s) | Self::Rejected(_, s) => Some(*s),
            Self::Empty => None,
        }
    }
}

/// State of one drop zone: hover tracking plus the current message.
#[derive(Debug, Clone)]
pub struct DropZone {
    config: ZoneConfig,
    rules: UploadRules,
    texts: Texts,
    drag: DragTracker,
    presenter: MessagePresenter,
}

impl DropZone {
    /// Create an idle zone.
    #[must_use]
    pub fn new(config: ZoneConfig, texts: Texts) -> Self {
        let rules = config.rules();
        Self {
            config,
            rules,
            texts,
            drag: DragTracker::new(),
            presenter: MessagePresenter::new(),
        }
    }

    /// The configuration this zone was built with.
    #[must_use]
    pub const fn config(&self) -> &ZoneConfig {
        &self.config
    }

    /// Validation rules in effect.
    #[must_use]
    pub const fn rules(&self) -> &UploadRules {
        &self.rules
    }

    /// Whether a drag payload is over the zone.
    #[must_use]
    pub const fn is_hovering(&self) -> bool {
        self.drag.is_hovering()
    }

    /// Handle `dragenter` on the zone or a descendant.
    pub const fn drag_enter(&mut self) -> Option<DragTransition> {
        self.drag.enter()
    }

    /// Handle `dragleave` on the zone or a descendant.
    pub const fn drag_leave(&mut self) -> Option<DragTransition> {
        self.drag.leave()
    }

    /// Handle `drop`: end hovering, then validate the dropped batch.
    pub fn drop<S: AsRef<str>>(&mut self, names: &[S]) -> Outcome {
        self.drag.reset();
        self.submit(names)
    }

    /// Handle a file picker selection. Same validation as [`Self::drop`].
    pub fn select<S: AsRef<str>>(&mut self, names: &[S]) -> Outcome {
        self.submit(names)
    }

    /// Hide the message shown under `ticket` unless it has been replaced.
    pub fn dismiss(&mut self, ticket: MessageTicket) -> bool {
        self.presenter.dismiss(ticket)
    }

    /// The visible status message, if any.
    #[must_use]
    pub const fn message(&self) -> Option<&Message> {
        self.presenter.current()
    }

    /// Resolved hover overlay text.
    #[must_use]
    pub fn hover_text(&self) -> String {
        self.texts.hover.resolve(&TextContext {
            count: self.rules.max_files,
            formats: &self.rules.formats,
            files: &[],
        })
    }

    fn submit<S: AsRef<str>>(&mut self, names: &[S]) -> Outcome {
        match self.rules.check(names) {
            Ok(Verdict::Empty) => Outcome::Empty,
            Ok(Verdict::Accepted) => {
                let files: Vec<String> = names.iter().map(|n| n.as_ref().to_owned()).collect();
                let text = self.texts.success.resolve(&TextContext {
                    files: &files,
                    ..TextContext::default()
                });
                Outcome::Accepted(self.show(text, MessageKind::Success))
            }
            Err(rejection) => {
                let text = match rejection {
                    Rejection::CountExceeded { max, .. } => {
                        self.texts.error_count.resolve(&TextContext {
                            count: Some(max),
                            ..TextContext::default()
                        })
                    }
                    Rejection::FormatRejected { .. } => {
                        self.texts.error_format.resolve(&TextContext {
                            formats: &self.rules.formats,
                            ..TextContext::default()
                        })
                    }
                };
                let scheduled = self.show(text, MessageKind::Error);
                Outcome::Rejected(rejection, scheduled)
            }
        }
    }

    fn show(&mut self, text: String, kind: MessageKind) -> Scheduled {
        Scheduled {
            ticket: self.presenter.show(text, kind),
            dismiss_after: self.config.durations.for_kind(kind),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::text::Text;

    fn zone(count: usize, formats: &[&str]) -> DropZone {
        DropZone::new(
            ZoneConfig {
                max_files: NonZeroUsize::new(count),
                formats: formats.iter().map(|s| (*s).to_owned()).collect(),
                ..ZoneConfig::default()
            },
            Texts::default(),
        )
    }

    #[test]
    fn drop_ends_hover() {
        let mut z = zone(0, &[]);
        z.drag_enter();
        z.drag_enter();
        assert!(z.is_hovering());
        z.drop(&["a.txt"]);
        assert!(!z.is_hovering());
        // The counter was reset, so a fresh enter starts hovering again.
        assert_eq!(z.drag_enter(), Some(DragTransition::Started));
    }

    #[test]
    fn select_does_not_touch_hover() {
        let mut z = zone(0, &[]);
        z.drag_enter();
        let outcome = z.select(&["a.txt"]);
        assert!(outcome.is_accepted());
        assert!(z.is_hovering());
    }

    #[test]
    fn accepted_shows_success_with_success_duration() {
        let mut z = zone(2, &["jpg"]);
        let outcome = z.drop(&["a.jpg", "b.JPG"]);
        let scheduled = outcome.scheduled().unwrap();
        assert!(outcome.is_accepted());
        assert_eq!(scheduled.dismiss_after, Duration::from_millis(1000));
        let message = z.message().unwrap();
        assert_eq!(message.kind, MessageKind::Success);
        assert_eq!(message.text, "Successfully uploaded");
    }

    #[test]
    fn count_error_references_limit() {
        let mut z = zone(2, &[]);
        let outcome = z.drop(&["a", "b", "c"]);
        assert!(matches!(
            outcome,
            Outcome::Rejected(Rejection::CountExceeded { actual: 3, .. }, _)
        ));
        assert_eq!(
            outcome.scheduled().unwrap().dismiss_after,
            Duration::from_millis(2000)
        );
        let message = z.message().unwrap();
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(message.text, "Only 2 files can be uploaded at a time");
    }

    #[test]
    fn format_error_references_whitelist() {
        let mut z = zone(0, &["jpg"]);
        let outcome = z.drop(&["a.png"]);
        assert!(!outcome.is_accepted());
        assert_eq!(
            z.message().unwrap().text,
            "Only following file formats are acceptable: jpg"
        );
    }

    #[test]
    fn empty_drop_shows_nothing() {
        let mut z = zone(0, &[]);
        let names: [&str; 0] = [];
        let outcome = z.drop(&names);
        assert_eq!(outcome, Outcome::Empty);
        assert_eq!(outcome.scheduled(), None);
        assert!(z.message().is_none());
    }

    #[test]
    fn empty_drop_keeps_previous_message() {
        let mut z = zone(1, &[]);
        z.drop(&["a", "b"]);
        let names: [&str; 0] = [];
        z.drop(&names);
        assert_eq!(z.message().unwrap().kind, MessageKind::Error);
    }

    #[test]
    fn later_outcome_supersedes_pending_dismissal() {
        let mut z = zone(1, &[]);
        let first = z.drop(&["a", "b"]).scheduled().unwrap();
        let second = z.drop(&["a"]).scheduled().unwrap();
        assert!(!z.dismiss(first.ticket));
        assert_eq!(z.message().unwrap().kind, MessageKind::Success);
        assert!(z.dismiss(second.ticket));
        assert!(z.message().is_none());
    }

    #[test]
    fn templates_receive_their_context() {
        let texts = Texts {
            hover: Text::template(|ctx| {
                format!(
                    "up to {} of {}",
                    ctx.count.map_or(0, NonZeroUsize::get),
                    ctx.formats.join("/")
                )
            }),
            success: Text::template(|ctx| ctx.files.join("+")),
            error_count: Text::template(|ctx| format!("max {:?}", ctx.count)),
            error_format: Text::template(|ctx| format!("fmt {}", ctx.formats.len())),
        };
        let mut z = DropZone::new(
            ZoneConfig {
                max_files: NonZeroUsize::new(2),
                formats: vec!["jpg".into(), "png".into()],
                ..ZoneConfig::default()
            },
            texts,
        );
        assert_eq!(z.hover_text(), "up to 2 of jpg/png");

        z.drop(&["a.jpg", "b.png"]);
        assert_eq!(z.message().unwrap().text, "a.jpg+b.png");

        z.drop(&["a.jpg", "b.png", "c.jpg"]);
        assert_eq!(z.message().unwrap().text, "max Some(2)");

        z.drop(&["a.gif"]);
        assert_eq!(z.message().unwrap().text, "fmt 2");
    }

    #[test]
    fn custom_durations_apply() {
        let mut z = DropZone::new(
            ZoneConfig {
                durations: crate::config::MessageDurations {
                    success_ms: 10,
                    error_ms: 20,
                },
                max_files: NonZeroUsize::new(1),
                ..ZoneConfig::default()
            },
            Texts::default(),
        );
        let ok = z.drop(&["a"]).scheduled().unwrap();
        let err = z.drop(&["a", "b"]).scheduled().unwrap();
        assert_eq!(ok.dismiss_after, Duration::from_millis(10));
        assert_eq!(err.dismiss_after, Duration::from_millis(20));
    }
}
