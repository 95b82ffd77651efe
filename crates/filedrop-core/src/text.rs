//! Message copy: literal strings or templates resolved at display time.

use std::fmt;
use std::num::NonZeroUsize;
use std::rc::Rc;

/// Values available to a [`Text::Template`] when it is resolved.
///
/// Which fields are populated depends on the message: the hover text
/// sees `count` and `formats`, the success text sees `files`, the count
/// error sees `count`, and the format error sees `formats`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextContext<'a> {
    /// Configured maximum files per batch.
    pub count: Option<NonZeroUsize>,
    /// Configured extension whitelist.
    pub formats: &'a [String],
    /// Names of the files in the accepted batch.
    pub files: &'a [String],
}

type TemplateFn = dyn Fn(&TextContext<'_>) -> String;

/// A piece of user-facing copy.
#[derive(Clone)]
pub enum Text {
    /// Shown as-is.
    Literal(String),
    /// Rendered from the current context every time it is shown.
    Template(Rc<TemplateFn>),
}

impl Text {
    /// Wrap a closure as a template.
    pub fn template<F>(f: F) -> Self
    where
        F: Fn(&TextContext<'_>) -> String + 'static,
    {
        Self::Template(Rc::new(f))
    }

    /// Produce the string to display.
    #[must_use]
    pub fn resolve(&self, ctx: &TextContext<'_>) -> String {
        match self {
            Self::Literal(s) => s.clone(),
            Self::Template(f) => f(ctx),
        }
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Self::Template(_) => f.write_str("Template(..)"),
        }
    }
}

/// Literals compare by value, templates by identity.
impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Template(a), Self::Template(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_owned())
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::Literal(s)
    }
}

/// Default hover copy.
pub const DEFAULT_HOVER: &str = "Drop files here";

/// Default success copy.
pub const DEFAULT_SUCCESS: &str = "Successfully uploaded";

/// Default count error: `Only 3 files can be uploaded at a time`.
#[must_use]
pub fn default_error_count(ctx: &TextContext<'_>) -> String {
    match ctx.count {
        Some(n) if n.get() == 1 => "Only 1 file can be uploaded at a time".to_owned(),
        Some(n) => format!("Only {n} files can be uploaded at a time"),
        None => "Too many files to upload at a time".to_owned(),
    }
}

/// Default format error: `Only following file formats are acceptable: jpg, png`.
#[must_use]
pub fn default_error_format(ctx: &TextContext<'_>) -> String {
    format!(
        "Only following file formats are acceptable: {}",
        ctx.formats.join(", ")
    )
}

/// All configurable copy for one zone.
#[derive(Debug, Clone, PartialEq)]
pub struct Texts {
    /// Overlay while a payload hovers over the zone.
    pub hover: Text,
    /// Shown after a batch is accepted.
    pub success: Text,
    /// Shown when a batch exceeds the count limit.
    pub error_count: Text,
    /// Shown when a file fails the extension whitelist.
    pub error_format: Text,
}

impl Default for Texts {
    fn default() -> Self {
        Self {
            hover: Text::from(DEFAULT_HOVER),
            success: Text::from(DEFAULT_SUCCESS),
            error_count: Text::template(default_error_count),
            error_format: Text::template(default_error_format),
        }
    }
}
