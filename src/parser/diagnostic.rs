//! Non-fatal diagnostics collected while building a scene.
//!
//! Everything reported here is a warning: the offending element or
//! directive is skipped and the build carries on.

use std::fmt;

/// Code reported for elements whose tag is not a known shape.
pub const UNRECOGNIZED_TAG: &str = "rgbsvg::scene::unrecognized-tag";

/// Code reported for transform directives of an unknown kind.
pub const UNRECOGNIZED_TRANSFORM: &str = "rgbsvg::scene::unrecognized-transform";

/// Code reported when an `id` is declared a second time.
pub const DUPLICATE_ID: &str = "rgbsvg::scene::duplicate-id";

/// One skipped element or directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// One of the `rgbsvg::scene::*` codes above.
    pub code: &'static str,
    pub message: String,
    pub help: Option<&'static str>,
}

impl Diagnostic {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning[{}]: {}", self.code, self.message)
    }
}

/// Diagnostics of one build, in document order.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Record a diagnostic and echo it to the log.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        log::warn!("{}", diagnostic.message);
        self.entries.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Whether any diagnostic carries `code`.
    pub fn contains_code(&self, code: &str) -> bool {
        self.entries.iter().any(|d| d.code == code)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
