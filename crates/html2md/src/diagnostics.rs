//! Recoverable conversion anomalies.
//!
//! The converter never aborts because of a single node. Whenever it has to
//! fall back to a degraded rendering it hands a [`Diagnostic`] to the caller's
//! callback and keeps going.

use std::fmt;

/// The class of a reported anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DiagnosticKind {
    /// A tag with no Markdown rendering; its children were rendered in place.
    UnsupportedTag,
    /// A tag lacking an attribute it needs, such as `<a>` without `href`.
    MissingAttribute,
    /// Unexpected nesting, such as `<li>` outside a list.
    StructuralAnomaly,
}

impl DiagnosticKind {
    /// Short, stable name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnsupportedTag => "unsupported-tag",
            Self::MissingAttribute => "missing-attribute",
            Self::StructuralAnomaly => "structural-anomaly",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single report delivered to the error callback.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// Tag of the offending element, when there is one.
    pub tag: Option<String>,
    /// Human readable description.
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic attached to a tag.
    pub fn new(kind: DiagnosticKind, tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            tag: Some(tag.into()),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "<{tag}>: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Forwards reports to the caller's callback and mirrors them to `tracing`.
pub(crate) struct Reporter<'a> {
    sink: &'a mut dyn FnMut(Diagnostic),
    count: usize,
}

impl<'a> Reporter<'a> {
    pub(crate) fn new(sink: &'a mut dyn FnMut(Diagnostic)) -> Self {
        Self { sink, count: 0 }
    }

    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(kind = %diagnostic.kind, tag = ?diagnostic.tag, "{}", diagnostic.message);
        self.count += 1;
        (self.sink)(diagnostic);
    }

    pub(crate) fn unsupported_tag(&mut self, tag: &str) {
        self.report(Diagnostic::new(
            DiagnosticKind::UnsupportedTag,
            tag,
            "unsupported tag skipped, children rendered in place",
        ));
    }

    pub(crate) fn missing_attribute(&mut self, tag: &str, attribute: &str, fallback: &str) {
        self.report(Diagnostic::new(
            DiagnosticKind::MissingAttribute,
            tag,
            format!("missing `{attribute}` attribute, {fallback}"),
        ));
    }

    pub(crate) fn anomaly(&mut self, tag: &str, message: impl Into<String>) {
        self.report(Diagnostic::new(DiagnosticKind::StructuralAnomaly, tag, message));
    }

    /// Number of reports delivered so far.
    pub(crate) const fn count(&self) -> usize {
        self.count
    }
}
