//! Error types for HTML to Markdown conversion.

use thiserror::Error;

/// Errors that stop a conversion before any Markdown is produced.
///
/// Problems with individual nodes are never errors: they are reported as
/// [`Diagnostic`](crate::Diagnostic)s and the conversion carries on.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The HTML input could not be parsed into a document.
    #[error("HTML parsing error: {0}")]
    ParseError(String),

    /// The parsed document did not contain a root element to render.
    #[error("document has no root element to render")]
    InvalidRoot,

    /// I/O error while reading the HTML input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConversionError>;
