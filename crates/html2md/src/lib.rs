//! HTML to Markdown conversion.
//!
//! The crate is split along the conversion pipeline:
//!
//! - [`dom`] parses HTML with html5ever into an owned [`Node`] tree,
//! - the converter walks that tree and emits Markdown, reporting every node it
//!   can only render in degraded form through a callback,
//! - [`text`] holds the escaping and whitespace rules shared by both.
//!
//! ```
//! use html2md::{ConversionOptions, convert_html};
//!
//! let markdown = convert_html("<p>Hello <strong>world</strong></p>", &ConversionOptions::default())?;
//! assert_eq!(markdown, "Hello **world**\n");
//! # Ok::<(), html2md::ConversionError>(())
//! ```
//!
//! Trees can also be built by hand and rendered with [`render`], which never
//! fails:
//!
//! ```
//! use html2md::{ConversionOptions, Element, Node, render};
//!
//! let img: Node = Element::new("img").with_attr("src", "a.png").into();
//! let mut reports = Vec::new();
//! let markdown = render(&img, &ConversionOptions::default(), |d| reports.push(d));
//! assert_eq!(markdown, "![](a.png)");
//! assert!(reports.is_empty());
//! ```

mod converter;
mod diagnostics;
pub mod dom;
mod error;
mod node;
mod options;
pub mod text;

pub use converter::{
    Conversion, convert_html, convert_html_with_diagnostics, convert_reader, render, render_with_diagnostics,
};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use dom::{parse_html, parse_reader};
pub use error::{ConversionError, Result};
pub use node::{Element, Node};
pub use options::{BulletStyle, ConversionOptions, EmphasisSymbol, ListIndentType, NewlineStyle};
