//! The Markdown emission engine.
//!
//! [`main`] walks the node tree and dispatches each element to a handler in
//! [`block`], [`inline`] or [`list`]; [`context`] carries the ancestry state
//! those handlers read.

pub(crate) mod block;
pub(crate) mod context;
pub(crate) mod inline;
pub(crate) mod list;
pub(crate) mod main;
pub(crate) mod utility;

pub use main::{
    Conversion, convert_html, convert_html_with_diagnostics, convert_reader, render, render_with_diagnostics,
};
