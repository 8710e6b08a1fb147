//! Block-level element handlers.
//!
//! Blocks are separated by one blank line. Inside a list item the separator
//! is a single newline so the list stays tight.

pub(crate) mod blockquote;
pub(crate) mod code_block;
pub(crate) mod container;
pub(crate) mod heading;
pub(crate) mod paragraph;

use crate::converter::context::Context;
use crate::converter::utility::output::{ensure_trailing_newlines, trim_trailing_hard_break};

/// Prepare `output` for a new block.
pub(crate) fn open_block(output: &mut String, ctx: &Context) {
    trim_trailing_hard_break(output);
    if output.is_empty() {
        return;
    }
    ensure_trailing_newlines(output, separator_newlines(ctx));
}

/// Terminate the block just written.
pub(crate) fn finish_block(output: &mut String, ctx: &Context) {
    ensure_trailing_newlines(output, separator_newlines(ctx));
}

/// Terminate a list or blockquote.
///
/// These always end with a blank line, even inside a list item: a line
/// following them directly would be read as a lazy continuation of their last
/// paragraph. Trailing blank lines are trimmed when the item ends.
pub(crate) fn finish_container_block(output: &mut String) {
    ensure_trailing_newlines(output, 2);
}

const fn separator_newlines(ctx: &Context) -> usize {
    if ctx.in_list_item { 1 } else { 2 }
}
