//! Block containers without markup of their own, and `<hr>`.

use crate::converter::block::{finish_block, open_block};
use crate::converter::context::Context;
use crate::converter::main::walk_children;
use crate::converter::utility::output::{ensure_trailing_newlines, trim_block_content, trim_trailing_hard_break};
use crate::diagnostics::Reporter;
use crate::node::Element;
use crate::options::ConversionOptions;

/// `div`, `section` and friends: their content becomes a block of its own.
pub(crate) fn handle(
    element: &Element,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    depth: usize,
    reporter: &mut Reporter<'_>,
) {
    let mut content = String::with_capacity(128);
    walk_children(element, &mut content, options, ctx, depth, reporter);

    let content = trim_block_content(&content);
    if content.is_empty() {
        return;
    }

    open_block(output, ctx);
    output.push_str(content);
    finish_block(output, ctx);
}

/// `---` always gets a blank line above it, otherwise it would turn the
/// preceding line into a setext heading.
pub(crate) fn thematic_break(output: &mut String, ctx: &Context) {
    trim_trailing_hard_break(output);
    if !output.is_empty() {
        ensure_trailing_newlines(output, 2);
    }
    output.push_str("---");
    finish_block(output, ctx);
}
