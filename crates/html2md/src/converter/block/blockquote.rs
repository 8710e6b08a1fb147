//! `<blockquote>` elements.

use crate::converter::block::{finish_container_block, open_block};
use crate::converter::context::Context;
use crate::converter::main::walk_children;
use crate::converter::utility::output::trim_block_content;
use crate::diagnostics::Reporter;
use crate::node::Element;
use crate::options::ConversionOptions;

/// Render the children as their own block sequence, then prefix every line with `> `.
///
/// Nested quotes compose: the inner quote has already prefixed its lines when
/// the outer one adds its own marker, giving `> > `.
pub(crate) fn handle(
    element: &Element,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    depth: usize,
    reporter: &mut Reporter<'_>,
) {
    let quote_ctx = Context {
        blockquote_depth: ctx.blockquote_depth + 1,
        in_list_item: false,
        ..ctx.clone()
    };
    tracing::trace!(depth = quote_ctx.blockquote_depth, "entering blockquote");

    let mut content = String::with_capacity(128);
    walk_children(element, &mut content, options, &quote_ctx, depth, reporter);

    let content = trim_block_content(&content);
    if content.is_empty() {
        return;
    }

    open_block(output, ctx);
    for (idx, line) in content.split('\n').enumerate() {
        if idx > 0 {
            output.push('\n');
        }
        if line.is_empty() {
            output.push('>');
        } else {
            output.push_str("> ");
            output.push_str(line);
        }
    }
    finish_container_block(output);
}
