//! `<p>` elements.

use crate::converter::block::{finish_block, open_block};
use crate::converter::context::Context;
use crate::converter::main::walk_children;
use crate::converter::utility::output::trim_block_content;
use crate::diagnostics::Reporter;
use crate::node::Element;
use crate::options::ConversionOptions;

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
