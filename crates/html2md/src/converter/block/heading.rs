//! `<h1>`..`<h6>` as ATX headings.

use crate::converter::block::{finish_block, open_block};
use crate::converter::context::Context;
use crate::converter::main::walk_children;
use crate::diagnostics::Reporter;
use crate::node::Element;
use crate::options::ConversionOptions;
use crate::text::normalize_whitespace;

pub(crate) fn handle(
    element: &Element,
    level: usize,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    depth: usize,
    reporter: &mut Reporter<'_>,
) {
    let inline_ctx = Context {
        convert_as_inline: true,
        ..ctx.clone()
    };
    let mut content = String::with_capacity(64);
    walk_children(element, &mut content, options, &inline_ctx, depth, reporter);

    let text = normalize_whitespace(&content);
    let text = text.trim();

    open_block(output, ctx);
    output.push_str(&"#".repeat(level));
    if !text.is_empty() {
        output.push(' ');
        push_heading_text(output, text);
    }
    finish_block(output, ctx);
}

/// A closing run of `#` would be read as the optional closing sequence.
fn push_heading_text(output: &mut String, text: &str) {
    let body = text.trim_end_matches('#');
    if body.len() == text.len() || !(body.is_empty() || body.ends_with(' ')) {
        output.push_str(text);
        return;
    }
    output.push_str(body);
    output.push('\\');
    output.push_str(&text[body.len()..]);
}
