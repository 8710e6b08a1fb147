//! `<strong>`/`<b>` and `<em>`/`<i>`.

use crate::converter::context::{Context, InlineStyle};
use crate::converter::inline::text::push_separator_space;
use crate::converter::main::walk_children;
use crate::diagnostics::Reporter;
use crate::node::Element;
use crate::options::ConversionOptions;
use crate::text::chomp;

/// Wrap the rendered children in the delimiter of `style`.
///
/// Re-entering a style that is already open renders the children without
/// delimiters and reports it, so markers never nest inside themselves.
pub(crate) fn handle(
    element: &Element,
    style: InlineStyle,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    depth: usize,
    reporter: &mut Reporter<'_>,
) {
    if ctx.has_style(style) {
        reporter.anomaly(
            element.tag_name(),
            format!("{} already open, children rendered without markers", style.name()),
        );
        walk_children(element, output, options, ctx, depth, reporter);
        return;
    }

    let styled_ctx = ctx.with_style(style);
    let mut content = String::with_capacity(64);
    walk_children(element, &mut content, options, &styled_ctx, depth, reporter);

    let (prefix, suffix, core) = chomp(&content);
    if !prefix.is_empty() {
        push_separator_space(output);
    }
    if core.is_empty() {
        return;
    }

    let delimiter = style.delimiter(options);
    output.push_str(&delimiter);
    output.push_str(core);
    output.push_str(&delimiter);
    output.push_str(suffix);
}
