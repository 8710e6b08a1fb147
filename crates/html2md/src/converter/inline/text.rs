//! Text node rendering.

use crate::converter::context::Context;
use crate::text::{chomp, escape, normalize_whitespace};

/// Append a text node.
///
/// Inside `pre` the text is copied verbatim. Everywhere else whitespace runs
/// collapse to one space, Markdown-significant characters are escaped, and an
/// edge space is only kept when it separates the text from preceding inline
/// content.
pub(crate) fn push_text(raw: &str, output: &mut String, ctx: &Context) {
    if ctx.in_code {
        output.push_str(raw);
        return;
    }

    let normalized = normalize_whitespace(raw);
    let (prefix, suffix, core) = chomp(&normalized);

    if !prefix.is_empty() {
        push_separator_space(output);
    }
    if core.is_empty() {
        return;
    }

    output.push_str(&escape(core));
    output.push_str(suffix);
}

/// Append a single space unless `output` already ends in whitespace.
pub(crate) fn push_separator_space(output: &mut String) {
    if !output.ends_with([' ', '\n', '\t']) {
        output.push(' ');
    }
}
