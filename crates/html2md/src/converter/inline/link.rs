//! `<a>` elements and the shared link syntax used by images.

use crate::converter::context::Context;
use crate::converter::inline::text::push_separator_space;
use crate::converter::main::walk_children;
use crate::diagnostics::Reporter;
use crate::node::Element;
use crate::options::ConversionOptions;
use crate::text::chomp;

pub(crate) fn handle(
    element: &Element,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    depth: usize,
    reporter: &mut Reporter<'_>,
) {
    let Some(href) = element.attr("href") else {
        reporter.missing_attribute("a", "href", "link rendered as plain text");
        walk_children(element, output, options, ctx, depth, reporter);
        return;
    };

    if ctx.in_link {
        reporter.anomaly("a", "link nested inside a link label, rendered as plain text");
        walk_children(element, output, options, ctx, depth, reporter);
        return;
    }

    let label_ctx = Context {
        in_link: true,
        convert_as_inline: true,
        ..ctx.clone()
    };
    let mut label = String::with_capacity(32);
    walk_children(element, &mut label, options, &label_ctx, depth, reporter);

    let (prefix, suffix, core) = chomp(&label);
    if !prefix.is_empty() {
        push_separator_space(output);
    }
    append_markdown_link(output, core, href, element.attr("title"));
    output.push_str(suffix);
}

/// Append `[label](destination "title")`.
///
/// `label` must already be escaped.
pub(crate) fn append_markdown_link(output: &mut String, label: &str, destination: &str, title: Option<&str>) {
    output.push('[');
    output.push_str(label);
    output.push_str("](");
    push_destination(output, destination.trim());
    if let Some(title) = title.map(str::trim).filter(|t| !t.is_empty()) {
        output.push_str(" \"");
        for c in title.chars() {
            if matches!(c, '"' | '\\') {
                output.push('\\');
            }
            output.push(c);
        }
        output.push('"');
    }
    output.push(')');
}

/// Destinations with spaces, angle brackets or unbalanced parentheses are wrapped in `<…>`.
fn push_destination(output: &mut String, destination: &str) {
    if !needs_angle_brackets(destination) {
        output.push_str(destination);
        return;
    }

    output.push('<');
    for c in destination.chars() {
        match c {
            '<' | '>' | '\\' => {
                output.push('\\');
                output.push(c);
            }
            '\n' | '\r' => output.push(' '),
            _ => output.push(c),
        }
    }
    output.push('>');
}

fn needs_angle_brackets(destination: &str) -> bool {
    let mut balance = 0i32;
    for c in destination.chars() {
        match c {
            '(' => balance += 1,
            ')' => {
                balance -= 1;
                if balance < 0 {
                    return true;
                }
            }
            c if c.is_whitespace() || c.is_control() || c == '<' || c == '>' => return true,
            _ => {}
        }
    }
    balance != 0
}
