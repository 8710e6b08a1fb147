//! Main conversion pipeline for HTML to Markdown.
//!
//! This module holds the public entry points and the recursive tree walker
//! that dispatches every element to its handler.

use std::io::Read;

use crate::converter::block::{blockquote, code_block, container, heading, paragraph};
use crate::converter::context::{Context, ElementKind, InlineStyle};
use crate::converter::inline::{code, emphasis, image, link, text as text_node};
use crate::converter::list;
use crate::converter::utility::metadata::{extract_head_metadata, format_metadata_frontmatter};
use crate::converter::utility::output::trim_line_end_whitespace;
use crate::diagnostics::{Diagnostic, Reporter};
use crate::dom::{parse_html, parse_reader};
use crate::error::Result;
use crate::node::{Element, Node};
use crate::options::ConversionOptions;

/// Elements nested deeper than this are flattened to text.
pub(crate) const MAX_NESTING_DEPTH: usize = 256;

/// Markdown output together with the anomalies reported while producing it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conversion {
    /// The rendered Markdown.
    pub markdown: String,
    /// Reports in document order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Render a parsed tree to Markdown.
///
/// `on_error` is called synchronously, in document order, for every node that
/// could only be rendered in degraded form. Rendering always completes.
pub fn render<F>(root: &Node, options: &ConversionOptions, mut on_error: F) -> String
where
    F: FnMut(Diagnostic),
{
    let mut reporter = Reporter::new(&mut on_error);
    render_impl(root, options, &mut reporter)
}

/// Render a parsed tree to Markdown, collecting the reports.
pub fn render_with_diagnostics(root: &Node, options: &ConversionOptions) -> Conversion {
    let mut diagnostics = Vec::new();
    let markdown = render(root, options, |diagnostic| diagnostics.push(diagnostic));
    Conversion { markdown, diagnostics }
}

/// Converts HTML to Markdown using the provided conversion options.
///
/// Reports are logged through `tracing` and otherwise discarded; use
/// [`convert_html_with_diagnostics`] to inspect them.
///
/// # Errors
///
/// Fails only when the HTML cannot be turned into a document tree.
pub fn convert_html(html: &str, options: &ConversionOptions) -> Result<String> {
    let root = parse_html(html)?;
    Ok(render(&root, options, |_| {}))
}

/// Converts HTML to Markdown and returns the reports alongside the output.
///
/// # Errors
///
/// Fails only when the HTML cannot be turned into a document tree.
pub fn convert_html_with_diagnostics(html: &str, options: &ConversionOptions) -> Result<Conversion> {
    let root = parse_html(html)?;
    Ok(render_with_diagnostics(&root, options))
}

/// Converts HTML read from `reader` and returns the reports alongside the output.
///
/// # Errors
///
/// Fails when reading fails or no document tree can be built.
pub fn convert_reader<R: Read>(reader: R, options: &ConversionOptions) -> Result<Conversion> {
    let root = parse_reader(reader)?;
    Ok(render_with_diagnostics(&root, options))
}

fn render_impl(root: &Node, options: &ConversionOptions, reporter: &mut Reporter<'_>) -> String {
    let _span = tracing::trace_span!("render").entered();

    let mut output = String::new();
    walk_node(root, &mut output, options, &Context::default(), 0, reporter);

    let mut markdown = String::new();
    if options.extract_metadata {
        let metadata = extract_head_metadata(root);
        if !metadata.is_empty() {
            markdown.push_str(&format_metadata_frontmatter(&metadata));
        }
    }
    let body = finalize(&output);
    if body.is_empty() && markdown.ends_with("\n\n") {
        markdown.pop();
    }
    markdown.push_str(&body);

    tracing::trace!(diagnostics = reporter.count(), bytes = markdown.len(), "render finished");
    markdown
}

/// Clean up line ends and leave exactly one newline after trailing block output.
fn finalize(output: &str) -> String {
    let cleaned = trim_line_end_whitespace(output);
    let cleaned = cleaned.trim_start_matches([' ', '\t', '\n']);
    let trimmed = cleaned.trim_end_matches('\n');
    if trimmed.len() < cleaned.len() {
        format!("{trimmed}\n")
    } else {
        trimmed.to_string()
    }
}

/// Recursively walk a node and append its Markdown to `output`.
pub(crate) fn walk_node(
    node: &Node,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    depth: usize,
    reporter: &mut Reporter<'_>,
) {
    match node {
        Node::Text(raw) => text_node::push_text(raw, output, ctx),
        Node::Element(element) => walk_element(element, output, options, ctx, depth, reporter),
    }
}

/// Walk the children of `element` in document order.
pub(crate) fn walk_children(
    element: &Element,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    depth: usize,
    reporter: &mut Reporter<'_>,
) {
    for child in element.children() {
        walk_node(child, output, options, ctx, depth + 1, reporter);
    }
}

fn walk_element(
    element: &Element,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    depth: usize,
    reporter: &mut Reporter<'_>,
) {
    let tag_name = element.tag_name();

    if depth >= MAX_NESTING_DEPTH {
        reporter.anomaly(
            tag_name,
            format!("nesting deeper than {MAX_NESTING_DEPTH} levels, subtree flattened to text"),
        );
        text_node::push_text(&element.text_content(), output, ctx);
        return;
    }

    let kind = ElementKind::from_tag(tag_name);

    if ctx.in_code {
        walk_preformatted(element, kind, output, options, ctx, depth, reporter);
        return;
    }

    if ctx.convert_as_inline && kind.is_block() {
        walk_flattened(element, kind, output, options, ctx, depth, reporter);
        return;
    }

    match kind {
        ElementKind::Heading(level) => heading::handle(element, level, output, options, ctx, depth, reporter),
        ElementKind::Paragraph => paragraph::handle(element, output, options, ctx, depth, reporter),
        ElementKind::Strong => emphasis::handle(element, InlineStyle::Bold, output, options, ctx, depth, reporter),
        ElementKind::Emphasis => {
            emphasis::handle(element, InlineStyle::Italic, output, options, ctx, depth, reporter);
        }
        ElementKind::Link => link::handle(element, output, options, ctx, depth, reporter),
        ElementKind::Image => image::handle(element, output, reporter),
        ElementKind::Code => code::handle(element, output),
        ElementKind::Preformatted => code_block::handle(element, output, options, ctx, depth, reporter),
        ElementKind::UnorderedList => list::handle_list(element, false, output, options, ctx, depth, reporter),
        ElementKind::OrderedList => list::handle_list(element, true, output, options, ctx, depth, reporter),
        ElementKind::ListItem => list::handle_orphan_item(element, output, options, ctx, depth, reporter),
        ElementKind::Blockquote => blockquote::handle(element, output, options, ctx, depth, reporter),
        ElementKind::LineBreak => {
            if ctx.convert_as_inline {
                text_node::push_separator_space(output);
            } else if !output.is_empty() && !output.ends_with('\n') {
                output.push_str(options.hard_break());
            }
        }
        ElementKind::ThematicBreak => container::thematic_break(output, ctx),
        ElementKind::Container => container::handle(element, output, options, ctx, depth, reporter),
        ElementKind::InlineContainer | ElementKind::Document => {
            walk_children(element, output, options, ctx, depth, reporter);
        }
        ElementKind::Ignored => {}
        ElementKind::Unknown => {
            reporter.unsupported_tag(tag_name);
            walk_children(element, output, options, ctx, depth, reporter);
        }
    }
}

/// Inside `pre`: markup is dropped and only text and line breaks survive.
fn walk_preformatted(
    element: &Element,
    kind: ElementKind,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    depth: usize,
    reporter: &mut Reporter<'_>,
) {
    match kind {
        ElementKind::LineBreak => output.push('\n'),
        ElementKind::Ignored => {}
        ElementKind::Unknown => {
            reporter.unsupported_tag(element.tag_name());
            walk_children(element, output, options, ctx, depth, reporter);
        }
        _ => walk_children(element, output, options, ctx, depth, reporter),
    }
}

/// Block elements inside a single-line context (heading, link label) keep only their content.
fn walk_flattened(
    element: &Element,
    kind: ElementKind,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    depth: usize,
    reporter: &mut Reporter<'_>,
) {
    match kind {
        ElementKind::ThematicBreak => {}
        ElementKind::Preformatted => text_node::push_text(&element.text_content(), output, ctx),
        _ => {
            text_node::push_separator_space(output);
            walk_children(element, output, options, ctx, depth, reporter);
            text_node::push_separator_space(output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalize_keeps_single_trailing_newline() {
        assert_eq!(finalize("# Title\n\nBody\n\n"), "# Title\n\nBody\n");
        assert_eq!(finalize("[click](https://x.io)"), "[click](https://x.io)");
        assert_eq!(finalize("\n\n"), "");
        assert_eq!(finalize(" lead\n\n"), "lead\n");
    }
}
