//! `<ul>`, `<ol>` and `<li>`.
//!
//! Every item renders its children into a buffer of its own with the list
//! stack extended; the buffer is then written with the marker on its first
//! line and the continuation indent on the rest. Nested lists are therefore
//! indented once per ancestor item without any absolute column bookkeeping.

mod utils;

use crate::converter::block::{finish_container_block, open_block};
use crate::converter::context::{Context, ListKind};
use crate::converter::main::{walk_children, walk_node};
use crate::converter::utility::output::{ensure_trailing_newlines, trim_block_content, trim_trailing_hard_break};
use crate::diagnostics::Reporter;
use crate::node::{Element, Node};
use crate::options::ConversionOptions;
use crate::text::is_html_whitespace;

use self::utils::{continuation_indent, parse_start, push_indented_block, push_item};

/// Ordered list markers longer than nine digits are not list markers.
const MAX_ORDERED_MARKER: usize = 999_999_999;

pub(crate) fn handle_list(
    element: &Element,
    ordered: bool,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    depth: usize,
    reporter: &mut Reporter<'_>,
) {
    let tag_name = element.tag_name();
    let start = if ordered { list_start(element, reporter) } else { 1 };
    let list_ctx = ctx.with_list(if ordered {
        ListKind::Ordered(start)
    } else {
        ListKind::Unordered
    });
    tracing::trace!(tag = tag_name, depth = list_ctx.list_depth(), start, "rendering list");

    let mut items = String::with_capacity(256);
    let mut number = start;
    let mut item_count = 0usize;

    for child in element.children() {
        match child {
            Node::Text(text) if text.chars().all(is_html_whitespace) => {}
            Node::Element(item) if item.tag_name() == "li" => {
                let kind = if ordered {
                    ListKind::Ordered(number)
                } else {
                    ListKind::Unordered
                };
                let item_ctx = Context {
                    in_list_item: true,
                    ..list_ctx.with_current_item(kind)
                };
                render_item(item, &kind.marker(options), &mut items, options, &item_ctx, depth + 1, reporter);
                number = number.saturating_add(1);
                item_count += 1;
            }
            stray => {
                let what = match stray {
                    Node::Element(other) => format!("<{}>", other.tag_name()),
                    Node::Text(_) => "text".to_string(),
                };
                reporter.anomaly(
                    tag_name,
                    format!("{what} directly inside a list, rendered as its own line"),
                );
                let stray_ctx = Context {
                    in_list_item: true,
                    ..list_ctx.clone()
                };
                render_stray(stray, item_count > 0, &mut items, options, &stray_ctx, depth + 1, reporter);
            }
        }
    }

    if items.is_empty() {
        return;
    }

    if ordered && start != 1 && ctx.in_list_item && !output.is_empty() {
        // Only a list starting at 1 may interrupt a paragraph.
        trim_trailing_hard_break(output);
        ensure_trailing_newlines(output, 2);
    }
    open_block(output, ctx);
    output.push_str(items.trim_end_matches('\n'));
    finish_container_block(output);
}

/// A `li` whose parent is not a list.
pub(crate) fn handle_orphan_item(
    element: &Element,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    depth: usize,
    reporter: &mut Reporter<'_>,
) {
    let message = if ctx.list_stack.is_empty() {
        "list item outside of a list, rendered as an unordered item"
    } else {
        "list item not directly inside its list, rendered as an unordered item"
    };
    reporter.anomaly("li", message);

    let item_ctx = Context {
        in_list_item: true,
        ..ctx.clone()
    };
    let mut item = String::with_capacity(64);
    let marker = ListKind::Unordered.marker(options);
    render_item(element, &marker, &mut item, options, &item_ctx, depth, reporter);

    open_block(output, ctx);
    output.push_str(item.trim_end_matches('\n'));
    finish_container_block(output);
}

/// Numbering start from `ol[start]`, such that every marker of the list stays
/// within [`MAX_ORDERED_MARKER`].
fn list_start(element: &Element, reporter: &mut Reporter<'_>) -> usize {
    let Some(value) = element.attr("start") else {
        return 1;
    };
    let Some(start) = parse_start(value) else {
        reporter.anomaly("ol", format!("invalid start value {value:?}, numbering from 1"));
        return 1;
    };

    let items = element.child_elements().filter(|child| child.tag_name() == "li").count();
    let last = start.checked_add(items.saturating_sub(1));
    if last.is_none_or(|last| last > MAX_ORDERED_MARKER) {
        reporter.anomaly(
            "ol",
            format!("start value {value:?} gives markers above {MAX_ORDERED_MARKER}, numbering from 1"),
        );
        return 1;
    }
    start
}

fn render_item(
    item: &Element,
    marker: &str,
    output: &mut String,
    options: &ConversionOptions,
    item_ctx: &Context,
    depth: usize,
    reporter: &mut Reporter<'_>,
) {
    let mut content = String::with_capacity(128);
    walk_children(item, &mut content, options, item_ctx, depth, reporter);
    let content = trim_block_content(&content);
    let indent = continuation_indent(options, marker);

    // `- - x` would put the inner item's content column at the outer
    // continuation indent, capturing whatever follows the nested list.
    if starts_with_list(item) && !content.is_empty() {
        output.push_str(marker);
        output.push('\n');
        push_indented_block(output, content, &indent);
    } else {
        push_item(output, marker, content, &indent);
    }
}

fn starts_with_list(item: &Element) -> bool {
    item.children()
        .iter()
        .find(|child| !matches!(child, Node::Text(text) if text.chars().all(is_html_whitespace)))
        .and_then(Node::as_element)
        .is_some_and(|first| matches!(first.tag_name(), "ul" | "ol"))
}

/// Non-`li` content of a list. After the first item it is nested under the
/// preceding item; before that it stands on its own.
fn render_stray(
    node: &Node,
    after_item: bool,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    depth: usize,
    reporter: &mut Reporter<'_>,
) {
    let mut content = String::with_capacity(64);
    walk_node(node, &mut content, options, ctx, depth, reporter);
    let content = trim_block_content(&content);
    if content.is_empty() {
        return;
    }

    let indent = if after_item { options.indent_unit() } else { String::new() };
    push_indented_block(output, content, &indent);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::render;
    use crate::options::BulletStyle;

    fn list_element(tag: &str, items: &[&str]) -> Element {
        Element::new(tag).with_children(items.iter().map(|text| Element::new("li").with_text(*text)))
    }

    fn list(tag: &str, items: &[&str]) -> Node {
        list_element(tag, items).into()
    }

    fn render_quiet(node: &Node, options: &ConversionOptions) -> String {
        render(node, options, |_| {})
    }

    #[test]
    fn unordered_items() {
        let options = ConversionOptions::default();
        assert_eq!(render_quiet(&list("ul", &["a", "b"]), &options), "- a\n- b\n");
    }

    #[test]
    fn bullet_follows_options() {
        let options = ConversionOptions {
            bullet: BulletStyle::Asterisk,
            ..ConversionOptions::default()
        };
        assert_eq!(render_quiet(&list("ul", &["a"]), &options), "* a\n");
    }

    #[test]
    fn ordered_numbering_honours_start() {
        let node: Node = Element::new("ol")
            .with_attr("start", "7")
            .with_child(Element::new("li").with_text("x"))
            .with_child(Element::new("li").with_text("y"))
            .into();
        assert_eq!(render_quiet(&node, &ConversionOptions::default()), "7. x\n8. y\n");
    }

    #[test]
    fn invalid_start_is_reported() {
        let node: Node = Element::new("ol")
            .with_attr("start", "x")
            .with_child(Element::new("li").with_text("a"))
            .into();
        let mut reports = Vec::new();
        let markdown = render(&node, &ConversionOptions::default(), |d| reports.push(d));
        assert_eq!(markdown, "1. a\n");
        assert_eq!(reports.len(), 1);
    }

    fn ordered(start: &str, items: &[&str]) -> Node {
        list_element("ol", items).with_attr("start", start).into()
    }

    #[test]
    fn huge_start_does_not_overflow() {
        let mut reports = Vec::new();
        let markdown = render(
            &ordered(&u64::MAX.to_string(), &["a", "b"]),
            &ConversionOptions::default(),
            |d| reports.push(d),
        );
        assert_eq!(markdown, "1. a\n2. b\n");
        assert_eq!(reports.len(), 1);
        assert!(reports[0].message.contains("999999999"));
    }

    #[test]
    fn start_beyond_nine_digits_is_reported() {
        let mut reports = Vec::new();
        let markdown = render(&ordered("1234567890", &["a"]), &ConversionOptions::default(), |d| {
            reports.push(d);
        });
        assert_eq!(markdown, "1. a\n");
        assert_eq!(reports.len(), 1);
    }

    #[test]
    fn start_is_kept_while_every_marker_fits() {
        let options = ConversionOptions::default();
        assert_eq!(
            render_quiet(&ordered("999999998", &["a", "b"]), &options),
            "999999998. a\n999999999. b\n"
        );
        let mut reports = Vec::new();
        let markdown = render(&ordered("999999998", &["a", "b", "c"]), &options, |d| reports.push(d));
        assert_eq!(markdown, "1. a\n2. b\n3. c\n");
        assert_eq!(reports.len(), 1);
    }

    #[test]
    fn content_after_nested_list_stays_in_outer_item() {
        let node: Node = Element::new("ul")
            .with_child(Element::new("li").with_child(list_element("ul", &["x"])).with_text("after"))
            .into();
        assert_eq!(
            render_quiet(&node, &ConversionOptions::default()),
            "-\n    - x\n\n    after\n"
        );
    }

    #[test]
    fn nested_list_is_indented_one_unit() {
        let node: Node = Element::new("ul")
            .with_child(Element::new("li").with_text("outer").with_child(list_element("ul", &["inner"])))
            .into();
        assert_eq!(render_quiet(&node, &ConversionOptions::default()), "- outer\n    - inner\n");
    }

    #[test]
    fn orphan_item_is_reported() {
        let node: Node = Element::new("li").with_text("lost").into();
        let mut reports = Vec::new();
        let markdown = render(&node, &ConversionOptions::default(), |d| reports.push(d));
        assert_eq!(markdown, "- lost\n");
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].tag.as_deref(), Some("li"));
    }
}
