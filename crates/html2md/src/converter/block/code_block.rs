//! `<pre>` as fenced code blocks.

use crate::converter::block::{finish_block, open_block};
use crate::converter::context::Context;
use crate::converter::main::walk_children;
use crate::diagnostics::Reporter;
use crate::node::Element;
use crate::options::ConversionOptions;
use crate::text::code_block_fence;

pub(crate) fn handle(
    element: &Element,
    output: &mut String,
    options: &ConversionOptions,
    ctx: &Context,
    depth: usize,
    reporter: &mut Reporter<'_>,
) {
    let code = element.child_elements().find(|child| child.tag_name() == "code");
    if code.is_none() {
        reporter.anomaly("pre", "preformatted block without <code>, fenced as plain text");
    }

    let language = code.and_then(element_language).or_else(|| element_language(element));
    let code_ctx = Context {
        in_code: true,
        code_language: language,
        ..ctx.clone()
    };

    let mut content = String::with_capacity(256);
    walk_children(element, &mut content, options, &code_ctx, depth, reporter);
    let content = content.strip_prefix('\n').unwrap_or(&content);
    let content = content.trim_end_matches(['\n', '\r']);

    let fence = code_block_fence(content);
    open_block(output, ctx);
    output.push_str(&fence);
    if let Some(language) = &code_ctx.code_language {
        output.push_str(language);
    }
    output.push('\n');
    if !content.is_empty() {
        output.push_str(content);
        output.push('\n');
    }
    output.push_str(&fence);
    finish_block(output, ctx);
}

/// `data-language` wins over a `language-*`/`lang-*` class.
fn element_language(element: &Element) -> Option<String> {
    if let Some(language) = element.attr("data-language").and_then(sanitize_language) {
        return Some(language);
    }

    element.attr("class")?.split_whitespace().find_map(|class| {
        class
            .strip_prefix("language-")
            .or_else(|| class.strip_prefix("lang-"))
            .and_then(sanitize_language)
    })
}

/// An info string may not contain backticks and ends at the first space.
fn sanitize_language(raw: &str) -> Option<String> {
    let language: String = raw
        .trim()
        .chars()
        .take_while(|c| !c.is_whitespace() && *c != '`')
        .collect();
    (!language.is_empty()).then_some(language)
}
