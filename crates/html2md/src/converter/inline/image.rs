//! `<img>` elements.

use crate::converter::inline::link::append_markdown_link;
use crate::diagnostics::Reporter;
use crate::node::Element;
use crate::text::{escape, normalize_whitespace};

pub(crate) fn handle(element: &Element, output: &mut String, reporter: &mut Reporter<'_>) {
    let Some(src) = element.attr("src") else {
        reporter.missing_attribute("img", "src", "image dropped");
        return;
    };

    let alt = element.attr("alt").unwrap_or_default();
    let alt = normalize_whitespace(alt);
    let alt = escape(alt.trim());

    output.push('!');
    append_markdown_link(output, &alt, src, element.attr("title"));
}
