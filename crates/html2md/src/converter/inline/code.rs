//! Inline `<code>` outside of `<pre>`.

use crate::node::Element;
use crate::text::inline_code_fence;

/// Wrap the raw text content in the shortest backtick fence it does not contain.
pub(crate) fn handle(element: &Element, output: &mut String) {
    let raw = element.text_content();
    if raw.is_empty() {
        return;
    }
    let content = raw.replace(['\r', '\n'], " ");

    let fence = inline_code_fence(&content);
    // A renderer strips one space from each side when both are present.
    let pad = content.starts_with('`')
        || content.ends_with('`')
        || (content.starts_with(' ') && content.ends_with(' ') && !content.trim_start_matches(' ').is_empty());

    output.push_str(&fence);
    if pad {
        output.push(' ');
    }
    output.push_str(&content);
    if pad {
        output.push(' ');
    }
    output.push_str(&fence);
}
