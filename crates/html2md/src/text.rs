//! Text processing utilities: escaping, whitespace handling and code fences.

use std::borrow::Cow;

/// Characters that carry inline meaning in Markdown and get a backslash.
const MARKDOWN_SIGNIFICANT: [char; 6] = ['\\', '*', '_', '`', '[', ']'];

/// Whether `c` must be escaped when it appears in text.
#[must_use]
pub fn is_markdown_significant(c: char) -> bool {
    MARKDOWN_SIGNIFICANT.contains(&c)
}

/// Escape Markdown-significant characters by prefixing each with a backslash.
///
/// Only backslashes are added, so removing every escaping backslash restores
/// the input exactly.
#[must_use]
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(MARKDOWN_SIGNIFICANT) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + text.len() / 8 + 1);
    for c in text.chars() {
        if is_markdown_significant(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}

/// Remove the escaping backslashes added by [`escape`].
#[must_use]
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if is_markdown_significant(next) {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Collapse every run of HTML whitespace into a single space.
#[must_use]
pub fn normalize_whitespace(text: &str) -> Cow<'_, str> {
    let needs_work = text
        .as_bytes()
        .windows(2)
        .any(|pair| pair[0].is_ascii_whitespace() && pair[1].is_ascii_whitespace())
        || text.contains(['\n', '\t', '\r', '\x0c']);
    if !needs_work {
        return Cow::Borrowed(text);
    }

    let mut normalized = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for c in text.chars() {
        if is_html_whitespace(c) {
            if !in_whitespace {
                normalized.push(' ');
                in_whitespace = true;
            }
        } else {
            normalized.push(c);
            in_whitespace = false;
        }
    }
    Cow::Owned(normalized)
}

/// HTML's definition of inter-element whitespace. Non-breaking spaces are content.
#[must_use]
pub const fn is_html_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c')
}

/// Split `text` into leading whitespace, trailing whitespace and the core between them.
///
/// The returned prefix and suffix are a single space when the text had any
/// whitespace on that side, or empty otherwise.
#[must_use]
pub fn chomp(text: &str) -> (&'static str, &'static str, &str) {
    let core = text.trim_matches(is_html_whitespace);
    if core.is_empty() {
        let edge = if text.is_empty() { "" } else { " " };
        return (edge, "", core);
    }
    let prefix = if text.starts_with(is_html_whitespace) { " " } else { "" };
    let suffix = if text.ends_with(is_html_whitespace) { " " } else { "" };
    (prefix, suffix, core)
}

/// Length of the longest run of backticks in `text`.
#[must_use]
pub fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Shortest backtick fence whose length does not occur as a run in `text`.
#[must_use]
pub fn inline_code_fence(text: &str) -> String {
    let mut runs = Vec::new();
    let mut current = 0usize;
    for c in text.chars() {
        if c == '`' {
            current += 1;
        } else if current > 0 {
            runs.push(current);
            current = 0;
        }
    }
    if current > 0 {
        runs.push(current);
    }

    let mut width = 1;
    while runs.contains(&width) {
        width += 1;
    }
    "`".repeat(width)
}

/// Fence for a fenced code block: three backticks, or longer than any run in the content.
#[must_use]
pub fn code_block_fence(content: &str) -> String {
    "`".repeat(longest_backtick_run(content).max(2) + 1)
}
