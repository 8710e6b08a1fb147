//! Indentation and numbering helpers for lists.

use crate::options::{ConversionOptions, ListIndentType};

/// Indentation for lines of an item after its first one.
///
/// At least one indentation unit, and always wide enough to clear the marker
/// so the line stays inside the item (`10. ` needs four columns).
pub(crate) fn continuation_indent(options: &ConversionOptions, marker: &str) -> String {
    match options.list_indent_type {
        ListIndentType::Tabs => "\t".to_string(),
        ListIndentType::Spaces => {
            let width = options.indent_unit().len().max(marker.chars().count() + 1);
            " ".repeat(width)
        }
    }
}

/// Write an item: the marker on the first line, `indent` before every other
/// non-empty line.
pub(crate) fn push_item(output: &mut String, marker: &str, content: &str, indent: &str) {
    output.push_str(marker);
    let mut lines = content.split('\n');
    if let Some(first) = lines.next().filter(|line| !line.is_empty()) {
        output.push(' ');
        output.push_str(first);
    }
    for line in lines {
        output.push('\n');
        push_indented(output, line, indent);
    }
    output.push('\n');
}

/// Write `content` with every non-empty line indented, followed by a newline.
pub(crate) fn push_indented_block(output: &mut String, content: &str, indent: &str) {
    for line in content.split('\n') {
        push_indented(output, line, indent);
        output.push('\n');
    }
}

fn push_indented(output: &mut String, line: &str, indent: &str) {
    if !line.is_empty() {
        output.push_str(indent);
        output.push_str(line);
    }
}

/// Parse an `ol[start]` value. `None` when it is not a non-negative integer.
pub(crate) fn parse_start(value: &str) -> Option<usize> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_clears_wide_markers() {
        let narrow = ConversionOptions {
            list_indent_width: 2,
            ..ConversionOptions::default()
        };
        assert_eq!(continuation_indent(&narrow, "-"), "  ");
        assert_eq!(continuation_indent(&narrow, "1."), "   ");
        assert_eq!(continuation_indent(&ConversionOptions::default(), "10."), "    ");
        assert_eq!(continuation_indent(&ConversionOptions::default(), "100."), "     ");
    }

    #[test]
    fn tabs_indent_with_a_tab() {
        let options = ConversionOptions {
            list_indent_type: ListIndentType::Tabs,
            ..ConversionOptions::default()
        };
        assert_eq!(continuation_indent(&options, "-"), "\t");
    }

    #[test]
    fn item_lines_are_indented() {
        let mut out = String::new();
        push_item(&mut out, "-", "a\n- b\n\nc", "    ");
        assert_eq!(out, "- a\n    - b\n\n    c\n");
    }

    #[test]
    fn empty_item_is_just_the_marker() {
        let mut out = String::new();
        push_item(&mut out, "3.", "", "    ");
        assert_eq!(out, "3.\n");
    }

    #[test]
    fn start_values() {
        assert_eq!(parse_start("5"), Some(5));
        assert_eq!(parse_start(" 0 "), Some(0));
        assert_eq!(parse_start("-2"), None);
        assert_eq!(parse_start("three"), None);
    }
}
