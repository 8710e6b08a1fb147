//! Helpers that shape the output buffer.

/// Append newlines until `output` ends with exactly `count` of them.
///
/// Never removes newlines that are already there beyond `count`.
pub(crate) fn ensure_trailing_newlines(output: &mut String, count: usize) {
    let present = output.len() - output.trim_end_matches('\n').len();
    for _ in present..count {
        output.push('\n');
    }
}

/// Cut trailing whitespace, including a hard line break left at the very end.
pub(crate) fn trim_trailing_hard_break(output: &mut String) {
    let kept = hard_break_free_len(output);
    output.truncate(kept);
}

/// Trim a rendered block down to its content: surrounding whitespace and a
/// dangling hard break are dropped.
pub(crate) fn trim_block_content(content: &str) -> &str {
    let trimmed = content.trim_start_matches([' ', '\t', '\n']);
    &trimmed[..hard_break_free_len(trimmed)]
}

/// Length of `text` without trailing whitespace and without a trailing
/// backslash hard break.
fn hard_break_free_len(text: &str) -> usize {
    let trimmed = text.trim_end_matches([' ', '\t', '\n']);
    // Escaped text backslashes come in pairs, so an odd run ends in a break marker.
    let backslashes = trimmed.len() - trimmed.trim_end_matches('\\').len();
    if backslashes % 2 == 1 {
        trimmed.len() - 1
    } else {
        trimmed.len()
    }
}

/// Remove trailing spaces and tabs from every line outside fenced code.
///
/// A two-space hard break at the end of a line is kept as exactly two spaces.
pub(crate) fn trim_line_end_whitespace(output: &str) -> String {
    let mut cleaned = String::with_capacity(output.len());
    let mut open_fence: Option<usize> = None;

    for (idx, line) in output.split('\n').enumerate() {
        if idx > 0 {
            cleaned.push('\n');
        }

        let body = line.trim_start_matches([' ', '\t', '>']);
        let ticks = body.len() - body.trim_start_matches('`').len();

        if let Some(width) = open_fence {
            if ticks >= width && body[ticks..].trim().is_empty() {
                open_fence = None;
                cleaned.push_str(line.trim_end_matches([' ', '\t']));
            } else {
                cleaned.push_str(line);
            }
            continue;
        }

        // An info string cannot contain backticks, so such a line is a code span.
        if ticks >= 3 && !body[ticks..].contains('`') {
            open_fence = Some(ticks);
        }

        let trimmed = line.trim_end_matches([' ', '\t']);
        cleaned.push_str(trimmed);
        if line.ends_with("  ") && !trimmed.trim_start_matches([' ', '\t', '>']).is_empty() && open_fence.is_none() {
            cleaned.push_str("  ");
        }
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_newlines_only_adds() {
        let mut out = String::from("a\n");
        ensure_trailing_newlines(&mut out, 2);
        assert_eq!(out, "a\n\n");
        ensure_trailing_newlines(&mut out, 1);
        assert_eq!(out, "a\n\n");
    }

    #[test]
    fn block_content_drops_dangling_breaks() {
        assert_eq!(trim_block_content("\n line  \n"), "line");
        assert_eq!(trim_block_content("line\\\n"), "line");
        assert_eq!(trim_block_content(r"C:\\"), r"C:\\");
        assert_eq!(trim_block_content("a  \nb"), "a  \nb");
    }

    #[test]
    fn trailing_hard_break_is_removed() {
        let mut out = String::from("text  \n");
        trim_trailing_hard_break(&mut out);
        assert_eq!(out, "text");
        let mut out = String::from("done\n\n");
        trim_trailing_hard_break(&mut out);
        assert_eq!(out, "done");
    }

    #[test]
    fn line_ends_trimmed_outside_fences() {
        let input = "para   \nbreak  \n```\ncode   \n```\nafter \n";
        assert_eq!(trim_line_end_whitespace(input), "para  \nbreak  \n```\ncode   \n```\nafter\n");
    }

    #[test]
    fn code_span_at_line_start_is_not_a_fence() {
        let input = "```a``b``` x  \nnext  \nend ";
        assert_eq!(trim_line_end_whitespace(input), "```a``b``` x  \nnext  \nend");
    }

    #[test]
    fn fences_inside_quotes_and_lists_are_detected() {
        let input = "> ```\n> x  \n> ```\n    ````\n    y \n    ````";
        assert_eq!(trim_line_end_whitespace(input), input);
    }
}
