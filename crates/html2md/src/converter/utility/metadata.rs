//! Document metadata extracted from `<head>` and rendered as YAML front matter.

use std::collections::BTreeMap;

use crate::node::{Element, Node};
use crate::text::normalize_whitespace;

/// Collect `title`, `meta` and canonical `link` values from the first `<head>`.
pub(crate) fn extract_head_metadata(root: &Node) -> BTreeMap<String, String> {
    let mut metadata = BTreeMap::new();
    let Some(head) = root.as_element().and_then(find_head) else {
        return metadata;
    };

    for child in head.child_elements() {
        match child.tag_name() {
            "title" => {
                let title = child.text_content();
                let title = normalize_whitespace(title.trim());
                if !title.is_empty() {
                    metadata.insert("title".to_string(), title.into_owned());
                }
            }
            "meta" => {
                let Some(content) = child.attr("content") else { continue };
                if let Some(name) = child.attr("name") {
                    metadata.insert(format!("meta-{name}"), content.to_string());
                }
                if let Some(property) = child.attr("property") {
                    metadata.insert(format!("meta-{property}"), content.to_string());
                }
            }
            "link" => {
                let is_canonical = child
                    .attr("rel")
                    .is_some_and(|rel| rel.split_ascii_whitespace().any(|r| r.eq_ignore_ascii_case("canonical")));
                if is_canonical {
                    if let Some(href) = child.attr("href") {
                        metadata.insert("canonical".to_string(), href.to_string());
                    }
                }
            }
            "base" => {
                if let Some(href) = child.attr("href") {
                    metadata.insert("base".to_string(), href.to_string());
                }
            }
            _ => {}
        }
    }

    metadata
}

/// First `<head>` in document order, searched without recursion.
fn find_head(root: &Element) -> Option<&Element> {
    let mut pending = vec![root];
    while let Some(element) = pending.pop() {
        if element.tag_name() == "head" {
            return Some(element);
        }
        let start = pending.len();
        pending.extend(element.child_elements());
        pending[start..].reverse();
    }
    None
}

/// Format metadata as YAML front matter.
pub(crate) fn format_metadata_frontmatter(metadata: &BTreeMap<String, String>) -> String {
    let mut result = String::from("---\n");
    for (key, value) in metadata {
        result.push_str(key);
        result.push_str(": ");
        push_yaml_scalar(&mut result, value);
        result.push('\n');
    }
    result.push_str("---\n\n");
    result
}

fn push_yaml_scalar(out: &mut String, value: &str) {
    let plain = !value.is_empty()
        && !value.starts_with([
            ' ', '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%', '@', '`',
        ])
        && !value.ends_with(' ')
        && !value.contains(": ")
        && !value.contains(" #")
        && !value.contains(['\n', '\r', '\t']);

    if plain {
        out.push_str(value);
        return;
    }

    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> Node {
        Node::from(
            Element::new("html")
                .with_child(
                    Element::new("head")
                        .with_child(Element::new("title").with_text("  My   Page "))
                        .with_child(
                            Element::new("meta")
                                .with_attr("name", "description")
                                .with_attr("content", "About: things"),
                        )
                        .with_child(
                            Element::new("link")
                                .with_attr("rel", "canonical")
                                .with_attr("href", "https://x.io/page"),
                        ),
                )
                .with_child(Element::new("body")),
        )
    }

    #[test]
    fn extracts_title_meta_and_canonical() {
        let metadata = extract_head_metadata(&document());
        assert_eq!(metadata.get("title").map(String::as_str), Some("My Page"));
        assert_eq!(metadata.get("meta-description").map(String::as_str), Some("About: things"));
        assert_eq!(metadata.get("canonical").map(String::as_str), Some("https://x.io/page"));
    }

    #[test]
    fn frontmatter_quotes_values_that_need_it() {
        let metadata = extract_head_metadata(&document());
        assert_eq!(
            format_metadata_frontmatter(&metadata),
            "---\ncanonical: https://x.io/page\nmeta-description: \"About: things\"\ntitle: My Page\n---\n\n"
        );
    }

    #[test]
    fn head_search_survives_deep_bodies() {
        let mut body = Element::new("span").with_text("deep");
        for _ in 0..100_000 {
            body = Element::new("span").with_child(body);
        }
        let root = Node::from(Element::new("html").with_child(body).with_child(Element::new("head").with_child(
            Element::new("title").with_text("Late"),
        )));
        let metadata = extract_head_metadata(&root);
        assert_eq!(metadata.get("title").map(String::as_str), Some("Late"));
    }

    #[test]
    fn no_head_no_metadata() {
        let root = Node::from(Element::new("p").with_text("x"));
        assert!(extract_head_metadata(&root).is_empty());
    }
}
