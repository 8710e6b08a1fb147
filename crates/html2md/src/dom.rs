//! HTML parsing into the owned [`Node`] tree.
//!
//! html5ever does the tokenizing, entity decoding and error recovery; this
//! module only copies its `RcDom` into plain owned nodes so the converter never
//! touches reference-counted cells.

use std::io::Read;

use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::error::{ConversionError, Result};
use crate::node::{Element, Node};

/// Parse an HTML document and return its root `<html>` element.
///
/// # Errors
///
/// Returns [`ConversionError::ParseError`] if html5ever fails to consume the
/// input and [`ConversionError::InvalidRoot`] if the document has no element.
pub fn parse_html(html: &str) -> Result<Node> {
    let dom = html5ever::parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| ConversionError::ParseError(e.to_string()))?;
    document_root(&dom)
}

/// Parse an HTML document from a reader.
///
/// # Errors
///
/// Returns [`ConversionError::Io`] if reading fails and
/// [`ConversionError::InvalidRoot`] if the document has no element.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Node> {
    let dom = html5ever::parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut reader)?;
    document_root(&dom)
}

fn document_root(dom: &RcDom) -> Result<Node> {
    for error in dom.errors.borrow().iter() {
        tracing::trace!(%error, "html5ever recovered from a parse error");
    }

    let root = dom
        .document
        .children
        .borrow()
        .iter()
        .find_map(convert_element)
        .map(Node::Element);

    match root {
        Some(root) => {
            tracing::trace!("parsed HTML document");
            Ok(root)
        }
        None => Err(ConversionError::InvalidRoot),
    }
}

/// An element whose children are still being copied.
struct PendingElement {
    element: Element,
    children: std::vec::IntoIter<Handle>,
}

impl PendingElement {
    /// `None` unless `handle` is an element.
    fn open(handle: &Handle) -> Option<Self> {
        let NodeData::Element { name, attrs, .. } = &handle.data else {
            return None;
        };
        let mut element = Element::new(&name.local);
        for attr in attrs.borrow().iter() {
            element.set_attr(&attr.name.local, attr.value.to_string());
        }
        Some(Self {
            element,
            children: handle.children.borrow().clone().into_iter(),
        })
    }
}

/// Copy one rcdom element subtree into an owned [`Element`].
///
/// Works on an explicit stack so document depth never translates into call
/// depth. Comments, doctypes and processing instructions are dropped.
fn convert_element(handle: &Handle) -> Option<Element> {
    let mut stack = vec![PendingElement::open(handle)?];
    loop {
        let top = stack.last_mut()?;
        match top.children.next() {
            Some(child) => match &child.data {
                NodeData::Text { contents } => push_text(&mut top.element, contents.borrow().to_string()),
                NodeData::Element { .. } => stack.extend(PendingElement::open(&child)),
                NodeData::Document
                | NodeData::Doctype { .. }
                | NodeData::Comment { .. }
                | NodeData::ProcessingInstruction { .. } => {}
            },
            None => {
                let finished = stack.pop()?.element;
                match stack.last_mut() {
                    Some(parent) => parent.element.push_child(Node::Element(finished)),
                    None => return Some(finished),
                }
            }
        }
    }
}

/// Append text, merging with a preceding text node (a dropped comment can split one).
fn push_text(element: &mut Element, text: String) {
    if let Some(Node::Text(previous)) = element.last_child_mut() {
        previous.push_str(&text);
    } else {
        element.push_child(Node::Text(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(root: &Node) -> &Element {
        root.as_element()
            .and_then(|html| html.child_elements().find(|e| e.tag_name() == "body"))
            .unwrap()
    }

    #[test]
    fn root_is_html_element() {
        let root = parse_html("<p>hi</p>").unwrap();
        assert_eq!(root.as_element().unwrap().tag_name(), "html");
    }

    #[test]
    fn tags_and_attributes_are_lowercased() {
        let root = parse_html(r#"<P CLASS="x"><A HREF="/y">y</A></P>"#).unwrap();
        let p = body(&root).child_elements().next().unwrap();
        assert_eq!(p.tag_name(), "p");
        assert_eq!(p.attr("class"), Some("x"));
        let a = p.child_elements().next().unwrap();
        assert_eq!(a.attr("href"), Some("/y"));
    }

    #[test]
    fn entities_are_decoded() {
        let root = parse_html("<p>a &amp; b &lt;c&gt; &#39;d&#39;</p>").unwrap();
        assert_eq!(body(&root).children()[0].text_content(), "a & b <c> 'd'");
    }

    #[test]
    fn comments_are_dropped_and_text_merged() {
        let root = parse_html("<p>one<!-- note -->two</p>").unwrap();
        let p = body(&root).child_elements().next().unwrap();
        assert_eq!(p.children(), &[Node::text("onetwo")]);
    }

    #[test]
    fn deeply_nested_document() {
        let depth = 20_000;
        let html = format!("{}deep{}", "<span>".repeat(depth), "</span>".repeat(depth));
        let root = parse_html(&html).unwrap();
        assert_eq!(root.text_content(), "deep");
    }

    #[test]
    fn reader_input_matches_string_input() {
        let html = "<ul><li>a</li></ul>";
        assert_eq!(parse_reader(html.as_bytes()).unwrap(), parse_html(html).unwrap());
    }
}
