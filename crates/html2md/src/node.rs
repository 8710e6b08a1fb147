//! Owned document tree consumed by the converter.
//!
//! Tag and attribute names are lowercased when they enter the tree, so every
//! lookup made by the converter is case-insensitive.

use std::collections::BTreeMap;

/// A single node of a parsed HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with a tag name, attributes and children.
    Element(Element),
    /// Character data with HTML entities already decoded.
    Text(String),
}

impl Node {
    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// The element payload, if this is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Concatenate all descendant text in document order.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut buf = String::new();
        collect_text(std::slice::from_ref(self), &mut buf);
        buf
    }
}

/// Depth-first text collection on an explicit stack, so arbitrarily deep
/// trees cannot exhaust the call stack.
fn collect_text(nodes: &[Node], buf: &mut String) {
    let mut pending: Vec<std::slice::Iter<'_, Node>> = vec![nodes.iter()];
    while let Some(siblings) = pending.last_mut() {
        match siblings.next() {
            Some(Node::Text(text)) => buf.push_str(text),
            Some(Node::Element(element)) => pending.push(element.children.iter()),
            None => {
                pending.pop();
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An HTML element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    tag_name: String,
    attributes: BTreeMap<String, String>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element; the tag name is stored lowercased.
    #[must_use]
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute. Later values for the same name replace earlier ones.
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several child nodes.
    #[must_use]
    pub fn with_children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::Text(text.into()))
    }

    /// Set an attribute in place.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_ascii_lowercase(), value.into());
    }

    /// Append a child in place.
    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub(crate) fn last_child_mut(&mut self) -> Option<&mut Node> {
        self.children.last_mut()
    }

    /// Lowercased tag name.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Case-insensitive attribute lookup.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            self.attributes.get(&name.to_ascii_lowercase()).map(String::as_str)
        } else {
            self.attributes.get(name).map(String::as_str)
        }
    }

    /// Child nodes in document order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Iterate over the element children, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Concatenate all descendant text in document order.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut buf = String::new();
        collect_text(&self.children, &mut buf);
        buf
    }
}

impl Drop for Element {
    // The derived drop recurses once per nesting level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Element(mut element) = node {
                pending.append(&mut element.children);
            }
        }
    }
}
