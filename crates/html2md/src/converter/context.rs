//! Emission context and element classification.

use crate::options::ConversionOptions;

/// The closed set of element behaviours the converter knows about.
///
/// Resolved once per element from its tag name; everything the converter does
/// with an element is keyed on this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ElementKind {
    /// `h1`..`h6`, carrying the level.
    Heading(usize),
    Paragraph,
    Strong,
    Emphasis,
    Link,
    Image,
    Code,
    Preformatted,
    UnorderedList,
    OrderedList,
    ListItem,
    Blockquote,
    LineBreak,
    ThematicBreak,
    /// Block containers with no markup of their own (`div`, `section`, ...).
    Container,
    /// Inline containers with no markup of their own (`span`, `small`, ...).
    InlineContainer,
    /// `html` and `body`.
    Document,
    /// Non-content elements dropped with their subtree.
    Ignored,
    Unknown,
}

impl ElementKind {
    /// Classify a lowercased tag name.
    pub(crate) fn from_tag(tag_name: &str) -> Self {
        match tag_name {
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "p" => Self::Paragraph,
            "strong" | "b" => Self::Strong,
            "em" | "i" => Self::Emphasis,
            "a" => Self::Link,
            "img" => Self::Image,
            "code" => Self::Code,
            "pre" => Self::Preformatted,
            "ul" => Self::UnorderedList,
            "ol" => Self::OrderedList,
            "li" => Self::ListItem,
            "blockquote" => Self::Blockquote,
            "br" => Self::LineBreak,
            "hr" => Self::ThematicBreak,
            "div" | "section" | "article" | "main" | "header" | "footer" | "nav" | "aside" | "figure"
            | "figcaption" | "address" | "details" | "summary" => Self::Container,
            "span" | "small" | "abbr" | "cite" | "time" | "mark" | "u" | "sub" | "sup" | "label" => {
                Self::InlineContainer
            }
            "html" | "body" => Self::Document,
            "head" | "title" | "meta" | "link" | "script" | "style" | "template" | "noscript" => Self::Ignored,
            _ => Self::Unknown,
        }
    }

    /// Whether the element starts a block of its own.
    pub(crate) const fn is_block(self) -> bool {
        matches!(
            self,
            Self::Heading(_)
                | Self::Paragraph
                | Self::Preformatted
                | Self::UnorderedList
                | Self::OrderedList
                | Self::ListItem
                | Self::Blockquote
                | Self::ThematicBreak
                | Self::Container
        )
    }
}

/// One entry of the list stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListKind {
    /// Ordered list, carrying the number of the item being rendered.
    Ordered(usize),
    Unordered,
}

impl ListKind {
    /// Marker for the current item, without the trailing space.
    pub(crate) fn marker(self, options: &ConversionOptions) -> String {
        match self {
            Self::Ordered(index) => format!("{index}."),
            Self::Unordered => options.bullet.as_char().to_string(),
        }
    }
}

/// An open inline style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InlineStyle {
    Bold,
    Italic,
}

impl InlineStyle {
    /// Opening and closing delimiter.
    pub(crate) fn delimiter(self, options: &ConversionOptions) -> String {
        let symbol = options.emphasis_symbol.as_char();
        match self {
            Self::Bold => [symbol, symbol].iter().collect(),
            Self::Italic => symbol.to_string(),
        }
    }

    pub(crate) const fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
        }
    }
}

/// Ancestry-derived state threaded through the tree walk.
///
/// Handlers never mutate the context they receive; they derive a new value for
/// their children, so changes made in one subtree are invisible to its siblings.
#[derive(Debug, Clone, Default)]
pub(crate) struct Context {
    /// One entry per ancestor `ul`/`ol`.
    pub(crate) list_stack: Vec<ListKind>,
    /// Number of ancestor blockquotes.
    pub(crate) blockquote_depth: usize,
    /// Inline styles opened by ancestors, outermost first.
    pub(crate) inline_styles: Vec<InlineStyle>,
    /// Language of the enclosing fenced code block.
    pub(crate) code_language: Option<String>,
    /// Inside `pre`: text is copied verbatim.
    pub(crate) in_code: bool,
    /// Rendering the content of a list item.
    pub(crate) in_list_item: bool,
    /// Rendering a link label.
    pub(crate) in_link: bool,
    /// Block structure is flattened to a single line (headings, link labels).
    pub(crate) convert_as_inline: bool,
}

impl Context {
    pub(crate) fn has_style(&self, style: InlineStyle) -> bool {
        self.inline_styles.contains(&style)
    }

    pub(crate) fn with_style(&self, style: InlineStyle) -> Self {
        let mut ctx = self.clone();
        ctx.inline_styles.push(style);
        ctx
    }

    pub(crate) fn with_list(&self, kind: ListKind) -> Self {
        let mut ctx = self.clone();
        ctx.list_stack.push(kind);
        ctx
    }

    /// Replace the top of the list stack with the item about to be rendered.
    pub(crate) fn with_current_item(&self, kind: ListKind) -> Self {
        let mut ctx = self.clone();
        if let Some(top) = ctx.list_stack.last_mut() {
            *top = kind;
        }
        ctx
    }

    pub(crate) fn list_depth(&self) -> usize {
        self.list_stack.len()
    }
}
