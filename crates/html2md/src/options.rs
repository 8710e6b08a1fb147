//! Configuration for HTML to Markdown conversion.

/// Marker character used for emphasis and strong emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EmphasisSymbol {
    /// `*italic*` and `**bold**`.
    #[default]
    Asterisk,
    /// `_italic_` and `__bold__`.
    Underscore,
}

impl EmphasisSymbol {
    /// The marker character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Asterisk => '*',
            Self::Underscore => '_',
        }
    }
}

/// Bullet character for unordered list items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BulletStyle {
    /// `- item`
    #[default]
    Dash,
    /// `* item`
    Asterisk,
    /// `+ item`
    Plus,
}

impl BulletStyle {
    /// The bullet character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Dash => '-',
            Self::Asterisk => '*',
            Self::Plus => '+',
        }
    }
}

/// Indentation used for nested list content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ListIndentType {
    /// `list_indent_width` spaces per level.
    #[default]
    Spaces,
    /// One tab per level.
    Tabs,
}

/// How `<br>` is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NewlineStyle {
    /// Two trailing spaces before the newline.
    #[default]
    Spaces,
    /// A backslash before the newline.
    Backslash,
}

/// Conversion options.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConversionOptions {
    /// Marker for `<em>` and `<strong>`.
    pub emphasis_symbol: EmphasisSymbol,
    /// Bullet for `<ul>` items.
    pub bullet: BulletStyle,
    /// Spaces or tabs for nested list content.
    pub list_indent_type: ListIndentType,
    /// Spaces per indentation unit when `list_indent_type` is `Spaces`.
    pub list_indent_width: usize,
    /// Hard line break rendering.
    pub newline_style: NewlineStyle,
    /// Emit YAML front matter built from the document `<head>`.
    pub extract_metadata: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            emphasis_symbol: EmphasisSymbol::default(),
            bullet: BulletStyle::default(),
            list_indent_type: ListIndentType::default(),
            list_indent_width: 4,
            newline_style: NewlineStyle::default(),
            extract_metadata: false,
        }
    }
}

impl ConversionOptions {
    /// One list indentation unit.
    #[must_use]
    pub fn indent_unit(&self) -> String {
        match self.list_indent_type {
            ListIndentType::Tabs => "\t".to_string(),
            // Anything narrower than two columns cannot hold nested list content.
            ListIndentType::Spaces => " ".repeat(self.list_indent_width.max(2)),
        }
    }

    /// The hard line break sequence.
    #[must_use]
    pub const fn hard_break(&self) -> &'static str {
        match self.newline_style {
            NewlineStyle::Spaces => "  \n",
            NewlineStyle::Backslash => "\\\n",
        }
    }
}
