use crate::html::HtmlNode;

use super::kinds::{Delimiter, Markup};

/// The kind of an inline [`TextFragment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A typed piece of inline content produced by the tokenizer.
///
/// `target` is only set for [`FragmentKind::Link`] and [`FragmentKind::Image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    pub content: String,
    pub kind: FragmentKind,
    pub target: Option<String>,
}

impl TextFragment {
    pub fn new(content: impl Into<String>, kind: FragmentKind) -> Self {
        Self {
            content: content.into(),
            kind,
            target: None,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, FragmentKind::Plain)
    }

    pub fn link(content: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: FragmentKind::Link,
            target: Some(target.into()),
        }
    }

    pub fn image(alt: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            content: alt.into(),
            kind: FragmentKind::Image,
            target: Some(target.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == FragmentKind::Plain
    }

    /// Maps the fragment onto a leaf node.
    ///
    /// | kind   | tag    | value   | attributes      |
    /// |--------|--------|---------|-----------------|
    /// | Plain  | none   | content |                 |
    /// | Bold   | `b`    | content |                 |
    /// | Italic | `i`    | content |                 |
    /// | Code   | `code` | content |                 |
    /// | Link   | `a`    | content | `href`          |
    /// | Image  | `img`  | `""`    | `src`, `alt`    |
    pub fn to_html_node(&self) -> HtmlNode {
        let target = self.target.as_deref().unwrap_or_default();
        match self.kind {
            FragmentKind::Plain => HtmlNode::text(&self.content),
            FragmentKind::Bold => HtmlNode::leaf("b", &self.content),
            FragmentKind::Italic => HtmlNode::leaf("i", &self.content),
            FragmentKind::Code => HtmlNode::leaf("code", &self.content),
            FragmentKind::Link => {
                HtmlNode::leaf_with_attributes("a", &self.content, [("href", target)])
            }
            FragmentKind::Image => HtmlNode::leaf_with_attributes(
                "img",
                "",
                [("src", target), ("alt", self.content.as_str())],
            ),
        }
    }

    /// Writes the fragment back out as Markdown source.
    ///
    /// Concatenating this over a tokenized span reproduces the span.
    pub fn to_markdown(&self) -> String {
        let target = self.target.as_deref().unwrap_or_default();
        match self.kind {
            FragmentKind::Plain => self.content.clone(),
            FragmentKind::Bold => Delimiter::Bold.wrap(&self.content),
            FragmentKind::Italic => Delimiter::Italic.wrap(&self.content),
            FragmentKind::Code => Delimiter::Code.wrap(&self.content),
            FragmentKind::Link => Markup::Link.render(&self.content, target),
            FragmentKind::Image => Markup::Image.render(&self.content, target),
        }
    }
}
