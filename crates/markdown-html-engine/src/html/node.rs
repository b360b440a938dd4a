use std::fmt;

/// Ordered `name -> value` attribute pairs. Rendered in insertion order.
pub type Attributes = Vec<(String, String)>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("leaf node {} has no value", .tag.as_deref().unwrap_or("(text)"))]
    MissingValue { tag: Option<String> },
    #[error("parent node has no tag")]
    MissingTag,
    #[error("parent node <{tag}> has no children")]
    MissingChildren { tag: String },
}

/// A terminal node carrying text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafNode {
    /// Element name. `None` renders the value as a bare text node.
    pub tag: Option<String>,
    /// Text content. Required for rendering.
    pub value: Option<String>,
    pub attributes: Attributes,
}

/// A container node owning its children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentNode {
    /// Element name. Required for rendering.
    pub tag: Option<String>,
    /// Child nodes in document order. Required for rendering, may be empty.
    pub children: Option<Vec<HtmlNode>>,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// A raw text node with no surrounding element.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        })
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::leaf_with_attributes(tag, value, Attributes::new())
    }

    pub fn leaf_with_attributes<I, K, V>(
        tag: impl Into<String>,
        value: impl Into<String>,
        attributes: I,
    ) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        HtmlNode::Leaf(LeafNode {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: collect_attributes(attributes),
        })
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent(ParentNode {
            tag: Some(tag.into()),
            children: Some(children),
            attributes: Attributes::new(),
        })
    }

    /// Element name of this node, if any.
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    /// Child nodes. Leaves have none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => parent.children.as_deref().unwrap_or_default(),
        }
    }

    /// Serializes the tree to an HTML string.
    pub fn render(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.render_into(out),
            HtmlNode::Parent(parent) => parent.render_into(out),
        }
    }
}

impl LeafNode {
    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        let value = self
            .value
            .as_deref()
            .ok_or_else(|| RenderError::MissingValue {
                tag: self.tag.clone(),
            })?;

        match &self.tag {
            None => out.push_str(value),
            Some(tag) => {
                open_tag(out, tag, &self.attributes);
                out.push_str(value);
                close_tag(out, tag);
            }
        }
        Ok(())
    }
}

impl ParentNode {
    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        let tag = self.tag.as_deref().ok_or(RenderError::MissingTag)?;
        let children = self
            .children
            .as_deref()
            .ok_or_else(|| RenderError::MissingChildren {
                tag: tag.to_string(),
            })?;

        open_tag(out, tag, &self.attributes);
        for child in children {
            child.render_into(out)?;
        }
        close_tag(out, tag);
        Ok(())
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// Compact one-line description, handy in logs and assertion messages.
impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HtmlNode::Leaf(leaf) => write!(
                f,
                "LeafNode({}, {:?}, {})",
                leaf.tag.as_deref().unwrap_or("None"),
                leaf.value.as_deref().unwrap_or_default(),
                DisplayAttributes(&leaf.attributes)
            ),
            HtmlNode::Parent(parent) => {
                write!(
                    f,
                    "ParentNode({}, [",
                    parent.tag.as_deref().unwrap_or("None")
                )?;
                for (i, child) in self.children().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, "], {})", DisplayAttributes(&parent.attributes))
            }
        }
    }
}

struct DisplayAttributes<'a>(&'a Attributes);

impl fmt::Display for DisplayAttributes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value:?}")?;
        }
        f.write_str("}")
    }
}

fn collect_attributes<I, K, V>(attributes: I) -> Attributes
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    attributes
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

fn open_tag(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
