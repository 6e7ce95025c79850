use super::{Attributes, HtmlError};

/// A node in the HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Text-bearing terminal node.
    Leaf(LeafNode),
    /// Tag-bearing container node.
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            HtmlNode::Leaf(leaf) => leaf.write_html(out),
            HtmlNode::Parent(parent) => parent.write_html(out),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag(),
            HtmlNode::Parent(parent) => Some(parent.tag()),
        }
    }

    pub fn as_parent(&self) -> Option<&ParentNode> {
        match self {
            HtmlNode::Parent(parent) => Some(parent),
            HtmlNode::Leaf(_) => None,
        }
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

/// A leaf holding rendered text, optionally wrapped in a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    value: String,
    attributes: Attributes,
}

impl LeafNode {
    /// Creates a leaf. An empty `tag` is treated the same as no tag.
    ///
    /// # Errors
    /// [`HtmlError::InvalidLeafConstruction`] if `value` is empty.
    pub fn new(value: impl Into<String>, tag: Option<&str>) -> Result<Self, HtmlError> {
        let value = value.into();
        if value.is_empty() {
            return Err(HtmlError::InvalidLeafConstruction);
        }
        Ok(Self {
            tag: tag.filter(|t| !t.is_empty()).map(str::to_string),
            value,
            attributes: Attributes::new(),
        })
    }

    /// Shorthand for a tag-less leaf that renders `value` verbatim.
    pub fn text(value: impl Into<String>) -> Result<Self, HtmlError> {
        Self::new(value, None)
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match &self.tag {
            None => out.push_str(&self.value),
            Some(tag) => {
                out.push('<');
                out.push_str(tag);
                out.push_str(&self.attributes.to_html());
                out.push('>');
                out.push_str(&self.value);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

/// A container node with a required tag and an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    tag: String,
    children: Vec<HtmlNode>,
    attributes: Attributes,
}

impl ParentNode {
    /// Creates a parent with the given children.
    ///
    /// # Errors
    /// [`HtmlError::InvalidParentConstruction`] if `tag` is empty.
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Result<Self, HtmlError> {
        Self::builder(tag).children(children).build()
    }

    pub fn builder(tag: impl Into<String>) -> ParentBuilder {
        ParentBuilder {
            tag: tag.into(),
            children: None,
            attributes: Attributes::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn add_child(&mut self, node: impl Into<HtmlNode>) {
        self.children.push(node.into());
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        out.push_str(&self.attributes.to_html());
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// Builder for [`ParentNode`].
///
/// The children sequence must be supplied explicitly, even if it is empty;
/// a builder that never received one fails on [`ParentBuilder::build`].
#[derive(Debug, Clone)]
pub struct ParentBuilder {
    tag: String,
    children: Option<Vec<HtmlNode>>,
    attributes: Attributes,
}

impl ParentBuilder {
    pub fn children(mut self, children: Vec<HtmlNode>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn build(self) -> Result<ParentNode, HtmlError> {
        if self.tag.is_empty() {
            return Err(HtmlError::InvalidParentConstruction {
                reason: "missing tag",
            });
        }
        let Some(children) = self.children else {
            return Err(HtmlError::InvalidParentConstruction {
                reason: "missing children",
            });
        };
        Ok(ParentNode {
            tag: self.tag,
            children,
            attributes: self.attributes,
        })
    }
}
