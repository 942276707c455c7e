use serde::{Deserialize, Serialize};
use std::fmt;

/// A single attribute on a component element.
///
/// Attributes keep their authored order. A `None` value is a bare boolean
/// attribute (`<video muted />`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

/// A node in the hybrid document tree.
///
/// One closed set of kinds: markup containers, text leaves, and the two
/// component-element variants. Child sequences are ordered (reading order)
/// and nodes never store parent pointers; ancestry is implicit in traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    /// Document root container.
    Root { children: Vec<Node> },

    /// Container for inline content.
    Paragraph { children: Vec<Node> },

    /// Text leaf. The value is an arbitrary string, including empty.
    Text { value: String },

    /// Embedded component referenced inline. Its children are independent
    /// of the enclosing paragraph's child sequence.
    InlineComponent {
        name: String,
        #[serde(default)]
        attributes: Vec<Attribute>,
        #[serde(default)]
        children: Vec<Node>,
    },

    /// Embedded component valid at block level; may directly contain
    /// `Paragraph` children.
    BlockComponent {
        name: String,
        #[serde(default)]
        attributes: Vec<Attribute>,
        #[serde(default)]
        children: Vec<Node>,
    },

    Heading { depth: u8, children: Vec<Node> },

    List { ordered: bool, children: Vec<Node> },

    ListItem { children: Vec<Node> },

    Blockquote { children: Vec<Node> },

    Emphasis { children: Vec<Node> },

    Strong { children: Vec<Node> },

    InlineCode { value: String },

    Code {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
        value: String,
    },

    ThematicBreak,
}

/// Discriminant-only view of [`Node`], used as the interest set for
/// traversal and in log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Paragraph,
    Text,
    InlineComponent,
    BlockComponent,
    Heading,
    List,
    ListItem,
    Blockquote,
    Emphasis,
    Strong,
    InlineCode,
    Code,
    ThematicBreak,
}

impl NodeKind {
    /// The kind's name in the serialized tag form.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Text => "text",
            NodeKind::InlineComponent => "inlineComponent",
            NodeKind::BlockComponent => "blockComponent",
            NodeKind::Heading => "heading",
            NodeKind::List => "list",
            NodeKind::ListItem => "listItem",
            NodeKind::Blockquote => "blockquote",
            NodeKind::Emphasis => "emphasis",
            NodeKind::Strong => "strong",
            NodeKind::InlineCode => "inlineCode",
            NodeKind::Code => "code",
            NodeKind::ThematicBreak => "thematicBreak",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Root { .. } => NodeKind::Root,
            Node::Paragraph { .. } => NodeKind::Paragraph,
            Node::Text { .. } => NodeKind::Text,
            Node::InlineComponent { .. } => NodeKind::InlineComponent,
            Node::BlockComponent { .. } => NodeKind::BlockComponent,
            Node::Heading { .. } => NodeKind::Heading,
            Node::List { .. } => NodeKind::List,
            Node::ListItem { .. } => NodeKind::ListItem,
            Node::Blockquote { .. } => NodeKind::Blockquote,
            Node::Emphasis { .. } => NodeKind::Emphasis,
            Node::Strong { .. } => NodeKind::Strong,
            Node::InlineCode { .. } => NodeKind::InlineCode,
            Node::Code { .. } => NodeKind::Code,
            Node::ThematicBreak => NodeKind::ThematicBreak,
        }
    }

    /// Children of a container node; `None` for leaf kinds.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root { children }
            | Node::Paragraph { children }
            | Node::InlineComponent { children, .. }
            | Node::BlockComponent { children, .. }
            | Node::Heading { children, .. }
            | Node::List { children, .. }
            | Node::ListItem { children }
            | Node::Blockquote { children }
            | Node::Emphasis { children }
            | Node::Strong { children } => Some(children),
            Node::Text { .. }
            | Node::InlineCode { .. }
            | Node::Code { .. }
            | Node::ThematicBreak => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root { children }
            | Node::Paragraph { children }
            | Node::InlineComponent { children, .. }
            | Node::BlockComponent { children, .. }
            | Node::Heading { children, .. }
            | Node::List { children, .. }
            | Node::ListItem { children }
            | Node::Blockquote { children }
            | Node::Emphasis { children }
            | Node::Strong { children } => Some(children),
            Node::Text { .. }
            | Node::InlineCode { .. }
            | Node::Code { .. }
            | Node::ThematicBreak => None,
        }
    }

    pub fn root(children: Vec<Node>) -> Self {
        Node::Root { children }
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph { children }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    pub fn inline_component(name: impl Into<String>) -> Self {
        Node::InlineComponent {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn inline_component_with(
        name: impl Into<String>,
        attributes: Vec<Attribute>,
        children: Vec<Node>,
    ) -> Self {
        Node::InlineComponent {
            name: name.into(),
            attributes,
            children,
        }
    }

    pub fn block_component(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::BlockComponent {
            name: name.into(),
            attributes: Vec::new(),
            children,
        }
    }

    pub fn block_component_with(
        name: impl Into<String>,
        attributes: Vec<Attribute>,
        children: Vec<Node>,
    ) -> Self {
        Node::BlockComponent {
            name: name.into(),
            attributes,
            children,
        }
    }

    pub fn heading(depth: u8, children: Vec<Node>) -> Self {
        Node::Heading { depth, children }
    }

    pub fn blockquote(children: Vec<Node>) -> Self {
        Node::Blockquote { children }
    }
}
