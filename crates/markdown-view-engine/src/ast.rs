//! Markdown syntax tree consumed by the renderer.
//!
//! The tree is produced by an external parser. Nothing here re-validates
//! grammar-level properties such as heading levels; every well-formed
//! instance is accepted as given.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Content of inline container nodes.
///
/// Whether content is raw text or nested nodes is decided when the tree
/// is built, so renderers never inspect shapes at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InlineContent {
    /// Raw text; always renders as a leaf.
    Text(String),
    /// A single nested node.
    Node(Box<Node>),
    /// A sequence of nested nodes.
    Nodes(Vec<Node>),
}

impl InlineContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn node(node: Node) -> Self {
        Self::Node(Box::new(node))
    }

    pub fn nodes(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self::Nodes(nodes.into_iter().collect())
    }
}

impl From<&str> for InlineContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for InlineContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Node> for InlineContent {
    fn from(node: Node) -> Self {
        Self::node(node)
    }
}

impl From<Vec<Node>> for InlineContent {
    fn from(nodes: Vec<Node>) -> Self {
        Self::Nodes(nodes)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub content: String,
}

/// Generic container used by paragraphs, emphasis, strong, underline,
/// strike-through and block quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineContentNode {
    pub content: InlineContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingNode {
    pub level: u8,
    pub content: InlineContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageNode {
    pub target: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkNode {
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: InlineContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListNode {
    pub ordered: bool,
    #[serde(default = "ListNode::default_start")]
    pub start: i64,
    pub items: Vec<InlineContent>,
}

impl ListNode {
    fn default_start() -> i64 {
        1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableAlign {
    Left,
    Center,
    Right,
}

/// A table with a header row and a body matrix.
///
/// Body rows may be ragged; renderers use each row's own length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableNode {
    pub header: Vec<InlineContent>,
    pub cells: Vec<Vec<InlineContent>>,
    #[serde(default)]
    pub align: Option<TableAlign>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlockNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    pub content: String,
}

/// A node kind the built-in rules do not know about.
///
/// Rendering one requires a rule registered under `NodeKind::Custom(kind)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomNode {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<InlineContent>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Text(TextNode),
    Paragraph(InlineContentNode),
    Em(InlineContentNode),
    Strong(InlineContentNode),
    U(InlineContentNode),
    Del(InlineContentNode),
    BlockQuote(InlineContentNode),
    Heading(HeadingNode),
    Image(ImageNode),
    Link(LinkNode),
    List(ListNode),
    Table(TableNode),
    CodeBlock(CodeBlockNode),
    InlineCode(TextNode),
    Hr,
    Br,
    Newline,
    Custom(CustomNode),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Text(_) => NodeKind::Text,
            Node::Paragraph(_) => NodeKind::Paragraph,
            Node::Em(_) => NodeKind::Em,
            Node::Strong(_) => NodeKind::Strong,
            Node::U(_) => NodeKind::U,
            Node::Del(_) => NodeKind::Del,
            Node::BlockQuote(_) => NodeKind::BlockQuote,
            Node::Heading(_) => NodeKind::Heading,
            Node::Image(_) => NodeKind::Image,
            Node::Link(_) => NodeKind::Link,
            Node::List(_) => NodeKind::List,
            Node::Table(_) => NodeKind::Table,
            Node::CodeBlock(_) => NodeKind::CodeBlock,
            Node::InlineCode(_) => NodeKind::InlineCode,
            Node::Hr => NodeKind::Hr,
            Node::Br => NodeKind::Br,
            Node::Newline => NodeKind::Newline,
            Node::Custom(custom) => NodeKind::Custom(custom.kind.clone()),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(TextNode {
            content: content.into(),
        })
    }

    pub fn paragraph(content: impl Into<InlineContent>) -> Self {
        Node::Paragraph(InlineContentNode {
            content: content.into(),
        })
    }

    pub fn em(content: impl Into<InlineContent>) -> Self {
        Node::Em(InlineContentNode {
            content: content.into(),
        })
    }

    pub fn strong(content: impl Into<InlineContent>) -> Self {
        Node::Strong(InlineContentNode {
            content: content.into(),
        })
    }

    pub fn heading(level: u8, content: impl Into<InlineContent>) -> Self {
        Node::Heading(HeadingNode {
            level,
            content: content.into(),
        })
    }

    pub fn link(target: impl Into<String>, content: impl Into<InlineContent>) -> Self {
        Node::Link(LinkNode {
            target: target.into(),
            title: None,
            content: content.into(),
        })
    }

    pub fn image(target: impl Into<String>) -> Self {
        Node::Image(ImageNode {
            target: target.into(),
            alt: String::new(),
            title: String::new(),
            width: None,
            height: None,
        })
    }
}

/// Registry key for render rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    Text,
    Paragraph,
    Em,
    Strong,
    U,
    Del,
    BlockQuote,
    Heading,
    Image,
    Link,
    List,
    Table,
    CodeBlock,
    InlineCode,
    Hr,
    Br,
    Newline,
    Custom(String),
}

impl NodeKind {
    /// Every kind with a built-in renderer.
    pub const BUILTIN: [NodeKind; 17] = [
        NodeKind::Text,
        NodeKind::Paragraph,
        NodeKind::Em,
        NodeKind::Strong,
        NodeKind::U,
        NodeKind::Del,
        NodeKind::BlockQuote,
        NodeKind::Heading,
        NodeKind::Image,
        NodeKind::Link,
        NodeKind::List,
        NodeKind::Table,
        NodeKind::CodeBlock,
        NodeKind::InlineCode,
        NodeKind::Hr,
        NodeKind::Br,
        NodeKind::Newline,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Text => "text",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Em => "em",
            NodeKind::Strong => "strong",
            NodeKind::U => "u",
            NodeKind::Del => "del",
            NodeKind::BlockQuote => "blockQuote",
            NodeKind::Heading => "heading",
            NodeKind::Image => "image",
            NodeKind::Link => "link",
            NodeKind::List => "list",
            NodeKind::Table => "table",
            NodeKind::CodeBlock => "codeBlock",
            NodeKind::InlineCode => "inlineCode",
            NodeKind::Hr => "hr",
            NodeKind::Br => "br",
            NodeKind::Newline => "newline",
            NodeKind::Custom(name) => name,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Node::text("a"), "text")]
    #[case(Node::paragraph("a"), "paragraph")]
    #[case(Node::heading(2, "a"), "heading")]
    #[case(Node::Hr, "hr")]
    #[case(Node::InlineCode(TextNode { content: "x".into() }), "inlineCode")]
    #[case(Node::BlockQuote(InlineContentNode { content: "q".into() }), "blockQuote")]
    fn test_kind_names(#[case] node: Node, #[case] expected: &str) {
        assert_eq!(node.kind().to_string(), expected);
    }

    #[test]
    fn test_custom_kind_uses_its_own_name() {
        let node = Node::Custom(CustomNode {
            kind: "mention".to_string(),
            content: Some("@tim".into()),
            attributes: BTreeMap::new(),
        });

        assert_eq!(node.kind(), NodeKind::Custom("mention".to_string()));
        assert_eq!(node.kind().as_str(), "mention");
    }

    #[test]
    fn test_builtin_kinds_are_distinct() {
        let kinds = NodeKind::BUILTIN;
        let mut names: Vec<_> = kinds.iter().map(NodeKind::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), kinds.len());
    }
}
