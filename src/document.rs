//! Document tree produced by the Markdown parser and consumed by the renderer
//!
//! The tree follows the usual Markdown AST vocabulary: block containers hold
//! block children, inline containers hold inline children, and only
//! [`Node::Text`] carries prose that counts as words.

use serde::{Deserialize, Serialize};

/// Column alignment of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    None,
    Left,
    Center,
    Right,
}

/// A node of the document tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    // === Blocks ===
    Paragraph { children: Vec<Node> },
    Heading { depth: u8, children: Vec<Node> },
    BlockQuote { children: Vec<Node> },
    List { ordered: bool, start: Option<u64>, children: Vec<Node> },
    /// `checked` is set for task list items
    ListItem { checked: Option<bool>, children: Vec<Node> },
    Table { align: Vec<Alignment>, children: Vec<Node> },
    TableRow { children: Vec<Node> },
    TableCell { children: Vec<Node> },
    FootnoteDefinition { label: String, children: Vec<Node> },
    Code { lang: Option<String>, value: String },
    Html { value: String },
    /// Scene break, either authored (`***`) or inserted between merged notes
    ThematicBreak,
    /// Raw YAML front matter; removed before merging
    FrontMatter { value: String },

    // === Inlines ===
    Emphasis { children: Vec<Node> },
    Strong { children: Vec<Node> },
    Delete { children: Vec<Node> },
    Link { url: String, title: String, children: Vec<Node> },
    Image { url: String, title: String, alt: String },
    InlineCode { value: String },
    FootnoteReference { label: String },
    Break,
    Text { value: String },
}

impl Node {
    /// Create a text node
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text { value: value.into() }
    }

    /// Create a paragraph holding a single text node
    pub fn paragraph(value: impl Into<String>) -> Self {
        Node::Paragraph {
            children: vec![Node::text(value)],
        }
    }

    /// Child nodes of a container, empty for leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::BlockQuote { children }
            | Node::List { children, .. }
            | Node::ListItem { children, .. }
            | Node::Table { children, .. }
            | Node::TableRow { children }
            | Node::TableCell { children }
            | Node::FootnoteDefinition { children, .. }
            | Node::Emphasis { children }
            | Node::Strong { children }
            | Node::Delete { children }
            | Node::Link { children, .. } => children,
            Node::Code { .. }
            | Node::Html { .. }
            | Node::ThematicBreak
            | Node::FrontMatter { .. }
            | Node::Image { .. }
            | Node::InlineCode { .. }
            | Node::FootnoteReference { .. }
            | Node::Break
            | Node::Text { .. } => &[],
        }
    }

    /// Mutable child list of a container, `None` for leaves
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::BlockQuote { children }
            | Node::List { children, .. }
            | Node::ListItem { children, .. }
            | Node::Table { children, .. }
            | Node::TableRow { children }
            | Node::TableCell { children }
            | Node::FootnoteDefinition { children, .. }
            | Node::Emphasis { children }
            | Node::Strong { children }
            | Node::Delete { children }
            | Node::Link { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Value of a text node
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text { value } => Some(value),
            _ => None,
        }
    }

    pub fn is_thematic_break(&self) -> bool {
        matches!(self, Node::ThematicBreak)
    }

    pub fn is_front_matter(&self) -> bool {
        matches!(self, Node::FrontMatter { .. })
    }
}

/// Root of a document tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// True when the tree holds anything besides scene breaks.
    ///
    /// Authored `***` rules and inserted separators are the same node, so a
    /// tree made only of rules counts as empty: a manuscript of nothing but
    /// scene breaks has no prose to render.
    pub fn has_content(&self) -> bool {
        self.children.iter().any(|node| !node.is_thematic_break())
    }

    /// Drop top-level front matter blocks
    pub fn strip_front_matter(&mut self) {
        self.children.retain(|node| !node.is_front_matter());
    }

    /// Number of top-level scene breaks
    pub fn scene_breaks(&self) -> usize {
        self.children
            .iter()
            .filter(|node| node.is_thematic_break())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_front_matter_top_level_only() {
        let mut doc = Document::new(vec![
            Node::FrontMatter { value: "title: x".to_string() },
            Node::paragraph("Body"),
            Node::BlockQuote {
                children: vec![Node::FrontMatter { value: "nested".to_string() }],
            },
        ]);
        doc.strip_front_matter();
        assert_eq!(doc.children.len(), 2);
        assert_eq!(doc.children[1].children().len(), 1);
    }

    #[test]
    fn test_has_content() {
        assert!(!Document::default().has_content());
        assert!(!Document::new(vec![Node::ThematicBreak]).has_content());
        assert!(Document::new(vec![Node::ThematicBreak, Node::paragraph("x")]).has_content());
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let json = serde_json::to_value(Node::paragraph("Hi")).unwrap();
        assert_eq!(json["type"], "paragraph");
        assert_eq!(json["children"][0]["type"], "text");
        assert_eq!(json["children"][0]["value"], "Hi");

        let json = serde_json::to_value(Node::ThematicBreak).unwrap();
        assert_eq!(json["type"], "thematicBreak");
    }
}
