//! Word counting over a parsed document tree

use crate::document::{Document, Node};

/// Count the words in every text node of `doc`, in document order.
pub fn count_words(doc: &Document) -> usize {
    doc.children.iter().map(count_node).sum()
}

fn count_node(node: &Node) -> usize {
    match node {
        Node::Text { value } => count_text(value),
        other => other.children().iter().map(count_node).sum(),
    }
}

/// Whitespace-separated tokens in `text`; blank text counts zero
pub fn count_text(text: &str) -> usize {
    text.split_whitespace().count()
}
