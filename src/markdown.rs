//! Markdown parsing using pulldown-cmark
//!
//! Folds the pulldown-cmark event stream into a [`Document`] tree. The parser
//! sits behind [`MarkdownParser`] so the merge engine can run against a fake.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

use crate::document::{Alignment, Document, Node};

/// Turns note text into a document tree
pub trait MarkdownParser {
    fn parse(&self, text: &str) -> Document;
}

/// GFM-flavoured parser with YAML front matter support
#[derive(Debug, Clone, Copy, Default)]
pub struct CmarkParser;

impl CmarkParser {
    pub fn new() -> Self {
        Self
    }

    fn options() -> Options {
        Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_YAML_STYLE_METADATA_BLOCKS
    }
}

impl MarkdownParser for CmarkParser {
    fn parse(&self, text: &str) -> Document {
        let mut builder = TreeBuilder::default();

        for event in Parser::new_ext(text, Self::options()) {
            match event {
                Event::Start(tag) => builder.open(tag),
                Event::End(_) => builder.close(),
                Event::Text(text) => builder.text(&text),
                Event::Code(code) => builder.attach(Node::InlineCode {
                    value: code.to_string(),
                }),
                Event::Html(html) => builder.html(&html),
                Event::InlineHtml(html) => builder.attach(Node::Html {
                    value: html.to_string(),
                }),
                Event::FootnoteReference(label) => builder.attach(Node::FootnoteReference {
                    label: label.to_string(),
                }),
                Event::SoftBreak => builder.text("\n"),
                Event::HardBreak => builder.attach(Node::Break),
                Event::Rule => builder.attach(Node::ThematicBreak),
                Event::TaskListMarker(checked) => builder.check_item(checked),
                _ => {}
            }
        }

        builder.finish()
    }
}

/// An open container while folding events
enum Frame {
    Node(Node),
    /// Tags with no node of their own; children go to the parent on close
    Transparent(Vec<Node>),
}

#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Frame>,
    root: Vec<Node>,
}

impl TreeBuilder {
    fn open(&mut self, tag: Tag<'_>) {
        let node = match tag {
            Tag::Paragraph => Node::Paragraph { children: Vec::new() },
            Tag::Heading { level, .. } => Node::Heading {
                depth: heading_depth(level),
                children: Vec::new(),
            },
            Tag::BlockQuote(_) => Node::BlockQuote { children: Vec::new() },
            Tag::CodeBlock(kind) => Node::Code {
                lang: match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(|lang| lang.to_string()),
                    CodeBlockKind::Indented => None,
                },
                value: String::new(),
            },
            Tag::HtmlBlock => Node::Html { value: String::new() },
            Tag::List(start) => Node::List {
                ordered: start.is_some(),
                start,
                children: Vec::new(),
            },
            Tag::Item => Node::ListItem {
                checked: None,
                children: Vec::new(),
            },
            Tag::FootnoteDefinition(label) => Node::FootnoteDefinition {
                label: label.to_string(),
                children: Vec::new(),
            },
            Tag::Table(alignments) => Node::Table {
                align: alignments.into_iter().map(alignment).collect(),
                children: Vec::new(),
            },
            // pulldown-cmark puts header cells directly under the head
            Tag::TableHead | Tag::TableRow => Node::TableRow { children: Vec::new() },
            Tag::TableCell => Node::TableCell { children: Vec::new() },
            Tag::Emphasis => Node::Emphasis { children: Vec::new() },
            Tag::Strong => Node::Strong { children: Vec::new() },
            Tag::Strikethrough => Node::Delete { children: Vec::new() },
            Tag::Link { dest_url, title, .. } => Node::Link {
                url: dest_url.to_string(),
                title: title.to_string(),
                children: Vec::new(),
            },
            Tag::Image { dest_url, title, .. } => Node::Image {
                url: dest_url.to_string(),
                title: title.to_string(),
                alt: String::new(),
            },
            Tag::MetadataBlock(_) => Node::FrontMatter { value: String::new() },
            _ => {
                self.stack.push(Frame::Transparent(Vec::new()));
                return;
            }
        };
        self.stack.push(Frame::Node(node));
    }

    fn close(&mut self) {
        match self.stack.pop() {
            Some(Frame::Node(node)) => self.attach(node),
            Some(Frame::Transparent(children)) => {
                for child in children {
                    self.attach(child);
                }
            }
            None => {}
        }
    }

    /// Add a finished node to the innermost open container
    fn attach(&mut self, node: Node) {
        if let Some(children) = self.current_children() {
            children.push(node);
        }
    }

    fn current_children(&mut self) -> Option<&mut Vec<Node>> {
        match self.stack.last_mut() {
            None => Some(&mut self.root),
            Some(Frame::Transparent(children)) => Some(children),
            Some(Frame::Node(node)) => node.children_mut(),
        }
    }

    fn text(&mut self, text: &str) {
        match self.stack.last_mut() {
            Some(Frame::Node(Node::Code { value, .. }))
            | Some(Frame::Node(Node::Html { value }))
            | Some(Frame::Node(Node::FrontMatter { value })) => value.push_str(text),
            Some(Frame::Node(Node::Image { alt, .. })) => alt.push_str(text),
            _ => {
                let Some(children) = self.current_children() else {
                    return;
                };
                // Coalesce runs split by escapes and soft breaks
                if let Some(Node::Text { value }) = children.last_mut() {
                    value.push_str(text);
                } else {
                    children.push(Node::text(text));
                }
            }
        }
    }

    fn html(&mut self, html: &str) {
        match self.stack.last_mut() {
            Some(Frame::Node(Node::Html { value })) => value.push_str(html),
            _ => self.attach(Node::Html {
                value: html.to_string(),
            }),
        }
    }

    fn check_item(&mut self, checked: bool) {
        for frame in self.stack.iter_mut().rev() {
            if let Frame::Node(Node::ListItem { checked: slot, .. }) = frame {
                *slot = Some(checked);
                return;
            }
        }
    }

    fn finish(mut self) -> Document {
        while !self.stack.is_empty() {
            self.close();
        }
        Document::new(self.root)
    }
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn alignment(align: pulldown_cmark::Alignment) -> Alignment {
    match align {
        pulldown_cmark::Alignment::None => Alignment::None,
        pulldown_cmark::Alignment::Left => Alignment::Left,
        pulldown_cmark::Alignment::Center => Alignment::Center,
        pulldown_cmark::Alignment::Right => Alignment::Right,
    }
}
