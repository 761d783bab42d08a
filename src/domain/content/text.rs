//! Text blocks: paragraphs, headings, dividers, and raw Markdown runs.

use super::container::{ChatElement, ContainerNode, Node, Render};
use super::node::InlineNode;
use crate::domain::value_objects::{ElementKind, NodeType, Text};

/// A run of inline content followed by a newline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    children: Vec<InlineNode>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<&str> for Paragraph {
    fn from(text: &str) -> Self {
        Paragraph::new().append(Text::plain(text))
    }
}

impl ContainerNode for Paragraph {
    type Child = InlineNode;

    fn children(&self) -> &[InlineNode] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<InlineNode> {
        &mut self.children
    }
}

impl ChatElement for Paragraph {
    fn kind(&self) -> ElementKind {
        ElementKind::Block
    }
}

impl Node for Paragraph {
    fn node_type(&self) -> NodeType {
        NodeType::Paragraph
    }
}

impl Render for Paragraph {
    fn render_to(&self, out: &mut String) {
        out.push_str(&self.render_children());
        out.push('\n');
    }
}

/// A large (`# `) or small (`## `) heading.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    large: bool,
    children: Vec<InlineNode>,
}

impl Heading {
    pub fn new(large: bool) -> Self {
        Self {
            large,
            children: Vec::new(),
        }
    }

    pub fn large() -> Self {
        Self::new(true)
    }

    pub fn small() -> Self {
        Self::new(false)
    }

    pub fn is_large(&self) -> bool {
        self.large
    }
}

impl ContainerNode for Heading {
    type Child = InlineNode;

    fn children(&self) -> &[InlineNode] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<InlineNode> {
        &mut self.children
    }
}

impl ChatElement for Heading {
    fn kind(&self) -> ElementKind {
        ElementKind::Block
    }
}

impl Node for Heading {
    fn node_type(&self) -> NodeType {
        if self.large {
            NodeType::HeadingLarge
        } else {
            NodeType::HeadingSmall
        }
    }
}

impl Render for Heading {
    fn render_to(&self, out: &mut String) {
        out.push_str(if self.large { "# " } else { "## " });
        out.push_str(&self.render_children());
        out.push('\n');
    }
}

/// A horizontal rule. Children are kept but never rendered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Divider {
    children: Vec<InlineNode>,
}

impl Divider {
    pub const MARKDOWN: &'static str = "---\n";

    pub fn new() -> Self {
        Self::default()
    }
}

impl ContainerNode for Divider {
    type Child = InlineNode;

    fn children(&self) -> &[InlineNode] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<InlineNode> {
        &mut self.children
    }
}

impl ChatElement for Divider {
    fn kind(&self) -> ElementKind {
        ElementKind::Block
    }
}

impl Node for Divider {
    fn node_type(&self) -> NodeType {
        NodeType::Divider
    }
}

impl Render for Divider {
    fn render_to(&self, out: &mut String) {
        out.push_str(Self::MARKDOWN);
    }
}

/// Text that is already Markdown; emitted verbatim with marks ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarkdownPlainText {
    children: Vec<Text>,
}

impl MarkdownPlainText {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContainerNode for MarkdownPlainText {
    type Child = Text;

    fn children(&self) -> &[Text] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Text> {
        &mut self.children
    }
}

impl ChatElement for MarkdownPlainText {
    fn kind(&self) -> ElementKind {
        ElementKind::Block
    }
}

impl Node for MarkdownPlainText {
    fn node_type(&self) -> NodeType {
        NodeType::MarkdownPlainText
    }
}

impl Render for MarkdownPlainText {
    fn render_to(&self, out: &mut String) {
        for text in &self.children {
            out.push_str(&text.raw());
        }
        out.push('\n');
    }
}
