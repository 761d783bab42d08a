//! Block quotes.

use super::container::{prefix_lines, ChatElement, ContainerNode, Node, Render};
use super::node::InlineNode;
use crate::domain::value_objects::{ElementKind, NodeType, Text};

const QUOTE_PREFIX: &str = "> ";

/// A quoted block made of quote lines.
///
/// Every rendered line is prefixed with `> `, including lines produced by
/// newlines embedded inside a quote line's text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockQuote {
    children: Vec<QuoteLine>,
}

impl BlockQuote {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContainerNode for BlockQuote {
    type Child = QuoteLine;

    fn children(&self) -> &[QuoteLine] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<QuoteLine> {
        &mut self.children
    }
}

impl ChatElement for BlockQuote {
    fn kind(&self) -> ElementKind {
        ElementKind::Block
    }
}

impl Node for BlockQuote {
    fn node_type(&self) -> NodeType {
        NodeType::BlockQuoteContainer
    }
}

impl Render for BlockQuote {
    fn render_to(&self, out: &mut String) {
        prefix_lines(&self.render_children(), QUOTE_PREFIX, out);
    }
}

/// One line of a block quote.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuoteLine {
    children: Vec<InlineNode>,
}

impl QuoteLine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<&str> for QuoteLine {
    fn from(text: &str) -> Self {
        QuoteLine::new().append(Text::plain(text))
    }
}

impl ContainerNode for QuoteLine {
    type Child = InlineNode;

    fn children(&self) -> &[InlineNode] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<InlineNode> {
        &mut self.children
    }
}

impl ChatElement for QuoteLine {
    fn kind(&self) -> ElementKind {
        ElementKind::Block
    }
}

impl Node for QuoteLine {
    fn node_type(&self) -> NodeType {
        NodeType::BlockQuoteLine
    }
}

impl Render for QuoteLine {
    fn render_to(&self, out: &mut String) {
        out.push_str(&self.render_children());
        out.push('\n');
    }
}
