//! Closed sum types over the concrete node variants.
//!
//! [`BlockNode`] is anything that may sit at the top level of a document;
//! [`InlineNode`] is anything that may flow inside a paragraph-like block.
//! Both dispatch `Render`, `ChatElement` and `Node` to the wrapped variant.

use super::code::CodeContainer;
use super::container::{ChatElement, ContainerNode, Node, Render};
use super::link::{ContentEmbed, Hyperlink};
use super::list::{ChatList, ListEntry};
use super::media::{Image, Video};
use super::mention::{ChannelMention, MemberMention, Reaction};
use super::placeholder::{ChatEmbed, Form, ReplyHeader};
use super::quote::BlockQuote;
use super::text::{Divider, Heading, MarkdownPlainText, Paragraph};
use crate::domain::value_objects::{ElementData, ElementKind, NodeType, Text};

/// A top-level block of a document.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockNode {
    Paragraph(Paragraph),
    Heading(Heading),
    Divider(Divider),
    BlockQuote(BlockQuote),
    Code(CodeContainer),
    List(ChatList),
    MarkdownPlainText(MarkdownPlainText),
    Image(Image),
    Video(Video),
    ContentEmbed(ContentEmbed),
    ChatEmbed(ChatEmbed),
    Form(Form),
    ReplyHeader(ReplyHeader),
}

impl BlockNode {
    fn as_node(&self) -> &dyn Node {
        match self {
            BlockNode::Paragraph(node) => node,
            BlockNode::Heading(node) => node,
            BlockNode::Divider(node) => node,
            BlockNode::BlockQuote(node) => node,
            BlockNode::Code(node) => node,
            BlockNode::List(node) => node,
            BlockNode::MarkdownPlainText(node) => node,
            BlockNode::Image(node) => node,
            BlockNode::Video(node) => node,
            BlockNode::ContentEmbed(node) => node,
            BlockNode::ChatEmbed(node) => node,
            BlockNode::Form(node) => node,
            BlockNode::ReplyHeader(node) => node,
        }
    }

    /// Visit every inline node in this block, depth first, in render order.
    pub fn for_each_inline(&self, f: &mut dyn FnMut(&InlineNode)) {
        match self {
            BlockNode::Paragraph(node) => visit_all(node.children(), f),
            BlockNode::Heading(node) => visit_all(node.children(), f),
            BlockNode::Divider(node) => visit_all(node.children(), f),
            BlockNode::BlockQuote(node) => {
                for line in node.children() {
                    visit_all(line.children(), f);
                }
            }
            BlockNode::List(node) => visit_list(node, f),
            BlockNode::Image(node) => visit_all(node.children(), f),
            BlockNode::Video(node) => visit_all(node.children(), f),
            BlockNode::ContentEmbed(node) => visit_all(node.children(), f),
            BlockNode::Code(_)
            | BlockNode::MarkdownPlainText(_)
            | BlockNode::ChatEmbed(_)
            | BlockNode::Form(_)
            | BlockNode::ReplyHeader(_) => {}
        }
    }
}

fn visit_all(nodes: &[InlineNode], f: &mut dyn FnMut(&InlineNode)) {
    for node in nodes {
        node.visit(f);
    }
}

fn visit_list(list: &ChatList, f: &mut dyn FnMut(&InlineNode)) {
    for entry in list.children() {
        match entry {
            ListEntry::Item(item) => visit_all(item.children(), f),
            ListEntry::List(nested) => visit_list(nested, f),
        }
    }
}

impl ChatElement for BlockNode {
    fn kind(&self) -> ElementKind {
        self.as_node().kind()
    }
}

impl Node for BlockNode {
    fn node_type(&self) -> NodeType {
        self.as_node().node_type()
    }

    fn data(&self) -> ElementData {
        self.as_node().data()
    }
}

impl Render for BlockNode {
    fn render_to(&self, out: &mut String) {
        self.as_node().render_to(out)
    }
}

/// Content that flows inside a block.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineNode {
    Text(Text),
    Hyperlink(Hyperlink),
    MemberMention(MemberMention),
    ChannelMention(ChannelMention),
    Reaction(Reaction),
}

impl InlineNode {
    /// Node type, or `None` for plain text.
    pub fn node_type(&self) -> Option<NodeType> {
        match self {
            InlineNode::Text(_) => None,
            InlineNode::Hyperlink(node) => Some(node.node_type()),
            InlineNode::MemberMention(node) => Some(node.node_type()),
            InlineNode::ChannelMention(node) => Some(node.node_type()),
            InlineNode::Reaction(node) => Some(node.node_type()),
        }
    }

    /// Payload, empty for plain text.
    pub fn data(&self) -> ElementData {
        match self {
            InlineNode::Text(_) => ElementData::default(),
            InlineNode::Hyperlink(node) => node.data(),
            InlineNode::MemberMention(node) => node.data(),
            InlineNode::ChannelMention(node) => node.data(),
            InlineNode::Reaction(node) => node.data(),
        }
    }

    fn visit(&self, f: &mut dyn FnMut(&InlineNode)) {
        f(self);
        if let InlineNode::Hyperlink(link) = self {
            visit_all(link.children(), f);
        }
    }
}

impl ChatElement for InlineNode {
    fn kind(&self) -> ElementKind {
        ElementKind::Inline
    }
}

impl Render for InlineNode {
    fn render_to(&self, out: &mut String) {
        match self {
            InlineNode::Text(node) => node.render_to(out),
            InlineNode::Hyperlink(node) => node.render_to(out),
            InlineNode::MemberMention(node) => node.render_to(out),
            InlineNode::ChannelMention(node) => node.render_to(out),
            InlineNode::Reaction(node) => node.render_to(out),
        }
    }
}

impl From<Text> for InlineNode {
    fn from(text: Text) -> Self {
        InlineNode::Text(text)
    }
}

impl From<&str> for InlineNode {
    fn from(text: &str) -> Self {
        InlineNode::Text(Text::plain(text))
    }
}

impl From<Hyperlink> for InlineNode {
    fn from(node: Hyperlink) -> Self {
        InlineNode::Hyperlink(node)
    }
}

impl From<MemberMention> for InlineNode {
    fn from(node: MemberMention) -> Self {
        InlineNode::MemberMention(node)
    }
}

impl From<ChannelMention> for InlineNode {
    fn from(node: ChannelMention) -> Self {
        InlineNode::ChannelMention(node)
    }
}

impl From<Reaction> for InlineNode {
    fn from(node: Reaction) -> Self {
        InlineNode::Reaction(node)
    }
}

impl From<Paragraph> for BlockNode {
    fn from(node: Paragraph) -> Self {
        BlockNode::Paragraph(node)
    }
}

impl From<Heading> for BlockNode {
    fn from(node: Heading) -> Self {
        BlockNode::Heading(node)
    }
}

impl From<Divider> for BlockNode {
    fn from(node: Divider) -> Self {
        BlockNode::Divider(node)
    }
}

impl From<BlockQuote> for BlockNode {
    fn from(node: BlockQuote) -> Self {
        BlockNode::BlockQuote(node)
    }
}

impl From<CodeContainer> for BlockNode {
    fn from(node: CodeContainer) -> Self {
        BlockNode::Code(node)
    }
}

impl From<ChatList> for BlockNode {
    fn from(node: ChatList) -> Self {
        BlockNode::List(node)
    }
}

impl From<MarkdownPlainText> for BlockNode {
    fn from(node: MarkdownPlainText) -> Self {
        BlockNode::MarkdownPlainText(node)
    }
}

impl From<Image> for BlockNode {
    fn from(node: Image) -> Self {
        BlockNode::Image(node)
    }
}

impl From<Video> for BlockNode {
    fn from(node: Video) -> Self {
        BlockNode::Video(node)
    }
}

impl From<ContentEmbed> for BlockNode {
    fn from(node: ContentEmbed) -> Self {
        BlockNode::ContentEmbed(node)
    }
}

impl From<ChatEmbed> for BlockNode {
    fn from(node: ChatEmbed) -> Self {
        BlockNode::ChatEmbed(node)
    }
}

impl From<Form> for BlockNode {
    fn from(node: Form) -> Self {
        BlockNode::Form(node)
    }
}

impl From<ReplyHeader> for BlockNode {
    fn from(node: ReplyHeader) -> Self {
        BlockNode::ReplyHeader(node)
    }
}
