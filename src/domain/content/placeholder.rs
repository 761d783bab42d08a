//! Opaque blocks with no Markdown form. Each renders a bracketed placeholder.

use super::container::{ChatElement, ContainerNode, Node, Render};
use crate::domain::value_objects::{ElementData, ElementKind, NodeType, RichEmbed};

/// A block of webhook-style rich embeds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatEmbed {
    children: Vec<RichEmbed>,
}

impl ChatEmbed {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContainerNode for ChatEmbed {
    type Child = RichEmbed;

    fn children(&self) -> &[RichEmbed] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<RichEmbed> {
        &mut self.children
    }
}

impl ChatElement for ChatEmbed {
    fn kind(&self) -> ElementKind {
        ElementKind::Block
    }
}

impl Node for ChatEmbed {
    fn node_type(&self) -> NodeType {
        NodeType::ChatEmbed
    }

    fn data(&self) -> ElementData {
        ElementData {
            embeds: Some(self.children.clone()),
            ..ElementData::default()
        }
    }
}

impl Render for ChatEmbed {
    fn render_to(&self, out: &mut String) {
        out.push_str(&format!("[embeds: {}]\n", self.children.len()));
    }
}

/// An interactive form, identified by its form id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Form {
    form_id: u64,
}

impl Form {
    pub fn new(form_id: u64) -> Self {
        Self { form_id }
    }

    pub fn form_id(&self) -> u64 {
        self.form_id
    }
}

impl ChatElement for Form {
    fn kind(&self) -> ElementKind {
        ElementKind::Block
    }
}

impl Node for Form {
    fn node_type(&self) -> NodeType {
        NodeType::Form
    }

    fn data(&self) -> ElementData {
        ElementData {
            form_id: Some(self.form_id),
            ..ElementData::default()
        }
    }
}

impl Render for Form {
    fn render_to(&self, out: &mut String) {
        out.push_str(&format!("[form: {}]\n", self.form_id));
    }
}

/// Header of a reply to a forum or document post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyHeader {
    post_id: u64,
    author_id: String,
}

impl ReplyHeader {
    pub fn new(post_id: u64, author_id: impl Into<String>) -> Self {
        Self {
            post_id,
            author_id: author_id.into(),
        }
    }

    pub fn post_id(&self) -> u64 {
        self.post_id
    }

    pub fn author_id(&self) -> &str {
        &self.author_id
    }
}

impl ChatElement for ReplyHeader {
    fn kind(&self) -> ElementKind {
        ElementKind::Block
    }
}

impl Node for ReplyHeader {
    fn node_type(&self) -> NodeType {
        NodeType::ReplyHeader
    }

    fn data(&self) -> ElementData {
        ElementData {
            post_id: Some(self.post_id),
            author_id: Some(self.author_id.clone()),
            ..ElementData::default()
        }
    }
}

impl Render for ReplyHeader {
    fn render_to(&self, out: &mut String) {
        out.push_str(&format!(
            "[reply: post {} by {}]\n",
            self.post_id, self.author_id
        ));
    }
}
