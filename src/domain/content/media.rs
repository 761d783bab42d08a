//! Images and videos. Children are the caption.

use super::container::{ChatElement, ContainerNode, Node, Render};
use super::node::InlineNode;
use crate::domain::value_objects::{ElementData, ElementKind, NodeType, UriRef};

/// An embedded image, rendered as `![caption](src)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    src: UriRef,
    children: Vec<InlineNode>,
}

impl Image {
    pub fn new(src: impl Into<UriRef>) -> Self {
        Self {
            src: src.into(),
            children: Vec::new(),
        }
    }

    pub fn src(&self) -> &UriRef {
        &self.src
    }
}

impl ContainerNode for Image {
    type Child = InlineNode;

    fn children(&self) -> &[InlineNode] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<InlineNode> {
        &mut self.children
    }
}

impl ChatElement for Image {
    fn kind(&self) -> ElementKind {
        ElementKind::Block
    }
}

impl Node for Image {
    fn node_type(&self) -> NodeType {
        NodeType::Image
    }

    fn data(&self) -> ElementData {
        ElementData {
            src: Some(self.src.clone()),
            ..ElementData::default()
        }
    }
}

impl Render for Image {
    fn render_to(&self, out: &mut String) {
        render_media(&self.render_children(), &self.src, out);
    }
}

/// An embedded video. Renders like an image; Markdown has no video syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    src: UriRef,
    children: Vec<InlineNode>,
}

impl Video {
    pub fn new(src: impl Into<UriRef>) -> Self {
        Self {
            src: src.into(),
            children: Vec::new(),
        }
    }

    pub fn src(&self) -> &UriRef {
        &self.src
    }
}

impl ContainerNode for Video {
    type Child = InlineNode;

    fn children(&self) -> &[InlineNode] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<InlineNode> {
        &mut self.children
    }
}

impl ChatElement for Video {
    fn kind(&self) -> ElementKind {
        ElementKind::Block
    }
}

impl Node for Video {
    fn node_type(&self) -> NodeType {
        NodeType::Video
    }

    fn data(&self) -> ElementData {
        ElementData {
            src: Some(self.src.clone()),
            ..ElementData::default()
        }
    }
}

impl Render for Video {
    fn render_to(&self, out: &mut String) {
        render_media(&self.render_children(), &self.src, out);
    }
}

fn render_media(caption: &str, src: &UriRef, out: &mut String) {
    out.push_str("![");
    out.push_str(caption);
    out.push_str("](");
    out.push_str(src.as_str());
    out.push_str(")\n");
}
