//! Links.
//!
//! Both node kinds here share the wire tag `link`. A link whose payload has
//! a `caption` is a [`ContentEmbed`] (block); any other link is a
//! [`Hyperlink`] (inline).

use super::container::{ChatElement, ContainerNode, Node, Render};
use super::node::InlineNode;
use crate::domain::value_objects::{ElementData, ElementKind, NodeType, UriRef};

/// Select the concrete link type from a decoded payload.
pub fn resolve_link_type(data: &ElementData) -> NodeType {
    if data.caption.is_some() {
        NodeType::ContentEmbed
    } else {
        NodeType::Hyperlink
    }
}

/// An inline link, rendered as `[text](href)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperlink {
    href: UriRef,
    children: Vec<InlineNode>,
}

impl Hyperlink {
    pub fn new(href: impl Into<UriRef>) -> Self {
        Self {
            href: href.into(),
            children: Vec::new(),
        }
    }

    pub fn href(&self) -> &UriRef {
        &self.href
    }
}

impl ContainerNode for Hyperlink {
    type Child = InlineNode;

    fn children(&self) -> &[InlineNode] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<InlineNode> {
        &mut self.children
    }
}

impl ChatElement for Hyperlink {
    fn kind(&self) -> ElementKind {
        ElementKind::Inline
    }
}

impl Node for Hyperlink {
    fn node_type(&self) -> NodeType {
        NodeType::Hyperlink
    }

    fn data(&self) -> ElementData {
        ElementData {
            href: Some(self.href.clone()),
            ..ElementData::default()
        }
    }
}

impl Render for Hyperlink {
    fn render_to(&self, out: &mut String) {
        render_link(&self.render_children(), &self.href, out);
    }
}

/// A block-level link preview with a caption.
///
/// Renders as `[text](href)` on its own line; when there are no children the
/// caption stands in for the link text.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentEmbed {
    href: UriRef,
    caption: String,
    children: Vec<InlineNode>,
}

impl ContentEmbed {
    pub fn new(href: impl Into<UriRef>, caption: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            caption: caption.into(),
            children: Vec::new(),
        }
    }

    pub fn href(&self) -> &UriRef {
        &self.href
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }
}

impl ContainerNode for ContentEmbed {
    type Child = InlineNode;

    fn children(&self) -> &[InlineNode] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<InlineNode> {
        &mut self.children
    }
}

impl ChatElement for ContentEmbed {
    fn kind(&self) -> ElementKind {
        ElementKind::Block
    }
}

impl Node for ContentEmbed {
    fn node_type(&self) -> NodeType {
        NodeType::ContentEmbed
    }

    fn data(&self) -> ElementData {
        ElementData {
            href: Some(self.href.clone()),
            caption: Some(self.caption.clone()),
            ..ElementData::default()
        }
    }
}

impl Render for ContentEmbed {
    fn render_to(&self, out: &mut String) {
        let text = self.render_children();
        let text = if text.is_empty() { self.caption.as_str() } else { text.as_str() };
        render_link(text, &self.href, out);
        out.push('\n');
    }
}

fn render_link(text: &str, href: &UriRef, out: &mut String) {
    out.push('[');
    out.push_str(text);
    out.push_str("](");
    out.push_str(href.as_str());
    out.push(')');
}
