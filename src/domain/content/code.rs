//! Fenced code blocks.

use super::container::{ChatElement, ContainerNode, Node, Render};
use crate::domain::value_objects::{ElementData, ElementKind, NodeType, Text};

/// Language sentinel meaning "no highlighting"; never written after the fence.
pub const UNFORMATTED: &str = "unformatted";

const FENCE: &str = "```";

/// A fenced code block made of code lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CodeContainer {
    language: Option<String>,
    children: Vec<CodeLine>,
}

impl CodeContainer {
    pub fn new(language: Option<String>) -> Self {
        Self {
            language,
            children: Vec::new(),
        }
    }

    pub fn with_language(language: impl Into<String>) -> Self {
        Self::new(Some(language.into()))
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Language written after the opening fence, if any.
    pub fn fence_language(&self) -> Option<&str> {
        self.language().filter(|lang| *lang != UNFORMATTED && !lang.is_empty())
    }
}

impl ContainerNode for CodeContainer {
    type Child = CodeLine;

    fn children(&self) -> &[CodeLine] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<CodeLine> {
        &mut self.children
    }
}

impl ChatElement for CodeContainer {
    fn kind(&self) -> ElementKind {
        ElementKind::Block
    }
}

impl Node for CodeContainer {
    fn node_type(&self) -> NodeType {
        NodeType::CodeContainer
    }

    fn data(&self) -> ElementData {
        ElementData {
            language: self.language.clone(),
            ..ElementData::default()
        }
    }
}

impl Render for CodeContainer {
    fn render_to(&self, out: &mut String) {
        out.push_str(FENCE);
        if let Some(language) = self.fence_language() {
            out.push_str(language);
        }
        out.push('\n');
        out.push_str(&self.render_children());
        out.push_str(FENCE);
        out.push('\n');
    }
}

/// One line of code. Holds plain text only; marks are not rendered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CodeLine {
    children: Vec<Text>,
}

impl CodeLine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<&str> for CodeLine {
    fn from(code: &str) -> Self {
        CodeLine::new().append(Text::plain(code))
    }
}

impl ContainerNode for CodeLine {
    type Child = Text;

    fn children(&self) -> &[Text] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Text> {
        &mut self.children
    }
}

impl ChatElement for CodeLine {
    fn kind(&self) -> ElementKind {
        ElementKind::Block
    }
}

impl Node for CodeLine {
    fn node_type(&self) -> NodeType {
        NodeType::CodeLine
    }
}

impl Render for CodeLine {
    fn render_to(&self, out: &mut String) {
        for text in &self.children {
            out.push_str(&text.raw());
        }
        out.push('\n');
    }
}
