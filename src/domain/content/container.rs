//! Core content traits.
//!
//! Every element renders to Markdown ([`Render`]) and knows whether it is a
//! block or inline element ([`ChatElement`]). Typed nodes add a discriminator
//! and payload ([`Node`]); nodes with children add the fluent mutation
//! contract ([`ContainerNode`]).
//!
//! `ContainerNode` methods take and return `Self`, so building a tree reads
//! as a chain and always yields the concrete node type:
//!
//! ```rust,ignore
//! let quote = BlockQuote::new()
//!     .append(QuoteLine::from("a"))
//!     .append(QuoteLine::from("b"));
//! ```

use crate::domain::value_objects::{ElementData, ElementKind, NodeType, Text};
use crate::shared::error::ContentError;

/// Markdown rendering. Total: every element renders to some string.
pub trait Render {
    /// Append this element's Markdown to `out`.
    fn render_to(&self, out: &mut String);

    fn render(&self) -> String {
        let mut out = String::new();
        self.render_to(&mut out);
        out
    }
}

/// An element of a content tree.
pub trait ChatElement {
    fn kind(&self) -> ElementKind;
}

/// An element carrying a node type and payload.
pub trait Node: ChatElement + Render {
    fn node_type(&self) -> NodeType;

    /// Payload as it would appear on the wire. Only the fields meaningful
    /// for this node type are set.
    fn data(&self) -> ElementData {
        ElementData::default()
    }
}

/// A node owning an ordered list of typed children.
///
/// The child type is the containment rule: a block quote can only ever hold
/// quote lines, a code container only code lines, and so on.
pub trait ContainerNode: Sized {
    type Child;

    fn children(&self) -> &[Self::Child];

    fn children_mut(&mut self) -> &mut Vec<Self::Child>;

    fn len(&self) -> usize {
        self.children().len()
    }

    fn is_empty(&self) -> bool {
        self.children().is_empty()
    }

    fn append(mut self, child: impl Into<Self::Child>) -> Self {
        self.children_mut().push(child.into());
        self
    }

    fn append_all<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self::Child>,
    {
        self.children_mut()
            .extend(children.into_iter().map(Into::into));
        self
    }

    fn remove_at(mut self, index: usize) -> Result<Self, ContentError> {
        let len = self.len();
        if index >= len {
            return Err(ContentError::IndexOutOfRange { index, len });
        }
        self.children_mut().remove(index);
        Ok(self)
    }

    /// Remove children in `start..end`.
    fn remove_range(mut self, start: usize, end: usize) -> Result<Self, ContentError> {
        let len = self.len();
        if start > end || end > len {
            return Err(ContentError::InvalidRange { start, end, len });
        }
        self.children_mut().drain(start..end);
        Ok(self)
    }

    /// Concatenated rendering of all children, in order.
    fn render_children(&self) -> String
    where
        Self::Child: Render,
    {
        let mut out = String::new();
        for child in self.children() {
            child.render_to(&mut out);
        }
        out
    }
}

impl Render for Text {
    fn render_to(&self, out: &mut String) {
        out.push_str(&Text::render(self));
    }
}

impl ChatElement for Text {
    fn kind(&self) -> ElementKind {
        ElementKind::Inline
    }
}

/// Prefix every line of `body` with `prefix`, keeping one trailing newline
/// per line. Empty lines get the full prefix too.
pub(crate) fn prefix_lines(body: &str, prefix: &str, out: &mut String) {
    for line in body.lines() {
        out.push_str(prefix);
        out.push_str(line);
        out.push('\n');
    }
}
