//! Ordered and unordered lists.
//!
//! A list holds [`ListEntry`] values: items, or nested lists. Items are
//! numbered per sibling starting at 1; nested lists do not consume a number.
//! A nested list renders one indent unit (four spaces) deeper than its
//! parent, and the indent compounds with depth.

use super::container::{prefix_lines, ChatElement, ContainerNode, Node, Render};
use super::node::InlineNode;
use crate::domain::value_objects::{ElementKind, NodeType, Text};

const NESTED_INDENT: &str = "    ";
const ITEM_CONTINUATION: &str = "\n  ";

/// An ordered (`1. `) or unordered (`- `) list.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatList {
    ordered: bool,
    children: Vec<ListEntry>,
}

impl ChatList {
    pub fn new(ordered: bool) -> Self {
        Self {
            ordered,
            children: Vec::new(),
        }
    }

    pub fn ordered() -> Self {
        Self::new(true)
    }

    pub fn unordered() -> Self {
        Self::new(false)
    }

    pub fn is_ordered(&self) -> bool {
        self.ordered
    }

    /// Items directly in this list, skipping nested lists.
    pub fn items(&self) -> impl Iterator<Item = &ListItem> {
        self.children.iter().filter_map(|entry| match entry {
            ListEntry::Item(item) => Some(item),
            ListEntry::List(_) => None,
        })
    }
}

impl ContainerNode for ChatList {
    type Child = ListEntry;

    fn children(&self) -> &[ListEntry] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<ListEntry> {
        &mut self.children
    }
}

impl ChatElement for ChatList {
    fn kind(&self) -> ElementKind {
        ElementKind::Block
    }
}

impl Node for ChatList {
    fn node_type(&self) -> NodeType {
        if self.ordered {
            NodeType::OrderedList
        } else {
            NodeType::UnorderedList
        }
    }
}

impl Render for ChatList {
    fn render_to(&self, out: &mut String) {
        let mut number = 0;
        for entry in &self.children {
            match entry {
                ListEntry::Item(item) => {
                    number += 1;
                    if self.ordered {
                        out.push_str(&format!("{}. ", number));
                    } else {
                        out.push_str("- ");
                    }
                    item.render_to(out);
                }
                ListEntry::List(list) => prefix_lines(&list.render(), NESTED_INDENT, out),
            }
        }
    }
}

/// A single list item.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListItem {
    children: Vec<InlineNode>,
}

impl ListItem {
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<&str> for ListItem {
    fn from(text: &str) -> Self {
        ListItem::new().append(Text::plain(text))
    }
}

impl ContainerNode for ListItem {
    type Child = InlineNode;

    fn children(&self) -> &[InlineNode] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<InlineNode> {
        &mut self.children
    }
}

impl ChatElement for ListItem {
    fn kind(&self) -> ElementKind {
        ElementKind::Block
    }
}

impl Node for ListItem {
    fn node_type(&self) -> NodeType {
        NodeType::ListItem
    }
}

impl Render for ListItem {
    fn render_to(&self, out: &mut String) {
        let body = self.render_children();
        let body = body.strip_suffix('\n').unwrap_or(&body);
        out.push_str(&body.replace('\n', ITEM_CONTINUATION));
        out.push('\n');
    }
}

/// What a list may contain.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEntry {
    Item(ListItem),
    List(ChatList),
}

impl From<ListItem> for ListEntry {
    fn from(item: ListItem) -> Self {
        ListEntry::Item(item)
    }
}

impl From<ChatList> for ListEntry {
    fn from(list: ChatList) -> Self {
        ListEntry::List(list)
    }
}

impl From<&str> for ListEntry {
    fn from(text: &str) -> Self {
        ListEntry::Item(ListItem::from(text))
    }
}

impl ChatElement for ListEntry {
    fn kind(&self) -> ElementKind {
        ElementKind::Block
    }
}

impl Render for ListEntry {
    fn render_to(&self, out: &mut String) {
        match self {
            ListEntry::Item(item) => item.render_to(out),
            ListEntry::List(list) => list.render_to(out),
        }
    }
}
