//! Wire decoding for content nodes.
//!
//! Elements arrive as `{"object", "type", "data", "nodes"}` objects, with
//! text runs as `{"object": "text", "leaves": [...]}`. Where a node may
//! appear decides how its tag is interpreted:
//!
//! - block position: unknown tags become a paragraph over the element's
//!   children; inline tags are wrapped in a paragraph; structural tags
//!   (quote line, code line, list item) are wrapped in their container.
//! - inline position: text objects, unknown tags and block tags all become
//!   text flattened from every leaf underneath.
//! - list position: lists nest, anything else becomes a list item.
//!
//! A `link` is a content embed when its payload has a caption, otherwise a
//! hyperlink (see [`resolve_link_type`]).

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::code::{CodeContainer, CodeLine};
use super::container::ContainerNode;
use super::link::{resolve_link_type, ContentEmbed, Hyperlink};
use super::list::{ChatList, ListEntry, ListItem};
use super::media::{Image, Video};
use super::mention::{ChannelMention, MemberMention, Reaction};
use super::node::{BlockNode, InlineNode};
use super::placeholder::{ChatEmbed, Form, ReplyHeader};
use super::quote::{BlockQuote, QuoteLine};
use super::text::{Divider, Heading, MarkdownPlainText, Paragraph};
use crate::domain::decode::{decode_polymorphic, DecodeContext, Polymorphic};
use crate::domain::value_objects::{ElementData, Leaf, NodeType, RichEmbed, Text, UriRef};
use crate::shared::error::DecodeError;

const OBJECT_FIELD: &str = "object";
const DATA_FIELD: &str = "data";
const NODES_FIELD: &str = "nodes";
const LEAVES_FIELD: &str = "leaves";
const TEXT_OBJECT: &str = "text";

fn is_text_object(value: &Value) -> bool {
    value.get(OBJECT_FIELD).and_then(Value::as_str) == Some(TEXT_OBJECT)
}

/// The `data` object of one element, read one key at a time.
///
/// Keys the variant never asks for are not parsed, so a bad value there
/// cannot fail the decode.
struct Payload {
    variant: &'static str,
    fields: Map<String, Value>,
}

impl Payload {
    /// Take the `data` object. Absent or `null` data is empty.
    fn take(value: &mut Value, variant: &'static str) -> Result<Self, DecodeError> {
        let fields = match value.get_mut(DATA_FIELD).map(Value::take) {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(fields)) => fields,
            Some(other) => {
                serde_json::from_value(other).map_err(|e| DecodeError::malformed(variant, e))?
            }
        };
        Ok(Self { variant, fields })
    }

    /// Absent and `null` read as `None`.
    fn optional<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>, DecodeError> {
        match self.fields.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(field) => serde_json::from_value(field)
                .map(Some)
                .map_err(|e| DecodeError::malformed(self.variant, e)),
        }
    }

    fn require<T: DeserializeOwned>(&mut self, key: &'static str) -> Result<T, DecodeError> {
        self.optional(key)?
            .ok_or_else(|| DecodeError::missing(self.variant, key))
    }
}

/// Take the `nodes` array. Absent or `null` children are empty.
fn take_nodes(value: &mut Value, variant: &'static str) -> Result<Vec<Value>, DecodeError> {
    match value.get_mut(NODES_FIELD).map(Value::take) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(nodes) => serde_json::from_value(nodes).map_err(|e| DecodeError::malformed(variant, e)),
    }
}

/// Collect every leaf under `value`, in document order.
fn collect_leaves(
    value: &Value,
    out: &mut Vec<Leaf>,
    cx: &mut DecodeContext,
) -> Result<(), DecodeError> {
    if let Some(leaves) = value.get(LEAVES_FIELD).and_then(Value::as_array) {
        for leaf in leaves {
            let leaf: Leaf = serde_json::from_value(leaf.clone())
                .map_err(|e| DecodeError::malformed(TEXT_OBJECT, e))?;
            out.push(leaf);
        }
    }
    if let Some(nodes) = value.get(NODES_FIELD).and_then(Value::as_array) {
        for node in nodes {
            cx.nested(|cx| collect_leaves(node, out, cx))?;
        }
    }
    Ok(())
}

/// Flatten `value` into a single text run.
fn flatten_text(value: &Value, cx: &mut DecodeContext) -> Result<Text, DecodeError> {
    let mut leaves = Vec::new();
    collect_leaves(value, &mut leaves, cx)?;
    Ok(Text::new(leaves))
}

fn decode_inline_children(
    nodes: Vec<Value>,
    cx: &mut DecodeContext,
) -> Result<Vec<InlineNode>, DecodeError> {
    nodes
        .into_iter()
        .map(|node| decode_polymorphic::<InlineNode>(node, cx))
        .collect()
}

/// Inline children of `value`, or the value itself when it is a bare text run.
fn inline_content(
    mut value: Value,
    variant: &'static str,
    cx: &mut DecodeContext,
) -> Result<Vec<InlineNode>, DecodeError> {
    if is_text_object(&value) {
        return Ok(vec![InlineNode::Text(flatten_text(&value, cx)?)]);
    }
    let nodes = take_nodes(&mut value, variant)?;
    decode_inline_children(nodes, cx)
}

fn expect_object(value: &Value, variant: &'static str) -> Result<(), DecodeError> {
    if value.is_object() {
        Ok(())
    } else {
        Err(DecodeError::NotAnObject { variant })
    }
}

fn decode_quote_line(value: Value, cx: &mut DecodeContext) -> Result<QuoteLine, DecodeError> {
    let variant = NodeType::BlockQuoteLine.as_tag();
    expect_object(&value, variant)?;
    cx.nested(|cx| Ok(QuoteLine::new().append_all(inline_content(value, variant, cx)?)))
}

fn decode_code_line(value: Value, cx: &mut DecodeContext) -> Result<CodeLine, DecodeError> {
    expect_object(&value, NodeType::CodeLine.as_tag())?;
    cx.nested(|cx| Ok(CodeLine::new().append(flatten_text(&value, cx)?)))
}

fn decode_list_item(value: Value, cx: &mut DecodeContext) -> Result<ListItem, DecodeError> {
    let children = inline_content(value, NodeType::ListItem.as_tag(), cx)?;
    Ok(ListItem::new().append_all(children))
}

fn decode_list(
    ordered: bool,
    mut value: Value,
    cx: &mut DecodeContext,
) -> Result<ChatList, DecodeError> {
    let variant = if ordered {
        NodeType::OrderedList.as_tag()
    } else {
        NodeType::UnorderedList.as_tag()
    };
    let entries = take_nodes(&mut value, variant)?
        .into_iter()
        .map(|node| decode_polymorphic::<ListEntry>(node, cx))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ChatList::new(ordered).append_all(entries))
}

/// Decode the top-level `nodes` of a document-like value as blocks.
pub(crate) fn decode_blocks(
    mut value: Value,
    variant: &'static str,
    cx: &mut DecodeContext,
) -> Result<Vec<BlockNode>, DecodeError> {
    take_nodes(&mut value, variant)?
        .into_iter()
        .map(|node| decode_polymorphic::<BlockNode>(node, cx))
        .collect()
}

fn decode_link_inline(mut value: Value, cx: &mut DecodeContext) -> Result<Hyperlink, DecodeError> {
    let variant = NodeType::Hyperlink.as_tag();
    let href: UriRef = Payload::take(&mut value, variant)?.require("href")?;
    let children = decode_inline_children(take_nodes(&mut value, variant)?, cx)?;
    Ok(Hyperlink::new(href).append_all(children))
}

impl Polymorphic for InlineNode {
    type Tag = NodeType;
    const CATALOG: &'static str = "inline";

    fn decode_as(tag: NodeType, mut value: Value, cx: &mut DecodeContext) -> Result<Self, DecodeError> {
        let variant = tag.as_tag();
        let node = match tag {
            NodeType::Hyperlink | NodeType::ContentEmbed => {
                InlineNode::Hyperlink(decode_link_inline(value, cx)?)
            }
            NodeType::MemberMention => {
                let mention = Payload::take(&mut value, variant)?.require("mention")?;
                InlineNode::MemberMention(MemberMention::new(mention, flatten_text(&value, cx)?))
            }
            NodeType::ChannelMention => {
                let channel = Payload::take(&mut value, variant)?.require("channel")?;
                InlineNode::ChannelMention(ChannelMention::new(channel, flatten_text(&value, cx)?))
            }
            NodeType::Reaction => {
                let reaction = Payload::take(&mut value, variant)?.require("reaction")?;
                InlineNode::Reaction(Reaction::new(reaction, flatten_text(&value, cx)?))
            }
            _ => {
                tracing::trace!(node_type = variant, "Block node in inline position, flattening");
                InlineNode::Text(flatten_text(&value, cx)?)
            }
        };
        Ok(node)
    }

    fn decode_fallback(value: Value, cx: &mut DecodeContext) -> Result<Self, DecodeError> {
        Ok(InlineNode::Text(flatten_text(&value, cx)?))
    }

    fn fallback_name() -> &'static str {
        "text"
    }
}

impl Polymorphic for ListEntry {
    type Tag = NodeType;
    const CATALOG: &'static str = "list-entry";

    fn decode_as(tag: NodeType, value: Value, cx: &mut DecodeContext) -> Result<Self, DecodeError> {
        match tag {
            NodeType::OrderedList => Ok(ListEntry::List(decode_list(true, value, cx)?)),
            NodeType::UnorderedList => Ok(ListEntry::List(decode_list(false, value, cx)?)),
            _ => Ok(ListEntry::Item(decode_list_item(value, cx)?)),
        }
    }

    fn decode_fallback(value: Value, cx: &mut DecodeContext) -> Result<Self, DecodeError> {
        Ok(ListEntry::Item(decode_list_item(value, cx)?))
    }

    fn fallback_name() -> &'static str {
        "list-item"
    }
}

impl Polymorphic for BlockNode {
    type Tag = NodeType;
    const CATALOG: &'static str = "block";

    fn decode_as(tag: NodeType, mut value: Value, cx: &mut DecodeContext) -> Result<Self, DecodeError> {
        let variant = tag.as_tag();
        let block: BlockNode = match tag {
            NodeType::Paragraph => {
                Paragraph::new().append_all(inline_content(value, variant, cx)?).into()
            }
            NodeType::HeadingLarge | NodeType::HeadingSmall => {
                let large = tag == NodeType::HeadingLarge;
                Heading::new(large).append_all(inline_content(value, variant, cx)?).into()
            }
            NodeType::Divider => Divider::new().append_all(inline_content(value, variant, cx)?).into(),
            NodeType::BlockQuoteContainer => {
                let lines = take_nodes(&mut value, variant)?
                    .into_iter()
                    .map(|node| decode_quote_line(node, cx))
                    .collect::<Result<Vec<_>, _>>()?;
                BlockQuote::new().append_all(lines).into()
            }
            NodeType::BlockQuoteLine => BlockQuote::new().append(decode_quote_line(value, cx)?).into(),
            NodeType::CodeContainer => {
                let language = Payload::take(&mut value, variant)?.optional("language")?;
                let lines = take_nodes(&mut value, variant)?
                    .into_iter()
                    .map(|node| decode_code_line(node, cx))
                    .collect::<Result<Vec<_>, _>>()?;
                CodeContainer::new(language).append_all(lines).into()
            }
            NodeType::CodeLine => CodeContainer::new(None).append(decode_code_line(value, cx)?).into(),
            NodeType::OrderedList => decode_list(true, value, cx)?.into(),
            NodeType::UnorderedList => decode_list(false, value, cx)?.into(),
            NodeType::ListItem => ChatList::unordered().append(decode_list_item(value, cx)?).into(),
            NodeType::MarkdownPlainText => {
                let runs = take_nodes(&mut value, variant)?
                    .iter()
                    .map(|run| flatten_text(run, cx))
                    .collect::<Result<Vec<_>, _>>()?;
                MarkdownPlainText::new().append_all(runs).into()
            }
            NodeType::Image => {
                let src: UriRef = Payload::take(&mut value, variant)?.require("src")?;
                let caption = decode_inline_children(take_nodes(&mut value, variant)?, cx)?;
                Image::new(src).append_all(caption).into()
            }
            NodeType::Video => {
                let src: UriRef = Payload::take(&mut value, variant)?.require("src")?;
                let caption = decode_inline_children(take_nodes(&mut value, variant)?, cx)?;
                Video::new(src).append_all(caption).into()
            }
            NodeType::Hyperlink | NodeType::ContentEmbed => {
                let mut payload = Payload::take(&mut value, variant)?;
                let href: UriRef = payload.require("href")?;
                let data = ElementData {
                    caption: payload.optional("caption")?,
                    ..ElementData::default()
                };
                let children = decode_inline_children(take_nodes(&mut value, variant)?, cx)?;
                match (resolve_link_type(&data), data.caption) {
                    (NodeType::ContentEmbed, Some(caption)) => {
                        ContentEmbed::new(href, caption).append_all(children).into()
                    }
                    _ => Paragraph::new()
                        .append(Hyperlink::new(href).append_all(children))
                        .into(),
                }
            }
            NodeType::ChatEmbed => {
                let embeds: Vec<RichEmbed> = Payload::take(&mut value, variant)?.require("embeds")?;
                ChatEmbed::new().append_all(embeds).into()
            }
            NodeType::MemberMention | NodeType::ChannelMention | NodeType::Reaction => {
                let inline = InlineNode::decode_as(tag, value, cx)?;
                Paragraph::new().append(inline).into()
            }
            NodeType::Form => {
                let form_id = Payload::take(&mut value, variant)?.require("formId")?;
                Form::new(form_id).into()
            }
            NodeType::ReplyHeader => {
                let mut payload = Payload::take(&mut value, variant)?;
                let post_id = payload.require("postId")?;
                let author_id: String = payload.require("authorId")?;
                ReplyHeader::new(post_id, author_id).into()
            }
        };
        Ok(block)
    }

    fn decode_fallback(value: Value, cx: &mut DecodeContext) -> Result<Self, DecodeError> {
        let children = inline_content(value, NodeType::Paragraph.as_tag(), cx)?;
        Ok(Paragraph::new().append_all(children).into())
    }

    fn fallback_name() -> &'static str {
        "paragraph"
    }
}
