//! Document roots.

use std::collections::BTreeSet;

use serde_json::Value;
use uuid::Uuid;

use super::container::{ContainerNode, Render};
use super::decode::decode_blocks;
use super::node::{BlockNode, InlineNode};
use crate::domain::decode::DecodeContext;
use crate::domain::mentions::{Mentions, MentionsPayload};
use crate::domain::value_objects::MentionTarget;
use crate::shared::error::DecodeError;

const DOCUMENT_VARIANT: &str = "document";
const MESSAGE_VARIANT: &str = "message";

/// The root of a content tree. Exclusively owns its blocks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    nodes: Vec<BlockNode>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a `{"object": "document", "nodes": [...]}` value.
    pub fn decode_with(value: Value, cx: &mut DecodeContext) -> Result<Self, DecodeError> {
        if !value.is_object() {
            return Err(DecodeError::NotAnObject {
                variant: DOCUMENT_VARIANT,
            });
        }
        let nodes = decode_blocks(value, DOCUMENT_VARIANT, cx)?;
        tracing::trace!(blocks = nodes.len(), fallbacks = cx.fallbacks(), "Decoded document");
        Ok(Self { nodes })
    }

    /// Decode with default settings.
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        Self::decode_with(value, &mut DecodeContext::default())
    }

    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Collect the mentions referenced by nodes in this tree.
    ///
    /// Mentions without a usable stable id still set the group flags but
    /// contribute no id.
    pub fn mentions(&self) -> Mentions {
        let mut everyone = false;
        let mut here = false;
        let mut users: BTreeSet<String> = BTreeSet::new();
        let mut roles: BTreeSet<u32> = BTreeSet::new();
        let mut channels: BTreeSet<Uuid> = BTreeSet::new();

        for block in &self.nodes {
            block.for_each_inline(&mut |node| match node {
                InlineNode::MemberMention(mention) => {
                    let mention = mention.mention();
                    match mention.target {
                        MentionTarget::Everyone => everyone = true,
                        MentionTarget::Here => here = true,
                        MentionTarget::User => {
                            if let Some(id) = &mention.id {
                                users.insert(id.to_string());
                            }
                        }
                        MentionTarget::Role => {
                            if let Some(id) = mention.id.as_ref().and_then(|id| id.as_number()) {
                                if let Ok(id) = u32::try_from(id) {
                                    roles.insert(id);
                                }
                            }
                        }
                        MentionTarget::Channel => {
                            if let Some(id) = mention
                                .id
                                .as_ref()
                                .and_then(|id| id.to_string().parse().ok())
                            {
                                channels.insert(id);
                            }
                        }
                    }
                }
                InlineNode::ChannelMention(mention) => {
                    channels.insert(mention.channel().id);
                }
                _ => {}
            });
        }

        Mentions::from_parts(everyone, here, users, roles, channels)
    }
}

impl ContainerNode for Document {
    type Child = BlockNode;

    fn children(&self) -> &[BlockNode] {
        &self.nodes
    }

    fn children_mut(&mut self) -> &mut Vec<BlockNode> {
        &mut self.nodes
    }
}

impl Render for Document {
    fn render_to(&self, out: &mut String) {
        for node in &self.nodes {
            node.render_to(out);
        }
    }
}

/// Message content as delivered: a document plus the optional mention
/// aggregate the server computed for it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessageBody {
    document: Document,
    mentions: Option<Mentions>,
}

impl MessageBody {
    pub fn new(document: Document, mentions: Option<Mentions>) -> Self {
        Self { document, mentions }
    }

    /// Decode a `{"document": {...}, "mentions": {...}}` value.
    pub fn decode_with(mut value: Value, cx: &mut DecodeContext) -> Result<Self, DecodeError> {
        if !value.is_object() {
            return Err(DecodeError::NotAnObject {
                variant: MESSAGE_VARIANT,
            });
        }

        let document = match value.get_mut("document").map(Value::take) {
            None | Some(Value::Null) => {
                return Err(DecodeError::missing(MESSAGE_VARIANT, "document"))
            }
            Some(document) => Document::decode_with(document, cx)?,
        };

        let payload = match value.get_mut("mentions").map(Value::take) {
            None | Some(Value::Null) => None,
            Some(mentions) => Some(
                serde_json::from_value::<MentionsPayload>(mentions)
                    .map_err(|e| DecodeError::malformed("mentions", e))?,
            ),
        };

        Ok(Self {
            document,
            mentions: Mentions::parse(payload.as_ref()),
        })
    }

    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        Self::decode_with(value, &mut DecodeContext::default())
    }

    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn mentions(&self) -> Option<&Mentions> {
        self.mentions.as_ref()
    }

    pub fn into_parts(self) -> (Document, Option<Mentions>) {
        (self.document, self.mentions)
    }
}

impl Render for MessageBody {
    fn render_to(&self, out: &mut String) {
        self.document.render_to(out);
    }
}
