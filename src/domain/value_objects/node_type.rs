//! Node discriminators and element kinds.

use serde::{Deserialize, Serialize};

use crate::domain::decode::Discriminator;

/// Whether an element lays out as a block or flows inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Block,
    Inline,
}

impl ElementKind {
    /// Wire value of the `object` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Inline => "inline",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Node types carried in the wire `type` field.
///
/// `link` is shared by [`NodeType::Hyperlink`] and [`NodeType::ContentEmbed`];
/// the decoder picks between them from the payload (a caption selects the
/// embed). Every other tag maps to exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Paragraph,
    HeadingLarge,
    HeadingSmall,
    Divider,
    BlockQuoteContainer,
    BlockQuoteLine,
    CodeContainer,
    CodeLine,
    UnorderedList,
    OrderedList,
    ListItem,
    MarkdownPlainText,
    Image,
    Video,
    Hyperlink,
    ContentEmbed,
    ChatEmbed,
    MemberMention,
    ChannelMention,
    Reaction,
    Form,
    ReplyHeader,
}

impl NodeType {
    /// Every node type, in declaration order.
    pub const ALL: [NodeType; 22] = [
        Self::Paragraph,
        Self::HeadingLarge,
        Self::HeadingSmall,
        Self::Divider,
        Self::BlockQuoteContainer,
        Self::BlockQuoteLine,
        Self::CodeContainer,
        Self::CodeLine,
        Self::UnorderedList,
        Self::OrderedList,
        Self::ListItem,
        Self::MarkdownPlainText,
        Self::Image,
        Self::Video,
        Self::Hyperlink,
        Self::ContentEmbed,
        Self::ChatEmbed,
        Self::MemberMention,
        Self::ChannelMention,
        Self::Reaction,
        Self::Form,
        Self::ReplyHeader,
    ];

    /// Resolve a wire tag. `link` resolves to [`NodeType::Hyperlink`].
    pub fn from_tag(tag: &str) -> Option<Self> {
        let node_type = match tag {
            "paragraph" => Self::Paragraph,
            "heading-large" => Self::HeadingLarge,
            "heading-small" => Self::HeadingSmall,
            "divider" => Self::Divider,
            "block-quote-container" => Self::BlockQuoteContainer,
            "block-quote-line" => Self::BlockQuoteLine,
            "code-container" => Self::CodeContainer,
            "code-line" => Self::CodeLine,
            "unordered-list" => Self::UnorderedList,
            "ordered-list" => Self::OrderedList,
            "list-item" => Self::ListItem,
            "markdown-plain-text" => Self::MarkdownPlainText,
            "image" => Self::Image,
            "video" => Self::Video,
            "link" => Self::Hyperlink,
            "chat-embed" => Self::ChatEmbed,
            "mention" => Self::MemberMention,
            "channel" => Self::ChannelMention,
            "reaction" => Self::Reaction,
            "form" => Self::Form,
            "reply-header" => Self::ReplyHeader,
            _ => return None,
        };
        Some(node_type)
    }

    /// Wire tag for this node type.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::HeadingLarge => "heading-large",
            Self::HeadingSmall => "heading-small",
            Self::Divider => "divider",
            Self::BlockQuoteContainer => "block-quote-container",
            Self::BlockQuoteLine => "block-quote-line",
            Self::CodeContainer => "code-container",
            Self::CodeLine => "code-line",
            Self::UnorderedList => "unordered-list",
            Self::OrderedList => "ordered-list",
            Self::ListItem => "list-item",
            Self::MarkdownPlainText => "markdown-plain-text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Hyperlink | Self::ContentEmbed => "link",
            Self::ChatEmbed => "chat-embed",
            Self::MemberMention => "mention",
            Self::ChannelMention => "channel",
            Self::Reaction => "reaction",
            Self::Form => "form",
            Self::ReplyHeader => "reply-header",
        }
    }

    /// Layout kind of nodes of this type.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Hyperlink | Self::MemberMention | Self::ChannelMention | Self::Reaction => {
                ElementKind::Inline
            }
            _ => ElementKind::Block,
        }
    }
}

impl Discriminator for NodeType {
    fn from_tag(tag: &str) -> Option<Self> {
        NodeType::from_tag(tag)
    }

    fn as_tag(&self) -> &'static str {
        NodeType::as_tag(self)
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}
