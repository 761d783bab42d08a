//! Node payloads.
//!
//! [`ElementData`] is the wire `data` object: a bag of optional fields where
//! only the ones meaningful for the owning node type are present. Decoders
//! never parse the whole bag; each variant reads just its own keys.

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// A URI reference as sent in `href`, `src` and embed `url` fields.
///
/// Absolute URIs are also parsed; relative references (`/docs/intro`,
/// `#anchor`) are kept as-is. Either way the reference renders exactly as
/// received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct UriRef {
    raw: String,
    absolute: Option<Url>,
}

impl UriRef {
    pub fn parse(s: &str) -> Self {
        Self {
            raw: s.to_string(),
            absolute: Url::parse(s).ok(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed form, for absolute URIs only.
    pub fn as_url(&self) -> Option<&Url> {
        self.absolute.as_ref()
    }

    pub fn is_relative(&self) -> bool {
        self.absolute.is_none()
    }
}

impl std::fmt::Display for UriRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl From<String> for UriRef {
    fn from(s: String) -> Self {
        Self {
            absolute: Url::parse(&s).ok(),
            raw: s,
        }
    }
}

impl From<&str> for UriRef {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<Url> for UriRef {
    fn from(url: Url) -> Self {
        Self {
            raw: url.to_string(),
            absolute: Some(url),
        }
    }
}

impl From<UriRef> for String {
    fn from(uri: UriRef) -> Self {
        uri.raw
    }
}

/// Who or what a mention points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionTarget {
    #[serde(alias = "person")]
    User,
    Role,
    Channel,
    Everyone,
    Here,
}

impl MentionTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Role => "role",
            Self::Channel => "channel",
            Self::Everyone => "everyone",
            Self::Here => "here",
        }
    }

    /// Targets that address a group rather than one entity.
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Everyone | Self::Here)
    }
}

/// A stable identifier as sent by the API: numeric for roles, textual for
/// users and most everything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StableId {
    Number(u64),
    Text(String),
}

impl StableId {
    pub fn as_number(&self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.parse().ok(),
        }
    }
}

impl std::fmt::Display for StableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for StableId {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for StableId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Payload of a member/role/group mention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionRef {
    #[serde(rename = "type")]
    pub target: MentionTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StableId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl MentionRef {
    pub fn user(id: impl Into<String>) -> Self {
        Self {
            target: MentionTarget::User,
            id: Some(StableId::Text(id.into())),
            name: None,
        }
    }

    pub fn role(id: u64) -> Self {
        Self {
            target: MentionTarget::Role,
            id: Some(StableId::Number(id)),
            name: None,
        }
    }

    pub fn group(target: MentionTarget) -> Self {
        Self {
            target,
            id: None,
            name: None,
        }
    }
}

/// Payload of a channel mention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRef {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Payload of an emote reaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionRef {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_reaction_id: Option<u64>,
}

/// A webhook-style rich embed. Not a node; carried opaquely by chat embeds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RichEmbed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<UriRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
}

/// The wire `data` object of a node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<UriRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<UriRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mention: Option<MentionRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction: Option<ReactionRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<RichEmbed>>,
}

impl ElementData {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
