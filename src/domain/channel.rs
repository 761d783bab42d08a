//! Server channel subtypes.
//!
//! Channel payloads carry their subtype in the `type` field. Every subtype
//! shares the same body ([`ChannelInfo`]); the discriminator only selects the
//! [`ServerChannel`] variant. Tags this version does not know decode as a
//! [`ChannelType::Docs`] channel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::decode::{decode_polymorphic, DecodeContext, Discriminator, Polymorphic, TYPE_FIELD};
use crate::shared::error::DecodeError;

/// Channel subtypes, matching the `type` values sent by the server.
///
/// Deserializing goes through [`ChannelType::from_str`], so unknown values
/// become `Docs` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ChannelType {
    Announcements,
    Chat,
    Calendar,
    Forums,
    Media,
    /// Generic document channel, also used for unrecognized subtypes
    #[default]
    Docs,
    Voice,
    List,
    Scheduling,
    Stream,
}

impl ChannelType {
    pub const ALL: [ChannelType; 10] = [
        Self::Announcements,
        Self::Chat,
        Self::Calendar,
        Self::Forums,
        Self::Media,
        Self::Docs,
        Self::Voice,
        Self::List,
        Self::Scheduling,
        Self::Stream,
    ];

    /// Convert from the wire representation. Unknown values map to `Docs`.
    pub fn from_str(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "announcements" => Some(Self::Announcements),
            "chat" => Some(Self::Chat),
            "calendar" => Some(Self::Calendar),
            "forums" => Some(Self::Forums),
            "media" => Some(Self::Media),
            "docs" => Some(Self::Docs),
            "voice" => Some(Self::Voice),
            "list" => Some(Self::List),
            "scheduling" => Some(Self::Scheduling),
            "stream" => Some(Self::Stream),
            _ => None,
        }
    }

    /// Convert to the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Announcements => "announcements",
            Self::Chat => "chat",
            Self::Calendar => "calendar",
            Self::Forums => "forums",
            Self::Media => "media",
            Self::Docs => "docs",
            Self::Voice => "voice",
            Self::List => "list",
            Self::Scheduling => "scheduling",
            Self::Stream => "stream",
        }
    }
}

impl std::fmt::Display for ChannelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for ChannelType {
    fn from(s: String) -> Self {
        Self::from_str(&s)
    }
}

impl Discriminator for ChannelType {
    fn from_tag(tag: &str) -> Option<Self> {
        Self::parse(tag)
    }

    fn as_tag(&self) -> &'static str {
        self.as_str()
    }
}

/// Fields shared by every channel subtype.
///
/// Wire shape:
/// ```json
/// {
///   "id": "00000000-0000-0000-0000-000000000000",
///   "type": "chat",
///   "name": "general",
///   "serverId": "wlVr3Ggl",
///   "groupId": "ZVzBo83p",
///   "createdAt": "2024-01-01T00:00:00Z",
///   "createdBy": "Ann6LewA"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelInfo {
    pub id: Uuid,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    pub server_id: String,

    pub group_id: String,

    /// Top-level channel this thread belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_id: Option<Uuid>,

    /// Immediate parent of this thread
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,

    /// Message the thread was started from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u32>,

    pub created_at: DateTime<Utc>,

    pub created_by: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_by: Option<String>,

    #[serde(default)]
    pub is_public: bool,
}

/// A channel, tagged with its subtype.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerChannel {
    Announcements(ChannelInfo),
    Chat(ChannelInfo),
    Calendar(ChannelInfo),
    Forums(ChannelInfo),
    Media(ChannelInfo),
    Docs(ChannelInfo),
    Voice(ChannelInfo),
    List(ChannelInfo),
    Scheduling(ChannelInfo),
    Stream(ChannelInfo),
}

impl ServerChannel {
    pub fn from_parts(channel_type: ChannelType, info: ChannelInfo) -> Self {
        match channel_type {
            ChannelType::Announcements => Self::Announcements(info),
            ChannelType::Chat => Self::Chat(info),
            ChannelType::Calendar => Self::Calendar(info),
            ChannelType::Forums => Self::Forums(info),
            ChannelType::Media => Self::Media(info),
            ChannelType::Docs => Self::Docs(info),
            ChannelType::Voice => Self::Voice(info),
            ChannelType::List => Self::List(info),
            ChannelType::Scheduling => Self::Scheduling(info),
            ChannelType::Stream => Self::Stream(info),
        }
    }

    pub fn channel_type(&self) -> ChannelType {
        match self {
            Self::Announcements(_) => ChannelType::Announcements,
            Self::Chat(_) => ChannelType::Chat,
            Self::Calendar(_) => ChannelType::Calendar,
            Self::Forums(_) => ChannelType::Forums,
            Self::Media(_) => ChannelType::Media,
            Self::Docs(_) => ChannelType::Docs,
            Self::Voice(_) => ChannelType::Voice,
            Self::List(_) => ChannelType::List,
            Self::Scheduling(_) => ChannelType::Scheduling,
            Self::Stream(_) => ChannelType::Stream,
        }
    }

    pub fn info(&self) -> &ChannelInfo {
        match self {
            Self::Announcements(info)
            | Self::Chat(info)
            | Self::Calendar(info)
            | Self::Forums(info)
            | Self::Media(info)
            | Self::Docs(info)
            | Self::Voice(info)
            | Self::List(info)
            | Self::Scheduling(info)
            | Self::Stream(info) => info,
        }
    }

    pub fn into_info(self) -> ChannelInfo {
        match self {
            Self::Announcements(info)
            | Self::Chat(info)
            | Self::Calendar(info)
            | Self::Forums(info)
            | Self::Media(info)
            | Self::Docs(info)
            | Self::Voice(info)
            | Self::List(info)
            | Self::Scheduling(info)
            | Self::Stream(info) => info,
        }
    }

    /// Check if members post messages or posts in this channel.
    pub fn is_text_based(&self) -> bool {
        matches!(
            self.channel_type(),
            ChannelType::Announcements | ChannelType::Chat | ChannelType::Forums | ChannelType::Docs
        )
    }

    /// Check if this channel carries live audio or video.
    pub fn is_voice_based(&self) -> bool {
        matches!(self.channel_type(), ChannelType::Voice | ChannelType::Stream)
    }

    pub fn is_archived(&self) -> bool {
        self.info().archived_at.is_some()
    }

    /// Check if this channel is a thread under another channel.
    pub fn is_thread(&self) -> bool {
        self.info().parent_id.is_some()
    }

    /// Decode with default settings.
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        decode_polymorphic(value, &mut DecodeContext::default())
    }

    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Encode back to the wire shape, discriminator included.
    pub fn to_value(&self) -> Result<Value, DecodeError> {
        let mut value = serde_json::to_value(self.info())?;
        if let Value::Object(map) = &mut value {
            map.insert(
                TYPE_FIELD.to_string(),
                Value::String(self.channel_type().as_str().to_string()),
            );
        }
        Ok(value)
    }
}

impl Polymorphic for ServerChannel {
    type Tag = ChannelType;

    const CATALOG: &'static str = "channel";

    fn decode_as(tag: ChannelType, value: Value, _cx: &mut DecodeContext) -> Result<Self, DecodeError> {
        let info: ChannelInfo =
            serde_json::from_value(value).map_err(|e| DecodeError::malformed(tag.as_tag(), e))?;
        Ok(Self::from_parts(tag, info))
    }

    fn decode_fallback(value: Value, cx: &mut DecodeContext) -> Result<Self, DecodeError> {
        Self::decode_as(ChannelType::default(), value, cx)
    }

    fn fallback_name() -> &'static str {
        ChannelType::Docs.as_str()
    }
}
