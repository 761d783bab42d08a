//! Server channel decoding.

use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use chat_content::domain::channel::{ChannelType, ServerChannel};
use chat_content::domain::decode::{decode_polymorphic, DecodeContext};

use crate::common::*;

#[test_case("announcements", ChannelType::Announcements)]
#[test_case("chat", ChannelType::Chat)]
#[test_case("calendar", ChannelType::Calendar)]
#[test_case("forums", ChannelType::Forums)]
#[test_case("media", ChannelType::Media)]
#[test_case("docs", ChannelType::Docs)]
#[test_case("voice", ChannelType::Voice)]
#[test_case("list", ChannelType::List)]
#[test_case("scheduling", ChannelType::Scheduling)]
#[test_case("stream", ChannelType::Stream)]
fn test_every_channel_type_decodes(tag: &str, expected: ChannelType) {
    let channel = ServerChannel::from_value(channel(tag)).unwrap();
    assert_eq!(channel.channel_type(), expected);
    assert!(channel.info().is_public);
}

#[test]
fn test_unknown_future_tag_is_docs_channel() {
    let mut cx = DecodeContext::default();
    let channel: ServerChannel =
        decode_polymorphic(channel("unknown-future-tag"), &mut cx).unwrap();

    assert_eq!(channel.channel_type(), ChannelType::Docs);
    assert_eq!(cx.fallbacks(), 1);
}

#[test]
fn test_non_string_tag_is_docs_channel() {
    let mut value = channel("chat");
    value["type"] = json!(7);
    let channel = ServerChannel::from_value(value).unwrap();
    assert_eq!(channel.channel_type(), ChannelType::Docs);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let mut value = channel("voice");
    value["bitrate"] = json!(64000);
    value["somethingNew"] = json!({ "nested": true });
    let channel = ServerChannel::from_value(value).unwrap();
    assert!(channel.is_voice_based());
}

#[test]
fn test_reencoded_channel_decodes_to_same_variant() {
    for channel_type in ChannelType::ALL {
        let original = ServerChannel::from_value(channel(channel_type.as_str())).unwrap();
        let value = original.to_value().unwrap();
        assert_eq!(value["type"], json!(channel_type.as_str()));
        assert_eq!(ServerChannel::from_value(value).unwrap(), original);
    }
}
