//! Wire decoding of content trees.

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use chat_content::config::DecodeSettings;
use chat_content::domain::content::{
    BlockNode, ChatElement, ContainerNode, ContentEmbed, Document, Form, InlineNode, MessageBody, Node, Render,
    ReplyHeader,
};
use chat_content::domain::decode::{decode, decode_polymorphic, decode_str, DecodeContext};
use chat_content::domain::value_objects::{ElementKind, NodeType};
use chat_content::shared::error::DecodeError;
use url::Url;

use crate::common::*;

/// Re-encode a node as a wire element from its type and payload.
fn encode(node: &impl Node, nodes: Vec<Value>) -> Value {
    json!({
        "object": node.kind().as_str(),
        "type": node.node_type().as_tag(),
        "data": serde_json::to_value(node.data()).unwrap(),
        "nodes": nodes,
    })
}

// ==========================================================================
// Fixtures
// ==========================================================================

#[test]
fn test_release_notes_fixture_renders() {
    let document = Document::from_json(RELEASE_NOTES_JSON).unwrap();
    assert_eq!(document.render(), RELEASE_NOTES_MD);
}

#[test]
fn test_release_notes_fixture_block_types() {
    let document = Document::from_json(RELEASE_NOTES_JSON).unwrap();
    let kinds: Vec<NodeType> = document.children().iter().map(|b| b.node_type()).collect();
    assert_eq!(
        kinds,
        vec![
            NodeType::HeadingLarge,
            NodeType::Paragraph,
            NodeType::HeadingSmall,
            NodeType::UnorderedList,
            NodeType::BlockQuoteContainer,
            NodeType::CodeContainer,
            NodeType::Divider,
            NodeType::Image,
            NodeType::ContentEmbed,
            NodeType::Form,
        ]
    );
}

// ==========================================================================
// Every Node Type, Block Position
// ==========================================================================

#[test_case("paragraph", NodeType::Paragraph)]
#[test_case("heading-large", NodeType::HeadingLarge)]
#[test_case("heading-small", NodeType::HeadingSmall)]
#[test_case("divider", NodeType::Divider)]
#[test_case("block-quote-container", NodeType::BlockQuoteContainer)]
#[test_case("block-quote-line", NodeType::BlockQuoteContainer ; "quote line is wrapped")]
#[test_case("code-container", NodeType::CodeContainer)]
#[test_case("code-line", NodeType::CodeContainer ; "code line is wrapped")]
#[test_case("unordered-list", NodeType::UnorderedList)]
#[test_case("ordered-list", NodeType::OrderedList)]
#[test_case("list-item", NodeType::UnorderedList ; "list item is wrapped")]
#[test_case("markdown-plain-text", NodeType::MarkdownPlainText)]
#[test_case("image", NodeType::Image)]
#[test_case("video", NodeType::Video)]
#[test_case("link", NodeType::Paragraph ; "uncaptioned link is wrapped")]
#[test_case("chat-embed", NodeType::ChatEmbed)]
#[test_case("mention", NodeType::Paragraph ; "mention is wrapped")]
#[test_case("channel", NodeType::Paragraph ; "channel mention is wrapped")]
#[test_case("reaction", NodeType::Paragraph ; "reaction is wrapped")]
#[test_case("form", NodeType::Form)]
#[test_case("reply-header", NodeType::ReplyHeader)]
fn test_block_position_decodes(tag: &str, expected: NodeType) {
    let node: BlockNode = decode(block(tag, data_for(tag), vec![text("x")])).unwrap();
    assert_eq!(node.node_type(), expected);
    assert_eq!(node.kind(), ElementKind::Block);
}

#[test_case("link", Some(NodeType::Hyperlink))]
#[test_case("mention", Some(NodeType::MemberMention))]
#[test_case("channel", Some(NodeType::ChannelMention))]
#[test_case("reaction", Some(NodeType::Reaction))]
#[test_case("paragraph", None ; "block flattens to text")]
#[test_case("unknown-future-tag", None ; "unknown flattens to text")]
fn test_inline_position_decodes(tag: &str, expected: Option<NodeType>) {
    let node: InlineNode = decode(inline(tag, data_for(tag), vec![text("x")])).unwrap();
    assert_eq!(node.node_type(), expected);
}

#[test]
fn test_every_node_type_tag_resolves() {
    for node_type in NodeType::ALL {
        assert!(
            NodeType::from_tag(node_type.as_tag()).is_some(),
            "Tag did not resolve for {:?}",
            node_type
        );
    }
}

// ==========================================================================
// Re-encoding Built Nodes
// ==========================================================================

#[test]
fn test_content_embed_roundtrip() {
    let embed = ContentEmbed::new(Url::parse("https://example.com/doc").unwrap(), "Doc");
    let decoded: BlockNode = decode(encode(&embed, vec![])).unwrap();
    assert_eq!(decoded, BlockNode::from(embed));
}

#[test]
fn test_form_roundtrip() {
    let form = Form::new(99);
    let decoded: BlockNode = decode(encode(&form, vec![])).unwrap();
    assert_eq!(decoded, BlockNode::from(form));
}

#[test]
fn test_reply_header_roundtrip() {
    let header = ReplyHeader::new(12, "Ann6LewA");
    let decoded: BlockNode = decode(encode(&header, vec![])).unwrap();
    assert_eq!(decoded, BlockNode::from(header));
}

// ==========================================================================
// Relative References
// ==========================================================================

#[test]
fn test_relative_references_decode_and_render_verbatim() {
    let value = document(vec![
        block(
            "paragraph",
            json!({}),
            vec![
                text("see "),
                inline("link", json!({ "href": "/docs/intro" }), vec![text("docs")]),
                text(" or "),
                inline("link", json!({ "href": "#setup" }), vec![text("setup")]),
            ],
        ),
        block("image", json!({ "src": "uploads/cat.png" }), vec![]),
    ]);

    let document = Document::from_value(value).unwrap();

    assert_eq!(
        document.render(),
        "see [docs](/docs/intro) or [setup](#setup)\n![](uploads/cat.png)\n"
    );
}

#[test]
fn test_malformed_unrelated_data_field_is_ignored() {
    let value = block(
        "image",
        json!({ "src": "https://img.example.com/a.png", "formId": "not a number", "mention": 3 }),
        vec![],
    );
    let node: BlockNode = decode(value).unwrap();
    assert_eq!(node.render(), "![](https://img.example.com/a.png)\n");
}

// ==========================================================================
// Fallbacks
// ==========================================================================

#[test]
fn test_unknown_block_degrades_and_is_counted() {
    let value = document(vec![
        block("paragraph", json!({}), vec![text("known")]),
        block("poll", json!({ "options": ["a", "b"] }), vec![text("vote!")]),
    ]);

    let mut cx = DecodeContext::default();
    let document = Document::decode_with(value, &mut cx).unwrap();

    assert_eq!(document.render(), "known\nvote!\n");
    assert_eq!(cx.fallbacks(), 1);
}

#[test]
fn test_missing_type_is_not_counted_as_fallback() {
    let mut cx = DecodeContext::default();
    let node: BlockNode = decode_polymorphic(text("bare"), &mut cx).unwrap();
    assert_eq!(node.render(), "bare\n");
    assert_eq!(cx.fallbacks(), 0);
}

#[test]
fn test_marks_survive_decode() {
    let value = block(
        "paragraph",
        json!({}),
        vec![json!({
            "object": "text",
            "leaves": [leaf("a", &["bold", "italic"]), leaf("b", &["sparkle"])]
        })],
    );
    let node: BlockNode = decode(value).unwrap();
    assert_eq!(node.render(), "***a***b\n");
}

// ==========================================================================
// Errors
// ==========================================================================

#[test_case("image", "src")]
#[test_case("video", "src")]
#[test_case("form", "formId")]
#[test_case("reply-header", "postId")]
#[test_case("chat-embed", "embeds")]
fn test_missing_required_field(tag: &str, field: &str) {
    let err = decode::<BlockNode>(block(tag, json!({}), vec![])).unwrap_err();
    assert_eq!(err.to_string(), format!("Missing field `{}` on `{}`", field, tag));
}

#[test]
fn test_invalid_json_is_reported() {
    let err = decode_str::<BlockNode>("{ not json").unwrap_err();
    assert!(matches!(err, DecodeError::Json(_)));
}

#[test]
fn test_depth_limit_from_settings() {
    let mut value = text("deep");
    for _ in 0..8 {
        value = inline("link", data_for("link"), vec![value]);
    }
    let value = block("paragraph", json!({}), vec![value]);
    let mut cx = DecodeContext::new(DecodeSettings {
        max_depth: 4,
        warn_on_fallback: true,
    });
    let err = Document::decode_with(document(vec![value]), &mut cx).unwrap_err();
    assert!(matches!(err, DecodeError::TooDeep { limit: 4 }));
}

// ==========================================================================
// Message Bodies
// ==========================================================================

#[test]
fn test_message_body_keeps_server_mentions() {
    let body = MessageBody::from_value(json!({
        "document": serde_json::from_str::<Value>(RELEASE_NOTES_JSON).unwrap(),
        "mentions": { "users": [{ "id": "EdVMVKR4" }], "everyone": true }
    }))
    .unwrap();

    let mentions = body.mentions().unwrap();
    assert!(mentions.everyone());
    assert!(mentions.mentions_user("EdVMVKR4"));
    assert_eq!(body.render(), RELEASE_NOTES_MD);
}
