//! Common Test Utilities
//!
//! Wire-format builders and fixtures shared by the integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};

/// Document exercising most block types, with its expected Markdown.
pub const RELEASE_NOTES_JSON: &str = include_str!("../fixtures/release_notes.json");
pub const RELEASE_NOTES_MD: &str = include_str!("../fixtures/release_notes.md");

pub const CHANNEL_ID: &str = "3b5e8c4a-9f3d-4c43-a1c5-6f8e2b7d9a10";

/// An unformatted text run.
pub fn text(s: &str) -> Value {
    json!({ "object": "text", "leaves": [leaf(s, &[])] })
}

/// A leaf with the given mark types.
pub fn leaf(s: &str, marks: &[&str]) -> Value {
    let marks: Vec<Value> = marks.iter().map(|m| json!({ "type": m })).collect();
    json!({ "object": "leaf", "text": s, "marks": marks })
}

pub fn block(tag: &str, data: Value, nodes: Vec<Value>) -> Value {
    json!({ "object": "block", "type": tag, "data": data, "nodes": nodes })
}

pub fn inline(tag: &str, data: Value, nodes: Vec<Value>) -> Value {
    json!({ "object": "inline", "type": tag, "data": data, "nodes": nodes })
}

pub fn document(nodes: Vec<Value>) -> Value {
    json!({ "object": "document", "data": {}, "nodes": nodes })
}

/// Minimal `data` payload each tag requires.
pub fn data_for(tag: &str) -> Value {
    match tag {
        "code-container" => json!({ "language": "rust" }),
        "image" | "video" => json!({ "src": "https://cdn.example.com/a.png" }),
        "link" => json!({ "href": "https://example.com/" }),
        "chat-embed" => json!({ "embeds": [{ "title": "Build passed" }] }),
        "mention" => json!({ "mention": { "type": "person", "id": "EdVMVKR4", "name": "Ann" } }),
        "channel" => json!({ "channel": { "id": CHANNEL_ID, "name": "general" } }),
        "reaction" => json!({ "reaction": { "id": 90002547 } }),
        "form" => json!({ "formId": 7 }),
        "reply-header" => json!({ "postId": 3, "authorId": "Ann6LewA" }),
        _ => json!({}),
    }
}

/// Channel payload with the given `type` tag.
pub fn channel(tag: &str) -> Value {
    json!({
        "id": CHANNEL_ID,
        "type": tag,
        "name": "general",
        "serverId": "wlVr3Ggl",
        "groupId": "ZVzBo83p",
        "createdAt": "2024-01-01T00:00:00Z",
        "createdBy": "Ann6LewA",
        "isPublic": true
    })
}
