//! Mention aggregates, from payloads and from trees.

use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use chat_content::domain::content::Document;
use chat_content::domain::mentions::{Mentions, MentionsPayload};

use crate::common::*;

#[test]
fn test_absent_payload_is_distinct_from_empty() {
    let empty = Mentions::parse(Some(&MentionsPayload::default()));
    assert_eq!(Mentions::parse(None), None);
    assert!(empty.is_some_and(|m| m.is_empty()));
}

#[test]
fn test_tree_mentions_match_fixture() {
    let document = Document::from_json(RELEASE_NOTES_JSON).unwrap();
    let mentions = document.mentions();

    assert!(mentions.mentions_user("EdVMVKR4"));
    assert_eq!(mentions.users().len(), 1);
    assert!(mentions.channels().contains(&Uuid::parse_str(CHANNEL_ID).unwrap()));
    assert!(!mentions.is_broadcast());
}

#[test]
fn test_tree_mentions_inside_lists_and_quotes() {
    let value = document(vec![
        block(
            "unordered-list",
            json!({}),
            vec![block(
                "list-item",
                json!({}),
                vec![inline(
                    "mention",
                    json!({ "mention": { "type": "role", "id": 591232 } }),
                    vec![text("Mods")],
                )],
            )],
        ),
        block(
            "block-quote-container",
            json!({}),
            vec![block(
                "block-quote-line",
                json!({}),
                vec![inline("mention", json!({ "mention": { "type": "here" } }), vec![])],
            )],
        ),
    ]);

    let mentions = Document::from_value(value).unwrap().mentions();
    assert!(mentions.mentions_role(591232));
    assert!(mentions.here());
    assert!(!mentions.everyone());
}

#[test]
fn test_payload_and_tree_agree_for_fixture() {
    let payload: MentionsPayload = serde_json::from_value(json!({
        "users": [{ "id": "EdVMVKR4" }],
        "channels": [{ "id": CHANNEL_ID }]
    }))
    .unwrap();

    let from_payload = Mentions::parse(Some(&payload)).unwrap();
    let from_tree = Document::from_json(RELEASE_NOTES_JSON).unwrap().mentions();
    assert_eq!(from_payload, from_tree);
}
