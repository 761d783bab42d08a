//! Document-level mention aggregate.
//!
//! Maps to the `mentions` object sent alongside message content:
//! ```json
//! {
//!   "users": [{ "id": "EdVMVKR4" }],
//!   "roles": [{ "id": 591232 }],
//!   "channels": [{ "id": "00000000-0000-0000-0000-000000000000" }],
//!   "everyone": false,
//!   "here": true
//! }
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `{ "id": ... }` wrapper used by the mention lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRef<T> {
    pub id: T,
}

/// Wire shape of the `mentions` object.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MentionsPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<IdRef<String>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<IdRef<u32>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<IdRef<Uuid>>>,

    #[serde(default)]
    pub everyone: bool,

    #[serde(default)]
    pub here: bool,
}

/// Who and what a message mentions. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Mentions {
    everyone: bool,
    here: bool,
    users: BTreeSet<String>,
    roles: BTreeSet<u32>,
    channels: BTreeSet<Uuid>,
}

impl Mentions {
    /// Project a payload into an aggregate.
    ///
    /// No payload yields `None`, which is distinct from an empty aggregate.
    pub fn parse(payload: Option<&MentionsPayload>) -> Option<Self> {
        let payload = payload?;
        Some(Self {
            everyone: payload.everyone,
            here: payload.here,
            users: ids(&payload.users),
            roles: ids(&payload.roles),
            channels: ids(&payload.channels),
        })
    }

    pub(crate) fn from_parts(
        everyone: bool,
        here: bool,
        users: BTreeSet<String>,
        roles: BTreeSet<u32>,
        channels: BTreeSet<Uuid>,
    ) -> Self {
        Self {
            everyone,
            here,
            users,
            roles,
            channels,
        }
    }

    pub fn everyone(&self) -> bool {
        self.everyone
    }

    pub fn here(&self) -> bool {
        self.here
    }

    pub fn users(&self) -> &BTreeSet<String> {
        &self.users
    }

    pub fn roles(&self) -> &BTreeSet<u32> {
        &self.roles
    }

    pub fn channels(&self) -> &BTreeSet<Uuid> {
        &self.channels
    }

    pub fn mentions_user(&self, user_id: &str) -> bool {
        self.users.contains(user_id)
    }

    pub fn mentions_role(&self, role_id: u32) -> bool {
        self.roles.contains(&role_id)
    }

    /// Whether the message pings a group (`@everyone` or `@here`).
    pub fn is_broadcast(&self) -> bool {
        self.everyone || self.here
    }

    pub fn is_empty(&self) -> bool {
        !self.is_broadcast()
            && self.users.is_empty()
            && self.roles.is_empty()
            && self.channels.is_empty()
    }
}

fn ids<T: Ord + Clone>(refs: &Option<Vec<IdRef<T>>>) -> BTreeSet<T> {
    refs.iter()
        .flatten()
        .map(|r| r.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_payload_is_absent() {
        assert_eq!(Mentions::parse(None), None);
    }

    #[test]
    fn test_empty_payload_is_empty_aggregate() {
        let mentions = Mentions::parse(Some(&MentionsPayload::default())).unwrap();
        assert!(mentions.is_empty());
    }

    #[test]
    fn test_parse_collects_all_references() {
        let payload: MentionsPayload = serde_json::from_value(json!({
            "users": [{ "id": "EdVMVKR4" }, { "id": "4WNnG7Pd" }, { "id": "EdVMVKR4" }],
            "roles": [{ "id": 591232 }],
            "channels": [{ "id": "00000000-0000-0000-0000-000000000000" }],
            "here": true
        }))
        .unwrap();

        let mentions = Mentions::parse(Some(&payload)).unwrap();
        assert_eq!(mentions.users().len(), 2);
        assert!(mentions.mentions_user("4WNnG7Pd"));
        assert!(mentions.mentions_role(591232));
        assert!(mentions.channels().contains(&Uuid::nil()));
        assert!(mentions.here());
        assert!(!mentions.everyone());
        assert!(mentions.is_broadcast());
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let payload: MentionsPayload = serde_json::from_value(json!({ "everyone": true })).unwrap();
        let mentions = Mentions::parse(Some(&payload)).unwrap();
        assert!(mentions.everyone());
        assert!(mentions.users().is_empty());
        assert!(!mentions.is_empty());
    }
}
