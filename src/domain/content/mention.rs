//! Inline references: member/role/group mentions, channel mentions, and
//! emote reactions.
//!
//! Each holds exactly one text child, the label. Rendering uses the label
//! (or the payload's display name when the label is empty) and never emits
//! the stable id.

use super::container::{ChatElement, Node, Render};
use crate::domain::value_objects::{
    ChannelRef, ElementData, ElementKind, MentionRef, NodeType, ReactionRef, Text,
};

/// `@name` mention of a user, a role, `@everyone` or `@here`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberMention {
    mention: MentionRef,
    label: Text,
}

impl MemberMention {
    pub fn new(mention: MentionRef, label: impl Into<Text>) -> Self {
        Self {
            mention,
            label: label.into(),
        }
    }

    pub fn mention(&self) -> &MentionRef {
        &self.mention
    }

    pub fn label(&self) -> &Text {
        &self.label
    }

    fn display_name(&self) -> String {
        if !self.label.is_empty() {
            return self.label.raw();
        }
        match &self.mention.name {
            Some(name) => name.clone(),
            None if self.mention.target.is_group() => self.mention.target.as_str().to_string(),
            None => String::new(),
        }
    }
}

impl ChatElement for MemberMention {
    fn kind(&self) -> ElementKind {
        ElementKind::Inline
    }
}

impl Node for MemberMention {
    fn node_type(&self) -> NodeType {
        NodeType::MemberMention
    }

    fn data(&self) -> ElementData {
        ElementData {
            mention: Some(self.mention.clone()),
            ..ElementData::default()
        }
    }
}

impl Render for MemberMention {
    fn render_to(&self, out: &mut String) {
        out.push('@');
        out.push_str(&self.display_name());
    }
}

/// `#name` mention of a channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelMention {
    channel: ChannelRef,
    label: Text,
}

impl ChannelMention {
    pub fn new(channel: ChannelRef, label: impl Into<Text>) -> Self {
        Self {
            channel,
            label: label.into(),
        }
    }

    pub fn channel(&self) -> &ChannelRef {
        &self.channel
    }

    pub fn label(&self) -> &Text {
        &self.label
    }
}

impl ChatElement for ChannelMention {
    fn kind(&self) -> ElementKind {
        ElementKind::Inline
    }
}

impl Node for ChannelMention {
    fn node_type(&self) -> NodeType {
        NodeType::ChannelMention
    }

    fn data(&self) -> ElementData {
        ElementData {
            channel: Some(self.channel.clone()),
            ..ElementData::default()
        }
    }
}

impl Render for ChannelMention {
    fn render_to(&self, out: &mut String) {
        out.push('#');
        if self.label.is_empty() {
            out.push_str(self.channel.name.as_deref().unwrap_or_default());
        } else {
            out.push_str(&self.label.raw());
        }
    }
}

/// An emote, rendered as its label (e.g. `:smile:`).
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    reaction: ReactionRef,
    label: Text,
}

impl Reaction {
    pub fn new(reaction: ReactionRef, label: impl Into<Text>) -> Self {
        Self {
            reaction,
            label: label.into(),
        }
    }

    pub fn reaction(&self) -> &ReactionRef {
        &self.reaction
    }
}

impl ChatElement for Reaction {
    fn kind(&self) -> ElementKind {
        ElementKind::Inline
    }
}

impl Node for Reaction {
    fn node_type(&self) -> NodeType {
        NodeType::Reaction
    }

    fn data(&self) -> ElementData {
        ElementData {
            reaction: Some(self.reaction.clone()),
            ..ElementData::default()
        }
    }
}

impl Render for Reaction {
    fn render_to(&self, out: &mut String) {
        out.push_str(&self.label.raw());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{MentionTarget, StableId};
    use uuid::Uuid;

    #[test]
    fn test_member_mention_renders_label_not_id() {
        let mention = MemberMention::new(MentionRef::user("EdVMVKR4"), "Ann");
        assert_eq!(mention.render(), "@Ann");
        assert!(!mention.render().contains("EdVMVKR4"));
    }

    #[test]
    fn test_member_mention_falls_back_to_payload_name() {
        let mut mention_ref = MentionRef::role(591232);
        mention_ref.name = Some("Moderators".into());
        let mention = MemberMention::new(mention_ref, Text::default());
        assert_eq!(mention.render(), "@Moderators");
    }

    #[test]
    fn test_group_mention_without_label() {
        let mention = MemberMention::new(MentionRef::group(MentionTarget::Everyone), Text::default());
        assert_eq!(mention.render(), "@everyone");
    }

    #[test]
    fn test_mention_without_any_name_never_leaks_id() {
        let mention = MemberMention::new(MentionRef::user("EdVMVKR4"), Text::default());
        assert_eq!(mention.render(), "@");
        assert_eq!(mention.data().mention.unwrap().id, Some(StableId::from("EdVMVKR4")));
    }

    #[test]
    fn test_channel_mention() {
        let channel = ChannelRef {
            id: Uuid::nil(),
            name: Some("general".into()),
        };
        assert_eq!(ChannelMention::new(channel.clone(), "general").render(), "#general");
        assert_eq!(ChannelMention::new(channel, Text::default()).render(), "#general");
    }

    #[test]
    fn test_reaction_renders_label() {
        let reaction = Reaction::new(
            ReactionRef {
                id: 90002569,
                custom_reaction_id: None,
            },
            ":grinning:",
        );
        assert_eq!(reaction.render(), ":grinning:");
        assert_eq!(reaction.kind(), ElementKind::Inline);
    }
}
