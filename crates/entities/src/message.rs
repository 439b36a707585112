//! Message entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::kind::set;
use crate::{Entity, EntityId, EntityKind};

/// Where a message is delivered: a shared channel or a single recipient.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageTarget {
    /// Company chat channel, e.g. `general`.
    #[serde(rename = "channelId")]
    Channel(String),
    /// Direct message to a user.
    #[serde(rename = "recipientId")]
    Direct(EntityId),
}

/// A chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique identifier.
    pub id: EntityId,
    /// Sender user ID.
    pub sender_id: EntityId,
    /// Message body.
    pub content: String,
    /// When the message was sent.
    pub timestamp: DateTime<Utc>,
    /// Channel or recipient.
    #[serde(flatten)]
    pub target: MessageTarget,
}

impl Message {
    /// Returns true if `user_id` should see this message: every channel
    /// message, and direct messages they sent or received.
    pub fn is_visible_to(&self, user_id: &str) -> bool {
        match &self.target {
            MessageTarget::Channel(_) => true,
            MessageTarget::Direct(recipient) => recipient == user_id || self.sender_id == user_id,
        }
    }
}

/// Creation payload for a [`Message`]. The timestamp is stamped by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub sender_id: EntityId,
    pub content: String,
    pub target: MessageTarget,
}

impl NewMessage {
    /// Creates a channel message.
    pub fn to_channel(
        sender_id: impl Into<EntityId>,
        channel: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            sender_id: sender_id.into(),
            content: content.into(),
            target: MessageTarget::Channel(channel.into()),
        }
    }

    /// Creates a direct message.
    pub fn direct(
        sender_id: impl Into<EntityId>,
        recipient_id: impl Into<EntityId>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            sender_id: sender_id.into(),
            content: content.into(),
            target: MessageTarget::Direct(recipient_id.into()),
        }
    }
}

/// Partial update for a [`Message`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessagePatch {
    pub content: Option<String>,
    pub target: Option<MessageTarget>,
}

impl Entity for Message {
    const KIND: EntityKind = EntityKind::Message;
    type Draft = NewMessage;
    type Patch = MessagePatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: EntityId, draft: NewMessage, now: DateTime<Utc>) -> Self {
        Self {
            id,
            sender_id: draft.sender_id,
            content: draft.content,
            timestamp: now,
            target: draft.target,
        }
    }

    fn apply(&mut self, patch: MessagePatch) {
        set(&mut self.content, patch.content);
        set(&mut self.target, patch.target);
    }
}
