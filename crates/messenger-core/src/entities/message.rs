//! Message entity - represents a chat message
//!
//! A message is either *absent* (default-constructed, no ID) or *hydrated*
//! from a wire payload. After construction the only mutation is through
//! [`Message::add_reaction`] and [`Message::remove_reaction`]; everything
//! else, including the sort key, is fixed for the lifetime of the value.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::entities::{Attachment, ReactionAggregate, ReactionUpdate, User};
use crate::error::DomainError;
use crate::payloads::MessagePayload;
use crate::value_objects::SortKey;

/// Chat message with a denormalized reaction aggregate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Message {
    /// Decimal-digit string identifier; `None` for the absent state
    pub message_id: Option<String>,
    pub user_id: String,
    /// Author snapshot embedded in the record
    pub user: User,
    pub message: String,
    pub kind: Option<String>,
    pub channel_id: String,
    pub reply_to: Option<String>,
    pub replies: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub is_pinned: bool,
    pub is_bookmarked: bool,
    pub can_reply: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    /// One aggregate per distinct reaction symbol, in arrival order
    pub reactions: Vec<ReactionAggregate>,
    /// Mentioned user IDs, in message order
    pub mentions: Vec<String>,
    /// Opaque unread-tracking value for the unread collaborator
    pub unread: Option<Value>,
    pub attachment: Option<Attachment>,
    /// Fixed-width ordering key; all zeros for the absent state
    pub sort_key: SortKey,
}

impl Message {
    /// Check if a user is mentioned in this message
    #[inline]
    pub fn is_mentioned(&self, user_id: &str) -> bool {
        self.mentions.iter().any(|id| id == user_id)
    }

    /// Check if message has been soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Check if message is a reply to another message
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.reply_to.is_some()
    }

    /// Apply a reaction from a user.
    ///
    /// Appends a fresh single-user aggregate when the symbol is new,
    /// otherwise adds the user to the existing aggregate. Re-applying the
    /// same `(reaction, userID)` pair is a no-op.
    pub fn add_reaction(&mut self, update: &ReactionUpdate) {
        match self
            .reactions
            .iter()
            .position(|r| r.reaction == update.reaction)
        {
            Some(at) => {
                self.reactions[at].add_user(&update.user_id);
            }
            None => {
                self.reactions.push(ReactionAggregate::new(
                    update.reaction.clone(),
                    vec![update.user_id.clone()],
                ));
            }
        }
    }

    /// Withdraw a reaction from a user.
    ///
    /// Removes the user from the symbol's aggregate when present, then
    /// drops every aggregate nobody applies anymore. Removing an absent
    /// pairing is a no-op. The count update and the zero-count sweep run
    /// under one `&mut self` borrow, so no observer can see the state
    /// between them.
    pub fn remove_reaction(&mut self, update: &ReactionUpdate) {
        if let Some(at) = self
            .reactions
            .iter()
            .position(|r| r.reaction == update.reaction)
        {
            self.reactions[at].remove_user(&update.user_id);
        }

        // Sweep out all drained aggregates
        self.reactions.retain(|r| !r.is_empty());
    }
}

impl TryFrom<MessagePayload> for Message {
    type Error = DomainError;

    /// Hydrate a message from a wire payload.
    ///
    /// Missing fields fall back to documented defaults; the only fatal
    /// condition is a structurally invalid `messageID`.
    fn try_from(payload: MessagePayload) -> Result<Self, Self::Error> {
        let sort_key = match payload.message_id.as_deref() {
            Some(id) => SortKey::from_id(id)?,
            None => SortKey::zero(),
        };

        Ok(Self {
            message_id: payload.message_id,
            user_id: payload.user_id.unwrap_or_default(),
            user: payload.user.map(User::from).unwrap_or_default(),
            message: payload.message.unwrap_or_default(),
            kind: payload.kind,
            channel_id: payload.channel_id.unwrap_or_default(),
            // An empty replyTo means "not a reply" on the wire
            reply_to: payload.reply_to.filter(|id| !id.is_empty()),
            replies: payload.replies.unwrap_or(0),
            created_at: payload.created_at,
            updated_at: payload.updated_at,
            deleted_at: payload.deleted_at,
            is_pinned: payload.is_pinned.unwrap_or(false),
            is_bookmarked: payload.is_bookmarked.unwrap_or(false),
            can_reply: payload.can_reply.unwrap_or(false),
            can_edit: payload.can_edit.unwrap_or(false),
            can_delete: payload.can_delete.unwrap_or(false),
            reactions: payload
                .reactions
                .unwrap_or_default()
                .into_iter()
                .map(ReactionAggregate::from)
                .collect(),
            mentions: payload.mentions.unwrap_or_default(),
            unread: payload.unread,
            attachment: payload.attachment.map(Attachment::from),
            sort_key,
        })
    }
}
