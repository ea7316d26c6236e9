//! Channel entity - represents a public channel, private channel, or group

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::payloads::ChannelPayload;

/// Channel kind enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    /// Open channel anyone may join
    #[default]
    Public,
    /// Invite-only channel
    Private,
    /// Ad-hoc group conversation
    Group,
}

impl ChannelKind {
    /// Get the wire value
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Group => "group",
        }
    }
}

impl From<&str> for ChannelKind {
    fn from(value: &str) -> Self {
        match value {
            "private" => Self::Private,
            "group" => Self::Group,
            _ => Self::Public, // Default for "public" and unknown values
        }
    }
}

/// Channel entity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Channel {
    pub channel_id: String,
    pub name: String,
    pub topic: String,
    pub kind: ChannelKind,
    /// Member user IDs; the membership records themselves live elsewhere
    pub members: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub archived_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Channel {
    /// Check if a user belongs to this channel
    #[inline]
    #[must_use]
    pub fn is_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|id| id == user_id)
    }

    /// Check if this is a private channel
    #[inline]
    #[must_use]
    pub fn is_private(&self) -> bool {
        matches!(self.kind, ChannelKind::Private)
    }

    /// Check if this is a group conversation
    #[inline]
    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self.kind, ChannelKind::Group)
    }

    /// Check if channel has been archived
    #[inline]
    #[must_use]
    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }

    /// Check if channel has been soft deleted
    #[inline]
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl From<ChannelPayload> for Channel {
    fn from(payload: ChannelPayload) -> Self {
        Self {
            channel_id: payload.channel_id.unwrap_or_default(),
            name: payload.name.unwrap_or_default(),
            topic: payload.topic.unwrap_or_default(),
            kind: payload
                .kind
                .as_deref()
                .map(ChannelKind::from)
                .unwrap_or_default(),
            members: payload.members.unwrap_or_default(),
            created_at: payload.created_at,
            updated_at: payload.updated_at,
            archived_at: payload.archived_at,
            deleted_at: payload.deleted_at,
        }
    }
}
