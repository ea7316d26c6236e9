//! Member entity - channel membership relation

use chrono::{DateTime, Utc};

use crate::payloads::MemberPayload;

/// Thin relation between a user and a channel.
///
/// `kind` is an opaque role/membership label owned by the collaborator
/// that manages memberships; this core never interprets it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Member {
    pub user_id: String,
    pub kind: String,
    pub channel_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<MemberPayload> for Member {
    fn from(payload: MemberPayload) -> Self {
        Self {
            user_id: payload.user_id.unwrap_or_default(),
            kind: payload.kind.unwrap_or_default(),
            channel_id: payload.channel_id.unwrap_or_default(),
            created_at: payload.created_at,
            updated_at: payload.updated_at,
        }
    }
}
