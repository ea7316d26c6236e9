//! Wire payloads - raw records from the fetch collaborator
//!
//! The backend delivers records as JSON objects with camelCase keys and
//! uppercase `ID` suffixes (`messageID`, `userID`). Every field is optional;
//! entity constructors consume these structs and apply the documented
//! defaults exactly once at this boundary, so the rest of the crate never
//! null-checks.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

// ============================================================================
// User
// ============================================================================

/// Raw directory-member record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPayload {
    #[serde(rename = "userID")]
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub handle: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub online: Option<bool>,
}

// ============================================================================
// Message
// ============================================================================

/// Raw chat-message record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessagePayload {
    #[serde(rename = "messageID")]
    pub message_id: Option<String>,
    #[serde(rename = "userID")]
    pub user_id: Option<String>,
    /// Author snapshot embedded in the record
    pub user: Option<UserPayload>,
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "channelID")]
    pub channel_id: Option<String>,
    pub reply_to: Option<String>,
    pub replies: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub is_pinned: Option<bool>,
    pub is_bookmarked: Option<bool>,
    pub reactions: Option<Vec<ReactionPayload>>,
    pub mentions: Option<Vec<String>>,
    pub can_reply: Option<bool>,
    pub can_edit: Option<bool>,
    pub can_delete: Option<bool>,
    /// Opaque unread-tracking value, passed along untouched
    pub unread: Option<Value>,
    /// Some backend versions abbreviate the key to `att`
    #[serde(alias = "att")]
    pub attachment: Option<AttachmentPayload>,
}

/// Raw per-symbol reaction record embedded in a message
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReactionPayload {
    pub reaction: Option<String>,
    #[serde(rename = "userIDs")]
    pub user_ids: Option<Vec<String>>,
    /// Denormalized profile snapshots, not authoritative
    pub users: Option<Vec<UserPayload>>,
    /// Carried by the wire format but never trusted; the aggregate
    /// recomputes cardinality from the user-ID set
    pub count: Option<u32>,
}

// ============================================================================
// Attachment
// ============================================================================

/// Raw attachment record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttachmentPayload {
    #[serde(rename = "attachmentID")]
    pub attachment_id: Option<String>,
    #[serde(rename = "userID")]
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub meta: Option<Value>,
    pub url: Option<String>,
    pub preview_url: Option<String>,
}

// ============================================================================
// Member / Channel
// ============================================================================

/// Raw channel-membership record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberPayload {
    #[serde(rename = "userID")]
    pub user_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "channelID")]
    pub channel_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Raw channel record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChannelPayload {
    #[serde(rename = "channelID")]
    pub channel_id: Option<String>,
    pub name: Option<String>,
    pub topic: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Member user IDs; the membership relation itself is owned elsewhere
    pub members: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub archived_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}
