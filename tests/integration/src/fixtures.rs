//! Test fixtures and data generators
//!
//! Provides reusable wire-shaped records for integration tests. The
//! JSON fixtures use the upstream casing (`messageID`, `userIDs`) and
//! deliberately include the quirks the constructors must absorb: stale
//! reaction counts, the legacy `att` attachment key, empty `replyTo`.

use std::sync::atomic::{AtomicU64, Ordering};

use messenger_core::{ReactionUpdate, UserPayload};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Build a wire-shaped user record
pub fn user_record(
    user_id: &str,
    username: &str,
    handle: &str,
    name: &str,
    email: &str,
) -> UserPayload {
    UserPayload {
        user_id: Some(user_id.to_string()),
        username: Some(username.to_string()),
        handle: Some(handle.to_string()),
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        online: Some(false),
    }
}

/// Build a unique, fully populated user record
pub fn unique_user() -> UserPayload {
    let suffix = unique_suffix();
    user_record(
        &format!("1{suffix:04}"),
        &format!("testuser{suffix}"),
        &format!("tester{suffix}"),
        &format!("Test User {suffix}"),
        &format!("test{suffix}@example.com"),
    )
}

/// The directory cast shared by the search tests.
///
/// Covers the interesting shapes: a regular profile, a near-duplicate
/// of it, an email-only account, a fully redacted profile, and an
/// accented display name stored in precomposed form.
pub fn directory_cast() -> Vec<UserPayload> {
    vec![
        user_record(
            "2001",
            "martha",
            "martha.stewart",
            "Martha Stewart",
            "martha@example.org",
        ),
        user_record(
            "2002",
            "marty",
            "marty",
            "Martin Sheen",
            "marty@example.org",
        ),
        user_record("2003", "", "", "", "ophelia.payne@example.org"),
        user_record("2004", "ali", "", "##redacted##", "##redacted##"),
        user_record(
            "2005",
            "jozef",
            "jozef",
            "J\u{f3}zef Wybicki",
            "jozef@example.org",
        ),
    ]
}

/// Build a reaction event as the realtime collaborator delivers it
pub fn reaction_update(reaction: &str, user_id: &str) -> ReactionUpdate {
    ReactionUpdate {
        reaction: reaction.to_string(),
        user_id: user_id.to_string(),
    }
}

/// One fully populated message record.
///
/// The `count` of the first reaction is wrong on purpose; constructors
/// must recompute it from `userIDs`.
pub fn message_record() -> &'static str {
    r#"{
        "messageID": "8124596776516257792",
        "userID": "2001",
        "user": {
            "userID": "2001",
            "username": "martha",
            "handle": "martha.stewart",
            "name": "Martha Stewart",
            "email": "martha@example.org"
        },
        "type": "channel",
        "message": "Launch is a go",
        "channelID": "3001",
        "replyTo": "",
        "replies": 2,
        "createdAt": "2024-03-01T12:00:00Z",
        "updatedAt": null,
        "deletedAt": null,
        "isPinned": true,
        "isBookmarked": false,
        "canReply": true,
        "canEdit": false,
        "canDelete": false,
        "mentions": ["2002"],
        "unread": {"count": 3, "lastMessageID": "8124596776516257792"},
        "reactions": [
            {"reaction": "+1", "userIDs": ["2002", "2003"], "count": 99},
            {"reaction": "tada", "userIDs": ["2003"], "count": 1}
        ],
        "att": {
            "attachmentID": "9001",
            "userID": "2001",
            "name": "launch-checklist.pdf",
            "url": "https://files.example.org/9001/launch-checklist.pdf?sig=abc123",
            "previewUrl": "https://files.example.org/9001/preview.png",
            "meta": {"size": 48213}
        }
    }"#
}

/// A fetched history page with IDs arriving out of order.
///
/// Widths range from two digits up to the full twenty (u64::MAX and
/// one past i64::MAX) to pin down string-vs-numeric ordering.
pub fn thread_page() -> &'static str {
    r#"[
        {"messageID": "907", "userID": "2002", "channelID": "3001", "message": "second"},
        {"messageID": "18446744073709551615", "userID": "2001", "channelID": "3001", "message": "last"},
        {"messageID": "86", "userID": "2001", "channelID": "3001", "message": "first"},
        {"messageID": "9223372036854775808", "userID": "2003", "channelID": "3001", "message": "third"}
    ]"#
}
