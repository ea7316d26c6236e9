//! Test helpers for integration tests
//!
//! Provides tracing setup, payload hydration shortcuts, and a canned
//! session for exercising the auth capability seam.

use anyhow::Result;
use messenger_core::{AuthProvider, Message, MessagePayload, User, UserPayload};
use messenger_search::UserIndex;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for a test binary.
///
/// Uses `RUST_LOG` for filtering if set, otherwise defaults to debug.
/// Safe to call from every test; repeated initialization is ignored.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

/// Parse one wire message record and hydrate it
pub fn hydrate_message(json: &str) -> Result<Message> {
    let payload: MessagePayload = serde_json::from_str(json)?;
    Ok(Message::try_from(payload)?)
}

/// Parse a fetched history page and hydrate every record
pub fn hydrate_thread(json: &str) -> Result<Vec<Message>> {
    let payloads: Vec<MessagePayload> = serde_json::from_str(json)?;
    payloads
        .into_iter()
        .map(|p| Ok(Message::try_from(p)?))
        .collect()
}

/// Build a search index over a directory of user records
pub fn index_directory(records: Vec<UserPayload>) -> UserIndex {
    let mut index = UserIndex::new();
    for record in records {
        index.upsert(User::from(record));
    }
    index
}

/// Fixed session handed to code that needs the auth capability
pub struct TestSession {
    user: Option<User>,
}

impl TestSession {
    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self { user: None }
    }
}

impl AuthProvider for TestSession {
    fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}
