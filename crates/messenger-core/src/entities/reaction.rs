//! Reaction aggregate - per-symbol set of reacting users on a message
//!
//! The aggregate owns both the user-ID set and its cardinality counter.
//! The counter is recomputed from the set inside every mutation boundary
//! and is never writable on its own; a wire-supplied count is ignored.

use serde::{Deserialize, Serialize};

use crate::entities::User;
use crate::payloads::ReactionPayload;

/// Reaction mutation event from the real-time collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionUpdate {
    pub reaction: String,
    #[serde(rename = "userID")]
    pub user_id: String,
}

/// One reaction symbol on a message, with the users who applied it.
///
/// Invariant: `count() == user_ids().len()` after construction and after
/// every mutation. User IDs form an insertion-ordered set; duplicates are
/// dropped on entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionAggregate {
    pub reaction: String,
    user_ids: Vec<String>,
    count: usize,
    /// Denormalized profile snapshots from the wire, not authoritative
    pub users: Vec<User>,
}

impl ReactionAggregate {
    /// Create an aggregate, deduplicating the initial user IDs.
    pub fn new(reaction: impl Into<String>, user_ids: Vec<String>) -> Self {
        let mut aggregate = Self {
            reaction: reaction.into(),
            user_ids: Vec::new(),
            count: 0,
            users: Vec::new(),
        };
        for user_id in user_ids {
            aggregate.add_user(&user_id);
        }
        aggregate
    }

    /// IDs of the users who applied this reaction, in insertion order.
    #[inline]
    pub fn user_ids(&self) -> &[String] {
        &self.user_ids
    }

    /// Cardinality of the user set.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Check if a user already applied this reaction
    #[inline]
    pub fn contains(&self, user_id: &str) -> bool {
        self.user_ids.iter().any(|id| id == user_id)
    }

    /// Check if nobody applies this reaction anymore
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Add a user to the set; no-op when already present.
    ///
    /// Returns whether the set changed.
    pub(crate) fn add_user(&mut self, user_id: &str) -> bool {
        if self.contains(user_id) {
            return false;
        }
        self.user_ids.push(user_id.to_string());
        self.count = self.user_ids.len();
        true
    }

    /// Remove a user from the set; no-op when absent.
    ///
    /// Returns whether the set changed.
    pub(crate) fn remove_user(&mut self, user_id: &str) -> bool {
        let before = self.user_ids.len();
        self.user_ids.retain(|id| id != user_id);
        self.count = self.user_ids.len();
        self.count != before
    }
}

impl From<ReactionPayload> for ReactionAggregate {
    fn from(payload: ReactionPayload) -> Self {
        // payload.count is deliberately ignored: cardinality comes from the set
        let mut aggregate = Self::new(
            payload.reaction.unwrap_or_default(),
            payload.user_ids.unwrap_or_default(),
        );
        aggregate.users = payload
            .users
            .unwrap_or_default()
            .into_iter()
            .map(User::from)
            .collect();
        aggregate
    }
}
