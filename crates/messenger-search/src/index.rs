//! In-memory user index
//!
//! Owns a snapshot of the directory and the prepared fuzzy keys for
//! every member. Two lookup paths: `filter` does the exact-substring
//! quick filter against each user's precomputed `fts` string, `search`
//! runs the typo-tolerant fuzzy matcher over the prepared keys.

use messenger_core::User;
use tracing::{debug, trace};

use crate::fuzzy::Query;
use crate::keys::FuzzyKeys;
use crate::options::SearchOptions;

/// One indexed user plus their prepared match targets
#[derive(Debug, Clone)]
struct Entry {
    user: User,
    keys: FuzzyKeys,
}

/// A fuzzy-search result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub user: &'a User,
    pub score: i64,
}

/// Directory index over users, keyed by user ID
#[derive(Debug, Clone, Default)]
pub struct UserIndex {
    entries: Vec<Entry>,
    options: SearchOptions,
}

impl UserIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: SearchOptions) -> Self {
        Self {
            entries: Vec::new(),
            options,
        }
    }

    /// Insert a user, replacing any previous entry with the same ID.
    ///
    /// The user's fuzzy keys are rebuilt on every upsert, so profile
    /// edits are picked up.
    pub fn upsert(&mut self, user: User) {
        let keys = FuzzyKeys::for_user(&user);
        debug!(user_id = %user.user_id, fallback = keys.is_email_fallback(), "Indexing user");

        match self
            .entries
            .iter()
            .position(|e| e.user.user_id == user.user_id)
        {
            Some(at) => self.entries[at] = Entry { user, keys },
            None => self.entries.push(Entry { user, keys }),
        }
    }

    /// Remove a user by ID, returning them when present
    pub fn remove(&mut self, user_id: &str) -> Option<User> {
        let at = self.entries.iter().position(|e| e.user.user_id == user_id)?;
        debug!(user_id = %user_id, "Removing user from index");
        Some(self.entries.remove(at).user)
    }

    #[must_use]
    pub fn get(&self, user_id: &str) -> Option<&User> {
        self.entries
            .iter()
            .find(|e| e.user.user_id == user_id)
            .map(|e| &e.user)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.entries.iter().map(|e| &e.user)
    }

    /// Exact-substring quick filter over the precomputed `fts` strings.
    ///
    /// An empty query matches everyone, mirroring the substring check.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<&User> {
        self.entries
            .iter()
            .filter(|e| e.user.matches(query))
            .map(|e| &e.user)
            .collect()
    }

    /// Typo-tolerant search over the prepared fuzzy keys.
    ///
    /// Scores every entry, drops hits under the configured threshold,
    /// sorts descending by score and truncates to the configured limit.
    /// An empty query yields no hits.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        let query = Query::new(query);
        if query.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit<'_>> = self
            .entries
            .iter()
            .filter_map(|e| {
                e.keys
                    .score(&query)
                    .filter(|&s| s >= self.options.threshold)
                    .map(|score| SearchHit {
                        user: &e.user,
                        score,
                    })
            })
            .collect();

        hits.sort_by(|a, b| b.score.cmp(&a.score));
        if let Some(limit) = self.options.limit {
            hits.truncate(limit);
        }

        trace!(query = %query.as_str(), hits = hits.len(), "User search");
        hits
    }
}
