//! User entity - represents a directory member
//!
//! The full-text index string (`fts`) is derived once at construction from
//! normalized, unmasked fields; consumers read it without re-deriving.

use crate::payloads::UserPayload;
use crate::value_objects::trim_mask;

/// Directory member with a precomputed full-text index string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub handle: String,
    pub name: String,
    pub email: String,
    pub online: bool,
    /// Lowercase, space-joined concatenation of the unmasked fields plus
    /// the user ID; computed at construction, never re-derived
    pub fts: String,
}

impl User {
    /// Local part of the unmasked email address.
    ///
    /// Masked or empty emails yield the empty string.
    pub fn email_name(&self) -> String {
        trim_mask(&self.email)
            .unwrap_or("")
            .split('@')
            .next()
            .unwrap_or("")
            .to_string()
    }

    /// Display label: the first non-empty of name, username, handle and
    /// email, in that order, skipping masked values. Users with nothing to
    /// show fall back to `anonymous-<userID>`.
    pub fn label(&self) -> String {
        trim_mask(&self.name)
            .or_else(|| non_empty(&self.username))
            .or_else(|| non_empty(&self.handle))
            .or_else(|| trim_mask(&self.email))
            .map(ToString::to_string)
            .unwrap_or_else(|| format!("anonymous-{}", self.user_id))
    }

    /// Shorter label for mention autocomplete: name, handle, email local
    /// part, then the raw user ID.
    pub fn suggestion_label(&self) -> String {
        let email_name = self.email_name();
        trim_mask(&self.name)
            .or_else(|| non_empty(&self.handle))
            .or_else(|| trim_mask(&email_name))
            .unwrap_or(&self.user_id)
            .to_string()
    }

    /// Case-normalized substring check against the full-text index string.
    ///
    /// This is the quick-filter path; typo-tolerant matching goes through
    /// the fuzzy keys instead.
    pub fn matches(&self, query: &str) -> bool {
        self.fts.contains(&query.to_lowercase())
    }
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        let user_id = payload.user_id.unwrap_or_default();
        let username = payload.username.unwrap_or_default();
        let handle = payload.handle.unwrap_or_default();
        let name = payload.name.unwrap_or_default();
        let email = payload.email.unwrap_or_default();
        let online = payload.online.unwrap_or(false);

        // Build the full-text index string, omitting masked data
        let fts = [
            non_empty(&username),
            non_empty(&handle),
            trim_mask(&name),
            trim_mask(&email),
            non_empty(&user_id),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

        Self {
            user_id,
            username,
            handle,
            name,
            email,
            online,
            fts,
        }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
