//! Per-user fuzzy-search keys
//!
//! Built once per user when the index ingests them. Masked fields are
//! trimmed before they reach a key, so redacted content is never
//! matchable.

use messenger_core::{trim_mask, User};

use crate::fuzzy::{fuzzy_match, Prepared, Query};
use crate::normalize::to_nfd;

/// Prepared match targets for one directory member.
///
/// Users without a usable display name or handle fall back to the local
/// part of their email address, so every user stays searchable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FuzzyKeys {
    /// Fallback: no display name, no handle
    Email { email: Prepared },
    /// Regular profile keys
    Profile { name: Prepared, handle: Prepared },
}

impl FuzzyKeys {
    /// Derive the keys for a user from their unmasked fields
    #[must_use]
    pub fn for_user(user: &User) -> Self {
        let name = trim_mask(&user.name);

        if name.is_none() && user.handle.is_empty() {
            let local = user.email_name();
            let email = trim_mask(&local).unwrap_or_default();
            return Self::Email {
                email: Prepared::new(to_nfd(email)),
            };
        }

        Self::Profile {
            name: Prepared::new(to_nfd(name.unwrap_or_default())),
            handle: Prepared::new(to_nfd(&user.handle)),
        }
    }

    /// Best score of the query over the present keys
    #[must_use]
    pub fn score(&self, query: &Query) -> Option<i64> {
        match self {
            Self::Email { email } => fuzzy_match(email, query),
            Self::Profile { name, handle } => {
                match (fuzzy_match(name, query), fuzzy_match(handle, query)) {
                    (Some(a), Some(b)) => Some(a.max(b)),
                    (a, b) => a.or(b),
                }
            }
        }
    }

    /// Check if these keys are the email-local-part fallback
    #[inline]
    #[must_use]
    pub fn is_email_fallback(&self) -> bool {
        matches!(self, Self::Email { .. })
    }

    /// The raw key texts, for diagnostics
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Self::Email { email } => vec![email.as_str()],
            Self::Profile { name, handle } => vec![name.as_str(), handle.as_str()],
        }
    }
}
