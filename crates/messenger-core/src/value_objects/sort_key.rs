//! Sort key - fixed-width ordering key for message identifiers
//!
//! Message IDs are unsigned 64-bit integers carried as decimal strings.
//! Left-padding the string with `'0'` to a fixed width makes plain string
//! comparison reproduce numeric comparison, without parsing into a native
//! integer type (which would reject 20-digit values above `u64::MAX`).

use std::fmt;

use crate::error::DomainError;

/// All-zero key, also the padding source for shorter identifiers.
const ZERO_PAD: &str = "00000000000000000000";

/// Fixed-width, zero-padded ordering key derived from a message identifier.
///
/// Invariant: the key is always exactly [`SortKey::WIDTH`] ASCII digits, and
/// for any two keys `a <= b` iff the numeric value of the source identifier
/// of `a` is `<=` that of `b`. The empty identifier maps to the all-zero
/// key, which sorts before every other key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey(String);

impl SortKey {
    /// Width of every key, in digits. Covers the full `u64` range.
    pub const WIDTH: usize = 20;

    /// The all-zero key (absent or empty identifier).
    pub fn zero() -> Self {
        Self(ZERO_PAD.to_string())
    }

    /// Derive the key for a decimal-string identifier.
    ///
    /// Fails when the identifier is wider than [`SortKey::WIDTH`] digits or
    /// contains a non-digit character; truncating would silently corrupt
    /// ordering, so construction refuses instead. The empty string is valid
    /// and maps to the all-zero key.
    pub fn from_id(id: &str) -> Result<Self, DomainError> {
        if id.len() > Self::WIDTH {
            return Err(DomainError::MessageIdTooLong { id: id.to_string() });
        }
        if !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::MessageIdNotNumeric { id: id.to_string() });
        }
        Ok(Self(format!("{id:0>width$}", width = Self::WIDTH)))
    }

    /// The key as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the all-zero key
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == ZERO_PAD
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
