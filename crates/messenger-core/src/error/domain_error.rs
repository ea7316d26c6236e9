//! Domain errors - error types for the domain layer
//!
//! Entity constructors never fail on missing optional data; the only fatal
//! condition is a structurally invalid message identifier, which would
//! otherwise corrupt sort-key ordering.

use thiserror::Error;

use crate::value_objects::SortKey;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Message id exceeds {width} digits: {id:?}", width = SortKey::WIDTH)]
    MessageIdTooLong { id: String },

    #[error("Message id is not a decimal digit string: {id:?}")]
    MessageIdNotNumeric { id: String },
}

impl DomainError {
    /// Get an error code string for host-side reporting
    pub fn code(&self) -> &'static str {
        match self {
            Self::MessageIdTooLong { .. } => "MESSAGE_ID_TOO_LONG",
            Self::MessageIdNotNumeric { .. } => "MESSAGE_ID_NOT_NUMERIC",
        }
    }

    /// Check if this is a malformed-identifier error
    pub fn is_malformed_id(&self) -> bool {
        matches!(
            self,
            Self::MessageIdTooLong { .. } | Self::MessageIdNotNumeric { .. }
        )
    }
}
