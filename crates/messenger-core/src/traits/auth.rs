//! Session capability trait
//!
//! The domain layer defines what it needs from the host's session
//! handling; the host provides the implementation. No authentication
//! logic lives in this crate.

use crate::entities::User;

/// Read-only view of the signed-in session
pub trait AuthProvider {
    /// The currently signed-in user, if any
    fn current_user(&self) -> Option<&User>;

    /// Check if a session is active
    #[inline]
    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}
