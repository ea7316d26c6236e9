//! # messenger-search
//!
//! Search layer for the messaging client: unicode normalization, the
//! fuzzy matcher with its prepared-target representation, per-user
//! search keys, and the in-memory user index.
//!
//! Targets are normalized (NFD) and case-folded once, at preparation
//! time; queries are folded once per search. Consumers never re-derive
//! either side.

pub mod fuzzy;
pub mod index;
pub mod keys;
pub mod normalize;
pub mod options;

// Re-export commonly used types at crate root
pub use fuzzy::{fuzzy_match, Prepared, Query};
pub use index::{SearchHit, UserIndex};
pub use keys::FuzzyKeys;
pub use normalize::to_nfd;
pub use options::SearchOptions;
