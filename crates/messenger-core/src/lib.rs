//! # messenger-core
//!
//! Domain layer for the messaging client: entities, value objects, wire
//! payloads, and capability traits. This crate has zero dependencies on
//! infrastructure (no I/O, no async runtime, no UI).

pub mod entities;
pub mod error;
pub mod payloads;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Attachment, Channel, ChannelKind, Member, Message, ReactionAggregate, ReactionUpdate, User,
};
pub use error::DomainError;
pub use payloads::{
    AttachmentPayload, ChannelPayload, MemberPayload, MessagePayload, ReactionPayload, UserPayload,
};
pub use traits::AuthProvider;
pub use value_objects::{is_masked, trim_mask, SortKey, MASK_DELIMITER};
