//! Domain entities - core business objects

mod attachment;
mod channel;
mod member;
mod message;
mod reaction;
mod user;

pub use attachment::Attachment;
pub use channel::{Channel, ChannelKind};
pub use member::Member;
pub use message::Message;
pub use reaction::{ReactionAggregate, ReactionUpdate};
pub use user::User;
