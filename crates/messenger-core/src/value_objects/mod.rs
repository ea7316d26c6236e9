//! Value objects - immutable types that represent domain concepts

mod mask;
mod sort_key;

pub use mask::{is_masked, trim_mask, MASK_DELIMITER};
pub use sort_key::SortKey;
