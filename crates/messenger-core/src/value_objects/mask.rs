//! Mask trimming - recognizes server-side redacted values
//!
//! Fields the server redacts arrive wrapped in a sentinel delimiter
//! (`##secret##`). Such values must never reach a display or index path,
//! so callers trim them at the boundary and treat the field as absent.

/// Two-character sentinel wrapping redacted values.
pub const MASK_DELIMITER: &str = "##";

/// A masked value is delimiter + at least one character + delimiter.
const MIN_MASKED_LEN: usize = MASK_DELIMITER.len() * 2 + 1;

/// Check whether the whole value is wrapped in the redaction delimiter.
///
/// A delimiter at only one end does not count; neither does a bare pair of
/// delimiters with nothing between them.
#[inline]
pub fn is_masked(value: &str) -> bool {
    value.len() >= MIN_MASKED_LEN
        && value.starts_with(MASK_DELIMITER)
        && value.ends_with(MASK_DELIMITER)
}

/// Drop redacted values, pass everything else through unchanged.
///
/// The empty string is treated as absent as well; every caller discards
/// empty parts, so this keeps the call sites uniform.
pub fn trim_mask(value: &str) -> Option<&str> {
    if value.is_empty() || is_masked(value) {
        None
    } else {
        Some(value)
    }
}
