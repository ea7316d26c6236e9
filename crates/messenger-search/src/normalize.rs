//! Unicode canonicalization for match input

use unicode_normalization::UnicodeNormalization;

/// Decompose text into canonical decomposition form (NFD).
///
/// Precomposed glyphs and base + combining-mark sequences of the same
/// character become byte-identical, so accented text compares equal
/// regardless of how the producer encoded it. Pure and idempotent.
#[must_use]
pub fn to_nfd(text: &str) -> String {
    text.nfd().collect::<String>()
}
