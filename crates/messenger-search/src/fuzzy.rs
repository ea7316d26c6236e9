//! Fuzzy matcher - subsequence scoring over prepared targets
//!
//! Targets are folded once at preparation time and queries once per
//! search, so repeated scoring never re-normalizes either side. A query
//! matches when its characters appear in order inside the target;
//! ranking rewards tight, word-aligned alignments over scattered ones.

use crate::normalize::to_nfd;

/// Points per matched character
const SCORE_MATCH: i64 = 1;
/// Bonus when a match directly follows the previous one
const BONUS_CONSECUTIVE: i64 = 12;
/// Bonus when a match lands on a word boundary
const BONUS_WORD_START: i64 = 10;
/// Bonus when the query covers the entire target
const BONUS_FULL_MATCH: i64 = 24;

/// Search target pre-processed for repeated scoring.
///
/// Callers hand in already-normalized text (the key builder runs NFD
/// before preparing); preparation adds the case fold. The original
/// string is kept verbatim for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prepared {
    target: String,
    folded: Vec<char>,
}

impl Prepared {
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let folded = target.chars().flat_map(char::to_lowercase).collect();
        Self { target, folded }
    }

    /// The original target text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }
}

/// Search query folded once (NFD + lowercase) for repeated scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    folded: Vec<char>,
}

impl Query {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let folded = to_nfd(raw).chars().flat_map(char::to_lowercase).collect();
        Self {
            raw: raw.to_string(),
            folded,
        }
    }

    /// The query as the caller typed it
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }
}

/// Score `query` against a prepared target.
///
/// Returns `None` unless every query character appears, in order, in
/// the target; otherwise the score of the best alignment, higher being
/// better. Empty queries never match. Every feasible position of the
/// first query character is tried, so a later, word-aligned occurrence
/// beats an earlier scattered one.
#[must_use]
pub fn fuzzy_match(target: &Prepared, query: &Query) -> Option<i64> {
    if query.folded.is_empty() || query.folded.len() > target.folded.len() {
        return None;
    }

    let mut best: Option<i64> = None;
    for start in 0..=(target.folded.len() - query.folded.len()) {
        if target.folded[start] != query.folded[0] {
            continue;
        }
        match match_from(target, query, start) {
            Some(score) => best = Some(best.map_or(score, |b| b.max(score))),
            // Greedy matching consumes the earliest possible positions;
            // when it runs out of target here, every later start does too
            None => break,
        }
    }
    best
}

/// Greedily align the query from a fixed first-character position
fn match_from(target: &Prepared, query: &Query, start: usize) -> Option<i64> {
    let mut positions = Vec::with_capacity(query.folded.len());
    positions.push(start);

    let mut at = start + 1;
    for &qc in &query.folded[1..] {
        loop {
            let tc = *target.folded.get(at)?;
            at += 1;
            if tc == qc {
                positions.push(at - 1);
                break;
            }
        }
    }

    Some(score_alignment(target, &positions))
}

fn score_alignment(target: &Prepared, positions: &[usize]) -> i64 {
    let mut score = 0;
    for (i, &pos) in positions.iter().enumerate() {
        score += SCORE_MATCH;
        if i > 0 && positions[i - 1] + 1 == pos {
            score += BONUS_CONSECUTIVE;
        }
        if pos == 0 || !target.folded[pos - 1].is_alphanumeric() {
            score += BONUS_WORD_START;
        }
    }

    // Penalize matches that begin deep inside the target
    score -= positions[0] as i64;

    // Penalize a long unmatched tail, at half weight
    let last = positions[positions.len() - 1];
    score -= ((target.folded.len() - 1 - last) / 2) as i64;

    if positions.len() == target.folded.len() {
        score += BONUS_FULL_MATCH;
    }

    score
}
