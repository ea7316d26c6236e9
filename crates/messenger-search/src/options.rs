//! Search tuning configuration

use serde::Deserialize;

/// Tuning knobs for the fuzzy search path
#[derive(Debug, Clone, Deserialize)]
pub struct SearchOptions {
    /// Maximum number of hits returned; `None` means unbounded
    #[serde(default = "default_limit")]
    pub limit: Option<usize>,
    /// Hits scoring below this are dropped
    #[serde(default = "default_threshold")]
    pub threshold: i64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            threshold: default_threshold(),
        }
    }
}

// Default value functions
fn default_limit() -> Option<usize> {
    Some(25)
}

fn default_threshold() -> i64 {
    0
}
