//! Soft scheduling preferences.
//!
//! Preferences shape the objective only; they never make a request
//! invalid. Field names and defaults follow the external request
//! contract (camelCase JSON, missing keys take defaults).

use serde::{Deserialize, Serialize};

/// Caller preferences for plan generation.
///
/// Credit bounds are hard constraints; the `avoid_*`/`prefer_*` flags
/// are soft penalties applied per matching meeting (see
/// [`crate::planner::ScoreWeights`] for the magnitudes).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    /// Minimum total credits (inclusive).
    pub min_credits: u32,
    /// Maximum total credits (inclusive).
    pub max_credits: u32,
    /// Penalize meetings starting before the morning cutoff.
    pub avoid_morning: bool,
    /// Penalize meetings ending after the evening cutoff.
    pub avoid_evening: bool,
    /// Penalize meetings overlapping the lunch window.
    pub prefer_long_break: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            min_credits: 12,
            max_credits: 18,
            avoid_morning: false,
            avoid_evening: false,
            prefer_long_break: false,
        }
    }
}

impl Preferences {
    /// Creates preferences with the given credit bounds.
    pub fn with_credit_bounds(min_credits: u32, max_credits: u32) -> Self {
        Self {
            min_credits,
            max_credits,
            ..Self::default()
        }
    }
}
