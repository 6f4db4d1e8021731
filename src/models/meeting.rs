//! Weekly meeting interval model.
//!
//! A meeting is one recurring class session: a weekday plus a time
//! interval in fractional hours (e.g. 9.5 = 09:30).
//!
//! # Overlap Semantics
//! Intervals are open at the touch point: a meeting ending at 10.5 does
//! not overlap one starting at 10.5. Two meetings overlap iff they share
//! a day AND `start < other.end && end > other.start`.

use serde::{Deserialize, Serialize};

/// A weekly class session on one weekday.
///
/// Times are fractional hours from midnight. Invariant: `end > start`
/// (enforced by catalog validation, not by this type).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Meeting {
    /// Weekday, 0 = Monday .. 6 = Sunday.
    pub day: u8,
    /// Session start (hours, inclusive).
    pub start: f64,
    /// Session end (hours, exclusive).
    pub end: f64,
}

impl Meeting {
    /// Creates a new meeting.
    pub fn new(day: u8, start: f64, end: f64) -> Self {
        Self { day, start, end }
    }

    /// Duration of this session (hours).
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether two meetings overlap in time on the same day.
    ///
    /// Touching endpoints (one ending exactly when the other starts)
    /// do not count as overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day && self.start < other.end && self.end > other.start
    }
}
