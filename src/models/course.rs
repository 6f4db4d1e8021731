//! Course (catalog entry) model.
//!
//! A course is an immutable catalog record: identity, credit value, and
//! the weekly meetings it occupies. Courses are created once at catalog
//! load time and never mutated during planning.

use serde::{Deserialize, Serialize};

use super::Meeting;

/// A course offered in the catalog.
///
/// Credits drive both the credit-load constraint and the base objective
/// score. The meeting list is expected to be non-empty and ordered; the
/// catalog validates this at load time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Course code (e.g. "CS301").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Credit value (positive).
    pub credits: u32,
    /// Offering department.
    pub department: String,
    /// Weekly sessions this course occupies.
    pub meetings: Vec<Meeting>,
}

impl Course {
    /// Creates a new course with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: String::new(),
            name: String::new(),
            credits: 0,
            department: String::new(),
            meetings: Vec::new(),
        }
    }

    /// Sets the course code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the credit value.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Sets the offering department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Adds a weekly meeting.
    pub fn with_meeting(mut self, day: u8, start: f64, end: f64) -> Self {
        self.meetings.push(Meeting::new(day, start, end));
        self
    }

    /// Number of weekly sessions.
    pub fn meeting_count(&self) -> usize {
        self.meetings.len()
    }

    /// Whether any meeting falls on the given weekday.
    pub fn meets_on(&self, day: u8) -> bool {
        self.meetings.iter().any(|m| m.day == day)
    }
}
