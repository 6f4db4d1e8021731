//! Plan request and plan (solution) models.
//!
//! A request is constructed per call and discarded afterwards; a plan
//! is the per-call output and is never persisted by this crate.

use serde::{Deserialize, Serialize};

use super::{Course, Preferences};

/// Input container for one plan generation call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanRequest {
    /// Caller-selected course IDs, in priority order.
    /// Only the first 7 are honored; unknown IDs are silently dropped.
    pub selected_ids: Vec<String>,
    /// Soft preferences and credit bounds.
    pub preferences: Preferences,
    /// Seed for noise and lucky-day selection. Same seed, same plan.
    pub seed: u64,
}

impl PlanRequest {
    /// Creates an empty request (no selections, default preferences, seed 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selected course IDs.
    pub fn with_selected_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the preferences.
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A generated timetable: a conflict-free course subset in catalog order.
///
/// Empty when no feasible plan exists — an expected outcome, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Courses in the plan, in catalog order.
    pub courses: Vec<Course>,
}

impl Plan {
    /// Creates an empty plan.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a plan from courses.
    pub fn from_courses(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Total credit load.
    pub fn total_credits(&self) -> u32 {
        self.courses.iter().map(|c| c.credits).sum()
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the plan is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Whether the plan contains the given course ID.
    pub fn contains(&self, id: &str) -> bool {
        self.courses.iter().any(|c| c.id == id)
    }

    /// Course IDs in plan order.
    pub fn course_ids(&self) -> Vec<&str> {
        self.courses.iter().map(|c| c.id.as_str()).collect()
    }
}
