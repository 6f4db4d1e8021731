//! Catalog integrity validation.
//!
//! Checks structural integrity of course records before any planning
//! call can run. Detects:
//! - Duplicate course IDs
//! - Courses with no meetings
//! - Meetings with `end <= start`
//! - Weekdays outside `0..=6`
//! - Zero-credit courses
//!
//! A malformed catalog is a fatal configuration error: it is rejected
//! here in full (all problems reported at once), and the planner never
//! attempts partial repair.

use std::collections::HashSet;

use crate::models::Course;

/// Validation result.
pub type CatalogValidation = Result<(), Vec<CatalogError>>;

/// A catalog integrity error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct CatalogError {
    /// Error category.
    pub kind: CatalogErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of catalog errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogErrorKind {
    /// Two courses share the same ID.
    DuplicateId,
    /// A course has no meetings.
    NoMeetings,
    /// A meeting ends at or before its start.
    InvalidInterval,
    /// A meeting's weekday is outside 0..=6.
    InvalidDay,
    /// A course carries zero credits.
    ZeroCredits,
}

impl CatalogError {
    fn new(kind: CatalogErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a course catalog.
///
/// Checks:
/// 1. No duplicate course IDs
/// 2. Every course has at least one meeting
/// 3. Every meeting satisfies `end > start`
/// 4. Every meeting's day is in `0..=6`
/// 5. Every course has positive credits
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(courses: &[Course]) -> CatalogValidation {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for course in courses {
        if !ids.insert(course.id.as_str()) {
            errors.push(CatalogError::new(
                CatalogErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", course.id),
            ));
        }

        if course.meetings.is_empty() {
            errors.push(CatalogError::new(
                CatalogErrorKind::NoMeetings,
                format!("Course '{}' has no meetings", course.id),
            ));
        }

        if course.credits == 0 {
            errors.push(CatalogError::new(
                CatalogErrorKind::ZeroCredits,
                format!("Course '{}' has zero credits", course.id),
            ));
        }

        for (i, m) in course.meetings.iter().enumerate() {
            if m.end <= m.start {
                errors.push(CatalogError::new(
                    CatalogErrorKind::InvalidInterval,
                    format!(
                        "Course '{}' meeting {} has end {} <= start {}",
                        course.id, i, m.end, m.start
                    ),
                ));
            }
            if m.day > 6 {
                errors.push(CatalogError::new(
                    CatalogErrorKind::InvalidDay,
                    format!("Course '{}' meeting {} has day {}", course.id, i, m.day),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
