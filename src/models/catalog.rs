//! Course catalog model.
//!
//! The catalog is the read-only universe of courses a plan may draw
//! from. Its order is the load order and is significant: seeded noise
//! is consumed in catalog order, so two catalogs with the same courses
//! in different orders are different planning inputs.
//!
//! Construction validates integrity up front (see [`crate::validation`]);
//! a malformed catalog never reaches a planning call.

use std::collections::HashMap;

use crate::models::Course;
use crate::validation::{validate_catalog, CatalogError};

/// An ordered, validated course catalog.
///
/// Shared read-only across planning calls; lookups by ID resolve to a
/// stable position in the load order.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from loaded courses, validating integrity.
    ///
    /// # Returns
    /// `Err(errors)` with all detected integrity problems if the input
    /// is malformed. This is a fatal configuration error for the caller.
    pub fn new(courses: Vec<Course>) -> Result<Self, Vec<CatalogError>> {
        validate_catalog(&courses)?;

        let by_id = courses
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();

        Ok(Self { courses, by_id })
    }

    /// Courses in load order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Looks up a course by ID.
    pub fn get(&self, id: &str) -> Option<&Course> {
        self.by_id.get(id).map(|&i| &self.courses[i])
    }

    /// Position of a course in the load order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
