//! Fixed-selection resolution.
//!
//! The caller's selected course IDs are confirmed greedily, in request
//! order: an ID is accepted only if its course is conflict-free against
//! every already-accepted course. Earlier IDs therefore win over later
//! conflicting ones. Confirmed courses are forced into the plan by the
//! constraint model and shielded from objective noise.

use crate::conflict::courses_conflict;
use crate::models::Catalog;
use crate::planner::MAX_COURSES;

/// Resolves the caller's selections into a conflict-free fixed set.
///
/// Only the first [`MAX_COURSES`] IDs are considered. IDs absent from
/// the catalog are silently dropped — a documented contract, not an
/// error. Returns catalog positions in acceptance order; deterministic
/// for a given catalog and ID order.
pub fn resolve_fixed(catalog: &Catalog, selected_ids: &[String]) -> Vec<usize> {
    let mut fixed: Vec<usize> = Vec::new();

    for id in selected_ids.iter().take(MAX_COURSES) {
        let Some(pos) = catalog.position(id) else {
            continue;
        };

        let candidate = &catalog.courses()[pos];
        let clashes = fixed
            .iter()
            .any(|&f| courses_conflict(candidate, &catalog.courses()[f]));

        if !clashes {
            fixed.push(pos);
        }
    }

    fixed
}
