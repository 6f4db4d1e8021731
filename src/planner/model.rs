//! Constraint model construction.
//!
//! Builds a solver-independent description of one planning call: a
//! boolean decision variable per catalog course plus the hard
//! constraints a plan must satisfy. Keeping the model as plain data
//! lets any [`crate::planner::PlanSolver`] backend realize it, and lets
//! tests inspect the constraint set without running a solver.

use crate::conflict::conflicting_pairs;
use crate::models::{Catalog, Preferences};
use crate::planner::MAX_COURSES;

/// A boolean selection problem over the catalog.
///
/// Variable `i` corresponds to catalog position `i`. A valuation is
/// feasible when:
/// - every position in `fixed` is selected
/// - at most one variable of each `exclusions` pair is selected
/// - at most `max_courses` variables are selected
/// - `Σ credits[i]·x[i]` lies in `[min_credits, max_credits]`
///
/// The objective is `maximize Σ scores[i]·x[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanProblem {
    /// Number of decision variables (catalog size).
    pub n_vars: usize,
    /// Per-course objective scores, catalog order.
    pub scores: Vec<i64>,
    /// Positions forced to selected (confirmed caller picks).
    pub fixed: Vec<usize>,
    /// Conflicting pairs `(i, j)` with `i < j`; at most one selectable.
    pub exclusions: Vec<(usize, usize)>,
    /// Per-course credit values, catalog order.
    pub credits: Vec<i64>,
    /// Credit-load lower bound (inclusive).
    pub min_credits: i64,
    /// Credit-load upper bound (inclusive).
    pub max_credits: i64,
    /// Plan size ceiling.
    pub max_courses: usize,
}

/// Builds the constraint model for one request.
///
/// Spans the entire catalog, not just the requested subset: the solver
/// is free to fill the plan with any non-conflicting courses.
pub fn build_problem(
    catalog: &Catalog,
    fixed: Vec<usize>,
    preferences: &Preferences,
    scores: Vec<i64>,
) -> PlanProblem {
    debug_assert_eq!(scores.len(), catalog.len());

    PlanProblem {
        n_vars: catalog.len(),
        scores,
        fixed,
        exclusions: conflicting_pairs(catalog),
        credits: catalog
            .courses()
            .iter()
            .map(|c| i64::from(c.credits))
            .collect(),
        min_credits: i64::from(preferences.min_credits),
        max_credits: i64::from(preferences.max_credits),
        max_courses: MAX_COURSES,
    }
}

impl PlanProblem {
    /// Whether a valuation (selected positions) satisfies every hard
    /// constraint. Used by tests and stub solvers.
    pub fn is_feasible(&self, selected: &[usize]) -> bool {
        if selected.len() > self.max_courses {
            return false;
        }
        if self.fixed.iter().any(|f| !selected.contains(f)) {
            return false;
        }
        if self
            .exclusions
            .iter()
            .any(|(i, j)| selected.contains(i) && selected.contains(j))
        {
            return false;
        }
        let credits: i64 = selected.iter().map(|&i| self.credits[i]).sum();
        credits >= self.min_credits && credits <= self.max_credits
    }

    /// Objective value of a valuation.
    pub fn objective(&self, selected: &[usize]) -> i64 {
        selected.iter().map(|&i| self.scores[i]).sum()
    }
}
