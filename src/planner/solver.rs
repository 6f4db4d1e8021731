//! Solver delegation.
//!
//! The planner never searches on its own; it hands a [`PlanProblem`] to
//! a [`PlanSolver`] capability. The default backend formulates the
//! problem as a 0/1 integer program with `good_lp` on the bundled
//! pure-Rust `microlp` solver.
//!
//! Outcome classification matters more than the raw result: a proven
//! empty feasible region (`Infeasible`) is a normal "no plan" answer,
//! while a backend error or panic (`Fault`) is an operational problem.
//! Both surface as an empty plan to the caller, but they are kept
//! distinct here for observability.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Duration;

use good_lp::{
    default_solver, variable, variables, Expression, ResolutionError, Solution, SolverModel,
};
use log::{debug, warn};

use crate::planner::PlanProblem;

/// Solver invocation settings.
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Optional wall-clock budget, forwarded to backends that support
    /// one. The bundled microlp backend solves to completion (in-scope
    /// catalogs take milliseconds) and ignores it.
    pub time_limit: Option<Duration>,
}

impl SolverConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a wall-clock budget for the solve.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

/// Result of one solve call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A maximizing valuation was found; `chosen` holds selected
    /// catalog positions in ascending order.
    Solved { chosen: Vec<usize> },
    /// The constraint set admits no valuation. A normal outcome.
    Infeasible,
    /// The backend failed (error, panic, or exhausted budget).
    Fault(String),
}

/// A boolean optimization capability.
///
/// Implementations maximize `Σ scores[i]·x[i]` subject to the problem's
/// hard constraints. One call per request; no partial results.
pub trait PlanSolver {
    /// Solves the problem, blocking until a definitive outcome.
    fn solve(&self, problem: &PlanProblem, config: &SolverConfig) -> SolveOutcome;
}

/// Default ILP backend on `good_lp`/`microlp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IlpSolver;

impl IlpSolver {
    /// Creates a new ILP solver.
    pub fn new() -> Self {
        Self
    }
}

impl PlanSolver for IlpSolver {
    fn solve(&self, problem: &PlanProblem, config: &SolverConfig) -> SolveOutcome {
        if problem.n_vars == 0 {
            // No courses: the empty valuation is the only candidate.
            return if problem.min_credits <= 0 {
                SolveOutcome::Solved { chosen: Vec::new() }
            } else {
                SolveOutcome::Infeasible
            };
        }

        if let Some(limit) = config.time_limit {
            debug!("time limit {limit:?} requested; microlp solves to completion");
        }
        debug!(
            "solving: {} vars, {} exclusions, {} fixed, credits in [{}, {}]",
            problem.n_vars,
            problem.exclusions.len(),
            problem.fixed.len(),
            problem.min_credits,
            problem.max_credits
        );

        let result = catch_unwind(AssertUnwindSafe(|| run_ilp(problem)));
        match result {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!("ILP backend panicked");
                SolveOutcome::Fault("ILP backend panicked".into())
            }
        }
    }
}

fn run_ilp(problem: &PlanProblem) -> SolveOutcome {
    let mut vars = variables!();
    let xs: Vec<_> = (0..problem.n_vars)
        .map(|i| vars.add(variable().binary().name(format!("course_{i}"))))
        .collect();

    let objective = xs
        .iter()
        .enumerate()
        .fold(Expression::from(0.0), |acc, (i, &xi)| {
            acc + problem.scores[i] as f64 * xi
        });

    let mut prob = vars.maximise(objective).using(default_solver);

    for &f in &problem.fixed {
        prob.add_constraint(Expression::from(xs[f]).eq(1.0));
    }

    let count = xs
        .iter()
        .fold(Expression::from(0.0), |acc, &xi| acc + xi);
    prob.add_constraint(count.leq(problem.max_courses as f64));

    for &(i, j) in &problem.exclusions {
        prob.add_constraint((Expression::from(xs[i]) + xs[j]).leq(1.0));
    }

    let credits = xs
        .iter()
        .enumerate()
        .fold(Expression::from(0.0), |acc, (i, &xi)| {
            acc + problem.credits[i] as f64 * xi
        });
    prob.add_constraint(credits.clone().geq(problem.min_credits as f64));
    prob.add_constraint(credits.leq(problem.max_credits as f64));

    match prob.solve() {
        Ok(solution) => {
            let chosen = xs
                .iter()
                .enumerate()
                .filter(|&(_, &xi)| solution.value(xi) >= 0.5)
                .map(|(i, _)| i)
                .collect();
            SolveOutcome::Solved { chosen }
        }
        Err(ResolutionError::Infeasible) => SolveOutcome::Infeasible,
        Err(other) => SolveOutcome::Fault(other.to_string()),
    }
}
