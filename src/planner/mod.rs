//! Plan generation pipeline.
//!
//! One call runs: fixed-selection resolution → score composition →
//! constraint model construction → solver delegation → extraction.
//! Everything a call creates (RNG, scores, model) is scoped to that
//! call, so concurrent calls sharing a read-only [`Catalog`] cannot
//! interfere.
//!
//! # Example
//!
//! ```
//! use course_plan::models::{Catalog, Course, PlanRequest, Preferences};
//! use course_plan::planner::Planner;
//!
//! let catalog = Catalog::new(vec![
//!     Course::new("1").with_credits(3).with_meeting(0, 9.0, 10.5),
//!     Course::new("2").with_credits(3).with_meeting(1, 11.0, 12.5),
//! ]).unwrap();
//!
//! let request = PlanRequest::new()
//!     .with_preferences(Preferences::with_credit_bounds(6, 6));
//! let result = Planner::new().generate(&catalog, &request);
//!
//! assert_eq!(result.plan.len(), 2);
//! ```

mod fixed;
mod model;
mod objective;
mod solver;

pub use fixed::resolve_fixed;
pub use model::{build_problem, PlanProblem};
pub use objective::{compose_scores, lucky_day, ScoreWeights};
pub use solver::{IlpSolver, PlanSolver, SolveOutcome, SolverConfig};

use log::{debug, info, warn};

use crate::models::{Catalog, Plan, PlanRequest};

/// Hard ceiling on plan size, and the number of caller selections
/// honored. An upper bound, never a target.
pub const MAX_COURSES: usize = 7;

/// Terminal status of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStatus {
    /// The plan is a proven maximum of the objective.
    Optimal,
    /// The plan satisfies all constraints but optimality is unproven
    /// (anytime backends only; the default ILP backend proves).
    Feasible,
    /// No valuation satisfies the constraints. Expected outcome.
    Infeasible,
    /// The solver itself failed. Distinct from [`SolveStatus::Infeasible`]
    /// for observability, though both yield an empty plan externally.
    Fault(String),
}

/// Outcome of one generation call: the plan plus how it terminated.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanResult {
    /// The generated plan; empty unless the status is a success.
    pub plan: Plan,
    /// How the solve terminated.
    pub status: SolveStatus,
}

impl PlanResult {
    /// Whether a plan was produced.
    pub fn is_planned(&self) -> bool {
        matches!(self.status, SolveStatus::Optimal | SolveStatus::Feasible)
    }

    /// Collapses to the external contract: the plan on success, an
    /// empty plan on infeasibility or solver fault.
    pub fn into_plan(self) -> Plan {
        self.plan
    }
}

/// Timetable plan generator.
///
/// Holds tuning only ([`ScoreWeights`], [`SolverConfig`]); all per-call
/// state lives inside [`Planner::generate`]. The catalog is passed per
/// call so one planner can serve many catalogs.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    weights: ScoreWeights,
    config: SolverConfig,
}

impl Planner {
    /// Creates a planner with default weights and solver settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the scoring weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Overrides the solver settings.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Generates a plan with the default ILP backend.
    pub fn generate(&self, catalog: &Catalog, request: &PlanRequest) -> PlanResult {
        self.generate_with(&IlpSolver::new(), catalog, request)
    }

    /// Generates a plan with a caller-supplied solver backend.
    pub fn generate_with<S: PlanSolver>(
        &self,
        solver: &S,
        catalog: &Catalog,
        request: &PlanRequest,
    ) -> PlanResult {
        let fixed = resolve_fixed(catalog, &request.selected_ids);
        debug!(
            "request: {} selected ids, {} confirmed fixed, seed {}, lucky day {}",
            request.selected_ids.len(),
            fixed.len(),
            request.seed,
            lucky_day(request.seed)
        );

        let scores = compose_scores(
            catalog,
            &fixed,
            &request.preferences,
            request.seed,
            &self.weights,
        );
        let problem = build_problem(catalog, fixed, &request.preferences, scores);

        match solver.solve(&problem, &self.config) {
            SolveOutcome::Solved { chosen } => {
                let courses = chosen
                    .iter()
                    .map(|&i| catalog.courses()[i].clone())
                    .collect();
                let plan = Plan::from_courses(courses);
                info!(
                    "planned {} courses, {} credits",
                    plan.len(),
                    plan.total_credits()
                );
                PlanResult {
                    plan,
                    status: SolveStatus::Optimal,
                }
            }
            SolveOutcome::Infeasible => {
                info!("no feasible plan for this request");
                PlanResult {
                    plan: Plan::empty(),
                    status: SolveStatus::Infeasible,
                }
            }
            SolveOutcome::Fault(message) => {
                warn!("solver fault: {message}");
                PlanResult {
                    plan: Plan::empty(),
                    status: SolveStatus::Fault(message),
                }
            }
        }
    }
}
