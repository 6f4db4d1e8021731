//! Seeded course timetable generation.
//!
//! Generates conflict-free weekly course plans from a fixed catalog, a
//! caller's preferred course subset, and soft scheduling preferences.
//! The objective is deliberately randomized: a seed drives per-course
//! noise and a favored "lucky" weekday, so repeated calls with
//! different seeds return distinct high-quality alternatives while the
//! same seed always reproduces the same plan.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Meeting`, `Course`, `Catalog`,
//!   `Preferences`, `PlanRequest`, `Plan`
//! - **`conflict`**: Pairwise time-conflict detection (open intervals)
//! - **`validation`**: Catalog integrity checks (fatal load-time errors)
//! - **`planner`**: Fixed-selection resolution, scoring, constraint
//!   model construction, and ILP solver delegation
//!
//! # Architecture
//!
//! The crate owns the constraint-and-objective engine only. Catalog
//! storage and parsing, transport, and UI are producers/consumers of
//! the `models` types. Search is delegated to an ILP backend behind the
//! `planner::PlanSolver` seam; plans are never persisted here.

pub mod conflict;
pub mod models;
pub mod planner;
pub mod validation;
