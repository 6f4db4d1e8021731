//! Timetabling domain models.
//!
//! Core data types for course timetable generation: the immutable
//! catalog side (`Meeting`, `Course`, `Catalog`) and the per-call
//! request/response side (`Preferences`, `PlanRequest`, `Plan`).
//!
//! All types derive serde with camelCase field names where they cross
//! the external request/response contract.

mod catalog;
mod course;
mod meeting;
mod plan;
mod preferences;

pub use catalog::Catalog;
pub use course::Course;
pub use meeting::Meeting;
pub use plan::{Plan, PlanRequest};
pub use preferences::Preferences;
