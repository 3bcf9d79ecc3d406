//! Data models for plans, phases and tasks.
//!
//! These types mirror the `plan.json` document one to one. Field names and
//! enum values are the document's own, so an existing file deserializes
//! directly into [`Plan`]. Every struct carries a flattened `extra` map,
//! which keeps fields unknown to this version intact across a load/save
//! cycle.
//!
//! Derived values (`Phase::status`, `Phase::progress`, `Plan::summary`) are
//! stored in the document for readers but never trusted: they are rebuilt
//! by [`crate::progress::recompute`] on load and before every save.
//!
//! Display implementations live in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use pv_core::models::{Plan, Status};
//! use serde_json::json;
//!
//! let plan = Plan::from_value(json!({
//!     "meta": {
//!         "project": "Demo",
//!         "version": "1.0.0",
//!         "created_at": "2025-01-01T00:00:00Z",
//!         "updated_at": "2025-01-01T00:00:00Z"
//!     },
//!     "phases": [{
//!         "id": "0",
//!         "name": "Setup",
//!         "tasks": [
//!             { "id": "0.1.1", "title": "Init repo", "status": "completed" },
//!             { "id": "0.1.2", "title": "Add CI", "status": "pending" }
//!         ]
//!     }]
//! }))
//! .unwrap();
//!
//! assert_eq!(plan.phases[0].status, Status::InProgress);
//! assert_eq!(plan.summary.overall_progress, 50.0);
//! ```

pub mod phase;
pub mod plan;
pub mod status;
pub mod summary;
pub mod task;
pub mod views;

#[cfg(test)]
mod tests;

pub use phase::{Phase, Progress, SpecialPhase};
pub use plan::{Decisions, Meta, Plan};
pub use status::{Priority, Status};
pub use summary::Summary;
pub use task::{Task, Tracking};
pub use views::{CompletedTask, CurrentView, FutureTask, Readiness, TaskView};
