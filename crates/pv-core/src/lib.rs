//! Core library for the `pv` plan viewer.
//!
//! This crate holds the plan state engine behind `plan.json`: the document
//! model, progress rollups, partial-id lookup, dependency-aware task
//! selection, validation and the mutation operations. Engine modules are
//! pure; they take a [`Plan`] and return a new one and never touch the file
//! system or print. File access lives in [`store`] and is coordinated by
//! the [`Planner`].
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): plain data mirroring the document
//! - **Display Wrappers** ([`display`]): markdown formatting for views and
//!   edit confirmations
//! - **Terminal Rendering**: done by the CLI's terminal renderer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pv_core::{params::{AddTask, SetStatus}, PlannerBuilder, Status};
//!
//! # fn example() -> pv_core::Result<()> {
//! let planner = PlannerBuilder::new()
//!     .with_plan_path(Some("plan.json"))
//!     .build();
//!
//! // Read-only view
//! println!("{}", planner.next_task()?);
//!
//! // Edit, persisting the result
//! let created = planner.add_task(&AddTask {
//!     phase: "1".to_string(),
//!     title: "Write docs".to_string(),
//!     agent: None,
//!     deps: vec![],
//! })?;
//! println!("{created}");
//!
//! planner.set_status(&SetStatus {
//!     id: "1.1.1".to_string(),
//!     status: Status::Completed,
//! })?;
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod id;
pub mod locator;
pub mod models;
pub mod ops;
pub mod params;
pub mod planner;
pub mod progress;
#[cfg(feature = "schema")]
pub mod schema;
pub mod selector;
pub mod store;
pub mod validate;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use display::{CreateResult, DeleteResult, LocalDateTime, OperationStatus, UpdateResult};
pub use error::{PlanError, Result};
pub use locator::{Found, TaskRef};
pub use models::{Phase, Plan, Priority, SpecialPhase, Status, Task};
pub use ops::Edit;
pub use planner::{Planner, PlannerBuilder};
pub use validate::Report;
