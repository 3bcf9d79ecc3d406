//! Display formatting and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! views and edit outcomes are wrapped in small types that pick the right
//! shape for their context. View wrappers also implement `Serialize`, which
//! is what the CLI prints under `--json`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  View & Result  │    │   Markdown or   │
//! │ (Plan, Phase..) │───▶│    Wrappers     │───▶│      JSON       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`views`]: Read-only plan views (Overview, Current, NextTask, ...)
//! - [`collections`]: Task lists (FutureTasks, CompletedTasks, SpecialTasks)
//! - [`results`]: Edit outcomes (CreateResult, UpdateResult, DeleteResult,
//!   CompactResult)
//! - [`status`]: Confirmation messages and validation results
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use pv_core::{display::{DeleteResult, OperationStatus}, models::Task};
//!
//! let removed = DeleteResult::new(Task::new("1.1.2", "Write docs"));
//! assert_eq!(removed.to_string(), "✅ Removed task [1.1.2]\n");
//!
//! let status = OperationStatus::success("plan.json is valid".to_string());
//! assert_eq!(status.to_string(), "✅ plan.json is valid\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;
pub mod views;

// Re-export commonly used types for convenience
pub use collections::{CompletedTasks, FutureTasks, SpecialTasks};
pub use datetime::{Date, LocalDateTime};
pub use results::{CompactResult, CreateResult, DeleteResult, PlanFile, UpdateResult};
pub use status::{OperationStatus, ValidationResult};
pub use views::{ActivePhase, Current, Entity, NextTask, Overview};
