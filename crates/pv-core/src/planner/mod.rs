//! High-level planner API over one `plan.json` file.
//!
//! The planner is the coordinator between the CLI and the engine. Every
//! call reads the document fresh, runs one engine operation, and for edit
//! operations writes the new document back unless the planner is in
//! dry-run mode. No plan is cached between calls.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │    Plan ops     │    │      Store      │
//! │ (view_handlers, │───▶│ (load, commit,  │───▶│ (atomic write,  │
//! │  edit_handlers) │    │  backup)        │    │  backups)       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Display wrappers      Engine + timing         File system
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`plan_ops`]: Loading, saving and backing up the document
//! - [`view_handlers`]: Read-only views returning display wrappers
//! - [`edit_handlers`]: Mutations returning display wrappers
//!
//! # Usage Examples
//!
//! ```rust
//! use pv_core::{params::{AddPhase, InitPlan}, PlannerBuilder};
//!
//! # fn example() -> pv_core::Result<()> {
//! let dir = tempfile::tempdir().unwrap();
//! let planner = PlannerBuilder::new()
//!     .with_plan_path(Some(dir.path().join("plan.json")))
//!     .build();
//!
//! planner.init(&InitPlan { project: "Demo".to_string(), force: false })?;
//! let added = planner.add_phase(&AddPhase { name: "Setup".to_string(), description: None })?;
//! assert_eq!(added.to_string(), "✅ Added Phase 0: Setup\n");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::path::{Path, PathBuf};

pub mod builder;
pub mod edit_handlers;
pub mod plan_ops;
pub mod view_handlers;


pub use builder::PlannerBuilder;

/// Main planner interface for viewing and editing one plan file.
#[derive(Debug, Clone)]
pub struct Planner {
    pub(crate) plan_path: PathBuf,
    pub(crate) backup_dir: PathBuf,
    pub(crate) max_backups: usize,
    pub(crate) dry_run: bool,
}

impl Planner {
    /// Path of the plan document.
    pub fn plan_path(&self) -> &Path {
        &self.plan_path
    }

    /// Directory that receives backups before destructive edits.
    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// True when edits are computed but never written.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}
