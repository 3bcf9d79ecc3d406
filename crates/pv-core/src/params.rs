//! Parameter structures for planner operations.
//!
//! These are plain structs with no framework derives. The CLI defines its
//! own clap argument types and converts them into these with `From`, which
//! keeps argument parsing concerns out of the engine.
//!
//! ```ignore
//! // In the CLI
//! #[derive(Args)]
//! pub struct AddPhaseArgs {
//!     pub name: String,
//!     #[arg(long = "desc")]
//!     pub description: Option<String>,
//! }
//!
//! impl From<AddPhaseArgs> for AddPhase {
//!     fn from(args: AddPhaseArgs) -> Self {
//!         AddPhase { name: args.name, description: args.description }
//!     }
//! }
//! ```

use crate::{
    error::Result,
    models::{SpecialPhase, Status},
    ops::TaskField,
    selector::DEFAULT_RECENT_COUNT,
};

/// Parameters for any operation that needs a single task or phase id.
#[derive(Debug, Clone, Default)]
pub struct Id {
    /// Full id or unambiguous prefix
    pub id: String,
}

/// Parameters for creating a new plan file.
#[derive(Debug, Clone, Default)]
pub struct InitPlan {
    /// Project name written to `meta.project`
    pub project: String,
    /// Overwrite an existing file
    pub force: bool,
}

/// Parameters for adding a regular phase.
#[derive(Debug, Clone, Default)]
pub struct AddPhase {
    pub name: String,
    pub description: Option<String>,
}

/// Parameters for adding a task to a phase.
#[derive(Debug, Clone, Default)]
pub struct AddTask {
    /// Id of the target phase
    pub phase: String,
    pub title: String,
    /// Optional agent label
    pub agent: Option<String>,
    /// Ids of tasks that must be completed first
    pub deps: Vec<String>,
}

impl AddTask {
    /// Splits a comma-separated dependency list, dropping blank entries.
    ///
    /// ```rust
    /// use pv_core::params::AddTask;
    ///
    /// assert_eq!(AddTask::parse_deps("1.1.1, 1.1.2,"), vec!["1.1.1", "1.1.2"]);
    /// assert!(AddTask::parse_deps("").is_empty());
    /// ```
    pub fn parse_deps(deps: &str) -> Vec<String> {
        deps.split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Parameters for setting a named task field.
#[derive(Debug, Clone, Default)]
pub struct SetField {
    /// Task id or unambiguous prefix
    pub id: String,
    /// One of `status`, `agent`, `title`, `priority`, `notes`
    pub field: String,
    pub value: String,
}

impl SetField {
    /// Parses the field name.
    ///
    /// # Errors
    ///
    /// * `PlanError::InvalidInput` - When the field name is unknown
    pub fn parsed_field(&self) -> Result<TaskField> {
        self.field.parse()
    }
}

/// Parameters for the status shortcuts (`done`, `start`, `block`, `skip`).
#[derive(Debug, Clone)]
pub struct SetStatus {
    pub id: String,
    pub status: Status,
}

/// Parameters for moving a task into a special phase.
#[derive(Debug, Clone)]
pub struct MoveTask {
    /// Existing task id, or the title of a task to create
    pub query: String,
    pub target: SpecialPhase,
    /// Recorded in the task's notes when non-blank
    pub reason: Option<String>,
}

/// Parameters for compacting completed tasks.
#[derive(Debug, Clone, Default)]
pub struct Compact {
    /// Overrides the planner's backup limit
    pub max_backups: Option<usize>,
}

/// Parameters for the future-tasks view.
#[derive(Debug, Clone)]
pub struct ListFuture {
    /// `None` lists every upcoming task
    pub limit: Option<usize>,
}

impl Default for ListFuture {
    fn default() -> Self {
        Self {
            limit: Some(DEFAULT_FUTURE_COUNT),
        }
    }
}

/// Default number of entries in the future view.
pub const DEFAULT_FUTURE_COUNT: usize = 5;

/// Parameters for the recently-completed view.
#[derive(Debug, Clone)]
pub struct ListCompleted {
    pub count: usize,
}

impl Default for ListCompleted {
    fn default() -> Self {
        Self {
            count: DEFAULT_RECENT_COUNT,
        }
    }
}
