//! Command-line argument wrappers using clap
//!
//! Each struct here is the CLI side of one core parameter type: clap
//! derives, flags and help text live on the wrapper, and a `From` impl
//! converts it into the plain struct from `pv_core::params`.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! Commands that share one argument shape but differ in the operation
//! (`done`/`start`/`block`/`skip`, `defer`/`bug`/`idea`) convert through
//! a method taking the missing piece instead of `From`.

use clap::{Args, ValueEnum};
use pv_core::{
    params::{
        AddPhase, AddTask, Compact, Id, InitPlan, ListCompleted, ListFuture, MoveTask, SetField,
        SetStatus, DEFAULT_FUTURE_COUNT,
    },
    selector::DEFAULT_RECENT_COUNT,
    SpecialPhase, Status,
};

/// Show a task or phase
///
/// Accepts a full task id, a phase id, or a prefix matching exactly one
/// task (`1.2` for `1.2.1`).
#[derive(Args)]
pub struct GetArgs {
    /// Task id, phase id or unambiguous task prefix
    pub id: String,
}

impl From<GetArgs> for Id {
    fn from(val: GetArgs) -> Self {
        Id { id: val.id }
    }
}

/// Show recently completed tasks, newest first
#[derive(Args)]
pub struct LastArgs {
    /// Number of tasks to show
    #[arg(short = 'n', long = "count", default_value_t = DEFAULT_RECENT_COUNT)]
    pub count: usize,
}

impl From<LastArgs> for ListCompleted {
    fn from(val: LastArgs) -> Self {
        ListCompleted { count: val.count }
    }
}

/// Show upcoming tasks
///
/// In-progress tasks come first, then tasks ready to start, then tasks
/// waiting on dependencies, then blocked tasks.
#[derive(Args)]
pub struct FutureArgs {
    /// Number of tasks to show
    #[arg(short = 'n', long = "count", default_value_t = DEFAULT_FUTURE_COUNT)]
    pub count: usize,
    /// Show every upcoming task
    #[arg(long, conflicts_with = "count")]
    pub all: bool,
}

impl From<FutureArgs> for ListFuture {
    fn from(val: FutureArgs) -> Self {
        ListFuture {
            limit: (!val.all).then_some(val.count),
        }
    }
}

/// Create a new plan file
#[derive(Args)]
pub struct InitArgs {
    /// Project name
    pub name: String,
    /// Overwrite an existing plan file
    #[arg(long)]
    pub force: bool,
}

impl From<InitArgs> for InitPlan {
    fn from(val: InitArgs) -> Self {
        InitPlan {
            project: val.name,
            force: val.force,
        }
    }
}

/// Add a phase after the last regular phase
#[derive(Args)]
pub struct AddPhaseArgs {
    /// Phase name
    pub name: String,
    /// Optional description of the phase
    #[arg(long = "desc")]
    pub description: Option<String>,
}

impl From<AddPhaseArgs> for AddPhase {
    fn from(val: AddPhaseArgs) -> Self {
        AddPhase {
            name: val.name,
            description: val.description,
        }
    }
}

/// Add a task to a phase
///
/// The task id is assigned automatically, continuing the highest section
/// already used in the phase.
#[derive(Args)]
pub struct AddTaskArgs {
    /// Id of the phase to add the task to
    pub phase: String,
    /// Task title
    pub title: String,
    /// Agent label for the task
    #[arg(long)]
    pub agent: Option<String>,
    /// Comma-separated ids of tasks that must be completed first
    #[arg(long)]
    pub deps: Option<String>,
}

impl From<AddTaskArgs> for AddTask {
    fn from(val: AddTaskArgs) -> Self {
        AddTask {
            phase: val.phase,
            title: val.title,
            agent: val.agent,
            deps: val
                .deps
                .as_deref()
                .map(AddTask::parse_deps)
                .unwrap_or_default(),
        }
    }
}

/// Set one field of a task
///
/// `agent none` and `priority none` clear the field; `notes` replaces the
/// task's notes.
#[derive(Args)]
pub struct SetArgs {
    /// Task id or unambiguous prefix
    pub id: String,
    /// One of status, agent, title, priority, notes
    pub field: String,
    /// New value
    pub value: String,
}

impl From<SetArgs> for SetField {
    fn from(val: SetArgs) -> Self {
        SetField {
            id: val.id,
            field: val.field,
            value: val.value,
        }
    }
}

/// Task selected by id or unambiguous prefix
#[derive(Args)]
pub struct TaskIdArgs {
    /// Task id or unambiguous prefix
    pub id: String,
}

impl TaskIdArgs {
    pub fn with_status(self, status: Status) -> SetStatus {
        SetStatus {
            id: self.id,
            status,
        }
    }
}

/// Move a task into a special phase
///
/// When the argument names no task, a new task with that title is created
/// in the special phase instead.
#[derive(Args)]
pub struct MoveArgs {
    /// Task id, prefix, or the title of a new task
    pub query: String,
    /// Why the task was moved; appended to its notes
    #[arg(short, long)]
    pub reason: Option<String>,
}

impl MoveArgs {
    pub fn into_move(self, target: SpecialPhase) -> MoveTask {
        MoveTask {
            query: self.query,
            target,
            reason: self.reason,
        }
    }
}

/// Remove a phase with all its tasks, or a single task
#[derive(Args)]
pub struct RmArgs {
    /// What to remove
    #[arg(value_enum)]
    pub kind: RmKind,
    /// Phase id, or task id or prefix
    pub id: String,
}

/// Kind of entity removed by `rm`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RmKind {
    /// Remove a phase and its tasks
    Phase,
    /// Remove a single task
    Task,
}

impl From<&RmArgs> for Id {
    fn from(val: &RmArgs) -> Self {
        Id { id: val.id.clone() }
    }
}

/// Compact completed tasks
#[derive(Args)]
pub struct CompactArgs {
    /// Number of rotated backups to keep; 0 disables backups
    #[arg(long)]
    pub max_backups: Option<usize>,
}

impl From<CompactArgs> for Compact {
    fn from(val: CompactArgs) -> Self {
        Compact {
            max_backups: val.max_backups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_task_deps_are_split() {
        let params: AddTask = AddTaskArgs {
            phase: "1".to_string(),
            title: "Docs".to_string(),
            agent: None,
            deps: Some("1.1.1, 1.1.2".to_string()),
        }
        .into();
        assert_eq!(params.deps, vec!["1.1.1", "1.1.2"]);
    }

    #[test]
    fn test_future_all_lifts_limit() {
        let params: ListFuture = FutureArgs { count: 3, all: true }.into();
        assert_eq!(params.limit, None);

        let params: ListFuture = FutureArgs { count: 3, all: false }.into();
        assert_eq!(params.limit, Some(3));
    }

    #[test]
    fn test_move_args_carry_target() {
        let params = MoveArgs {
            query: "1.1.1".to_string(),
            reason: Some("later".to_string()),
        }
        .into_move(SpecialPhase::Deferred);
        assert_eq!(params.target, SpecialPhase::Deferred);
        assert_eq!(params.reason.as_deref(), Some("later"));
    }
}
