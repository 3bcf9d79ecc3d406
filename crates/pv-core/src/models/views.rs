//! Read-only projections used for machine-readable output.

use jiff::Timestamp;
use serde::Serialize;

use super::{Phase, Status, Summary, Task, Tracking};

/// A task together with the phase it lives in.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaskView {
    pub id: String,
    pub title: String,
    pub status: Status,
    pub phase_id: String,
    pub phase_name: String,
    pub agent_type: Option<String>,
    pub depends_on: Vec<String>,
    pub tracking: Tracking,
}

impl TaskView {
    pub fn new(phase: &Phase, task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            status: task.status,
            phase_id: phase.id.clone(),
            phase_name: phase.name.clone(),
            agent_type: task.agent_type.clone(),
            depends_on: task.depends_on.clone(),
            tracking: task.tracking.clone(),
        }
    }
}

/// How close an upcoming task is to being workable.
///
/// Variants are declared in the order the future view lists them.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    /// Already started
    InProgress,
    /// Pending with every dependency completed
    Ready,
    /// Pending with at least one dependency not completed
    Waiting,
    /// Explicitly blocked
    Blocked,
}

impl Readiness {
    /// Tasks that can be worked on right now.
    pub fn is_actionable(&self) -> bool {
        matches!(self, Readiness::InProgress | Readiness::Ready)
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Readiness::InProgress => "🔄",
            Readiness::Ready => "👉",
            Readiness::Waiting => "⏳",
            Readiness::Blocked => "🚫",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Readiness::InProgress => "in progress",
            Readiness::Ready => "ready",
            Readiness::Waiting => "waiting",
            Readiness::Blocked => "blocked",
        }
    }
}

/// Entry of the future-tasks view.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FutureTask {
    #[serde(flatten)]
    pub task: TaskView,
    pub readiness: Readiness,
    pub actionable: bool,
}

impl FutureTask {
    pub fn new(phase: &Phase, task: &Task, readiness: Readiness) -> Self {
        Self {
            task: TaskView::new(phase, task),
            readiness,
            actionable: readiness.is_actionable(),
        }
    }
}

/// Entry of the recently-completed view.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompletedTask {
    pub id: String,
    pub title: String,
    pub phase_id: String,
    pub phase_name: String,
    pub completed_at: Option<Timestamp>,
    pub agent_type: Option<String>,
}

impl CompletedTask {
    pub fn new(phase: &Phase, task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            phase_id: phase.id.clone(),
            phase_name: phase.name.clone(),
            completed_at: task.tracking.completed_at,
            agent_type: task.agent_type.clone(),
        }
    }
}

/// Summary, current phase and next task in one value.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentView<'a> {
    pub summary: &'a Summary,
    pub current_phase: Option<&'a Phase>,
    pub next_task: Option<TaskView>,
}
