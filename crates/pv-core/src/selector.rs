//! Dependency-aware task selection and the read-only plan views.
//!
//! Only regular phases take part in sequencing; special phases (bugs,
//! ideas, deferred) are holding areas and never produce a next task.

use std::collections::HashMap;

use crate::{
    locator::TaskRef,
    models::{CompletedTask, CurrentView, FutureTask, Phase, Plan, Readiness, Status, Task, TaskView},
};

/// Default number of entries in the recently-completed view.
pub const DEFAULT_RECENT_COUNT: usize = 5;

/// Status of every task by id, used for dependency checks.
struct StatusIndex<'a>(HashMap<&'a str, Status>);

impl<'a> StatusIndex<'a> {
    fn new(plan: &'a Plan) -> Self {
        Self(
            plan.tasks()
                .map(|(_, task)| (task.id.as_str(), task.status))
                .collect(),
        )
    }

    /// A dependency that names no task counts as unmet.
    fn deps_met(&self, task: &Task) -> bool {
        task.depends_on
            .iter()
            .all(|dep| self.0.get(dep.as_str()) == Some(&Status::Completed))
    }
}

/// True when every dependency of `task` exists in `plan` and is completed.
pub fn dependencies_met(plan: &Plan, task: &Task) -> bool {
    StatusIndex::new(plan).deps_met(task)
}

/// Picks the most actionable task.
///
/// Candidates are pending or in-progress tasks whose dependencies are all
/// completed. An in-progress candidate beats every pending one; ties go to
/// phase order, then task order.
pub fn select_next(plan: &Plan) -> Option<TaskRef<'_>> {
    let index = StatusIndex::new(plan);
    let mut first_pending = None;

    for (phase, task) in plan.regular_tasks() {
        if !index.deps_met(task) {
            continue;
        }
        match task.status {
            Status::InProgress => return Some(TaskRef { phase, task }),
            Status::Pending if first_pending.is_none() => {
                first_pending = Some(TaskRef { phase, task });
            }
            _ => {}
        }
    }

    first_pending
}

/// Classification of a task for the future view; `None` for tasks that
/// are completed or skipped.
pub fn readiness(plan: &Plan, task: &Task) -> Option<Readiness> {
    classify(&StatusIndex::new(plan), task)
}

fn classify(index: &StatusIndex<'_>, task: &Task) -> Option<Readiness> {
    match task.status {
        Status::InProgress => Some(Readiness::InProgress),
        Status::Pending if index.deps_met(task) => Some(Readiness::Ready),
        Status::Pending => Some(Readiness::Waiting),
        Status::Blocked => Some(Readiness::Blocked),
        Status::Completed | Status::Skipped => None,
    }
}

/// Upcoming tasks of regular phases, grouped in-progress, ready, waiting,
/// blocked, and kept in plan order inside each group.
pub fn future(plan: &Plan, limit: Option<usize>) -> Vec<FutureTask> {
    let index = StatusIndex::new(plan);
    let mut upcoming: Vec<FutureTask> = plan
        .regular_tasks()
        .filter_map(|(phase, task)| {
            classify(&index, task).map(|readiness| FutureTask::new(phase, task, readiness))
        })
        .collect();

    // stable, so plan order survives within each group
    upcoming.sort_by_key(|entry| entry.readiness);

    if let Some(limit) = limit {
        upcoming.truncate(limit);
    }
    upcoming
}

/// First regular phase in progress, else the first pending one.
pub fn current_phase(plan: &Plan) -> Option<&Phase> {
    let regular = || plan.phases.iter().filter(|p| p.is_regular());

    regular()
        .find(|p| p.status == Status::InProgress)
        .or_else(|| regular().find(|p| p.status == Status::Pending))
}

/// Summary, current phase and next task of a plan.
pub fn current_view(plan: &Plan) -> CurrentView<'_> {
    CurrentView {
        summary: &plan.summary,
        current_phase: current_phase(plan),
        next_task: select_next(plan).map(|next| TaskView::new(next.phase, next.task)),
    }
}

/// Completed tasks, most recent first; tasks without a completion time last.
pub fn recently_completed(plan: &Plan, count: usize) -> Vec<CompletedTask> {
    let mut done: Vec<CompletedTask> = plan
        .tasks()
        .filter(|(_, task)| task.status == Status::Completed)
        .map(|(phase, task)| CompletedTask::new(phase, task))
        .collect();

    done.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
    done.truncate(count);
    done
}
