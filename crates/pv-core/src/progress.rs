//! Derivation of phase progress, phase status and the plan summary.
//!
//! Stored derived values are never read; everything is rebuilt from task
//! statuses. Percentages are rounded half-up to one decimal place using
//! integer arithmetic, so `1/3` is `33.3`, `2/3` is `66.7` and `1/16` is
//! `6.3`.

use crate::models::{Phase, Plan, Progress, Status, Summary};

/// Returns a copy of `plan` with every derived field freshly computed.
pub fn recompute(plan: &Plan) -> Plan {
    let mut plan = plan.clone();
    recompute_in_place(&mut plan);
    plan
}

pub(crate) fn recompute_in_place(plan: &mut Plan) {
    for phase in &mut plan.phases {
        phase.progress = phase_progress(phase);
        phase.status = phase_status(phase);
    }

    let total_tasks = plan.phases.iter().map(|p| p.progress.total).sum();
    let completed_tasks = plan.phases.iter().map(|p| p.progress.completed).sum();

    plan.summary = Summary {
        total_phases: plan.phases.len(),
        total_tasks,
        completed_tasks,
        overall_progress: percentage(completed_tasks, total_tasks),
        extra: std::mem::take(&mut plan.summary.extra),
    };
}

/// Completion counters for one phase.
pub fn phase_progress(phase: &Phase) -> Progress {
    let total = phase.tasks.len();
    let completed = phase
        .tasks
        .iter()
        .filter(|task| task.status == Status::Completed)
        .count();

    Progress {
        completed,
        total,
        percentage: percentage(completed, total),
    }
}

/// Phase status from its tasks.
///
/// `pending` when empty, `completed` when every task is completed,
/// `in_progress` when any task is completed or in progress, else `pending`.
pub fn phase_status(phase: &Phase) -> Status {
    if phase.tasks.is_empty() {
        return Status::Pending;
    }
    if phase.tasks.iter().all(|t| t.status == Status::Completed) {
        return Status::Completed;
    }
    if phase
        .tasks
        .iter()
        .any(|t| matches!(t.status, Status::Completed | Status::InProgress))
    {
        return Status::InProgress;
    }
    Status::Pending
}

/// `completed / total * 100`, half-up to one decimal; `0` when `total` is 0.
pub fn percentage(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let (completed, total) = (completed as u128, total as u128);
    let tenths = (2 * completed * 1000 + total) / (2 * total);
    tenths as f64 / 10.0
}
