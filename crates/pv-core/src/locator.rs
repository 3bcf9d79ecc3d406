//! Resolution of exact and partial ids to tasks and phases.
//!
//! Lookups try an exact id first. Otherwise every task whose id has the
//! query as a whole-segment prefix is a candidate: none is
//! [`PlanError::NotFound`], one is the match, more than one is
//! [`PlanError::Ambiguous`] listing every candidate id.

use crate::{
    error::{EntityKind, PlanError, Result},
    id::matches_prefix,
    models::{Phase, Plan, SpecialPhase, Task},
};

/// A task and the phase that owns it.
#[derive(Debug, Clone, Copy)]
pub struct TaskRef<'a> {
    pub phase: &'a Phase,
    pub task: &'a Task,
}

/// Result of an any-entity lookup.
#[derive(Debug, Clone, Copy)]
pub enum Found<'a> {
    Task(TaskRef<'a>),
    Phase(&'a Phase),
}

/// Index pair of a task inside `plan.phases[phase].tasks[task]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TaskIndex {
    pub phase: usize,
    pub task: usize,
}

/// Finds a task or phase.
///
/// Precedence: exact task id, exact phase id, then task-id prefix. A bare
/// phase id such as `"1"` therefore names the phase even when it is also a
/// unique task prefix; use [`find_task`] to resolve it as a task.
pub fn find<'a>(plan: &'a Plan, query: &str) -> Result<Found<'a>> {
    if let Some(index) = exact_task(plan, query) {
        return Ok(Found::Task(task_ref(plan, index)));
    }
    if let Some(index) = locate_phase_exact(plan, query) {
        return Ok(Found::Phase(&plan.phases[index]));
    }
    prefix_tasks(plan, query, EntityKind::Entity).map(|index| Found::Task(task_ref(plan, index)))
}

/// Finds a task by exact id or unambiguous prefix.
pub fn find_task<'a>(plan: &'a Plan, query: &str) -> Result<TaskRef<'a>> {
    locate_task(plan, query).map(|index| task_ref(plan, index))
}

/// Finds a phase by exact id; `bugs` and `99` both name the bugs phase.
pub fn find_phase<'a>(plan: &'a Plan, query: &str) -> Result<&'a Phase> {
    locate_phase(plan, query).map(|index| &plan.phases[index])
}

pub(crate) fn locate_task(plan: &Plan, query: &str) -> Result<TaskIndex> {
    match exact_task(plan, query) {
        Some(index) => Ok(index),
        None => prefix_tasks(plan, query, EntityKind::Task),
    }
}

pub(crate) fn locate_phase(plan: &Plan, query: &str) -> Result<usize> {
    locate_phase_exact(plan, query).ok_or_else(|| {
        let available = plan.phases.iter().map(|p| p.id.clone()).collect();
        PlanError::not_found(EntityKind::Phase, query, available)
    })
}

fn locate_phase_exact(plan: &Plan, query: &str) -> Option<usize> {
    plan.phases.iter().position(|p| p.id == query).or_else(|| {
        let kind = SpecialPhase::from_id(query)?;
        plan.phases.iter().position(|p| p.special() == Some(kind))
    })
}

fn exact_task(plan: &Plan, query: &str) -> Option<TaskIndex> {
    task_indices(plan).find(|&index| task_at(plan, index).id == query)
}

fn prefix_tasks(plan: &Plan, query: &str, kind: EntityKind) -> Result<TaskIndex> {
    let candidates: Vec<TaskIndex> = task_indices(plan)
        .filter(|&index| matches_prefix(&task_at(plan, index).id, query))
        .collect();

    match candidates.as_slice() {
        [] => {
            let available = plan.tasks().map(|(_, t)| t.id.clone()).collect();
            Err(PlanError::not_found(kind, query, available))
        }
        [only] => Ok(*only),
        many => Err(PlanError::Ambiguous {
            query: query.to_string(),
            candidates: many
                .iter()
                .map(|&index| task_at(plan, index).id.clone())
                .collect(),
        }),
    }
}

fn task_indices(plan: &Plan) -> impl Iterator<Item = TaskIndex> + '_ {
    plan.phases.iter().enumerate().flat_map(|(p, phase)| {
        (0..phase.tasks.len()).map(move |t| TaskIndex { phase: p, task: t })
    })
}

fn task_at(plan: &Plan, index: TaskIndex) -> &Task {
    &plan.phases[index.phase].tasks[index.task]
}

fn task_ref(plan: &Plan, index: TaskIndex) -> TaskRef<'_> {
    let phase = &plan.phases[index.phase];
    TaskRef {
        phase,
        task: &phase.tasks[index.task],
    }
}
