//! Adding and removing phases and tasks.

use std::collections::HashSet;

use jiff::Timestamp;
use log::debug;

use super::{finish, Edit};
use crate::{
    error::{PlanError, Result},
    id::TaskId,
    locator::{locate_phase, locate_task},
    models::{Phase, Plan, SpecialPhase, Task},
    params::{AddPhase, AddTask},
};

impl Plan {
    /// Appends a regular phase with the next numeric id.
    ///
    /// The id is one past the highest all-digit id, ignoring the bugs
    /// phase `99`; the first phase is `0`.
    pub fn add_phase(&self, params: &AddPhase, now: Timestamp) -> Result<Edit<Phase>> {
        if params.name.trim().is_empty() {
            return Err(PlanError::invalid_input("name").with_reason("must not be empty"));
        }

        let id = self.next_phase_id()?;
        let phase = Phase::new(
            id.clone(),
            params.name.clone(),
            params.description.clone().unwrap_or_default(),
        );

        let mut plan = self.clone();
        plan.insert_regular_phase(phase.clone());
        debug!("Added phase {id}");
        Ok(finish(plan, phase, now))
    }

    /// Appends a pending task to a phase and assigns its id.
    pub fn add_task(&self, params: &AddTask, now: Timestamp) -> Result<Edit<Task>> {
        if params.title.trim().is_empty() {
            return Err(PlanError::invalid_input("title").with_reason("must not be empty"));
        }
        for dep in &params.deps {
            TaskId::parse(dep)?;
        }
        if params.agent.as_deref().is_some_and(|a| a.trim().is_empty()) {
            return Err(PlanError::invalid_input("agent").with_reason("must not be empty"));
        }

        let phase_index = locate_phase(self, &params.phase)?;
        let mut plan = self.clone();

        let mut task = Task::new(plan.next_task_id(phase_index)?, params.title.clone());
        task.agent_type = params.agent.clone();
        task.depends_on = params.deps.clone();

        plan.phases[phase_index].tasks.push(task.clone());
        debug!("Added task {} to phase {}", task.id, plan.phases[phase_index].id);
        Ok(finish(plan, task, now))
    }

    /// Removes a task. References to it in other tasks' `depends_on` are
    /// left in place.
    pub fn remove_task(&self, query: &str, now: Timestamp) -> Result<Edit<Task>> {
        let index = locate_task(self, query)?;
        let mut plan = self.clone();
        let task = plan.phases[index.phase].tasks.remove(index.task);
        debug!("Removed task {}", task.id);
        Ok(finish(plan, task, now))
    }

    /// Removes a phase and every task in it.
    pub fn remove_phase(&self, id: &str, now: Timestamp) -> Result<Edit<Phase>> {
        let index = locate_phase(self, id)?;
        let mut plan = self.clone();
        let phase = plan.phases.remove(index);
        debug!("Removed phase {} with {} tasks", phase.id, phase.tasks.len());
        Ok(finish(plan, phase, now))
    }

    pub(crate) fn next_phase_id(&self) -> Result<String> {
        let highest = self
            .phases
            .iter()
            .filter(|p| p.id != SpecialPhase::Bugs.id())
            .filter_map(|p| p.id.parse::<u64>().ok())
            .max();

        match highest {
            None => Ok("0".to_string()),
            Some(max) => max
                .checked_add(1)
                .map(|next| next.to_string())
                .ok_or_else(|| {
                    PlanError::invalid_input("id").with_reason(format!("no phase id follows {max}"))
                }),
        }
    }

    /// Continues the highest `(section, task)` pair of the phase.
    pub(crate) fn next_task_id(&self, phase_index: usize) -> Result<String> {
        let phase = &self.phases[phase_index];
        let highest = phase
            .tasks
            .iter()
            .filter_map(|t| TaskId::parse(&t.id).ok())
            .filter_map(|id| Some((id.section_number()?, id.task_number()?)))
            .max();

        let (section, from) = match highest {
            None => (1, 1),
            Some((section, task)) => (section, successor(&phase.id, section, task)?),
        };
        self.unique_task_id(&phase.id, section, from)
    }

    /// First `<phase>.<section>.<n>` with `n >= from` not used anywhere in
    /// the plan.
    pub(crate) fn unique_task_id(&self, phase_id: &str, section: u64, from: u64) -> Result<String> {
        let taken: HashSet<&str> = self.tasks().map(|(_, t)| t.id.as_str()).collect();
        (from..=u64::MAX)
            .map(|n| format!("{phase_id}.{section}.{n}"))
            .find(|candidate| !taken.contains(candidate.as_str()))
            .ok_or_else(|| exhausted(phase_id, section))
    }
}

/// Task number after `task`, failing at the top of the `u64` range.
pub(crate) fn successor(phase_id: &str, section: u64, task: u64) -> Result<u64> {
    task.checked_add(1).ok_or_else(|| exhausted(phase_id, section))
}

fn exhausted(phase_id: &str, section: u64) -> PlanError {
    PlanError::invalid_input("id").with_reason(format!(
        "no task number is left in section {phase_id}.{section}"
    ))
}
