//! Parking tasks in the bugs, ideas and deferred phases.

use jiff::Timestamp;
use log::debug;
use serde::Serialize;

use super::{finish, structure::successor, Edit};
use crate::{
    error::{PlanError, Result},
    id::TaskId,
    locator::locate_task,
    models::{Plan, SpecialPhase, Task},
};

/// Outcome of a move into a special phase.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Moved {
    /// Id before the move; `None` when a new task was created
    pub old_id: Option<String>,
    pub new_id: String,
    pub title: String,
    #[serde(serialize_with = "serialize_label")]
    pub target: SpecialPhase,
}

impl Moved {
    /// True when the query matched no task and a new one was created.
    pub fn created(&self) -> bool {
        self.old_id.is_none()
    }
}

fn serialize_label<S: serde::Serializer>(kind: &SpecialPhase, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(kind.label())
}

impl Plan {
    /// Moves a task into a special phase, or files a new one there.
    ///
    /// `query` is resolved like any task id. When it names no task, a new
    /// pending task titled `query` is created in the target phase. An
    /// ambiguous query is an error. Moved tasks are re-homed as
    /// `<phase>.1.<n>`; a task already in the target phase keeps its id.
    /// A non-blank `reason` is appended to the task's notes. The special
    /// phase is created on first use.
    pub fn move_to_special_phase(
        &self,
        query: &str,
        target: SpecialPhase,
        reason: Option<&str>,
        now: Timestamp,
    ) -> Result<Edit<Moved>> {
        let existing = match locate_task(self, query) {
            Ok(index) => Some(index),
            Err(err) if err.is_not_found() => None,
            Err(err) => return Err(err),
        };

        let mut plan = self.clone();
        let (old_id, mut task) = match existing {
            Some(index) if plan.phases[index.phase].special() == Some(target) => {
                let task = &mut plan.phases[index.phase].tasks[index.task];
                note_reason(task, reason);
                let moved = Moved {
                    old_id: Some(task.id.clone()),
                    new_id: task.id.clone(),
                    title: task.title.clone(),
                    target,
                };
                return Ok(finish(plan, moved, now));
            }
            Some(index) => {
                let task = plan.phases[index.phase].tasks.remove(index.task);
                (Some(task.id.clone()), task)
            }
            None => {
                if query.trim().is_empty() {
                    return Err(PlanError::invalid_input("title").with_reason("must not be empty"));
                }
                (None, Task::new(String::new(), query.trim()))
            }
        };

        let phase_index = plan.ensure_special_phase(target);
        let phase_id = plan.phases[phase_index].id.clone();
        let next = match plan.phases[phase_index]
            .tasks
            .iter()
            .filter_map(|t| TaskId::parse(&t.id).ok()?.task_number())
            .max()
        {
            None => 1,
            Some(highest) => successor(&phase_id, 1, highest)?,
        };

        task.id = plan.unique_task_id(&phase_id, 1, next)?;
        note_reason(&mut task, reason);

        let moved = Moved {
            old_id,
            new_id: task.id.clone(),
            title: task.title.clone(),
            target,
        };
        plan.phases[phase_index].tasks.push(task);
        debug!(
            "{} -> {} ({target})",
            moved.old_id.as_deref().unwrap_or("new task"),
            moved.new_id
        );
        Ok(finish(plan, moved, now))
    }
}

fn note_reason(task: &mut Task, reason: Option<&str>) {
    if let Some(reason) = reason.map(str::trim).filter(|r| !r.is_empty()) {
        task.append_note(reason);
    }
}
