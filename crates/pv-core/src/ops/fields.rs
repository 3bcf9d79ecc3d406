//! Status transitions and single-field task edits.

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use log::debug;
use serde::Serialize;

use super::{finish, Edit};
use crate::{
    error::{PlanError, Result},
    locator::locate_task,
    models::{Plan, Priority, Status},
};

/// Value that clears an optional field.
const NONE: &str = "none";

/// Task fields that can be set by name.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskField {
    Status,
    Agent,
    Title,
    Priority,
    Notes,
}

impl TaskField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskField::Status => "status",
            TaskField::Agent => "agent",
            TaskField::Title => "title",
            TaskField::Priority => "priority",
            TaskField::Notes => "notes",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskField {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "status" => Ok(TaskField::Status),
            "agent" | "agent_type" => Ok(TaskField::Agent),
            "title" => Ok(TaskField::Title),
            "priority" => Ok(TaskField::Priority),
            "notes" => Ok(TaskField::Notes),
            _ => Err(PlanError::invalid_input("field").with_reason(format!(
                "Unknown field '{s}'. Use: status, agent, title, priority, notes"
            ))),
        }
    }
}

/// Outcome of a field edit.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldChange {
    /// Full id of the edited task
    pub id: String,
    pub field: TaskField,
    pub value: String,
}

impl Plan {
    /// Sets a task's status, stamping `started_at` on entering
    /// `in_progress` and `completed_at` on entering `completed` unless
    /// already set.
    pub fn set_status(&self, query: &str, status: Status, now: Timestamp) -> Result<Edit<FieldChange>> {
        self.set_field(query, TaskField::Status, status.as_str(), now)
    }

    /// Sets one named field of a task from its string form.
    ///
    /// `agent` and `priority` accept `none` to clear the value.
    pub fn set_field(
        &self,
        query: &str,
        field: TaskField,
        value: &str,
        now: Timestamp,
    ) -> Result<Edit<FieldChange>> {
        let index = locate_task(self, query)?;
        let mut plan = self.clone();
        let task = &mut plan.phases[index.phase].tasks[index.task];

        match field {
            TaskField::Status => {
                let status: Status = value.parse()?;
                task.transition(status, now);
                debug!("Task {} is now {}", task.id, status.as_str());
            }
            TaskField::Agent => {
                task.agent_type = match value.trim() {
                    NONE => None,
                    "" => {
                        return Err(PlanError::invalid_input("agent")
                            .with_reason("must not be empty; use 'none' to clear"))
                    }
                    agent => Some(agent.to_string()),
                };
            }
            TaskField::Title => {
                if value.trim().is_empty() {
                    return Err(PlanError::invalid_input("title").with_reason("must not be empty"));
                }
                task.title = value.to_string();
            }
            TaskField::Priority => {
                task.priority = match value {
                    NONE => None,
                    other => Some(other.parse::<Priority>()?),
                };
            }
            TaskField::Notes => {
                task.tracking.notes = (!value.is_empty()).then(|| value.to_string());
            }
        }

        let change = FieldChange {
            id: task.id.clone(),
            field,
            value: value.to_string(),
        };
        Ok(finish(plan, change, now))
    }
}
