//! Wrappers for the read-only plan views.
//!
//! Each wrapper renders as markdown through `Display` and as the view's
//! machine-readable shape through `Serialize`, so the CLI can print either
//! form from the same value.

use std::fmt;

use serde::{Serialize, Serializer};

use super::models::fmt_plan_header;
use crate::{
    models::{Phase, Plan, Status, TaskView},
    selector,
};

/// The whole plan: header, then every phase with its tasks.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Overview(pub Plan);

impl fmt::Display for Overview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Completed phases collapsed, the current phase expanded, and the next
/// task.
#[derive(Debug, Clone)]
pub struct Current(pub Plan);

impl Serialize for Current {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        selector::current_view(&self.0).serialize(serializer)
    }
}

impl fmt::Display for Current {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = &self.0;
        fmt_plan_header(f, plan)?;

        let completed: Vec<&Phase> = plan
            .phases
            .iter()
            .filter(|p| p.status == Status::Completed)
            .collect();
        if !completed.is_empty() {
            writeln!(f)?;
            for phase in completed {
                writeln!(f, "- ✅ Phase {}: {} (100%)", phase.id, phase.name)?;
            }
        }

        if let Some(phase) = selector::current_phase(plan) {
            writeln!(f)?;
            phase.fmt_section(f)?;
        }

        if let Some(next) = selector::select_next(plan) {
            writeln!(f)?;
            writeln!(f, "**👉 Next:** [{}] {}", next.task.id, next.task.title)?;
        }
        Ok(())
    }
}

/// The task `select_next` picked, if any.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct NextTask(pub Option<TaskView>);

impl fmt::Display for NextTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(task) => {
                writeln!(f, "# Next Task")?;
                writeln!(f)?;
                write!(f, "{task}")
            }
            None => writeln!(f, "No pending tasks found!"),
        }
    }
}

/// The phase currently being worked on, if any.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ActivePhase(pub Option<Phase>);

impl fmt::Display for ActivePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(phase) => write!(f, "{phase}"),
            None => writeln!(f, "No active phase found!"),
        }
    }
}

/// A task or phase looked up by id.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Entity {
    Task(TaskView),
    Phase(Phase),
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Task(task) => write!(f, "{task}"),
            Entity::Phase(phase) => write!(f, "{phase}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::Status::*,
        test_support::{plan_with, task_with},
    };

    fn sample() -> Plan {
        let mut plan = plan_with(vec![
            ("0", vec![task_with("0.1.1", Completed, &[])]),
            (
                "1",
                vec![
                    task_with("1.1.1", Completed, &[]),
                    task_with("1.1.2", Pending, &["1.1.1"]),
                ],
            ),
        ]);
        plan.phases[1].tasks[1].agent_type = Some("rust-engineer".to_string());
        plan
    }

    #[test]
    fn test_overview_lists_every_phase() {
        let output = Overview(sample()).to_string();

        assert!(output.contains("# 📋 Test v1.0.0"));
        assert!(output.contains("Progress: 67% (2/3 tasks)"));
        assert!(output.contains("## ✅ Phase 0: Phase 0 (100%)"));
        assert!(output.contains("## 🔄 Phase 1: Phase 1 (50%)"));
        assert!(output.contains("- ⏳ [1.1.2] Task 1.1.2 *(rust-engineer)*"));
        assert!(output.contains("- ✅ [0.1.1] Task 0.1.1 *(general)*"));
    }

    #[test]
    fn test_overview_of_empty_plan() {
        let output = Overview(plan_with(vec![])).to_string();
        assert!(output.contains("No phases in this plan."));
    }

    #[test]
    fn test_current_collapses_completed_phases() {
        let output = Current(sample()).to_string();

        assert!(output.contains("- ✅ Phase 0: Phase 0 (100%)"));
        assert!(output.contains("## 🔄 Phase 1: Phase 1 (50%)"));
        assert!(output.contains("**👉 Next:** [1.1.2] Task 1.1.2"));
        assert!(!output.contains("[0.1.1]"));
    }

    #[test]
    fn test_current_serializes_view() {
        let value = serde_json::to_value(Current(sample())).unwrap();
        assert_eq!(value["current_phase"]["id"], "1");
        assert_eq!(value["next_task"]["id"], "1.1.2");
        assert_eq!(value["summary"]["overall_progress"], 66.7);
    }

    #[test]
    fn test_next_task_messages() {
        let plan = sample();
        let next = selector::select_next(&plan).map(|n| TaskView::new(n.phase, n.task));
        let output = NextTask(next).to_string();

        assert!(output.contains("## [1.1.2] Task 1.1.2"));
        assert!(output.contains("- **Agent**: rust-engineer"));
        assert!(output.contains("- **Depends on**: 1.1.1"));

        assert_eq!(NextTask(None).to_string(), "No pending tasks found!\n");
        assert_eq!(serde_json::to_string(&NextTask(None)).unwrap(), "null");
    }

    #[test]
    fn test_active_phase_display() {
        let plan = sample();
        let output = ActivePhase(Some(plan.phases[1].clone())).to_string();

        assert!(output.contains("## Phase 1: Phase 1"));
        assert!(output.contains("Progress: 50% (1/2 tasks)"));
        assert!(output.contains("- ⏳ [1.1.2] Task 1.1.2 *(rust-engineer)* ← 1.1.1"));
        assert_eq!(ActivePhase(None).to_string(), "No active phase found!\n");
    }

    #[test]
    fn test_entity_serializes_untagged() {
        let plan = sample();
        let phase = Entity::Phase(plan.phases[0].clone());
        assert_eq!(serde_json::to_value(&phase).unwrap()["name"], "Phase 0");

        let task = Entity::Task(TaskView::new(&plan.phases[0], &plan.phases[0].tasks[0]));
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["id"], "0.1.1");
        assert_eq!(value["phase_id"], "0");
    }
}
