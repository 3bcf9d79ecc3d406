//! Fixtures shared by unit tests.

use jiff::Timestamp;
use serde_json::Map;

use crate::{
    models::{Meta, Phase, Plan, Status, Summary, Task},
    progress,
};

pub(crate) fn epoch() -> Timestamp {
    Timestamp::from_second(1_735_689_600).unwrap() // 2025-01-01 00:00:00 UTC
}

pub(crate) fn later() -> Timestamp {
    Timestamp::from_second(1_735_776_000).unwrap() // 2025-01-02 00:00:00 UTC
}

pub(crate) fn task(id: &str) -> Task {
    Task::new(id, format!("Task {id}"))
}

pub(crate) fn task_with(id: &str, status: Status, deps: &[&str]) -> Task {
    let mut task = task(id);
    task.status = status;
    task.depends_on = deps.iter().map(|d| d.to_string()).collect();
    task
}

pub(crate) fn plan_with(phases: Vec<(&str, Vec<Task>)>) -> Plan {
    let mut plan = Plan {
        meta: Meta {
            project: "Test".to_string(),
            version: "1.0.0".to_string(),
            schema_version: None,
            created_at: epoch(),
            updated_at: epoch(),
            business_plan_path: None,
            extra: Map::new(),
        },
        summary: Summary::default(),
        phases: phases
            .into_iter()
            .map(|(id, tasks)| {
                let mut phase = Phase::new(id, format!("Phase {id}"), "");
                phase.tasks = tasks;
                phase
            })
            .collect(),
        decisions: None,
        blockers: None,
        extra: Map::new(),
    };
    progress::recompute_in_place(&mut plan);
    plan
}
