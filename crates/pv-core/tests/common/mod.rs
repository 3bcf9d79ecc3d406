#![allow(dead_code)]

use std::path::{Path, PathBuf};

use jiff::Timestamp;
use proptest::prelude::*;
use pv_core::{models::Status, progress, Phase, Plan, Planner, PlannerBuilder, Task};
use serde_json::Value;
use tempfile::TempDir;

pub fn now() -> Timestamp {
    Timestamp::from_second(1_735_689_600).expect("valid timestamp") // 2025-01-01 00:00:00 UTC
}

pub fn task(id: &str, status: Status, deps: &[&str]) -> Task {
    let mut task = Task::new(id, format!("Task {id}"));
    task.status = status;
    task.depends_on = deps.iter().map(|d| d.to_string()).collect();
    task
}

/// Builds a consistent plan from `(phase id, tasks)` pairs.
pub fn plan(phases: Vec<(&str, Vec<Task>)>) -> Plan {
    let mut plan = Plan::init("Fixture", now());
    plan.phases = phases
        .into_iter()
        .map(|(id, tasks)| {
            let mut phase = Phase::new(id, format!("Phase {id}"), "");
            phase.tasks = tasks;
            phase
        })
        .collect();
    progress::recompute(&plan)
}

/// Writes `document` as `plan.json` in a fresh directory.
pub fn write_document(document: &Value) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("plan.json");
    std::fs::write(&path, document.to_string()).expect("Failed to write plan");
    (temp_dir, path)
}

pub fn planner_for(path: &Path) -> Planner {
    PlannerBuilder::new().with_plan_path(Some(path)).build()
}

/// Helper function to create a planner over a freshly initialised plan
pub fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let planner = planner_for(&temp_dir.path().join("plan.json"));
    planner
        .init(&pv_core::params::InitPlan {
            project: "Integration".to_string(),
            force: false,
        })
        .expect("Failed to init plan");
    (temp_dir, planner)
}

pub fn arb_status() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Pending),
        Just(Status::InProgress),
        Just(Status::Completed),
        Just(Status::Blocked),
        Just(Status::Skipped),
    ]
}

/// Plans of up to four phases with up to five tasks each. Dependencies
/// point at arbitrary task slots, so some are forward references, some are
/// self references and some dangle.
pub fn arb_plan() -> impl Strategy<Value = Plan> {
    let arb_task = (arb_status(), prop::collection::vec(0usize..24, 0..3));
    prop::collection::vec(prop::collection::vec(arb_task, 0..5), 0..4).prop_map(|phases| {
        let phases: Vec<(String, Vec<Task>)> = phases
            .into_iter()
            .enumerate()
            .map(|(p, tasks)| {
                let tasks = tasks
                    .into_iter()
                    .enumerate()
                    .map(|(t, (status, deps))| {
                        let mut task = Task::new(format!("{p}.1.{}", t + 1), format!("Task {p}.{t}"));
                        task.status = status;
                        task.depends_on = deps
                            .into_iter()
                            .map(|slot| format!("{}.1.{}", slot / 6, slot % 6 + 1))
                            .collect();
                        task
                    })
                    .collect();
                (p.to_string(), tasks)
            })
            .collect();
        plan(phases.iter().map(|(id, tasks)| (id.as_str(), tasks.clone())).collect())
    })
}
