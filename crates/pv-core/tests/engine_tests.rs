//! End-to-end scenarios over the pure engine API.

mod common;

use common::{now, plan, task};
use pv_core::{
    models::{Progress, Status},
    params::{AddPhase, AddTask},
    selector, validate, Plan, SpecialPhase,
};
use serde_json::json;

use Status::{Completed, InProgress, Pending};

#[test]
fn test_half_done_phase_is_in_progress() {
    let plan = plan(vec![(
        "1",
        vec![
            task("1.1.1", Completed, &[]),
            task("1.1.2", Completed, &[]),
            task("1.1.3", Pending, &[]),
            task("1.1.4", Pending, &[]),
        ],
    )]);

    assert_eq!(
        plan.phases[0].progress,
        Progress {
            completed: 2,
            total: 4,
            percentage: 50.0
        }
    );
    assert_eq!(plan.phases[0].status, InProgress);
}

#[test]
fn test_next_task_skips_unmet_dependency() {
    let plan = plan(vec![(
        "1",
        vec![
            task("1.1.1", Completed, &[]),
            task("1.1.2", InProgress, &["1.1.1"]),
            task("1.1.3", Pending, &["1.1.2"]),
        ],
    )]);

    let next = selector::select_next(&plan).expect("a task is actionable");
    assert_eq!(next.task.id, "1.1.2");
}

#[test]
fn test_empty_phase() {
    let plan = plan(vec![("1", vec![])]);

    assert_eq!(plan.phases[0].progress, Progress::default());
    assert_eq!(plan.phases[0].progress.percentage, 0.0);
    assert_eq!(plan.phases[0].status, Pending);
}

#[test]
fn test_three_phase_summary() {
    let plan = plan(vec![
        ("0", vec![task("0.1.1", Completed, &[]), task("0.1.2", Completed, &[])]),
        ("1", vec![task("1.1.1", Pending, &[]), task("1.1.2", Pending, &[])]),
        ("2", vec![task("2.1.1", Pending, &[])]),
    ]);

    assert_eq!(plan.summary.total_phases, 3);
    assert_eq!(plan.summary.total_tasks, 5);
    assert_eq!(plan.summary.completed_tasks, 2);
    assert_eq!(plan.summary.overall_progress, 40.0);
}

#[test]
fn test_build_plan_from_scratch() {
    let plan = Plan::init("Scratch", now());

    let plan = plan
        .add_phase(
            &AddPhase {
                name: "Setup".to_string(),
                description: None,
            },
            now(),
        )
        .unwrap()
        .plan;
    let plan = plan
        .move_to_special_phase("Flaky CI", SpecialPhase::Bugs, None, now())
        .unwrap()
        .plan;
    let plan = plan
        .add_phase(
            &AddPhase {
                name: "Build".to_string(),
                description: Some("Core work".to_string()),
            },
            now(),
        )
        .unwrap()
        .plan;

    let ids: Vec<_> = plan.phases.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["0", "1", "99"]);

    let edit = plan
        .add_task(
            &AddTask {
                phase: "1".to_string(),
                title: "Engine".to_string(),
                agent: Some("backend".to_string()),
                deps: vec![],
            },
            now(),
        )
        .unwrap();
    assert_eq!(edit.outcome.id, "1.1.1");

    let edit = edit
        .plan
        .add_task(
            &AddTask {
                phase: "1".to_string(),
                title: "CLI".to_string(),
                agent: None,
                deps: vec!["1.1.1".to_string()],
            },
            now(),
        )
        .unwrap();
    assert_eq!(edit.outcome.id, "1.1.2");

    let plan = edit.plan;
    assert_eq!(selector::select_next(&plan).map(|n| n.task.id.as_str()), Some("1.1.1"));
    assert_eq!(plan.summary.total_tasks, 3);
    assert!(validate::validate_plan(&plan).unwrap().is_valid());
}

#[test]
fn test_finishing_every_task_completes_the_plan() {
    let plan = plan(vec![(
        "1",
        vec![task("1.1.1", Pending, &[]), task("1.1.2", Pending, &["1.1.1"])],
    )]);

    let plan = plan.set_status("1.1.1", Completed, now()).unwrap().plan;
    assert_eq!(selector::select_next(&plan).map(|n| n.task.id.as_str()), Some("1.1.2"));

    let plan = plan.set_status("1.1.2", Completed, now()).unwrap().plan;
    assert_eq!(plan.phases[0].status, Completed);
    assert_eq!(plan.summary.overall_progress, 100.0);
    assert!(selector::select_next(&plan).is_none());
    assert!(selector::current_phase(&plan).is_none());
}

#[test]
fn test_validate_collects_every_issue() {
    let report = validate::validate(&json!({
        "meta": { "project": "Broken", "version": "1.0.0", "created_at": "yesterday" },
        "phases": [{
            "id": "x",
            "name": "Bad",
            "tasks": [
                { "id": "1.1.1", "title": "A", "status": "done" },
                { "id": "1.1.1", "title": "B", "status": "pending", "depends_on": ["9.9.9"] }
            ]
        }]
    }));

    let paths: Vec<_> = report.errors().map(|i| i.path.as_str()).collect();
    assert!(paths.contains(&"meta.created_at"));
    assert!(paths.contains(&"meta.updated_at"));
    assert!(paths.contains(&"phases.0.id"));
    assert!(paths.contains(&"phases.0.tasks.0.status"));
    assert!(paths.contains(&"phases.0.tasks.1.id"));

    let warnings: Vec<_> = report.warnings().map(|i| i.path.as_str()).collect();
    assert_eq!(warnings, vec!["phases.0.tasks.1.depends_on.0"]);
}
