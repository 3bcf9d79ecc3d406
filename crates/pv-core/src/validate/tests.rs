use serde_json::{json, Value};

use super::*;

fn document(tasks: Value) -> Value {
    json!({
        "meta": {
            "project": "Demo",
            "version": "1.0.0",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        },
        "phases": [{
            "id": "1",
            "name": "Build",
            "description": "",
            "tasks": tasks
        }]
    })
}

fn paths(report: &Report, severity: Severity) -> Vec<String> {
    report
        .issues
        .iter()
        .filter(|i| i.severity == severity)
        .map(|i| i.path.clone())
        .collect()
}

#[test]
fn test_clean_document_is_valid() {
    let report = validate(&document(json!([
        { "id": "1.1.1", "title": "A", "status": "completed" },
        { "id": "1.1.2", "title": "B", "status": "pending", "depends_on": ["1.1.1"],
          "priority": "high", "estimated_minutes": 30,
          "tracking": { "attempts": 2, "started_at": null } }
    ])));

    assert!(report.is_valid());
    assert!(report.issues.is_empty(), "{:?}", report.issues);
}

#[test]
fn test_reports_every_error_with_path() {
    let report = validate(&document(json!([
        { "id": "1.1", "title": "A", "status": "done" },
        { "id": "1.1.2", "status": "pending", "priority": "urgent" },
        { "id": "1.1.3", "title": "C", "status": "pending", "estimated_minutes": -5,
          "tracking": { "attempts": -1 } }
    ])));

    assert!(!report.is_valid());
    assert_eq!(
        paths(&report, Severity::Error),
        vec![
            "phases.0.tasks.0.id",
            "phases.0.tasks.0.status",
            "phases.0.tasks.1.title",
            "phases.0.tasks.1.priority",
            "phases.0.tasks.2.tracking.attempts",
            "phases.0.tasks.2.estimated_minutes",
        ]
    );
    assert_eq!(
        report.first_error().unwrap().message,
        "'1.1' is not a valid task id (expected <phase>.<section>.<task>)"
    );
}

#[test]
fn test_dangling_and_self_dependencies_are_warnings() {
    let report = validate(&document(json!([
        { "id": "1.1.1", "title": "A", "status": "pending", "depends_on": ["1.1.1", "4.1.1"] }
    ])));

    assert!(report.is_valid());
    assert_eq!(
        paths(&report, Severity::Warning),
        vec!["phases.0.tasks.0.depends_on.0", "phases.0.tasks.0.depends_on.1"]
    );
}

#[test]
fn test_malformed_dependency_is_error() {
    let report = validate(&document(json!([
        { "id": "1.1.1", "title": "A", "status": "pending", "depends_on": ["oops"] }
    ])));
    assert_eq!(
        paths(&report, Severity::Error),
        vec!["phases.0.tasks.0.depends_on.0"]
    );
}

#[test]
fn test_duplicate_ids() {
    let mut doc = document(json!([
        { "id": "1.1.1", "title": "A", "status": "pending" },
        { "id": "1.1.1", "title": "B", "status": "pending" }
    ]));
    doc["phases"]
        .as_array_mut()
        .unwrap()
        .push(json!({ "id": "1", "name": "Again", "tasks": [] }));

    let report = validate(&doc);
    let messages: Vec<_> = report.errors().map(|i| i.message.as_str()).collect();
    assert_eq!(
        messages,
        vec!["duplicate task id '1.1.1'", "duplicate phase id '1'"]
    );
}

#[test]
fn test_empty_agent_type_is_rejected() {
    let report = validate(&document(json!([
        { "id": "1.1.1", "title": "A", "status": "pending", "agent_type": "  " },
        { "id": "1.1.2", "title": "B", "status": "pending", "agent_type": null }
    ])));
    assert_eq!(paths(&report, Severity::Error), vec!["phases.0.tasks.0.agent_type"]);
}

#[test]
fn test_missing_top_level_fields() {
    let report = validate(&json!({ "phases": "nope" }));
    assert_eq!(paths(&report, Severity::Error), vec!["meta", "phases"]);
    assert_eq!(
        report.issues[1].to_string(),
        "error at phases: expected array, found string"
    );
}

#[test]
fn test_phase_ids_and_timestamps() {
    let report = validate(&json!({
        "meta": {
            "project": "Demo",
            "version": "1.0.0",
            "created_at": "yesterday",
            "updated_at": "2025-01-01T00:00:00Z"
        },
        "phases": [
            { "id": "setup", "name": "Setup" },
            { "id": "deferred", "name": "Deferred" },
            { "id": "99", "name": "Bugs" }
        ]
    }));
    assert_eq!(
        paths(&report, Severity::Error),
        vec!["meta.created_at", "phases.0.id"]
    );
}

#[test]
fn test_validate_plan_accepts_loaded_plan() {
    let plan = Plan::from_value(document(json!([
        { "id": "1.1.1", "title": "A", "status": "in_progress" }
    ])))
    .unwrap();
    assert!(validate_plan(&plan).unwrap().is_valid());
}
