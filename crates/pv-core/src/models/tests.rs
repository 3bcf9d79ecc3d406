#[cfg(test)]
mod model_tests {
    use std::str::FromStr;

    use serde_json::{json, Value};

    use crate::{
        error::PlanError,
        models::{Plan, Priority, SpecialPhase, Status, Task},
        test_support::{epoch, later},
    };

    fn document() -> Value {
        json!({
            "meta": {
                "project": "Demo",
                "version": "2.1.0",
                "created_at": "2025-01-01T00:00:00Z",
                "updated_at": "2025-01-01T00:00:00Z",
                "owner": "platform-team"
            },
            "summary": { "total_tasks": 99, "overall_progress": 12.5, "velocity": 3 },
            "phases": [{
                "id": "1",
                "name": "Build",
                "status": "completed",
                "color": "blue",
                "tasks": [{
                    "id": "1.1.1",
                    "title": "Core",
                    "status": "in_progress",
                    "priority": "high",
                    "labels": ["backend"],
                    "tracking": { "started_at": "2025-01-01T09:00:00Z", "reviewer": "sam" }
                }]
            }],
            "decisions": { "pending": [{ "q": "db?" }], "resolved": [] },
            "blockers": []
        })
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let plan = Plan::from_value(document()).unwrap();
        let out = plan.to_document(later()).unwrap();

        assert_eq!(out["meta"]["owner"], "platform-team");
        assert_eq!(out["phases"][0]["color"], "blue");
        assert_eq!(out["phases"][0]["tasks"][0]["labels"], json!(["backend"]));
        assert_eq!(out["phases"][0]["tasks"][0]["tracking"]["reviewer"], "sam");
        assert_eq!(out["summary"]["velocity"], 3);
        assert_eq!(out["decisions"]["pending"][0]["q"], "db?");
        assert_eq!(out["blockers"], json!([]));
    }

    #[test]
    fn test_optional_task_keys_keep_their_shape() {
        let mut doc = document();
        doc["phases"][0]["tasks"] = json!([
            {
                "id": "1.1.1",
                "title": "Explicit",
                "status": "pending",
                "agent_type": null,
                "depends_on": [],
                "tracking": {}
            },
            { "id": "1.1.2", "title": "Sparse", "status": "pending" }
        ]);

        let mut plan = Plan::from_value(doc).unwrap();
        let out = plan.to_document(later()).unwrap();
        let explicit = out["phases"][0]["tasks"][0].as_object().unwrap();
        assert_eq!(explicit["agent_type"], Value::Null);
        assert_eq!(explicit["depends_on"], json!([]));
        let sparse = out["phases"][0]["tasks"][1].as_object().unwrap();
        assert!(!sparse.contains_key("agent_type"));
        assert!(!sparse.contains_key("depends_on"));

        // values set later are written even where the key was absent
        plan.phases[0].tasks[1].agent_type = Some("writer".to_string());
        plan.phases[0].tasks[1].depends_on = vec!["1.1.1".to_string()];
        let out = plan.to_document(later()).unwrap();
        assert_eq!(out["phases"][0]["tasks"][1]["agent_type"], "writer");
        assert_eq!(out["phases"][0]["tasks"][1]["depends_on"], json!(["1.1.1"]));
        let reloaded = Plan::from_value(out).unwrap();
        assert_eq!(reloaded.phases[0].tasks, plan.phases[0].tasks);

        let fresh = serde_json::to_value(Task::new("1.1.3", "New")).unwrap();
        assert_eq!(fresh["agent_type"], Value::Null);
        assert_eq!(fresh["depends_on"], json!([]));
    }

    #[test]
    fn test_stored_derived_fields_are_recomputed() {
        let plan = Plan::from_value(document()).unwrap();

        assert_eq!(plan.phases[0].status, Status::InProgress);
        assert_eq!(plan.phases[0].progress.total, 1);
        assert_eq!(plan.summary.total_tasks, 1);
        assert_eq!(plan.summary.completed_tasks, 0);
        assert_eq!(plan.summary.overall_progress, 0.0);
    }

    #[test]
    fn test_to_document_stamps_updated_at() {
        let plan = Plan::from_value(document()).unwrap();
        let out = plan.to_document(later()).unwrap();

        assert_eq!(out["meta"]["updated_at"], "2025-01-02T00:00:00Z");
        assert_eq!(out["meta"]["created_at"], "2025-01-01T00:00:00Z");
    }

    #[test]
    fn test_missing_summary_and_optional_fields_default() {
        let plan = Plan::from_value(json!({
            "meta": {
                "project": "Bare",
                "version": "1.0.0",
                "created_at": "2025-01-01T00:00:00Z",
                "updated_at": "2025-01-01T00:00:00Z"
            },
            "phases": [{ "id": "0", "name": "Only", "tasks": [] }]
        }))
        .unwrap();

        assert_eq!(plan.summary.total_phases, 1);
        assert_eq!(plan.phases[0].description, "");
        assert_eq!(plan.phases[0].status, Status::Pending);
        assert!(plan.decisions.is_none());
    }

    #[test]
    fn test_structural_errors() {
        let err = Plan::from_value(json!({ "phases": [] })).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid plan document: missing required key 'meta'"
        );

        let err = Plan::from_value(json!({ "meta": {}, "phases": {} })).unwrap_err();
        assert!(matches!(err, PlanError::Structural { .. }));

        let err = Plan::from_value(json!([])).unwrap_err();
        assert!(err.to_string().contains("root must be an object"));
    }

    #[test]
    fn test_first_validation_error_rejects_load() {
        let mut value = document();
        value["phases"][0]["tasks"][0]["id"] = json!("1.1");

        match Plan::from_value(value).unwrap_err() {
            PlanError::Validation { path, .. } => assert_eq!(path, "phases.0.tasks.0.id"),
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_transition_stamps_once() {
        let mut task = Task::new("1.1.1", "Core");

        task.transition(Status::InProgress, epoch());
        assert_eq!(task.tracking.started_at, Some(epoch()));

        task.transition(Status::Pending, later());
        task.transition(Status::InProgress, later());
        assert_eq!(task.tracking.started_at, Some(epoch()));

        task.transition(Status::Completed, later());
        assert_eq!(task.tracking.completed_at, Some(later()));

        task.transition(Status::Blocked, later());
        assert_eq!(task.status, Status::Blocked);
        assert_eq!(task.tracking.completed_at, Some(later()));
    }

    #[test]
    fn test_append_note() {
        let mut task = Task::new("1.1.1", "Core");
        task.append_note("first");
        task.append_note("second");
        assert_eq!(task.tracking.notes.as_deref(), Some("first\nsecond"));

        task.tracking.notes = Some(String::new());
        task.append_note("fresh");
        assert_eq!(task.tracking.notes.as_deref(), Some("fresh"));
    }

    #[test]
    fn test_compact_completed_task() {
        let mut task = Task::new("1.1.1", "Core");
        task.agent_type = Some("backend".to_string());
        task.depends_on = vec!["0.1.1".to_string()];
        task.transition(Status::InProgress, epoch());
        task.transition(Status::Completed, later());
        task.append_note("shipped");

        assert!(task.compact());
        assert_eq!(
            serde_json::to_value(&task).unwrap(),
            json!({
                "id": "1.1.1",
                "title": "Core",
                "status": "completed",
                "tracking": { "completed_at": "2025-01-02T00:00:00Z" }
            })
        );
        assert!(!task.compact());

        let mut pending = Task::new("1.1.2", "Later");
        pending.agent_type = Some("backend".to_string());
        assert!(!pending.compact());
        assert!(pending.agent_type.is_some());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(Status::from_str("in_progress").unwrap(), Status::InProgress);
        assert_eq!(Status::from_str("skipped").unwrap(), Status::Skipped);

        let err = Status::from_str("done").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid status 'done'. Use: pending, in_progress, completed, blocked, skipped"
        );
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert!(matches!(
            "urgent".parse::<Priority>(),
            Err(PlanError::InvalidPriority { .. })
        ));
    }

    #[test]
    fn test_special_phase_aliases() {
        assert_eq!("bug".parse::<SpecialPhase>().unwrap(), SpecialPhase::Bugs);
        assert_eq!("99".parse::<SpecialPhase>().unwrap(), SpecialPhase::Bugs);
        assert_eq!("idea".parse::<SpecialPhase>().unwrap(), SpecialPhase::Ideas);
        assert_eq!("defer".parse::<SpecialPhase>().unwrap(), SpecialPhase::Deferred);
        assert!("later".parse::<SpecialPhase>().is_err());

        assert_eq!(SpecialPhase::from_id("bugs"), Some(SpecialPhase::Bugs));
        assert_eq!(SpecialPhase::from_id("bug"), None);

        let phase = SpecialPhase::Deferred.to_phase();
        assert_eq!(phase.id, "deferred");
        assert_eq!(phase.special(), Some(SpecialPhase::Deferred));
        assert!(!phase.is_regular());
    }
}
