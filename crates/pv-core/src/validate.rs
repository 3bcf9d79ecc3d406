//! Structural and semantic checks on raw plan documents.
//!
//! Validation runs on the parsed JSON value rather than on [`Plan`], so it
//! can report every problem of a document that would not deserialize.
//! All issues are collected in document order; each carries a dotted path
//! such as `phases.0.tasks.1.status`.
//!
//! Dangling and self-referencing dependencies are warnings. Everything
//! else is an error.

use std::{collections::HashSet, fmt};

use jiff::Timestamp;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    error::Result,
    id::{is_valid_phase_id, is_valid_task_id},
    models::{Plan, Priority, Status},
};

/// How serious an issue is.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One problem found in a document.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Issue {
    /// Dotted location, e.g. `phases.0.tasks.1.status`
    pub path: String,
    pub message: String,
    pub severity: Severity,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        if self.path.is_empty() {
            write!(f, "{label}: {}", self.message)
        } else {
            write!(f, "{label} at {}: {}", self.path, self.message)
        }
    }
}

/// Every issue found in one document.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Report {
    pub issues: Vec<Issue>,
}

impl Report {
    /// True when there is no error-level issue.
    pub fn is_valid(&self) -> bool {
        self.first_error().is_none()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    pub fn first_error(&self) -> Option<&Issue> {
        self.errors().next()
    }
}

/// Validates a raw document.
pub fn validate(document: &Value) -> Report {
    let mut checker = Checker::default();
    checker.document(document);
    Report {
        issues: checker.issues,
    }
}

/// Validates an in-memory plan by way of its serialized form.
pub fn validate_plan(plan: &Plan) -> Result<Report> {
    Ok(validate(&serde_json::to_value(plan)?))
}

fn join(base: &str, key: impl fmt::Display) -> String {
    if base.is_empty() {
        key.to_string()
    } else {
        format!("{base}.{key}")
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Default)]
struct Checker {
    issues: Vec<Issue>,
    task_ids: HashSet<String>,
}

impl Checker {
    fn error(&mut self, path: String, message: impl Into<String>) {
        self.issues.push(Issue {
            path,
            message: message.into(),
            severity: Severity::Error,
        });
    }

    fn warning(&mut self, path: String, message: impl Into<String>) {
        self.issues.push(Issue {
            path,
            message: message.into(),
            severity: Severity::Warning,
        });
    }

    fn wrong_type(&mut self, path: String, expected: &str, found: &Value) {
        self.error(path, format!("expected {expected}, found {}", type_name(found)));
    }

    fn document(&mut self, document: &Value) {
        let Some(root) = document.as_object() else {
            self.wrong_type(String::new(), "object", document);
            return;
        };

        // dependency targets are checked against every id in the plan
        self.task_ids = collect_task_ids(root);

        match root.get("meta") {
            Some(Value::Object(meta)) => self.meta(meta),
            Some(other) => self.wrong_type("meta".into(), "object", other),
            None => self.error("meta".into(), "missing required field"),
        }

        match root.get("summary") {
            None => {}
            Some(Value::Object(summary)) => {
                for key in ["total_phases", "total_tasks", "completed_tasks"] {
                    self.non_negative(summary, "summary", key, u64::MAX);
                }
                self.number(summary, "summary", "overall_progress");
            }
            Some(other) => self.wrong_type("summary".into(), "object", other),
        }

        match root.get("phases") {
            Some(Value::Array(phases)) => self.phases(phases),
            Some(other) => self.wrong_type("phases".into(), "array", other),
            None => self.error("phases".into(), "missing required field"),
        }

        if let Some(decisions) = root.get("decisions") {
            self.decisions(decisions);
        }
        if let Some(blockers) = root.get("blockers") {
            if !blockers.is_array() && !blockers.is_null() {
                self.wrong_type("blockers".into(), "array", blockers);
            }
        }
    }

    fn meta(&mut self, meta: &Map<String, Value>) {
        self.required_string(meta, "meta", "project");
        self.required_string(meta, "meta", "version");
        self.required_timestamp(meta, "meta", "created_at");
        self.required_timestamp(meta, "meta", "updated_at");
        self.optional_string(meta, "meta", "schema_version");
        self.optional_string(meta, "meta", "business_plan_path");
    }

    fn decisions(&mut self, decisions: &Value) {
        match decisions {
            Value::Null => {}
            Value::Object(map) => {
                for key in ["pending", "resolved"] {
                    if let Some(list) = map.get(key) {
                        if !list.is_array() {
                            self.wrong_type(join("decisions", key), "array", list);
                        }
                    }
                }
            }
            other => self.wrong_type("decisions".into(), "object", other),
        }
    }

    fn phases(&mut self, phases: &[Value]) {
        let mut seen_phases = HashSet::new();
        let mut seen_tasks = HashSet::new();

        for (i, phase) in phases.iter().enumerate() {
            let path = join("phases", i);
            let Some(phase) = phase.as_object() else {
                self.wrong_type(path, "object", phase);
                continue;
            };

            if let Some(id) = self.required_string(phase, &path, "id") {
                if !is_valid_phase_id(id) {
                    self.error(
                        join(&path, "id"),
                        format!("'{id}' is not a valid phase id (digits, 'deferred', 'ideas' or '99')"),
                    );
                } else if !seen_phases.insert(id.to_string()) {
                    self.error(join(&path, "id"), format!("duplicate phase id '{id}'"));
                }
            }
            self.required_string(phase, &path, "name");
            if let Some(description) = phase.get("description") {
                if !description.is_string() {
                    self.wrong_type(join(&path, "description"), "string", description);
                }
            }
            self.optional_status(phase, &path);
            match phase.get("progress") {
                None => {}
                Some(Value::Object(progress)) => {
                    let progress_path = join(&path, "progress");
                    self.non_negative(progress, &progress_path, "completed", u64::MAX);
                    self.non_negative(progress, &progress_path, "total", u64::MAX);
                    self.number(progress, &progress_path, "percentage");
                }
                Some(other) => self.wrong_type(join(&path, "progress"), "object", other),
            }

            match phase.get("tasks") {
                None => {}
                Some(Value::Array(tasks)) => {
                    for (j, task) in tasks.iter().enumerate() {
                        self.task(task, &join(&join(&path, "tasks"), j), &mut seen_tasks);
                    }
                }
                Some(other) => self.wrong_type(join(&path, "tasks"), "array", other),
            }
        }
    }

    fn task(&mut self, task: &Value, path: &str, seen: &mut HashSet<String>) {
        let Some(task) = task.as_object() else {
            self.wrong_type(path.to_string(), "object", task);
            return;
        };

        let own_id = self.required_string(task, path, "id");
        if let Some(id) = own_id {
            if !is_valid_task_id(id) {
                self.error(
                    join(path, "id"),
                    format!("'{id}' is not a valid task id (expected <phase>.<section>.<task>)"),
                );
            } else if !seen.insert(id.to_string()) {
                self.error(join(path, "id"), format!("duplicate task id '{id}'"));
            }
        }

        self.required_string(task, path, "title");
        match task.get("status") {
            None => self.error(join(path, "status"), "missing required field"),
            Some(_) => self.optional_status(task, path),
        }

        match task.get("agent_type") {
            None | Some(Value::Null) => {}
            Some(Value::String(agent)) if agent.trim().is_empty() => {
                self.error(join(path, "agent_type"), "must not be empty")
            }
            Some(Value::String(_)) => {}
            Some(other) => self.wrong_type(join(path, "agent_type"), "string or null", other),
        }

        match task.get("depends_on") {
            None => {}
            Some(Value::Array(deps)) => self.dependencies(deps, path, own_id),
            Some(other) => self.wrong_type(join(path, "depends_on"), "array", other),
        }

        match task.get("tracking") {
            None => {}
            Some(Value::Object(tracking)) => self.tracking(tracking, &join(path, "tracking")),
            Some(other) => self.wrong_type(join(path, "tracking"), "object", other),
        }

        match task.get("priority") {
            None | Some(Value::Null) => {}
            Some(Value::String(p)) => {
                if let Err(err) = p.parse::<Priority>() {
                    self.error(join(path, "priority"), err.to_string());
                }
            }
            Some(other) => self.wrong_type(join(path, "priority"), "string", other),
        }

        self.optional_count(task, path, "estimated_minutes");

        match task.get("subtasks") {
            None | Some(Value::Null) | Some(Value::Array(_)) => {}
            Some(other) => self.wrong_type(join(path, "subtasks"), "array", other),
        }
    }

    fn dependencies(&mut self, deps: &[Value], path: &str, own_id: Option<&str>) {
        for (k, dep) in deps.iter().enumerate() {
            let dep_path = join(&join(path, "depends_on"), k);
            let Some(dep) = dep.as_str() else {
                self.wrong_type(dep_path, "string", dep);
                continue;
            };
            if !is_valid_task_id(dep) {
                self.error(dep_path, format!("'{dep}' is not a valid task id"));
            } else if Some(dep) == own_id {
                self.warning(dep_path, format!("task depends on itself ('{dep}')"));
            } else if !self.task_ids.contains(dep) {
                self.warning(dep_path, format!("depends on unknown task '{dep}'"));
            }
        }
    }

    fn tracking(&mut self, tracking: &Map<String, Value>, path: &str) {
        for key in ["started_at", "completed_at"] {
            match tracking.get(key) {
                None | Some(Value::Null) => {}
                Some(Value::String(s)) => self.timestamp(s, join(path, key)),
                Some(other) => self.wrong_type(join(path, key), "timestamp string", other),
            }
        }
        self.optional_count(tracking, path, "time_spent_minutes");
        self.non_negative(tracking, path, "attempts", u64::from(u32::MAX));
        for key in ["notes", "last_error", "assigned_agent_id"] {
            self.optional_string(tracking, path, key);
        }
    }

    fn optional_status(&mut self, object: &Map<String, Value>, path: &str) {
        match object.get("status") {
            None => {}
            Some(Value::String(s)) => {
                if let Err(err) = s.parse::<Status>() {
                    self.error(join(path, "status"), err.to_string());
                }
            }
            Some(other) => self.wrong_type(join(path, "status"), "string", other),
        }
    }

    fn required_string<'v>(
        &mut self,
        object: &'v Map<String, Value>,
        path: &str,
        key: &str,
    ) -> Option<&'v str> {
        match object.get(key) {
            Some(Value::String(s)) => Some(s),
            Some(other) => {
                self.wrong_type(join(path, key), "string", other);
                None
            }
            None => {
                self.error(join(path, key), "missing required field");
                None
            }
        }
    }

    fn optional_string(&mut self, object: &Map<String, Value>, path: &str, key: &str) {
        match object.get(key) {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(other) => self.wrong_type(join(path, key), "string or null", other),
        }
    }

    fn required_timestamp(&mut self, object: &Map<String, Value>, path: &str, key: &str) {
        if let Some(s) = self.required_string(object, path, key) {
            self.timestamp(s, join(path, key));
        }
    }

    fn timestamp(&mut self, value: &str, path: String) {
        if value.parse::<Timestamp>().is_err() {
            self.error(path, format!("'{value}' is not an RFC 3339 timestamp"));
        }
    }

    fn number(&mut self, object: &Map<String, Value>, path: &str, key: &str) {
        match object.get(key) {
            None | Some(Value::Number(_)) => {}
            Some(other) => self.wrong_type(join(path, key), "number", other),
        }
    }

    fn optional_count(&mut self, object: &Map<String, Value>, path: &str, key: &str) {
        if !matches!(object.get(key), Some(Value::Null)) {
            self.non_negative(object, path, key, u64::MAX);
        }
    }

    fn non_negative(&mut self, object: &Map<String, Value>, path: &str, key: &str, max: u64) {
        match object.get(key) {
            None => {}
            Some(Value::Number(n)) => {
                if n.as_i64().is_some_and(|v| v < 0) || n.as_f64().is_some_and(|v| v < 0.0) {
                    self.error(join(path, key), "must be non-negative");
                } else if !n.as_u64().is_some_and(|v| v <= max) {
                    self.error(join(path, key), "must be a whole number");
                }
            }
            Some(other) => self.wrong_type(join(path, key), "number", other),
        }
    }
}

fn collect_task_ids(root: &Map<String, Value>) -> HashSet<String> {
    root.get("phases")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|phase| phase.get("tasks")?.as_array())
        .flatten()
        .filter_map(|task| task.get("id")?.as_str().map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests;
