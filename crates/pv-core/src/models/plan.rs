//! Plan model definition and the load/save document hooks.

use jiff::Timestamp;
use log::{debug, warn};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Phase, SpecialPhase, Summary, Task};
use crate::{
    error::{PlanError, Result},
    progress, validate,
};

/// Root aggregate of a `plan.json` document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Plan {
    pub meta: Meta,

    /// Derived from the phases on every recompute
    #[serde(default)]
    pub summary: Summary,

    /// Ordered phases; regular phases first, special phases last
    pub phases: Vec<Phase>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decisions: Option<Decisions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockers: Option<Vec<Value>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Document metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Meta {
    /// Project name
    pub project: String,

    /// Semantic version of the plan itself
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,

    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub created_at: Timestamp,

    /// Refreshed on every save
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub updated_at: Timestamp,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_plan_path: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Pending and resolved decision records, kept as opaque values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Decisions {
    #[serde(default)]
    pub pending: Vec<Value>,
    #[serde(default)]
    pub resolved: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Plan {
    /// Load-time hook: builds a consistent plan from a parsed document.
    ///
    /// Fails with [`PlanError::Structural`] when `meta` or `phases` is
    /// missing, and with [`PlanError::Validation`] for the first
    /// error-level issue. Warning-level issues are logged. Stored derived
    /// fields are ignored and recomputed.
    pub fn from_value(value: Value) -> Result<Self> {
        check_structure(&value)?;

        let report = validate::validate(&value);
        for issue in report.warnings() {
            warn!("{issue}");
        }
        if let Some(issue) = report.first_error() {
            return Err(PlanError::Validation {
                path: issue.path.clone(),
                message: issue.message.clone(),
            });
        }

        let plan: Plan = serde_json::from_value(value)?;
        debug!(
            "Loaded plan '{}' with {} phases",
            plan.meta.project,
            plan.phases.len()
        );
        Ok(progress::recompute(&plan))
    }

    /// Save-time hook: recomputes derived fields, stamps
    /// `meta.updated_at` with `now` and returns the document value.
    pub fn to_document(&self, now: Timestamp) -> Result<Value> {
        let mut plan = progress::recompute(self);
        plan.meta.updated_at = now;
        Ok(serde_json::to_value(plan)?)
    }

    /// Every task paired with its phase, in document order.
    pub fn tasks(&self) -> impl Iterator<Item = (&Phase, &Task)> {
        self.phases
            .iter()
            .flat_map(|phase| phase.tasks.iter().map(move |task| (phase, task)))
    }

    /// Tasks of regular phases only, in document order.
    pub fn regular_tasks(&self) -> impl Iterator<Item = (&Phase, &Task)> {
        self.tasks().filter(|(phase, _)| phase.is_regular())
    }

    /// The special phase of the given kind, if present.
    pub fn special_phase(&self, kind: SpecialPhase) -> Option<&Phase> {
        self.phases.iter().find(|phase| phase.special() == Some(kind))
    }

    /// Status of a task by exact id anywhere in the plan.
    pub(crate) fn task_by_id(&self, id: &str) -> Option<&Task> {
        self.tasks().map(|(_, task)| task).find(|task| task.id == id)
    }
}

fn check_structure(value: &Value) -> Result<()> {
    let structural = |message: &str| PlanError::Structural {
        message: message.to_string(),
    };

    let root = value
        .as_object()
        .ok_or_else(|| structural("document root must be an object"))?;
    match root.get("meta") {
        Some(Value::Object(_)) => {}
        Some(_) => return Err(structural("'meta' must be an object")),
        None => return Err(structural("missing required key 'meta'")),
    }
    match root.get("phases") {
        Some(Value::Array(_)) => Ok(()),
        Some(_) => Err(structural("'phases' must be an array")),
        None => Err(structural("missing required key 'phases'")),
    }
}
