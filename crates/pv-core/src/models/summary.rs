//! Plan-level rollup of task counts.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Derived totals across every phase of a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Summary {
    #[serde(default)]
    pub total_phases: usize,
    #[serde(default)]
    pub total_tasks: usize,
    #[serde(default)]
    pub completed_tasks: usize,
    /// Percent of all tasks completed, one decimal place
    #[serde(default)]
    pub overall_progress: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Summary {
    /// Tasks not yet completed.
    pub fn remaining_tasks(&self) -> usize {
        self.total_tasks.saturating_sub(self.completed_tasks)
    }
}
