//! Mutation operations on a [`Plan`].
//!
//! Every operation borrows the current plan and returns an [`Edit`]: a new
//! plan with progress recomputed and `meta.updated_at` stamped, plus an
//! operation-specific outcome. On failure nothing is returned and the
//! caller's plan is untouched, so a failed edit never leaves a half-applied
//! change behind.
//!
//! ```rust
//! use jiff::Timestamp;
//! use pv_core::{models::{Plan, Status}, params::{AddPhase, AddTask}};
//!
//! let now = Timestamp::from_second(1_735_689_600).unwrap();
//! let plan = Plan::init("Demo", now);
//!
//! let edit = plan.add_phase(&AddPhase { name: "Setup".into(), description: None }, now).unwrap();
//! let edit = edit.plan.add_task(
//!     &AddTask { phase: "0".into(), title: "Init repo".into(), agent: None, deps: vec![] },
//!     now,
//! ).unwrap();
//! assert_eq!(edit.outcome.id, "0.1.1");
//!
//! let edit = edit.plan.set_status("0.1.1", Status::Completed, now).unwrap();
//! assert_eq!(edit.plan.summary.overall_progress, 100.0);
//! ```

mod compact;
mod fields;
mod special;
mod structure;


use jiff::Timestamp;
use serde_json::Map;

pub use fields::{FieldChange, TaskField};
pub use special::Moved;

use crate::{
    models::{Meta, Phase, Plan, SpecialPhase, Summary},
    progress,
};

/// Version written into freshly initialised plans.
pub const INITIAL_VERSION: &str = "1.0.0";
/// Schema version written into freshly initialised plans.
pub const SCHEMA_VERSION: &str = "1.0";
/// Default location of the business plan referenced from `meta`.
pub const BUSINESS_PLAN_PATH: &str = ".claude/BUSINESS_PLAN.md";

/// A successfully applied mutation.
#[derive(Debug, Clone)]
pub struct Edit<T> {
    /// The new, fully consistent plan
    pub plan: Plan,
    /// What the operation did
    pub outcome: T,
}

impl<T> Edit<T> {
    pub fn into_parts(self) -> (Plan, T) {
        (self.plan, self.outcome)
    }
}

fn finish<T>(mut plan: Plan, outcome: T, now: Timestamp) -> Edit<T> {
    progress::recompute_in_place(&mut plan);
    plan.meta.updated_at = now;
    Edit { plan, outcome }
}

impl Plan {
    /// A new plan with no phases.
    pub fn init(project: impl Into<String>, now: Timestamp) -> Plan {
        Plan {
            meta: Meta {
                project: project.into(),
                version: INITIAL_VERSION.to_string(),
                schema_version: Some(SCHEMA_VERSION.to_string()),
                created_at: now,
                updated_at: now,
                business_plan_path: Some(BUSINESS_PLAN_PATH.to_string()),
                extra: Map::new(),
            },
            summary: Summary::default(),
            phases: Vec::new(),
            decisions: None,
            blockers: None,
            extra: Map::new(),
        }
    }

    /// Inserts a regular phase before the first special phase.
    fn insert_regular_phase(&mut self, phase: Phase) {
        let at = self
            .phases
            .iter()
            .position(|p| !p.is_regular())
            .unwrap_or(self.phases.len());
        self.phases.insert(at, phase);
    }

    /// Index of the special phase of `kind`, creating it in its slot when
    /// absent.
    fn ensure_special_phase(&mut self, kind: SpecialPhase) -> usize {
        if let Some(index) = self.phases.iter().position(|p| p.special() == Some(kind)) {
            return index;
        }
        let at = self
            .phases
            .iter()
            .position(|p| p.special().is_some_and(|other| other > kind))
            .unwrap_or(self.phases.len());
        self.phases.insert(at, kind.to_phase());
        at
    }
}
