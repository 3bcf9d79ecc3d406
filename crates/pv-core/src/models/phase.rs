//! Phase model and the reserved special phases.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Status, Task};
use crate::error::PlanError;

/// A named, ordered group of tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Phase {
    /// Numeric id for regular phases, or a special-phase id
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Derived from task statuses on every recompute
    #[serde(default)]
    pub status: Status,

    /// Derived from task statuses on every recompute
    #[serde(default)]
    pub progress: Progress,

    #[serde(default)]
    pub tasks: Vec<Task>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Phase {
    /// An empty pending phase.
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            status: Status::Pending,
            progress: Progress::default(),
            tasks: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Which special phase this is, if any.
    pub fn special(&self) -> Option<SpecialPhase> {
        SpecialPhase::from_id(&self.id)
    }

    /// True for phases that take part in normal sequencing.
    pub fn is_regular(&self) -> bool {
        self.special().is_none()
    }
}

/// Completion counters of a phase.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// Percent complete, one decimal place
    pub percentage: f64,
}

/// Reserved holding phases that sit outside normal sequencing.
///
/// Variants are declared in display order: special phases always follow
/// the regular ones as bugs, ideas, deferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpecialPhase {
    Bugs,
    Ideas,
    Deferred,
}

impl SpecialPhase {
    pub const ALL: [SpecialPhase; 3] = [SpecialPhase::Bugs, SpecialPhase::Ideas, SpecialPhase::Deferred];

    /// Canonical phase id.
    pub fn id(&self) -> &'static str {
        match self {
            SpecialPhase::Bugs => "99",
            SpecialPhase::Ideas => "ideas",
            SpecialPhase::Deferred => "deferred",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SpecialPhase::Bugs => "Bugs",
            SpecialPhase::Ideas => "Ideas",
            SpecialPhase::Deferred => "Deferred",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SpecialPhase::Bugs => "Tasks identified as bugs requiring fixes",
            SpecialPhase::Ideas => "Tasks stored as future ideas or concepts",
            SpecialPhase::Deferred => "Tasks postponed for later consideration",
        }
    }

    /// Short label used in confirmations, e.g. `(deferred)`.
    pub fn label(&self) -> &'static str {
        match self {
            SpecialPhase::Bugs => "bug",
            SpecialPhase::Ideas => "idea",
            SpecialPhase::Deferred => "deferred",
        }
    }

    /// Recognises canonical ids plus the legacy `bugs` id.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "99" | "bugs" => Some(SpecialPhase::Bugs),
            "ideas" => Some(SpecialPhase::Ideas),
            "deferred" => Some(SpecialPhase::Deferred),
            _ => None,
        }
    }

    /// A new, empty phase of this kind.
    pub fn to_phase(self) -> Phase {
        Phase::new(self.id(), self.name(), self.description())
    }
}

impl FromStr for SpecialPhase {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bug" | "bugs" | "99" => Ok(SpecialPhase::Bugs),
            "idea" | "ideas" => Ok(SpecialPhase::Ideas),
            "defer" | "deferred" => Ok(SpecialPhase::Deferred),
            _ => Err(PlanError::invalid_input("phase").with_reason(format!(
                "'{s}' is not a special phase. Use: bug, idea, deferred"
            ))),
        }
    }
}
