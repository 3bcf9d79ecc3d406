//! Status and priority enumerations for phases and tasks.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Lifecycle status shared by tasks and phases.
///
/// Phase statuses are derived from their tasks and only ever take the
/// values `pending`, `in_progress` and `completed`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Not started
    #[default]
    Pending,

    /// Currently being worked on
    InProgress,

    /// Finished
    Completed,

    /// Cannot proceed until something external changes
    Blocked,

    /// Intentionally not done
    Skipped,
}

impl Status {
    /// All statuses, in the order they are listed to users.
    pub const ALL: [Status; 5] = [
        Status::Pending,
        Status::InProgress,
        Status::Completed,
        Status::Blocked,
        Status::Skipped,
    ];

    /// Document representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
            Status::Blocked => "blocked",
            Status::Skipped => "skipped",
        }
    }

    /// Emoji icon used in terminal listings.
    ///
    /// ```rust
    /// use pv_core::models::Status;
    ///
    /// assert_eq!(Status::Completed.icon(), "✅");
    /// assert_eq!(Status::InProgress.icon(), "🔄");
    /// assert_eq!(Status::Pending.icon(), "⏳");
    /// ```
    pub fn icon(&self) -> &'static str {
        match self {
            Status::Completed => "✅",
            Status::InProgress => "🔄",
            Status::Pending => "⏳",
            Status::Blocked => "🛑",
            Status::Skipped => "⏭️",
        }
    }

    /// Icon followed by the document name, e.g. `🔄 in_progress`.
    pub fn with_icon(&self) -> String {
        format!("{} {}", self.icon(), self.as_str())
    }
}

impl FromStr for Status {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| PlanError::InvalidStatus {
                value: s.to_string(),
            })
    }
}

/// Optional task priority.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Document representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(PlanError::InvalidPriority {
                value: s.to_string(),
            }),
        }
    }
}
