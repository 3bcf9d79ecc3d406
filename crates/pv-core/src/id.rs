//! Hierarchical task identifiers (`<phase>.<section>.<task>`) and phase ids.
//!
//! Task ids are three dot-separated, non-empty segments made of ASCII
//! letters, digits, `-` or `_`. Phase ids used on their own are either all
//! digits or one of the reserved special-phase ids.
//!
//! Partial ids are matched on whole segments: `"1"` is a prefix of
//! `"1.1.1"` but not of `"11.1.1"`.

use std::{fmt, str::FromStr};

use crate::{
    error::{PlanError, Result},
    models::SpecialPhase,
};

/// Structured form of a task id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId {
    pub phase: String,
    pub section: String,
    pub task: String,
}

impl TaskId {
    /// Parses `<phase>.<section>.<task>`.
    pub fn parse(id: &str) -> Result<Self> {
        let malformed = || PlanError::MalformedId { id: id.to_string() };

        let mut parts = id.split('.');
        let (Some(phase), Some(section), Some(task), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        if ![phase, section, task].iter().all(|s| is_segment(s)) {
            return Err(malformed());
        }

        Ok(Self {
            phase: phase.to_string(),
            section: section.to_string(),
            task: task.to_string(),
        })
    }

    /// Numeric value of the section segment, if it is a number.
    pub fn section_number(&self) -> Option<u64> {
        self.section.parse().ok()
    }

    /// Numeric value of the task segment, if it is a number.
    pub fn task_number(&self) -> Option<u64> {
        self.task.parse().ok()
    }
}

impl FromStr for TaskId {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.phase, self.section, self.task)
    }
}

fn is_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// True for a well-formed task id.
pub fn is_valid_task_id(id: &str) -> bool {
    TaskId::parse(id).is_ok()
}

/// True for a standalone phase id: all digits, or a reserved special id.
pub fn is_valid_phase_id(id: &str) -> bool {
    (!id.is_empty() && id.chars().all(|c| c.is_ascii_digit())) || SpecialPhase::from_id(id).is_some()
}

/// True when `prefix` names `id` itself or one of its leading segment groups.
///
/// ```rust
/// use pv_core::id::matches_prefix;
///
/// assert!(matches_prefix("1.1.1", "1"));
/// assert!(matches_prefix("1.1.1", "1.1"));
/// assert!(matches_prefix("1.1.1", "1.1.1"));
/// assert!(!matches_prefix("11.1.1", "1"));
/// assert!(!matches_prefix("1.12.1", "1.1"));
/// ```
pub fn matches_prefix(id: &str, prefix: &str) -> bool {
    if prefix.is_empty() {
        return false;
    }

    let mut id_segments = id.split('.');
    prefix
        .split('.')
        .all(|want| !want.is_empty() && id_segments.next() == Some(want))
}
