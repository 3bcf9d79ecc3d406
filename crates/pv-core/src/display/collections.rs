//! Collection wrapper types for displaying groups of tasks.
//!
//! This module provides wrapper types that format collections of tasks with
//! consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use serde::{Serialize, Serializer};

use super::datetime::Date;
use crate::models::{CompletedTask, FutureTask, Phase, Readiness, SpecialPhase};

/// Newtype wrapper for the upcoming-tasks view.
///
/// # Examples
///
/// ```rust
/// use pv_core::display::FutureTasks;
///
/// let empty = FutureTasks(vec![]);
/// assert_eq!(empty.to_string(), "No upcoming tasks found!\n");
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct FutureTasks(pub Vec<FutureTask>);

impl FutureTasks {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FutureTask> {
        self.0.iter()
    }
}

impl Index<usize> for FutureTasks {
    type Output = FutureTask;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a FutureTasks {
    type Item = &'a FutureTask;
    type IntoIter = std::slice::Iter<'a, FutureTask>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for FutureTasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No upcoming tasks found!");
        }

        writeln!(f, "# Upcoming Tasks")?;
        writeln!(f)?;
        for entry in &self.0 {
            let task = &entry.task;
            write!(
                f,
                "- {} [{}] {} *({} · {})*",
                entry.readiness.icon(),
                task.id,
                task.title,
                task.phase_name,
                entry.readiness.as_str()
            )?;
            if entry.readiness == Readiness::Waiting {
                write!(f, " ← {}", task.depends_on.join(", "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for the recently-completed view.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct CompletedTasks(pub Vec<CompletedTask>);

impl CompletedTasks {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompletedTask> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a CompletedTasks {
    type Item = &'a CompletedTask;
    type IntoIter = std::slice::Iter<'a, CompletedTask>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for CompletedTasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No completed tasks found!");
        }

        writeln!(f, "# Recently Completed")?;
        writeln!(f)?;
        for task in &self.0 {
            writeln!(f, "- ✅ [{}] {}", task.id, task.title)?;
            writeln!(
                f,
                "  *{} · {}*",
                task.phase_name,
                Date(task.completed_at.as_ref())
            )?;
        }
        Ok(())
    }
}

/// The contents of one special phase.
///
/// Serializes as the phase itself, or `null` when the plan has no such
/// phase yet.
#[derive(Debug, Clone)]
pub struct SpecialTasks {
    pub kind: SpecialPhase,
    pub phase: Option<Phase>,
}

impl Serialize for SpecialTasks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.phase.serialize(serializer)
    }
}

impl fmt::Display for SpecialTasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(phase) = &self.phase else {
            return writeln!(f, "No {} phase found!", self.kind.name().to_lowercase());
        };

        writeln!(f, "# {} ({})", phase.name, phase.tasks.len())?;
        writeln!(f)?;
        if phase.tasks.is_empty() {
            return writeln!(f, "Nothing here yet.");
        }
        for task in &phase.tasks {
            write!(f, "{task}")?;
            if let Some(notes) = task.tracking.notes.as_deref().filter(|n| !n.is_empty()) {
                for line in notes.lines() {
                    writeln!(f, "  > {line}")?;
                }
            }
        }
        Ok(())
    }
}
