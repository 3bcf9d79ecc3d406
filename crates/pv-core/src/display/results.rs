//! Result wrapper types for displaying operation outcomes.
//!
//! Every wrapper knows whether it describes an applied edit or a dry-run
//! preview. Applied edits read `✅ Added [1.1.3] Write docs`; previews read
//! `Would: add [1.1.3] Write docs`.

use std::{fmt, path::PathBuf};

use crate::{
    models::{Phase, Plan, Task},
    ops::{FieldChange, Moved},
};

fn lead(dry_run: bool) -> &'static str {
    if dry_run {
        "Would:"
    } else {
        "✅"
    }
}

/// A freshly initialised plan and where it is written.
#[derive(Debug, Clone)]
pub struct PlanFile {
    pub path: PathBuf,
    pub plan: Plan,
}

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use pv_core::{display::CreateResult, models::Phase};
///
/// let phase = Phase::new("2", "Polish", "");
/// assert_eq!(CreateResult::new(phase.clone()).to_string(), "✅ Added Phase 2: Polish\n");
/// assert_eq!(CreateResult::preview(phase).to_string(), "Would: add Phase 2: Polish\n");
/// ```
#[derive(Debug, Clone)]
pub struct CreateResult<T> {
    pub resource: T,
    pub dry_run: bool,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            dry_run: false,
        }
    }

    /// A result that was computed but not persisted.
    pub fn preview(resource: T) -> Self {
        Self {
            resource,
            dry_run: true,
        }
    }
}

impl fmt::Display for CreateResult<PlanFile> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.dry_run { "create" } else { "Created" };
        writeln!(
            f,
            "{} {verb} {} for '{}'",
            lead(self.dry_run),
            self.resource.path.display(),
            self.resource.plan.meta.project
        )
    }
}

impl fmt::Display for CreateResult<Phase> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.dry_run { "add" } else { "Added" };
        writeln!(
            f,
            "{} {verb} Phase {}: {}",
            lead(self.dry_run),
            self.resource.id,
            self.resource.name
        )
    }
}

impl fmt::Display for CreateResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.dry_run { "add" } else { "Added" };
        writeln!(
            f,
            "{} {verb} [{}] {}",
            lead(self.dry_run),
            self.resource.id,
            self.resource.title
        )
    }
}

/// Wrapper type for displaying the result of update operations.
#[derive(Debug, Clone)]
pub struct UpdateResult<T> {
    pub resource: T,
    pub dry_run: bool,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            dry_run: false,
        }
    }

    pub fn preview(resource: T) -> Self {
        Self {
            resource,
            dry_run: true,
        }
    }
}

impl fmt::Display for UpdateResult<FieldChange> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let change = &self.resource;
        if self.dry_run {
            write!(f, "{} set ", lead(true))?;
        } else {
            write!(f, "{} ", lead(false))?;
        }
        writeln!(f, "[{}] {} → {}", change.id, change.field, change.value)
    }
}

impl fmt::Display for UpdateResult<Moved> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let moved = &self.resource;
        match (&moved.old_id, self.dry_run) {
            (Some(old), false) => writeln!(f, "✅ [{old}] → [{}] ({})", moved.new_id, moved.target),
            (Some(old), true) => {
                writeln!(f, "Would: move [{old}] → [{}] ({})", moved.new_id, moved.target)
            }
            (None, false) => writeln!(
                f,
                "✅ Added [{}] {} ({})",
                moved.new_id, moved.title, moved.target
            ),
            (None, true) => writeln!(
                f,
                "Would: add [{}] {} ({})",
                moved.new_id, moved.title, moved.target
            ),
        }
    }
}

/// Wrapper type for displaying the result of delete operations.
#[derive(Debug, Clone)]
pub struct DeleteResult<T> {
    pub resource: T,
    pub dry_run: bool,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            dry_run: false,
        }
    }

    pub fn preview(resource: T) -> Self {
        Self {
            resource,
            dry_run: true,
        }
    }
}

impl fmt::Display for DeleteResult<Task> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.dry_run { "remove" } else { "Removed" };
        writeln!(f, "{} {verb} task [{}]", lead(self.dry_run), self.resource.id)
    }
}

impl fmt::Display for DeleteResult<Phase> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.dry_run { "remove" } else { "Removed" };
        write!(f, "{} {verb} phase {}", lead(self.dry_run), self.resource.id)?;
        match self.resource.tasks.len() {
            0 => writeln!(f),
            1 => writeln!(f, " and its task"),
            n => writeln!(f, " and its {n} tasks"),
        }
    }
}

/// Outcome of compacting completed tasks.
#[derive(Debug, Clone)]
pub struct CompactResult {
    /// Number of tasks stripped down
    pub compacted: usize,
    /// Where the pre-compaction copy was written
    pub backup: Option<PathBuf>,
    pub dry_run: bool,
}

impl fmt::Display for CompactResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(backup) = &self.backup {
            writeln!(f, "Backed up to {}", backup.display())?;
        }
        let verb = if self.dry_run { "compact" } else { "Compacted" };
        let noun = if self.compacted == 1 { "task" } else { "tasks" };
        writeln!(
            f,
            "{} {verb} {} completed {noun}",
            lead(self.dry_run),
            self.compacted
        )
    }
}
