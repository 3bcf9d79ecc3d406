//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions so the models stay plain
//! data. Output is markdown for the CLI's terminal renderer.

use std::fmt;

use super::datetime::{Date, LocalDateTime};
use crate::models::{Phase, Plan, Priority, SpecialPhase, Status, Task, TaskView};

/// Agent label shown for tasks without one.
pub(crate) const DEFAULT_AGENT: &str = "general";

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SpecialPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `Progress: 50% (2/4 tasks)`
pub(crate) fn fmt_progress(
    f: &mut fmt::Formatter<'_>,
    percentage: f64,
    completed: usize,
    total: usize,
) -> fmt::Result {
    writeln!(f, "Progress: {percentage:.0}% ({completed}/{total} tasks)")
}

/// `# 📋 Project v1.0.0` followed by the overall progress line.
pub(crate) fn fmt_plan_header(f: &mut fmt::Formatter<'_>, plan: &Plan) -> fmt::Result {
    writeln!(f, "# 📋 {} v{}", plan.meta.project, plan.meta.version)?;
    writeln!(f)?;
    fmt_progress(
        f,
        plan.summary.overall_progress,
        plan.summary.completed_tasks,
        plan.summary.total_tasks,
    )
}

impl Task {
    /// One listing line: icon, id, title and agent.
    fn fmt_line(&self, f: &mut fmt::Formatter<'_>, with_deps: bool) -> fmt::Result {
        write!(
            f,
            "- {} [{}] {} *({})*",
            self.status.icon(),
            self.id,
            self.title,
            self.agent_type.as_deref().unwrap_or(DEFAULT_AGENT)
        )?;
        if with_deps && !self.depends_on.is_empty() {
            write!(f, " ← {}", self.depends_on.join(", "))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_line(f, true)
    }
}

impl Phase {
    fn fmt_tasks(&self, f: &mut fmt::Formatter<'_>, with_deps: bool) -> fmt::Result {
        if self.tasks.is_empty() {
            return writeln!(f, "No tasks in this phase.");
        }
        for task in &self.tasks {
            task.fmt_line(f, with_deps)?;
        }
        Ok(())
    }

    /// Compact section used inside the plan overview.
    pub(crate) fn fmt_section(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} Phase {}: {} ({:.0}%)",
            self.status.icon(),
            self.id,
            self.name,
            self.progress.percentage
        )?;
        writeln!(f)?;
        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }
        self.fmt_tasks(f, false)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Phase {}: {}", self.id, self.name)?;
        writeln!(f)?;
        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }
        fmt_progress(
            f,
            self.progress.percentage,
            self.progress.completed,
            self.progress.total,
        )?;
        writeln!(f)?;
        self.fmt_tasks(f, true)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_plan_header(f, self)?;
        writeln!(f, "Updated: {}", LocalDateTime(&self.meta.updated_at))?;

        if self.phases.is_empty() {
            return writeln!(f, "\nNo phases in this plan.");
        }
        for phase in &self.phases {
            writeln!(f)?;
            phase.fmt_section(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for TaskView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## [{}] {}", self.id, self.title)?;
        writeln!(f)?;
        writeln!(f, "- **Status**: {}", self.status.with_icon())?;
        writeln!(f, "- **Phase**: {}", self.phase_name)?;
        writeln!(
            f,
            "- **Agent**: {}",
            self.agent_type.as_deref().unwrap_or(DEFAULT_AGENT)
        )?;
        if !self.depends_on.is_empty() {
            writeln!(f, "- **Depends on**: {}", self.depends_on.join(", "))?;
        }
        if let Some(started) = &self.tracking.started_at {
            writeln!(f, "- **Started**: {}", Date(Some(started)))?;
        }
        if let Some(completed) = &self.tracking.completed_at {
            writeln!(f, "- **Completed**: {}", Date(Some(completed)))?;
        }
        if let Some(notes) = self.tracking.notes.as_deref().filter(|n| !n.is_empty()) {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }
        Ok(())
    }
}
