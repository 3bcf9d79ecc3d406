//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use super::Planner;

/// Plan file used when no path is configured.
pub const DEFAULT_PLAN_FILE: &str = "plan.json";
/// Backup directory, relative to the directory holding the plan file.
pub const BACKUP_SUBDIR: &str = ".claude/plan-view";
/// Number of rotated backups kept by default.
pub const DEFAULT_MAX_BACKUPS: usize = 5;

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone)]
pub struct PlannerBuilder {
    plan_path: Option<PathBuf>,
    backup_dir: Option<PathBuf>,
    max_backups: usize,
    dry_run: bool,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            plan_path: None,
            backup_dir: None,
            max_backups: DEFAULT_MAX_BACKUPS,
            dry_run: false,
        }
    }

    /// Sets the plan file path.
    ///
    /// If not specified, uses `plan.json` in the working directory.
    pub fn with_plan_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.plan_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets a custom backup directory.
    ///
    /// If not specified, uses `.claude/plan-view` next to the plan file.
    pub fn with_backup_dir<P: AsRef<Path>>(mut self, dir: Option<P>) -> Self {
        if let Some(dir) = dir {
            self.backup_dir = Some(dir.as_ref().to_path_buf());
        }
        self
    }

    /// Sets how many rotated backups are kept; `0` disables backups.
    pub fn with_max_backups(mut self, max_backups: usize) -> Self {
        self.max_backups = max_backups;
        self
    }

    /// When set, edit operations report what they would do without
    /// writing anything.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Builds the configured planner instance.
    ///
    /// Nothing is read or created on disk until an operation runs.
    pub fn build(self) -> Planner {
        let plan_path = self
            .plan_path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PLAN_FILE));
        let backup_dir = self
            .backup_dir
            .unwrap_or_else(|| Self::default_backup_dir(&plan_path));

        Planner {
            plan_path,
            backup_dir,
            max_backups: self.max_backups,
            dry_run: self.dry_run,
        }
    }

    fn default_backup_dir(plan_path: &Path) -> PathBuf {
        plan_path
            .parent()
            .unwrap_or(Path::new(""))
            .join(BACKUP_SUBDIR)
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
