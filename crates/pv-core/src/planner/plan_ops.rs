//! Document operations for the Planner.

use std::path::PathBuf;

use jiff::Timestamp;
use log::debug;

use super::Planner;
use crate::{
    error::Result,
    models::Plan,
    ops::Edit,
    store,
    validate::{self, Report},
};

impl Planner {
    /// Loads the plan through the load-time hook.
    pub fn load(&self) -> Result<Plan> {
        store::read_plan(&self.plan_path)
    }

    /// Saves the plan, stamping `meta.updated_at` with `now`.
    pub fn save(&self, plan: &Plan, now: Timestamp) -> Result<()> {
        store::write_plan(&self.plan_path, plan, now)
    }

    /// Validates the document on disk without loading it into a [`Plan`].
    pub fn check(&self) -> Result<Report> {
        let document = store::read_document(&self.plan_path)?;
        Ok(validate::validate(&document))
    }

    /// Copies the current file into the backup directory, keeping at most
    /// `max_backups` (or the planner's limit) rotated copies.
    pub fn backup(&self, max_backups: Option<usize>) -> Result<Option<PathBuf>> {
        store::backup_plan(
            &self.plan_path,
            &self.backup_dir,
            max_backups.unwrap_or(self.max_backups),
        )
    }

    /// Applies one edit: loads the plan, runs `edit` with the current time
    /// and persists the result unless in dry-run mode. Returns the
    /// operation's outcome.
    pub(crate) fn commit<T>(&self, edit: impl FnOnce(&Plan, Timestamp) -> Result<Edit<T>>) -> Result<T> {
        let plan = self.load()?;
        let now = Timestamp::now();
        let (plan, outcome) = edit(&plan, now)?.into_parts();

        if self.dry_run {
            debug!("Dry run; not writing {}", self.plan_path.display());
        } else {
            self.save(&plan, now)?;
        }
        Ok(outcome)
    }
}
