//! Edit handlers that apply one mutation and return a formatted result.
//!
//! In dry-run mode every handler computes the same outcome but leaves the
//! file untouched, and the returned wrapper renders as a preview.

use jiff::Timestamp;
use log::debug;

use super::Planner;
use crate::{
    display::{CompactResult, CreateResult, DeleteResult, PlanFile, UpdateResult},
    error::{PlanError, Result},
    models::{Phase, Plan, Task},
    ops::{FieldChange, Moved},
    params::{AddPhase, AddTask, Compact, Id, InitPlan, MoveTask, SetField, SetStatus},
};

impl Planner {
    fn created<T>(&self, resource: T) -> CreateResult<T> {
        if self.dry_run {
            CreateResult::preview(resource)
        } else {
            CreateResult::new(resource)
        }
    }

    fn updated<T>(&self, resource: T) -> UpdateResult<T> {
        if self.dry_run {
            UpdateResult::preview(resource)
        } else {
            UpdateResult::new(resource)
        }
    }

    fn deleted<T>(&self, resource: T) -> DeleteResult<T> {
        if self.dry_run {
            DeleteResult::preview(resource)
        } else {
            DeleteResult::new(resource)
        }
    }

    /// Creates a new plan file.
    ///
    /// # Errors
    ///
    /// * `PlanError::AlreadyExists` - When the file exists and `force` is off
    pub fn init(&self, params: &InitPlan) -> Result<CreateResult<PlanFile>> {
        if self.plan_path.exists() && !params.force {
            return Err(PlanError::AlreadyExists {
                path: self.plan_path.clone(),
            });
        }
        if params.project.trim().is_empty() {
            return Err(PlanError::invalid_input("project").with_reason("must not be empty"));
        }

        let now = Timestamp::now();
        let plan = Plan::init(params.project.clone(), now);
        if !self.dry_run {
            self.save(&plan, now)?;
            debug!("Initialised {}", self.plan_path.display());
        }

        Ok(self.created(PlanFile {
            path: self.plan_path.clone(),
            plan,
        }))
    }

    pub fn add_phase(&self, params: &AddPhase) -> Result<CreateResult<Phase>> {
        let phase = self.commit(|plan, now| plan.add_phase(params, now))?;
        Ok(self.created(phase))
    }

    pub fn add_task(&self, params: &AddTask) -> Result<CreateResult<Task>> {
        let task = self.commit(|plan, now| plan.add_task(params, now))?;
        Ok(self.created(task))
    }

    /// Sets one named field of a task.
    pub fn set_field(&self, params: &SetField) -> Result<UpdateResult<FieldChange>> {
        let field = params.parsed_field()?;
        let change = self.commit(|plan, now| plan.set_field(&params.id, field, &params.value, now))?;
        Ok(self.updated(change))
    }

    /// Changes a task's status, stamping tracking times as needed.
    pub fn set_status(&self, params: &SetStatus) -> Result<UpdateResult<FieldChange>> {
        let change = self.commit(|plan, now| plan.set_status(&params.id, params.status, now))?;
        Ok(self.updated(change))
    }

    /// Moves a task into, or files a new task in, a special phase.
    pub fn move_task(&self, params: &MoveTask) -> Result<UpdateResult<Moved>> {
        let moved = self.commit(|plan, now| {
            plan.move_to_special_phase(&params.query, params.target, params.reason.as_deref(), now)
        })?;
        Ok(self.updated(moved))
    }

    pub fn remove_task(&self, params: &Id) -> Result<DeleteResult<Task>> {
        let task = self.commit(|plan, now| plan.remove_task(&params.id, now))?;
        Ok(self.deleted(task))
    }

    /// Removes a phase together with its tasks.
    pub fn remove_phase(&self, params: &Id) -> Result<DeleteResult<Phase>> {
        let phase = self.commit(|plan, now| plan.remove_phase(&params.id, now))?;
        Ok(self.deleted(phase))
    }

    /// Strips completed tasks to their essentials after backing up the
    /// current file. Dry runs neither back up nor write.
    pub fn compact(&self, params: &Compact) -> Result<CompactResult> {
        let plan = self.load()?;
        let now = Timestamp::now();
        let (compacted_plan, compacted) = plan.compact(now).into_parts();

        if self.dry_run {
            return Ok(CompactResult {
                compacted,
                backup: None,
                dry_run: true,
            });
        }

        let backup = self.backup(params.max_backups)?;
        self.save(&compacted_plan, now)?;
        Ok(CompactResult {
            compacted,
            backup,
            dry_run: false,
        })
    }
}
