//! Read-only handlers that return formatted wrapper types.

use super::Planner;
use crate::{
    display::{
        ActivePhase, CompletedTasks, Current, Entity, FutureTasks, NextTask, Overview,
        SpecialTasks, ValidationResult,
    },
    error::Result,
    locator::{self, Found},
    models::{SpecialPhase, TaskView},
    params::{Id, ListCompleted, ListFuture},
    selector,
};

impl Planner {
    /// The whole plan with every phase and task.
    pub fn overview(&self) -> Result<Overview> {
        Ok(Overview(self.load()?))
    }

    /// Summary, current phase and next task.
    pub fn current(&self) -> Result<Current> {
        Ok(Current(self.load()?))
    }

    /// The task to work on next, if any.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use pv_core::PlannerBuilder;
    /// let planner = PlannerBuilder::new().build();
    /// let next = planner.next_task()?;
    /// println!("{next}");
    /// # Result::<(), pv_core::PlanError>::Ok(())
    /// ```
    pub fn next_task(&self) -> Result<NextTask> {
        let plan = self.load()?;
        let next = selector::select_next(&plan).map(|found| TaskView::new(found.phase, found.task));
        Ok(NextTask(next))
    }

    /// The phase currently being worked on.
    pub fn active_phase(&self) -> Result<ActivePhase> {
        let plan = self.load()?;
        Ok(ActivePhase(selector::current_phase(&plan).cloned()))
    }

    /// A task or phase by exact id or unambiguous task prefix.
    ///
    /// # Errors
    ///
    /// * `PlanError::NotFound` - When nothing matches
    /// * `PlanError::Ambiguous` - When a prefix matches several tasks
    pub fn get(&self, params: &Id) -> Result<Entity> {
        let plan = self.load()?;
        Ok(match locator::find(&plan, &params.id)? {
            Found::Task(found) => Entity::Task(TaskView::new(found.phase, found.task)),
            Found::Phase(phase) => Entity::Phase(phase.clone()),
        })
    }

    /// Recently completed tasks, newest first.
    pub fn recently_completed(&self, params: &ListCompleted) -> Result<CompletedTasks> {
        let plan = self.load()?;
        Ok(CompletedTasks(selector::recently_completed(&plan, params.count)))
    }

    /// Upcoming tasks grouped by readiness.
    pub fn future(&self, params: &ListFuture) -> Result<FutureTasks> {
        let plan = self.load()?;
        Ok(FutureTasks(selector::future(&plan, params.limit)))
    }

    /// Tasks parked in one special phase.
    pub fn special(&self, kind: SpecialPhase) -> Result<SpecialTasks> {
        let plan = self.load()?;
        Ok(SpecialTasks {
            kind,
            phase: plan.special_phase(kind).cloned(),
        })
    }

    /// Every validation issue of the document on disk.
    pub fn validate(&self) -> Result<ValidationResult> {
        Ok(ValidationResult {
            path: self.plan_path.clone(),
            report: self.check()?,
        })
    }
}
