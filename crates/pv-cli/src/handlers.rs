//! Command dispatch for the pv CLI.
//!
//! View commands print either rendered markdown or, with `--json`, the
//! pretty-printed JSON projection of the same wrapper. Edit commands print
//! their confirmation unless `--quiet` is set; dry-run previews are always
//! printed.

use std::{fmt::Display, process::ExitCode};

use anyhow::{Context, Result};
use log::debug;
use pv_core::{Planner, SpecialPhase, Status};
use serde::Serialize;

use crate::{
    args::Commands,
    cli::{MoveArgs, RmArgs, RmKind, TaskIdArgs},
    renderer::TerminalRenderer,
};

/// Runs one command against a planner.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
    json: bool,
    quiet: bool,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self {
            planner,
            renderer,
            json: false,
            quiet: false,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Dispatches `command`; no command shows the whole plan.
    pub fn run(&self, command: Option<Commands>) -> Result<ExitCode> {
        let Some(command) = command else {
            return self.view(&self.planner.overview().context("Failed to load plan")?);
        };
        debug!("Dispatching command");

        use Commands::*;
        match command {
            Current => self.view(&self.planner.current().context("Failed to load plan")?),
            Next => self.view(&self.planner.next_task().context("Failed to load plan")?),
            Phase => self.view(&self.planner.active_phase().context("Failed to load plan")?),
            Get(args) => self.view(&self.planner.get(&args.into())?),
            Last(args) => self.view(
                &self
                    .planner
                    .recently_completed(&args.into())
                    .context("Failed to load plan")?,
            ),
            Future(args) => self.view(&self.planner.future(&args.into()).context("Failed to load plan")?),
            Bugs => self.special(SpecialPhase::Bugs),
            Ideas => self.special(SpecialPhase::Ideas),
            Deferred => self.special(SpecialPhase::Deferred),
            Validate => self.validate(),
            Schema => self.schema(),

            Init(args) => self.confirm(&self.planner.init(&args.into())?),
            AddPhase(args) => self.confirm(&self.planner.add_phase(&args.into())?),
            AddTask(args) => self.confirm(&self.planner.add_task(&args.into())?),
            Set(args) => self.confirm(&self.planner.set_field(&args.into())?),
            Done(args) => self.set_status(args, Status::Completed),
            Start(args) => self.set_status(args, Status::InProgress),
            Block(args) => self.set_status(args, Status::Blocked),
            Skip(args) => self.set_status(args, Status::Skipped),
            Defer(args) => self.move_task(args, SpecialPhase::Deferred),
            Bug(args) => self.move_task(args, SpecialPhase::Bugs),
            Idea(args) => self.move_task(args, SpecialPhase::Ideas),
            Rm(args) => self.remove(&args),
            Compact(args) => self.confirm(&self.planner.compact(&args.into()).context("Failed to compact plan")?),
        }
    }

    fn view<T: Display + Serialize>(&self, view: &T) -> Result<ExitCode> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(view)?);
        } else {
            self.renderer.render(&view.to_string())?;
        }
        Ok(ExitCode::SUCCESS)
    }

    fn confirm<T: Display>(&self, result: &T) -> Result<ExitCode> {
        if !self.quiet || self.planner.is_dry_run() {
            self.renderer.render(&result.to_string())?;
        }
        Ok(ExitCode::SUCCESS)
    }

    fn special(&self, kind: SpecialPhase) -> Result<ExitCode> {
        self.view(&self.planner.special(kind).context("Failed to load plan")?)
    }

    fn validate(&self) -> Result<ExitCode> {
        let result = self.planner.validate().context("Failed to read plan")?;
        self.view(&result)?;
        Ok(if result.is_valid() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }

    fn schema(&self) -> Result<ExitCode> {
        let schema = pv_core::schema::plan_schema();
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(ExitCode::SUCCESS)
    }

    fn set_status(&self, args: TaskIdArgs, status: Status) -> Result<ExitCode> {
        self.confirm(&self.planner.set_status(&args.with_status(status))?)
    }

    fn move_task(&self, args: MoveArgs, target: SpecialPhase) -> Result<ExitCode> {
        self.confirm(&self.planner.move_task(&args.into_move(target))?)
    }

    fn remove(&self, args: &RmArgs) -> Result<ExitCode> {
        match args.kind {
            RmKind::Phase => self.confirm(&self.planner.remove_phase(&args.into())?),
            RmKind::Task => self.confirm(&self.planner.remove_task(&args.into())?),
        }
    }
}
