use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pv_core::planner::builder::DEFAULT_PLAN_FILE;

use crate::cli::{
    AddPhaseArgs, AddTaskArgs, CompactArgs, FutureArgs, GetArgs, InitArgs, LastArgs, MoveArgs,
    RmArgs, SetArgs, TaskIdArgs,
};

/// View and edit a project's plan.json
///
/// pv reads a plan made of phases and tasks, shows progress and picks the
/// next task whose dependencies are complete. Edit commands update the
/// file in place, recomputing every progress figure on the way out.
#[derive(Parser)]
#[command(version, about, name = "pv")]
pub struct Args {
    /// Path to the plan file
    #[arg(
        short = 'f',
        long = "file",
        global = true,
        env = "PV_FILE",
        default_value = DEFAULT_PLAN_FILE
    )]
    pub file: PathBuf,

    /// Print view commands as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress confirmations of edit commands
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show what an edit command would do without writing the file
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the pv CLI
///
/// Without a command the whole plan is shown. View commands never touch
/// the file; edit commands rewrite it unless `--dry-run` is given.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the current phase and the next task
    #[command(alias = "c")]
    Current,
    /// Show the next task to work on
    #[command(alias = "n")]
    Next,
    /// Show the active phase
    #[command(alias = "p")]
    Phase,
    /// Show a task or phase by id
    #[command(alias = "g")]
    Get(GetArgs),
    /// Show recently completed tasks
    #[command(alias = "l")]
    Last(LastArgs),
    /// Show upcoming tasks grouped by readiness
    #[command(alias = "f")]
    Future(FutureArgs),
    /// Show tasks filed as bugs
    Bugs,
    /// Show tasks parked as ideas
    Ideas,
    /// Show deferred tasks
    Deferred,
    /// Check the plan file and report every problem
    #[command(alias = "v")]
    Validate,
    /// Print the JSON schema of the plan document
    Schema,

    /// Create a new plan file
    Init(InitArgs),
    /// Add a phase
    AddPhase(AddPhaseArgs),
    /// Add a task to a phase
    AddTask(AddTaskArgs),
    /// Set a task field (status, agent, title, priority, notes)
    Set(SetArgs),
    /// Mark a task completed
    Done(TaskIdArgs),
    /// Mark a task in progress
    Start(TaskIdArgs),
    /// Mark a task blocked
    Block(TaskIdArgs),
    /// Mark a task skipped
    Skip(TaskIdArgs),
    /// Move a task to the deferred phase, or file a new one there
    Defer(MoveArgs),
    /// Move a task to the bugs phase, or file a new one there
    Bug(MoveArgs),
    /// Move a task to the ideas phase, or file a new one there
    Idea(MoveArgs),
    /// Remove a phase or a task
    Rm(RmArgs),
    /// Strip completed tasks to their essentials, backing up first
    Compact(CompactArgs),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::parse_from(["pv", "next", "--json", "-f", "other.json"]);
        assert!(args.json);
        assert_eq!(args.file, PathBuf::from("other.json"));
        assert!(matches!(args.command, Some(Commands::Next)));
    }

    #[test]
    fn test_aliases() {
        let args = Args::parse_from(["pv", "g", "1.1"]);
        assert!(matches!(args.command, Some(Commands::Get(GetArgs { ref id })) if id == "1.1"));

        let args = Args::parse_from(["pv", "v"]);
        assert!(matches!(args.command, Some(Commands::Validate)));
    }

    #[test]
    fn test_no_command_shows_overview() {
        let args = Args::parse_from(["pv", "--no-color"]);
        assert!(args.no_color);
        assert!(args.command.is_none());
    }
}
