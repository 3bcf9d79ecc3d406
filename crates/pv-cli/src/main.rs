//! pv CLI Application
//!
//! Command-line interface for viewing and editing a plan.json file.

mod args;
mod cli;
mod handlers;
mod renderer;

use std::process::ExitCode;

use anyhow::Result;
use args::Args;
use clap::Parser;
use handlers::Cli;
use log::info;
use pv_core::PlannerBuilder;
use renderer::TerminalRenderer;

fn main() -> Result<ExitCode> {
    env_logger::init();

    let Args {
        file,
        json,
        no_color,
        quiet,
        dry_run,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_plan_path(Some(file))
        .with_dry_run(dry_run)
        .build();

    let renderer = TerminalRenderer::new(renderer::color_enabled(no_color));

    info!("pv started with {}", planner.plan_path().display());

    Cli::new(planner, renderer)
        .with_json(json)
        .with_quiet(quiet)
        .run(command)
}
