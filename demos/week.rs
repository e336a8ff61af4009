//! Week Demo
//!
//! Renders the weekly operating-hours board for a fixture schedule.
//!
//! Use `-f` to load a fixture set by name
//! Use `-l` to pick the label locale (`pt-br` or `en`)
//! Use `-n` to override the reference instant, e.g. `2024-03-07T20:00:00`

use std::io;

use anyhow::Result;
use clap::Parser;

use horarium::{
    board::WeekBoard, fixtures::Fixture, utils::DemoArgs, week::project_week_with,
};

/// Week Demo
pub fn main() -> Result<()> {
    let args = DemoArgs::parse();

    let config = Fixture::from_set(&args.fixture)?.into_config();
    let now = args.resolve_now()?;
    let locale = args.resolve_locale();

    let week = project_week_with(&config, now, &locale);

    WeekBoard::new(&week).write_to(io::stdout().lock())?;

    Ok(())
}
