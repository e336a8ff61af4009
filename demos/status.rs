//! Status Demo
//!
//! Prints the current open/closed status for a fixture schedule, along with
//! the closed banner and the scheduling pre-fill text when applicable.
//!
//! Use `-f` to load a fixture set by name
//! Use `-l` to pick the label locale (`pt-br` or `en`)
//! Use `-n` to override the reference instant, e.g. `2024-03-07T20:00:00`

use anyhow::Result;
use clap::Parser;

use horarium::{
    fixtures::Fixture,
    messages::{closed_banner, scheduling_message},
    status::evaluate_with,
    utils::DemoArgs,
};

/// Status Demo
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = DemoArgs::parse();

    let config = Fixture::from_set(&args.fixture)?.into_config();
    let now = args.resolve_now()?;
    let locale = args.resolve_locale();

    let status = evaluate_with(&config, now, &locale);

    println!("Reference instant: {now}");

    if status.open {
        let range = status.current_range.as_deref().unwrap_or("-");
        let remaining = status.remaining_until_close.as_deref().unwrap_or("-");

        println!("Open ({range}), closes in {remaining}");

        return Ok(());
    }

    println!("Closed (late night: {})", status.late_night);

    if let Some(label) = status.next_open_date_label.as_deref() {
        let time = status
            .next_open_time
            .map(|time| time.to_string())
            .unwrap_or_default();

        println!("Next opening: {label} at {time}");
    }

    if let Some(wait) = status.time_until_open.as_deref() {
        println!("Opens in {wait}");
    }

    if let Some(banner) = closed_banner(&config.messages, &status) {
        println!("\nBanner: {banner}");
    }

    if let Some(message) = scheduling_message(&config.messages, &status, &locale) {
        println!("\nScheduling pre-fill:\n{message}");
    }

    Ok(())
}
