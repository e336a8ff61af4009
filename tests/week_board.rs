//! Integration test for the week projection, board rendering, and the
//! repository round-trip.
//!
//! The projection must order entries by their display `order` field no
//! matter how the collection is arranged, evaluate only today's entry, and
//! feed the board renderer. A configuration persisted through the blob
//! repository must keep evaluating identically after reloading.

use chrono::{NaiveDate, NaiveDateTime};
use testresult::TestResult;

use horarium::{
    board::WeekBoard,
    fixtures::Fixture,
    schedule::Weekday,
    status::evaluate,
    store::{BlobRepository, ScheduleRepository},
    week::project_week,
};

// 2024-03-07 is a Thursday.
fn dt(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or(NaiveDateTime::MIN)
}

#[test]
fn projection_order_is_display_order_regardless_of_weekdays() -> TestResult {
    let mut config = Fixture::from_set("default")?.into_config();

    // Scramble collection order and displace the display sequence so it no
    // longer matches weekday order either.
    config.entries.reverse();

    for entry in &mut config.entries {
        if entry.weekday == Weekday::Sunday {
            entry.order = 0;
        }
    }

    let labels: Vec<String> = project_week(&config, dt(11, 12, 0))
        .into_iter()
        .map(|day| day.entry.label)
        .collect();

    assert_eq!(labels, ["Domingo", "Quinta", "Sexta", "Sábado"]);

    Ok(())
}

#[test]
fn only_todays_entry_carries_live_state() -> TestResult {
    let config = Fixture::from_set("default")?.into_config();

    // Friday 22:00: Friday's overnight slot is open.
    let week = project_week(&config, dt(8, 22, 0));

    for day in &week {
        if day.entry.weekday == Weekday::Friday {
            assert!(day.is_today);
            assert!(day.is_open_now);
            assert_eq!(day.remaining.as_deref(), Some("5h 0min"));
        } else {
            assert!(!day.is_today);
            assert!(!day.is_open_now, "non-today entries are never evaluated");
            assert_eq!(day.remaining, None);
        }
    }

    Ok(())
}

#[test]
fn board_renders_the_projected_week() -> TestResult {
    let config = Fixture::from_set("default")?.into_config();
    let week = project_week(&config, dt(8, 22, 0));

    let mut rendered = Vec::new();
    WeekBoard::new(&week).write_to(&mut rendered)?;

    let text = String::from_utf8(rendered)?;

    assert!(text.contains("Sexta"));
    assert!(text.contains("18:00 - 03:00"));
    assert!(text.contains("Open now · closes in 5h 0min"));

    Ok(())
}

#[test]
fn persisted_edits_survive_the_round_trip() -> TestResult {
    let mut config = Fixture::from_set("default")?.into_config();

    // Admin edit: Sunday now opens at noon.
    for entry in &mut config.entries {
        if entry.weekday == Weekday::Sunday {
            entry.opens_at = horarium::schedule::ClockTime::parse("12:00")?;
        }
    }

    let mut repository = BlobRepository::new();
    repository.save(&config)?;

    let reloaded = repository.load()?;

    assert_eq!(reloaded.as_ref(), Some(&config));

    if let Some(reloaded) = reloaded {
        // Sunday 13:00: open under the edited hours, for both copies.
        let fresh = evaluate(&reloaded, dt(10, 13, 0));
        let original = evaluate(&config, dt(10, 13, 0));

        assert!(fresh.open);
        assert_eq!(fresh, original);
    }

    Ok(())
}
