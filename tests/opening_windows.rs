//! Integration test walking the reference schedule through a full week.
//!
//! The `default` fixture is the storefront's shipped configuration:
//!
//! - Thursday  18:00–00:00 (closes at midnight)
//! - Friday    18:00–03:00 (overnight span)
//! - Saturday  18:00–03:00 (overnight span)
//! - Sunday    15:00–00:00 (closes at midnight)
//!
//! Evaluation is exercised at every interesting boundary of the week of
//! 2024-03-07 (a Thursday): opening minutes, closing minutes, the midnight
//! crossover of the overnight spans, and the fixed 00:01–05:59 late-night
//! window. The overnight continuation past midnight is the deliberate
//! correction over the reference storefront, which only ever tested the
//! current weekday's entry and lost the open state at, say, Saturday 02:00.

use chrono::{NaiveDate, NaiveDateTime};
use testresult::TestResult;

use horarium::{
    fixtures::Fixture,
    status::{evaluate, is_late_night},
};

// 2024-03-07 is a Thursday.
fn dt(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or(NaiveDateTime::MIN)
}

#[test]
fn late_night_window_is_fixed_and_exclusive_of_midnight() {
    assert!(!is_late_night(dt(7, 0, 0)), "00:00 is the midnight boundary");
    assert!(is_late_night(dt(7, 0, 1)), "00:01 opens the window");
    assert!(is_late_night(dt(7, 3, 30)), "03:30 is deep in the window");
    assert!(is_late_night(dt(7, 5, 59)), "05:59 closes the window");
    assert!(!is_late_night(dt(7, 6, 0)), "06:00 is past the window");
    assert!(!is_late_night(dt(7, 12, 0)), "noon is ordinary daytime");
}

#[test]
fn thursday_window_boundaries() -> TestResult {
    let config = Fixture::from_set("default")?.into_config();

    let before = evaluate(&config, dt(7, 17, 59));
    assert!(!before.open, "17:59 is one minute before opening");

    let opening = evaluate(&config, dt(7, 18, 0));
    assert!(opening.open, "the opening minute is inclusive");
    assert_eq!(opening.remaining_until_close.as_deref(), Some("6h 0min"));
    assert_eq!(opening.current_range.as_deref(), Some("18:00 - 00:00"));

    let last_minute = evaluate(&config, dt(7, 23, 59));
    assert!(last_minute.open);
    assert_eq!(last_minute.remaining_until_close.as_deref(), Some("1min"));

    // Midnight itself belongs to Friday, and Thursday's slot has closed.
    let midnight = evaluate(&config, dt(8, 0, 0));
    assert!(!midnight.open, "the close bound is exclusive");

    Ok(())
}

#[test]
fn friday_overnight_span_runs_into_saturday() -> TestResult {
    let config = Fixture::from_set("default")?.into_config();

    let evening = evaluate(&config, dt(8, 20, 0));
    assert!(evening.open);
    assert_eq!(evening.remaining_until_close.as_deref(), Some("7h 0min"));
    assert_eq!(evening.current_range.as_deref(), Some("18:00 - 03:00"));

    // Past midnight the calendar day is Saturday, but Friday's slot is still
    // running; the open state must survive the day boundary.
    let small_hours = evaluate(&config, dt(9, 2, 0));
    assert!(small_hours.open, "open past midnight via Friday's slot");
    assert!(
        !small_hours.late_night,
        "being inside an active slot overrides the late-night flag"
    );
    assert_eq!(small_hours.remaining_until_close.as_deref(), Some("1h 0min"));
    assert_eq!(small_hours.current_range.as_deref(), Some("18:00 - 03:00"));

    let at_close = evaluate(&config, dt(9, 3, 0));
    assert!(!at_close.open, "03:00 is the exclusive close bound");
    assert!(at_close.late_night);
    assert_eq!(
        at_close.next_open_date_label.as_deref(),
        Some("Hoje, 9 de Março"),
        "after closing, the next opening is Saturday's own slot"
    );
    assert_eq!(at_close.time_until_open.as_deref(), Some("15h 0min"));

    Ok(())
}

#[test]
fn sunday_afternoon_slot_with_midnight_close() -> TestResult {
    let config = Fixture::from_set("default")?.into_config();

    let before = evaluate(&config, dt(10, 14, 59));
    assert!(!before.open);
    assert_eq!(
        before.time_until_open.as_deref(),
        Some("1min"),
        "one minute to Sunday's 15:00 opening"
    );

    let afternoon = evaluate(&config, dt(10, 15, 0));
    assert!(afternoon.open);
    assert_eq!(afternoon.remaining_until_close.as_deref(), Some("9h 0min"));

    // Monday 00:00: Sunday's slot closed at midnight and Monday has no entry.
    let monday = evaluate(&config, dt(11, 0, 0));
    assert!(!monday.open);
    assert_eq!(monday.todays_entry, None);

    Ok(())
}

#[test]
fn evaluation_is_pure_over_the_whole_week() -> TestResult {
    let config = Fixture::from_set("default")?.into_config();

    for day in 7..=13 {
        for hour in [0, 2, 6, 12, 17, 18, 21, 23] {
            let now = dt(day, hour, 30);

            assert_eq!(
                evaluate(&config, now),
                evaluate(&config, now),
                "evaluation must be idempotent at {now}"
            );
        }
    }

    Ok(())
}
