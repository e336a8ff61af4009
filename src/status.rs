//! Open-status evaluation
//!
//! Pure computation over an immutable schedule snapshot and a reference
//! instant. Every call produces a fresh [`OpenStatus`]; nothing is cached,
//! so callers re-evaluate whenever the clock advances or the schedule
//! changes.
//!
//! An entry's window is first tested against the instant's own weekday. When
//! that misses, the previous weekday's entry is tested shifted one day
//! forward, so an overnight slot (say Friday 18:00–03:00) is still reported
//! open at 02:00 on calendar-Saturday. The reference storefront only ever
//! matched the current weekday and silently lost that continuation; the
//! union of the two tests is the corrected behavior.

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use crate::{
    locale::{Locale, PtBr},
    next_opening::find_next_with,
    schedule::{
        ClockTime, DaySchedule, MINUTES_PER_DAY, ScheduleConfig, Weekday, format_minutes,
    },
};

/// First minute of the late-night window (00:01).
const LATE_NIGHT_START: u32 = 1;

/// Last minute of the late-night window (05:59), inclusive.
const LATE_NIGHT_END: u32 = 5 * 60 + 59;

/// Minutes since local midnight for a reference instant.
#[must_use]
pub fn minute_of_day(instant: NaiveDateTime) -> u32 {
    instant.hour() * 60 + instant.minute()
}

/// Whether the instant falls in the fixed late-night window, 00:01–05:59
/// inclusive. Exactly 00:00 is the midnight boundary, not late night.
#[must_use]
pub fn is_late_night(instant: NaiveDateTime) -> bool {
    let minute = minute_of_day(instant);

    (LATE_NIGHT_START..=LATE_NIGHT_END).contains(&minute)
}

/// The current open/closed state of the business, produced fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenStatus {
    /// Whether the business is open at the reference instant.
    pub open: bool,

    /// Whether the instant falls in the late-night window. Always false
    /// while open: being inside an active slot overrides the
    /// classification.
    pub late_night: bool,

    /// The governing entry's `"{opens} - {closes}"` range, while open.
    pub current_range: Option<String>,

    /// Formatted time left until closing, while open.
    pub remaining_until_close: Option<String>,

    /// Next opening time of day, while closed.
    pub next_open_time: Option<ClockTime>,

    /// Localized date label for the next opening, while closed.
    pub next_open_date_label: Option<String>,

    /// Formatted wait until a same-day next opening, while closed.
    pub time_until_open: Option<String>,

    /// The active entry for the instant's own weekday, if any.
    pub todays_entry: Option<DaySchedule>,
}

/// Evaluate the schedule with the default Brazilian Portuguese labels.
#[must_use]
pub fn evaluate(config: &ScheduleConfig, now: NaiveDateTime) -> OpenStatus {
    evaluate_with(config, now, &PtBr)
}

/// Evaluate the schedule at a reference instant.
///
/// Tests the instant against today's window, then against yesterday's
/// window extended past midnight; when both miss, the next-opening search
/// fills in the closed-state fields.
#[must_use]
pub fn evaluate_with(
    config: &ScheduleConfig,
    now: NaiveDateTime,
    locale: &impl Locale,
) -> OpenStatus {
    let late_night = is_late_night(now);
    let now_minutes = minute_of_day(now);
    let today = Weekday::from_datetime(now);
    let todays_entry = config.entry_for(today).cloned();

    if let Some(entry) = todays_entry.as_ref() {
        if let Some(remaining) = remaining_in_window(entry, now_minutes) {
            return open_status(entry, remaining, todays_entry.clone());
        }
    }

    // Yesterday's overnight slot may still cover the small hours of today.
    if let Some(entry) = config.entry_for(today.pred()) {
        if entry.spans_midnight() {
            if let Some(remaining) = remaining_in_window(entry, now_minutes + MINUTES_PER_DAY) {
                return open_status(entry, remaining, todays_entry);
            }
        }
    }

    let next = find_next_with(config, now, late_night, locale);

    OpenStatus {
        open: false,
        late_night,
        current_range: None,
        remaining_until_close: None,
        next_open_time: next.as_ref().map(|n| n.time),
        next_open_date_label: next.as_ref().map(|n| n.date_label.clone()),
        time_until_open: next.and_then(|n| n.until_open),
        todays_entry,
    }
}

/// Minutes left in the entry's window at the given minute offset, or `None`
/// when the offset lies outside the window.
fn remaining_in_window(entry: &DaySchedule, at_minutes: u32) -> Option<u32> {
    let (open, close) = entry.window();

    if at_minutes < open || at_minutes >= close {
        return None;
    }

    let mut remaining = close - at_minutes;

    // Guard against the overnight extension producing more than a day.
    if remaining > MINUTES_PER_DAY {
        remaining -= MINUTES_PER_DAY;
    }

    Some(remaining)
}

fn open_status(
    entry: &DaySchedule,
    remaining: u32,
    todays_entry: Option<DaySchedule>,
) -> OpenStatus {
    OpenStatus {
        open: true,
        late_night: false,
        current_range: Some(entry.range_label()),
        remaining_until_close: Some(format_minutes(remaining)),
        next_open_time: None,
        next_open_date_label: None,
        time_until_open: None,
        todays_entry,
    }
}
