//! Next-opening search
//!
//! When the business is closed, the storefront shows when it opens next.
//! The search tries the current day first (late-night scheduling, or a slot
//! that has not opened yet), then scans up to seven calendar days ahead for
//! the first active entry. Minutes-until-open is only meaningful for the
//! same-day branches; the forward scan reports a date label alone.

use chrono::{Datelike, Days, NaiveDateTime};

use crate::{
    locale::{Locale, PtBr},
    schedule::{ClockTime, DaySchedule, ScheduleConfig, Weekday, format_minutes},
    status::minute_of_day,
};

/// The earliest future opening found for a closed schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextOpening {
    /// Opening time of day.
    pub time: ClockTime,

    /// Human-readable date label, e.g. `"Amanhã, 8 de Março"`.
    pub date_label: String,

    /// The schedule entry that opening belongs to.
    pub entry: DaySchedule,

    /// Formatted wait until that opening; only present for same-day openings.
    pub until_open: Option<String>,
}

/// Find the next opening using the default Brazilian Portuguese labels.
///
/// Returns `None` only for the degenerate schedule with no active entries.
#[must_use]
pub fn find_next(
    config: &ScheduleConfig,
    now: NaiveDateTime,
    late_night: bool,
) -> Option<NextOpening> {
    find_next_with(config, now, late_night, &PtBr)
}

/// Find the next opening, rendering labels through the given locale.
///
/// Branches are mutually exclusive and tried in order: a same-day opening
/// during the late-night window, a same-day slot that has not opened yet,
/// the seven-day forward scan, and finally the first active entry labelled
/// with the locale's "soon" string.
#[must_use]
pub fn find_next_with(
    config: &ScheduleConfig,
    now: NaiveDateTime,
    late_night: bool,
    locale: &impl Locale,
) -> Option<NextOpening> {
    let today = Weekday::from_datetime(now);

    if late_night {
        if let Some(entry) = config.entry_for(today) {
            return Some(same_day_opening(entry, now, locale));
        }
    } else if let Some(entry) = config.entry_for(today) {
        if minute_of_day(now) < entry.opens_at.minute_of_day() {
            return Some(same_day_opening(entry, now, locale));
        }
    }

    for offset in 1..=7u64 {
        let Some(date) = now.date().checked_add_days(Days::new(offset)) else {
            continue;
        };

        let weekday = Weekday::from_chrono(date.weekday());

        if let Some(entry) = config.entry_for(weekday) {
            let date_label = if offset == 1 {
                locale.tomorrow_label(date.day(), date.month())
            } else {
                locale.weekday_label(weekday, date.day(), date.month())
            };

            return Some(NextOpening {
                time: entry.opens_at,
                date_label,
                entry: entry.clone(),
                until_open: None,
            });
        }
    }

    // Unreachable while any entry is active (the scan covers every weekday),
    // kept as a best-effort answer for inconsistent source data.
    config.first_active().map(|entry| NextOpening {
        time: entry.opens_at,
        date_label: locale.soon_label().to_string(),
        entry: entry.clone(),
        until_open: None,
    })
}

fn same_day_opening(
    entry: &DaySchedule,
    now: NaiveDateTime,
    locale: &impl Locale,
) -> NextOpening {
    let until = entry
        .opens_at
        .minute_of_day()
        .saturating_sub(minute_of_day(now));

    NextOpening {
        time: entry.opens_at,
        date_label: locale.today_label(now.day(), now.month()),
        entry: entry.clone(),
        until_open: Some(format_minutes(until)),
    }
}
