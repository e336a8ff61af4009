//! Weekly status projection
//!
//! Projects the schedule into the display-ready ordered list the storefront
//! and admin screens render: every entry in display order, annotated with
//! "is today" and, for today only, the live open state. Non-today entries
//! are definitionally not "now" and are never evaluated.

use chrono::NaiveDateTime;

use crate::{
    locale::{Locale, PtBr},
    schedule::{DaySchedule, ScheduleConfig, Weekday},
    status::evaluate_with,
};

/// A schedule entry annotated for display in the weekly board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDay {
    /// The underlying schedule entry.
    pub entry: DaySchedule,

    /// Whether this entry governs the reference instant's weekday.
    pub is_today: bool,

    /// Whether this entry is open right now; always false for non-today
    /// entries.
    pub is_open_now: bool,

    /// Formatted time left until closing, when open now.
    pub remaining: Option<String>,
}

/// Project the week with the default Brazilian Portuguese labels.
#[must_use]
pub fn project_week(config: &ScheduleConfig, now: NaiveDateTime) -> Vec<WeekDay> {
    project_week_with(config, now, &PtBr)
}

/// Project the whole week into display order.
///
/// Entries are sorted by their `order` field ascending, independent of
/// weekday. Today's entry is evaluated against a single-entry schedule so
/// its open state never leaks in from another weekday's window.
#[must_use]
pub fn project_week_with(
    config: &ScheduleConfig,
    now: NaiveDateTime,
    locale: &impl Locale,
) -> Vec<WeekDay> {
    let today = Weekday::from_datetime(now);

    let mut entries = config.entries.clone();
    entries.sort_by_key(|entry| entry.order);

    entries
        .into_iter()
        .map(|entry| {
            let is_today = entry.weekday == today;

            if !is_today {
                return WeekDay {
                    entry,
                    is_today: false,
                    is_open_now: false,
                    remaining: None,
                };
            }

            let only_this = ScheduleConfig::new(vec![entry.clone()], config.messages.clone());
            let status = evaluate_with(&only_this, now, locale);

            WeekDay {
                entry,
                is_today: true,
                is_open_now: status.open,
                remaining: status.remaining_until_close,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;

    // 2024-03-07 is a Thursday.
    fn dt(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .unwrap_or(NaiveDateTime::MIN)
    }

    #[test]
    fn projection_orders_by_display_order() {
        let mut config = ScheduleConfig::default();

        // Scramble collection order; display order must win.
        config.entries.reverse();

        let labels: Vec<String> = project_week(&config, dt(11, 12, 0))
            .into_iter()
            .map(|day| day.entry.label)
            .collect();

        assert_eq!(labels, ["Quinta", "Sexta", "Sábado", "Domingo"]);
    }

    #[test]
    fn only_today_is_evaluated() {
        let config = ScheduleConfig::default();

        // Thursday 20:00: Thursday open, everything else closed.
        let week = project_week(&config, dt(7, 20, 0));

        for day in &week {
            let expect_today = day.entry.weekday == Weekday::Thursday;

            assert_eq!(day.is_today, expect_today);
            assert_eq!(day.is_open_now, expect_today);
        }

        let remaining: Vec<Option<String>> =
            week.into_iter().map(|day| day.remaining).collect();

        assert_eq!(
            remaining,
            [Some("4h 0min".to_string()), None, None, None]
        );
    }

    #[test]
    fn today_closed_outside_window() {
        let config = ScheduleConfig::default();

        // Thursday 10:00: today but before opening.
        let week = project_week(&config, dt(7, 10, 0));

        assert!(week.iter().any(|day| day.is_today));
        assert!(week.iter().all(|day| !day.is_open_now));
        assert!(week.iter().all(|day| day.remaining.is_none()));
    }

    #[test]
    fn inactive_entries_keep_their_slot_in_the_list() {
        let mut config = ScheduleConfig::default();

        for entry in &mut config.entries {
            entry.active = false;
        }

        let week = project_week(&config, dt(7, 20, 0));

        assert_eq!(week.len(), 4);
        assert!(week.iter().all(|day| !day.is_open_now));
    }
}
