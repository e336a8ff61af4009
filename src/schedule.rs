//! Weekly schedule model
//!
//! The schedule is plain data: one entry per active weekday plus the message
//! templates shown while the business is closed. Entries carry wall-clock
//! opening times only; an entry whose closing time is lexically at or before
//! its opening time spans past midnight into the following calendar day.

use std::fmt;

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in a calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Errors that can occur when constructing schedule values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// A clock-time string did not match the `HH:MM` shape.
    #[error("invalid clock time {0:?}; expected HH:MM")]
    UnparsableTime(String),

    /// The hour component was outside 0–23.
    #[error("hour out of range: {0}")]
    HourOutOfRange(u8),

    /// The minute component was outside 0–59.
    #[error("minute out of range: {0}")]
    MinuteOutOfRange(u8),
}

/// A wall-clock time of day with no date or timezone component.
///
/// Serialized as the zero-padded `"HH:MM"` string, and only constructible
/// through validated paths, so malformed times are rejected at the edge
/// instead of corrupting minute arithmetic later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Create a clock time from hour and minute components.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::HourOutOfRange`] or
    /// [`ScheduleError::MinuteOutOfRange`] when a component is out of bounds.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ScheduleError> {
        if hour > 23 {
            return Err(ScheduleError::HourOutOfRange(hour));
        }

        if minute > 59 {
            return Err(ScheduleError::MinuteOutOfRange(minute));
        }

        Ok(Self { hour, minute })
    }

    /// Parse a `"HH:MM"` string.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::UnparsableTime`] when the string does not
    /// split into two integer components, or a range error from
    /// [`ClockTime::new`].
    pub fn parse(value: &str) -> Result<Self, ScheduleError> {
        let unparsable = || ScheduleError::UnparsableTime(value.to_string());

        let (hour_part, minute_part) = value.split_once(':').ok_or_else(unparsable)?;

        let hour = hour_part.parse::<u8>().map_err(|_parse_err| unparsable())?;
        let minute = minute_part.parse::<u8>().map_err(|_parse_err| unparsable())?;

        Self::new(hour, minute)
    }

    /// The hour component (0–23).
    #[must_use]
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// The minute component (0–59).
    #[must_use]
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes since local midnight.
    #[must_use]
    pub fn minute_of_day(self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

/// Calendar weekday, indexed 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    /// Sunday (index 0)
    Sunday,

    /// Monday (index 1)
    Monday,

    /// Tuesday (index 2)
    Tuesday,

    /// Wednesday (index 3)
    Wednesday,

    /// Thursday (index 4)
    Thursday,

    /// Friday (index 5)
    Friday,

    /// Saturday (index 6)
    Saturday,
}

impl Weekday {
    /// The 0 = Sunday .. 6 = Saturday index of this weekday.
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Weekday::Sunday => 0,
            Weekday::Monday => 1,
            Weekday::Tuesday => 2,
            Weekday::Wednesday => 3,
            Weekday::Thursday => 4,
            Weekday::Friday => 5,
            Weekday::Saturday => 6,
        }
    }

    /// Weekday for a 0 = Sunday .. 6 = Saturday index, if in range.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Weekday::Sunday),
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            _ => None,
        }
    }

    /// The weekday governing a reference instant.
    #[must_use]
    pub fn from_datetime(instant: NaiveDateTime) -> Self {
        Self::from_chrono(instant.weekday())
    }

    /// Convert from the `chrono` weekday type.
    #[must_use]
    pub fn from_chrono(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }

    /// The following calendar weekday, wrapping Saturday to Sunday.
    #[must_use]
    pub fn succ(self) -> Self {
        match self {
            Weekday::Sunday => Weekday::Monday,
            Weekday::Monday => Weekday::Tuesday,
            Weekday::Tuesday => Weekday::Wednesday,
            Weekday::Wednesday => Weekday::Thursday,
            Weekday::Thursday => Weekday::Friday,
            Weekday::Friday => Weekday::Saturday,
            Weekday::Saturday => Weekday::Sunday,
        }
    }

    /// The preceding calendar weekday, wrapping Sunday to Saturday.
    #[must_use]
    pub fn pred(self) -> Self {
        match self {
            Weekday::Sunday => Weekday::Saturday,
            Weekday::Monday => Weekday::Sunday,
            Weekday::Tuesday => Weekday::Monday,
            Weekday::Wednesday => Weekday::Tuesday,
            Weekday::Thursday => Weekday::Wednesday,
            Weekday::Friday => Weekday::Thursday,
            Weekday::Saturday => Weekday::Friday,
        }
    }
}

/// Operating hours for a single calendar weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Display name of the day (e.g. `"Quinta"`).
    pub label: String,

    /// The calendar weekday this entry governs.
    pub weekday: Weekday,

    /// Whether the business operates on this weekday at all.
    pub active: bool,

    /// Opening time of day.
    pub opens_at: ClockTime,

    /// Closing time of day; at or before `opens_at` means the slot closes on
    /// the following calendar day.
    pub closes_at: ClockTime,

    /// Display sequencing only; never used for weekday math.
    pub order: u32,
}

impl DaySchedule {
    /// Whether this entry spans past midnight into the following calendar day.
    #[must_use]
    pub fn spans_midnight(&self) -> bool {
        self.closes_at.minute_of_day() <= self.opens_at.minute_of_day()
    }

    /// The entry's window as minutes since its own day's midnight.
    ///
    /// The close bound exceeds [`MINUTES_PER_DAY`] for overnight spans, so
    /// the window is always a non-empty half-open range `[open, close)`.
    #[must_use]
    pub fn window(&self) -> (u32, u32) {
        let open = self.opens_at.minute_of_day();
        let mut close = self.closes_at.minute_of_day();

        if close <= open {
            close += MINUTES_PER_DAY;
        }

        (open, close)
    }

    /// The `"{opens_at} - {closes_at}"` display range for this entry.
    #[must_use]
    pub fn range_label(&self) -> String {
        format!("{} - {}", self.opens_at, self.closes_at)
    }
}

/// The four message templates shown by the closed-notice surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplates {
    /// Banner shown while closed during normal hours.
    pub closed: String,

    /// Banner shown while closed during the late-night window.
    pub late_night: String,

    /// Pre-fill text for scheduling an order during normal hours.
    pub whatsapp_scheduling: String,

    /// Pre-fill text for scheduling an order during the late-night window.
    pub whatsapp_late_night: String,
}

/// The complete weekly schedule configuration.
///
/// The entry collection is ordered for display through each entry's `order`
/// field; the evaluator never relies on collection order for weekday math.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Per-weekday entries, at most one meaningful entry per weekday.
    pub entries: Vec<DaySchedule>,

    /// Closed-notice message templates.
    pub messages: MessageTemplates,
}

impl ScheduleConfig {
    /// Create a configuration from entries and templates.
    #[must_use]
    pub fn new(entries: Vec<DaySchedule>, messages: MessageTemplates) -> Self {
        Self { entries, messages }
    }

    /// The active entry governing the given weekday.
    ///
    /// Under the one-entry-per-weekday invariant at most one exists; with
    /// duplicate source data the first match in collection order wins.
    #[must_use]
    pub fn entry_for(&self, weekday: Weekday) -> Option<&DaySchedule> {
        self.entries
            .iter()
            .find(|entry| entry.weekday == weekday && entry.active)
    }

    /// The first active entry in collection order, regardless of weekday.
    #[must_use]
    pub fn first_active(&self) -> Option<&DaySchedule> {
        self.entries.iter().find(|entry| entry.active)
    }
}

impl Default for ScheduleConfig {
    /// The hard-coded reference configuration: four active days, two of them
    /// overnight spans, with the Brazilian Portuguese message templates.
    fn default() -> Self {
        let entry = |label: &str, weekday, opens: (u8, u8), closes: (u8, u8), order| DaySchedule {
            label: label.to_string(),
            weekday,
            active: true,
            opens_at: ClockTime {
                hour: opens.0,
                minute: opens.1,
            },
            closes_at: ClockTime {
                hour: closes.0,
                minute: closes.1,
            },
            order,
        };

        Self {
            entries: vec![
                entry("Quinta", Weekday::Thursday, (18, 0), (0, 0), 1),
                entry("Sexta", Weekday::Friday, (18, 0), (3, 0), 2),
                entry("Sábado", Weekday::Saturday, (18, 0), (3, 0), 3),
                entry("Domingo", Weekday::Sunday, (15, 0), (0, 0), 4),
            ],
            messages: MessageTemplates {
                closed: "Estamos fechados no momento. Funcionamos de quinta a domingo!"
                    .to_string(),
                late_night:
                    "Estamos fechados durante a madrugada. Que tal agendar seu pedido para hoje?"
                        .to_string(),
                whatsapp_scheduling:
                    "Olá! Gostaria de agendar um pedido para quando vocês estiverem abertos."
                        .to_string(),
                whatsapp_late_night:
                    "Olá! Estou acordado na madrugada e gostaria de agendar um pedido para hoje. Podem me ajudar? 🌙"
                        .to_string(),
            },
        }
    }
}

/// Format a minute count as `"{h}h {m}min"`, or `"{m}min"` under an hour.
#[must_use]
pub fn format_minutes(total: u32) -> String {
    let hours = total / 60;
    let minutes = total % 60;

    if hours > 0 {
        format!("{hours}h {minutes}min")
    } else {
        format!("{minutes}min")
    }
}
