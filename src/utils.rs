//! Utils

use chrono::NaiveDateTime;
use clap::Parser;

use crate::{
    locale::{En, Locale, PtBr},
    schedule::{ClockTime, Weekday},
};

/// Arguments for the demo binaries
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Fixture set to load the schedule from
    #[clap(short, long, default_value = "default")]
    pub fixture: String,

    /// Locale for labels: "pt-br" or "en"
    #[clap(short, long, default_value = "pt-br")]
    pub locale: String,

    /// Reference instant as `YYYY-MM-DDTHH:MM:SS`; defaults to the local clock
    #[clap(short, long)]
    pub now: Option<String>,
}

impl DemoArgs {
    /// Resolve the reference instant from the `--now` override or the local
    /// clock.
    ///
    /// # Errors
    ///
    /// Returns a parse error when the override is not a valid timestamp.
    pub fn resolve_now(&self) -> Result<NaiveDateTime, chrono::ParseError> {
        match self.now.as_deref() {
            Some(text) => NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S"),
            None => Ok(chrono::Local::now().naive_local()),
        }
    }

    /// Resolve the locale argument, defaulting unknown names to pt-BR.
    #[must_use]
    pub fn resolve_locale(&self) -> DemoLocale {
        if self.locale.eq_ignore_ascii_case("en") {
            DemoLocale::En(En)
        } else {
            DemoLocale::PtBr(PtBr)
        }
    }
}

/// Locale selected at the demo command line.
#[derive(Debug, Clone, Copy)]
pub enum DemoLocale {
    /// Brazilian Portuguese
    PtBr(PtBr),

    /// English
    En(En),
}

impl Locale for DemoLocale {
    fn weekday_name(&self, weekday: Weekday) -> &str {
        match self {
            DemoLocale::PtBr(locale) => locale.weekday_name(weekday),
            DemoLocale::En(locale) => locale.weekday_name(weekday),
        }
    }

    fn month_name(&self, month: u32) -> &str {
        match self {
            DemoLocale::PtBr(locale) => locale.month_name(month),
            DemoLocale::En(locale) => locale.month_name(month),
        }
    }

    fn today_label(&self, day: u32, month: u32) -> String {
        match self {
            DemoLocale::PtBr(locale) => locale.today_label(day, month),
            DemoLocale::En(locale) => locale.today_label(day, month),
        }
    }

    fn tomorrow_label(&self, day: u32, month: u32) -> String {
        match self {
            DemoLocale::PtBr(locale) => locale.tomorrow_label(day, month),
            DemoLocale::En(locale) => locale.tomorrow_label(day, month),
        }
    }

    fn weekday_label(&self, weekday: Weekday, day: u32, month: u32) -> String {
        match self {
            DemoLocale::PtBr(locale) => locale.weekday_label(weekday, day, month),
            DemoLocale::En(locale) => locale.weekday_label(weekday, day, month),
        }
    }

    fn soon_label(&self) -> &str {
        match self {
            DemoLocale::PtBr(locale) => locale.soon_label(),
            DemoLocale::En(locale) => locale.soon_label(),
        }
    }

    fn schedule_today_line(&self, time: ClockTime) -> String {
        match self {
            DemoLocale::PtBr(locale) => locale.schedule_today_line(time),
            DemoLocale::En(locale) => locale.schedule_today_line(time),
        }
    }

    fn schedule_line(&self, date_label: &str, time: ClockTime) -> String {
        match self {
            DemoLocale::PtBr(locale) => locale.schedule_line(date_label, time),
            DemoLocale::En(locale) => locale.schedule_line(date_label, time),
        }
    }
}
