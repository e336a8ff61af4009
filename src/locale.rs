//! Localized display strings
//!
//! Day and month names, next-opening date labels, and the scheduling lines
//! appended to outbound messages are all presentation details. They are
//! injected as a [`Locale`] capability so the evaluator stays free of
//! hard-coded string tables; [`PtBr`] reproduces the reference output
//! byte-for-byte and is the default everywhere.

use crate::schedule::{ClockTime, Weekday};

/// Localized names and label templates for next-opening output.
pub trait Locale {
    /// Full display name of a weekday.
    fn weekday_name(&self, weekday: Weekday) -> &str;

    /// Full display name of a calendar month (1 = January .. 12 = December).
    fn month_name(&self, month: u32) -> &str;

    /// Date label for an opening later today.
    fn today_label(&self, day: u32, month: u32) -> String;

    /// Date label for an opening tomorrow.
    fn tomorrow_label(&self, day: u32, month: u32) -> String;

    /// Date label for an opening two or more days ahead.
    fn weekday_label(&self, weekday: Weekday, day: u32, month: u32) -> String;

    /// Label used when no concrete next opening could be determined.
    fn soon_label(&self) -> &str;

    /// Scheduling line for an opening later today.
    fn schedule_today_line(&self, time: ClockTime) -> String;

    /// Scheduling line for an opening on another day.
    fn schedule_line(&self, date_label: &str, time: ClockTime) -> String;
}

/// Brazilian Portuguese locale, matching the reference storefront.
#[derive(Debug, Clone, Copy, Default)]
pub struct PtBr;

impl Locale for PtBr {
    fn weekday_name(&self, weekday: Weekday) -> &str {
        match weekday {
            Weekday::Sunday => "Domingo",
            Weekday::Monday => "Segunda",
            Weekday::Tuesday => "Terça",
            Weekday::Wednesday => "Quarta",
            Weekday::Thursday => "Quinta",
            Weekday::Friday => "Sexta",
            Weekday::Saturday => "Sábado",
        }
    }

    fn month_name(&self, month: u32) -> &str {
        match month {
            1 => "Janeiro",
            2 => "Fevereiro",
            3 => "Março",
            4 => "Abril",
            5 => "Maio",
            6 => "Junho",
            7 => "Julho",
            8 => "Agosto",
            9 => "Setembro",
            10 => "Outubro",
            11 => "Novembro",
            12 => "Dezembro",
            _ => "",
        }
    }

    fn today_label(&self, day: u32, month: u32) -> String {
        format!("Hoje, {day} de {}", self.month_name(month))
    }

    fn tomorrow_label(&self, day: u32, month: u32) -> String {
        format!("Amanhã, {day} de {}", self.month_name(month))
    }

    fn weekday_label(&self, weekday: Weekday, day: u32, month: u32) -> String {
        format!(
            "{}, {day} de {}",
            self.weekday_name(weekday),
            self.month_name(month)
        )
    }

    fn soon_label(&self) -> &str {
        "Em breve"
    }

    fn schedule_today_line(&self, time: ClockTime) -> String {
        format!("Gostaria de agendar para hoje às {time}.")
    }

    fn schedule_line(&self, date_label: &str, time: ClockTime) -> String {
        format!("Gostaria de agendar para {date_label} às {time}.")
    }
}

/// English locale, provided to exercise the locale seam.
#[derive(Debug, Clone, Copy, Default)]
pub struct En;

impl Locale for En {
    fn weekday_name(&self, weekday: Weekday) -> &str {
        match weekday {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    fn month_name(&self, month: u32) -> &str {
        match month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "",
        }
    }

    fn today_label(&self, day: u32, month: u32) -> String {
        format!("Today, {day} of {}", self.month_name(month))
    }

    fn tomorrow_label(&self, day: u32, month: u32) -> String {
        format!("Tomorrow, {day} of {}", self.month_name(month))
    }

    fn weekday_label(&self, weekday: Weekday, day: u32, month: u32) -> String {
        format!(
            "{}, {day} of {}",
            self.weekday_name(weekday),
            self.month_name(month)
        )
    }

    fn soon_label(&self) -> &str {
        "Soon"
    }

    fn schedule_today_line(&self, time: ClockTime) -> String {
        format!("I'd like to schedule an order for today at {time}.")
    }

    fn schedule_line(&self, date_label: &str, time: ClockTime) -> String {
        format!("I'd like to schedule an order for {date_label} at {time}.")
    }
}
