//! Closed-notice message building
//!
//! Selects between the normal and late-night templates and substitutes the
//! next-opening details in, producing the banner text and the scheduling
//! pre-fill the storefront hands to its messaging button. Transport (URL
//! encoding, window opening) stays with the caller.

use crate::{
    locale::Locale,
    schedule::MessageTemplates,
    status::OpenStatus,
};

/// The banner shown while closed, or `None` while open.
///
/// Picks the late-night template when the status was evaluated inside the
/// late-night window.
#[must_use]
pub fn closed_banner<'a>(templates: &'a MessageTemplates, status: &OpenStatus) -> Option<&'a str> {
    if status.open {
        return None;
    }

    if status.late_night {
        Some(&templates.late_night)
    } else {
        Some(&templates.closed)
    }
}

/// The scheduling pre-fill text for a closed business, or `None` while open.
///
/// Starts from the template matching the late-night flag; when the status
/// carries a concrete next opening, a scheduling line is appended. A
/// same-day opening during the late night uses the "for today" wording,
/// recognized by the presence of `time_until_open`, which only same-day
/// openings carry.
#[must_use]
pub fn scheduling_message(
    templates: &MessageTemplates,
    status: &OpenStatus,
    locale: &impl Locale,
) -> Option<String> {
    if status.open {
        return None;
    }

    let mut message = if status.late_night {
        templates.whatsapp_late_night.clone()
    } else {
        templates.whatsapp_scheduling.clone()
    };

    if let (Some(date_label), Some(time)) =
        (status.next_open_date_label.as_deref(), status.next_open_time)
    {
        let line = if status.late_night && status.time_until_open.is_some() {
            locale.schedule_today_line(time)
        } else {
            locale.schedule_line(date_label, time)
        };

        message.push_str("\n\n");
        message.push_str(&line);
    }

    Some(message)
}
