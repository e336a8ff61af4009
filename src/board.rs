//! Weekly board rendering
//!
//! Renders a projected week as a terminal table for the demos: one row per
//! entry in display order, with the operating hours and the live status of
//! today's row. Purely presentational; all decisions come from the
//! projection itself.

use std::io;

use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{Alignment, Color, Style, object::Rows},
};
use thiserror::Error;

use crate::week::WeekDay;

/// Errors that can occur when writing the board.
#[derive(Debug, Error)]
pub enum BoardError {
    /// IO error
    #[error("IO error")]
    IO,
}

/// Terminal table over a projected week.
#[derive(Debug)]
pub struct WeekBoard<'a> {
    days: &'a [WeekDay],
}

impl<'a> WeekBoard<'a> {
    /// Create a board over the given projection.
    #[must_use]
    pub fn new(days: &'a [WeekDay]) -> Self {
        Self { days }
    }

    /// Write the rendered table to the given sink.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IO`] when the sink rejects the write.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), BoardError> {
        let mut builder = Builder::default();

        builder.push_record(["Day", "Hours", "Status"]);

        let mut color_ops: SmallVec<[(usize, usize, Color); 24]> = SmallVec::new();

        for (row, day) in self.days.iter().enumerate() {
            let hours = if day.entry.active {
                day.entry.range_label()
            } else {
                "—".to_string()
            };

            let status = status_cell(day);

            builder.push_record([day.entry.label.clone(), hours, status]);

            // Data rows start below the header.
            let color = if day.is_open_now {
                Some(Color::FG_GREEN)
            } else if day.is_today {
                Some(Color::BOLD)
            } else {
                None
            };

            if let Some(color) = color {
                for col in 0..3 {
                    color_ops.push((row + 1, col, color.clone()));
                }
            }
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Rows::first(), Alignment::center());

        for (row, col, color) in color_ops {
            table.modify((row, col), color);
        }

        writeln!(out, "{table}").map_err(|_write_err| BoardError::IO)
    }
}

fn status_cell(day: &WeekDay) -> String {
    if day.is_open_now {
        match day.remaining.as_deref() {
            Some(remaining) => format!("Open now · closes in {remaining}"),
            None => "Open now".to_string(),
        }
    } else if day.is_today {
        "Closed".to_string()
    } else {
        String::new()
    }
}
