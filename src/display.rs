use std::fmt;

use jiff::civil::DateTime;

use crate::field::FieldKind;
use crate::schedule::Schedule;

impl fmt::Display for Schedule {
    /// The normalized expression: each field spelled out as its expanded
    /// values, followed by the command.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            join(&self.minute, ","),
            join(&self.hour, ","),
            join(&self.day_of_month, ","),
            join(&self.month, ","),
            join(&self.day_of_week, ","),
            self.command
        )
    }
}

impl Schedule {
    /// Field-by-field view for two-column rendering.
    pub fn rows(&self) -> [(&'static str, String); 6] {
        [
            (FieldKind::Minute.label(), join(&self.minute, ", ")),
            (FieldKind::Hour.label(), join(&self.hour, ", ")),
            (FieldKind::DayOfMonth.label(), join(&self.day_of_month, ", ")),
            (FieldKind::Month.label(), join(&self.month, ", ")),
            (FieldKind::DayOfWeek.label(), join(&self.day_of_week, ", ")),
            ("command", self.command.clone()),
        ]
    }
}

/// Render an occurrence as `YYYY-MM-DD HH:MM`.
pub fn occurrence_stamp(instant: DateTime) -> String {
    instant.strftime("%Y-%m-%d %H:%M").to_string()
}

fn join(values: &[u8], separator: &str) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
