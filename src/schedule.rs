use crate::error::ExpressionError;
use crate::field::{expand, FieldKind};

/// A parsed schedule: the five expanded fields plus the command string.
///
/// Constructed once by [`Schedule::parse`] and immutable afterward. Every
/// expanded field is non-empty and lies within its domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub minute: Vec<u8>,
    pub hour: Vec<u8>,
    pub day_of_month: Vec<u8>,
    pub month: Vec<u8>,
    pub day_of_week: Vec<u8>,
    pub command: String,
}

impl Schedule {
    /// Parse a cron expression.
    ///
    /// The first five whitespace-separated tokens are the minute, hour,
    /// day-of-month, month, and day-of-week fields; everything after the
    /// fifth, rejoined with single spaces, is the command. Fewer than six
    /// tokens is a malformed expression. The first invalid field aborts the
    /// parse; no partial schedule is ever returned.
    pub fn parse(expression: &str) -> Result<Self, ExpressionError> {
        let tokens: Vec<&str> = expression.split_whitespace().collect();
        if tokens.len() < 6 {
            return Err(ExpressionError::malformed(tokens.len()));
        }
        Ok(Self {
            minute: expand(tokens[0], FieldKind::Minute)?,
            hour: expand(tokens[1], FieldKind::Hour)?,
            day_of_month: expand(tokens[2], FieldKind::DayOfMonth)?,
            month: expand(tokens[3], FieldKind::Month)?,
            day_of_week: expand(tokens[4], FieldKind::DayOfWeek)?,
            command: tokens[5..].join(" "),
        })
    }
}
