//! Field expansion: one cron field token → the ordered values it matches.
//!
//! Forms are mutually exclusive per token and checked in precedence order:
//! wildcard, step, range, list, named token, single value.

use crate::error::ExpressionError;

/// One of the five schedule selectors, carrying its legal value range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldKind {
    /// Inclusive domain bounds. Day-of-week is 0-6 with 0 = Sunday.
    pub fn domain(self) -> (u8, u8) {
        match self {
            Self::Minute => (0, 59),
            Self::Hour => (0, 23),
            Self::DayOfMonth => (1, 31),
            Self::Month => (1, 12),
            Self::DayOfWeek => (0, 6),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::DayOfMonth => "day of month",
            Self::Month => "month",
            Self::DayOfWeek => "day of week",
        }
    }
}

const MONTH_NAMES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

const DAY_NAMES: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

/// Resolve a three-letter name for fields that accept them, case-insensitively.
fn lookup_name(element: &str, kind: FieldKind) -> Option<u8> {
    let (table, first): (&[&str], u8) = match kind {
        FieldKind::Month => (&MONTH_NAMES, 1),
        FieldKind::DayOfWeek => (&DAY_NAMES, 0),
        _ => return None,
    };
    let lower = element.to_ascii_lowercase();
    table
        .iter()
        .position(|name| *name == lower)
        .map(|i| i as u8 + first)
}

/// Expand a single field token into the ordered set of values it matches.
///
/// Wildcard, step, and range forms produce ascending order by construction;
/// the list form preserves input order. The result is never empty.
pub fn expand(token: &str, kind: FieldKind) -> Result<Vec<u8>, ExpressionError> {
    let (min, max) = kind.domain();

    if token == "*" {
        return Ok((min..=max).collect());
    }

    if let Some((base, step)) = token.split_once('/') {
        return expand_step(token, base, step, kind);
    }

    if let Some((start, end)) = token.split_once('-') {
        return expand_range(token, start, end, kind);
    }

    if token.contains(',') {
        return expand_list(token, kind);
    }

    if let Some(value) = lookup_name(token, kind) {
        return Ok(vec![value]);
    }

    Ok(vec![parse_value(token, kind)?])
}

/// `base/step`: start at the domain minimum for `*`, otherwise at the literal
/// base value, then every `step` values up to the domain maximum.
fn expand_step(
    token: &str,
    base: &str,
    step: &str,
    kind: FieldKind,
) -> Result<Vec<u8>, ExpressionError> {
    let (min, max) = kind.domain();
    let start = if base == "*" {
        min
    } else {
        parse_value(base, kind)?
    };
    let step = match step.parse::<u32>() {
        Ok(s) if s > 0 => s,
        _ => return Err(ExpressionError::field_syntax(kind.label(), token)),
    };
    Ok((start as u32..=max as u32)
        .step_by(step as usize)
        .map(|v| v as u8)
        .collect())
}

/// `start-end`: the inclusive ascending range. Descending ranges are rejected.
fn expand_range(
    token: &str,
    start: &str,
    end: &str,
    kind: FieldKind,
) -> Result<Vec<u8>, ExpressionError> {
    let start = parse_value(start, kind)?;
    let end = parse_value(end, kind)?;
    if start > end {
        return Err(ExpressionError::field_syntax(kind.label(), token));
    }
    Ok((start..=end).collect())
}

/// `v1,v2,…`: each element resolved on its own, input order preserved.
/// Out-of-range numeric elements are dropped rather than rejected, but a list
/// that drops every element is an error.
fn expand_list(token: &str, kind: FieldKind) -> Result<Vec<u8>, ExpressionError> {
    let (min, max) = kind.domain();
    let mut values = Vec::new();
    for element in token.split(',') {
        if let Some(value) = lookup_name(element, kind) {
            values.push(value);
            continue;
        }
        let value: u32 = element
            .parse()
            .map_err(|_| ExpressionError::field_syntax(kind.label(), element))?;
        if value >= min as u32 && value <= max as u32 {
            values.push(value as u8);
        }
    }
    if values.is_empty() {
        return Err(ExpressionError::field_syntax(kind.label(), token));
    }
    Ok(values)
}

/// Parse a bare numeric element and range-check it against the field domain.
fn parse_value(element: &str, kind: FieldKind) -> Result<u8, ExpressionError> {
    let (min, max) = kind.domain();
    let value: u32 = element
        .parse()
        .map_err(|_| ExpressionError::field_syntax(kind.label(), element))?;
    if value < min as u32 || value > max as u32 {
        return Err(ExpressionError::out_of_range(kind.label(), value, min, max));
    }
    Ok(value as u8)
}
