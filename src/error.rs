use std::fmt;

/// All errors produced by cronoscope.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExpressionError {
    /// The expression did not split into five fields plus a command.
    Malformed { found: usize },

    /// A field token used grammar the expander does not recognize.
    FieldSyntax { field: &'static str, token: String },

    /// A numeric value fell outside its field's domain.
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u8,
        max: u8,
    },

    /// The caller asked for a non-positive occurrence count.
    Argument { message: String },

    /// The forward search exhausted its horizon before filling the quota.
    NoOccurrence { horizon_years: i16 },
}

impl fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { found } => write!(
                f,
                "expected five fields and a command, got {found} token(s)"
            ),
            Self::FieldSyntax { field, token } => {
                write!(f, "invalid {field} field: \"{token}\"")
            }
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field} must be {min}-{max}, got {value}"),
            Self::Argument { message } => write!(f, "{message}"),
            Self::NoOccurrence { horizon_years } => write!(
                f,
                "no matching run time within {horizon_years} years of the start"
            ),
        }
    }
}

impl std::error::Error for ExpressionError {}

impl ExpressionError {
    pub fn malformed(found: usize) -> Self {
        Self::Malformed { found }
    }

    pub fn field_syntax(field: &'static str, token: impl Into<String>) -> Self {
        Self::FieldSyntax {
            field,
            token: token.into(),
        }
    }

    pub fn out_of_range(field: &'static str, value: u32, min: u8, max: u8) -> Self {
        Self::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }

    pub fn argument(message: impl Into<String>) -> Self {
        Self::Argument {
            message: message.into(),
        }
    }

    pub fn no_occurrence(horizon_years: i16) -> Self {
        Self::NoOccurrence { horizon_years }
    }
}
