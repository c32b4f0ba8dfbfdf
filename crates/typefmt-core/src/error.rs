//! Error types for the formatting engine.
//!
//! Every failure is synchronous and carries enough context to point at the
//! offending directive. No partial output accompanies an error.

use thiserror::Error;

use crate::format::{ArgKind, Conversion};

/// Failure of a single `format` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Trigger missing where expected, or the template ended before a
    /// conversion character was found.
    #[error("malformed directive at byte {offset}")]
    MalformedDirective { offset: usize },
    /// The conversion character is outside the supported set.
    #[error("unknown conversion '{conversion}' at byte {offset}")]
    UnknownConversion { conversion: char, offset: usize },
    /// The argument kind cannot be rendered with the requested conversion.
    #[error("type mismatch: {0} argument cannot be rendered with %{1}")]
    TypeMismatch(ArgKind, Conversion),
    /// `%c` on a value that is not a Unicode scalar value.
    #[error("invalid code point {value}")]
    InvalidCodePoint { value: i128 },
    /// More directives than supplied arguments.
    #[error("missing argument for directive #{directive}")]
    MissingArgument { directive: usize },
    /// Fewer directives than supplied arguments.
    #[error("{supplied} arguments supplied but only {consumed} consumed")]
    UnusedArguments { supplied: usize, consumed: usize },
    /// Width or precision above the configured limit.
    #[error("field width {requested} exceeds limit {limit}")]
    FieldTooWide { requested: usize, limit: usize },
}

impl FormatError {
    /// Stable kind name, independent of the payload.
    ///
    /// Used by fixtures (`error:<code>`) and structured logs.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MalformedDirective { .. } => "MalformedDirective",
            Self::UnknownConversion { .. } => "UnknownConversion",
            Self::TypeMismatch(..) => "TypeMismatch",
            Self::InvalidCodePoint { .. } => "InvalidCodePoint",
            Self::MissingArgument { .. } => "MissingArgument",
            Self::UnusedArguments { .. } => "UnusedArguments",
            Self::FieldTooWide { .. } => "FieldTooWide",
        }
    }
}

/// Rejected [`FormatOptions`](crate::config::FormatOptions) value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("'{0}' cannot be used as a trigger character")]
    InvalidTrigger(char),
    #[error("max width must be at least 1")]
    ZeroMaxWidth,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(
            FormatError::MalformedDirective { offset: 3 }.code(),
            "MalformedDirective"
        );
        assert_eq!(
            FormatError::TypeMismatch(ArgKind::Float, Conversion::Decimal).code(),
            "TypeMismatch"
        );
        assert_eq!(
            FormatError::UnusedArguments {
                supplied: 2,
                consumed: 1
            }
            .code(),
            "UnusedArguments"
        );
    }

    #[test]
    fn display_names_kind_and_conversion() {
        let err = FormatError::TypeMismatch(ArgKind::Float, Conversion::Decimal);
        assert_eq!(
            err.to_string(),
            "type mismatch: float argument cannot be rendered with %d"
        );
        let err = FormatError::UnknownConversion {
            conversion: 'q',
            offset: 4,
        };
        assert_eq!(err.to_string(), "unknown conversion 'q' at byte 4");
    }
}
