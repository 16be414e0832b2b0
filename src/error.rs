//! Error types for calendar operations.

use thiserror::Error;

use crate::MAX_MONTH;

/// Contract violations and malformed input.
///
/// An unrecognized relative-date phrase is not an error; see
/// [`ParseResult::Unresolved`](crate::ParseResult::Unresolved).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Invalid month: {0} (must be 0-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },

    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Empty date string")]
    EmptyInput,

    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, CalendarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CalendarError::InvalidMonth(12).to_string(),
            "Invalid month: 12 (must be 0-11)"
        );
        assert_eq!(
            CalendarError::InvalidDay {
                year: 2023,
                month: 1,
                day: 29
            }
            .to_string(),
            "Invalid day 29 for month 2023-01"
        );
        assert_eq!(CalendarError::EmptyInput.to_string(), "Empty date string");
    }
}
