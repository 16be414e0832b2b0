use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MONTH_NAMES, WEEKDAY_PREFIXES,
};
use crate::error::CalendarError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 0-based month index guaranteed to be in the range `0..=MAX_MONTH` (0..=11)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    /// Creates a new Month, validating that it's <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        if value > MAX_MONTH {
            return Err(CalendarError::InvalidMonth(value));
        }
        Ok(Self(value))
    }

    /// Returns the 0-based month index
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// English name of the month, e.g. "February"
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0 as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week, numbered from Sunday = 0 to Saturday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    #[display(fmt = "Sun")]
    Sunday = 0,
    #[display(fmt = "Mon")]
    Monday = 1,
    #[display(fmt = "Tue")]
    Tuesday = 2,
    #[display(fmt = "Wed")]
    Wednesday = 3,
    #[display(fmt = "Thu")]
    Thursday = 4,
    #[display(fmt = "Fri")]
    Friday = 5,
    #[display(fmt = "Sat")]
    Saturday = 6,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Column index, Sunday = 0
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Weekday for a Sunday-based index; wraps modulo 7.
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % DAYS_PER_WEEK) as usize]
    }

    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Sunday | Self::Saturday)
    }

    /// Matches a weekday by the first three letters of `word`, ignoring case.
    /// Words shorter than three characters never match.
    pub fn from_prefix(word: &str) -> Option<Self> {
        let prefix = word.get(..3)?.to_ascii_lowercase();
        WEEKDAY_PREFIXES
            .iter()
            .position(|p| *p == prefix)
            .map(|i| Self::ALL[i])
    }
}

// Helper functions

/// Proleptic Gregorian leap-year rule; valid for zero and negative years.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: Month) -> u8 {
    if month.get() == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.get() as usize]
    }
}
