use std::fmt;
use std::str::FromStr;

use crate::consts::{
    DATE_SEPARATOR, DAYS_PER_ERA, DAYS_PER_WEEK, DAYS_TO_UNIX_EPOCH, EPOCH_WEEKDAY, MIN_DAY,
};
use crate::error::CalendarError;
use crate::types::{Month, Weekday, days_in_month};

/// A specific year/month/day in the proleptic Gregorian calendar.
///
/// The month is a 0-based index. A `CalendarDate` can only be built through
/// [`CalendarDate::new`] (or parsing), so the day is always valid for its
/// month. Displays as `YYYY-MM-DD` with a 1-based month for readability;
/// years before zero get a leading `-` ahead of the padded digits (`-0001-12-31`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year:  i32,
    month: Month,
    day:   u8,
}

impl CalendarDate {
    /// Creates a date from a year, a 0-based month and a 1-based day.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if `month` > 11, or
    /// `CalendarError::InvalidDay` if `day` is outside the month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let month = Month::new(month)?;
        Self::from_parts(year, month, day)
    }

    /// Creates a date from an already validated month.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDay` if `day` is outside the month.
    pub fn from_parts(year: i32, month: Month, day: u8) -> Result<Self, CalendarError> {
        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(CalendarError::InvalidDay {
                year,
                month: month.get(),
                day,
            });
        }
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// 0-based month index
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub fn weekday(&self) -> Weekday {
        let index = (self.days_since_epoch() + EPOCH_WEEKDAY).rem_euclid(i64::from(DAYS_PER_WEEK));
        // rem_euclid keeps the index in 0..7
        Weekday::from_index(index as u8)
    }

    /// Number of days since 1970-01-01 (negative before it).
    pub fn days_since_epoch(&self) -> i64 {
        // ref: http://howardhinnant.github.io/date_algorithms.html
        let month = i64::from(self.month.get()) + 1;
        let year = i64::from(self.year) - i64::from(month <= 2);
        let era = year.div_euclid(400);
        let year_of_era = year.rem_euclid(400);
        let shifted_month = (month + 9) % 12;
        let day_of_year = (153 * shifted_month + 2) / 5 + i64::from(self.day) - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
        era * DAYS_PER_ERA + day_of_era - DAYS_TO_UNIX_EPOCH
    }

    /// Inverse of [`CalendarDate::days_since_epoch`].
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the year does not fit in `i32`.
    pub fn from_days_since_epoch(days: i64) -> Result<Self, CalendarError> {
        let out_of_range = || CalendarError::OutOfRange(format!("{days} days from epoch"));

        let days = days.checked_add(DAYS_TO_UNIX_EPOCH).ok_or_else(out_of_range)?;
        let era = days.div_euclid(DAYS_PER_ERA);
        let day_of_era = days.rem_euclid(DAYS_PER_ERA);
        let year_of_era =
            (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / (DAYS_PER_ERA - 1))
                / 365;
        let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let shifted_month = (day_of_year * 5 + 2) / 153;
        let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
        let month = if shifted_month < 10 {
            shifted_month + 3
        } else {
            shifted_month - 9
        };
        let year = era
            .checked_mul(400)
            .and_then(|y| y.checked_add(year_of_era + i64::from(month <= 2)))
            .ok_or_else(out_of_range)?;

        let year = i32::try_from(year).map_err(|_| out_of_range())?;
        let month = u8::try_from(month - 1).map_err(|_| out_of_range())?;
        let day = u8::try_from(day).map_err(|_| out_of_range())?;
        Self::new(year, month, day)
    }

    /// Moves the date by `days` (negative moves backwards).
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the result leaves the `i32` year range.
    pub fn add_days(&self, days: i64) -> Result<Self, CalendarError> {
        let target = self
            .days_since_epoch()
            .checked_add(days)
            .ok_or_else(|| CalendarError::OutOfRange(format!("{self} + {days} days")))?;
        Self::from_days_since_epoch(target)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sign goes outside the width so the digits always pad to four
        let sign = if self.year < 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{:04}-{:02}-{:02}",
            self.year.unsigned_abs(),
            self.month.get() + 1,
            self.day
        )
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD` (1-based month), with an optional leading `-`
    /// for years before year zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::EmptyInput);
        }

        let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = body.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(CalendarError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s) in '{trimmed}'",
                parts.len()
            )));
        };

        let magnitude = i64::from(parse_component::<u32>(year)?);
        let year = i32::try_from(if negative { -magnitude } else { magnitude })
            .map_err(|_| CalendarError::OutOfRange(format!("year in '{trimmed}'")))?;
        let month = parse_component::<u8>(month)?;
        let day = parse_component::<u8>(day)?;

        let month = month
            .checked_sub(1)
            .ok_or_else(|| CalendarError::InvalidFormat(format!("month 0 in '{trimmed}'")))?;
        Self::new(year, month, day)
    }
}

/// Parses a purely numeric component; signs and blanks are rejected.
fn parse_component<T: FromStr>(s: &str) -> Result<T, CalendarError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalendarError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>()
        .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
