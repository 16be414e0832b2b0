//! Month-grid layout and month arithmetic.
//!
//! The free functions take a raw 0-based month and reject anything outside
//! `0..=11` with [`CalendarError::InvalidMonth`]; nothing here normalizes an
//! out-of-range month into a neighbouring year. [`CalendarGrid`] wraps them
//! with a captured "today" and layout options.

use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_PER_WEEK, MIN_DAY, MONTHS_PER_YEAR};
use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::types::{self, Month, Weekday};

/// Which weekday occupies the first grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Column of `weekday` in a grid starting on this day.
    const fn column(self, weekday: Weekday) -> u8 {
        match self {
            Self::Sunday => weekday.index(),
            Self::Monday => (weekday.index() + DAYS_PER_WEEK - 1) % DAYS_PER_WEEK,
        }
    }
}

/// Layout options for [`CalendarGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    pub week_start: WeekStart,
}

/// One slot of a rendered month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MonthGridCell {
    /// Leading padding before day 1
    Empty,
    Day {
        date:       CalendarDate,
        day_number: u8,
        is_today:   bool,
        is_weekend: bool,
    },
}

impl MonthGridCell {
    pub const fn date(&self) -> Option<CalendarDate> {
        match self {
            Self::Empty => None,
            Self::Day { date, .. } => Some(*date),
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

pub const fn is_leap_year(year: i32) -> bool {
    types::is_leap_year(year)
}

/// Number of days in a 0-based `month` of `year` (28..=31).
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` > 11.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    Ok(types::days_in_month(year, Month::new(month)?))
}

/// Weekday of the 1st of `month`, as a Sunday-based index (0..=6).
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` > 11.
pub fn first_weekday_of_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    Ok(first_of_month(year, Month::new(month)?)?.weekday().index())
}

fn first_of_month(year: i32, month: Month) -> Result<CalendarDate, CalendarError> {
    CalendarDate::from_parts(year, month, MIN_DAY)
}

/// Lays out a Sunday-first month: leading `Empty` cells, then one `Day`
/// cell per day. The final week is left ragged.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` > 11.
pub fn generate_month_grid(
    year: i32,
    month: u8,
    today: CalendarDate,
) -> Result<Vec<MonthGridCell>, CalendarError> {
    layout(year, Month::new(month)?, today, WeekStart::Sunday)
}

fn layout(
    year: i32,
    month: Month,
    today: CalendarDate,
    week_start: WeekStart,
) -> Result<Vec<MonthGridCell>, CalendarError> {
    let first = first_of_month(year, month)?;
    let padding = week_start.column(first.weekday());
    let days = types::days_in_month(year, month);

    tracing::trace!(year, month = month.get(), padding, days, "generating month grid");

    let mut cells = Vec::with_capacity(usize::from(padding) + usize::from(days));
    cells.extend((0..padding).map(|_| MonthGridCell::Empty));

    for day in MIN_DAY..=days {
        let date = CalendarDate::from_parts(year, month, day)?;
        cells.push(MonthGridCell::Day {
            date,
            day_number: day,
            is_today: date == today,
            is_weekend: date.weekday().is_weekend(),
        });
    }
    Ok(cells)
}

/// Splits a grid into rows of seven cells; the last row may be shorter.
pub fn weeks(cells: &[MonthGridCell]) -> Vec<&[MonthGridCell]> {
    cells.chunks(usize::from(DAYS_PER_WEEK)).collect()
}

/// Moves a (year, month) pair by `delta` months.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` > 11, or
/// `CalendarError::OutOfRange` if the year leaves the `i32` range.
pub fn shift_month(year: i32, month: u8, delta: i64) -> Result<(i32, Month), CalendarError> {
    let month = Month::new(month)?;
    let per_year = i64::from(MONTHS_PER_YEAR);
    let index = (i64::from(year) * per_year + i64::from(month.get()))
        .checked_add(delta)
        .ok_or_else(|| CalendarError::OutOfRange(format!("{year}-{month} + {delta} months")))?;

    let target_year = i32::try_from(index.div_euclid(per_year))
        .map_err(|_| CalendarError::OutOfRange(format!("{year}-{month} + {delta} months")))?;
    // rem_euclid keeps the index in 0..12
    let target_month = Month::new(index.rem_euclid(per_year) as u8)?;
    Ok((target_year, target_month))
}

/// Adds `count` months, clamping the day to the end of the target month
/// (Jan 31 + 1 month is Feb 28 or 29, never Mar 1).
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the year leaves the `i32` range.
pub fn add_months(date: CalendarDate, count: i64) -> Result<CalendarDate, CalendarError> {
    let (year, month) = shift_month(date.year(), date.month(), count)?;
    let day = date.day().min(types::days_in_month(year, month));
    CalendarDate::from_parts(year, month, day)
}

/// Month-grid engine bound to a "today" reference captured at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarGrid {
    today:   CalendarDate,
    options: GridOptions,
}

impl CalendarGrid {
    pub fn new(today: CalendarDate) -> Self {
        Self::with_options(today, GridOptions::default())
    }

    pub const fn with_options(today: CalendarDate, options: GridOptions) -> Self {
        Self { today, options }
    }

    pub const fn today(&self) -> CalendarDate {
        self.today
    }

    pub const fn options(&self) -> GridOptions {
        self.options
    }

    pub const fn is_leap_year(&self, year: i32) -> bool {
        is_leap_year(year)
    }

    /// See [`days_in_month`].
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if `month` > 11.
    pub fn days_in_month(&self, year: i32, month: u8) -> Result<u8, CalendarError> {
        days_in_month(year, month)
    }

    /// See [`first_weekday_of_month`].
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if `month` > 11.
    pub fn first_weekday_of_month(&self, year: i32, month: u8) -> Result<u8, CalendarError> {
        first_weekday_of_month(year, month)
    }

    /// Grid for `month`, flagging `today` and padding for the configured
    /// week start.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if `month` > 11.
    pub fn generate_month_grid(
        &self,
        year: i32,
        month: u8,
        today: CalendarDate,
    ) -> Result<Vec<MonthGridCell>, CalendarError> {
        layout(year, Month::new(month)?, today, self.options.week_start)
    }

    /// Grid for the month containing the captured today.
    ///
    /// # Errors
    /// Never fails for a validated `today`; the `Result` mirrors
    /// [`CalendarGrid::generate_month_grid`].
    pub fn current_month_grid(&self) -> Result<Vec<MonthGridCell>, CalendarError> {
        let today = self.today;
        layout(today.year(), today.month_typed(), today, self.options.week_start)
    }

    /// See [`add_months`].
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the year leaves the `i32` range.
    pub fn add_months(&self, date: CalendarDate, count: i64) -> Result<CalendarDate, CalendarError> {
        add_months(date, count)
    }

    /// See [`shift_month`].
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if `month` > 11, or
    /// `CalendarError::OutOfRange` if the year leaves the `i32` range.
    pub fn shift(&self, year: i32, month: u8, delta: i64) -> Result<(i32, Month), CalendarError> {
        shift_month(year, month, delta)
    }
}
