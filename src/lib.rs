//! Calendar month grids and relative date phrases.
//!
//! Two loosely coupled pieces share the [`CalendarDate`] value type:
//!
//! - [`grid`]: leap years, month lengths, first weekday of a month,
//!   month-grid layout for rendering and clamped month arithmetic.
//! - [`resolve`]: turns phrases such as "tomorrow", "3 days ago" or
//!   "next friday" into dates relative to an explicit `now`.
//!
//! Months are 0-based (January = 0) throughout the API. Nothing reads the
//! system clock; callers pass "today" in.

mod consts;
mod date;
mod error;
pub mod grid;
mod prelude;
pub mod resolve;
mod types;

pub use consts::*;
pub use date::CalendarDate;
pub use error::{CalendarError, Result};
pub use grid::{
    CalendarGrid, GridOptions, MonthGridCell, WeekStart, add_months, days_in_month,
    first_weekday_of_month, generate_month_grid, is_leap_year, shift_month, weeks,
};
pub use resolve::{
    DEFAULT_MATCHERS, Matcher, ParseResult, RelativeDateResolver, resolve_relative_date,
};
pub use types::{Month, Weekday};
