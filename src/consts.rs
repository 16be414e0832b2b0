/// Largest valid 0-based month index (December)
pub const MAX_MONTH: u8 = 11;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month index for January
pub const JANUARY: u8 = 0;
/// Month index for February
pub const FEBRUARY: u8 = 1;
/// Month index for December
pub const DECEMBER: u8 = 11;

/// Number of months in a year
pub const MONTHS_PER_YEAR: u8 = 12;
/// Number of days (and grid columns) in a week
pub const DAYS_PER_WEEK: u8 = 7;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month, indexed by 0-based month.
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 12] = [
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// English month names, indexed by 0-based month
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Three-letter weekday prefixes, Sunday first
pub const WEEKDAY_PREFIXES: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_PER_ERA: i64 = 146_097;
/// Days from 0000-03-01 to 1970-01-01 (the day-count epoch)
pub(crate) const DAYS_TO_UNIX_EPOCH: i64 = 719_468;
/// 1970-01-01 was a Thursday
pub(crate) const EPOCH_WEEKDAY: i64 = 4;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
