/// Smallest supported year (inclusive)
pub const MIN_YEAR: i32 = -999_999_999;

/// Largest supported year (inclusive)
pub const MAX_YEAR: i32 = 999_999_999;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
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

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;

/// Day number of 1970-01-01 counted from 0000-03-01
pub(crate) const UNIX_EPOCH_SHIFT: i64 = 719_468;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Interval separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';

/// Digits an ISO 8601 year occupies at minimum, signed or not
pub const ISO_YEAR_DIGITS: usize = 4;

/// Two-digit years at or above this pivot belong to the 1900s, below it to the 2000s
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 69;

/// English month abbreviations used by the RFC layouts, January first
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// English weekday names used by the RFC layouts, Monday first
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Length of an abbreviated month or weekday name
pub const ABBREVIATION_LEN: usize = 3;
