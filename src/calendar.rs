//! Proleptic Gregorian calendar arithmetic.
//!
//! Dates are counted as a signed day number where day 0 is 1970-01-01. The
//! conversions shift the year to start in March so that the leap day falls
//! at the end of the shifted year, then split the day count into whole
//! 400-year cycles.

use time::{Month, Weekday};

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_GREGORIAN_CYCLE, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MIN_DAY, UNIX_EPOCH_SHIFT,
};

pub const fn is_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub fn days_in_month(year: i64, month: Month) -> u8 {
    if month == Month::February && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[u8::from(month) as usize]
    }
}

/// Day number of a (year, month, day) triple. The triple is not validated.
pub fn days_from_civil(year: i64, month: Month, day: u8) -> i64 {
    let month = i64::from(u8::from(month));
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(GREGORIAN_CYCLE);
    let year_of_era = year - era * GREGORIAN_CYCLE;
    let shifted_month = (month + 9) % 12;
    let day_of_year = (153 * shifted_month + 2) / 5 + i64::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_GREGORIAN_CYCLE + day_of_era - UNIX_EPOCH_SHIFT
}

/// Inverse of [`days_from_civil`].
pub fn civil_from_days(days: i64) -> (i64, Month, u8) {
    let shifted = days + UNIX_EPOCH_SHIFT;
    let era = shifted.div_euclid(DAYS_PER_GREGORIAN_CYCLE);
    let day_of_era = shifted - era * DAYS_PER_GREGORIAN_CYCLE;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = year_of_era + era * GREGORIAN_CYCLE + i64::from(month <= 2);

    (year, month_from_number(month), day as u8)
}

/// Day of the week; 1970-01-01 was a Thursday.
pub fn weekday(days: i64) -> Weekday {
    Weekday::Thursday.nth_next(days.rem_euclid(7) as u8)
}

/// 1-based day of the year.
pub fn ordinal(year: i64, month: Month, day: u8) -> u16 {
    (days_from_civil(year, month, day) - days_from_civil(year, Month::January, MIN_DAY)) as u16 + 1
}

/// ISO 8601 week-numbering year and week (1..=53).
pub fn iso_week(year: i64, ordinal: u16, weekday: Weekday) -> (i64, u8) {
    let week = (i64::from(ordinal) - i64::from(weekday.number_from_monday()) + 10) / 7;
    if week < 1 {
        (year - 1, weeks_in_year(year - 1))
    } else if week > i64::from(weeks_in_year(year)) {
        (year + 1, 1)
    } else {
        (year, week as u8)
    }
}

/// Number of ISO weeks in a year: 53 when it starts on a Thursday, or on a
/// Wednesday in a leap year.
pub fn weeks_in_year(year: i64) -> u8 {
    match weekday(days_from_civil(year, Month::January, MIN_DAY)) {
        Weekday::Thursday => 53,
        Weekday::Wednesday if is_leap_year(year) => 53,
        _ => 52,
    }
}

fn month_from_number(month: i64) -> Month {
    Month::December.nth_next(month.rem_euclid(12) as u8)
}
