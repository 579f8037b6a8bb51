use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::{Month, OffsetDateTime, Time, UtcOffset, Weekday};

use crate::calendar::{self, civil_from_days, days_from_civil, days_in_month};
use crate::consts::{MAX_YEAR, MIN_DAY, MIN_YEAR};
use crate::error::{DateError, FormatError};
use crate::iso::{self, write_extended_iso};
use crate::layout::Layout;

/// A day in the proleptic Gregorian calendar, with no time of day or zone.
///
/// Stored as a day number where day 0 is 1970-01-01, so ordering, hashing
/// and day arithmetic are plain integer operations. Every day number between
/// [`CivilDate::MIN`] and [`CivilDate::MAX`] is a valid date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    days: i64,
}

const MIN_DAYS: i64 = -365_243_219_162;
const MAX_DAYS: i64 = 365_241_780_471;

impl CivilDate {
    /// 1 January of [`MIN_YEAR`]
    pub const MIN: Self = Self { days: MIN_DAYS };
    /// 31 December of [`MAX_YEAR`]
    pub const MAX: Self = Self { days: MAX_DAYS };
    /// 1970-01-01
    pub const UNIX_EPOCH: Self = Self { days: 0 };

    /// Creates a date from a year, month and day of month.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the year is outside
    /// `MIN_YEAR..=MAX_YEAR`, or `DateError::InvalidDay` if the day does not
    /// exist in that month.
    pub fn new(year: i32, month: Month, day: u8) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::YearOutOfRange(i64::from(year)));
        }
        let max = days_in_month(i64::from(year), month);
        if day < MIN_DAY || day > max {
            return Err(DateError::InvalidDay {
                year,
                month: month.into(),
                day,
                max,
            });
        }
        Ok(Self {
            days: days_from_civil(i64::from(year), month, day),
        })
    }

    /// Creates a date from its day number (0 is 1970-01-01).
    ///
    /// # Errors
    /// Returns `DateError::DaysOutOfRange` outside `MIN..=MAX`.
    pub const fn from_days(days: i64) -> Result<Self, DateError> {
        if days < MIN_DAYS || days > MAX_DAYS {
            return Err(DateError::DaysOutOfRange(days));
        }
        Ok(Self { days })
    }

    /// The day number (0 is 1970-01-01)
    pub const fn days(self) -> i64 {
        self.days
    }

    /// The calendar date of a timestamp, read in the timestamp's own offset.
    pub fn from_offset_date_time(at: OffsetDateTime) -> Self {
        let date = at.date();
        Self {
            days: days_from_civil(i64::from(date.year()), date.month(), date.day()),
        }
    }

    /// Today's date in UTC.
    pub fn today_utc() -> Self {
        Self::from_offset_date_time(OffsetDateTime::now_utc())
    }

    /// Today's date at a fixed UTC offset.
    pub fn today_in(offset: UtcOffset) -> Self {
        Self::from_offset_date_time(OffsetDateTime::now_utc().to_offset(offset))
    }

    /// Today's date in the host's local offset.
    ///
    /// # Errors
    /// Returns `DateError::IndeterminateOffset` when the host cannot report
    /// its local offset safely.
    pub fn today() -> Result<Self, DateError> {
        Ok(Self::from_offset_date_time(OffsetDateTime::now_local()?))
    }

    /// Midnight at the start of this date, in UTC.
    ///
    /// # Errors
    /// Returns `DateError::HostRange` for years the host timestamp type cannot hold.
    pub fn midnight_utc(self) -> Result<OffsetDateTime, DateError> {
        self.midnight_in(UtcOffset::UTC)
    }

    /// Midnight at the start of this date, at the given offset.
    ///
    /// # Errors
    /// Returns `DateError::HostRange` for years the host timestamp type cannot hold.
    pub fn midnight_in(self, offset: UtcOffset) -> Result<OffsetDateTime, DateError> {
        let (year, month, day) = self.to_calendar_date();
        let date = time::Date::from_calendar_date(year, month, day)?;
        Ok(date.with_time(Time::MIDNIGHT).assume_offset(offset))
    }

    /// The (year, month, day) triple
    pub fn to_calendar_date(self) -> (i32, Month, u8) {
        let (year, month, day) = civil_from_days(self.days);
        // days is bounded by MIN..=MAX, whose years fit in i32
        (year as i32, month, day)
    }

    pub fn year(self) -> i32 {
        self.to_calendar_date().0
    }

    pub fn month(self) -> Month {
        self.to_calendar_date().1
    }

    pub fn day(self) -> u8 {
        self.to_calendar_date().2
    }

    pub fn weekday(self) -> Weekday {
        calendar::weekday(self.days)
    }

    /// Day of the year, starting at 1
    pub fn ordinal(self) -> u16 {
        let (year, month, day) = self.to_calendar_date();
        calendar::ordinal(i64::from(year), month, day)
    }

    /// ISO 8601 week-numbering year and week number (1..=53).
    ///
    /// The first days of January can belong to the last week of the previous
    /// year, and the last days of December to week 1 of the next.
    pub fn iso_week(self) -> (i32, u8) {
        let (year, month, day) = self.to_calendar_date();
        let year = i64::from(year);
        let (week_year, week) = calendar::iso_week(
            year,
            calendar::ordinal(year, month, day),
            self.weekday(),
        );
        // Within one year of a supported year, which i32 holds
        (week_year as i32, week)
    }

    pub fn is_leap_year(self) -> bool {
        calendar::is_leap_year(i64::from(self.year()))
    }

    /// Adds a signed number of days, returning `None` outside `MIN..=MAX`.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        self.days
            .checked_add(days)
            .and_then(|days| Self::from_days(days).ok())
    }

    /// Adds a signed number of days.
    ///
    /// # Errors
    /// Returns `DateError::Overflow` if the result is outside `MIN..=MAX`.
    pub fn add_days(self, days: i64) -> Result<Self, DateError> {
        self.checked_add_days(days).ok_or(DateError::Overflow)
    }

    /// Adds years, months and days the way a wall calendar would: months and
    /// years move the calendar fields, and a day past the end of the target
    /// month rolls forward into the following month (2001-01-31 plus one
    /// month is 2001-03-03).
    ///
    /// # Errors
    /// Returns `DateError::Overflow` if the result is outside `MIN..=MAX`.
    pub fn add_date(self, years: i32, months: i32, days: i64) -> Result<Self, DateError> {
        let (year, month, day) = self.to_calendar_date();
        let month_index = i64::from(year) * 12
            + i64::from(u8::from(month) - 1)
            + i64::from(years) * 12
            + i64::from(months);
        let target_year = month_index.div_euclid(12);
        if target_year < i64::from(MIN_YEAR) || target_year > i64::from(MAX_YEAR) {
            return Err(DateError::Overflow);
        }
        let target_month = Month::January.nth_next(month_index.rem_euclid(12) as u8);
        let first = days_from_civil(target_year, target_month, MIN_DAY);
        Self::from_days(first + i64::from(day - MIN_DAY))
            .ok()
            .and_then(|date| date.checked_add_days(days))
            .ok_or(DateError::Overflow)
    }

    /// Shorthand for [`add_date`](Self::add_date) with months only.
    ///
    /// # Errors
    /// Returns `DateError::Overflow` if the result is outside `MIN..=MAX`.
    pub fn add_months(self, months: i32) -> Result<Self, DateError> {
        self.add_date(0, months, 0)
    }

    /// Shorthand for [`add_date`](Self::add_date) with years only.
    ///
    /// # Errors
    /// Returns `DateError::Overflow` if the result is outside `MIN..=MAX`.
    pub fn add_years(self, years: i32) -> Result<Self, DateError> {
        self.add_date(years, 0, 0)
    }

    /// The following day, or `None` at `MAX`
    pub fn succ(self) -> Option<Self> {
        self.checked_add_days(1)
    }

    /// The preceding day, or `None` at `MIN`
    pub fn pred(self) -> Option<Self> {
        self.checked_add_days(-1)
    }

    /// Parses the extended ISO 8601 form: `YYYY-MM-DD`, or a signed year of
    /// four or more digits such as `+12345-06-07` or `-0001-01-01`.
    ///
    /// # Errors
    /// Returns `FormatError` for anything else.
    pub fn parse_iso(input: &str) -> Result<Self, FormatError> {
        let (year, month, day) = iso::parse_extended_iso(input)?;
        Ok(Self {
            days: days_from_civil(i64::from(year), month, day),
        })
    }

    /// Formats in the extended ISO 8601 form with the year signed and padded
    /// to at least `width` digits (never fewer than four).
    pub fn format_iso(self, width: usize) -> String {
        let (year, month, day) = self.to_calendar_date();
        iso::format_extended_iso(year, month, day, width)
    }

    /// Parses text in one of the named layouts.
    ///
    /// # Errors
    /// Returns `FormatError` if the text does not match the layout.
    pub fn parse(layout: Layout, input: &str) -> Result<Self, FormatError> {
        layout.parse(input)
    }

    /// Formats in one of the named layouts.
    pub fn format(self, layout: Layout) -> String {
        layout.format(self)
    }
}

impl Default for CivilDate {
    fn default() -> Self {
        Self::UNIX_EPOCH
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.to_calendar_date();
        if (0..=9999).contains(&year) {
            write!(f, "{year:04}-{:02}-{day:02}", u8::from(month))
        } else {
            write_extended_iso(f, year, month, day, 4)
        }
    }
}

impl FromStr for CivilDate {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_iso(s)
    }
}

impl TryFrom<(i32, Month, u8)> for CivilDate {
    type Error = DateError;

    fn try_from((year, month, day): (i32, Month, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl From<CivilDate> for (i32, Month, u8) {
    fn from(date: CivilDate) -> Self {
        date.to_calendar_date()
    }
}

impl From<time::Date> for CivilDate {
    fn from(date: time::Date) -> Self {
        Self {
            days: days_from_civil(i64::from(date.year()), date.month(), date.day()),
        }
    }
}

impl TryFrom<CivilDate> for time::Date {
    type Error = DateError;

    fn try_from(date: CivilDate) -> Result<Self, Self::Error> {
        let (year, month, day) = date.to_calendar_date();
        Ok(Self::from_calendar_date(year, month, day)?)
    }
}

impl Add<i64> for CivilDate {
    type Output = Self;

    /// # Panics
    /// Panics if the result is outside `MIN..=MAX`.
    fn add(self, days: i64) -> Self {
        match self.checked_add_days(days) {
            Some(date) => date,
            None => panic!("date arithmetic overflowed: {self} + {days} days"),
        }
    }
}

impl AddAssign<i64> for CivilDate {
    fn add_assign(&mut self, days: i64) {
        *self = *self + days;
    }
}

impl Sub<i64> for CivilDate {
    type Output = Self;

    /// # Panics
    /// Panics if the result is outside `MIN..=MAX`.
    fn sub(self, days: i64) -> Self {
        match days.checked_neg().and_then(|days| self.checked_add_days(days)) {
            Some(date) => date,
            None => panic!("date arithmetic overflowed: {self} - {days} days"),
        }
    }
}

impl SubAssign<i64> for CivilDate {
    fn sub_assign(&mut self, days: i64) {
        *self = *self - days;
    }
}

impl Sub for CivilDate {
    type Output = i64;

    /// Days from `rhs` to `self`
    fn sub(self, rhs: Self) -> i64 {
        self.days - rhs.days
    }
}

impl PartialEq<time::Date> for CivilDate {
    fn eq(&self, other: &time::Date) -> bool {
        *self == Self::from(*other)
    }
}

impl PartialOrd<time::Date> for CivilDate {
    fn partial_cmp(&self, other: &time::Date) -> Option<Ordering> {
        Some(self.cmp(&Self::from(*other)))
    }
}

impl Serialize for CivilDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CivilDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{datetime, offset};

    use crate::error::Reason;

    fn date(year: i32, month: Month, day: u8) -> CivilDate {
        CivilDate::new(year, month, day).expect("valid test date")
    }

    fn same(d: CivilDate, t: OffsetDateTime) -> bool {
        d.year() == t.year()
            && d.month() == t.month()
            && d.day() == t.day()
            && d.weekday() == t.weekday()
            && d.ordinal() == t.ordinal()
            && d.iso_week() == (t.to_iso_week_date().0, t.iso_week())
    }

    #[test]
    fn test_new_matches_host_calendar() {
        let cases = [
            datetime!(0000-01-01 00:00:00 +00:00),
            datetime!(0001-01-01 00:00:00 +00:00),
            datetime!(1614-01-01 01:02:03 +04:00),
            datetime!(1970-01-01 00:00:00 +00:00),
            datetime!(1815-12-10 05:06:07 +00:00),
            datetime!(1901-09-10 00:00:00 -05:00),
            datetime!(1998-09-01 00:00:00 -08:00),
            datetime!(2000-01-01 00:00:00 +00:00),
            datetime!(9999-12-31 00:00:00 +00:00),
        ];

        for t in cases {
            let d = date(t.year(), t.month(), t.day());
            assert!(same(d, t), "new({t:?}) == {d}");
            let d = CivilDate::from_offset_date_time(t);
            assert!(same(d, t), "from_offset_date_time({t:?}) == {d}");
        }
    }

    #[test]
    fn test_every_day_of_a_decade_matches_host_calendar() {
        let mut t = datetime!(1999-12-25 12:00:00 +00:00);
        let mut d = CivilDate::from_offset_date_time(t);
        for _ in 0..3_700 {
            assert!(same(d, t), "{d} drifted from {t:?}");
            t += time::Duration::DAY;
            d += 1;
        }
    }

    #[test]
    fn test_today() {
        let today = CivilDate::today_utc();
        let now = OffsetDateTime::now_utc();
        // Allow for a midnight rollover between the two clock reads
        assert!(same(today, now) || same(today.succ().expect("not MAX"), now));

        for hours in [-10_i8, -5, -3, 0, 1, 4, 8, 12] {
            let offset = UtcOffset::from_hms(hours, 0, 0).expect("valid offset");
            let today = CivilDate::today_in(offset);
            let now = OffsetDateTime::now_utc().to_offset(offset);
            assert!(same(today, now) || same(today.succ().expect("not MAX"), now));
        }
    }

    #[test]
    fn test_today_local() {
        match CivilDate::today() {
            // Hosts that cannot read the local offset soundly refuse to guess
            Err(DateError::IndeterminateOffset(_)) => {},
            Ok(today) => {
                let now = OffsetDateTime::now_local().expect("offset was just readable");
                assert!(same(today, now) || same(today.succ().expect("not MAX"), now));
            },
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_new_rejects_invalid_day() {
        assert!(matches!(
            CivilDate::new(2023, Month::February, 29),
            Err(DateError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29,
                max: 28
            })
        ));
        assert!(CivilDate::new(2024, Month::February, 29).is_ok());
        assert!(CivilDate::new(2024, Month::April, 31).is_err());
        assert!(CivilDate::new(2024, Month::April, 0).is_err());
    }

    #[test]
    fn test_new_rejects_out_of_range_year() {
        assert_eq!(
            CivilDate::new(i32::MAX, Month::December, 31),
            Err(DateError::YearOutOfRange(i64::from(i32::MAX)))
        );
        assert_eq!(
            CivilDate::new(i32::MIN, Month::January, 1),
            Err(DateError::YearOutOfRange(i64::from(i32::MIN)))
        );
        assert_eq!(
            CivilDate::new(MAX_YEAR + 1, Month::January, 1),
            Err(DateError::YearOutOfRange(1_000_000_000))
        );
        assert_eq!(
            CivilDate::new(MIN_YEAR - 1, Month::December, 31),
            Err(DateError::YearOutOfRange(-1_000_000_000))
        );
        assert_eq!(date(MIN_YEAR, Month::January, 1), CivilDate::MIN);
        assert_eq!(date(MAX_YEAR, Month::December, 31), CivilDate::MAX);
    }

    #[test]
    fn test_year_bounds_in_text() {
        assert_eq!(CivilDate::MIN.to_string(), "-999999999-01-01");
        assert_eq!(CivilDate::MAX.to_string(), "+999999999-12-31");
        assert_eq!(CivilDate::parse_iso("+999999999-12-31"), Ok(CivilDate::MAX));
        assert_eq!(CivilDate::parse_iso("-999999999-01-01"), Ok(CivilDate::MIN));

        for value in ["+1000000000-01-01", "-1000000000-12-31", "+2147483647-12-31"] {
            let err = CivilDate::parse_iso(value).expect_err(value);
            assert!(
                matches!(err.reason(), Reason::YearOutOfRange(_)),
                "{value}: {err}"
            );
        }
    }

    #[test]
    fn test_day_numbers() {
        assert_eq!(date(1970, Month::January, 1).days(), 0);
        assert_eq!(date(1969, Month::December, 31).days(), -1);
        assert_eq!(CivilDate::from_days(0).expect("in range"), CivilDate::UNIX_EPOCH);
        assert!(CivilDate::from_days(MAX_DAYS + 1).is_err());
        assert!(CivilDate::from_days(MIN_DAYS - 1).is_err());
    }

    #[test]
    fn test_bounds_round_trip() {
        assert_eq!(CivilDate::MIN.to_calendar_date(), (MIN_YEAR, Month::January, 1));
        assert_eq!(CivilDate::MAX.to_calendar_date(), (MAX_YEAR, Month::December, 31));
        assert_eq!(CivilDate::MAX.succ(), None);
        assert_eq!(CivilDate::MIN.pred(), None);
    }

    #[test]
    fn test_accessors() {
        let d = date(2024, Month::March, 1);
        assert_eq!(d.year(), 2024);
        assert_eq!(d.month(), Month::March);
        assert_eq!(d.day(), 1);
        assert_eq!(d.weekday(), Weekday::Friday);
        assert_eq!(d.ordinal(), 61);
        assert_eq!(d.iso_week(), (2024, 9));
        assert!(d.is_leap_year());
    }

    #[test]
    fn test_iso_week_at_extremes() {
        assert_eq!(date(-1, Month::January, 1).iso_week(), (-2, 53));
        assert_eq!(CivilDate::MAX.iso_week(), (MAX_YEAR, 52));
    }

    #[test]
    fn test_day_arithmetic() {
        let d = date(2000, Month::February, 28);
        assert_eq!(d + 1, date(2000, Month::February, 29));
        assert_eq!(d + 2, date(2000, Month::March, 1));
        assert_eq!(d - 59, date(1999, Month::December, 31));
        assert_eq!(date(2001, Month::January, 1) - date(2000, Month::January, 1), 366);
        assert_eq!(d.add_days(-365).expect("in range"), date(1999, Month::February, 28));
        assert_eq!(CivilDate::MAX.checked_add_days(1), None);
        assert!(matches!(CivilDate::MIN.add_days(-1), Err(DateError::Overflow)));
        assert_eq!(CivilDate::MIN.checked_add_days(i64::MIN), None);

        let mut e = d;
        e += 10;
        e -= 3;
        assert_eq!(e - d, 7);
    }

    #[test]
    #[should_panic(expected = "date arithmetic overflowed")]
    fn test_add_overflow_panics() {
        let _ = CivilDate::MAX + 1;
    }

    #[test]
    fn test_add_date() {
        struct TestCase {
            start:    (i32, Month, u8),
            years:    i32,
            months:   i32,
            days:     i64,
            expected: (i32, Month, u8),
        }

        let cases = [
            TestCase {
                start:    (2001, Month::January, 31),
                years:    0,
                months:   1,
                days:     0,
                expected: (2001, Month::March, 3),
            },
            TestCase {
                start:    (2000, Month::January, 31),
                years:    0,
                months:   1,
                days:     0,
                expected: (2000, Month::March, 2),
            },
            TestCase {
                start:    (2000, Month::February, 29),
                years:    1,
                months:   0,
                days:     0,
                expected: (2001, Month::March, 1),
            },
            TestCase {
                start:    (2000, Month::March, 15),
                years:    0,
                months:   -3,
                days:     0,
                expected: (1999, Month::December, 15),
            },
            TestCase {
                start:    (2000, Month::March, 15),
                years:    -2001,
                months:   0,
                days:     1,
                expected: (-1, Month::March, 16),
            },
            TestCase {
                start:    (2020, Month::December, 31),
                years:    1,
                months:   13,
                days:     -1,
                expected: (2023, Month::January, 30),
            },
        ];

        for case in &cases {
            let (y, m, d) = case.start;
            let result = date(y, m, d)
                .add_date(case.years, case.months, case.days)
                .expect("in range");
            assert_eq!(result.to_calendar_date(), case.expected);
        }

        assert_eq!(
            date(2024, Month::May, 5).add_months(2).expect("in range"),
            date(2024, Month::July, 5)
        );
        assert_eq!(
            date(2024, Month::May, 5).add_years(-24).expect("in range"),
            date(2000, Month::May, 5)
        );
        assert!(CivilDate::MAX.add_years(1).is_err());
        assert!(CivilDate::MAX.add_months(-1).is_ok());
    }

    #[test]
    fn test_ordering() {
        let a = date(-1, Month::December, 31);
        let b = date(0, Month::January, 1);
        let c = date(1970, Month::January, 1);
        assert!(a < b && b < c);
        assert_eq!(a.max(c), c);
        assert_eq!(b.min(a), a);
    }

    #[test]
    fn test_display() {
        assert_eq!(date(1969, Month::December, 31).to_string(), "1969-12-31");
        assert_eq!(date(0, Month::January, 1).to_string(), "0000-01-01");
        assert_eq!(date(9999, Month::December, 31).to_string(), "9999-12-31");
        assert_eq!(date(10_000, Month::January, 1).to_string(), "+10000-01-01");
        assert_eq!(date(-1, Month::February, 3).to_string(), "-0001-02-03");
    }

    #[test]
    fn test_parse_iso() {
        let d = CivilDate::parse_iso("1969-12-31").expect("valid");
        assert_eq!(d.to_calendar_date(), (1969, Month::December, 31));
        let d = CivilDate::parse_iso("+01970-01-02").expect("valid");
        assert_eq!(d.to_calendar_date(), (1970, Month::January, 2));
        let d = CivilDate::parse_iso("0000-01-01").expect("valid");
        assert_eq!(d.to_calendar_date(), (0, Month::January, 1));
        let d = "-5000000-09-17".parse::<CivilDate>().expect("valid");
        assert_eq!(d.to_calendar_date(), (-5_000_000, Month::September, 17));

        for bad in ["1234-05", "1-02-03", "100-02-03", "-123-05-06", "1900-02-29"] {
            assert!(CivilDate::parse_iso(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_format_iso() {
        let cases = [
            ("-5000-02-03", 4),
            ("-05000-02-03", 5),
            ("-005000-02-03", 6),
            ("+0000-01-01", 4),
            ("+00000-01-01", 5),
            ("+1000-01-01", 4),
            ("+01000-01-01", 5),
            ("+1970-01-01", 4),
            ("+001999-12-31", 6),
            ("+999999-12-31", 6),
        ];

        for (value, width) in cases {
            let d = CivilDate::parse_iso(value).expect(value);
            assert_eq!(d.format_iso(width), value);
        }
    }

    #[test]
    fn test_display_parses_back() {
        for days in (-1_000_000_i64..1_000_000).step_by(7_919) {
            let d = CivilDate::from_days(days).expect("in range");
            assert_eq!(d.to_string().parse::<CivilDate>(), Ok(d));
        }
        assert_eq!(CivilDate::MIN.to_string().parse::<CivilDate>(), Ok(CivilDate::MIN));
        assert_eq!(CivilDate::MAX.to_string().parse::<CivilDate>(), Ok(CivilDate::MAX));
    }

    #[test]
    fn test_midnight() {
        let d = date(2024, Month::June, 15);
        assert_eq!(d.midnight_utc().expect("host range"), datetime!(2024-06-15 00:00:00 UTC));
        let at = d.midnight_in(offset!(+5:30)).expect("host range");
        assert_eq!(at, datetime!(2024-06-15 00:00:00 +5:30));
        assert_eq!(CivilDate::from_offset_date_time(at), d);
        assert!(matches!(
            date(100_000, Month::January, 1).midnight_utc(),
            Err(DateError::HostRange(_))
        ));
    }

    #[test]
    fn test_host_date_conversions() {
        let host = time::macros::date!(2024-02-29);
        let d = CivilDate::from(host);
        assert_eq!(d, date(2024, Month::February, 29));
        assert_eq!(d, host);
        assert_eq!(time::Date::try_from(d), Ok(host));
        assert!(time::Date::try_from(date(-100_000, Month::January, 1)).is_err());
    }

    #[test]
    fn test_tuple_conversions() {
        let d = CivilDate::try_from((2024, Month::February, 29)).expect("valid");
        let triple: (i32, Month, u8) = d.into();
        assert_eq!(triple, (2024, Month::February, 29));
        assert!(CivilDate::try_from((2023, Month::February, 29)).is_err());
    }

    #[test]
    fn test_serde() {
        let d = date(2024, Month::August, 15);
        let json = serde_json::to_string(&d).expect("serialize");
        assert_eq!(json, r#""2024-08-15""#);
        let parsed: CivilDate = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, d);

        let expanded: CivilDate = serde_json::from_str(r#""-0044-03-15""#).expect("deserialize");
        assert_eq!(expanded.year(), -44);
        assert_eq!(serde_json::to_string(&expanded).expect("serialize"), r#""-0044-03-15""#);

        let result: Result<CivilDate, _> = serde_json::from_str(r#""2024-02-30""#);
        assert!(result.is_err());
    }
}
