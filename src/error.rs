use crate::consts::{ISO_YEAR_DIGITS, MAX_YEAR, MIN_YEAR};
use crate::prelude::*;

/// The rule a rejected input broke.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Reason {
    #[display(fmt = "unsigned year must have exactly {} digits, found {}", ISO_YEAR_DIGITS, "_0")]
    UnsignedYearWidth(usize),
    #[display(fmt = "signed year must have at least {} digits, found {}", ISO_YEAR_DIGITS, "_0")]
    SignedYearWidth(usize),
    #[display(fmt = "year {} is outside {}..={}", "_0", MIN_YEAR, MAX_YEAR)]
    YearOutOfRange(String),
    #[display(fmt = "expected a digit at byte {_0}")]
    ExpectedDigit(usize),
    #[display(fmt = "expected {expected:?} at byte {position}")]
    ExpectedLiteral {
        position: usize,
        expected: &'static str,
    },
    #[display(fmt = "unexpected trailing characters {_0:?}")]
    TrailingCharacters(String),
    #[display(fmt = "missing {_0}")]
    MissingComponent(&'static str),
    #[display(fmt = "month {_0} is outside 1..=12")]
    InvalidMonth(u8),
    #[display(fmt = "day {day} is outside 1..={max} for {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8, max: u8 },
    #[display(fmt = "unknown month name at byte {_0}")]
    UnknownMonthName(usize),
    #[display(fmt = "unknown weekday name at byte {_0}")]
    UnknownWeekdayName(usize),
}

/// Malformed date text. Carries the offending input and the rule it broke.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse {input:?} as a date: {reason}")]
pub struct FormatError {
    input:  String,
    reason: Reason,
}

impl FormatError {
    pub(crate) fn new(input: &str, reason: Reason) -> Self {
        log::debug!("rejecting date text {input:?}: {reason}");
        Self {
            input: input.to_owned(),
            reason,
        }
    }

    /// The text that failed to parse
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Why it failed
    pub const fn reason(&self) -> &Reason {
        &self.reason
    }
}

/// A layout name that is not one of the known [`Layout`](crate::Layout)s.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown date layout {0:?}")]
pub struct UnknownLayout(pub String);

/// Errors from constructing or moving a date outside what a `CivilDate` can hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Day is not valid for the given year and month.
    #[error("invalid day {day} for {year}-{month:02} (must be 1-{max})")]
    InvalidDay { year: i32, month: u8, day: u8, max: u8 },

    /// Year lies outside `MIN_YEAR..=MAX_YEAR`.
    #[error("year {0} is outside the supported range {min}..={max}", min = MIN_YEAR, max = MAX_YEAR)]
    YearOutOfRange(i64),

    /// Day number lies outside `CivilDate::MIN..=CivilDate::MAX`.
    #[error("day number {0} is outside the supported range")]
    DaysOutOfRange(i64),

    /// Arithmetic overflowed.
    #[error("date arithmetic overflowed")]
    Overflow,

    /// The host clock could not report the local UTC offset.
    #[error(transparent)]
    IndeterminateOffset(#[from] time::error::IndeterminateOffset),

    /// The host timestamp type cannot represent the date.
    #[error(transparent)]
    HostRange(#[from] time::error::ComponentRange),
}
