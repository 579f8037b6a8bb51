//! Extended ISO 8601 calendar dates with expanded years.
//!
//! The accepted shape is `[sign]YYYY[Y...]-MM-DD`. Without a sign the year is
//! exactly four digits; with a sign it is four digits or more, which is how
//! ISO 8601 writes years before 0 or after 9999. Parsing is a single forward
//! scan over the input bytes.

use std::fmt;

use time::Month;

use crate::calendar::days_in_month;
use crate::consts::{DATE_SEPARATOR, ISO_YEAR_DIGITS, MAX_YEAR, MIN_YEAR};
use crate::error::{FormatError, Reason};

const SEPARATOR: &str = "-";

/// Decodes an extended ISO 8601 date into a (year, month, day) triple.
///
/// # Errors
/// Returns `FormatError` if the input is not exactly one well-formed date:
/// wrong year width for its sign, a non-digit in a numeric field, a separator
/// other than `-`, a missing field, trailing text, or a month/day out of range.
pub fn parse_extended_iso(input: &str) -> Result<(i32, Month, u8), FormatError> {
    scan(input.as_bytes()).map_err(|reason| FormatError::new(input, reason))
}

/// Encodes a date with the year padded to at least `width` digits.
///
/// The year always carries a sign (`-` below zero, `+` otherwise). Widths
/// below four are treated as four, and a year wider than `width` keeps all of
/// its digits.
pub fn format_extended_iso(year: i32, month: Month, day: u8, width: usize) -> String {
    let mut out = String::with_capacity(width.max(ISO_YEAR_DIGITS) + 7);
    // Writing into a String cannot fail
    let _ = write_extended_iso(&mut out, year, month, day, width);
    out
}

pub(crate) fn write_extended_iso<W: fmt::Write>(
    out: &mut W,
    year: i32,
    month: Month,
    day: u8,
    width: usize,
) -> fmt::Result {
    let width = width.max(ISO_YEAR_DIGITS);
    let sign = if year < 0 { '-' } else { '+' };
    write!(
        out,
        "{sign}{:0width$}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{day:02}",
        year.unsigned_abs(),
        u8::from(month),
    )
}

fn scan(bytes: &[u8]) -> Result<(i32, Month, u8), Reason> {
    let (negative, signed, mut pos) = match bytes.first() {
        Some(b'+') => (false, true, 1),
        Some(b'-') => (true, true, 1),
        Some(_) => (false, false, 0),
        None => return Err(Reason::MissingComponent("year")),
    };

    let year_start = pos;
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    let width = pos - year_start;
    if width == 0 {
        return Err(if pos < bytes.len() {
            Reason::ExpectedDigit(pos)
        } else {
            Reason::MissingComponent("year")
        });
    }
    if !signed && width != ISO_YEAR_DIGITS {
        return Err(Reason::UnsignedYearWidth(width));
    }
    if signed && width < ISO_YEAR_DIGITS {
        return Err(Reason::SignedYearWidth(width));
    }
    let year = year_value(&bytes[year_start..pos], negative)?;

    pos = separator(bytes, pos, "month")?;
    let month_number = two_digits(bytes, pos, "month")?;
    pos += 2;
    pos = separator(bytes, pos, "day")?;
    let day = two_digits(bytes, pos, "day")?;
    pos += 2;

    if pos < bytes.len() {
        return Err(Reason::TrailingCharacters(
            String::from_utf8_lossy(&bytes[pos..]).into_owned(),
        ));
    }

    let month = Month::try_from(month_number).map_err(|_| Reason::InvalidMonth(month_number))?;
    let max = days_in_month(i64::from(year), month);
    if day == 0 || day > max {
        return Err(Reason::InvalidDay {
            year,
            month: month_number,
            day,
            max,
        });
    }

    Ok((year, month, day))
}

fn year_value(digits: &[u8], negative: bool) -> Result<i32, Reason> {
    let out_of_range = || {
        let text = String::from_utf8_lossy(digits);
        Reason::YearOutOfRange(if negative { format!("-{text}") } else { text.into_owned() })
    };

    let mut magnitude: i64 = 0;
    for &digit in digits {
        magnitude = magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(i64::from(digit - b'0')))
            .ok_or_else(out_of_range)?;
    }
    let year = if negative { -magnitude } else { magnitude };
    if year < i64::from(MIN_YEAR) || year > i64::from(MAX_YEAR) {
        return Err(out_of_range());
    }
    i32::try_from(year).map_err(|_| out_of_range())
}

fn separator(bytes: &[u8], pos: usize, next: &'static str) -> Result<usize, Reason> {
    match bytes.get(pos) {
        None => Err(Reason::MissingComponent(next)),
        Some(&byte) if char::from(byte) == DATE_SEPARATOR => Ok(pos + 1),
        Some(_) => Err(Reason::ExpectedLiteral {
            position: pos,
            expected: SEPARATOR,
        }),
    }
}

fn two_digits(bytes: &[u8], pos: usize, component: &'static str) -> Result<u8, Reason> {
    if pos >= bytes.len() {
        return Err(Reason::MissingComponent(component));
    }
    let mut value = 0;
    for offset in pos..pos + 2 {
        match bytes.get(offset) {
            Some(digit) if digit.is_ascii_digit() => value = value * 10 + (digit - b'0'),
            _ => return Err(Reason::ExpectedDigit(offset)),
        }
    }
    Ok(value)
}
