//! Named date layouts from the common internet and ISO standards.
//!
//! Each layout is a fixed sequence of [`Token`]s. Parsing walks the tokens
//! against the input left to right; formatting writes them in order.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::{Month, Weekday};

use crate::calendar::days_in_month;
use crate::consts::{ABBREVIATION_LEN, MONTH_ABBREVIATIONS, TWO_DIGIT_YEAR_PIVOT, WEEKDAY_NAMES};
use crate::date::CivilDate;
use crate::error::{FormatError, Reason, UnknownLayout};
use crate::prelude::*;

/// A named date layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Layout {
    /// `2006-01-02`
    #[display(fmt = "ISO8601")]
    #[serde(rename = "ISO8601")]
    Iso8601,
    /// `20060102`
    #[display(fmt = "ISO8601B")]
    #[serde(rename = "ISO8601B")]
    Iso8601B,
    /// `02-Jan-06`
    #[display(fmt = "RFC822")]
    #[serde(rename = "RFC822")]
    Rfc822,
    /// `Mon, 02-Jan-06`
    #[display(fmt = "RFC822W")]
    #[serde(rename = "RFC822W")]
    Rfc822W,
    /// `Monday, 02-Jan-06`
    #[display(fmt = "RFC850")]
    #[serde(rename = "RFC850")]
    Rfc850,
    /// `02 Jan 2006`
    #[display(fmt = "RFC1123")]
    #[serde(rename = "RFC1123")]
    Rfc1123,
    /// `Mon, 02 Jan 2006`
    #[display(fmt = "RFC1123W")]
    #[serde(rename = "RFC1123W")]
    Rfc1123W,
    /// `2006-01-02`, the full-date production of RFC 3339
    #[display(fmt = "RFC3339")]
    #[serde(rename = "RFC3339")]
    Rfc3339,
}

/// One field or literal of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// Exactly four unsigned digits
    Year,
    /// Two digits, placed in 1969..=2068
    ShortYear,
    /// Two-digit month number
    Month,
    /// Three-letter English month name
    MonthName,
    /// Two-digit day of month
    Day,
    /// Three-letter English weekday name
    WeekdayName,
    /// Full English weekday name
    LongWeekdayName,
    Literal(&'static str),
}

const ISO8601: &[Token] = &[
    Token::Year,
    Token::Literal("-"),
    Token::Month,
    Token::Literal("-"),
    Token::Day,
];
const ISO8601_BASIC: &[Token] = &[Token::Year, Token::Month, Token::Day];
const RFC822: &[Token] = &[
    Token::Day,
    Token::Literal("-"),
    Token::MonthName,
    Token::Literal("-"),
    Token::ShortYear,
];
const RFC822_WEEKDAY: &[Token] = &[
    Token::WeekdayName,
    Token::Literal(", "),
    Token::Day,
    Token::Literal("-"),
    Token::MonthName,
    Token::Literal("-"),
    Token::ShortYear,
];
const RFC850: &[Token] = &[
    Token::LongWeekdayName,
    Token::Literal(", "),
    Token::Day,
    Token::Literal("-"),
    Token::MonthName,
    Token::Literal("-"),
    Token::ShortYear,
];
const RFC1123: &[Token] = &[
    Token::Day,
    Token::Literal(" "),
    Token::MonthName,
    Token::Literal(" "),
    Token::Year,
];
const RFC1123_WEEKDAY: &[Token] = &[
    Token::WeekdayName,
    Token::Literal(", "),
    Token::Day,
    Token::Literal(" "),
    Token::MonthName,
    Token::Literal(" "),
    Token::Year,
];

impl Layout {
    /// Every layout, in declaration order
    pub const ALL: [Self; 8] = [
        Self::Iso8601,
        Self::Iso8601B,
        Self::Rfc822,
        Self::Rfc822W,
        Self::Rfc850,
        Self::Rfc1123,
        Self::Rfc1123W,
        Self::Rfc3339,
    ];

    const fn tokens(self) -> &'static [Token] {
        match self {
            Self::Iso8601 | Self::Rfc3339 => ISO8601,
            Self::Iso8601B => ISO8601_BASIC,
            Self::Rfc822 => RFC822,
            Self::Rfc822W => RFC822_WEEKDAY,
            Self::Rfc850 => RFC850,
            Self::Rfc1123 => RFC1123,
            Self::Rfc1123W => RFC1123_WEEKDAY,
        }
    }

    /// Parses `input`, which must match this layout exactly.
    ///
    /// Four-digit year fields take no sign; use [`CivilDate::parse_iso`] for
    /// expanded years. Weekday names must be valid names but are not checked
    /// against the date.
    ///
    /// # Errors
    /// Returns `FormatError` if the input does not match the layout or names a
    /// day that does not exist.
    pub fn parse(self, input: &str) -> Result<CivilDate, FormatError> {
        self.scan(input.as_bytes())
            .map_err(|reason| FormatError::new(input, reason))
    }

    /// Formats `date` in this layout.
    ///
    /// A four-digit year field holds years outside 0..=9999 at their natural
    /// width, with a leading `-` for negative years.
    pub fn format(self, date: CivilDate) -> String {
        let (year, month, day) = date.to_calendar_date();
        let mut out = String::with_capacity(18);
        for token in self.tokens() {
            // Writing into a String cannot fail
            let _ = match *token {
                Token::Year if year < 0 => write!(out, "-{:04}", year.unsigned_abs()),
                Token::Year => write!(out, "{year:04}"),
                Token::ShortYear => write!(out, "{:02}", year.rem_euclid(100)),
                Token::Month => write!(out, "{:02}", u8::from(month)),
                Token::MonthName => out.write_str(month_abbreviation(month)),
                Token::Day => write!(out, "{day:02}"),
                Token::WeekdayName => out.write_str(weekday_abbreviation(date.weekday())),
                Token::LongWeekdayName => out.write_str(weekday_name(date.weekday())),
                Token::Literal(text) => out.write_str(text),
            };
        }
        out
    }

    fn scan(self, bytes: &[u8]) -> Result<CivilDate, Reason> {
        let mut pos = 0;
        let mut year = None;
        let mut month = None;
        let mut day = None;

        for token in self.tokens() {
            match *token {
                Token::Year => {
                    year = Some(i32::from(digits(bytes, pos, 4, "year")?));
                    pos += 4;
                }
                Token::ShortYear => {
                    let short = i32::from(digits(bytes, pos, 2, "year")?);
                    year = Some(if short >= TWO_DIGIT_YEAR_PIVOT {
                        1900 + short
                    } else {
                        2000 + short
                    });
                    pos += 2;
                }
                Token::Month => {
                    let number = digits(bytes, pos, 2, "month")? as u8;
                    month = Some(Month::try_from(number).map_err(|_| Reason::InvalidMonth(number))?);
                    pos += 2;
                }
                Token::MonthName => {
                    let index = match_name(bytes, pos, MONTH_ABBREVIATIONS.iter().copied())
                        .ok_or(Reason::UnknownMonthName(pos))?;
                    month = Some(Month::January.nth_next(index as u8));
                    pos += ABBREVIATION_LEN;
                }
                Token::Day => {
                    day = Some(digits(bytes, pos, 2, "day")? as u8);
                    pos += 2;
                }
                Token::WeekdayName => {
                    let abbreviations = WEEKDAY_NAMES.iter().map(|name| &name[..ABBREVIATION_LEN]);
                    match_name(bytes, pos, abbreviations).ok_or(Reason::UnknownWeekdayName(pos))?;
                    pos += ABBREVIATION_LEN;
                }
                Token::LongWeekdayName => {
                    let index = match_name(bytes, pos, WEEKDAY_NAMES.iter().copied())
                        .ok_or(Reason::UnknownWeekdayName(pos))?;
                    pos += WEEKDAY_NAMES[index].len();
                }
                Token::Literal(text) => {
                    if !bytes[pos..].starts_with(text.as_bytes()) {
                        return Err(Reason::ExpectedLiteral {
                            position: pos,
                            expected: text,
                        });
                    }
                    pos += text.len();
                }
            }
        }

        if pos < bytes.len() {
            return Err(Reason::TrailingCharacters(
                String::from_utf8_lossy(&bytes[pos..]).into_owned(),
            ));
        }

        let (Some(year), Some(month), Some(day)) = (year, month, day) else {
            return Err(Reason::MissingComponent("date field"));
        };
        let max = days_in_month(i64::from(year), month);
        if day == 0 || day > max {
            return Err(Reason::InvalidDay {
                year,
                month: month.into(),
                day,
                max,
            });
        }
        CivilDate::new(year, month, day).map_err(|_| Reason::YearOutOfRange(year.to_string()))
    }
}

impl FromStr for Layout {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLayout(s.to_owned()))
    }
}

/// Reads exactly `count` ASCII digits starting at `pos`.
fn digits(bytes: &[u8], pos: usize, count: usize, component: &'static str) -> Result<u16, Reason> {
    if pos >= bytes.len() {
        return Err(Reason::MissingComponent(component));
    }
    let mut value = 0;
    for offset in pos..pos + count {
        match bytes.get(offset) {
            Some(digit) if digit.is_ascii_digit() => value = value * 10 + u16::from(digit - b'0'),
            _ => return Err(Reason::ExpectedDigit(offset)),
        }
    }
    Ok(value)
}

/// Index of the first name that `bytes[pos..]` starts with, ignoring ASCII case.
fn match_name<'a>(bytes: &[u8], pos: usize, names: impl IntoIterator<Item = &'a str>) -> Option<usize> {
    names.into_iter().position(|name| {
        bytes
            .get(pos..pos + name.len())
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name.as_bytes()))
    })
}

fn month_abbreviation(month: Month) -> &'static str {
    MONTH_ABBREVIATIONS[usize::from(u8::from(month)) - 1]
}

fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[usize::from(weekday.number_days_from_monday())]
}

fn weekday_abbreviation(weekday: Weekday) -> &'static str {
    &weekday_name(weekday)[..ABBREVIATION_LEN]
}
