//! Inclusive spans of civil dates, written as ISO 8601 `start/end` intervals.

use std::{iter::FusedIterator, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{CivilDate, FormatError, RANGE_SEPARATOR, prelude::*};

/// Every day from `start` through `end`, both included.
///
/// Ranges order by start and then by end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: CivilDate,
    end:   CivilDate,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("range ends on {end}, before it starts on {start}")]
    Reversed { start: CivilDate, end: CivilDate },

    #[error(transparent)]
    Endpoint(#[from] FormatError),

    /// The text did not hold exactly one `/`.
    #[error("cannot parse {input:?} as a date range: expected one '/', found {found}")]
    Separator { input: String, found: usize },
}

impl DateRange {
    /// # Errors
    /// `RangeError::Reversed` when `end` is earlier than `start`.
    pub fn new(start: CivilDate, end: CivilDate) -> Result<Self, RangeError> {
        if end < start {
            return Err(RangeError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range holding one day.
    pub const fn single(date: CivilDate) -> Self {
        Self {
            start: date,
            end:   date,
        }
    }

    pub const fn start(&self) -> CivilDate {
        self.start
    }

    pub const fn end(&self) -> CivilDate {
        self.end
    }

    /// Day count including both ends; never zero.
    pub fn len_days(&self) -> u64 {
        (self.end - self.start).unsigned_abs() + 1
    }

    pub fn contains(&self, date: CivilDate) -> bool {
        (self.start..=self.end).contains(&date)
    }

    /// True when the two ranges share at least one day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// True when every day of `self` is also in `outer`.
    pub fn is_within(&self, outer: &Self) -> bool {
        outer.contains(self.start) && outer.contains(self.end)
    }

    pub const fn iter(&self) -> Days {
        Days {
            next: Some(self.start),
            last: self.end,
        }
    }
}

impl From<CivilDate> for DateRange {
    fn from(date: CivilDate) -> Self {
        Self::single(date)
    }
}

/// Iterator over the dates of a [`DateRange`], earliest first.
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<CivilDate>,
    last: CivilDate,
}

impl Iterator for Days {
    type Item = CivilDate;

    fn next(&mut self) -> Option<CivilDate> {
        let current = self.next?;
        // succ() is None at CivilDate::MAX, which also ends the walk
        self.next = if current < self.last { current.succ() } else { None };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map_or(0, |next| usize::try_from(self.last - next + 1).unwrap_or(usize::MAX));
        (remaining, Some(remaining))
    }
}

impl FusedIterator for Days {}

impl IntoIterator for DateRange {
    type Item = CivilDate;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = CivilDate;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.iter()
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(input: &str) -> Result<Self, RangeError> {
        let separator = || RangeError::Separator {
            input: input.to_owned(),
            found: input.matches(RANGE_SEPARATOR).count(),
        };

        let (start, end) = input.split_once(RANGE_SEPARATOR).ok_or_else(separator)?;
        if end.contains(RANGE_SEPARATOR) {
            return Err(separator());
        }

        Self::new(start.parse()?, end.parse()?)
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}
