//! Calendar dates without a time of day, in the proleptic Gregorian calendar.
//!
//! [`CivilDate`] is a plain day number with calendar accessors and day
//! arithmetic. Text goes through the extended ISO 8601 codec, which also
//! handles expanded years such as `-0044-03-15` or `+12345-06-07`, or through
//! one of the named [`Layout`]s.
//!
//! ```
//! use civil_date::{CivilDate, Layout};
//! use time::Month;
//!
//! let date: CivilDate = "-5000000-09-17".parse()?;
//! assert_eq!(date.to_calendar_date(), (-5_000_000, Month::September, 17));
//! assert_eq!(date.format_iso(8), "-05000000-09-17");
//!
//! let date = CivilDate::parse(Layout::Rfc1123W, "Mon, 05 Dec 1928")?;
//! assert_eq!(date.to_string(), "1928-12-05");
//! # Ok::<(), civil_date::FormatError>(())
//! ```

mod calendar;
mod consts;
mod date;
mod error;
mod iso;
mod layout;
mod prelude;
mod range;

pub use calendar::{days_in_month, is_leap_year};
pub use consts::*;
pub use date::CivilDate;
pub use error::{DateError, FormatError, Reason, UnknownLayout};
pub use iso::{format_extended_iso, parse_extended_iso};
pub use layout::Layout;
pub use range::{DateRange, Days, RangeError};
