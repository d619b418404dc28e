//! # dr-time
//!
//! Calendar dates, holiday sets, day classification and workday counting.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Day classification and the `Calendar` trait.
pub mod calendar;

/// `Date` type.
pub mod date;

/// Holiday records and date-keyed holiday sets.
pub mod holiday;

/// `Month` — month of the year.
pub mod month;

/// `DateRange` — inclusive ranges of dates.
pub mod range;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{classify, count_workdays, Calendar, DayClass, DayKind, WeekendsOnly};
pub use date::Date;
pub use holiday::{HolidayRecord, HolidaySet};
pub use month::Month;
pub use range::DateRange;
pub use weekday::Weekday;
