//! Inclusive ranges of calendar dates.

use crate::date::Date;
use crate::month::Month;
use dr_core::errors::Result;

/// An inclusive range `[start, end]` of calendar dates.
///
/// Iterating yields every date in chronological order.  A range whose
/// `start` lies after its `end` is empty rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Create the inclusive range `[start, end]`.
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Every day of `month` in `year`.
    pub fn month(year: u16, month: Month) -> Result<Self> {
        Ok(Self::new(
            Date::first_of_month(year, month)?,
            Date::last_of_month(year, month)?,
        ))
    }

    /// First date of the range.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last date of the range (inclusive).
    pub fn end(&self) -> Date {
        self.end
    }

    /// Return `true` if the range contains no dates.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of calendar days in the range.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    /// Return `true` if `date` lies within the range.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every distinct calendar year touched by the range, ascending.
    pub fn years(&self) -> std::ops::RangeInclusive<u16> {
        if self.is_empty() {
            // An empty RangeInclusive.
            #[allow(clippy::reversed_empty_ranges)]
            return 1..=0;
        }
        self.start.year()..=self.end.year()
    }

    /// Iterate over the dates of the range.
    pub fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            next: (!self.is_empty()).then_some(self.start),
            end: self.end,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = Date;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> DateRangeIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = Date;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> DateRangeIter {
        self.iter()
    }
}

/// Iterator over a [`DateRange`].
#[derive(Debug, Clone)]
pub struct DateRangeIter {
    next: Option<Date>,
    end: Date,
}

impl Iterator for DateRangeIter {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next?;
        self.next = if current < self.end {
            current.succ()
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match self.next {
            Some(d) if d <= self.end => (self.end - d) as usize + 1,
            _ => 0,
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for DateRangeIter {}

impl std::iter::FusedIterator for DateRangeIter {}
