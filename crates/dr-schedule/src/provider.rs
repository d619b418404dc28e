//! Collaborator interfaces consumed by the schedule service.
//!
//! Each collaborator hands back an owned snapshot.  The engine never holds
//! on to a collaborator's internal state, so a roster or anchor edit shows
//! up on the very next request.

use std::collections::BTreeMap;
use std::sync::Arc;

use dr_core::errors::Result;
use dr_time::HolidaySet;

use crate::anchor::ScheduleAnchor;
use crate::roster::Roster;

/// Source of the current roster.
pub trait RosterSource {
    /// Snapshot of the current roster.
    fn roster(&self) -> Result<Roster>;
}

/// Source of the current rotation anchor.
pub trait AnchorSource {
    /// Snapshot of the current anchor.
    fn anchor(&self) -> Result<ScheduleAnchor>;
}

/// Read-only provider of annual holiday calendars.
pub trait HolidayProvider {
    /// Holiday records for `year`.  A year without data yields an empty set,
    /// not an error.
    fn holidays(&self, year: u16) -> Result<HolidaySet>;
}

macro_rules! forward_impls {
    ($trait:ident, $method:ident ( $($arg:ident : $ty:ty),* ) -> $ret:ty) => {
        impl<T: $trait + ?Sized> $trait for &T {
            fn $method(&self, $($arg: $ty),*) -> $ret {
                (**self).$method($($arg),*)
            }
        }

        impl<T: $trait + ?Sized> $trait for Box<T> {
            fn $method(&self, $($arg: $ty),*) -> $ret {
                (**self).$method($($arg),*)
            }
        }

        impl<T: $trait + ?Sized> $trait for Arc<T> {
            fn $method(&self, $($arg: $ty),*) -> $ret {
                (**self).$method($($arg),*)
            }
        }
    };
}

forward_impls!(RosterSource, roster() -> Result<Roster>);
forward_impls!(AnchorSource, anchor() -> Result<ScheduleAnchor>);
forward_impls!(HolidayProvider, holidays(year: u16) -> Result<HolidaySet>);

/// A provider with no holiday data for any year.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayProvider for NoHolidays {
    fn holidays(&self, _year: u16) -> Result<HolidaySet> {
        Ok(HolidaySet::new())
    }
}

/// Fixed per-year holiday sets held in memory.
#[derive(Debug, Clone, Default)]
pub struct YearlyHolidays {
    years: BTreeMap<u16, HolidaySet>,
}

impl YearlyHolidays {
    /// An empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the holiday set for `year`, replacing any previous one.
    pub fn with_year(mut self, year: u16, holidays: HolidaySet) -> Self {
        self.years.insert(year, holidays);
        self
    }

    /// Years with registered data.
    pub fn years(&self) -> impl Iterator<Item = u16> + '_ {
        self.years.keys().copied()
    }
}

impl HolidayProvider for YearlyHolidays {
    fn holidays(&self, year: u16) -> Result<HolidaySet> {
        Ok(self.years.get(&year).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dr_time::{Date, HolidayRecord};

    #[test]
    fn missing_year_is_empty_not_error() {
        let p = YearlyHolidays::new();
        assert!(p.holidays(2024).unwrap().is_empty());
        assert!(NoHolidays.holidays(1999).unwrap().is_empty());
    }

    #[test]
    fn forwarding_impls() {
        let d = Date::from_ymd(2024, 1, 1).unwrap();
        let set: HolidaySet = [HolidayRecord::off_day("New Year", d)].into_iter().collect();
        let p = Arc::new(YearlyHolidays::new().with_year(2024, set));
        let by_ref: &dyn HolidayProvider = &p;
        assert_eq!(by_ref.holidays(2024).unwrap().len(), 1);
        let boxed: Box<dyn HolidayProvider> = Box::new(NoHolidays);
        assert!(boxed.holidays(2024).unwrap().is_empty());
        assert_eq!(p.years().collect::<Vec<_>>(), vec![2024]);
    }
}
