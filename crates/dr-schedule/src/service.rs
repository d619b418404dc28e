//! `GenerateSchedule` over live collaborators.

use dr_core::errors::Result;
use tracing::debug;

use crate::entry::ScheduleEntry;
use crate::generator::{generate, ScheduleSnapshot};
use crate::provider::{AnchorSource, HolidayProvider, RosterSource};

/// Couples the schedule generator with its roster, anchor and holiday
/// collaborators.
///
/// Every call re-reads the roster and anchor, so an operator edit is visible
/// on the next request without any invalidation.
#[derive(Debug, Clone)]
pub struct ScheduleService<R, A, H> {
    roster: R,
    anchor: A,
    holidays: H,
}

impl<R, A, H> ScheduleService<R, A, H>
where
    R: RosterSource,
    A: AnchorSource,
    H: HolidayProvider,
{
    /// Build a service from its three collaborators.
    pub fn new(roster: R, anchor: A, holidays: H) -> Self {
        Self {
            roster,
            anchor,
            holidays,
        }
    }

    /// Read a consistent roster/anchor snapshot.
    pub fn snapshot(&self) -> Result<ScheduleSnapshot> {
        Ok(ScheduleSnapshot::new(self.roster.roster()?, self.anchor.anchor()?))
    }

    /// Generate the schedule for `month` (0-based) of `year`.
    pub fn generate_schedule(&self, year: u16, month: u8) -> Result<Vec<ScheduleEntry>> {
        let holidays = self.holidays.holidays(year)?;
        let snapshot = self.snapshot()?;
        debug!(
            year,
            month,
            holidays = holidays.len(),
            employees = snapshot.roster.len(),
            "generating schedule"
        );
        generate(year, month, &holidays, &snapshot, &self.holidays)
    }

    /// The holiday provider.
    pub fn holidays(&self) -> &H {
        &self.holidays
    }
}
