//! Monthly schedule generation.
//!
//! A month is generated in one linear pass: the workday ordinal of the
//! month's first day is counted once from the anchor date, then carried as a
//! running counter that advances on every workday on or after the anchor.
//! For each workday `d` the counter equals `count_workdays(anchor, d).len()`,
//! which is 0 for every workday before the anchor date.

use dr_core::errors::{Error, Result};
use dr_time::{Calendar, Date, DateRange, HolidaySet, Month};
use tracing::debug;

use crate::anchor::ScheduleAnchor;
use crate::entry::ScheduleEntry;
use crate::provider::HolidayProvider;
use crate::roster::Roster;
use crate::rotation::Rotation;

/// Roster and anchor as read for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleSnapshot {
    /// Rotation order.
    pub roster: Roster,
    /// Rotation phase.
    pub anchor: ScheduleAnchor,
}

impl ScheduleSnapshot {
    /// Pair a roster with an anchor.
    pub fn new(roster: Roster, anchor: ScheduleAnchor) -> Self {
        Self { roster, anchor }
    }
}

/// Generate one entry per calendar day of `month` (0-based) in `year`.
///
/// `holidays_for_month` is the holiday set of `year`.  Holiday files may
/// publish records for the neighbouring years, so the sets of the years just
/// before and after are always merged in, together with every year touched
/// between the anchor date and the month; those come from `provider`.
///
/// # Errors
/// * `Error::InvalidArgument` for a month outside 0..=11;
/// * `Error::Date` for a year outside the supported range;
/// * `Error::EmptyRoster` when the anchor is set, the roster is empty and
///   the month has at least one workday;
/// * any error from `provider`.
#[tracing::instrument(skip(holidays_for_month, snapshot, provider), fields(roster = snapshot.roster.len()))]
pub fn generate<H>(
    year: u16,
    month: u8,
    holidays_for_month: &HolidaySet,
    snapshot: &ScheduleSnapshot,
    provider: &H,
) -> Result<Vec<ScheduleEntry>>
where
    H: HolidayProvider + ?Sized,
{
    let target = Month::from_index(month)
        .ok_or_else(|| Error::InvalidArgument(format!("month {month} out of range [0, 11]")))?;
    let days = DateRange::month(year, target)?;

    let Some(start) = snapshot.anchor.start_date else {
        debug!("no anchor date, leaving every day unassigned");
        let calendar = spanned_holidays(&days, year, holidays_for_month, provider)?;
        return Ok(days
            .iter()
            .map(|d| ScheduleEntry::unassigned(calendar.classify(d)))
            .collect());
    };

    let span = DateRange::new(start.min(days.start()), days.end());
    let calendar = spanned_holidays(&span, year, holidays_for_month, provider)?;
    let rotation = Rotation::new(&snapshot.roster, snapshot.anchor.start_index(&snapshot.roster));

    let mut ordinal = ordinal_before(&calendar, start, days.start());
    debug!(%start, ordinal, "rotation phase at month start");

    let mut entries = Vec::with_capacity(days.len());
    for d in days {
        let class = calendar.classify(d);
        let employee = if class.is_workday() {
            if d >= start {
                ordinal += 1;
            }
            let name = rotation
                .resolve(ordinal)
                .map_err(|_| Error::EmptyRoster { year, month })?;
            Some(name.to_owned())
        } else {
            None
        };
        entries.push(ScheduleEntry::new(class, employee));
    }
    Ok(entries)
}

/// Number of workdays in `[start, first)`; 0 when `first` is not after
/// `start`.
fn ordinal_before(calendar: &HolidaySet, start: Date, first: Date) -> usize {
    match first.pred() {
        Some(last) if start <= last => calendar.workday_count(start, last),
        _ => 0,
    }
}

/// Holiday records covering every date of `span`.
///
/// Loads every year of `span` plus one year on either side, reusing
/// `holidays_for_month` for `year`.  Where two files carry a record for the
/// same date, the file of that date's own year wins, so a date classifies
/// the same whatever span it is looked up in.
fn spanned_holidays<H>(
    span: &DateRange,
    year: u16,
    holidays_for_month: &HolidaySet,
    provider: &H,
) -> Result<HolidaySet>
where
    H: HolidayProvider + ?Sized,
{
    let years = span.years();
    let (first, last) = (years.start() - 1, years.end() + 1);

    let mut published = Vec::with_capacity(usize::from(last - first) + 1);
    for y in first..=last {
        let set = if y == year {
            holidays_for_month.clone()
        } else {
            let set = provider.holidays(y)?;
            debug!(year = y, records = set.len(), "merged holiday year");
            set
        };
        published.push((y, set));
    }

    let mut all = HolidaySet::new();
    for (y, set) in &published {
        all.extend(set.iter().filter(|r| r.date.year() != *y).cloned());
    }
    for (y, set) in &published {
        all.extend(set.in_year(*y).cloned());
    }
    Ok(all)
}
