//! One line of a generated schedule.

use dr_time::{Date, DayClass};

/// A calendar day of a generated month.
///
/// Entries are recomputed on every request and never stored.  They uphold:
/// * `employee.is_some()` exactly when `is_workday`;
/// * `is_off_day` implies `!is_workday`;
/// * `is_holiday` exactly when a holiday record exists for `date`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScheduleEntry {
    /// The calendar day.
    pub date: Date,
    /// Employee on duty, `None` on non-workdays and when no anchor is set.
    pub employee: Option<String>,
    /// Weekday index, Sunday = 0 … Saturday = 6.
    pub day_of_week: u8,
    /// Whether the day is worked.
    pub is_workday: bool,
    /// Whether a holiday record exists for the day.
    pub is_holiday: bool,
    /// Whether the day is a holiday off-day.
    pub is_off_day: bool,
    /// Name of the holiday record, if any.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub holiday_name: Option<String>,
}

impl ScheduleEntry {
    /// An entry for `class` with `employee` on duty.
    ///
    /// `employee` is dropped for non-workdays.
    pub fn new(class: DayClass, employee: Option<String>) -> Self {
        let is_workday = class.is_workday();
        Self {
            date: class.date,
            employee: employee.filter(|_| is_workday),
            day_of_week: class.day_of_week(),
            is_workday,
            is_holiday: class.is_holiday(),
            is_off_day: class.is_off_day(),
            holiday_name: class.holiday_name,
        }
    }

    /// An entry for `class` with nobody assigned.
    pub fn unassigned(class: DayClass) -> Self {
        Self::new(class, None)
    }
}
