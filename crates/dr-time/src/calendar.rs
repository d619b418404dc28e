//! Day classification and workday counting.
//!
//! A [`Calendar`] knows the holiday record (if any) for each date.  From that
//! alone it classifies a date as a plain workday, a plain weekend, a holiday
//! off-day or a compensatory workday, and enumerates the workdays of a date
//! range.

use crate::date::Date;
use crate::holiday::{HolidayRecord, HolidaySet};
use crate::range::DateRange;

/// How a single calendar day is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKind {
    /// Monday–Friday without a holiday record.
    Workday,
    /// Saturday or Sunday without a holiday record.
    Weekend,
    /// A holiday record with `is_off_day == true`.
    HolidayOff,
    /// A holiday record with `is_off_day == false`: worked despite the
    /// record, typically a weekend day shifted around a public holiday.
    CompensatoryWorkday,
}

/// Classification of one date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DayClass {
    /// The classified date.
    pub date: Date,
    /// The resulting kind.
    pub kind: DayKind,
    /// Name of the holiday record, when one exists.
    pub holiday_name: Option<String>,
}

impl DayClass {
    /// Return `true` if someone is on duty on this date.
    pub fn is_workday(&self) -> bool {
        matches!(self.kind, DayKind::Workday | DayKind::CompensatoryWorkday)
    }

    /// Return `true` if a holiday record exists for this date.
    pub fn is_holiday(&self) -> bool {
        matches!(
            self.kind,
            DayKind::HolidayOff | DayKind::CompensatoryWorkday
        )
    }

    /// Return `true` for a holiday off-day.
    pub fn is_off_day(&self) -> bool {
        self.kind == DayKind::HolidayOff
    }

    /// Weekday index, Sunday = 0 … Saturday = 6.
    pub fn day_of_week(&self) -> u8 {
        self.date.day_of_week()
    }
}

/// Classify `date` given the holiday record that applies to it, if any.
///
/// Rules, first match wins:
/// 1. an off-day record makes the date a holiday off-day;
/// 2. Saturday and Sunday without a record are plain weekend days;
/// 3. anything else is worked, flagged as compensatory when a record exists.
pub fn classify_with(date: Date, record: Option<&HolidayRecord>) -> DayClass {
    let kind = match record {
        Some(r) if r.is_off_day => DayKind::HolidayOff,
        None if date.weekday().is_weekend() => DayKind::Weekend,
        Some(_) => DayKind::CompensatoryWorkday,
        None => DayKind::Workday,
    };
    DayClass {
        date,
        kind,
        holiday_name: record.map(|r| r.name.clone()),
    }
}

/// A working calendar: weekends plus holiday exceptions.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// The holiday record for `date`, if any.
    fn holiday(&self, date: Date) -> Option<&HolidayRecord>;

    /// Classify `date`.
    fn classify(&self, date: Date) -> DayClass {
        classify_with(date, self.holiday(date))
    }

    /// Return `true` if `date` is a workday in this calendar.
    fn is_workday(&self, date: Date) -> bool {
        match self.holiday(date) {
            Some(r) => !r.is_off_day,
            None => date.weekday().is_weekday(),
        }
    }

    /// Workdays in `[start, end]`, chronological.  Empty when `start > end`.
    fn workdays(&self, start: Date, end: Date) -> Vec<Date> {
        DateRange::new(start, end)
            .iter()
            .filter(|&d| self.is_workday(d))
            .collect()
    }

    /// Number of workdays in `[start, end]`; equals `workdays(start, end).len()`.
    fn workday_count(&self, start: Date, end: Date) -> usize {
        DateRange::new(start, end)
            .iter()
            .filter(|&d| self.is_workday(d))
            .count()
    }
}

impl Calendar for HolidaySet {
    fn holiday(&self, date: Date) -> Option<&HolidayRecord> {
        self.get(date)
    }
}

/// A calendar that treats only Saturdays and Sundays as non-working days,
/// with no holiday records.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn holiday(&self, _date: Date) -> Option<&HolidayRecord> {
        None
    }
}

/// Free-function form of [`Calendar::classify`] over a holiday set.
pub fn classify(date: Date, holidays: &HolidaySet) -> DayClass {
    holidays.classify(date)
}

/// Free-function form of [`Calendar::workdays`] over a holiday set.
pub fn count_workdays(start: Date, end: Date, holidays: &HolidaySet) -> Vec<Date> {
    holidays.workdays(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekends_only_saturday() {
        let cal = WeekendsOnly;
        // 2023-09-02 is a Saturday
        let sat = cal.classify(date(2023, 9, 2));
        assert_eq!(sat.kind, DayKind::Weekend);
        assert!(!sat.is_workday());
        assert!(!sat.is_holiday());
        assert!(cal.is_workday(date(2023, 9, 4)));
    }

    #[test]
    fn off_day_on_tuesday() {
        let mut set = HolidaySet::new();
        // 2024-10-01 is a Tuesday
        set.insert(HolidayRecord::off_day("National Day", date(2024, 10, 1)));
        let c = set.classify(date(2024, 10, 1));
        assert_eq!(c.kind, DayKind::HolidayOff);
        assert!(!c.is_workday());
        assert!(c.is_holiday());
        assert!(c.is_off_day());
        assert_eq!(c.holiday_name.as_deref(), Some("National Day"));
        assert_eq!(c.day_of_week(), 2);
    }

    #[test]
    fn compensatory_saturday() {
        let mut set = HolidaySet::new();
        // 2024-10-12 is a Saturday
        set.insert(HolidayRecord::workday("National Day", date(2024, 10, 12)));
        let c = set.classify(date(2024, 10, 12));
        assert_eq!(c.kind, DayKind::CompensatoryWorkday);
        assert!(c.is_workday());
        assert!(c.is_holiday());
        assert!(!c.is_off_day());
    }

    #[test]
    fn off_day_record_on_weekend_is_still_off() {
        let mut set = HolidaySet::new();
        set.insert(HolidayRecord::off_day("National Day", date(2024, 10, 5)));
        let c = set.classify(date(2024, 10, 5));
        assert_eq!(c.kind, DayKind::HolidayOff);
        assert!(c.is_holiday());
    }

    #[test]
    fn workday_count_matches_sequence() {
        let mut set = HolidaySet::new();
        set.insert(HolidayRecord::off_day("New Year", date(2024, 1, 1)));
        set.insert(HolidayRecord::workday("Makeup", date(2024, 1, 6)));
        let (a, b) = (date(2023, 12, 25), date(2024, 1, 14));
        let days = set.workdays(a, b);
        assert_eq!(days.len(), set.workday_count(a, b));
        assert!(days.windows(2).all(|w| w[0] < w[1]));
        assert!(!days.contains(&date(2024, 1, 1)));
        assert!(days.contains(&date(2024, 1, 6)));
    }

    #[test]
    fn reversed_range_is_empty() {
        let cal = WeekendsOnly;
        assert!(cal.workdays(date(2024, 1, 10), date(2024, 1, 9)).is_empty());
        assert_eq!(cal.workday_count(date(2024, 1, 10), date(2024, 1, 9)), 0);
    }
}
