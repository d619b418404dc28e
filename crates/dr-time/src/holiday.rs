//! Holiday records and holiday sets.
//!
//! A [`HolidayRecord`] marks one named exception day.  Standard holidays
//! (`is_off_day == true`) take a weekday out of the working calendar;
//! compensatory workdays (`is_off_day == false`) put a weekend day back in.
//!
//! A [`HolidaySet`] holds at most one record per date and can span any
//! number of years: per-year sets are merged with [`HolidaySet::union`] /
//! [`HolidaySet::extend`], keyed by date.

use std::collections::BTreeMap;

use crate::date::Date;

/// One named exception day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HolidayRecord {
    /// Display name of the holiday (e.g. `"Spring Festival"`).
    pub name: String,
    /// The calendar date the record applies to.
    pub date: Date,
    /// `true` for a day off, `false` for a mandated (compensatory) workday.
    pub is_off_day: bool,
}

impl HolidayRecord {
    /// A standard holiday: the date is not worked.
    pub fn off_day(name: impl Into<String>, date: Date) -> Self {
        Self {
            name: name.into(),
            date,
            is_off_day: true,
        }
    }

    /// A compensatory workday: the date is worked even on a weekend.
    pub fn workday(name: impl Into<String>, date: Date) -> Self {
        Self {
            name: name.into(),
            date,
            is_off_day: false,
        }
    }
}

/// A set of holiday records keyed by date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    records: BTreeMap<Date, HolidayRecord>,
}

impl HolidaySet {
    /// Create an empty set (a calendar with weekends only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing and returning any record already present
    /// for the same date.
    pub fn insert(&mut self, record: HolidayRecord) -> Option<HolidayRecord> {
        self.records.insert(record.date, record)
    }

    /// Remove the record for `date`, if any.
    pub fn remove(&mut self, date: Date) -> Option<HolidayRecord> {
        self.records.remove(&date)
    }

    /// Look up the record for `date`.
    pub fn get(&self, date: Date) -> Option<&HolidayRecord> {
        self.records.get(&date)
    }

    /// Return `true` if a record exists for `date`.
    pub fn contains(&self, date: Date) -> bool {
        self.records.contains_key(&date)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Return `true` if the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &HolidayRecord> {
        self.records.values()
    }

    /// Records falling in `year`.
    pub fn in_year(&self, year: u16) -> impl Iterator<Item = &HolidayRecord> {
        self.records.values().filter(move |r| r.date.year() == year)
    }

    /// Merge `other` into `self`.  On a date collision the record from
    /// `other` wins.
    pub fn union(mut self, other: HolidaySet) -> HolidaySet {
        self.records.extend(other.records);
        self
    }
}

impl FromIterator<HolidayRecord> for HolidaySet {
    /// Later records replace earlier ones for the same date.
    fn from_iter<I: IntoIterator<Item = HolidayRecord>>(iter: I) -> Self {
        let mut set = HolidaySet::new();
        set.extend(iter);
        set
    }
}

impl Extend<HolidayRecord> for HolidaySet {
    fn extend<I: IntoIterator<Item = HolidayRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl IntoIterator for HolidaySet {
    type Item = HolidayRecord;
    type IntoIter = std::collections::btree_map::IntoValues<Date, HolidayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn empty_set_has_no_records() {
        let set = HolidaySet::new();
        assert!(set.is_empty());
        assert!(set.get(date(2024, 1, 1)).is_none());
    }

    #[test]
    fn insert_and_remove() {
        let mut set = HolidaySet::new();
        let d = date(2024, 3, 15);
        assert!(set.insert(HolidayRecord::off_day("Custom", d)).is_none());
        assert!(set.contains(d));
        assert_eq!(set.len(), 1);

        assert_eq!(set.remove(d).map(|r| r.name), Some("Custom".to_string()));
        assert!(!set.contains(d));
    }

    #[test]
    fn one_record_per_date_last_wins() {
        let d = date(2024, 2, 4);
        let set: HolidaySet = [
            HolidayRecord::off_day("first", d),
            HolidayRecord::workday("second", d),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 1);
        let rec = set.get(d).unwrap();
        assert_eq!(rec.name, "second");
        assert!(!rec.is_off_day);
    }

    #[test]
    fn union_spans_years() {
        let y2023: HolidaySet = [HolidayRecord::off_day("Christmas", date(2023, 12, 25))]
            .into_iter()
            .collect();
        let y2024: HolidaySet = [
            HolidayRecord::off_day("New Year", date(2024, 1, 1)),
            HolidayRecord::workday("Makeup", date(2024, 2, 4)),
        ]
        .into_iter()
        .collect();
        let all = y2023.union(y2024);
        assert_eq!(all.len(), 3);
        assert_eq!(all.in_year(2024).count(), 2);
        let names: Vec<&str> = all.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Christmas", "New Year", "Makeup"]);
    }
}
