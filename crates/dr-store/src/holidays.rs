//! Annual holiday calendars read from a directory of JSON files.
//!
//! Each year lives in `<dir>/<year>.json`:
//!
//! ```json
//! {
//!   "$schema": "https://example.org/holiday.schema.json",
//!   "year": 2024,
//!   "papers": ["https://example.org/notice-2024"],
//!   "days": [
//!     { "name": "New Year's Day", "date": "2024-01-01", "isOffDay": true },
//!     { "name": "Spring Festival", "date": "2024-02-04", "isOffDay": false }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use dr_schedule::HolidayProvider;
use dr_time::{HolidayRecord, HolidaySet};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, StoreError};
use crate::file;

/// On-disk shape of one year's holiday file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayFile {
    /// JSON schema reference, carried through untouched.
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Document identifier, carried through untouched.
    #[serde(rename = "$id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Declared year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// Source notices the records were taken from.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub papers: Vec<String>,
    /// The records.
    #[serde(default)]
    pub days: Vec<HolidayRecord>,
}

impl HolidayFile {
    /// Validate the records against `year` and collect them into a set.
    ///
    /// Records may belong to the adjacent years; anything further away is a
    /// `YearMismatch`.  On duplicate dates the later record wins.
    pub fn into_set(self, year: u16) -> Result<HolidaySet> {
        if let Some(declared) = self.year.filter(|&y| y != year) {
            warn!(year, declared, "holiday file declares a different year");
        }
        let mut set = HolidaySet::new();
        for record in self.days {
            if record.date.year().abs_diff(year) > 1 {
                return Err(StoreError::YearMismatch {
                    year,
                    date: record.date,
                });
            }
            let date = record.date;
            if let Some(previous) = set.insert(record) {
                warn!(%date, dropped = %previous.name, "duplicate holiday date, keeping the later record");
            }
        }
        Ok(set)
    }
}

/// A directory of `<year>.json` holiday files.
#[derive(Debug, Clone)]
pub struct JsonHolidayDirectory {
    dir: PathBuf,
}

impl JsonHolidayDirectory {
    /// Read holiday files from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory being read.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `year`.
    pub fn path_for(&self, year: u16) -> PathBuf {
        self.dir.join(format!("{year}.json"))
    }

    /// Load the holiday set for `year`.  A missing file is an empty set.
    pub fn load(&self, year: u16) -> Result<HolidaySet> {
        let path = self.path_for(year);
        match file::read_json::<HolidayFile>(&path)? {
            Some(doc) => {
                let set = doc.into_set(year)?;
                debug!(year, records = set.len(), "loaded holidays");
                Ok(set)
            }
            None => {
                warn!(year, path = %path.display(), "no holiday file for year");
                Ok(HolidaySet::new())
            }
        }
    }
}

impl HolidayProvider for JsonHolidayDirectory {
    fn holidays(&self, year: u16) -> dr_core::Result<HolidaySet> {
        Ok(self.load(year)?)
    }
}
