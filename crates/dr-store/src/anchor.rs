//! The rotation anchor persisted as `scheduleConfig.json`.

use std::path::{Path, PathBuf};

use dr_schedule::{AnchorSource, ScheduleAnchor};
use dr_time::Date;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, StoreError};
use crate::file;
use crate::roster::JsonRosterStore;

/// On-disk shape of the schedule configuration.
///
/// `employeeOrder` mirrors the roster at the time of the last write and is
/// never read back; the roster file is authoritative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfig {
    /// `YYYY-MM-DD`; absent or blank means "not set".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Absent or blank means "roster position 0".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_employee: Option<String>,
    /// Snapshot of the roster order.
    #[serde(default)]
    pub employee_order: Vec<String>,
}

impl ScheduleConfig {
    /// Convert to an anchor, validating the start date.
    pub fn to_anchor(&self) -> Result<ScheduleAnchor> {
        let start_date = match non_blank(&self.start_date) {
            Some(s) => Some(
                s.parse::<Date>()
                    .map_err(|_| StoreError::InvalidDate(s.to_owned()))?,
            ),
            None => None,
        };
        Ok(ScheduleAnchor {
            start_date,
            start_employee: non_blank(&self.start_employee).map(str::to_owned),
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// The anchor stored in a JSON file, validated against a roster store.
#[derive(Debug, Clone)]
pub struct JsonAnchorStore {
    path: PathBuf,
    roster: JsonRosterStore,
}

impl JsonAnchorStore {
    /// A store backed by `path`, validating employees against `roster`.
    pub fn new(path: impl Into<PathBuf>, roster: JsonRosterStore) -> Self {
        Self {
            path: path.into(),
            roster,
        }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current anchor; unset when the file does not exist.
    pub fn load(&self) -> Result<ScheduleAnchor> {
        file::read_json::<ScheduleConfig>(&self.path)?
            .unwrap_or_default()
            .to_anchor()
    }

    /// Persist `anchor` after checking its employee is on the roster.
    ///
    /// # Errors
    /// `StoreError::UnknownEmployee` if `start_employee` is set but not on
    /// the current roster.
    #[tracing::instrument(skip(self))]
    pub fn update(&self, anchor: ScheduleAnchor) -> Result<ScheduleAnchor> {
        let roster = self.roster.load()?;
        if let Some(name) = anchor.unknown_employee(&roster) {
            return Err(StoreError::UnknownEmployee(name.to_owned()));
        }
        let config = ScheduleConfig {
            start_date: anchor.start_date.map(|d| d.to_string()),
            start_employee: anchor.start_employee.clone(),
            employee_order: roster.names().to_vec(),
        };
        file::write_json(&self.path, &config)?;
        info!("anchor updated");
        Ok(anchor)
    }

    /// Unset the anchor.  No employee is assigned until it is set again.
    pub fn clear(&self) -> Result<()> {
        self.update(ScheduleAnchor::default()).map(drop)
    }
}

impl AnchorSource for JsonAnchorStore {
    fn anchor(&self) -> dr_core::Result<ScheduleAnchor> {
        Ok(self.load()?)
    }
}
