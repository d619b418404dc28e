use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dr_store::{JsonAnchorStore, JsonHolidayDirectory, JsonRosterStore};
use serde::Deserialize;
use tracing::debug;

/// Config file looked up in the working directory when `--config` is not
/// given.
pub const DEFAULT_CONFIG: &str = "dutyroll.toml";

/// Top-level `dutyroll.toml`.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DutyrollConfig {
    /// Where the data files live.
    #[serde(default)]
    pub paths: PathsConfig,
}

/// `[paths]` section.  Relative paths resolve against the working directory.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Holds `employees.json` and `scheduleConfig.json`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Holds one `<year>.json` per year.
    #[serde(default = "default_holidays_dir")]
    pub holidays_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            holidays_dir: default_holidays_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_holidays_dir() -> PathBuf {
    PathBuf::from("holidays")
}

impl DutyrollConfig {
    /// Load settings.
    ///
    /// With `path == None` the default file is read if present, otherwise
    /// built-in defaults apply.  An explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG), false),
        };
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read config file: {}", path.display()))
            }
        };
        Self::parse(&text)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }

    /// Parse settings from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Store for `<data_dir>/employees.json`.
    pub fn roster_store(&self) -> JsonRosterStore {
        JsonRosterStore::new(self.paths.data_dir.join("employees.json"))
    }

    /// Store for `<data_dir>/scheduleConfig.json`.
    pub fn anchor_store(&self) -> JsonAnchorStore {
        JsonAnchorStore::new(
            self.paths.data_dir.join("scheduleConfig.json"),
            self.roster_store(),
        )
    }

    /// Reader for `<holidays_dir>/<year>.json`.
    pub fn holiday_directory(&self) -> JsonHolidayDirectory {
        JsonHolidayDirectory::new(&self.paths.holidays_dir)
    }
}
