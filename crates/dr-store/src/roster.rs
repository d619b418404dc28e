//! The roster persisted as a JSON array of names.

use std::path::{Path, PathBuf};

use dr_schedule::{Roster, RosterSource};
use tracing::{debug, info};

use crate::error::Result;
use crate::file;

/// A roster stored as `["Alice", "Bob", ...]` in a single file.
///
/// Every mutator reads the current file, applies the change and writes the
/// result back before returning it.
#[derive(Debug, Clone)]
pub struct JsonRosterStore {
    path: PathBuf,
}

impl JsonRosterStore {
    /// A store backed by `path`.  The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current roster; empty when the file does not exist.
    pub fn load(&self) -> Result<Roster> {
        Ok(file::read_json::<Roster>(&self.path)?.unwrap_or_default())
    }

    /// Append `name`.  An existing name leaves the file untouched.
    #[tracing::instrument(skip(self))]
    pub fn add(&self, name: &str) -> Result<Roster> {
        let mut roster = self.load()?;
        if roster.add(name)? {
            self.save(&roster)?;
            info!(employees = roster.len(), "employee added");
        } else {
            debug!("already on the roster");
        }
        Ok(roster)
    }

    /// Remove `name`.  An absent name is not an error.
    #[tracing::instrument(skip(self))]
    pub fn remove(&self, name: &str) -> Result<Roster> {
        let mut roster = self.load()?;
        if roster.remove(name) {
            self.save(&roster)?;
            info!(employees = roster.len(), "employee removed");
        } else {
            debug!("not on the roster");
        }
        Ok(roster)
    }

    /// Replace the whole roster.
    pub fn replace<I, S>(&self, names: I) -> Result<Roster>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roster = Roster::from_names(names)?;
        self.save(&roster)?;
        info!(employees = roster.len(), "roster replaced");
        Ok(roster)
    }

    /// Move `name` to rotation position `index`.
    #[tracing::instrument(skip(self))]
    pub fn move_to(&self, name: &str, index: usize) -> Result<Roster> {
        let mut roster = self.load()?;
        roster.move_to(name, index)?;
        self.save(&roster)?;
        Ok(roster)
    }

    fn save(&self, roster: &Roster) -> Result<()> {
        file::write_json(&self.path, roster)
    }
}

impl RosterSource for JsonRosterStore {
    fn roster(&self) -> dr_core::Result<Roster> {
        Ok(self.load()?)
    }
}
