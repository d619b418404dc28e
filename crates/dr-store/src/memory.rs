//! In-process store for tests and embedding.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use dr_schedule::{AnchorSource, HolidayProvider, Roster, RosterSource, ScheduleAnchor};
use dr_time::HolidaySet;

use crate::error::{Result, StoreError};

#[derive(Debug, Default)]
struct State {
    roster: Roster,
    anchor: ScheduleAnchor,
    holidays: BTreeMap<u16, HolidaySet>,
}

/// Roster, anchor and per-year holidays held in memory.
///
/// Readers get clones, so a snapshot taken for one request is unaffected by
/// later writes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    /// An empty store: no employees, no anchor, no holidays.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with `roster` and `anchor`.
    pub fn with(roster: Roster, anchor: ScheduleAnchor) -> Self {
        Self {
            state: RwLock::new(State {
                roster,
                anchor,
                holidays: BTreeMap::new(),
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().expect("MemoryStore lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().expect("MemoryStore lock poisoned")
    }

    /// Replace the roster.
    pub fn set_roster(&self, roster: Roster) {
        self.write().roster = roster;
    }

    /// Apply `f` to the roster in place and return the result.
    pub fn update_roster<F>(&self, f: F) -> Result<Roster>
    where
        F: FnOnce(&mut Roster) -> dr_core::Result<()>,
    {
        let mut state = self.write();
        let mut next = state.roster.clone();
        f(&mut next)?;
        state.roster = next.clone();
        Ok(next)
    }

    /// Replace the anchor after checking its employee is on the roster.
    pub fn set_anchor(&self, anchor: ScheduleAnchor) -> Result<()> {
        let mut state = self.write();
        if let Some(name) = anchor.unknown_employee(&state.roster) {
            return Err(StoreError::UnknownEmployee(name.to_owned()));
        }
        state.anchor = anchor;
        Ok(())
    }

    /// Install the holiday set for `year`, replacing any previous one.
    pub fn set_holidays(&self, year: u16, holidays: HolidaySet) {
        self.write().holidays.insert(year, holidays);
    }
}

impl RosterSource for MemoryStore {
    fn roster(&self) -> dr_core::Result<Roster> {
        Ok(self.read().roster.clone())
    }
}

impl AnchorSource for MemoryStore {
    fn anchor(&self) -> dr_core::Result<ScheduleAnchor> {
        Ok(self.read().anchor.clone())
    }
}

impl HolidayProvider for MemoryStore {
    fn holidays(&self, year: u16) -> dr_core::Result<HolidaySet> {
        Ok(self.read().holidays.get(&year).cloned().unwrap_or_default())
    }
}
