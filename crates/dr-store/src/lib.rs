//! # dr-store
//!
//! Persistence for the roster, the rotation anchor and annual holiday
//! calendars, implementing the collaborator traits of `dr-schedule`.
//!
//! File layout used by the `dutyroll` binary:
//!
//! | File                          | Type                   |
//! |-------------------------------|------------------------|
//! | `data/employees.json`         | [`JsonRosterStore`]    |
//! | `data/scheduleConfig.json`    | [`JsonAnchorStore`]    |
//! | `holidays/<year>.json`        | [`JsonHolidayDirectory`] |

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `JsonAnchorStore` and the `scheduleConfig.json` record.
pub mod anchor;

/// `StoreError`.
pub mod error;

mod file;

/// `JsonHolidayDirectory` and the per-year file format.
pub mod holidays;

/// `MemoryStore`.
pub mod memory;

/// `JsonRosterStore`.
pub mod roster;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use anchor::{JsonAnchorStore, ScheduleConfig};
pub use error::{Result, StoreError};
pub use holidays::{HolidayFile, JsonHolidayDirectory};
pub use memory::MemoryStore;
pub use roster::JsonRosterStore;
