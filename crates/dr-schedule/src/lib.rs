//! # dr-schedule
//!
//! Rotation of a roster over workdays, and generation of monthly duty
//! schedules.
//!
//! The engine is a pure function of roster, anchor and holiday snapshots:
//! nothing is cached between calls and no day-by-day assignment is ever
//! stored.  Any month can be reconstructed on demand.
//!
//! ```
//! use dr_schedule::{generate, NoHolidays, Roster, ScheduleAnchor, ScheduleSnapshot};
//! use dr_time::{Date, HolidaySet};
//!
//! let roster = Roster::from_names(["A", "B", "C"]).unwrap();
//! let monday = Date::from_ymd(2024, 1, 1).unwrap();
//! let snapshot = ScheduleSnapshot::new(roster, ScheduleAnchor::new(monday, "A"));
//!
//! let january = generate(2024, 0, &HolidaySet::new(), &snapshot, &NoHolidays).unwrap();
//! let week: Vec<_> = january[..5].iter().map(|e| e.employee.as_deref()).collect();
//! assert_eq!(week, [Some("A"), Some("B"), Some("C"), Some("A"), Some("B")]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `ScheduleAnchor` — rotation start date and employee.
pub mod anchor;

/// `ScheduleEntry` — one generated day.
pub mod entry;

/// Month generation.
pub mod generator;

/// Collaborator traits for roster, anchor and holidays.
pub mod provider;

/// `Roster` — ordered, unique employees.
pub mod roster;

/// Workday ordinal → employee.
pub mod rotation;

/// `ScheduleService` — generation over live collaborators.
pub mod service;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use anchor::ScheduleAnchor;
pub use entry::ScheduleEntry;
pub use generator::{generate, ScheduleSnapshot};
pub use provider::{AnchorSource, HolidayProvider, NoHolidays, RosterSource, YearlyHolidays};
pub use roster::Roster;
pub use rotation::{resolve, EmptyRoster, Rotation};
pub use service::ScheduleService;
