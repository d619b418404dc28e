//! # dutyroll
//!
//! A workday duty rotation engine.  Given an ordered roster, an anchor
//! (start date and start employee) and annual holiday calendars, it works out
//! who is on duty on any day of any month, without storing past schedules.
//!
//! This crate is a **façade** that re-exports the workspace crates and adds
//! the file layout configuration used by the `dutyroll` binary.
//!
//! ```rust
//! use dutyroll::schedule::{NoHolidays, Roster, ScheduleAnchor, ScheduleService};
//! use dutyroll::store::MemoryStore;
//! use dutyroll::time::Date;
//!
//! let store = MemoryStore::with(
//!     Roster::from_names(["Ana", "Ben"]).unwrap(),
//!     ScheduleAnchor::new(Date::from_ymd(2024, 7, 1).unwrap(), "Ben"),
//! );
//! let service = ScheduleService::new(&store, &store, NoHolidays);
//! let july = service.generate_schedule(2024, 6).unwrap();
//! assert_eq!(july[0].employee.as_deref(), Some("Ben"));
//! assert_eq!(july[1].employee.as_deref(), Some("Ana"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type, result alias and parsing helpers.
pub use dr_core as core;

/// Dates, holiday sets, day classification and workday counting.
pub use dr_time as time;

/// Roster, anchor, rotation and month generation.
pub use dr_schedule as schedule;

/// JSON file and in-memory stores.
pub use dr_store as store;

/// `dutyroll.toml` settings.
pub mod config;

pub use config::DutyrollConfig;
