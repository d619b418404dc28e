//! Miscellaneous utilities.

/// String parsers for calendar dates.
pub mod data_parsers;

pub use data_parsers::parse_iso_date;
