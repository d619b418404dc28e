//! Error types for dutyroll.
//!
//! Every fallible engine operation returns the single `thiserror`-derived
//! [`Error`] enum defined here.  The `ensure!` macro gives precondition
//! checks a uniform shape.

use thiserror::Error;

/// The top-level error type used throughout dutyroll.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The target month contains workdays but the roster has no entries.
    ///
    /// `month` is 0-based (0 = January).
    #[error("roster is empty but {year}-{:02} contains workdays", .month + 1)]
    EmptyRoster {
        /// Target year.
        year: u16,
        /// Target month, 0-based.
        month: u8,
    },

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (out of range, malformed, ...).
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A collaborator (roster, anchor or holiday source) failed to deliver
    /// its snapshot.
    #[error("provider error: {0}")]
    Provider(String),
}

/// Shorthand `Result` type used throughout dutyroll.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with `Error::Precondition` when a condition does not hold.
///
/// # Example
/// ```
/// use dr_core::{ensure, errors::Error};
/// fn month_index(m: u8) -> dr_core::errors::Result<u8> {
///     ensure!(m < 12, "month {m} out of range [0, 11]");
///     Ok(m)
/// }
/// assert!(month_index(3).is_ok());
/// assert!(month_index(12).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
