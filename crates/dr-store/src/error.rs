//! Error types for the dr-store crate.

use std::path::PathBuf;

/// Error type for all fallible store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A file did not contain the expected JSON document.
    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// A stored date is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// The anchor names an employee that is not on the roster.
    #[error("unknown employee: {0:?}")]
    UnknownEmployee(String),

    /// A holiday file for `year` contains a record dated more than one year
    /// away from it.
    #[error("holiday file for {year} contains a record dated {date}")]
    YearMismatch {
        /// Year of the file.
        year: u16,
        /// Offending record date.
        date: dr_time::Date,
    },

    /// A domain rule rejected the update (blank name, unknown name, ...).
    #[error(transparent)]
    Domain(#[from] dr_core::Error),
}

/// Shorthand `Result` type for store operations.
pub type Result<T, E = StoreError> = std::result::Result<T, E>;

impl From<StoreError> for dr_core::Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Domain(inner) => inner,
            other => dr_core::Error::Provider(other.to_string()),
        }
    }
}
