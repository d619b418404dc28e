//! # dr-core
//!
//! Core error definitions shared across the dutyroll workspace.
//!
//! This crate provides the foundational building blocks used by every other
//! crate – the error hierarchy, the `Result` alias, the `ensure!` macro, and
//! small string parsing helpers for calendar dates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
