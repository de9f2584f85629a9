//! Error types for evpop-viz operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in evpop-viz operations.
///
/// Only row acquisition is fallible; the aggregation functions are total
/// over any finite, well-typed record sequence and never construct one
/// of these.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed CSV input (bad structure or an ill-typed cell).
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
}
