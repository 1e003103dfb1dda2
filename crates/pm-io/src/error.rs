//! Error types for pm-io.

use thiserror::Error;

use pm_core::PmError;

/// Errors that can occur when reading fixtures or writing matches.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// A row is malformed: missing field, bad id, bad coordinate, unknown
    /// priority.
    #[error(transparent)]
    Invalid(#[from] PmError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, FixtureError>`.
pub type FixtureResult<T> = Result<T, FixtureError>;
