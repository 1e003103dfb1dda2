//! Matcher error type.
//!
//! Every failure is raised before any index is built or any match is
//! emitted, so callers receive either a complete result or an error.  Sub-
//! crates with extra failure modes (CSV parsing, file I/O) wrap `PmError` as
//! one variant of their own enum.

use thiserror::Error;

/// The top-level error type for `pm-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum PmError {
    /// An id or coordinate is missing, non-numeric, or non-finite.
    #[error("invalid input {what}: {reason}")]
    InputValidation { what: String, reason: String },

    /// `max_distance`, `cell_size`, or the thread count is unusable.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PmError {
    /// Shorthand for building an [`PmError::InputValidation`].
    pub fn invalid(what: impl Into<String>, reason: impl Into<String>) -> Self {
        PmError::InputValidation { what: what.into(), reason: reason.into() }
    }
}

/// Shorthand result type for all `pm-*` crates.
pub type PmResult<T> = Result<T, PmError>;
