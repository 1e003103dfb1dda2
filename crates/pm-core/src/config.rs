//! Matching run configuration.

use crate::{PmError, PmResult};

/// Configuration for one matching run.
///
/// Typically built from CLI flags, or deserialised from a TOML/JSON file by
/// the application crate (feature `serde`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchConfig {
    /// Match threshold.  A pair matches iff its distance is strictly below
    /// this value.
    pub max_distance: f64,

    /// Grid cell edge length.  `None` uses `max_distance`.  Must be
    /// `>= max_distance` or the 3×3 neighbourhood scan would miss matches.
    pub cell_size: Option<f64>,

    /// Worker thread count passed to Rayon (feature `parallel`).  `None`
    /// uses the global pool.
    pub num_threads: Option<usize>,
}

impl MatchConfig {
    pub fn new(max_distance: f64) -> Self {
        Self { max_distance, cell_size: None, num_threads: None }
    }

    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = Some(cell_size);
        self
    }

    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// The cell size the grid will be built with.
    #[inline]
    pub fn effective_cell_size(&self) -> f64 {
        self.cell_size.unwrap_or(self.max_distance)
    }

    /// Check every field before any work begins.
    pub fn validate(&self) -> PmResult<()> {
        check_max_distance(self.max_distance)?;

        let cell_size = self.effective_cell_size();
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(PmError::Config(format!(
                "cell_size must be finite and > 0, got {cell_size}"
            )));
        }
        if cell_size < self.max_distance {
            return Err(PmError::Config(format!(
                "cell_size {cell_size} is smaller than max_distance {}; \
                 the 3x3 neighbourhood scan would miss matches",
                self.max_distance
            )));
        }
        if self.num_threads == Some(0) {
            return Err(PmError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}

/// `max_distance` must be a finite, strictly positive number.
pub fn check_max_distance(max_distance: f64) -> PmResult<()> {
    if max_distance.is_finite() && max_distance > 0.0 {
        Ok(())
    } else {
        Err(PmError::Config(format!(
            "max_distance must be finite and > 0, got {max_distance}"
        )))
    }
}
