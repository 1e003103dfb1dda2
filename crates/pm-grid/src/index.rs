//! The build-once target grid.
//!
//! # Data layout
//!
//! A hash map from [`CellKey`] to the targets whose position falls in that
//! cell.  Only occupied cells are stored, so memory is O(M) for M targets
//! regardless of how far apart they are.  Buckets hold `&Target` borrowed
//! from the caller's slice, in the slice's order.
//!
//! # Complexity
//!
//! Build is O(M).  A 3×3 neighbourhood lookup costs 9 hash probes plus the
//! occupancy of those cells: O(1) expected when targets are spread evenly,
//! O(M) when every target shares one cell.  The grid does not control
//! density; that worst case is the accepted price of a flat hash over a
//! tree.

use tracing::{debug, warn};

use pm_core::{PmError, PmResult, Point, Target, validate_targets};

use crate::CellKey;

#[cfg(feature = "fx-hash")]
type CellMap<V> = rustc_hash::FxHashMap<CellKey, V>;

#[cfg(not(feature = "fx-hash"))]
type CellMap<V> = std::collections::HashMap<CellKey, V>;

/// Smallest target count at which a single-bucket grid counts as degenerate.
///
/// Tiny batches, and test fixtures that deliberately stack a few targets on
/// one point, share a cell without any real cost; around a thousand targets
/// every agent query scanning all of them starts to dominate the run.
pub const DEGENERATE_MIN_TARGETS: usize = 1_024;

// ── GridStats ─────────────────────────────────────────────────────────────────

/// Occupancy summary of a built grid, for reporting.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridStats {
    pub cell_size:   f64,
    /// Occupied cells.
    pub cells:       usize,
    pub targets:     usize,
    /// Largest bucket.
    pub max_bucket:  usize,
    /// `targets / cells`, or 0 for an empty grid.
    pub mean_bucket: f64,
}

impl GridStats {
    /// True when at least [`DEGENERATE_MIN_TARGETS`] targets all share one
    /// cell, so every nearby query is a linear scan.
    pub fn is_degenerate(&self) -> bool {
        self.targets >= DEGENERATE_MIN_TARGETS && self.max_bucket == self.targets
    }
}

// ── GridIndex ─────────────────────────────────────────────────────────────────

/// Sparse spatial hash over a target slice.
///
/// Immutable once built: there is no insert or remove.  Build a new index
/// for each batch.
pub struct GridIndex<'a> {
    cell_size: f64,
    cells:     CellMap<Vec<&'a Target>>,
    targets:   usize,
}

impl<'a> GridIndex<'a> {
    /// Bucket every target by its cell.
    ///
    /// Fails before allocating any bucket if `cell_size` is not a finite
    /// positive number or any target coordinate is NaN or infinite.
    pub fn build(targets: &'a [Target], cell_size: f64) -> PmResult<Self> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(PmError::Config(format!(
                "cell_size must be finite and > 0, got {cell_size}"
            )));
        }
        validate_targets(targets)?;

        let mut cells: CellMap<Vec<&'a Target>> = CellMap::default();
        for target in targets {
            cells
                .entry(CellKey::of(target.pos, cell_size))
                .or_default()
                .push(target);
        }

        let index = Self { cell_size, cells, targets: targets.len() };
        let stats = index.stats();
        debug!(
            cell_size,
            cells = stats.cells,
            targets = stats.targets,
            max_bucket = stats.max_bucket,
            "grid index built"
        );
        if stats.is_degenerate() {
            warn!(
                targets = stats.targets,
                "every target shares one grid cell; queries degrade to a linear scan"
            );
        }
        Ok(index)
    }

    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of indexed targets; always equals the input slice length.
    pub fn target_count(&self) -> usize {
        self.targets
    }

    pub fn is_empty(&self) -> bool {
        self.targets == 0
    }

    /// The cell containing `pos` under this grid's cell size.
    #[inline]
    pub fn cell_of(&self, pos: Point) -> CellKey {
        CellKey::of(pos, self.cell_size)
    }

    /// Targets in `key`, in input order.  Empty for unoccupied cells.
    #[inline]
    pub fn bucket(&self, key: CellKey) -> &[&'a Target] {
        match self.cells.get(&key) {
            Some(bucket) => bucket.as_slice(),
            None => &[],
        }
    }

    /// Every target in the 3×3 block around `pos`'s cell, in neighbourhood
    /// order then bucket order.
    pub fn neighbors(&self, pos: Point) -> impl Iterator<Item = &'a Target> + '_ {
        self.cell_of(pos)
            .neighborhood()
            .flat_map(move |key| self.bucket(key).iter().copied())
    }

    pub fn stats(&self) -> GridStats {
        let cells = self.cells.len();
        let max_bucket = self.cells.values().map(Vec::len).max().unwrap_or(0);
        let mean_bucket = if cells == 0 { 0.0 } else { self.targets as f64 / cells as f64 };
        GridStats {
            cell_size: self.cell_size,
            cells,
            targets: self.targets,
            max_bucket,
            mean_bucket,
        }
    }
}
