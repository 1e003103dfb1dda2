//! Grid cell keys.
//!
//! A point `(x, y)` lives in cell `(floor(x / s), floor(y / s))` for cell
//! size `s`.  Floor, not truncation: `-0.5` maps to cell `-1`, not `0`, so
//! cells on both sides of an axis are the same width.

use pm_core::Point;

/// Integer coordinates of one grid cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct CellKey {
    pub cx: i64,
    pub cy: i64,
}

/// Neighbour offsets in scan order: outer `i` (x) from -1 to 1, inner `j`
/// (y) from -1 to 1.  Match output order depends on this order.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 9] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1), ( 0, 0), ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

impl CellKey {
    #[inline]
    pub fn new(cx: i64, cy: i64) -> Self {
        Self { cx, cy }
    }

    /// The cell containing `pos` for the given (positive) `cell_size`.
    ///
    /// The float → int cast saturates, so astronomically large coordinates
    /// collapse into the outermost cells instead of wrapping.
    #[inline]
    pub fn of(pos: Point, cell_size: f64) -> Self {
        Self {
            cx: (pos.x / cell_size).floor() as i64,
            cy: (pos.y / cell_size).floor() as i64,
        }
    }

    /// The 3×3 block of cells centred on `self`, in [`NEIGHBOR_OFFSETS`]
    /// order.
    ///
    /// Neighbours that would overflow `i64` are skipped rather than clamped,
    /// so a saturated key is never visited twice.
    pub fn neighborhood(self) -> impl Iterator<Item = CellKey> {
        NEIGHBOR_OFFSETS.into_iter().filter_map(move |(i, j)| {
            Some(CellKey {
                cx: self.cx.checked_add(i)?,
                cy: self.cy.checked_add(j)?,
            })
        })
    }
}

impl std::fmt::Display for CellKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.cx, self.cy)
    }
}
