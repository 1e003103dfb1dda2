//! Planar coordinate type and the proximity predicate.
//!
//! Coordinates are `f64` in an arbitrary Cartesian plane (no geodesy).
//! Negative values are ordinary coordinates.

/// A point in the plane.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `true` if neither coordinate is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Squared Euclidean distance.  Avoids the `sqrt` on hot paths.
    #[inline]
    pub fn distance_sq(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Axis-aligned bounding-box check — much cheaper than `distance` for
    /// quick rejection.  Inclusive: a point exactly `half_extent` away on an
    /// axis is inside.
    #[inline]
    pub fn within_bbox(self, center: Point, half_extent: f64) -> bool {
        (self.x - center.x).abs() <= half_extent
            && (self.y - center.y).abs() <= half_extent
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The match predicate shared by the grid matcher and the brute-force
/// oracle.
///
/// Returns the exact distance iff it is strictly below `max_distance`.  The
/// squared test runs first; the rooted test guards the rare case where
/// `max_distance²` rounds up past a squared distance whose root still equals
/// `max_distance`.  Both callers go through here so they can never disagree
/// on a boundary pair.
#[inline]
pub fn proximity(a: Point, b: Point, max_distance: f64) -> Option<f64> {
    let dist_sq = a.distance_sq(b);
    if dist_sq < max_distance * max_distance {
        let dist = dist_sq.sqrt();
        if dist < max_distance {
            return Some(dist);
        }
    }
    None
}
