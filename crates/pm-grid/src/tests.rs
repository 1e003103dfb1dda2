//! Unit tests for pm-grid.
//!
//! All fixtures are literal coordinates.

#[cfg(test)]
mod cell {
    use pm_core::Point;
    use crate::{CellKey, NEIGHBOR_OFFSETS};

    #[test]
    fn positive_coordinates() {
        assert_eq!(CellKey::of(Point::new(0.0, 0.0), 50.0), CellKey::new(0, 0));
        assert_eq!(CellKey::of(Point::new(49.9, 50.0), 50.0), CellKey::new(0, 1));
        assert_eq!(CellKey::of(Point::new(1000.0, 120.0), 50.0), CellKey::new(20, 2));
    }

    #[test]
    fn negative_coordinates_floor_not_truncate() {
        assert_eq!(CellKey::of(Point::new(-0.5, -49.0), 50.0), CellKey::new(-1, -1));
        assert_eq!(CellKey::of(Point::new(-50.0, -50.1), 50.0), CellKey::new(-1, -2));
    }

    #[test]
    fn neighborhood_order() {
        let keys: Vec<_> = CellKey::new(3, -2).neighborhood().collect();
        assert_eq!(keys.len(), 9);
        assert_eq!(keys[0], CellKey::new(2, -3));
        assert_eq!(keys[1], CellKey::new(2, -2));
        assert_eq!(keys[4], CellKey::new(3, -2));
        assert_eq!(keys[8], CellKey::new(4, -1));
        for (key, (i, j)) in keys.iter().zip(NEIGHBOR_OFFSETS) {
            assert_eq!(*key, CellKey::new(3 + i, -2 + j));
        }
    }

    #[test]
    fn saturated_key_skips_overflowing_neighbors() {
        let keys: Vec<_> = CellKey::new(i64::MAX, 0).neighborhood().collect();
        assert_eq!(keys.len(), 6);
        let mut dedup = keys.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), keys.len(), "no key visited twice");
    }

    #[test]
    fn huge_coordinates_saturate() {
        let key = CellKey::of(Point::new(1e300, -1e300), 1.0);
        assert_eq!(key, CellKey::new(i64::MAX, i64::MIN));
    }
}

#[cfg(test)]
mod index {
    use pm_core::{PmError, Point, Priority, Target};
    use crate::{CellKey, DEGENERATE_MIN_TARGETS, GridIndex};

    fn targets() -> Vec<Target> {
        vec![
            Target::new(0, 10.0, 10.0, Priority::High),
            Target::new(1, 60.0, 10.0, Priority::Low),
            Target::new(2, 20.0, 30.0, Priority::Normal),
            Target::new(3, -10.0, -10.0, Priority::High),
            Target::new(4, 40.0, 45.0, Priority::High),
        ]
    }

    #[test]
    fn empty_build() {
        let grid = GridIndex::build(&[], 50.0).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.cell_count(), 0);
        assert_eq!(grid.stats().mean_bucket, 0.0);
        assert!(grid.bucket(CellKey::new(0, 0)).is_empty());
    }

    #[test]
    fn buckets_preserve_input_order() {
        let ts = targets();
        let grid = GridIndex::build(&ts, 50.0).unwrap();
        let ids: Vec<u64> = grid.bucket(CellKey::new(0, 0)).iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![0, 2, 4]);
        assert_eq!(grid.bucket(CellKey::new(1, 0)).len(), 1);
        assert_eq!(grid.bucket(CellKey::new(-1, -1))[0].id.0, 3);
    }

    #[test]
    fn no_target_dropped_or_duplicated() {
        let ts = targets();
        let grid = GridIndex::build(&ts, 50.0).unwrap();
        let stats = grid.stats();
        assert_eq!(grid.target_count(), ts.len());
        assert_eq!(stats.cells, 3);
        assert_eq!(stats.max_bucket, 3);

        let mut all: Vec<u64> = [(0, 0), (1, 0), (-1, -1)]
            .into_iter()
            .flat_map(|(x, y)| grid.bucket(CellKey::new(x, y)).iter().map(|t| t.id.0))
            .collect();
        all.sort();
        assert_eq!(all, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn buckets_borrow_the_input() {
        let ts = targets();
        let grid = GridIndex::build(&ts, 50.0).unwrap();
        let first = grid.bucket(CellKey::new(0, 0))[0];
        assert!(std::ptr::eq(first, &ts[0]));
    }

    #[test]
    fn absent_key_is_empty_not_error() {
        let ts = targets();
        let grid = GridIndex::build(&ts, 50.0).unwrap();
        assert!(grid.bucket(CellKey::new(1_000, -1_000)).is_empty());
    }

    #[test]
    fn neighbors_cover_3x3_block() {
        let ts = targets();
        let grid = GridIndex::build(&ts, 50.0).unwrap();
        // Cell (0,0): neighbours include (-1,-1), (0,0), (1,0).
        let ids: Vec<u64> = grid.neighbors(Point::new(1.0, 1.0)).map(|t| t.id.0).collect();
        assert_eq!(ids, vec![3, 0, 2, 4, 1]);
        // Far away: nothing.
        assert_eq!(grid.neighbors(Point::new(500.0, 500.0)).count(), 0);
    }

    #[test]
    fn rejects_bad_cell_size() {
        let ts = targets();
        for s in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(GridIndex::build(&ts, s), Err(PmError::Config(_))));
        }
    }

    #[test]
    fn rejects_non_finite_target() {
        let mut ts = targets();
        ts.push(Target::new(99, f64::NAN, 0.0, Priority::High));
        assert!(matches!(
            GridIndex::build(&ts, 50.0),
            Err(PmError::InputValidation { .. })
        ));
    }

    #[test]
    fn coincident_targets_share_one_cell() {
        let ts: Vec<Target> = (0..100).map(|i| Target::new(i, 5.0, 5.0, Priority::High)).collect();
        let grid = GridIndex::build(&ts, 10.0).unwrap();
        let stats = grid.stats();
        assert_eq!(stats.cells, 1);
        assert_eq!(stats.max_bucket, 100);
        assert_eq!(stats.mean_bucket, 100.0);
    }

    fn stacked(n: usize) -> Vec<Target> {
        (0..n as u64).map(|i| Target::new(i, 5.0, 5.0, Priority::High)).collect()
    }

    #[test]
    fn degenerate_threshold() {
        let below = stacked(DEGENERATE_MIN_TARGETS - 1);
        assert!(!GridIndex::build(&below, 10.0).unwrap().stats().is_degenerate());

        let at = stacked(DEGENERATE_MIN_TARGETS);
        assert!(GridIndex::build(&at, 10.0).unwrap().stats().is_degenerate());
    }

    #[test]
    fn one_stray_target_is_not_degenerate() {
        let mut ts = stacked(DEGENERATE_MIN_TARGETS);
        ts.push(Target::new(9_999, 500.0, 500.0, Priority::Low));
        let stats = GridIndex::build(&ts, 10.0).unwrap().stats();
        assert_eq!(stats.cells, 2);
        assert!(!stats.is_degenerate());
    }

    #[test]
    fn spread_and_empty_grids_are_not_degenerate() {
        assert!(!GridIndex::build(&[], 10.0).unwrap().stats().is_degenerate());
        let ts = targets();
        assert!(!GridIndex::build(&ts, 50.0).unwrap().stats().is_degenerate());
    }
}
