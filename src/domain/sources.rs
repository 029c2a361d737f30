use crate::domain::Grid;
use crate::util::*;
use std::collections::TryReserveError;
use thiserror::Error;

/// A cell whose value is fixed for the whole solve.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SourcePoint {
    pub row: i32,
    pub col: i32,
    pub value: f64,
}

impl SourcePoint {
    pub fn new(row: i32, col: i32, value: f64) -> Self {
        SourcePoint { row, col, value }
    }

    pub fn coord(&self) -> Coord<2> {
        vector![self.row, self.col]
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("source ({row}, {col}) lies outside the {bounds} grid")]
pub struct OutOfBoard {
    pub row: i32,
    pub col: i32,
    pub bounds: AABB<2>,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SourceError {
    #[error(transparent)]
    OutOfBoard(#[from] OutOfBoard),

    #[error("could not allocate source index: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Pinned cells, indexed by the grid's linear index so lookups
/// during a sweep are O(1).
#[derive(Debug, Clone)]
pub struct SourceSet {
    aabb: AABB<2>,
    pinned: Vec<Option<f64>>,
    len: usize,
}

impl SourceSet {
    /// Build the set from source points. When several points target the
    /// same cell the last one wins.
    pub fn new(
        aabb: AABB<2>,
        points: &[SourcePoint],
    ) -> Result<Self, SourceError> {
        let n = aabb.buffer_size();
        let mut pinned: Vec<Option<f64>> = Vec::new();
        pinned.try_reserve_exact(n)?;
        pinned.resize(n, None);
        let mut len = 0;
        for point in points {
            let coord = point.coord();
            if !aabb.contains(&coord) {
                return Err(OutOfBoard {
                    row: point.row,
                    col: point.col,
                    bounds: aabb,
                }
                .into());
            }
            let slot = &mut pinned[aabb.coord_to_linear(&coord)];
            if slot.is_none() {
                len += 1;
            }
            *slot = Some(point.value);
        }
        Ok(SourceSet { aabb, pinned, len })
    }

    pub fn aabb(&self) -> &AABB<2> {
        &self.aabb
    }

    /// Number of distinct pinned cells.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_source(&self, row: i32, col: i32) -> bool {
        self.value_at(row, col).is_some()
    }

    pub fn value_at(&self, row: i32, col: i32) -> Option<f64> {
        self.pinned_at(&vector![row, col])
    }

    pub fn pinned_at(&self, world_coord: &Coord<2>) -> Option<f64> {
        if !self.aabb.contains(world_coord) {
            return None;
        }
        self.pinned[self.aabb.coord_to_linear(world_coord)]
    }

    #[inline]
    pub fn pinned_linear(&self, linear_index: usize) -> Option<f64> {
        self.pinned[linear_index]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord<2>, f64)> + '_ {
        self.pinned
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (self.aabb.linear_to_coord(i), v)))
    }

    /// Write every pinned value into `grid`.
    pub fn pin(&self, grid: &mut Grid<2>) {
        debug_assert_eq!(grid.aabb(), &self.aabb);
        for (value_mut, pinned) in grid.buffer_mut().iter_mut().zip(&self.pinned) {
            if let Some(v) = pinned {
                *value_mut = *v;
            }
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn lookup_test() {
        let aabb = AABB::new(matrix![0, 2; 0, 3]);
        let sources = SourceSet::new(
            aabb,
            &[SourcePoint::new(1, 1, 100.0), SourcePoint::new(2, 3, -5.0)],
        )
        .unwrap();
        assert_eq!(sources.len(), 2);
        assert!(sources.is_source(1, 1));
        assert!(sources.is_source(2, 3));
        assert!(!sources.is_source(0, 0));
        assert!(!sources.is_source(-1, 0));
        assert_eq!(sources.value_at(1, 1), Some(100.0));
        assert_eq!(sources.value_at(2, 2), None);
    }

    #[test]
    fn last_point_wins() {
        let aabb = AABB::new(matrix![0, 2; 0, 2]);
        let sources = SourceSet::new(
            aabb,
            &[
                SourcePoint::new(0, 2, 1.0),
                SourcePoint::new(0, 2, 2.0),
                SourcePoint::new(0, 2, 3.0),
            ],
        )
        .unwrap();
        assert_eq!(sources.len(), 1);
        assert_approx_eq!(f64, sources.value_at(0, 2).unwrap(), 3.0);
    }

    #[test]
    fn out_of_board() {
        let aabb = AABB::new(matrix![0, 2; 0, 2]);
        for (row, col) in [(3, 0), (0, 3), (-1, 1), (1, -1)] {
            let err =
                SourceSet::new(aabb, &[SourcePoint::new(row, col, 1.0)]).unwrap_err();
            match err {
                SourceError::OutOfBoard(e) => assert_eq!((e.row, e.col), (row, col)),
                other => panic!("unexpected error {other:?}"),
            }
        }
    }

    #[test]
    fn huge_index_reports_allocation() {
        let aabb = AABB::from_sizes(&vector![i32::MAX, i32::MAX]);
        let err = SourceSet::new(aabb, &[]).unwrap_err();
        assert!(matches!(err, SourceError::Allocation(_)));
    }

    #[test]
    fn no_points() {
        let aabb = AABB::new(matrix![0, 1; 0, 2]);
        let sources = SourceSet::new(aabb, &[]).unwrap();
        assert!(sources.is_empty());
        assert_eq!(sources.iter().count(), 0);
    }

    #[test]
    fn pin_test() {
        let aabb = AABB::new(matrix![0, 1; 0, 1]);
        let sources =
            SourceSet::new(aabb, &[SourcePoint::new(0, 1, 4.0)]).unwrap();
        let mut grid = Grid::new(aabb);
        grid.set_values(|_| 1.0);
        sources.pin(&mut grid);
        assert_eq!(grid.buffer(), &[1.0, 4.0, 1.0, 1.0]);
        let pinned: Vec<_> = sources.iter().collect();
        assert_eq!(pinned, vec![(vector![0, 1], 4.0)]);
    }
}
