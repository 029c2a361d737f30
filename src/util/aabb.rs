use crate::util::indexing::*;
use crate::util::*;

/// Axis Aligned Bounding Box (AABB) for coordinate types.
/// Each instance is inclusive of both corners.
/// This class is responsible for the indexing operations
/// where we map between a linear buffer and coordinates.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub struct AABB<const DIMENSION: usize> {
    pub bounds: Bounds<DIMENSION>,
}

impl<const GRID_DIMENSION: usize> std::fmt::Display for AABB<GRID_DIMENSION> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        let sizes = self.exclusive_bounds();
        for d in 0..GRID_DIMENSION {
            if d > 0 {
                write!(f, "x")?;
            }
            write!(f, "{}", sizes[d])?;
        }
        Ok(())
    }
}

impl<const DIMENSION: usize> AABB<DIMENSION> {
    /// Create AABB from raw bounds.
    #[inline]
    pub fn new(bounds: Bounds<DIMENSION>) -> Self {
        AABB { bounds }
    }

    /// Create AABB from corners.
    pub fn from_mm(min: Coord<DIMENSION>, max: Coord<DIMENSION>) -> Self {
        let result = AABB {
            bounds: Bounds::from_columns(&[min, max]),
        };
        debug_assert!(result.check_validity());
        result
    }

    /// Create an origin-anchored AABB holding `sizes[d]` cells per dimension.
    pub fn from_sizes(sizes: &Coord<DIMENSION>) -> Self {
        Self::from_mm(Coord::zero(), sizes.add_scalar(-1))
    }

    /// Moving min to the origin, returns the exclusive size in each direction
    /// i.e. [0, 9]  would have exclusive size of 10.
    pub fn exclusive_bounds(&self) -> Coord<DIMENSION> {
        (self.bounds.column(1) - self.bounds.column(0)).add_scalar(1)
    }

    /// Return the number of coordinates contained in the instance.
    #[inline]
    pub fn buffer_size(&self) -> usize {
        real_buffer_size(&self.exclusive_bounds())
    }

    /// Return the linear index for a coord in the instance
    pub fn coord_to_linear(&self, coord: &Coord<DIMENSION>) -> usize {
        coord_to_linear(&(coord - self.min()), &self.exclusive_bounds())
    }

    /// Return the coordinate in the instance for a given linear index.
    pub fn linear_to_coord(&self, index: usize) -> Coord<DIMENSION> {
        linear_to_coord(index, &self.exclusive_bounds()) + self.min()
    }

    /// Check whether the instance contains a coordinate.
    pub fn contains(&self, coord: &Coord<DIMENSION>) -> bool {
        for d in 0..DIMENSION {
            if coord[d] < self.bounds[(d, 0)] || coord[d] > self.bounds[(d, 1)]
            {
                return false;
            }
        }
        true
    }

    /// Find the coord within bound assuming periodic boundary conditions.
    /// Uses a floored modulo, so coords any number of boxes away
    /// (in either direction) fold back into the box.
    pub fn periodic_coord(&self, coord: &Coord<DIMENSION>) -> Coord<DIMENSION> {
        let sizes = self.exclusive_bounds();
        let mut result = Coord::zero();
        for d in 0..DIMENSION {
            let min = self.bounds[(d, 0)];
            result[d] = min + wrap_index(coord[d] - min, sizes[d]);
        }
        result
    }

    /// Return min corner.
    pub fn min(&self) -> Coord<DIMENSION> {
        self.bounds.column(0).into()
    }

    /// Check that max >= min
    pub fn check_validity(&self) -> bool {
        for d in 0..DIMENSION {
            if self.bounds[(d, 0)] > self.bounds[(d, 1)] {
                return false;
            }
        }
        true
    }

    /// Return iterator over contained coords
    /// in linear ordering.
    pub fn coord_iter(&self) -> impl Iterator<Item = Coord<DIMENSION>> + '_ {
        (0..self.buffer_size()).map(|i| self.linear_to_coord(i))
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn buffer_size_test() {
        {
            let a = AABB::new(matrix![0, 5]);
            assert_eq!(a.buffer_size(), 6);
        }

        {
            let dimensions = AABB::new(matrix![1, 6; 1, 8; 1, 10]);
            assert_eq!(dimensions.buffer_size(), 6 * 8 * 10);
        }

        {
            let a = AABB::from_sizes(&vector![3, 4]);
            assert_eq!(a, AABB::new(matrix![0, 2; 0, 3]));
            assert_eq!(a.buffer_size(), 12);
        }
    }

    #[test]
    fn in_box_comp_test() {
        {
            let bound = AABB::new(matrix![0, 9]);
            let c = vector![8];
            let li = bound.coord_to_linear(&c);
            assert_eq!(c, bound.linear_to_coord(li));
        }

        {
            let bound = AABB::new(matrix![0, 9; 0, 4]);
            let c = vector![9, 3];
            let li = bound.coord_to_linear(&c);
            assert_eq!(li, 9 * 5 + 3);
            assert_eq!(c, bound.linear_to_coord(li));
        }
    }

    #[test]
    fn periodic_coord_test() {
        {
            let index = vector![0, 0];
            let bound = AABB::new(matrix![0, 10; 0, 10]);
            assert_eq!(bound.periodic_coord(&index), vector![0, 0]);
        }

        {
            let index = vector![-1, 0];
            let bound = AABB::new(matrix![0, 10; 0, 10]);
            assert_eq!(bound.periodic_coord(&index), vector![10, 0]);
        }

        {
            let index = vector![0, 11];
            let bound = AABB::new(matrix![0, 10; 0, 10]);
            assert_eq!(bound.periodic_coord(&index), vector![0, 0]);
        }

        {
            let index = vector![0, -1, -4, -19, 134];
            let bound =
                AABB::new(matrix![0, 100; 0, 100;0, 100; 0, 100;0, 100]);
            assert_eq!(
                bound.periodic_coord(&index),
                vector![0, 100, 97, 82, 33]
            );
        }

        // More than one box away still folds back
        {
            let bound = AABB::new(matrix![0, 2; 0, 2]);
            assert_eq!(bound.periodic_coord(&vector![-7, 8]), vector![2, 2]);
        }
    }

    #[test]
    fn contains_test() {
        let a = AABB::new(matrix![0, 2; 0, 3]);
        assert!(a.contains(&vector![0, 0]));
        assert!(a.contains(&vector![2, 3]));
        assert!(!a.contains(&vector![3, 0]));
        assert!(!a.contains(&vector![0, -1]));
    }

    #[test]
    fn check_validity_test() {
        {
            let a = AABB::new(matrix![0, 9]);
            assert!(a.check_validity());
        }

        {
            let a = AABB::new(matrix![9, 0]);
            assert!(!a.check_validity());
        }
    }

    #[test]
    fn coord_iter_test() {
        let a = AABB::new(matrix![0, 1; 0, 1]);
        let coords: Vec<Coord<2>> = a.coord_iter().collect();
        assert_eq!(
            coords,
            vec![vector![0, 0], vector![0, 1], vector![1, 0], vector![1, 1]]
        );
    }

    #[test]
    fn display_test() {
        let a = AABB::new(matrix![0, 2; 0, 4]);
        assert_eq!(format!("{a}"), "3x5");
    }
}
