use crate::domain::bc::BCCheck;
use crate::domain::Grid;
use crate::util::*;

/// Every coordinate outside the bound reads as a fixed value.
/// With `value = 0.0` this is the open boundary.
pub struct ConstantCheck<const GRID_DIMENSION: usize> {
    value: f64,
    aabb: AABB<GRID_DIMENSION>,
}

impl<const GRID_DIMENSION: usize> ConstantCheck<GRID_DIMENSION> {
    pub fn new(value: f64, aabb: AABB<GRID_DIMENSION>) -> Self {
        ConstantCheck { value, aabb }
    }
}

impl<const GRID_DIMENSION: usize> BCCheck<GRID_DIMENSION>
    for ConstantCheck<GRID_DIMENSION>
{
    fn check(
        &self,
        world_coord: &Coord<GRID_DIMENSION>,
        _grid: &Grid<GRID_DIMENSION>,
    ) -> Option<f64> {
        if self.aabb.contains(world_coord) {
            None
        } else {
            Some(self.value)
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn constant_check_test() {
        let aabb = AABB::new(matrix![0, 9]);
        let grid = Grid::new(aabb);
        let bc = ConstantCheck::new(-1.0, aabb);
        for i in 0..10 {
            assert_eq!(bc.check(&vector![i], &grid), None);
        }

        {
            let v = bc.check(&vector![-1], &grid);
            assert!(v.is_some());
            assert_approx_eq!(f64, v.unwrap(), -1.0);
        }

        {
            let v = bc.check(&vector![10], &grid);
            assert!(v.is_some());
            assert_approx_eq!(f64, v.unwrap(), -1.0);
        }
    }
}
