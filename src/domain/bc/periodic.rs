use crate::domain::bc::BCCheck;
use crate::domain::Grid;
use crate::util::*;

/// Coordinates outside the bound wrap around to the opposite side.
pub struct PeriodicCheck<const GRID_DIMENSION: usize> {
    aabb: AABB<GRID_DIMENSION>,
}

impl<const GRID_DIMENSION: usize> PeriodicCheck<GRID_DIMENSION> {
    pub fn new(aabb: AABB<GRID_DIMENSION>) -> Self {
        PeriodicCheck { aabb }
    }
}

impl<const GRID_DIMENSION: usize> BCCheck<GRID_DIMENSION>
    for PeriodicCheck<GRID_DIMENSION>
{
    fn check(
        &self,
        world_coord: &Coord<GRID_DIMENSION>,
        grid: &Grid<GRID_DIMENSION>,
    ) -> Option<f64> {
        debug_assert_eq!(&self.aabb, grid.aabb());
        let p_coord = self.aabb.periodic_coord(world_coord);
        if p_coord != *world_coord {
            return Some(grid.view(&p_coord));
        }
        None
    }
}
