mod constant;
mod periodic;

pub use constant::*;
pub use periodic::*;

use crate::domain::Grid;
use crate::util::*;

/// Boundary condition check.
/// Returns `Some(value)` when the boundary decides the value at
/// `world_coord`, `None` when the grid's own value should be used.
pub trait BCCheck<const GRID_DIMENSION: usize> {
    fn check(
        &self,
        world_coord: &Coord<GRID_DIMENSION>,
        grid: &Grid<GRID_DIMENSION>,
    ) -> Option<f64>;
}
