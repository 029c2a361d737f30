use crate::domain::*;
use crate::util::*;
use std::collections::TryReserveError;

/// Owned, row-major buffer of cell values covering an AABB.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<const GRID_DIMENSION: usize> {
    aabb: AABB<GRID_DIMENSION>,
    buffer: Vec<f64>,
}

impl<const GRID_DIMENSION: usize> Grid<GRID_DIMENSION> {
    /// Zero-filled grid over `aabb`.
    pub fn new(aabb: AABB<GRID_DIMENSION>) -> Self {
        Grid {
            aabb,
            buffer: vec![0.0; aabb.buffer_size()],
        }
    }

    /// Like `new`, but reports allocation failure instead of aborting.
    pub fn try_new(aabb: AABB<GRID_DIMENSION>) -> Result<Self, TryReserveError> {
        let n = aabb.buffer_size();
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(n)?;
        buffer.resize(n, 0.0);
        Ok(Grid { aabb, buffer })
    }

    pub fn aabb(&self) -> &AABB<GRID_DIMENSION> {
        &self.aabb
    }

    pub fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut [f64] {
        &mut self.buffer
    }

    #[track_caller]
    pub fn view(&self, world_coord: &Coord<GRID_DIMENSION>) -> f64 {
        debug_assert!(
            self.aabb.contains(world_coord),
            "{:?} does not contain {:?}",
            self.aabb,
            world_coord
        );
        let index = self.aabb.coord_to_linear(world_coord);
        self.buffer[index]
    }

    #[track_caller]
    pub fn set(&mut self, world_coord: &Coord<GRID_DIMENSION>, value: f64) {
        debug_assert!(self.aabb.contains(world_coord));
        let index = self.aabb.coord_to_linear(world_coord);
        self.buffer[index] = value;
    }

    pub fn set_values<F: FnMut(Coord<GRID_DIMENSION>) -> f64>(
        &mut self,
        mut f: F,
    ) {
        let aabb = self.aabb;
        for (i, value_mut) in self.buffer.iter_mut().enumerate() {
            *value_mut = f(aabb.linear_to_coord(i));
        }
    }

    /// Total energy: the sum of every cell value.
    pub fn sum(&self) -> f64 {
        self.buffer.iter().sum()
    }

    pub fn coord_iter(
        &self,
    ) -> impl Iterator<Item = (Coord<GRID_DIMENSION>, f64)> + '_ {
        self.buffer
            .iter()
            .enumerate()
            .map(|(i, v)| (self.aabb.linear_to_coord(i), *v))
    }
}

impl Grid<2> {
    pub fn rows(&self) -> usize {
        self.aabb.exclusive_bounds()[0] as usize
    }

    pub fn cols(&self) -> usize {
        self.aabb.exclusive_bounds()[1] as usize
    }

    /// Row `r` as a slice, for reporting.
    pub fn row(&self, r: usize) -> &[f64] {
        let cols = self.cols();
        &self.buffer[r * cols..(r + 1) * cols]
    }

    /// Value of the neighbor of `world_coord` in `direction`.
    /// The boundary check decides the value of neighbors outside the grid.
    pub fn neighbor<BC: BCCheck<2>>(
        &self,
        bc: &BC,
        direction: Direction,
        world_coord: &Coord<2>,
    ) -> f64 {
        let n_world_coord = world_coord + direction.offset();
        bc.check(&n_world_coord, self)
            .unwrap_or_else(|| self.view(&n_world_coord))
    }
}
