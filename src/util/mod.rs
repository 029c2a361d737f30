pub use nalgebra::{matrix, vector};
pub use num_traits::Zero;

mod aabb;
pub mod indexing;
pub use aabb::*;

/// Integer coordinate in grid space, one component per dimension.
/// For the 2-D grid, index 0 is the row and index 1 is the column.
pub type Coord<const GRID_DIMENSION: usize> =
    nalgebra::SVector<i32, { GRID_DIMENSION }>;

/// Inclusive (min, max) pair per dimension, stored as columns.
pub type Bounds<const GRID_DIMENSION: usize> =
    nalgebra::SMatrix<i32, { GRID_DIMENSION }, 2>;
