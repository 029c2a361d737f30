//! This module has things for managing the domain,
//! which really means retrieving values based on world coordinates.
//! The grid owns the cell values, the boundary checks decide what
//! a neighbor lookup returns once it leaves the grid,
//! and the source set tracks cells whose values are pinned.

mod bc;
mod direction;
mod gather_args;
mod grid;
mod sources;

pub use bc::*;
pub use direction::*;
pub use gather_args::*;
pub use grid::*;
pub use sources::*;
