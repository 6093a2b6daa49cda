//! Sparse Conway's Game of Life on an unbounded grid.

pub mod enc;
pub mod pos;
pub mod universe;

pub use enc::{CoordinateList, NO_CELLS_ALIVE, PositionEncoder};
pub use pos::Cell;
pub use universe::Universe;
