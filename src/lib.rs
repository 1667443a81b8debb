//! In-place quarter-turn rotation for square integer grids.
//!
//! # Design
//!
//! Rotations are composed from two reflection passes that swap cells
//! pairwise, so no second grid is ever allocated: a clockwise turn is an
//! anti-diagonal reflection followed by a vertical flip, a counter-clockwise
//! turn a main-diagonal transpose followed by the same flip. The only
//! scratch storage is the temporary inside each swap.
//!
//! Squareness is checked once, when a [`Grid`] is constructed; rotation
//! itself is infallible.
//!
//! # Example
//!
//! ```
//! use quarter_turn::{Grid, rotate_clockwise};
//!
//! let mut grid = Grid::from_rows(&[
//!     vec![5, 1, 4],
//!     vec![9, 16, 12],
//!     vec![2, 8, 9],
//! ])?;
//!
//! rotate_clockwise(&mut grid);
//! assert_eq!(grid.row(0), &[2, 9, 5]);
//! assert_eq!(grid.row(1), &[8, 16, 1]);
//! assert_eq!(grid.row(2), &[9, 12, 4]);
//! # Ok::<(), quarter_turn::GridError>(())
//! ```

#[doc(hidden)]
pub mod bench_utils;
mod grid;
mod op_rotate_in_place;

pub use crate::grid::{Cell, Grid, GridError};
pub use crate::op_rotate_in_place::{
    OpRotateInPlace, RotateDirection, rotate_clockwise, rotate_counter_clockwise,
};
