//! In-place quarter-turn rotation via pairwise cell swaps.
//!
//! # Algorithm Overview
//!
//! Every turn is composed from two reflection passes, each of which only
//! swaps cells pairwise, so the whole rotation runs in O(1) extra space:
//!
//! - **Clockwise**: reflect across the anti-diagonal (top-right to
//!   bottom-left), then flip the row order top-to-bottom.
//! - **Counter-clockwise**: transpose across the main diagonal, then flip
//!   the row order top-to-bottom.
//! - **Half turn**: flip the row order, then reverse each row.
//!
//! Both quarter-turn compositions visit each symmetric cell pair exactly
//! once; cells on the reflection axis self-swap harmlessly. Time is O(N²)
//! for an N×N grid.

use crate::grid::Grid;

/// Direction of rotation.
///
/// - `Cw`: Clockwise rotation (top row becomes the rightmost column)
/// - `Ccw`: Counter-clockwise rotation (top row becomes the leftmost column)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RotateDirection {
    Cw,
    Ccw,
}

/// In-place rotation operator for square grids.
///
/// Configured with a direction and a number of quarter turns, then applied
/// to a [`Grid`] which is mutated in place. The turn count is normalized
/// modulo 4, so e.g. three counter-clockwise turns run as one clockwise
/// turn.
///
/// ```
/// use quarter_turn::{Grid, OpRotateInPlace, RotateDirection};
///
/// let mut grid = Grid::from_flat(2, vec![1, 2, 3, 4]).unwrap();
/// OpRotateInPlace::new(RotateDirection::Cw).apply(&mut grid);
/// assert_eq!(grid.as_slice(), &[3, 1, 4, 2]);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct OpRotateInPlace {
    direction: RotateDirection,
    quarter_turns: u32,
}

impl Default for OpRotateInPlace {
    fn default() -> Self {
        Self::new(RotateDirection::Cw)
    }
}

impl OpRotateInPlace {
    /// Creates an operator performing one quarter turn in `direction`.
    pub fn new(direction: RotateDirection) -> Self {
        Self {
            direction,
            quarter_turns: 1,
        }
    }

    pub fn set_direction(&mut self, direction: RotateDirection) -> &mut Self {
        self.direction = direction;
        self
    }

    /// Sets the number of quarter turns to perform. Normalized modulo 4.
    pub fn set_quarter_turns(&mut self, quarter_turns: u32) -> &mut Self {
        self.quarter_turns = quarter_turns % 4;
        self
    }

    /// Rotates `grid` in place.
    pub fn apply(&self, grid: &mut Grid) {
        // Fold direction into an effective clockwise turn count.
        let cw_turns = match self.direction {
            RotateDirection::Cw => self.quarter_turns % 4,
            RotateDirection::Ccw => (4 - self.quarter_turns % 4) % 4,
        };

        if grid.side() < 2 {
            return;
        }

        match cw_turns {
            0 => {}
            1 => {
                reflect_anti_diagonal(grid);
                flip_vertical(grid);
            }
            2 => {
                flip_vertical(grid);
                flip_horizontal(grid);
            }
            3 => {
                transpose(grid);
                flip_vertical(grid);
            }
            _ => unreachable!(),
        }
    }
}

/// Rotates `grid` 90 degrees clockwise in place.
///
/// After the call, `grid[y][x]` equals the old `grid[n-1-x][y]`.
pub fn rotate_clockwise(grid: &mut Grid) {
    OpRotateInPlace::new(RotateDirection::Cw).apply(grid);
}

/// Rotates `grid` 90 degrees counter-clockwise in place.
pub fn rotate_counter_clockwise(grid: &mut Grid) {
    OpRotateInPlace::new(RotateDirection::Ccw).apply(grid);
}

/// Reflects across the anti-diagonal: (x, y) <-> (n-1-y, n-1-x).
fn reflect_anti_diagonal(grid: &mut Grid) {
    let n = grid.side();
    for y in 0..n {
        // Stop at the anti-diagonal so each pair is swapped once.
        for x in 0..n - y {
            grid.swap_cells(x, y, n - 1 - y, n - 1 - x);
        }
    }
}

/// Transposes across the main diagonal: (x, y) <-> (y, x).
fn transpose(grid: &mut Grid) {
    let n = grid.side();
    for y in 0..n {
        for x in y + 1..n {
            grid.swap_cells(x, y, y, x);
        }
    }
}

/// Reverses the row order top-to-bottom.
fn flip_vertical(grid: &mut Grid) {
    let n = grid.side();
    for y in 0..n / 2 {
        for x in 0..n {
            grid.swap_cells(x, y, x, n - 1 - y);
        }
    }
}

/// Reverses each row left-to-right.
fn flip_horizontal(grid: &mut Grid) {
    for y in 0..grid.side() {
        grid.row_mut(y).reverse();
    }
}
