//! Square grid representation with row-major cell storage.
//!
//! # Memory Layout
//!
//! Cells are stored in a flat `Cell` buffer in row-major order:
//!
//! ```text
//! data[y * side + x]
//! ```
//!
//! Squareness is enforced at construction, so every `Grid` value holds
//! exactly `side * side` cells and the rotation operators need no bounds
//! or shape checks of their own.

use std::fmt;

use thiserror::Error;

/// 32-bit signed grid element.
pub type Cell = i32;

/// Construction errors for [`Grid`].
///
/// Rotation itself is infallible; the only way to hand the rotator a
/// malformed grid is rejected here, at construction time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// Flat buffer length does not equal `side * side`.
    #[error("buffer of {len} cells does not form a {side}x{side} grid")]
    DimensionMismatch { side: usize, len: usize },

    /// A row literal whose width differs from the number of rows.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A square N×N grid of integers stored as a flat array in row-major order.
///
/// # Memory Layout
///
/// Cell data is stored contiguously: `data[y * side + x]`. This layout is
/// cache-friendly for row-wise traversal and lets in-place transformations
/// swap cells through a single flat slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    data: Vec<Cell>,
}

impl Grid {
    /// Creates a zero-filled grid with the given side length.
    pub fn new(side: usize) -> Self {
        Self {
            side,
            data: vec![0; side * side],
        }
    }

    /// Creates a grid from row vectors, checking that they form a square.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Result<Self, GridError> {
        let side = rows.len();
        let mut data = Vec::with_capacity(side * side);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != side {
                return Err(GridError::RaggedRows {
                    row: y,
                    expected: side,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { side, data })
    }

    /// Creates a grid from a flat row-major buffer, checking its length.
    pub fn from_flat(side: usize, data: Vec<Cell>) -> Result<Self, GridError> {
        if data.len() != side * side {
            return Err(GridError::DimensionMismatch {
                side,
                len: data.len(),
            });
        }
        Ok(Self { side, data })
    }

    /// Returns the side length in cells.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns true if the grid holds no cells.
    pub fn is_empty(&self) -> bool {
        self.side == 0
    }

    /// Returns the cell at (x, y).
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.data[y * self.side + x]
    }

    /// Returns a mutable reference to the cell at (x, y).
    pub fn cell_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        &mut self.data[y * self.side + x]
    }

    /// Returns the cells of row `y`.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.side;
        &self.data[start..start + self.side]
    }

    /// Returns mutable cells of row `y`.
    pub fn row_mut(&mut self, y: usize) -> &mut [Cell] {
        let start = y * self.side;
        &mut self.data[start..start + self.side]
    }

    /// Returns the flat row-major cell buffer.
    pub fn as_slice(&self) -> &[Cell] {
        &self.data
    }

    /// Returns the mutable flat row-major cell buffer.
    pub fn as_mut_slice(&mut self) -> &mut [Cell] {
        &mut self.data
    }

    /// Fills every cell with the given value.
    pub fn fill(&mut self, value: Cell) {
        self.data.fill(value);
    }

    /// Swaps the cells at (ax, ay) and (bx, by).
    pub(crate) fn swap_cells(&mut self, ax: usize, ay: usize, bx: usize, by: usize) {
        let a = ay * self.side + ax;
        let b = by * self.side + bx;
        self.data.swap(a, b);
    }
}

/// Prints one row per line, cells space-separated.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.side {
            for (x, cell) in self.row(y).iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
