//! Shared helpers for benchmark drivers.

use crate::{Cell, Grid};

pub const BENCH_SIDES: [usize; 5] = [64, 256, 1024, 2048, 4096];

pub fn create_test_grid(side: usize) -> Grid {
    let mut grid = Grid::new(side);
    for y in 0..side {
        let row = grid.row_mut(y);
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = (y * side + x) as Cell;
        }
    }
    grid
}
