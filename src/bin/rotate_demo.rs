//! Demonstration driver: rotates a fixed 3x3 grid and prints the result.

use quarter_turn::{Grid, GridError, rotate_clockwise};

fn main() -> Result<(), GridError> {
    let mut grid = Grid::from_rows(&[vec![5, 1, 4], vec![9, 16, 12], vec![2, 8, 9]])?;

    rotate_clockwise(&mut grid);

    println!("Rotation of a matrix by 90 degree in clockwise direction without using any extra space is:");
    print!("{grid}");
    Ok(())
}
