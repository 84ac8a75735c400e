//! A trait for read-only grids.
use crate::{
    cells::State,
    error::Error,
    grid::Grid,
};

/// A read-only view of a square grid.
///
/// So that the rule and the renderer work on both the owned [`Grid`]
/// and the buffers shared between workers.
pub trait ReadGrid {
    /// Number of rows, which is also the number of columns.
    fn size(&self) -> usize;

    /// Gets the state of a cell.
    ///
    /// Both `row` and `col` must be in `0..size`.
    fn get(&self, row: usize, col: usize) -> State;

    /// Number of living cells.
    fn population(&self) -> usize {
        let size = self.size();
        (0..size)
            .flat_map(|row| (0..size).map(move |col| (row, col)))
            .filter(|&(row, col)| self.get(row, col).is_alive())
            .count()
    }

    /// Displays the whole grid in a
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext)-like format.
    ///
    /// * **Living** cells are represented by `alive`;
    /// * **Dead** cells are represented by `dead`;
    /// * Each row is ended with a newline.
    fn plaintext(&self, alive: char, dead: char) -> String {
        let size = self.size();
        let mut str = String::with_capacity(size * (size + 1));
        for row in 0..size {
            for col in 0..size {
                str.push(if self.get(row, col).is_alive() {
                    alive
                } else {
                    dead
                });
            }
            str.push('\n');
        }
        str
    }

    /// Copies the grid into an owned [`Grid`].
    fn to_grid(&self) -> Result<Grid, Error> {
        let mut grid = Grid::new(self.size())?;
        for row in 0..self.size() {
            for col in 0..self.size() {
                grid.set(row, col, self.get(row, col));
            }
        }
        Ok(grid)
    }
}
