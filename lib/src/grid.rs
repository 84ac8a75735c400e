//! The grid.

use crate::{
    cells::{State, ALIVE, DEAD},
    error::Error,
    traits::ReadGrid,
};
use rand::Rng;
use std::slice::Chunks;

/// A square grid of cells, stored row by row.
///
/// The size never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Number of rows, which is also the number of columns.
    size: usize,

    /// All the cells, `size * size` of them.
    cells: Box<[State]>,
}

/// Reserves `size * size` cells, each initialized by `f`.
///
/// Fails instead of aborting when the memory cannot be acquired.
pub(crate) fn alloc_cells<T, F: FnMut() -> T>(size: usize, f: F) -> Result<Vec<T>, Error> {
    if size == 0 {
        return Err(Error::NonPositiveSize);
    }
    let len = size.checked_mul(size).ok_or(Error::Allocation(size))?;
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| Error::Allocation(size))?;
    cells.resize_with(len, f);
    Ok(cells)
}

impl Grid {
    /// Creates a new grid with all cells dead.
    pub fn new(size: usize) -> Result<Self, Error> {
        let cells = alloc_cells(size, || DEAD)?;
        Ok(Grid {
            size,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Creates a grid from its rows.
    ///
    /// The number of rows decides the size; every row must have
    /// exactly that many cells.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = State>,
    {
        let rows: Vec<Vec<State>> = rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        let mut grid = Grid::new(rows.len())?;
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != grid.size {
                return Err(Error::DimensionMismatch {
                    expected: grid.size,
                    found: row.len(),
                });
            }
            grid.cells[r * grid.size..(r + 1) * grid.size].copy_from_slice(&row);
        }
        Ok(grid)
    }

    /// Creates a grid from lines of text.
    ///
    /// A character equal to `alive` is a living cell, any other character
    /// is a dead cell.
    pub fn from_plaintext(text: &str, alive: char) -> Result<Self, Error> {
        Grid::from_rows(
            text.lines()
                .map(|line| line.chars().map(move |c| State::from(c == alive))),
        )
    }

    /// Creates a random soup, each cell being alive with probability `density`.
    pub fn random<G: Rng + ?Sized>(size: usize, density: f64, rng: &mut G) -> Result<Self, Error> {
        let density = density.clamp(0.0, 1.0);
        let mut grid = Grid::new(size)?;
        for cell in grid.cells.iter_mut() {
            *cell = State::from(rng.gen_bool(density));
        }
        Ok(grid)
    }

    /// Number of rows, which is also the number of columns.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the state of a cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..size`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> State {
        assert!(col < self.size);
        self.cells[row * self.size + col]
    }

    /// Sets the state of a cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..size`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, state: State) {
        assert!(col < self.size);
        self.cells[row * self.size + col] = state;
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> Chunks<'_, State> {
        self.cells.chunks(self.size)
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&state| state == ALIVE).count()
    }

    /// Whether every cell is dead.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&state| state == DEAD)
    }
}

impl ReadGrid for Grid {
    #[inline]
    fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> State {
        Grid::get(self, row, col)
    }

    fn population(&self) -> usize {
        Grid::population(self)
    }
}
