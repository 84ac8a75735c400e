//! Double buffering shared by all workers.

use crate::{
    cells::State,
    error::Error,
    grid::{alloc_cells, Grid},
    traits::ReadGrid,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering::Relaxed};

/// A square grid that can be read and written through a shared reference.
///
/// Every access is relaxed. Workers never touch the same cell of the same
/// grid concurrently unless all of them are reading, and the generation
/// barrier orders the writes of one generation before the reads of the next.
#[derive(Debug)]
pub struct SharedGrid {
    /// Number of rows, which is also the number of columns.
    size: usize,

    /// All the cells, row by row. `true` means alive.
    cells: Box<[AtomicBool]>,
}

impl SharedGrid {
    /// Creates a new grid with all cells dead.
    pub fn new(size: usize) -> Result<Self, Error> {
        let cells = alloc_cells(size, || AtomicBool::new(false))?;
        Ok(SharedGrid {
            size,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Creates a new grid with the same cells as `grid`.
    pub fn from_grid(grid: &Grid) -> Result<Self, Error> {
        let shared = SharedGrid::new(grid.size())?;
        for (r, row) in grid.rows().enumerate() {
            for (c, &state) in row.iter().enumerate() {
                shared.set(r, c, state);
            }
        }
        Ok(shared)
    }

    /// Sets the state of a cell.
    #[inline]
    pub fn set(&self, row: usize, col: usize, state: State) {
        assert!(col < self.size);
        self.cells[row * self.size + col].store(state.is_alive(), Relaxed);
    }
}

impl ReadGrid for SharedGrid {
    #[inline]
    fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> State {
        assert!(col < self.size);
        State::from(self.cells[row * self.size + col].load(Relaxed))
    }
}

/// Two grids, one of which is labeled as the current generation.
///
/// During a generation workers read the [`current`](Self::current) grid
/// and write their own rows of the [`next`](Self::next) grid.
/// Only the coordinator calls [`swap`](Self::swap), between two barriers.
#[derive(Debug)]
pub struct BufferPair {
    /// The two grids.
    slots: [SharedGrid; 2],

    /// Index of the current grid in `slots`. Always `0` or `1`.
    current: AtomicUsize,
}

impl BufferPair {
    /// Creates a buffer pair whose current grid is a copy of `grid`,
    /// and whose next grid is all dead.
    pub fn new(grid: &Grid) -> Result<Self, Error> {
        let current = SharedGrid::from_grid(grid)?;
        let next = SharedGrid::new(grid.size())?;
        Ok(BufferPair {
            slots: [current, next],
            current: AtomicUsize::new(0),
        })
    }

    /// Number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.slots[0].size
    }

    /// The grid of the current generation.
    #[inline]
    pub fn current(&self) -> &SharedGrid {
        &self.slots[self.current.load(Relaxed)]
    }

    /// The grid being computed.
    #[inline]
    pub fn next(&self) -> &SharedGrid {
        &self.slots[self.current.load(Relaxed) ^ 1]
    }

    /// Exchanges the labels of the two grids. No cell is copied.
    #[inline]
    pub fn swap(&self) {
        self.current.fetch_xor(1, Relaxed);
    }

    /// Copies the current grid into an owned [`Grid`].
    pub fn snapshot(&self) -> Result<Grid, Error> {
        self.current().to_grid()
    }
}
