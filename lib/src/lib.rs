//! Conway's Game of Life on a fixed square grid, stepped by a fixed pool
//! of threads.
//!
//! The rows of the grid are split into contiguous ranges, one per worker.
//! Every generation, each worker writes its rows of the next grid from the
//! current grid, then all workers meet at a barrier; the first worker swaps
//! the two grids, and all workers meet again before the next generation.
//!
//! Cells outside the grid are not counted as neighbors: edges do not wrap.
//!
//! ```
//! use lifestep_lib::{simulate, Grid};
//!
//! let grid = Grid::from_plaintext("....\n.oo.\n.oo.\n....", 'o')?;
//! assert_eq!(simulate(&grid, 10, 2)?, grid);
//! # Ok::<(), lifestep_lib::Error>(())
//! ```

mod barrier;
mod buffer;
mod cells;
mod config;
mod engine;
mod error;
mod grid;
pub mod input;
mod partition;
pub mod rules;
mod simulation;
mod traits;

pub use barrier::GenerationBarrier;
pub use buffer::{BufferPair, SharedGrid};
pub use cells::{State, ALIVE, DEAD};
pub use config::Config;
pub use engine::{Observer, COORDINATOR};
pub use error::Error;
pub use grid::Grid;
pub use partition::{clamp_workers, partition, rounded_division, RowRange};
pub use simulation::{simulate, Simulation};
pub use traits::ReadGrid;
