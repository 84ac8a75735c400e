//! The simulation driver.

use crate::{
    barrier::GenerationBarrier,
    buffer::{BufferPair, SharedGrid},
    engine::{Context, Observer, Worker, COORDINATOR},
    error::Error,
    grid::Grid,
    partition::{clamp_workers, partition, RowRange},
    rules::{Life, Rule},
    traits::ReadGrid,
};
use log::{debug, info, warn};
use std::{
    panic,
    sync::atomic::{AtomicU64, Ordering::Relaxed},
    thread,
    time::Instant,
};

/// A run of the cellular automaton over a fixed number of generations,
/// split across a fixed pool of worker threads.
///
/// ```
/// use lifestep_lib::{Grid, ReadGrid, Simulation};
///
/// let grid = Grid::from_plaintext(".....\n.....\n.ooo.\n.....\n.....", 'o')?;
/// let mut simulation = Simulation::new(&grid, 1, 3)?;
/// simulation.run();
/// assert_eq!(
///     simulation.current().plaintext('o', '.'),
///     ".....\n..o..\n..o..\n..o..\n.....\n"
/// );
/// # Ok::<(), lifestep_lib::Error>(())
/// ```
#[derive(Debug)]
pub struct Simulation<R: Rule = Life> {
    /// The rule of the cellular automaton.
    rule: R,

    /// The current and the next grid.
    buffers: BufferPair,

    /// Rows assigned to each worker. Its length is the number of workers.
    ranges: Vec<RowRange>,

    /// Number of generations to compute.
    steps: u64,

    /// Number of generations computed so far.
    generation: AtomicU64,

    /// Whether the run has completed.
    finished: bool,
}

impl Simulation<Life> {
    /// Sets up a run of Conway's Game of Life.
    ///
    /// See [`with_rule`](Self::with_rule).
    pub fn new(grid: &Grid, steps: u64, workers: usize) -> Result<Self, Error> {
        Simulation::with_rule(grid, steps, workers, Life::default())
    }
}

impl<R: Rule> Simulation<R> {
    /// Sets up a run of `steps` generations starting from `grid`.
    ///
    /// The number of workers is clamped to `[1, size]`.
    pub fn with_rule(grid: &Grid, steps: u64, workers: usize, rule: R) -> Result<Self, Error> {
        let size = grid.size();
        let clamped = clamp_workers(size, workers);
        if clamped != workers {
            warn!(
                "{} workers requested for {} rows, using {} workers",
                workers, size, clamped
            );
        }

        let buffers = BufferPair::new(grid)?;
        let ranges = partition(size, clamped);
        info!(
            "{} generations on a {}x{} grid with {} workers",
            steps, size, size, clamped
        );
        debug!("row ranges: {:?}", ranges);

        Ok(Simulation {
            rule,
            buffers,
            ranges,
            steps,
            generation: AtomicU64::new(0),
            finished: false,
        })
    }

    /// Number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.buffers.size()
    }

    /// Number of generations the run computes.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Number of workers after clamping.
    pub fn workers(&self) -> usize {
        self.ranges.len()
    }

    /// Rows assigned to each worker, in the order of worker indices.
    pub fn ranges(&self) -> &[RowRange] {
        &self.ranges
    }

    /// The rule of the cellular automaton.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Number of generations computed so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Relaxed)
    }

    /// Whether the run has completed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The grid of the current generation.
    ///
    /// After the run it holds the result.
    pub fn current(&self) -> &SharedGrid {
        self.buffers.current()
    }

    /// Copies the grid of the current generation.
    pub fn grid(&self) -> Result<Grid, Error> {
        self.buffers.snapshot()
    }

    /// Runs all generations.
    ///
    /// Does nothing if the run has already completed.
    pub fn run(&mut self) {
        self.run_inner(None);
    }

    /// Runs all generations, calling `observer` with each new generation.
    ///
    /// The observer runs on the coordinator thread while the other workers
    /// wait at the barrier.
    ///
    /// Does nothing if the run has already completed.
    pub fn run_with<F>(&mut self, mut observer: F)
    where
        F: FnMut(u64, &SharedGrid) + Send,
    {
        self.run_inner(Some(&mut observer));
    }

    fn run_inner(&mut self, observer: Option<&mut Observer<'_>>) {
        if self.finished {
            return;
        }

        let barrier = GenerationBarrier::new(self.ranges.len());
        let ctx = Context {
            buffers: &self.buffers,
            barrier: &barrier,
            rule: &self.rule,
            generation: &self.generation,
        };
        let steps = self.steps;
        let ranges = &self.ranges;
        let start = Instant::now();

        thread::scope(|scope| {
            let ctx = &ctx;
            let mut observer = observer;
            let handles: Vec<_> = ranges
                .iter()
                .enumerate()
                .map(|(index, &rows)| {
                    let worker = Worker { index, rows, steps };
                    let observer = if index == COORDINATOR {
                        observer.take()
                    } else {
                        None
                    };
                    scope.spawn(move || worker.run(ctx, observer))
                })
                .collect();
            for handle in handles {
                if let Err(e) = handle.join() {
                    panic::resume_unwind(e);
                }
            }
        });

        self.finished = true;
        debug!(
            "{} generations in {:?}, {} living cells",
            self.generation(),
            start.elapsed(),
            self.buffers.current().population()
        );
    }

    /// Consumes the simulation and returns the grid of the current generation.
    pub fn into_grid(self) -> Result<Grid, Error> {
        self.buffers.snapshot()
    }
}

/// Runs `steps` generations of Conway's Game of Life on `grid`
/// with `workers` workers, and returns the final grid.
pub fn simulate(grid: &Grid, steps: u64, workers: usize) -> Result<Grid, Error> {
    let mut simulation = Simulation::new(grid, steps, workers)?;
    simulation.run();
    simulation.into_grid()
}
