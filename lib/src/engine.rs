//! The per-worker stepping loop.

use crate::{
    barrier::GenerationBarrier,
    buffer::{BufferPair, SharedGrid},
    partition::RowRange,
    rules::Rule,
    traits::ReadGrid,
};
use log::trace;
use std::sync::atomic::{AtomicU64, Ordering::Relaxed};

/// Index of the worker that swaps the buffers.
pub const COORDINATOR: usize = 0;

/// Called by the coordinator after each swap, with the number of the
/// generation just computed and its grid.
pub type Observer<'o> = dyn FnMut(u64, &SharedGrid) + Send + 'o;

/// Everything the workers share during a run.
///
/// Only the coordinator mutates it, and only between the two barriers
/// of a generation.
pub(crate) struct Context<'a, R: Rule> {
    /// The current and the next grid.
    pub(crate) buffers: &'a BufferPair,

    /// Synchronizes the workers twice per generation.
    pub(crate) barrier: &'a GenerationBarrier,

    /// The rule of the cellular automaton.
    pub(crate) rule: &'a R,

    /// Number of generations computed so far.
    pub(crate) generation: &'a AtomicU64,
}

/// A worker, owning everything that is not shared.
pub(crate) struct Worker {
    /// Index of the worker. Worker [`COORDINATOR`] swaps the buffers.
    pub(crate) index: usize,

    /// The rows this worker computes for the whole run.
    pub(crate) rows: RowRange,

    /// Number of generations to compute.
    pub(crate) steps: u64,
}

impl Worker {
    /// Computes `steps` generations.
    ///
    /// Only the coordinator receives the observer.
    pub(crate) fn run<R: Rule>(self, ctx: &Context<'_, R>, mut observer: Option<&mut Observer<'_>>) {
        for _ in 0..self.steps {
            self.compute(ctx);

            ctx.barrier.compute_complete();

            if self.index == COORDINATOR {
                ctx.buffers.swap();
                let generation = ctx.generation.fetch_add(1, Relaxed) + 1;
                let current = ctx.buffers.current();
                trace!(
                    "generation {}: {} living cells",
                    generation,
                    current.population()
                );
                if let Some(observer) = observer.as_deref_mut() {
                    observer(generation, current);
                }
            }

            ctx.barrier.swap_complete();
        }
    }

    /// Writes the next state of every cell in this worker's rows.
    fn compute<R: Rule>(&self, ctx: &Context<'_, R>) {
        let current = ctx.buffers.current();
        let next = ctx.buffers.next();
        let size = current.size();
        for row in self.rows.rows() {
            for col in 0..size {
                next.set(row, col, ctx.rule.next_state(current, row, col));
            }
        }
    }
}
