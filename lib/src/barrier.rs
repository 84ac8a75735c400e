//! The two-phase generation barrier.

use std::sync::Barrier;

/// A rendezvous point for all workers, used twice per generation.
///
/// Each wait blocks until every worker has arrived, then releases them all
/// and resets. There is no timeout: a worker that never arrives blocks
/// the others forever.
#[derive(Debug)]
pub struct GenerationBarrier {
    barrier: Barrier,
    parties: usize,
}

impl GenerationBarrier {
    /// Creates a barrier for `parties` workers.
    pub fn new(parties: usize) -> Self {
        GenerationBarrier {
            barrier: Barrier::new(parties),
            parties,
        }
    }

    /// Number of workers that must arrive before any is released.
    pub fn parties(&self) -> usize {
        self.parties
    }

    /// Waits until every worker has finished writing the next grid.
    #[inline]
    pub fn compute_complete(&self) {
        self.barrier.wait();
    }

    /// Waits until the coordinator has swapped the buffers.
    #[inline]
    pub fn swap_complete(&self) {
        self.barrier.wait();
    }
}
