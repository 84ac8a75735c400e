//! Cellular automata rules.
//!
//! For the notations of rule strings, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

mod life;

use crate::{cells::State, traits::ReadGrid};
pub use life::Life;

/// A cellular automaton rule.
///
/// The rule is shared by all workers, so it must be [`Sync`].
pub trait Rule: Sync {
    /// Computes the state of the cell at `(row, col)` in the next generation.
    ///
    /// Must not have side effects.
    fn next_state<G: ReadGrid + ?Sized>(&self, grid: &G, row: usize, col: usize) -> State;
}

/// Counts the living cells among the neighbors of `(row, col)`.
///
/// The neighborhood is clamped: positions outside the grid are not counted,
/// so a corner cell has at most 3 neighbors and an edge cell at most 5.
pub fn neighbor_count<G: ReadGrid + ?Sized>(grid: &G, row: usize, col: usize) -> u8 {
    let size = grid.size();
    let rows = row.saturating_sub(1)..=(row + 1).min(size - 1);
    let cols = col.saturating_sub(1)..=(col + 1).min(size - 1);
    let mut count = 0;
    for r in rows {
        for c in cols.clone() {
            if (r, c) != (row, col) && grid.get(r, c).is_alive() {
                count += 1;
            }
        }
    }
    count
}
