//! Totalistic Life-like rules.

use crate::{
    cells::State,
    error::Error,
    rules::{neighbor_count, Rule},
    traits::ReadGrid,
};
use ca_rules::ParseLife;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Totalistic Life-like rules.
///
/// The default rule is Conway's Game of Life, `B3/S23`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Life {
    /// `birth[n]` is whether a dead cell with `n` living neighbors is born.
    birth: [bool; 9],
    /// `survival[n]` is whether a living cell with `n` living neighbors survives.
    survival: [bool; 9],
}

impl Life {
    /// Constructs a new rule from the `b` and `s` data.
    ///
    /// Numbers larger than 8 are ignored.
    pub fn new(b: &[u8], s: &[u8]) -> Self {
        let mut birth = [false; 9];
        let mut survival = [false; 9];
        for &n in b.iter().filter(|&&n| n <= 8) {
            birth[n as usize] = true;
        }
        for &n in s.iter().filter(|&&n| n <= 8) {
            survival[n as usize] = true;
        }
        Life { birth, survival }
    }

    /// Conway's Game of Life.
    pub fn conway() -> Self {
        Life::new(&[3], &[2, 3])
    }

    /// Whether a dead cell with `count` living neighbors is born.
    pub fn is_birth(&self, count: u8) -> bool {
        self.birth.get(count as usize).copied().unwrap_or(false)
    }

    /// Whether a living cell with `count` living neighbors survives.
    pub fn is_survival(&self, count: u8) -> bool {
        self.survival.get(count as usize).copied().unwrap_or(false)
    }
}

impl Default for Life {
    fn default() -> Self {
        Life::conway()
    }
}

impl ParseLife for Life {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        Self::new(&b, &s)
    }
}

impl FromStr for Life {
    type Err = Error;
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(<Life as ParseLife>::parse_rule(input)?)
    }
}

/// Displays the rule in `B/S` notation.
impl Display for Life {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for n in (0..=8).filter(|&n| self.birth[n]) {
            write!(f, "{}", n)?;
        }
        write!(f, "/S")?;
        for n in (0..=8).filter(|&n| self.survival[n]) {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

impl Rule for Life {
    #[inline]
    fn next_state<G: ReadGrid + ?Sized>(&self, grid: &G, row: usize, col: usize) -> State {
        let count = neighbor_count(grid, row, col);
        let state = grid.get(row, col);
        if state.is_alive() {
            State::from(self.is_survival(count))
        } else {
            State::from(self.is_birth(count))
        }
    }
}
