//! Simulation configuration.

use crate::{error::Error, grid::Grid, rules::Life, simulation::Simulation};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Simulation configuration.
///
/// The simulation will be generated from this configuration and a grid.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Number of worker threads.
    ///
    /// It will be clamped to `[1, size]`.
    #[educe(Default = 1)]
    pub workers: usize,

    /// The rule string of the cellular automaton.
    #[educe(Default(expression = "String::from(\"B3/S23\")"))]
    pub rule_string: String,
}

impl Config {
    /// Sets up a new configuration with the given number of workers.
    pub fn new(workers: usize) -> Self {
        Config {
            workers,
            ..Config::default()
        }
    }

    /// Sets the number of workers.
    pub fn set_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Sets the rule string.
    pub fn set_rule_string<S: ToString>(mut self, rule_string: S) -> Self {
        self.rule_string = rule_string.to_string();
        self
    }

    /// Parses the rule string.
    pub fn rule(&self) -> Result<Life, Error> {
        self.rule_string.parse()
    }

    /// Creates a new simulation of `steps` generations from `grid`.
    /// Returns an error if the rule string is invalid.
    pub fn simulation(&self, grid: &Grid, steps: u64) -> Result<Simulation<Life>, Error> {
        Simulation::with_rule(grid, steps, self.workers, self.rule()?)
    }
}
