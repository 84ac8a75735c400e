//! All kinds of errors in this crate.

use ca_rules::ParseRuleError;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Grid size should be positive.
    NonPositiveSize,
    /// Number of generations should not be negative.
    NegativeSteps,
    /// Unable to allocate a grid of size {0}.
    Allocation(usize),
    /// Malformed input at line {line}: {reason}.
    MalformedInput {
        /// 1-indexed line number in the input.
        line: usize,
        /// What is wrong with that line.
        reason: String,
    },
    /// Invalid rule: {0:?}.
    ParseRule(#[from] ParseRuleError),
    /// Expected {expected} rows or columns, found {found}.
    DimensionMismatch {
        /// The grid size.
        expected: usize,
        /// The actual length.
        found: usize,
    },
}
