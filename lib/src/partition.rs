//! Static assignment of rows to workers.

use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A half-open interval `[start, end)` of rows assigned to one worker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RowRange {
    /// The first row, inclusive.
    pub start: usize,
    /// The last row, exclusive.
    pub end: usize,
}

impl RowRange {
    /// Creates a new row range.
    pub fn new(start: usize, end: usize) -> Self {
        RowRange { start, end }
    }

    /// The rows in this range.
    pub fn rows(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of rows in this range.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the range contains no row.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Divides `a` by `b`, rounding to the nearest integer.
///
/// A remainder smaller than `b / 2` (integer division) rounds down,
/// any other nonzero remainder rounds up.
///
/// A zero remainder never rounds up. This only differs from the plain
/// "remainder `>= b / 2` rounds up" rule when `b == 1`, where that rule
/// would give `a + 1`; here the result is `a`.
///
/// ```
/// use lifestep_lib::rounded_division;
///
/// assert_eq!(rounded_division(5, 2), 3);
/// assert_eq!(rounded_division(4, 2), 2);
/// assert_eq!(rounded_division(7, 1), 7);
/// ```
///
/// # Panics
///
/// Panics if `b` is zero.
pub fn rounded_division(a: usize, b: usize) -> usize {
    let result = a / b;
    let remainder = a % b;
    if remainder == 0 || remainder < b / 2 {
        result
    } else {
        result + 1
    }
}

/// Clamps a requested number of workers to `[1, size]`.
pub fn clamp_workers(size: usize, workers: usize) -> usize {
    workers.clamp(1, size.max(1))
}

/// Assigns contiguous rows of a `size × size` grid to `workers` workers.
///
/// Every worker but the last gets `rounded_division(size, workers)` rows,
/// and the last one gets the rest. If that would leave nothing for the last
/// worker, the rounding falls back to the floor.
///
/// The number of workers is first clamped to `[1, size]`.
/// The ranges are disjoint, in the order of worker indices, and cover `0..size`.
pub fn partition(size: usize, workers: usize) -> Vec<RowRange> {
    if size == 0 {
        return Vec::new();
    }
    let workers = clamp_workers(size, workers);
    let mut base = rounded_division(size, workers);
    if base * (workers - 1) >= size {
        base = size / workers;
    }

    let mut ranges = Vec::with_capacity(workers);
    for index in 0..workers - 1 {
        ranges.push(RowRange::new(index * base, (index + 1) * base));
    }
    ranges.push(RowRange::new(base * (workers - 1), size));
    ranges
}
