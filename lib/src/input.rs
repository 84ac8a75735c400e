//! Reading the initial grid from a text dump.
//!
//! The dump starts with a line holding the grid size and the number of
//! generations, followed by `size` lines of at least `size` characters:
//!
//! ```plaintext
//! 5 2
//! .....
//! .....
//! .xxx.
//! .....
//! .....
//! ```
//!
//! Anything after the two numbers on the first line is ignored,
//! and so is anything after the first `size` characters of a grid line.

use crate::{cells::State, error::Error, grid::Grid};
use std::io::BufRead;

/// The contents of a dump.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dump {
    /// Number of rows, which is also the number of columns.
    pub size: usize,

    /// Number of generations to compute.
    pub steps: u64,

    /// The initial grid.
    pub grid: Grid,
}

fn malformed<S: ToString>(line: usize, reason: S) -> Error {
    Error::MalformedInput {
        line,
        reason: reason.to_string(),
    }
}

fn read_line<R: BufRead>(reader: &mut R, line: usize, buf: &mut String) -> Result<bool, Error> {
    buf.clear();
    let read = reader
        .read_line(buf)
        .map_err(|e| malformed(line, e))?;
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(read > 0)
}

/// Parses the first line of a dump into `(size, steps)`.
fn parse_header(header: &str) -> Result<(usize, u64), Error> {
    let mut numbers = header.split_whitespace();
    let size: i64 = numbers
        .next()
        .ok_or_else(|| malformed(1, "missing grid size"))?
        .parse()
        .map_err(|e| malformed(1, format!("invalid grid size: {}", e)))?;
    let steps: i64 = numbers
        .next()
        .ok_or_else(|| malformed(1, "missing number of generations"))?
        .parse()
        .map_err(|e| malformed(1, format!("invalid number of generations: {}", e)))?;
    if size <= 0 {
        return Err(Error::NonPositiveSize);
    }
    if steps < 0 {
        return Err(Error::NegativeSteps);
    }
    let size = usize::try_from(size).map_err(|_| Error::Allocation(usize::MAX))?;
    Ok((size, steps as u64))
}

/// Reads a dump. A character equal to `alive` is a living cell,
/// any other character is a dead cell.
///
/// Fails if there are fewer than `size` grid lines,
/// or if a grid line is shorter than `size` characters.
pub fn read_dump<R: BufRead>(mut reader: R, alive: char) -> Result<Dump, Error> {
    let mut buf = String::new();
    if !read_line(&mut reader, 1, &mut buf)? {
        return Err(malformed(1, "empty input"));
    }
    let (size, steps) = parse_header(&buf)?;

    // The grid is allocated only once every line has been read.
    let mut rows = Vec::new();
    for row in 0..size {
        let line = row + 2;
        if !read_line(&mut reader, line, &mut buf)? {
            return Err(malformed(
                line,
                format!("expected {} grid lines, found {}", size, row),
            ));
        }
        let cells: Vec<State> = buf
            .chars()
            .take(size)
            .map(|c| State::from(c == alive))
            .collect();
        if cells.len() < size {
            return Err(malformed(
                line,
                format!("expected {} characters, found {}", size, cells.len()),
            ));
        }
        rows.push(cells);
    }
    let grid = Grid::from_rows(rows)?;

    Ok(Dump { size, steps, grid })
}
