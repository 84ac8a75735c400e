//! Printing every generation during a run.

use lifestep_lib::ReadGrid;
use std::io::{self, Write};

/// Prints each generation it is given.
///
/// The first write error is kept and every later generation is skipped;
/// [`finish`](Self::finish) returns that error.
pub(crate) struct Trace<W: Write> {
    out: W,
    alive: char,
    dead: char,
    error: Option<io::Error>,
}

impl<W: Write> Trace<W> {
    pub(crate) fn new(out: W, alive: char, dead: char) -> Self {
        Trace {
            out,
            alive,
            dead,
            error: None,
        }
    }

    /// Prints one generation, unless an earlier write has failed.
    pub(crate) fn generation<G: ReadGrid + ?Sized>(&mut self, generation: u64, grid: &G) {
        if self.error.is_some() {
            return;
        }
        let result = writeln!(self.out, "{} ----------", generation)
            .and_then(|_| write!(self.out, "{}", grid.plaintext(self.alive, self.dead)))
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            self.error = Some(e);
        }
    }

    /// Returns the first write error, if any.
    pub(crate) fn finish(self) -> io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifestep_lib::Grid;
    use std::error::Error;

    /// Accepts `limit` writes, then fails like a closed pipe.
    struct ClosedAfter {
        limit: usize,
        writes: usize,
    }

    impl Write for ClosedAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            if self.writes > self.limit {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            } else {
                Ok(buf.len())
            }
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn prints_generations() -> Result<(), Box<dyn Error>> {
        let grid = Grid::from_plaintext("o.\n.o", 'o')?;
        let mut trace = Trace::new(Vec::new(), 'x', '.');
        trace.generation(1, &grid);
        trace.generation(2, &grid);
        assert_eq!(
            String::from_utf8(trace.out.clone())?,
            "1 ----------\nx.\n.x\n2 ----------\nx.\n.x\n"
        );
        trace.finish()?;
        Ok(())
    }

    #[test]
    fn keeps_first_error() -> Result<(), Box<dyn Error>> {
        let grid = Grid::from_plaintext("o.\n.o", 'o')?;
        let mut trace = Trace::new(ClosedAfter { limit: 1, writes: 0 }, 'x', '.');
        for generation in 1..=100 {
            trace.generation(generation, &grid);
        }
        let writes = trace.out.writes;
        assert!(writes <= 3, "{} writes after the pipe closed", writes);
        let error = trace.finish().err().ok_or("write error was dropped")?;
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
        Ok(())
    }
}
