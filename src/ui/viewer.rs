// Viewer - Prints state values, one line per display call

use crate::command::state::ReadState;
use std::io::{self, Stdout, Write};

/// Displays any readable state
///
/// Only ever sees states through `ReadState`, so it cannot change them.
pub struct Viewer<W: Write> {
    out: W,
}

impl Viewer<Stdout> {
    /// Viewer printing to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Viewer<W> {
    /// Viewer writing to an arbitrary sink
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the current value followed by a newline
    pub fn display(&mut self, state: &dyn ReadState) -> io::Result<()> {
        writeln!(self.out, "{}", state.value())
    }

    /// Get the underlying writer back
    pub fn into_inner(self) -> W {
        self.out
    }
}
