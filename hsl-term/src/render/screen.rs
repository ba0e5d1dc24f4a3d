//! Output targets for rendered frames.

use std::io::{self, Write};

/// Clears the terminal and homes the cursor.
const CLEAR: &str = "\x1b[2J\x1b[1;1H";

/// Somewhere rendered frames are shown.
pub trait Screen {
    /// Remove the previous frame.
    fn clear(&mut self) -> io::Result<()>;

    /// Show a frame.
    fn show(&mut self, frame: &str) -> io::Result<()>;
}

/// A screen backed by a writer, normally stdout.
pub struct TerminalScreen<W> {
    out: W,
}

impl TerminalScreen<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn clear(&mut self) -> io::Result<()> {
        self.out.write_all(CLEAR.as_bytes())?;
        self.out.flush()
    }

    fn show(&mut self, frame: &str) -> io::Result<()> {
        writeln!(self.out, "{frame}")?;
        self.out.flush()
    }
}
