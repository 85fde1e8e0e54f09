//! User-facing console: progress lines and the directory-name prompt.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

pub trait Terminal {
    /// Write one line of output.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Write `label` (no newline), then read one line. End of input yields `""`.
    fn ask(&mut self, label: &str) -> io::Result<String>;
}

/// [`Terminal`] over any line reader and writer.
#[derive(Debug)]
pub struct LineTerminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineTerminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl LineTerminal<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal for LineTerminal<R, W> {
    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    fn ask(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer)
    }
}
