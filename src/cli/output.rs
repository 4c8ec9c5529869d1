//! Output formatting for the interactive session

use std::fmt::Display;
use std::io::{self, Write};

/// Output helper for consistent formatting
///
/// User-facing text goes to the wrapped writer; verbose diagnostics go to
/// stderr so they never mix with the session transcript.
pub struct Output<W: Write> {
    out: W,
    verbose: bool,
}

impl<W: Write> Output<W> {
    pub fn new(out: W, verbose: bool) -> Self {
        Self { out, verbose }
    }

    /// Prints a plain line
    pub fn line(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", message)
    }

    /// Prints a blank line
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Prints a success message
    pub fn success(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.out, "✅ {}", message)
    }

    /// Prints an error message
    pub fn error(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.out, "❌ {}", message)
    }

    /// Prints a prompt without a line break and flushes it
    pub fn prompt(&mut self, label: &str) -> io::Result<()> {
        write!(self.out, "{}", label)?;
        self.out.flush()
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }

    /// Consumes the helper, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}
