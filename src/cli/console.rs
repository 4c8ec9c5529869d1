//! Line-oriented console used by the command handlers
//!
//! Handlers never touch stdin/stdout directly; they go through a
//! [`Console`] so a session can be driven from any reader and writer.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use thiserror::Error;

use super::output::Output;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Input closed")]
    InputClosed,
}

/// Returns true if the error chain ends in closed input
pub fn is_input_closed(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<ConsoleError>(), Some(ConsoleError::InputClosed))
}

/// Paired input and output for an interactive session
pub struct Console<R, W: Write> {
    input: R,
    pub output: Output<W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: Output<W>) -> Self {
        Self { input, output }
    }

    /// Shows `label` and reads one line, without its line ending
    ///
    /// Fails with [`ConsoleError::InputClosed`] at end of input.
    pub fn prompt(&mut self, label: &str) -> Result<String> {
        self.output.prompt(label).context("Failed to write prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Err(ConsoleError::InputClosed.into());
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }

    /// Waits for the user to press Enter
    pub fn pause(&mut self) -> Result<()> {
        self.prompt("\nPress Enter to continue...").map(|_| ())
    }

    /// Consumes the console, returning the output writer
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }
}
