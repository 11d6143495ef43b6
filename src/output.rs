use std::io::{self, Write};

use crate::error::AppResult;
use crate::shell::ShellCommand;

/// Writes to stdout. Whatever lands here is evaluated by the calling shell,
/// so diagnostics go through `tracing` on stderr instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn emit(&self, command: &ShellCommand) -> AppResult<()> {
        self.line(&command.to_string())
    }

    pub fn line(&self, line: &str) -> AppResult<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")?;
        stdout.flush()?;
        Ok(())
    }
}
