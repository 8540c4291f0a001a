//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use cntn_core::Run;
use std::io::Write;

/// Plain text formatter - outputs one normalized line per input line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_line(&mut self, _input: &str, output: &str, _runs: &[Run]) -> Result<()> {
        writeln!(self.writer, "{output}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
