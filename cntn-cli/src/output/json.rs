//! JSON lines output formatter

use super::OutputFormatter;
use anyhow::Result;
use cntn_core::Run;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs one object per input line
pub struct JsonFormatter<W: Write> {
    writer: W,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct LineRecord<'a> {
    /// Line as read, after optional width folding
    pub input: &'a str,
    /// Normalized line
    pub output: &'a str,
    /// Runs the tokenizer produced for the line
    pub runs: &'a [Run],
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, input: &str, output: &str, runs: &[Run]) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &LineRecord { input, output, runs })?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
