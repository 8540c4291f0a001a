//! Output formatting module

use anyhow::Result;
use cntn_core::Run;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Write one normalized line
    fn format_line(&mut self, input: &str, output: &str, runs: &[Run]) -> Result<()>;

    /// Flush buffered output
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
