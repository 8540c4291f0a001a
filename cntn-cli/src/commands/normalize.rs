//! Normalize command implementation

use anyhow::{Context, Result};
use clap::Args;
use cntn_core::{Normalizer, UnitTable};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::InputSource;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::width::to_half_width;

/// Arguments for the normalize command
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Input file (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Extra unit table merged over the built-in and configured units
    #[arg(short, long, value_name = "FILE")]
    pub units: Option<PathBuf>,

    /// Fold full-width characters to half-width first
    #[arg(long)]
    pub half_width: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Normalized text, one line per input line
    Text,
    /// One JSON object per input line with the tokenizer runs
    Json,
}

impl NormalizeArgs {
    /// Execute the normalize command
    pub fn execute(&self) -> Result<()> {
        let normalizer = self.build_normalizer()?;
        let text = InputSource::from_arg(self.input.as_deref()).read_text()?;

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
            )),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };
        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        let mut line_count = 0usize;
        for line in text.lines() {
            let line = if self.half_width {
                to_half_width(line)
            } else {
                line.to_string()
            };
            let runs = normalizer.tokenize(&line);
            let output = normalizer.render_runs(&runs).map_err(CliError::from)?;
            formatter.format_line(&line, &output, &runs)?;
            line_count += 1;
        }
        formatter.finish()?;

        log::info!("Normalized {line_count} lines");
        Ok(())
    }

    /// Normalizer from the config file and unit file flags
    pub fn build_normalizer(&self) -> Result<Normalizer> {
        let config = CliConfig::load(self.config.as_deref())?;
        let mut units = config.unit_table()?;
        if let Some(path) = &self.units {
            let extra = UnitTable::from_file(path)
                .map_err(CliError::from)
                .with_context(|| format!("Invalid unit file: {}", path.display()))?;
            units.extend(extra);
        }

        log::debug!("Conversion config: {:?}", config.conversion);
        log::debug!("Unit table has {} symbols", units.len());
        Ok(Normalizer::with_units(config.conversion, units))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args() -> NormalizeArgs {
        NormalizeArgs {
            input: None,
            output: None,
            config: None,
            units: None,
            half_width: false,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn test_execute_file_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "2018年\n跑了3km\n").unwrap();

        let args = NormalizeArgs {
            input: Some(input),
            output: Some(output.clone()),
            ..args()
        };
        args.execute().unwrap();

        assert_eq!(fs::read_to_string(output).unwrap(), "二零一八年\n跑了三公里\n");
    }

    #[test]
    fn test_half_width_and_unit_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let units = temp_dir.path().join("units.toml");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "５ｍｌ").unwrap();
        fs::write(&units, "[post_units]\nML = \"毫升\"\n").unwrap();

        let args = NormalizeArgs {
            input: Some(input),
            output: Some(output.clone()),
            units: Some(units),
            half_width: true,
            ..args()
        };
        args.execute().unwrap();

        assert_eq!(fs::read_to_string(output).unwrap(), "五毫升\n");
    }

    #[test]
    fn test_build_normalizer_with_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("cntn.toml");
        fs::write(&config, "[conversion]\ntraditional = true\n").unwrap();

        let args = NormalizeArgs {
            config: Some(config),
            ..args()
        };
        let normalizer = args.build_normalizer().unwrap();
        assert_eq!(normalizer.normalize("1.5").unwrap(), "一點五");
    }

    #[test]
    fn test_bad_unit_file() {
        let temp_dir = TempDir::new().unwrap();
        let units = temp_dir.path().join("units.toml");
        fs::write(&units, "[post_units]\nML = \"\"\n").unwrap();

        let args = NormalizeArgs {
            units: Some(units),
            ..args()
        };
        let error = args.build_normalizer().unwrap_err();
        assert!(error.to_string().contains("Invalid unit file"));
    }
}
