//! Cn2num command implementation

use anyhow::Result;
use clap::Args;
use cntn_core::{chinese_to_number, NumberingType};

use crate::error::CliError;

/// Arguments for the cn2num command
#[derive(Debug, Args)]
pub struct Cn2NumArgs {
    /// Chinese numeral, e.g. 一万零四百零三点八零五
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Numbering system for units above 万
    #[arg(short, long, default_value = "mid", value_parser = super::parse_numbering)]
    pub numbering: NumberingType,
}

impl Cn2NumArgs {
    /// Execute the cn2num command
    pub fn execute(&self) -> Result<()> {
        log::info!("Parsing {} as {}", self.text, self.numbering);

        let value = chinese_to_number(self.text.trim(), self.numbering).map_err(CliError::from)?;
        println!("{value}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_success() {
        let args = Cn2NumArgs {
            text: "一千一百六十一".to_string(),
            numbering: NumberingType::Mid,
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_execute_unrecognized_symbol() {
        let args = Cn2NumArgs {
            text: "一百块".to_string(),
            numbering: NumberingType::Mid,
        };
        let error = args.execute().unwrap_err();
        assert!(error.to_string().contains('块'));
    }
}
