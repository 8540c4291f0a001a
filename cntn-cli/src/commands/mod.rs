//! CLI command implementations

use anyhow::Result;
use clap::{Parser, Subcommand};
use cntn_core::NumberingType;

pub mod cn2num;
pub mod generate_config;
pub mod normalize;
pub mod num2cn;
pub mod validate;

/// Chinese numeral conversion and text normalization
#[derive(Debug, Parser)]
#[command(name = "cntn", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert an Arabic numeral to Chinese
    Num2cn(num2cn::Num2CnArgs),

    /// Convert a Chinese numeral to its value
    Cn2num(cn2num::Cn2NumArgs),

    /// Rewrite numbers in text as spoken Chinese
    Normalize(normalize::NormalizeArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration or unit file
    Validate(validate::ValidateArgs),
}

impl Cli {
    /// Initialize logging and run the selected command
    pub fn run(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        match &self.command {
            Commands::Num2cn(args) => args.execute(),
            Commands::Cn2num(args) => args.execute(),
            Commands::Normalize(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A second initialization (tests running several commands) is not an error
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

/// Clap value parser for `low`, `mid` and `high`
pub(crate) fn parse_numbering(value: &str) -> Result<NumberingType, String> {
    value.parse().map_err(|e: cntn_core::Error| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_num2cn() {
        let cli = Cli::try_parse_from(["cntn", "num2cn", "1161", "--big"]).unwrap();
        match cli.command {
            Commands::Num2cn(args) => {
                assert_eq!(args.value, "1161");
                assert!(args.big);
                assert_eq!(args.numbering, NumberingType::Low);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_negative_value_is_not_a_flag() {
        let cli = Cli::try_parse_from(["cntn", "num2cn", "-15"]).unwrap();
        assert!(matches!(cli.command, Commands::Num2cn(ref args) if args.value == "-15"));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["cntn", "cn2num", "十五", "-vv", "-q"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Cn2num(ref args) if args.numbering == NumberingType::Mid
        ));
    }

    #[test]
    fn test_invalid_numbering_is_rejected() {
        let result = Cli::try_parse_from(["cntn", "cn2num", "十五", "--numbering", "ultra"]);
        let error = result.unwrap_err().to_string();
        assert!(error.contains("numbering type should be one of"));
    }

    #[test]
    fn test_parse_numbering() {
        assert_eq!(parse_numbering("high"), Ok(NumberingType::High));
        assert!(parse_numbering("").is_err());
    }
}
