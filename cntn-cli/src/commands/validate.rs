//! Validate command implementation

use anyhow::{Context, Result};
use clap::Args;
use cntn_core::UnitTable;
use std::fs;
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Configuration file or standalone unit table to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

/// What kind of file was validated
#[derive(Debug)]
enum Checked {
    Config(CliConfig, UnitTable),
    Units(UnitTable),
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match self.check() {
            Ok(checked) => {
                println!("✓ Configuration is valid!");
                let units = match &checked {
                    Checked::Config(config, units) => {
                        let conversion = &config.conversion;
                        println!("  Numbering type: {}", conversion.numbering_type);
                        println!(
                            "  Flags: big={} traditional={} alt_zero={} alt_two={}",
                            conversion.big,
                            conversion.traditional,
                            conversion.alt_zero,
                            conversion.alt_two
                        );
                        println!(
                            "  Placement: use_zeros={} use_units={}",
                            conversion.use_zeros, conversion.use_units
                        );
                        units
                    }
                    Checked::Units(units) => units,
                };
                println!("  Unit symbols: {}", units.len());
                for (symbol, unit) in units.iter() {
                    println!("    {symbol} ({:?}) -> {}", unit.role, unit.reading);
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }

    /// Load the file as a unit table or as a full configuration
    fn check(&self) -> Result<Checked> {
        let content = fs::read_to_string(&self.config)
            .with_context(|| format!("Failed to read {}", self.config.display()))?;
        let table: toml::Table =
            toml::from_str(&content).map_err(|e| CliError::ConfigError(e.to_string()))?;

        if table.contains_key("pre_units") || table.contains_key("post_units") {
            let units = UnitTable::from_toml_str(&content).map_err(CliError::from)?;
            Ok(Checked::Units(units))
        } else {
            let config = CliConfig::from_toml_str(&content)?;
            let units = config.unit_table()?;
            Ok(Checked::Config(config, units))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn validate(content: &str) -> Result<()> {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();

        ValidateArgs {
            config: temp_file.path().to_path_buf(),
        }
        .execute()
    }

    #[test]
    fn test_validate_config() {
        let toml_content = r#"
[conversion]
numbering_type = "high"

[units.post_units]
MM = "毫米"
"#;
        assert!(validate(toml_content).is_ok());
    }

    #[test]
    fn test_validate_unit_table() {
        assert!(validate("[post_units]\nML = \"毫升\"\n").is_ok());
    }

    #[test]
    fn test_validate_invalid_numbering_type() {
        let error = validate("[conversion]\nnumbering_type = \"ultra\"\n").unwrap_err();
        assert!(error.to_string().contains("Validation failed"));
    }

    #[test]
    fn test_validate_conflicting_units() {
        let toml_content = r#"
[pre_units]
X = "一"

[post_units]
X = "二"
"#;
        assert!(validate(toml_content).is_err());
    }

    #[test]
    fn test_validate_malformed_toml() {
        assert!(validate("[conversion\n").is_err());
    }
}
