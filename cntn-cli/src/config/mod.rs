//! Configuration module

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cntn_core::normalizer::UnitTableConfig;
use cntn_core::{ConversionConfig, UnitTable};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Conversion flags
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Unit symbols added to the built-in table
    #[serde(default)]
    pub units: UnitTableConfig,
}

impl CliConfig {
    /// Parse a configuration from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Built-in units with this configuration's units merged over them
    pub fn unit_table(&self) -> Result<UnitTable> {
        let mut table = UnitTable::builtin().map_err(CliError::from)?;
        table.extend(UnitTable::from_config(&self.units).map_err(CliError::from)?);
        Ok(table)
    }
}
