//! Unit symbol table read around numbers
//!
//! The table is data: the built-in symbols come from an embedded TOML file
//! and callers may load their own or insert symbols in code.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Where a unit is read relative to its number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitRole {
    /// Read before the number (百分之 for %)
    Pre,
    /// Read after the number (厘米 for CM)
    Post,
}

/// A unit symbol's role and Chinese reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitSymbol {
    pub role: UnitRole,
    pub reading: String,
}

/// TOML schema of a unit table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitTableConfig {
    /// Symbols read before the number
    #[serde(default)]
    pub pre_units: BTreeMap<String, String>,
    /// Symbols read after the number
    #[serde(default)]
    pub post_units: BTreeMap<String, String>,
}

impl UnitTableConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<()> {
        for (symbol, reading) in self.pre_units.iter().chain(&self.post_units) {
            if symbol.trim().is_empty() {
                return Err(Error::UnitTable("empty unit symbol".to_string()));
            }
            if reading.trim().is_empty() {
                return Err(Error::UnitTable(format!("unit '{symbol}' has an empty reading")));
            }
        }

        let pre: Vec<String> = self.pre_units.keys().map(|k| k.to_uppercase()).collect();
        if let Some(both) = self
            .post_units
            .keys()
            .find(|k| pre.contains(&k.to_uppercase()))
        {
            return Err(Error::UnitTable(format!(
                "unit '{both}' is declared as both pre-unit and post-unit"
            )));
        }

        Ok(())
    }
}

/// Lookup table from uppercased surface symbol to its reading
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitTable {
    symbols: BTreeMap<String, UnitSymbol>,
}

impl UnitTable {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The embedded default table (%, CM, KM, M, KG, G)
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(include_str!("../../configs/units.toml"))
    }

    /// Parse a table from TOML
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: UnitTableConfig = toml::from_str(toml_str)
            .map_err(|e| Error::UnitTable(format!("failed to parse unit table: {e}")))?;
        Self::from_config(&config)
    }

    /// Load a table from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Build a table from its configuration
    pub fn from_config(config: &UnitTableConfig) -> Result<Self> {
        config.validate()?;

        let mut table = Self::new();
        for (symbol, reading) in &config.pre_units {
            table.insert(symbol, UnitRole::Pre, reading)?;
        }
        for (symbol, reading) in &config.post_units {
            table.insert(symbol, UnitRole::Post, reading)?;
        }
        Ok(table)
    }

    /// Add or replace a symbol
    pub fn insert(&mut self, symbol: &str, role: UnitRole, reading: &str) -> Result<()> {
        let key = symbol.trim().to_uppercase();
        if key.is_empty() {
            return Err(Error::UnitTable("empty unit symbol".to_string()));
        }
        if reading.trim().is_empty() {
            return Err(Error::UnitTable(format!("unit '{symbol}' has an empty reading")));
        }
        self.symbols.insert(
            key,
            UnitSymbol {
                role,
                reading: reading.to_string(),
            },
        );
        Ok(())
    }

    /// Add every symbol of `other`, replacing existing entries
    pub fn extend(&mut self, other: UnitTable) {
        self.symbols.extend(other.symbols);
    }

    /// Look up an (uppercased) symbol
    pub fn get(&self, symbol: &str) -> Option<&UnitSymbol> {
        self.symbols.get(symbol)
    }

    /// Longest symbol that `text` starts with
    pub fn symbol_prefix(&self, text: &str) -> Option<&str> {
        self.symbols
            .keys()
            .filter(|key| text.starts_with(key.as_str()))
            .max_by_key(|key| key.len())
            .map(String::as_str)
    }

    /// Symbols in lexical order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UnitSymbol)> {
        self.symbols.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
