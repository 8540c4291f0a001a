//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input file or stream could not be read
    InputError(String),
    /// Configuration or unit file is invalid
    ConfigError(String),
    /// Conversion rejected by the core library
    ConversionError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InputError(msg) => write!(f, "Input error: {msg}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ConversionError(msg) => write!(f, "Conversion error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<cntn_core::Error> for CliError {
    fn from(error: cntn_core::Error) -> Self {
        match error {
            cntn_core::Error::UnitTable(msg) => CliError::ConfigError(msg),
            cntn_core::Error::Io(e) => CliError::InputError(e.to_string()),
            other => CliError::ConversionError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
