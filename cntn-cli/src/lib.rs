//! cntn CLI library
//!
//! This library provides the command-line interface for Chinese numeral
//! conversion and number normalization in mixed text.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod width;

pub use commands::Cli;
pub use error::{CliError, CliResult};
