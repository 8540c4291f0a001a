//! Input reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Where normalization input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// File when a path is given, stdin otherwise
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) => InputSource::File(path.to_path_buf()),
            None => InputSource::Stdin,
        }
    }

    /// Read the whole input as UTF-8 text
    pub fn read_text(&self) -> Result<String> {
        match self {
            InputSource::File(path) => FileReader::read_text(path),
            InputSource::Stdin => FileReader::read_from(io::stdin().lock()),
        }
    }
}

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a stream to its end as UTF-8 text
    pub fn read_from(mut reader: impl Read) -> Result<String> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| CliError::InputError(e.to_string()))?;
        Ok(content)
    }
}
