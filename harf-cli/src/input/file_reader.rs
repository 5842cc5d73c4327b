//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(CliError::FileNotFound(path.display().to_string()).into())
            }
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read file: {}", path.display()))
            }
        }
    }

    /// Read all of stdin as UTF-8 text
    pub fn read_stdin() -> Result<String> {
        Self::read_from(io::stdin().lock())
    }

    /// Read any reader to a string
    pub fn read_from<R: Read>(mut reader: R) -> Result<String> {
        let mut buffer = String::new();
        reader
            .read_to_string(&mut buffer)
            .context("Failed to read input as UTF-8")?;
        Ok(buffer)
    }
}
