//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One normalized input, ready to be written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedDocument {
    /// File path, or `<stdin>`
    pub source: String,
    /// Code points before normalization
    pub input_chars: usize,
    /// Code points after normalization
    pub output_chars: usize,
    /// The normalized text
    pub text: String,
}

impl NormalizedDocument {
    /// Pair an input with its normalized form
    pub fn new(source: impl Into<String>, input: &str, text: String) -> Self {
        Self {
            source: source.into(),
            input_chars: input.chars().count(),
            output_chars: text.chars().count(),
            text,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single normalized document
    fn format_document(&mut self, document: &NormalizedDocument) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
