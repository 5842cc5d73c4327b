//! Plain text output formatter

use super::{NormalizedDocument, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs each normalized document on its own line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, document: &NormalizedDocument) -> Result<()> {
        writeln!(self.writer, "{}", document.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
