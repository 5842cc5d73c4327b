//! List command implementation

use anyhow::Result;
use harf_core::{Flag, Stage};
use std::io::Write;

/// Write every option flag with its default value
pub fn write_flags<W: Write>(writer: &mut W) -> Result<()> {
    for flag in Flag::ALL {
        writeln!(
            writer,
            "{:<20} default: {}",
            flag.as_str(),
            flag.default_value()
        )?;
    }
    Ok(())
}

/// Write the pipeline stages in order with the flags gating each
pub fn write_stages<W: Write>(writer: &mut W) -> Result<()> {
    for (index, stage) in Stage::ALL.iter().enumerate() {
        let flags: Vec<&str> = stage.flags().iter().map(|f| f.as_str()).collect();
        writeln!(
            writer,
            "{}. {:<14} [{}]",
            index + 1,
            stage.name(),
            flags.join(" | ")
        )?;
        for rule in stage.rules() {
            writeln!(writer, "     - {}", rule.name)?;
        }
    }
    Ok(())
}
