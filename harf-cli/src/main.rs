//! harf command-line entry point

use anyhow::Result;
use clap::Parser;
use harf_cli::commands::Commands;

/// Arabic and Quranic text normalization for cross-orthography matching
#[derive(Debug, Parser)]
#[command(name = "harf", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
