//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod list;
pub mod normalize;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize Arabic text from files or stdin
    Normalize(normalize::NormalizeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List option flags with their defaults
    Flags,

    /// List pipeline stages in execution order
    Stages,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Normalize(args) => args.execute(),
            Commands::List { subcommand } => {
                let mut stdout = std::io::stdout().lock();
                match subcommand {
                    ListCommands::Flags => list::write_flags(&mut stdout),
                    ListCommands::Stages => list::write_stages(&mut stdout),
                }
            }
        }
    }
}
