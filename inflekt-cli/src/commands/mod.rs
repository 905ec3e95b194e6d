//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod apply;
pub mod list;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply a transformation to each word
    Apply(apply::ApplyArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List transformation names
    Transforms,

    /// List registered acronyms
    Acronyms,

    /// List uncountable words
    Uncountables,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Apply(args) => args.execute(),
            Commands::List { subcommand } => list::execute(subcommand),
        }
    }
}
