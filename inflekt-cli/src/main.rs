//! Command-line entry point for inflekt

use anyhow::Result;
use clap::Parser;
use inflekt_cli::commands::Commands;

/// Pluralize, singularize and re-case words from the command line
#[derive(Debug, Parser)]
#[command(name = "inflekt", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
