//! scriptid command-line entry point

use clap::Parser;
use scriptid_cli::commands::Commands;

/// Label names in CSV, XLSX and JSON data with their script's language code
#[derive(Debug, Parser)]
#[command(name = "scriptid", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
