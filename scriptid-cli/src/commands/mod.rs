//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod annotate;
pub mod detect;
pub mod list;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add <column>_lang columns to CSV, XLSX or JSON files
    Annotate(annotate::AnnotateArgs),

    /// Classify tokens given on the command line
    Detect(detect::DetectArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List supported languages and their code point ranges
    Languages,

    /// List supported input formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Annotate(args) => args.execute(),
            Commands::Detect(args) => args.execute(),
            Commands::List { subcommand } => list::execute(*subcommand),
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run in-process
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
