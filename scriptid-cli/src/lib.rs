//! scriptid CLI library
//!
//! This library provides the command-line interface for the scriptid
//! script detector: file readers and writers, the per-file pipeline and
//! the `annotate`, `detect` and `list` commands.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod table;

pub use error::{CliError, CliResult};
pub use pipeline::FileAnnotator;
