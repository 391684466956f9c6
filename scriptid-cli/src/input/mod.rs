//! Input handling module
//!
//! Readers turn files into [`Table`](crate::table::Table)s or JSON records.
//! The input container is chosen from the file extension.

pub mod csv_reader;
pub mod glob_resolver;
pub mod records;
pub mod spreadsheet;

pub use csv_reader::CsvChunks;
pub use glob_resolver::resolve_patterns;
pub use records::RecordDocument;

use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Input containers recognised by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Comma-separated values with a header row
    Csv,
    /// Excel workbook, first worksheet
    Spreadsheet,
    /// JSON object or array of objects
    Json,
    /// One JSON object per line
    JsonLines,
}

impl InputFormat {
    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(InputFormat::Csv),
            "xlsx" | "xls" => Ok(InputFormat::Spreadsheet),
            "json" => Ok(InputFormat::Json),
            "jsonl" | "ndjson" => Ok(InputFormat::JsonLines),
            "" => Err(CliError::UnsupportedFormat("(no extension)".to_string())),
            _ => Err(CliError::UnsupportedFormat(format!(".{ext}"))),
        }
    }

    /// Extension used for this format's annotated output
    pub fn output_extension(&self) -> &'static str {
        match self {
            InputFormat::Csv => "csv",
            InputFormat::Spreadsheet => "xlsx",
            InputFormat::Json => "json",
            InputFormat::JsonLines => "jsonl",
        }
    }

    /// Whether this build can read the format
    pub fn is_available(&self) -> bool {
        match self {
            InputFormat::Spreadsheet => spreadsheet::AVAILABLE,
            _ => true,
        }
    }

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Csv => "CSV",
            InputFormat::Spreadsheet => "XLSX/XLS",
            InputFormat::Json => "JSON",
            InputFormat::JsonLines => "JSON Lines",
        }
    }

    /// All formats, for listing
    pub const ALL: [InputFormat; 4] = [
        InputFormat::Csv,
        InputFormat::Spreadsheet,
        InputFormat::Json,
        InputFormat::JsonLines,
    ];
}

/// Default output location: `<stem>_lang.<ext>` next to the input
pub fn default_output_path(input: &Path, format: InputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}_lang.{}", format.output_extension()))
}
