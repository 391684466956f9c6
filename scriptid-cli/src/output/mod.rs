//! Output writing module

use crate::table::Table;
use anyhow::Result;
use scriptid_core::Classification;

/// Trait for annotated table sinks
///
/// Chunks arrive in input order; the header row is taken from the first one.
pub trait TableWriter {
    /// Write one chunk of rows
    fn write_chunk(&mut self, table: &Table) -> Result<()>;

    /// Flush and close the output
    fn finish(&mut self) -> Result<()>;
}

/// Trait for `detect` command formatters
pub trait DetectionFormatter {
    /// Format the result for one token
    fn format_detection(&mut self, token: &str, result: &Classification) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod csv;
pub mod detection;
pub mod staged;
#[cfg(feature = "xlsx")]
pub mod xlsx;

pub use self::csv::CsvTableWriter;
pub use detection::{JsonDetectionFormatter, TextDetectionFormatter};
pub use staged::StagedFile;
#[cfg(feature = "xlsx")]
pub use xlsx::XlsxTableWriter;
