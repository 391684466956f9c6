//! Spreadsheet reading through calamine
//!
//! Only the first worksheet is read; its first row is the header. Without
//! the `xlsx` feature every read fails with a capability error.

use crate::table::Table;
use anyhow::Result;
use std::path::Path;

/// Whether spreadsheet support was compiled in
pub const AVAILABLE: bool = cfg!(feature = "xlsx");

/// Read the first worksheet of a workbook into a table
#[cfg(feature = "xlsx")]
pub fn read_first_sheet(path: &Path) -> Result<Table> {
    use anyhow::Context;
    use calamine::{open_workbook_auto, Data, Reader};

    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow::anyhow!("Workbook has no worksheets: {}", path.display()))?
        .with_context(|| format!("Failed to read worksheet in {}", path.display()))?;

    let cell_text = |cell: &Data| match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    };

    let mut rows = range.rows();
    let headers = rows
        .next()
        .map(|row| row.iter().map(cell_text).collect())
        .unwrap_or_default();
    let body = rows.map(|row| row.iter().map(cell_text).collect()).collect();

    Ok(Table::with_rows(headers, body))
}

/// Read the first worksheet of a workbook into a table
#[cfg(not(feature = "xlsx"))]
pub fn read_first_sheet(path: &Path) -> Result<Table> {
    log::debug!("Spreadsheet support unavailable for {}", path.display());
    Err(crate::error::CliError::MissingCapability {
        format: "XLSX".to_string(),
        feature: "xlsx".to_string(),
    }
    .into())
}
