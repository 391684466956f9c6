//! In-memory table of string cells
//!
//! The narrow shape every tabular reader produces and every writer consumes:
//! a header row plus string cells. Ragged rows are allowed; a missing cell
//! reads as empty.

use crate::error::CliError;
use scriptid_core::{BatchSession, ColumnStats, Language};

/// Suffix appended to an annotated column's name
pub const LANG_SUFFIX: &str = "_lang";

/// Header row plus data rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given headers
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Create a table from headers and rows
    pub fn with_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Append a data row
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Column names
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cells of one column in row order
    pub fn column(&self, index: usize) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.get(index).map(String::as_str).unwrap_or(""))
            .collect()
    }

    /// Replace a column's values, or append it if the name is new
    pub fn set_column(&mut self, name: &str, values: Vec<String>) {
        let index = match self.column_index(name) {
            Some(index) => index,
            None => {
                self.headers.push(name.to_string());
                self.headers.len() - 1
            }
        };

        for (row, value) in self.rows.iter_mut().zip(values) {
            if row.len() <= index {
                row.resize(index + 1, String::new());
            }
            row[index] = value;
        }
    }

    /// Check that every requested column exists
    pub fn require_columns(&self, columns: &[String], source: &str) -> Result<(), CliError> {
        match columns.iter().find(|c| self.column_index(c).is_none()) {
            Some(missing) => Err(CliError::MissingColumn {
                column: missing.clone(),
                path: source.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Add a `<column>_lang` column for each requested column
    ///
    /// Columns must already exist; see [`Table::require_columns`].
    pub fn annotate(&mut self, session: &mut BatchSession<'_>, columns: &[String]) -> ColumnStats {
        let mut stats = ColumnStats::default();

        for name in columns {
            let Some(index) = self.column_index(name) else {
                continue;
            };
            let (labels, column_stats) = session.annotate_with_stats(&self.column(index));
            stats.merge(column_stats);
            self.set_column(&format!("{name}{LANG_SUFFIX}"), codes(&labels));
        }

        stats
    }
}

/// Render labels as their short codes
pub fn codes(labels: &[Language]) -> Vec<String> {
    labels.iter().map(|l| l.code().to_string()).collect()
}
