//! XLSX table writer

use super::TableWriter;
use crate::table::Table;
use anyhow::{anyhow, Result};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::io::Write;

/// Collects table chunks into one worksheet, written out on finish
pub struct XlsxTableWriter<W: Write> {
    sink: W,
    worksheet: Option<Worksheet>,
    next_row: u32,
}

impl<W: Write> XlsxTableWriter<W> {
    /// Write a workbook into any sink
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            worksheet: Some(Worksheet::new()),
            next_row: 0,
        }
    }

    /// Recover the underlying sink
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn write_row(&mut self, row: &[String]) -> Result<()> {
        let worksheet = self
            .worksheet
            .as_mut()
            .ok_or_else(|| anyhow!("Workbook has already been written"))?;

        for (col, cell) in row.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            let col = u16::try_from(col).map_err(|_| anyhow!("Too many columns for a worksheet"))?;
            worksheet.write_string(self.next_row, col, cell.as_str())?;
        }

        self.next_row += 1;
        Ok(())
    }
}

impl<W: Write> TableWriter for XlsxTableWriter<W> {
    fn write_chunk(&mut self, table: &Table) -> Result<()> {
        if self.next_row == 0 {
            self.write_row(table.headers())?;
        }
        for row in table.rows() {
            self.write_row(row)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let worksheet = self
            .worksheet
            .take()
            .ok_or_else(|| anyhow!("Workbook has already been written"))?;

        let mut workbook = Workbook::new();
        workbook.push_worksheet(worksheet);
        let bytes = workbook.save_to_buffer()?;

        self.sink.write_all(&bytes)?;
        self.sink.flush()?;
        Ok(())
    }
}
