//! CSV table writer

use super::TableWriter;
use crate::table::Table;
use anyhow::Result;
use csv::{Writer, WriterBuilder};
use std::io::Write;

/// Streams table chunks into one CSV file
pub struct CsvTableWriter<W: Write> {
    writer: Writer<W>,
    header_written: bool,
}

impl<W: Write> CsvTableWriter<W> {
    /// Write CSV into any sink
    pub fn new(sink: W) -> Self {
        Self {
            writer: WriterBuilder::new().flexible(true).from_writer(sink),
            header_written: false,
        }
    }

    /// Recover the underlying sink
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))
    }
}

impl<W: Write> TableWriter for CsvTableWriter<W> {
    fn write_chunk(&mut self, table: &Table) -> Result<()> {
        if !self.header_written {
            self.writer.write_record(table.headers())?;
            self.header_written = true;
        }
        for row in table.rows() {
            self.writer.write_record(row)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
