//! Chunked CSV reading

use crate::table::Table;
use anyhow::{Context, Result};
use csv::{Reader, ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Iterator over a CSV file as tables of at most `chunk_rows` rows
///
/// Without a chunk size the whole file arrives as one table. The first
/// chunk is always yielded, even for a header-only file, so callers see
/// the headers.
pub struct CsvChunks<R: Read> {
    reader: Reader<R>,
    headers: Vec<String>,
    chunk_rows: usize,
    record: StringRecord,
    started: bool,
    done: bool,
}

impl CsvChunks<File> {
    /// Open a CSV file with a header row
    pub fn open(path: &Path, chunk_rows: Option<usize>) -> Result<Self> {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Self::new(reader, chunk_rows)
    }
}

impl<R: Read> CsvChunks<R> {
    /// Wrap an existing reader
    pub fn from_reader(reader: R, chunk_rows: Option<usize>) -> Result<Self> {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        Self::new(reader, chunk_rows)
    }

    fn new(mut reader: Reader<R>, chunk_rows: Option<usize>) -> Result<Self> {
        let headers = reader
            .headers()
            .context("Failed to read CSV header row")?
            .iter()
            .map(str::to_string)
            .collect();

        Ok(Self {
            reader,
            headers,
            chunk_rows: chunk_rows.filter(|&n| n > 0).unwrap_or(usize::MAX),
            record: StringRecord::new(),
            started: false,
            done: false,
        })
    }

    /// Column names from the header row
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    fn next_chunk(&mut self) -> Result<Option<Table>> {
        if self.done {
            return Ok(None);
        }

        let mut table = Table::new(self.headers.clone());
        while table.len() < self.chunk_rows {
            let more = self
                .reader
                .read_record(&mut self.record)
                .context("Failed to parse CSV record")?;
            if !more {
                self.done = true;
                break;
            }
            table.push_row(self.record.iter().map(str::to_string).collect());
        }

        if table.is_empty() && self.started {
            return Ok(None);
        }
        self.started = true;
        Ok(Some(table))
    }
}

impl<R: Read> Iterator for CsvChunks<R> {
    type Item = Result<Table>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_chunk() {
            Ok(Some(table)) => Some(Ok(table)),
            Ok(None) => None,
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
