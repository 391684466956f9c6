//! JSON record input and output
//!
//! A `.json` file holds one object or an array of objects; a `.jsonl` file
//! holds one object per line. Each requested key gains a `<key>_lang` field.

use crate::table::LANG_SUFFIX;
use anyhow::{Context, Result};
use scriptid_core::{BatchSession, ColumnStats};
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// A parsed record file
#[derive(Debug, Clone, PartialEq)]
pub enum RecordDocument {
    /// A single JSON object
    Single(Map<String, Value>),
    /// A JSON array of objects
    Array(Vec<Map<String, Value>>),
    /// Newline-delimited objects
    Lines(Vec<Map<String, Value>>),
}

impl RecordDocument {
    /// Read a `.json` document
    pub fn read_json(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Self::parse_json(&text).with_context(|| format!("Invalid JSON records in {}", path.display()))
    }

    /// Read a `.jsonl` document
    pub fn read_json_lines(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let mut records = Vec::new();
        for (number, line) in BufReader::new(file).lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read file: {}", path.display()))?;
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(&line).with_context(|| {
                format!("Invalid JSON object on line {} of {}", number + 1, path.display())
            })?;
            records.push(record);
        }

        Ok(RecordDocument::Lines(records))
    }

    /// Parse a JSON object or array of objects
    pub fn parse_json(text: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(record) => Ok(RecordDocument::Single(record)),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::Object(record) => Ok(record),
                    _ => Err(anyhow::anyhow!("Array element {i} is not an object")),
                })
                .collect::<Result<Vec<_>>>()
                .map(RecordDocument::Array),
            _ => anyhow::bail!("Expected a JSON object or an array of objects"),
        }
    }

    /// The records, in document order
    pub fn records(&self) -> &[Map<String, Value>] {
        match self {
            RecordDocument::Single(record) => std::slice::from_ref(record),
            RecordDocument::Array(records) | RecordDocument::Lines(records) => records,
        }
    }

    fn records_mut(&mut self) -> &mut [Map<String, Value>] {
        match self {
            RecordDocument::Single(record) => std::slice::from_mut(record),
            RecordDocument::Array(records) | RecordDocument::Lines(records) => records,
        }
    }

    /// Add `<key>_lang` to every record for each requested key
    ///
    /// Missing or null fields are annotated as empty tokens.
    pub fn annotate(&mut self, session: &mut BatchSession<'_>, keys: &[String]) -> ColumnStats {
        let mut stats = ColumnStats::default();

        for key in keys {
            let cells: Vec<String> = self
                .records()
                .iter()
                .map(|record| field_text(record.get(key)))
                .collect();
            let (labels, column_stats) = session.annotate_with_stats(&cells);
            stats.merge(column_stats);

            let lang_key = format!("{key}{LANG_SUFFIX}");
            for (record, label) in self.records_mut().iter_mut().zip(labels) {
                record.insert(lang_key.clone(), Value::String(label.code().to_string()));
            }
        }

        stats
    }

    /// Write the document in its original shape
    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<()> {
        let mut writer = BufWriter::new(sink);

        match self {
            RecordDocument::Single(record) => serde_json::to_writer_pretty(&mut writer, record)?,
            RecordDocument::Array(records) => serde_json::to_writer_pretty(&mut writer, records)?,
            RecordDocument::Lines(records) => {
                for record in records {
                    serde_json::to_writer(&mut writer, record)?;
                    writeln!(writer)?;
                }
            }
        }

        if !matches!(self, RecordDocument::Lines(_)) {
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Text classified for a JSON field
fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
