//! Formatters for the `detect` command

use super::DetectionFormatter;
use anyhow::Result;
use scriptid_core::Classification;
use serde::Serialize;
use std::io::{self, Write};

/// Plain text formatter - one tab-separated line per token
pub struct TextDetectionFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextDetectionFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextDetectionFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> DetectionFormatter for TextDetectionFormatter<W> {
    fn format_detection(&mut self, token: &str, result: &Classification) -> Result<()> {
        writeln!(
            self.writer,
            "{}\t{}\t{:.3}",
            token, result.language, result.score
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// JSON formatter - outputs detections as a JSON array
pub struct JsonDetectionFormatter<W: Write> {
    writer: W,
    detections: Vec<DetectionData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct DetectionData {
    /// The classified token
    pub token: String,
    /// Language code
    pub language: String,
    /// Fraction of sampled characters in the winning language
    pub score: f64,
}

impl<W: Write> JsonDetectionFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            detections: Vec::new(),
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DetectionFormatter for JsonDetectionFormatter<W> {
    fn format_detection(&mut self, token: &str, result: &Classification) -> Result<()> {
        self.detections.push(DetectionData {
            token: token.to_string(),
            language: result.language.code().to_string(),
            score: result.score,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.detections)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
