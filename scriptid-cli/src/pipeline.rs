//! Per-file annotation pipeline
//!
//! Picks a reader and writer from the input extension, streams the data
//! through one [`BatchSession`], and flushes the cache once per file.

use crate::error::CliError;
use crate::input::{self, CsvChunks, InputFormat, RecordDocument};
use crate::output::{CsvTableWriter, StagedFile, TableWriter};
use crate::table::Table;
use anyhow::{Context, Result};
use scriptid_core::{BatchSession, ScriptDetector};
use std::path::{Path, PathBuf};

/// Annotates whole files with one detector
pub struct FileAnnotator {
    detector: ScriptDetector,
    columns: Vec<String>,
    chunk_rows: Option<usize>,
}

impl FileAnnotator {
    /// Create an annotator for the given columns
    pub fn new(detector: ScriptDetector, columns: Vec<String>) -> Self {
        Self {
            detector,
            columns,
            chunk_rows: None,
        }
    }

    /// Read CSV input in chunks of this many rows
    pub fn with_chunk_rows(mut self, chunk_rows: Option<usize>) -> Self {
        self.chunk_rows = chunk_rows.filter(|&n| n > 0);
        self
    }

    /// The underlying detector
    pub fn detector(&self) -> &ScriptDetector {
        &self.detector
    }

    /// Annotate one file, writing to `output` or the default location
    ///
    /// Returns the path written.
    pub fn annotate_file(&mut self, input: &Path, output: Option<&Path>) -> Result<PathBuf> {
        let format = InputFormat::from_path(input)?;
        if !format.is_available() {
            return Err(CliError::MissingCapability {
                format: format.as_str().to_string(),
                feature: "xlsx".to_string(),
            }
            .into());
        }
        if !input.is_file() {
            return Err(CliError::FileNotFound(input.display().to_string()).into());
        }

        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| input::default_output_path(input, format));
        log::info!(
            "Annotating {} ({}) → {}",
            input.display(),
            format.as_str(),
            output.display()
        );

        let mut session = self.detector.batch();
        match format {
            InputFormat::Csv => {
                annotate_csv(&mut session, &self.columns, self.chunk_rows, input, &output)?
            }
            InputFormat::Spreadsheet => {
                if self.chunk_rows.is_some() {
                    return Err(CliError::ConfigError(
                        "chunked reading is only supported for CSV input".to_string(),
                    )
                    .into());
                }
                annotate_spreadsheet(&mut session, &self.columns, input, &output)?
            }
            InputFormat::Json | InputFormat::JsonLines => {
                annotate_records(&mut session, &self.columns, format, input, &output)?
            }
        }

        let stats = session
            .finish()
            .with_context(|| format!("Failed to save cache after {}", input.display()))?;
        log::info!(
            "{}: {} cells, {} distinct, {} newly cached",
            input.display(),
            stats.rows,
            stats.distinct,
            stats.cached
        );

        Ok(output)
    }
}

fn annotate_csv(
    session: &mut BatchSession<'_>,
    columns: &[String],
    chunk_rows: Option<usize>,
    input: &Path,
    output: &Path,
) -> Result<()> {
    let source = input.display().to_string();
    let chunks = CsvChunks::open(input, chunk_rows)?;
    Table::new(chunks.headers().to_vec()).require_columns(columns, &source)?;

    let mut writer = CsvTableWriter::new(StagedFile::create(output)?);
    for (index, chunk) in chunks.enumerate() {
        let mut table = chunk.with_context(|| format!("Failed to read {source}"))?;
        table.annotate(session, columns);
        writer.write_chunk(&table)?;
        log::debug!("{source}: chunk {} ({} rows)", index + 1, table.len());
    }

    writer.finish()?;
    writer.into_inner()?.commit()
}

#[cfg(feature = "xlsx")]
fn annotate_spreadsheet(
    session: &mut BatchSession<'_>,
    columns: &[String],
    input: &Path,
    output: &Path,
) -> Result<()> {
    use crate::output::XlsxTableWriter;

    let mut table = input::spreadsheet::read_first_sheet(input)?;
    table.require_columns(columns, &input.display().to_string())?;
    table.annotate(session, columns);

    let mut writer = XlsxTableWriter::new(StagedFile::create(output)?);
    writer.write_chunk(&table)?;
    writer.finish()?;
    writer.into_inner().commit()
}

#[cfg(not(feature = "xlsx"))]
fn annotate_spreadsheet(
    _session: &mut BatchSession<'_>,
    _columns: &[String],
    input: &Path,
    _output: &Path,
) -> Result<()> {
    input::spreadsheet::read_first_sheet(input).map(|_| ())
}

fn annotate_records(
    session: &mut BatchSession<'_>,
    keys: &[String],
    format: InputFormat,
    input: &Path,
    output: &Path,
) -> Result<()> {
    let mut document = match format {
        InputFormat::JsonLines => RecordDocument::read_json_lines(input)?,
        _ => RecordDocument::read_json(input)?,
    };
    document.annotate(session, keys);

    let mut staged = StagedFile::create(output)?;
    document.write_to(&mut staged)?;
    staged.commit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptid_core::{Config, LanguageCache};
    use std::fs;
    use tempfile::TempDir;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_csv_gets_lang_columns() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("voters.csv");
        fs::write(&input, "Name,lastname\nरमेश,Kumar\nரமேஷ்,\n").unwrap();

        let mut annotator = FileAnnotator::new(ScriptDetector::new(), columns(&["Name", "lastname"]));
        let output = annotator.annotate_file(&input, None).unwrap();

        assert_eq!(output, temp_dir.path().join("voters_lang.csv"));
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "Name,lastname,Name_lang,lastname_lang\nरमेश,Kumar,hi,en\nரமேஷ்,,tam,en\n"
        );
    }

    #[test]
    fn test_chunked_csv_matches_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("names.csv");
        fs::write(&input, "Name\nRamesh\nরমেশ\nରମେଶ\nRamesh\nਰਮੇਸ਼\n").unwrap();

        let whole = temp_dir.path().join("whole.csv");
        let chunked = temp_dir.path().join("chunked.csv");
        FileAnnotator::new(ScriptDetector::new(), columns(&["Name"]))
            .annotate_file(&input, Some(&whole))
            .unwrap();
        FileAnnotator::new(ScriptDetector::new(), columns(&["Name"]))
            .with_chunk_rows(Some(2))
            .annotate_file(&input, Some(&chunked))
            .unwrap();

        assert_eq!(
            fs::read_to_string(&whole).unwrap(),
            fs::read_to_string(&chunked).unwrap()
        );
    }

    #[test]
    fn test_missing_column_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("names.csv");
        fs::write(&input, "Name\nRamesh\n").unwrap();

        let err = FileAnnotator::new(ScriptDetector::new(), columns(&["Name", "rel_lastname"]))
            .annotate_file(&input, None)
            .unwrap_err();
        assert!(err.to_string().contains("Column 'rel_lastname' not found"));
        assert!(!temp_dir.path().join("names_lang.csv").exists());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_output_may_overwrite_input() {
        for chunk_rows in [None, Some(1)] {
            let temp_dir = TempDir::new().unwrap();
            let input = temp_dir.path().join("names.csv");
            fs::write(&input, "Name\nRamesh\nरमेश\n").unwrap();

            FileAnnotator::new(ScriptDetector::new(), columns(&["Name"]))
                .with_chunk_rows(chunk_rows)
                .annotate_file(&input, Some(&input))
                .unwrap();

            assert_eq!(
                fs::read_to_string(&input).unwrap(),
                "Name,Name_lang\nRamesh,en\nरमेश,hi\n"
            );
        }
    }

    #[test]
    fn test_failed_run_keeps_existing_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("rows.json");
        let output = temp_dir.path().join("rows_lang.json");
        fs::write(&input, "[{\"Name\": \"Ramesh\"}, 7]").unwrap();
        fs::write(&output, "previous").unwrap();

        let result = FileAnnotator::new(ScriptDetector::new(), columns(&["Name"]))
            .annotate_file(&input, None);

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[cfg(feature = "xlsx")]
    #[test]
    fn test_spreadsheet_written_as_xlsx() {
        use crate::input::spreadsheet::read_first_sheet;
        use rust_xlsxwriter::Workbook;

        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("voters.xlsx");
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "Name").unwrap();
        worksheet.write_string(1, 0, "ரமேஷ்").unwrap();
        worksheet.write_string(2, 0, "محمد").unwrap();
        workbook.save(&input).unwrap();

        let output = FileAnnotator::new(ScriptDetector::new(), columns(&["Name"]))
            .annotate_file(&input, None)
            .unwrap();

        assert_eq!(output, temp_dir.path().join("voters_lang.xlsx"));
        let table = read_first_sheet(&output).unwrap();
        assert_eq!(table.headers(), &["Name", "Name_lang"]);
        assert_eq!(table.column(1), vec!["tam", "ur"]);
    }

    #[test]
    fn test_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("names.txt");
        fs::write(&input, "Ramesh\n").unwrap();

        let err = FileAnnotator::new(ScriptDetector::new(), columns(&["Name"]))
            .annotate_file(&input, None)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_chunking_rejected_for_spreadsheets() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("names.xlsx");
        fs::write(&input, b"").unwrap();

        let err = FileAnnotator::new(ScriptDetector::new(), columns(&["Name"]))
            .with_chunk_rows(Some(100))
            .annotate_file(&input, None)
            .unwrap_err();
        let expected_config_error = cfg!(feature = "xlsx");
        assert_eq!(
            matches!(err.downcast_ref::<CliError>(), Some(CliError::ConfigError(_))),
            expected_config_error
        );
    }

    #[test]
    fn test_cache_flushed_once_per_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("rows.json");
        let cache_path = temp_dir.path().join("cache.json");
        fs::write(&input, r#"[{"Name": "ಸುರೇಶ್"}, {"Name": "Suresh"}]"#).unwrap();

        let config = Config::builder().auto_cache(true).build().unwrap();
        let detector = ScriptDetector::with_cache(config, LanguageCache::open(&cache_path));
        let mut annotator = FileAnnotator::new(detector, columns(&["Name"]));
        let output = annotator.annotate_file(&input, None).unwrap();

        assert_eq!(output, temp_dir.path().join("rows_lang.json"));
        let snapshot: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&cache_path).unwrap()).unwrap();
        assert_eq!(snapshot["ಸುರೇಶ್"], "kn");
        assert_eq!(snapshot["Suresh"], "en");
        assert!(!annotator.detector().cache().is_dirty());
    }
}
