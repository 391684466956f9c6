//! Annotate command implementation

use crate::config::{AnnotateConfig, CliConfig};
use crate::error::CliError;
use crate::input::resolve_patterns;
use crate::pipeline::FileAnnotator;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use scriptid_core::{Config, LanguageCache, ScriptDetector};
use std::path::PathBuf;

/// Arguments for the annotate command
#[derive(Debug, Args)]
pub struct AnnotateArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (only with a single input; default: <stem>_lang.<ext>)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Columns to annotate [default: Name Relative_Name lastname rel_lastname]
    #[arg(long, value_name = "NAME", num_args = 1..)]
    pub cols: Option<Vec<String>>,

    /// Cache file path [default: lang_cache.json]
    #[arg(long, value_name = "FILE")]
    pub cache: Option<PathBuf>,

    /// Characters to inspect per cell [default: 6]
    #[arg(long, value_name = "N")]
    pub sample: Option<usize>,

    /// Minimum score to auto-cache [default: 0.95]
    #[arg(long, value_name = "SCORE")]
    pub threshold: Option<f64>,

    /// Disable auto-cache updates
    #[arg(long)]
    pub no_cache: bool,

    /// Language code for cells with no recognised characters [default: en]
    #[arg(long, value_name = "CODE")]
    pub default_language: Option<String>,

    /// Read CSV input in chunks of this many rows
    #[arg(long, value_name = "ROWS")]
    pub chunk_rows: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl AnnotateArgs {
    /// Execute the annotate command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting annotation");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let settings = self.resolve(file_config.annotate);

        let files = resolve_patterns(&self.input)?;
        if self.output.is_some() && files.len() > 1 {
            return Err(CliError::ConfigError(format!(
                "--output needs exactly one input file, got {}",
                files.len()
            ))
            .into());
        }

        let config = Config::builder()
            .sample_chars(settings.sample_chars)
            .default_language(settings.default_language.as_str())
            .auto_cache(settings.auto_cache)
            .min_cache_score(settings.min_cache_score)
            .build()?;
        let cache = LanguageCache::open(&settings.cache);
        log::info!(
            "Loaded {} cached tokens from {}",
            cache.len(),
            settings.cache.display()
        );

        let detector = ScriptDetector::with_cache(config, cache);
        let mut annotator =
            FileAnnotator::new(detector, settings.columns).with_chunk_rows(settings.chunk_rows);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        for file in &files {
            let output = annotator
                .annotate_file(file, self.output.as_deref())
                .with_context(|| format!("Failed to annotate {}", file.display()))?;
            progress.file_completed(&output.display().to_string());
        }

        progress.finish();
        Ok(())
    }

    /// Merge command-line flags over the configuration file
    pub fn resolve(&self, file: AnnotateConfig) -> AnnotateConfig {
        AnnotateConfig {
            columns: self.cols.clone().unwrap_or(file.columns),
            cache: self.cache.clone().unwrap_or(file.cache),
            sample_chars: self.sample.unwrap_or(file.sample_chars),
            min_cache_score: self.threshold.unwrap_or(file.min_cache_score),
            auto_cache: file.auto_cache && !self.no_cache,
            default_language: self
                .default_language
                .clone()
                .unwrap_or(file.default_language),
            chunk_rows: self.chunk_rows.or(file.chunk_rows),
        }
    }
}
