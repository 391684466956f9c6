//! Detect command implementation

use crate::output::{DetectionFormatter, JsonDetectionFormatter, TextDetectionFormatter};
use anyhow::Result;
use clap::Args;
use scriptid_core::{Config, ScriptDetector};
use std::io;

/// Arguments for the detect command
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Tokens to classify
    #[arg(value_name = "TOKEN", required = true)]
    pub tokens: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Characters to inspect per token
    #[arg(long, value_name = "N")]
    pub sample: Option<usize>,

    /// Language code for tokens with no recognised characters
    #[arg(long, value_name = "CODE")]
    pub default_language: Option<String>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated token, language code and score
    Text,
    /// JSON array of detections
    Json,
}

impl DetectArgs {
    /// Execute the detect command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, false);

        let mut builder = Config::builder();
        if let Some(sample) = self.sample {
            builder = builder.sample_chars(sample);
        }
        if let Some(code) = &self.default_language {
            builder = builder.default_language(code.as_str());
        }
        let detector = ScriptDetector::with_config(builder.build()?);

        let mut formatter: Box<dyn DetectionFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextDetectionFormatter::stdout()),
            OutputFormat::Json => Box::new(JsonDetectionFormatter::new(io::stdout())),
        };
        self.write_detections(&detector, formatter.as_mut())
    }

    fn write_detections(
        &self,
        detector: &ScriptDetector,
        formatter: &mut dyn DetectionFormatter,
    ) -> Result<()> {
        for token in &self.tokens {
            let result = detector.classify(Some(token));
            formatter.format_detection(token, &result)?;
        }
        formatter.finish()
    }
}
