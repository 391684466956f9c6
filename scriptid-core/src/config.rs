//! Detector configuration

use crate::error::Error;
use crate::language::Language;
use std::str::FromStr;

/// Default configuration constants
pub mod defaults {
    /// Significant characters inspected per token
    pub const SAMPLE_CHARS: usize = 6;

    /// Minimum score for a result to be written to the cache
    pub const MIN_CACHE_SCORE: f64 = 0.95;
}

/// Classification and annotation settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub(crate) sample_chars: usize,
    pub(crate) default_language: Language,
    pub(crate) auto_cache: bool,
    pub(crate) min_cache_score: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_chars: defaults::SAMPLE_CHARS,
            default_language: Language::English,
            auto_cache: false,
            min_cache_score: defaults::MIN_CACHE_SCORE,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Maximum significant characters inspected per token
    pub fn sample_chars(&self) -> usize {
        self.sample_chars
    }

    /// Language reported when nothing is recognised
    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Whether confident results are written back to the cache
    pub fn auto_cache(&self) -> bool {
        self.auto_cache
    }

    /// Score threshold for auto-caching
    pub fn min_cache_score(&self) -> f64 {
        self.min_cache_score
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.sample_chars == 0 {
            return Err(Error::Configuration(
                "sample_chars must be greater than 0".into(),
            ));
        }

        if !(0.0..=1.0).contains(&self.min_cache_score) {
            return Err(Error::Configuration(format!(
                "min_cache_score must be within [0, 1], got {}",
                self.min_cache_score
            )));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    sample_chars: Option<usize>,
    default_language: Option<String>,
    auto_cache: Option<bool>,
    min_cache_score: Option<f64>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many significant characters to inspect
    pub fn sample_chars(mut self, count: usize) -> Self {
        self.sample_chars = Some(count);
        self
    }

    /// Set the fallback language by code or name
    pub fn default_language(mut self, code: impl Into<String>) -> Self {
        self.default_language = Some(code.into());
        self
    }

    /// Enable or disable writing confident results to the cache
    pub fn auto_cache(mut self, enabled: bool) -> Self {
        self.auto_cache = Some(enabled);
        self
    }

    /// Set the auto-cache score threshold
    pub fn min_cache_score(mut self, score: f64) -> Self {
        self.min_cache_score = Some(score);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(code) = self.default_language {
            config.default_language = Language::from_str(&code)?;
        }

        if let Some(count) = self.sample_chars {
            config.sample_chars = count;
        }

        if let Some(enabled) = self.auto_cache {
            config.auto_cache = enabled;
        }

        if let Some(score) = self.min_cache_score {
            config.min_cache_score = score;
        }

        config.validate()?;
        Ok(config)
    }
}
