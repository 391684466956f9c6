//! Configuration module
//!
//! Optional TOML file passed with `-c`. Every value has a default, and
//! command-line flags override whatever the file sets.

use crate::error::CliError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Annotation settings
    #[serde(default)]
    pub annotate: AnnotateConfig,
}

/// Annotation-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AnnotateConfig {
    /// Columns (or JSON keys) to annotate
    pub columns: Vec<String>,

    /// Cache snapshot path
    pub cache: PathBuf,

    /// Characters inspected per cell
    pub sample_chars: usize,

    /// Minimum score for a result to be cached
    pub min_cache_score: f64,

    /// Store confident results in the cache
    pub auto_cache: bool,

    /// Language code for unresolvable cells
    pub default_language: String,

    /// Rows per CSV chunk (unset reads whole files)
    pub chunk_rows: Option<usize>,
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        Self {
            columns: ["Name", "Relative_Name", "lastname", "rel_lastname"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            cache: PathBuf::from("lang_cache.json"),
            sample_chars: scriptid_core::config::defaults::SAMPLE_CHARS,
            min_cache_score: scriptid_core::config::defaults::MIN_CACHE_SCORE,
            auto_cache: true,
            default_language: scriptid_core::Language::default().code().to_string(),
            chunk_rows: None,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&text)
            .map_err(|e| CliError::ConfigError(format!("Invalid config {}: {e}", path.display())))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = CliConfig::from_toml("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.annotate.sample_chars, 6);
        assert_eq!(config.annotate.min_cache_score, 0.95);
        assert_eq!(config.annotate.default_language, "en");
        assert_eq!(config.annotate.columns.len(), 4);
    }

    #[test]
    fn test_partial_table_keeps_other_defaults() {
        let config = CliConfig::from_toml(
            r#"
            [annotate]
            columns = ["FullName"]
            chunk_rows = 5000
            auto_cache = false
            "#,
        )
        .unwrap();

        assert_eq!(config.annotate.columns, vec!["FullName"]);
        assert_eq!(config.annotate.chunk_rows, Some(5000));
        assert!(!config.annotate.auto_cache);
        assert_eq!(config.annotate.cache, PathBuf::from("lang_cache.json"));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(CliConfig::from_toml("[annotate]\nsample_chars = \"six\"\n").is_err());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = CliConfig::from_file(Path::new("/nonexistent/scriptid.toml")).unwrap_err();
        assert!(matches!(err, CliError::ConfigError(_)));
    }
}
