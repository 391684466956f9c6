//! Column annotation with distinct-value deduplication
//!
//! Real datasets repeat the same names over and over, so every column is
//! reduced to its distinct values before classification and the labels are
//! broadcast back afterwards. Cost is proportional to the number of distinct
//! values, not rows.

use crate::cache::LanguageCache;
use crate::classifier::{Classification, Classifier};
use crate::config::Config;
use crate::error::Result;
use crate::language::Language;
use std::collections::HashMap;

/// Counters for one annotated column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnStats {
    /// Cells in the column
    pub rows: usize,
    /// Distinct cell values classified
    pub distinct: usize,
    /// Values inserted into the cache by auto-caching
    pub cached: usize,
}

impl ColumnStats {
    /// Accumulate another column's counters
    pub fn merge(&mut self, other: ColumnStats) {
        self.rows += other.rows;
        self.distinct += other.distinct;
        self.cached += other.cached;
    }
}

/// Cache-aware script detector
///
/// Owns its cache exclusively. Sharing one detector across threads needs
/// external locking around annotate and flush.
#[derive(Debug)]
pub struct ScriptDetector {
    classifier: Classifier,
    cache: LanguageCache,
    config: Config,
}

impl Default for ScriptDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptDetector {
    /// Create a detector with default configuration and no persistence
    pub fn new() -> Self {
        Self::with_cache(Config::default(), LanguageCache::in_memory())
    }

    /// Create a detector with custom configuration and no persistence
    pub fn with_config(config: Config) -> Self {
        Self::with_cache(config, LanguageCache::in_memory())
    }

    /// Create a detector around an existing cache
    pub fn with_cache(config: Config, cache: LanguageCache) -> Self {
        let classifier = Classifier::new(config.sample_chars, config.default_language);
        Self {
            classifier,
            cache,
            config,
        }
    }

    /// Classify one token, consulting the cache first
    pub fn classify(&self, token: Option<&str>) -> Classification {
        self.classifier.classify_cached(token, Some(&self.cache))
    }

    /// Annotate one column and flush the cache if auto-caching
    pub fn annotate<S: AsRef<str>>(&mut self, column: &[S]) -> Result<Vec<Language>> {
        let mut session = self.batch();
        let labels = session.annotate(column);
        session.finish()?;
        Ok(labels)
    }

    /// Annotate several columns with a single cache flush at the end
    pub fn annotate_columns<S: AsRef<str>>(
        &mut self,
        columns: &[&[S]],
    ) -> Result<Vec<Vec<Language>>> {
        let mut session = self.batch();
        let labels = columns
            .iter()
            .map(|column| session.annotate(column))
            .collect();
        session.finish()?;
        Ok(labels)
    }

    /// Start a batch whose cache writes are flushed once by [`BatchSession::finish`]
    pub fn batch(&mut self) -> BatchSession<'_> {
        BatchSession {
            detector: self,
            stats: ColumnStats::default(),
        }
    }

    /// Store a token's language in the cache
    pub fn remember(&mut self, token: impl Into<String>, language: Language) {
        self.cache.insert(token, language);
    }

    /// Write pending cache entries to the snapshot store
    pub fn flush_cache(&mut self) -> Result<bool> {
        self.cache.flush()
    }

    /// The detector's cache
    pub fn cache(&self) -> &LanguageCache {
        &self.cache
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn annotate_column<S: AsRef<str>>(&mut self, column: &[S]) -> (Vec<Language>, ColumnStats) {
        let mut labels: HashMap<&str, Language> = HashMap::new();
        let mut cached = 0usize;

        for cell in column {
            let value = cell.as_ref();
            if labels.contains_key(value) {
                continue;
            }

            let result = self.classify(Some(value));
            labels.insert(value, result.language);

            if self.config.auto_cache
                && result.score >= self.config.min_cache_score
                && !value.is_empty()
            {
                self.cache.insert(value, result.language);
                cached += 1;
            }
        }

        let output = column.iter().map(|cell| labels[cell.as_ref()]).collect();
        let stats = ColumnStats {
            rows: column.len(),
            distinct: labels.len(),
            cached,
        };

        log::debug!(
            "Annotated {} rows ({} distinct, {} cached)",
            stats.rows,
            stats.distinct,
            stats.cached
        );

        (output, stats)
    }
}

/// A group of column annotations sharing one deferred cache flush
///
/// Dropping a session without calling [`finish`](BatchSession::finish)
/// keeps new entries in memory, still dirty, for a later flush.
#[derive(Debug)]
pub struct BatchSession<'a> {
    detector: &'a mut ScriptDetector,
    stats: ColumnStats,
}

impl BatchSession<'_> {
    /// Annotate a column, one label per cell in input order
    pub fn annotate<S: AsRef<str>>(&mut self, column: &[S]) -> Vec<Language> {
        self.annotate_with_stats(column).0
    }

    /// Annotate a column and report its counters
    pub fn annotate_with_stats<S: AsRef<str>>(
        &mut self,
        column: &[S],
    ) -> (Vec<Language>, ColumnStats) {
        let (labels, stats) = self.detector.annotate_column(column);
        self.stats.merge(stats);
        (labels, stats)
    }

    /// Classify a single value, caching it under the session's auto-cache policy
    pub fn classify(&mut self, token: Option<&str>) -> Classification {
        let result = self.detector.classify(token);
        let config = &self.detector.config;
        if let Some(value) = token.filter(|v| !v.is_empty()) {
            if config.auto_cache && result.score >= config.min_cache_score {
                self.detector.cache.insert(value, result.language);
                self.stats.cached += 1;
            }
        }
        result
    }

    /// Counters accumulated so far
    pub fn stats(&self) -> ColumnStats {
        self.stats
    }

    /// End the batch, flushing the cache once if auto-caching is enabled
    pub fn finish(self) -> Result<ColumnStats> {
        if self.detector.config.auto_cache {
            self.detector.cache.flush()?;
        }
        Ok(self.stats)
    }
}
