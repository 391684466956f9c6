//! Token → language cache with write-seldom persistence
//!
//! The in-memory map is the source of truth while a detector runs. The
//! snapshot is read once when the cache is opened and written only by
//! [`LanguageCache::flush`], never on insert.

mod store;

pub use store::{FileStore, MemoryStore, SnapshotStore};

use crate::error::Result;
use crate::language::Language;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

/// In-memory token cache, optionally backed by a snapshot store
#[derive(Debug, Default)]
pub struct LanguageCache {
    entries: HashMap<String, Language>,
    dirty: bool,
    store: Option<Box<dyn SnapshotStore>>,
}

impl LanguageCache {
    /// Create a cache with no persistence
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open a file-backed cache
    ///
    /// A missing file starts an empty cache, and so does an unreadable or
    /// malformed one (after logging a warning).
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_store(FileStore::new(path))
    }

    /// Open a cache backed by any snapshot store
    pub fn with_store(store: impl SnapshotStore + 'static) -> Self {
        let entries = match store.load() {
            Ok(Some(document)) => parse_snapshot(&document),
            Ok(None) => HashMap::new(),
            Err(e) => {
                log::warn!("Ignoring unreadable cache snapshot: {e}");
                HashMap::new()
            }
        };

        log::debug!("Loaded {} cached tokens from {:?}", entries.len(), store);

        Self {
            entries,
            dirty: false,
            store: Some(Box::new(store)),
        }
    }

    /// Cached language for an exact token
    #[inline]
    pub fn lookup(&self, token: &str) -> Option<Language> {
        self.entries.get(token).copied()
    }

    /// Check whether a token is cached
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Record a token's language and mark the cache dirty
    pub fn insert(&mut self, token: impl Into<String>, language: Language) {
        self.entries.insert(token.into(), language);
        self.dirty = true;
    }

    /// Write the whole map to the snapshot store if anything changed
    ///
    /// Returns `Ok(true)` when a snapshot was written. On failure the cache
    /// stays dirty so a later flush can retry.
    pub fn flush(&mut self) -> Result<bool> {
        let Some(store) = &self.store else {
            return Ok(false);
        };
        if !self.dirty {
            return Ok(false);
        }

        let sorted: BTreeMap<&str, &str> = self
            .entries
            .iter()
            .map(|(token, lang)| (token.as_str(), lang.code()))
            .collect();
        let document = serde_json::to_string_pretty(&sorted)?;

        store.save(&document)?;
        self.dirty = false;
        log::info!("Flushed {} cached tokens", self.entries.len());
        Ok(true)
    }

    /// Whether inserts happened since the last flush or load
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether a snapshot store is attached
    pub fn is_persistent(&self) -> bool {
        self.store.is_some()
    }

    /// Number of cached tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache holds no tokens
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over cached tokens in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Language)> {
        self.entries.iter().map(|(token, lang)| (token.as_str(), *lang))
    }
}

/// Decode a snapshot, treating a malformed document as empty
fn parse_snapshot(document: &str) -> HashMap<String, Language> {
    let raw: HashMap<String, String> = match serde_json::from_str(document) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("Ignoring corrupt cache snapshot: {e}");
            return HashMap::new();
        }
    };

    let mut skipped = 0usize;
    let entries: HashMap<String, Language> = raw
        .into_iter()
        .filter_map(|(token, code)| match Language::from_code(&code) {
            Some(lang) => Some((token, lang)),
            None => {
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        log::warn!("Skipped {skipped} cache entries with unknown language codes");
    }

    entries
}
