//! Fast Unicode script detection for names and short tokens
//!
//! Each token is classified by looking up the Unicode block of at most a
//! handful of its significant characters, which keeps the per-token cost
//! flat regardless of string length. Large columns are deduplicated before
//! classification and a persistent cache remembers confident answers.
//!
//! # Scripts
//!
//! Devanagari (`hi`), Gujarati (`gu`), Gurmukhi (`pa`), Bengali (`bn`),
//! Odia (`or`), Tamil (`tam`), Telugu (`te`), Kannada (`kn`),
//! Malayalam (`ml`), Urdu/Arabic (`ur`) and Latin (`en`).
//!
//! # Example
//!
//! ```rust
//! use scriptid_core::{Config, Language, LanguageCache, ScriptDetector};
//!
//! let config = Config::builder().sample_chars(6).build().unwrap();
//! let mut detector = ScriptDetector::with_cache(config, LanguageCache::in_memory());
//!
//! let result = detector.classify(Some("रमेश"));
//! assert_eq!(result.language, Language::Hindi);
//! assert_eq!(result.score, 1.0);
//!
//! let labels = detector.annotate(&["Ramesh", "ரமேஷ்", "Ramesh"]).unwrap();
//! assert_eq!(labels, vec![Language::English, Language::Tamil, Language::English]);
//! ```

pub mod annotator;
pub mod cache;
pub mod classifier;
pub mod config;
pub mod error;
pub mod language;
pub mod ranges;

pub use annotator::{BatchSession, ColumnStats, ScriptDetector};
pub use cache::{FileStore, LanguageCache, MemoryStore, SnapshotStore};
pub use classifier::{is_significant, Classification, Classifier};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use language::Language;
pub use ranges::{language_ranges, lookup_language, CodePointRange, UNICODE_RANGES};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
