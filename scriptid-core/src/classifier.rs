//! Bounded-scan token classifier

use crate::cache::LanguageCache;
use crate::language::Language;
use crate::ranges::lookup_language;

/// Result of classifying one token
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Winning language
    pub language: Language,
    /// Share of inspected characters attributed to `language`, in [0, 1]
    pub score: f64,
}

impl Classification {
    /// Create a classification result
    pub fn new(language: Language, score: f64) -> Self {
        Self { language, score }
    }
}

/// Check whether a code point takes part in classification
///
/// Spaces, control characters and the U+2000..=U+200F band of spacing and
/// zero-width formatting characters are skipped.
#[inline]
pub fn is_significant(ch: char) -> bool {
    let cp = ch as u32;
    !(cp <= 0x20 || (0x2000..=0x200F).contains(&cp))
}

/// Per-token script classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classifier {
    sample_chars: usize,
    default_language: Language,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(crate::config::defaults::SAMPLE_CHARS, Language::English)
    }
}

impl Classifier {
    /// Create a classifier inspecting at most `sample_chars` significant characters
    pub fn new(sample_chars: usize, default_language: Language) -> Self {
        Self {
            sample_chars: sample_chars.max(1),
            default_language,
        }
    }

    /// Maximum significant characters inspected per token
    pub fn sample_chars(&self) -> usize {
        self.sample_chars
    }

    /// Language reported for empty or unrecognised tokens
    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Classify a token by scanning its leading significant characters
    pub fn classify(&self, token: Option<&str>) -> Classification {
        self.classify_cached(token, None)
    }

    /// Classify a token, consulting `cache` before scanning
    ///
    /// A cache hit always reports full confidence.
    pub fn classify_cached(
        &self,
        token: Option<&str>,
        cache: Option<&LanguageCache>,
    ) -> Classification {
        let text = match token {
            Some(text) if !text.is_empty() => text,
            _ => return self.fallback(),
        };

        if let Some(language) = cache.and_then(|c| c.lookup(text)) {
            return Classification::new(language, 1.0);
        }

        self.scan(text)
    }

    fn scan(&self, text: &str) -> Classification {
        let mut counts = [0usize; Language::COUNT];
        let mut total = 0usize;
        let mut resolved = false;

        for ch in text.chars().filter(|&ch| is_significant(ch)) {
            total += 1;
            if let Some(language) = lookup_language(ch as u32) {
                counts[language.index()] += 1;
                resolved = true;
            }
            if total >= self.sample_chars {
                break;
            }
        }

        if !resolved {
            return self.fallback();
        }

        // Strict comparison keeps the earliest language in table order on ties
        let mut winner = 0;
        for (i, &count) in counts.iter().enumerate().skip(1) {
            if count > counts[winner] {
                winner = i;
            }
        }

        Classification::new(
            Language::ALL[winner],
            counts[winner] as f64 / total as f64,
        )
    }

    #[inline]
    fn fallback(&self) -> Classification {
        Classification::new(self.default_language, 0.0)
    }
}
