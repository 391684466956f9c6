//! Script/language codes recognised by the detector

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Script families the detector can assign to a token.
///
/// Variant order is the declaration order of the range table and therefore
/// the tie-break order: when two scripts end a scan with the same count, the
/// one declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Language {
    /// Devanagari (Hindi, Marathi)
    Hindi,
    /// Gujarati
    Gujarati,
    /// Gurmukhi (Punjabi)
    Punjabi,
    /// Bengali / Assamese
    Bengali,
    /// Odia
    Odia,
    /// Tamil
    Tamil,
    /// Telugu
    Telugu,
    /// Kannada
    Kannada,
    /// Malayalam
    Malayalam,
    /// Urdu / Arabic
    Urdu,
    /// Latin / ASCII
    #[default]
    English,
}

impl Language {
    /// Number of supported languages
    pub const COUNT: usize = 11;

    /// All languages in table order
    pub const ALL: [Language; Language::COUNT] = [
        Language::Hindi,
        Language::Gujarati,
        Language::Punjabi,
        Language::Bengali,
        Language::Odia,
        Language::Tamil,
        Language::Telugu,
        Language::Kannada,
        Language::Malayalam,
        Language::Urdu,
        Language::English,
    ];

    /// Get the short language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Hindi => "hi",
            Language::Gujarati => "gu",
            Language::Punjabi => "pa",
            Language::Bengali => "bn",
            Language::Odia => "or",
            Language::Tamil => "tam",
            Language::Telugu => "te",
            Language::Kannada => "kn",
            Language::Malayalam => "ml",
            Language::Urdu => "ur",
            Language::English => "en",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            Language::Hindi => "Hindi",
            Language::Gujarati => "Gujarati",
            Language::Punjabi => "Punjabi",
            Language::Bengali => "Bengali",
            Language::Odia => "Odia",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
            Language::Kannada => "Kannada",
            Language::Malayalam => "Malayalam",
            Language::Urdu => "Urdu",
            Language::English => "English",
        }
    }

    /// Position of this language in table order
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Create a Language from a code or name, if recognised
    pub fn from_code(code: &str) -> Option<Self> {
        let lang = match code.trim().to_lowercase().as_str() {
            "hi" | "hin" | "hindi" | "devanagari" => Language::Hindi,
            "gu" | "guj" | "gujarati" => Language::Gujarati,
            "pa" | "pan" | "punjabi" | "gurmukhi" => Language::Punjabi,
            "bn" | "ben" | "bengali" | "assamese" => Language::Bengali,
            "or" | "ori" | "odia" | "oriya" => Language::Odia,
            "tam" | "ta" | "tamil" => Language::Tamil,
            "te" | "tel" | "telugu" => Language::Telugu,
            "kn" | "kan" | "kannada" => Language::Kannada,
            "ml" | "mal" | "malayalam" => Language::Malayalam,
            "ur" | "urd" | "urdu" | "arabic" => Language::Urdu,
            "en" | "eng" | "english" | "latin" => Language::English,
            _ => return None,
        };
        Some(lang)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| Error::InvalidLanguage(s.to_string()))
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.code().to_string()
    }
}

impl TryFrom<String> for Language {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn test_table_order_matches_index() {
        for (i, lang) in Language::ALL.iter().enumerate() {
            assert_eq!(lang.index(), i);
        }
    }

    #[test]
    fn test_from_str_accepts_names_case_insensitively() {
        assert_eq!("Tamil".parse::<Language>().unwrap(), Language::Tamil);
        assert_eq!(" EN ".parse::<Language>().unwrap(), Language::English);
        assert_eq!("devanagari".parse::<Language>().unwrap(), Language::Hindi);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid language: klingon");
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::Urdu.to_string(), "ur");
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_serde_uses_code_strings() {
        let json = serde_json::to_string(&Language::Malayalam).unwrap();
        assert_eq!(json, "\"ml\"");
        let back: Language = serde_json::from_str("\"kn\"").unwrap();
        assert_eq!(back, Language::Kannada);
        assert!(serde_json::from_str::<Language>("\"xx\"").is_err());
    }
}
