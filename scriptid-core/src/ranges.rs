//! Unicode block lookup table
//!
//! Static and allocation-free. Lookups take an ASCII fast path before
//! walking the table in declaration order.

use crate::language::Language;

/// Half-open code point interval `[start, stop)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePointRange {
    /// First code point in the interval
    pub start: u32,
    /// One past the last code point in the interval
    pub stop: u32,
}

impl CodePointRange {
    /// Create a new interval. `start` must be below `stop`.
    pub const fn new(start: u32, stop: u32) -> Self {
        assert!(start < stop, "code point range must be non-empty");
        Self { start, stop }
    }

    /// Check whether a code point falls in this interval
    #[inline]
    pub const fn contains(&self, cp: u32) -> bool {
        self.start <= cp && cp < self.stop
    }
}

/// One row of the table: a language and its intervals in declared order
pub type RangeEntry = (Language, &'static [CodePointRange]);

/// Script block table in tie-break order
pub static UNICODE_RANGES: [RangeEntry; Language::COUNT] = [
    (Language::Hindi, &[CodePointRange::new(0x0900, 0x0980)]),
    (Language::Gujarati, &[CodePointRange::new(0x0A80, 0x0B00)]),
    (Language::Punjabi, &[CodePointRange::new(0x0A00, 0x0A80)]),
    (Language::Bengali, &[CodePointRange::new(0x0980, 0x0A00)]),
    (Language::Odia, &[CodePointRange::new(0x0B00, 0x0B80)]),
    (Language::Tamil, &[CodePointRange::new(0x0B80, 0x0C00)]),
    (Language::Telugu, &[CodePointRange::new(0x0C00, 0x0C80)]),
    (Language::Kannada, &[CodePointRange::new(0x0C80, 0x0D00)]),
    (Language::Malayalam, &[CodePointRange::new(0x0D00, 0x0D80)]),
    (
        Language::Urdu,
        &[
            CodePointRange::new(0x0600, 0x0700),
            CodePointRange::new(0x0750, 0x0780),
        ],
    ),
    (
        Language::English,
        &[
            CodePointRange::new(0x0000, 0x0080),
            CodePointRange::new(0x0080, 0x0100),
        ],
    ),
];

/// Printable ASCII: digits, letters, punctuation and ` \t\n\r\x0b\x0c`
const PRINTABLE_ASCII: [bool; 128] = {
    let mut table = [false; 128];
    let mut cp = 0x21;
    while cp < 0x7F {
        table[cp] = true;
        cp += 1;
    }
    table[b' ' as usize] = true;
    table[b'\t' as usize] = true;
    table[b'\n' as usize] = true;
    table[b'\r' as usize] = true;
    table[0x0B] = true;
    table[0x0C] = true;
    table
};

/// Check the ASCII fast-path set
#[inline]
pub fn is_printable_ascii(cp: u32) -> bool {
    cp < 128 && PRINTABLE_ASCII[cp as usize]
}

/// Resolve the language of a single code point - hot path
///
/// The first language (in table order) with an interval containing `cp`
/// wins, so overlapping blocks resolve deterministically.
#[inline]
pub fn lookup_language(cp: u32) -> Option<Language> {
    if is_printable_ascii(cp) {
        return Some(Language::English);
    }

    first_match(&UNICODE_RANGES, cp)
}

/// Intervals declared for a language
pub fn language_ranges(language: Language) -> &'static [CodePointRange] {
    UNICODE_RANGES[language.index()].1
}

/// Look up the first language in `table` whose intervals contain `cp`
pub(crate) fn first_match(table: &[RangeEntry], cp: u32) -> Option<Language> {
    table
        .iter()
        .find(|(_, ranges)| ranges.iter().any(|r| r.contains(cp)))
        .map(|(lang, _)| *lang)
}
