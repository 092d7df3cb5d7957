//! Tuning constants for scoring and the correction decision.
//!
//! The numbers are empirical. They are kept together here so they can be
//! retuned without touching the scoring or decision code.

use crate::text::{Language, Script};

/// Tokens shorter than this are never corrected.
pub const MIN_TOKEN_CHARS: usize = 3;

/// How long the last correction can be toggled, refreshed on every toggle.
pub const LAST_FIX_WINDOW_MS: u64 = 30_000;

pub const NO_SCRIPT_LETTERS_SCORE: i32 = -1000;
pub const FOREIGN_LETTERS_SCORE: i32 = -500;

pub const COMMON_BIGRAM_WEIGHT: i32 = 3;
pub const INVALID_BIGRAM_WEIGHT: i32 = 8;

pub const SPARSE_VOWELS_MIN_LEN: usize = 4;
pub const SPARSE_VOWELS_RATIO: f64 = 0.20;
pub const SPARSE_VOWELS_PENALTY: i32 = 6;

pub const NO_VOWELS_MIN_LEN: usize = 6;
pub const NO_VOWELS_RATIO: f64 = 0.15;
pub const NO_VOWELS_PENALTY: i32 = 10;

pub const DENSE_VOWELS_PENALTY: i32 = 3;

/// Decision thresholds for a token of `len` chars whose own-script score is
/// `base`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Thresholds {
    pub min_mapped: i32,
    pub min_diff: i32,
}

impl Thresholds {
    #[must_use]
    pub fn for_token(len: usize, base: i32, mixed_scripts: bool) -> Self {
        let min_mapped = if len <= 4 { 6 } else { 8 };

        let mut min_diff = if len <= 5 { 4 } else { 6 };
        if base <= 6 {
            min_diff = 3;
        }
        if mixed_scripts {
            min_diff = 2;
        }

        Self {
            min_mapped,
            min_diff,
        }
    }
}

/// Static scoring data for one language.
#[derive(Debug)]
pub struct LanguageProfile {
    pub script: Script,
    pub vowels: &'static [char],
    pub common_bigrams: &'static [[char; 2]],
    pub invalid_bigrams: &'static [[char; 2]],
    /// Above this vowel ratio the word looks like a vowel mash.
    pub max_vowel_ratio: f64,
}

#[must_use]
pub fn profile(lang: Language) -> &'static LanguageProfile {
    match lang {
        Language::English => &ENGLISH,
        Language::Russian => &RUSSIAN,
    }
}

static ENGLISH: LanguageProfile = LanguageProfile {
    script: Script::Latin,
    vowels: &['a', 'e', 'i', 'o', 'u', 'y'],
    common_bigrams: &[
        ['t', 'h'], ['h', 'e'], ['i', 'n'], ['e', 'r'], ['a', 'n'],
        ['r', 'e'], ['o', 'n'], ['a', 't'], ['e', 'n'], ['n', 'd'],
        ['t', 'i'], ['e', 's'], ['o', 'r'], ['t', 'e'], ['o', 'f'],
        ['e', 'd'], ['i', 's'], ['i', 't'], ['a', 'l'], ['a', 'r'],
        ['s', 't'], ['t', 'o'], ['n', 't'], ['n', 'g'], ['s', 'e'],
        ['h', 'a'], ['a', 's'], ['o', 'u'], ['i', 'o'], ['l', 'e'],
        // short words
        ['o', 'o'], ['c', 'k'], ['o', 'k'], ['b', 'o'], ['e', 'e'],
    ],
    invalid_bigrams: &[],
    max_vowel_ratio: 0.75,
};

static RUSSIAN: LanguageProfile = LanguageProfile {
    script: Script::Cyrillic,
    vowels: &['а', 'е', 'ё', 'и', 'о', 'у', 'ы', 'э', 'ю', 'я'],
    common_bigrams: &[
        ['с', 'т'], ['н', 'о'], ['т', 'о'], ['н', 'а'], ['е', 'н'],
        ['о', 'в'], ['н', 'и'], ['р', 'а'], ['в', 'о'], ['к', 'о'],
        ['п', 'р'], ['п', 'о'], ['е', 'р'], ['р', 'о'], ['о', 'с'],
        ['а', 'л'], ['т', 'а'], ['в', 'а'], ['н', 'е'], ['л', 'и'],
        ['р', 'е'],
    ],
    invalid_bigrams: &[
        ['щ', 'щ'], ['ъ', 'ъ'], ['ы', 'ы'], ['й', 'й'],
        ['ь', 'ъ'], ['ъ', 'ь'],
        // жи/ши are spelled with и
        ['ж', 'ы'], ['ш', 'ы'],
    ],
    max_vowel_ratio: 0.80,
};
