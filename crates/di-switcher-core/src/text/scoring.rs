//! "Does this look like a word" heuristic.
//!
//! Cheap and explainable: common bigram hits, a few impossible bigrams, a
//! length bonus and vowel-ratio sanity checks. Not a language model.

use super::script::{LetterCounts, Script};
use crate::{
    policy::{self, LanguageProfile},
    text::Language,
};

fn count_bigrams(chars: &[char], table: &[[char; 2]]) -> i32 {
    let hits = chars
        .windows(2)
        .filter(|pair| table.iter().any(|bg| bg[..] == pair[..]))
        .count();
    i32::try_from(hits).unwrap_or(i32::MAX)
}

fn vowel_ratio(chars: &[char], script: Script, vowels: &[char]) -> f64 {
    let mut letters = 0u32;
    let mut vowel_hits = 0u32;
    for &ch in chars {
        if !script.contains(ch) {
            continue;
        }
        letters += 1;
        if vowels.contains(&ch) {
            vowel_hits += 1;
        }
    }

    if letters == 0 {
        return 0.0;
    }
    f64::from(vowel_hits) / f64::from(letters)
}

fn vowel_penalty(len: usize, ratio: f64, profile: &LanguageProfile) -> i32 {
    let mut penalty = 0;
    if len >= policy::SPARSE_VOWELS_MIN_LEN && ratio < policy::SPARSE_VOWELS_RATIO {
        penalty += policy::SPARSE_VOWELS_PENALTY;
    }
    if len >= policy::NO_VOWELS_MIN_LEN && ratio < policy::NO_VOWELS_RATIO {
        penalty += policy::NO_VOWELS_PENALTY;
    }
    if ratio > profile.max_vowel_ratio {
        penalty += policy::DENSE_VOWELS_PENALTY;
    }
    penalty
}

/// Plausibility of `lower` (already lowercased) as a word of `lang`.
///
/// Returns [`policy::NO_SCRIPT_LETTERS_SCORE`] when the token has no letters
/// of the language's script and [`policy::FOREIGN_LETTERS_SCORE`] when it
/// also carries letters of another script. Pure: equal inputs always give
/// equal scores.
#[must_use]
pub fn score(lower: &[char], lang: Language) -> i32 {
    let profile = policy::profile(lang);
    let counts = LetterCounts::of(lower);

    if counts.in_script(profile.script) == 0 {
        return policy::NO_SCRIPT_LETTERS_SCORE;
    }
    if counts.foreign_to(profile.script) > 0 {
        return policy::FOREIGN_LETTERS_SCORE;
    }

    let len = i32::try_from(lower.len()).unwrap_or(i32::MAX);
    let common = count_bigrams(lower, profile.common_bigrams);
    let invalid = count_bigrams(lower, profile.invalid_bigrams);
    let ratio = vowel_ratio(lower, profile.script, profile.vowels);

    common * policy::COMMON_BIGRAM_WEIGHT - invalid * policy::INVALID_BIGRAM_WEIGHT + len
        - vowel_penalty(lower.len(), ratio, profile)
}
