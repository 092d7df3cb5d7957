//! Whether a finished token should be retyped on the other layout.

use crate::{
    outcome::SkipReason,
    policy::{self, Thresholds},
    text::{Direction, Language, LetterCounts, Token, map_token, score},
};

/// A positive decision, with the numbers that led to it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Correction {
    /// The token retyped on the other layout, case preserved.
    pub mapped: Token,
    pub direction: Direction,
    /// Language the correction moves into.
    pub target: Language,
    /// Score of the token in its own script.
    pub base: i32,
    /// Score of `mapped` in the target language.
    pub mapped_score: i32,
}

impl Correction {
    #[must_use]
    pub fn diff(&self) -> i32 {
        self.mapped_score - self.base
    }
}

/// Decides whether `token` was typed on the wrong layout.
///
/// # Errors
/// Returns the [`SkipReason`] for every token that must be left alone:
/// shorter than [`policy::MIN_TOKEN_CHARS`], truncated, containing digits or
/// letters of a third script, or not scoring well enough after mapping.
pub fn evaluate(token: &Token) -> Result<Correction, SkipReason> {
    if token.len() < policy::MIN_TOKEN_CHARS {
        return Err(SkipReason::TooShort);
    }
    if token.is_overflowed() {
        return Err(SkipReason::Overflowed);
    }

    let lower = token.lowercased();
    let counts = LetterCounts::of(lower.as_chars());

    // Likely an identifier ("C3PO", "R2D2").
    if counts.digits > 0 {
        return Err(SkipReason::HasDigits);
    }
    if counts.other > 0 {
        return Err(SkipReason::ForeignScript);
    }

    let (direction, own) = if counts.cyrillic > 0 {
        (Direction::RuToEn, Language::Russian)
    } else if counts.latin > 0 {
        (Direction::EnToRu, Language::English)
    } else {
        return Err(SkipReason::NoLetters);
    };
    let target = own.other();

    let base = score(lower.as_chars(), own);
    let mapped = map_token(token, direction);
    let mapped_score = score(mapped.lowercased().as_chars(), target);

    let correction = Correction {
        mapped,
        direction,
        target,
        base,
        mapped_score,
    };

    let th = Thresholds::for_token(token.len(), base, counts.is_mixed());
    tracing::trace!(
        %token,
        %mapped,
        base,
        mapped_score,
        min_mapped = th.min_mapped,
        min_diff = th.min_diff,
        "scored"
    );
    if mapped_score < th.min_mapped {
        return Err(SkipReason::MappedScoreLow);
    }
    if correction.diff() < th.min_diff {
        return Err(SkipReason::NotBetterEnough);
    }

    Ok(correction)
}
