//! Physical-key mapping between US QWERTY and Russian ЙЦУКЕН.

use super::{
    script::{Script, fold_lower, fold_upper},
    token::Token,
};

// Unshifted letter keys, aligned by physical position.
const EN_KEYS: &str = "qwertyuiop[]asdfghjkl;'zxcvbnm,.`";
const RU_KEYS: &str = "йцукенгшщзхъфывапролджэячсмитьбюё";

/// One direction of the key table: `from[i]` sits on the same key as `to[i]`.
#[derive(Copy, Clone, Debug)]
pub struct CharMap {
    from: &'static str,
    to: &'static str,
}

impl CharMap {
    const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }

    /// Character on the same physical key, if the key is in the table.
    #[must_use]
    pub fn lookup(&self, ch: char) -> Option<char> {
        self.from
            .chars()
            .zip(self.to.chars())
            .find_map(|(f, t)| (f == ch).then_some(t))
    }

    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> {
        self.from.chars().zip(self.to.chars())
    }
}

pub const RU_TO_EN: CharMap = CharMap::new(RU_KEYS, EN_KEYS);
pub const EN_TO_RU: CharMap = CharMap::new(EN_KEYS, RU_KEYS);

/// Direction of a layout correction.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    RuToEn,
    EnToRu,
}

impl Direction {
    #[must_use]
    pub const fn source(self) -> Script {
        match self {
            Direction::RuToEn => Script::Cyrillic,
            Direction::EnToRu => Script::Latin,
        }
    }

    #[must_use]
    pub const fn target(self) -> Script {
        match self {
            Direction::RuToEn => Script::Latin,
            Direction::EnToRu => Script::Cyrillic,
        }
    }

    #[must_use]
    pub const fn table(self) -> CharMap {
        match self {
            Direction::RuToEn => RU_TO_EN,
            Direction::EnToRu => EN_TO_RU,
        }
    }
}

fn is_upper_in(ch: char, script: Script) -> bool {
    match script {
        Script::Latin => ch.is_ascii_uppercase(),
        Script::Cyrillic => ch != fold_lower(ch),
    }
}

fn lower_in(ch: char, script: Script) -> char {
    match script {
        Script::Latin => ch.to_ascii_lowercase(),
        Script::Cyrillic => fold_lower(ch),
    }
}

fn upper_in(ch: char, script: Script) -> char {
    match script {
        // Keys like `[` or `,` have no case on the Latin side.
        Script::Latin if ch.is_ascii_lowercase() => ch.to_ascii_uppercase(),
        Script::Latin => ch,
        Script::Cyrillic => fold_upper(ch),
    }
}

/// Maps a single character typed on the source layout to the character the
/// same key produces on the target layout, preserving case.
#[must_use]
pub fn map_char(ch: char, direction: Direction) -> char {
    let source = direction.source();
    let upper = is_upper_in(ch, source);
    let lower = lower_in(ch, source);
    let mapped = direction.table().lookup(lower).unwrap_or(lower);

    if upper {
        upper_in(mapped, direction.target())
    } else {
        mapped
    }
}

/// Retypes `token` as if its keys had been pressed on the other layout.
///
/// Output has the same length as the input. Characters with no key in the
/// table map to themselves.
#[must_use]
pub fn map_token(token: &Token, direction: Direction) -> Token {
    token.chars().map(|ch| map_char(ch, direction)).collect()
}
