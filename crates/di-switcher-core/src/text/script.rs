//! Character classification for the two supported scripts.

/// Language a token can be scored in and corrected into.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Language {
    English,
    Russian,
}

impl Language {
    #[must_use]
    pub const fn script(self) -> Script {
        match self {
            Language::English => Script::Latin,
            Language::Russian => Script::Cyrillic,
        }
    }

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Language::English => Language::Russian,
            Language::Russian => Language::English,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Script {
    Latin,
    Cyrillic,
}

impl Script {
    #[must_use]
    pub const fn contains(self, ch: char) -> bool {
        match self {
            Script::Latin => is_latin_letter(ch),
            Script::Cyrillic => is_cyrillic_letter(ch),
        }
    }
}

#[must_use]
pub const fn is_latin_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Cyrillic and Cyrillic Supplement blocks.
#[must_use]
pub const fn is_cyrillic_letter(ch: char) -> bool {
    matches!(ch, '\u{0400}'..='\u{052F}')
}

/// Letters and digits build tokens; everything else ends them.
#[must_use]
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric()
}

/// Single-char lowercase. Characters whose lowercase form expands to several
/// chars are returned unchanged.
#[must_use]
pub fn fold_lower(ch: char) -> char {
    if ch.is_ascii() {
        return ch.to_ascii_lowercase();
    }
    let mut it = ch.to_lowercase();
    match (it.next(), it.next()) {
        (Some(lower), None) => lower,
        _ => ch,
    }
}

/// Single-char uppercase, same contract as [`fold_lower`].
#[must_use]
pub fn fold_upper(ch: char) -> char {
    if ch.is_ascii() {
        return ch.to_ascii_uppercase();
    }
    let mut it = ch.to_uppercase();
    match (it.next(), it.next()) {
        (Some(upper), None) => upper,
        _ => ch,
    }
}

/// Per-script character census of a token.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LetterCounts {
    pub latin: usize,
    pub cyrillic: usize,
    /// Alphabetic characters of any other script.
    pub other: usize,
    pub digits: usize,
}

impl LetterCounts {
    #[must_use]
    pub fn of(chars: &[char]) -> Self {
        let mut counts = Self::default();
        for &ch in chars {
            if is_latin_letter(ch) {
                counts.latin += 1;
            } else if is_cyrillic_letter(ch) {
                counts.cyrillic += 1;
            } else if ch.is_alphabetic() {
                counts.other += 1;
            }

            if ch.is_numeric() {
                counts.digits += 1;
            }
        }
        counts
    }

    #[must_use]
    pub fn in_script(&self, script: Script) -> usize {
        match script {
            Script::Latin => self.latin,
            Script::Cyrillic => self.cyrillic,
        }
    }

    /// Letters that do not belong to `script`.
    #[must_use]
    pub fn foreign_to(&self, script: Script) -> usize {
        match script {
            Script::Latin => self.cyrillic + self.other,
            Script::Cyrillic => self.latin + self.other,
        }
    }

    #[must_use]
    pub fn is_mixed(&self) -> bool {
        self.latin > 0 && self.cyrillic > 0
    }
}
