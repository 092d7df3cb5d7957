use std::fmt;

use super::script::fold_lower;

/// Longest word the accumulator tracks.
pub const TOKEN_MAX_CHARS: usize = 64;

/// Fixed-capacity character buffer.
///
/// Lives on the stack so the hook callback never allocates. Pushing past
/// capacity drops the character and marks the token as overflowed: from then
/// on its content no longer matches what is on screen, and it must not be
/// corrected until [`Token::clear`] is called.
#[derive(Clone, Copy)]
pub struct Token {
    buf: [char; TOKEN_MAX_CHARS],
    len: usize,
    overflowed: bool,
}

impl Token {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: ['\0'; TOKEN_MAX_CHARS],
            len: 0,
            overflowed: false,
        }
    }

    /// Appends `ch`. Returns `false` if the token was full and `ch` was dropped.
    pub fn push(&mut self, ch: char) -> bool {
        if self.len == TOKEN_MAX_CHARS {
            self.overflowed = true;
            return false;
        }
        self.buf[self.len] = ch;
        self.len += 1;
        true
    }

    pub fn pop(&mut self) -> Option<char> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.buf[self.len])
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.overflowed = false;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn is_overflowed(&self) -> bool {
        self.overflowed
    }

    #[must_use]
    pub fn as_chars(&self) -> &[char] {
        &self.buf[..self.len]
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.as_chars().iter().copied()
    }

    #[must_use]
    pub fn lowercased(&self) -> Self {
        let mut out = *self;
        for ch in &mut out.buf[..out.len] {
            *ch = fold_lower(*ch);
        }
        out
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.as_chars() == other.as_chars()
    }
}

impl Eq for Token {}

impl FromIterator<char> for Token {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut token = Self::new();
        for ch in iter {
            token.push(ch);
        }
        token
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write as _;
        for ch in self.chars() {
            f.write_char(ch)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({:?}", self.to_string())?;
        if self.overflowed {
            f.write_str(", overflowed")?;
        }
        f.write_str(")")
    }
}
