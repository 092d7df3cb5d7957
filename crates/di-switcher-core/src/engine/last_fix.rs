//! The most recent correction, kept so it can be flipped back and forth.

use super::port::Replacement;
use crate::{
    policy::LAST_FIX_WINDOW_MS,
    text::{Language, Token},
};

/// What a successful toggle wants done.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Toggle {
    pub replacement: Replacement,
    /// Layout matching the text being put back.
    pub layout: Language,
    /// `true` if the toggle put the corrected text back in place.
    pub corrected_applied: bool,
}

/// Single slot, overwritten by every correction.
#[derive(Copy, Clone, Debug)]
pub struct LastFix {
    active: bool,
    stamp_ms: u64,
    original: Token,
    corrected: Token,
    boundary: Option<char>,
    corrected_to: Language,
    corrected_applied: bool,
}

impl LastFix {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: false,
            stamp_ms: 0,
            original: Token::new(),
            corrected: Token::new(),
            boundary: None,
            corrected_to: Language::English,
            corrected_applied: false,
        }
    }

    /// Remembers a correction that has just been typed.
    pub fn record(
        &mut self,
        original: Token,
        corrected: Token,
        boundary: Option<char>,
        corrected_to: Language,
        now_ms: u64,
    ) {
        *self = Self {
            active: true,
            stamp_ms: now_ms,
            original,
            corrected,
            boundary,
            corrected_to,
            corrected_applied: true,
        };
    }

    pub fn invalidate(&mut self) {
        self.active = false;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn corrected_applied(&self) -> bool {
        self.corrected_applied
    }

    #[must_use]
    pub fn original(&self) -> &Token {
        &self.original
    }

    #[must_use]
    pub fn corrected(&self) -> &Token {
        &self.corrected
    }

    #[must_use]
    pub fn boundary(&self) -> Option<char> {
        self.boundary
    }

    fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.stamp_ms) > LAST_FIX_WINDOW_MS
    }

    /// Swaps the displayed variant for the other one.
    ///
    /// Returns `None` (and drops the record) when there is nothing live to
    /// toggle: no record, expired window, or no boundary after the word. On
    /// success the window restarts at `now_ms`.
    pub fn toggle(&mut self, now_ms: u64) -> Option<Toggle> {
        if !self.active {
            return None;
        }
        if self.is_expired(now_ms) {
            tracing::trace!(age_ms = now_ms.saturating_sub(self.stamp_ms), "last fix expired");
            self.active = false;
            return None;
        }
        let Some(boundary) = self.boundary else {
            self.active = false;
            return None;
        };

        let want_corrected = !self.corrected_applied;
        let (target, current, layout) = if want_corrected {
            (self.corrected, self.original, self.corrected_to)
        } else {
            (self.original, self.corrected, self.corrected_to.other())
        };

        self.corrected_applied = want_corrected;
        self.stamp_ms = now_ms;

        Some(Toggle {
            replacement: Replacement {
                backspaces: current.len() + 1,
                text: target,
                boundary: Some(boundary),
            },
            layout,
            corrected_applied: want_corrected,
        })
    }
}

impl Default for LastFix {
    fn default() -> Self {
        Self::new()
    }
}
