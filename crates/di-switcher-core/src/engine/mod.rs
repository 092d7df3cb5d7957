//! Key event intake, token accumulation and the correction state machine.

pub mod decision;
pub mod event;
pub mod last_fix;
pub mod port;

pub use decision::{Correction, evaluate};
pub use event::{HookDecision, KeyEvent, KeyKind, Modifiers, Origin};
pub use last_fix::{LastFix, Toggle};
pub use port::{InputPort, Replacement};

use self::event::{PANIC_VK, TOGGLE_VK, VK_BACK, VK_ESCAPE};
use crate::{
    policy::MIN_TOKEN_CHARS,
    text::{Language, Token, script::is_word_char},
};

/// All mutable engine state.
///
/// Owned by whoever runs the key event callback and only ever touched from
/// there, so no locking is involved.
#[derive(Debug, Default)]
pub struct Session {
    token: Token,
    last_fix: LastFix,
    /// Key whose key-up must be eaten because its key-down was.
    swallow_keyup: Option<u32>,
}

impl Session {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            token: Token::new(),
            last_fix: LastFix::new(),
            swallow_keyup: None,
        }
    }

    #[must_use]
    pub fn token(&self) -> &Token {
        &self.token
    }

    #[must_use]
    pub fn last_fix(&self) -> &LastFix {
        &self.last_fix
    }

    #[must_use]
    pub fn pending_swallow(&self) -> Option<u32> {
        self.swallow_keyup
    }

    /// Processes one event and tells the host whether to forward it.
    pub fn handle_event<P: InputPort + ?Sized>(
        &mut self,
        port: &mut P,
        event: &KeyEvent,
    ) -> HookDecision {
        // Our own replacements come back through here.
        if event.origin == Origin::Synthetic {
            return HookDecision::Pass;
        }

        match event.kind {
            KeyKind::Up => self.handle_keyup(event),
            KeyKind::Down => self.handle_keydown(port, event),
        }
    }

    fn handle_keyup(&mut self, event: &KeyEvent) -> HookDecision {
        if self.swallow_keyup == Some(event.vk) {
            self.swallow_keyup = None;
            tracing::trace!(vk = event.vk, "boundary key-up swallowed");
            return HookDecision::Swallow;
        }
        HookDecision::Pass
    }

    fn handle_keydown<P: InputPort + ?Sized>(
        &mut self,
        port: &mut P,
        event: &KeyEvent,
    ) -> HookDecision {
        if event.vk == PANIC_VK && event.mods.is_panic() {
            tracing::info!("panic chord pressed");
            return HookDecision::Exit;
        }

        if event.vk == TOGGLE_VK {
            return if self.try_toggle(port) {
                HookDecision::Swallow
            } else {
                HookDecision::Pass
            };
        }

        if event.mods.is_chord() {
            self.reset();
            return HookDecision::Pass;
        }

        match event.vk {
            VK_BACK => {
                self.last_fix.invalidate();
                let _ = self.token.pop();
                return HookDecision::Pass;
            }
            VK_ESCAPE => {
                self.reset();
                return HookDecision::Pass;
            }
            _ => {}
        }

        if event.is_modifier_key() {
            return HookDecision::Pass;
        }

        match port.resolve_char(event) {
            Some(ch) if is_word_char(ch) => {
                self.last_fix.invalidate();
                if !self.token.push(ch) {
                    tracing::trace!("token full, char dropped");
                }
                HookDecision::Pass
            }
            Some(boundary) => {
                if self.token.len() >= MIN_TOKEN_CHARS
                    && self.apply_correction(port, Some(boundary))
                {
                    self.token.clear();
                    self.swallow_keyup = Some(event.vk);
                    return HookDecision::Swallow;
                }
                self.reset();
                HookDecision::Pass
            }
            None => {
                if self.token.len() >= MIN_TOKEN_CHARS {
                    let _ = self.apply_correction(port, None);
                }
                self.reset();
                HookDecision::Pass
            }
        }
    }

    fn reset(&mut self) {
        self.last_fix.invalidate();
        self.token.clear();
    }

    /// Runs the decision on the current token and, if positive, retypes it.
    ///
    /// `boundary` is the character whose key-down ended the token and is
    /// being held back; it is typed again after the corrected word.
    fn apply_correction<P: InputPort + ?Sized>(
        &mut self,
        port: &mut P,
        boundary: Option<char>,
    ) -> bool {
        let correction = match evaluate(&self.token) {
            Ok(c) => c,
            Err(reason) => {
                tracing::trace!(reason = %reason.as_str(), token = %self.token, "autocorrect skip");
                return false;
            }
        };

        tracing::debug!(
            token = %self.token,
            corrected = %correction.mapped,
            direction = ?correction.direction,
            base = correction.base,
            mapped = correction.mapped_score,
            diff = correction.diff(),
            "autocorrect"
        );

        self.last_fix.record(
            self.token,
            correction.mapped,
            boundary,
            correction.target,
            port.now_ms(),
        );

        request_layout(port, correction.target);

        // The boundary key-down is swallowed, so only the token is on screen.
        let replacement = Replacement {
            backspaces: self.token.len(),
            text: correction.mapped,
            boundary,
        };
        send(port, &replacement);
        true
    }

    /// Flips the last correction if it is still live. Returns `true` when
    /// something was retyped.
    pub fn try_toggle<P: InputPort + ?Sized>(&mut self, port: &mut P) -> bool {
        let Some(toggle) = self.last_fix.toggle(port.now_ms()) else {
            tracing::trace!("toggle: nothing to flip");
            return false;
        };

        tracing::debug!(
            text = %toggle.replacement.text,
            corrected_applied = toggle.corrected_applied,
            "last fix toggled"
        );

        request_layout(port, toggle.layout);
        send(port, &toggle.replacement);
        true
    }
}

fn request_layout<P: InputPort + ?Sized>(port: &mut P, lang: Language) {
    if let Err(e) = port.request_layout(lang) {
        tracing::warn!(error = %e.as_str(), lang = lang.as_str(), "layout switch request failed");
    }
}

fn send<P: InputPort + ?Sized>(port: &mut P, replacement: &Replacement) {
    if let Err(e) = port.send_replacement(replacement) {
        tracing::warn!(error = %e.as_str(), "replacement injection failed");
    }
}
