use super::event::KeyEvent;
use crate::{
    outcome::PortError,
    text::{Language, Token},
};

/// One atomic edit of the focused document: erase `backspaces` characters
/// left of the caret, then type `text` followed by `boundary`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Replacement {
    pub backspaces: usize,
    pub text: Token,
    pub boundary: Option<char>,
}

impl Replacement {
    /// Everything the replacement types, in order.
    pub fn typed_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars().chain(self.boundary)
    }
}

/// What the engine needs from the host.
///
/// Implementations are called from inside the key event callback and must
/// return quickly. Injected input has to come back through
/// [`super::Session::handle_event`] tagged [`super::Origin::Synthetic`].
pub trait InputPort {
    /// Monotonic clock in milliseconds.
    fn now_ms(&self) -> u64;

    /// Character the key produces in the foreground application's current
    /// layout, or `None` for keys that do not type exactly one printable
    /// character.
    fn resolve_char(&mut self, event: &KeyEvent) -> Option<char>;

    /// Asks the focused application to switch to a layout for `lang`.
    ///
    /// # Errors
    /// The request could not be delivered. Callers treat this as best-effort.
    fn request_layout(&mut self, lang: Language) -> Result<(), PortError>;

    /// Injects `replacement` as one ordered batch.
    ///
    /// # Errors
    /// The host refused or only partly sent the batch.
    fn send_replacement(&mut self, replacement: &Replacement) -> Result<(), PortError>;
}
