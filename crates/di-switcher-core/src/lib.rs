//! Wrong-layout autocorrect engine.
//!
//! Watches a stream of key events, rebuilds the word being typed and, when a
//! word typed on the Russian layout reads better as English (or the other way
//! around), retypes it in the other script. The last correction can be
//! flipped back and forth with a toggle key for a short while.
//!
//! Nothing here talks to the OS. Hosts implement [`engine::InputPort`] and
//! feed [`engine::KeyEvent`]s into an [`engine::Session`].

pub mod engine;
pub mod outcome;
pub mod policy;
pub mod text;

pub use engine::{HookDecision, InputPort, KeyEvent, Session};
pub use text::{Language, Token};

#[cfg(test)]
mod tests;
