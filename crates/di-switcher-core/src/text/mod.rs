pub mod mapping;
pub mod script;
pub mod scoring;
pub mod token;

pub use mapping::{Direction, map_token};
pub use script::{Language, LetterCounts, Script};
pub use scoring::score;
pub use token::{TOKEN_MAX_CHARS, Token};
