//! # signpose-translate
//!
//! The text→gloss collaborator: turns free spoken-language text into an
//! ordered list of [`Gloss`] sentences for the resolution engine.
//!
//! Glossing strategies implement the [`TextToGloss`] trait and live in a
//! [`GlosserRegistry`] — a fixed table constructed at startup mapping a
//! strategy identifier to its implementation. Callers pass the
//! identifier; nothing is loaded dynamically.
//!
//! ## Built-in strategies
//!
//! - `"simple"` — [`SimpleGlosser`]: whitespace tokenization, lowercase.
//! - `"dictionary"` — [`DictionaryGlosser`]: greedy longest-phrase
//!   matching against a vocabulary seeded from the lexicon.
//!
//! A remote-model glosser would plug into the same registry; it is an
//! external collaborator and not part of this crate.
//!
//! ## Architecture Rules
//!
//! - No network code — strategies here are deterministic and local.
//! - Depends only on `signpose-core`.

mod dictionary;
mod registry;
mod simple;

pub use dictionary::DictionaryGlosser;
pub use registry::GlosserRegistry;
pub use simple::SimpleGlosser;

use signpose_core::{Gloss, SignError};

/// Capability for turning free text into gloss sentences.
///
/// Implementations return one [`Gloss`] per input sentence, in reading
/// order. Empty input text is an error; text in which no token survives
/// glossing yields `Ok` with an empty list — the caller decides whether
/// that is fatal.
pub trait TextToGloss: Send + Sync {
    /// Glosses `text` written in spoken language `language`.
    fn text_to_gloss(&self, text: &str, language: &str) -> Result<Vec<Gloss>, SignError>;
}

/// Splits text into sentence chunks on terminal punctuation.
pub(crate) fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '?', '!'])
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect()
}

/// Strips surrounding punctuation (commas, quotes, brackets) from a token.
pub(crate) fn strip_token(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}
