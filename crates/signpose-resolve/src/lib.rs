//! # signpose-resolve
//!
//! The gloss-to-pose resolution engine: given an ordered list of gloss
//! sentences, find a matching pre-recorded pose clip for each token —
//! falling back to letter-by-letter fingerspelling when no whole-word
//! clip exists — and stitch the clips into one continuous pose sequence.
//!
//! ## Components
//!
//! - [`PoseLookup`] — the capability of resolving one token to a clip
//! - [`WholeWordLookup`] — index-backed exact match
//! - [`FingerspellingLookup`] — character-by-character decomposition
//! - [`GlossToPose`] — the orchestrator applying the fallback policy
//!   and sentence/final concatenation
//!
//! ## Architecture Rules
//!
//! - Synchronous and single-threaded per invocation; no operation
//!   spawns work or suspends. Callers that need responsiveness run the
//!   whole pipeline on a background worker.
//! - No partial results: the first unresolved word fails the whole
//!   resolution, identifying the word and its position.
//! - Depends on `signpose-core` and `signpose-lexicon`.

mod fingerspell;
mod lookup;
mod pipeline;

pub use fingerspell::{decompose, FingerspellingLookup};
pub use lookup::{PoseLookup, WholeWordLookup};
pub use pipeline::GlossToPose;
