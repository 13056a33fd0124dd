//! # signpose-lexicon
//!
//! The lexicon — tabular datasets mapping words to pose clip references,
//! per (spoken language, signed language) pair.
//!
//! A lexicon is a directory of CSV files. [`LexiconIndex::build`] scans
//! the directory once into a nested read-only lookup structure; lookups
//! then go through [`LexiconIndex::records_for`] and pick one row via a
//! [`RowSelector`].
//!
//! ## Architecture Rules
//!
//! - The index is immutable after construction — safe for concurrent
//!   reads without locking. Rebuilds build a fresh index and swap it.
//! - Malformed rows are skipped with a warning; a partial lexicon is a
//!   smaller lookup space, never corrupt output.
//! - Depends only on `signpose-core`.

mod index;
mod record;
mod select;

pub use index::LexiconIndex;
pub use record::LexiconRecord;
pub use select::{BestMatchSelector, RowSelector};
