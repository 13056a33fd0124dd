//! # signpose
//!
//! Facade crate for the signpose workspace: turns gloss sequences into a
//! single continuous pose time-series suitable for rendering into a
//! sign-language video.
//!
//! The work happens in the member crates; this crate re-exports their
//! public surface for callers that want a single dependency:
//!
//! - [`signpose_core`] — pose clips, gloss types, errors, concatenation
//! - [`signpose_lexicon`] — lexicon index and row selection
//! - [`signpose_translate`] — text→gloss capability and strategy registry
//! - [`signpose_resolve`] — gloss→pose lookups and the pipeline
//!
//! The HTTP service and CLI live in `signpose-server`, which is a leaf
//! crate and intentionally not re-exported here.

pub use signpose_core::{
    concatenate, read_clip, write_clip, ClipHeader, Gloss, GlossItem, Keypoint, PoseClip,
    PoseFrame, SignError, REST_MOTION_EPSILON,
};
pub use signpose_lexicon::{BestMatchSelector, LexiconIndex, LexiconRecord, RowSelector};
pub use signpose_resolve::{FingerspellingLookup, GlossToPose, PoseLookup, WholeWordLookup};
pub use signpose_translate::{DictionaryGlosser, GlosserRegistry, SimpleGlosser, TextToGloss};
