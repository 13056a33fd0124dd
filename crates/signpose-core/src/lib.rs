//! # signpose-core
//!
//! Core data model for the gloss-to-pose engine.
//!
//! A [`PoseClip`] is a short body-keypoint time series corresponding to one
//! sign (or one fingerspelled character). Clips are loaded from storage,
//! selected per gloss token, and spliced along the time axis by
//! [`concatenate`] into one continuous pose sequence.
//!
//! ## Key Types
//!
//! - [`PoseClip`] / [`PoseFrame`] / [`Keypoint`] — the keypoint time series
//! - [`ClipHeader`] — frame rate, frame dimensions, skeleton schema
//! - [`Gloss`] / [`GlossItem`] — one sentence of sign tokens
//! - [`SignError`] — the shared error enum for the whole workspace
//!
//! ## Architecture Rules
//!
//! - No async code — pure synchronous data manipulation.
//! - Depends on no other signpose crate.
//! - Clips are immutable value objects: concatenation never mutates an
//!   input clip, it always produces a new one.

pub mod clip;
pub mod concat;
pub mod error;
pub mod gloss;
pub mod io;

pub use clip::{ClipHeader, Keypoint, PoseClip, PoseFrame};
pub use concat::{concatenate, REST_MOTION_EPSILON};
pub use error::SignError;
pub use gloss::{Gloss, GlossItem};
pub use io::{read_clip, write_clip, CLIP_FORMAT_VERSION};
