//! The pipeline orchestrator: gloss sentences in, one continuous pose
//! clip out.

use std::sync::Arc;

use signpose_core::{concatenate, Gloss, GlossItem, PoseClip, SignError};
use signpose_lexicon::LexiconIndex;

use crate::fingerspell::FingerspellingLookup;
use crate::lookup::{PoseLookup, WholeWordLookup};

/// Resolves gloss sentences to clips and concatenates them.
///
/// Per sentence, every token is resolved through the fallback chain
/// (whole-word first, fingerspelling on a whole-word miss) and the
/// resulting clips are spliced with trimming — within a sentence, signs
/// should flow without dead pauses. The sentence clips are then spliced
/// *without* trimming: the pause between sentences is a deliberate
/// phrase boundary.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use signpose_core::{Gloss, GlossItem};
/// use signpose_lexicon::LexiconIndex;
/// use signpose_resolve::GlossToPose;
///
/// let index = Arc::new(LexiconIndex::build("assets/lexicon").unwrap());
/// let resolver = GlossToPose::new(index);
///
/// let sentence = Gloss::from(vec![GlossItem::new("xin chào", "xin chào")]);
/// let pose = resolver.resolve(&[sentence], "vi", "vsl").unwrap();
/// assert!(!pose.is_empty());
/// ```
pub struct GlossToPose {
    whole_word: WholeWordLookup,
    fingerspelling: Option<FingerspellingLookup>,
}

impl GlossToPose {
    /// Creates a resolver over `index` with fingerspelling fallback.
    /// The character entries are expected in the same lexicon.
    pub fn new(index: Arc<LexiconIndex>) -> Self {
        Self {
            whole_word: WholeWordLookup::new(Arc::clone(&index)),
            fingerspelling: Some(FingerspellingLookup::new(index)),
        }
    }

    /// Creates a resolver whose fingerspelling symbols come from a
    /// separate character lexicon.
    pub fn with_character_index(index: Arc<LexiconIndex>, characters: Arc<LexiconIndex>) -> Self {
        Self {
            whole_word: WholeWordLookup::new(index),
            fingerspelling: Some(FingerspellingLookup::new(characters)),
        }
    }

    /// Creates a resolver with no fingerspelling fallback: a whole-word
    /// miss fails immediately.
    pub fn without_fingerspelling(index: Arc<LexiconIndex>) -> Self {
        Self {
            whole_word: WholeWordLookup::new(index),
            fingerspelling: None,
        }
    }

    /// Resolves `sentences` into one continuous pose clip.
    ///
    /// Fails fast on the first unresolved word: the error is
    /// [`SignError::Unresolved`], wrapping the lookup failure with the
    /// word and its sentence/position indices. No partial clip is ever
    /// returned.
    ///
    /// # Errors
    ///
    /// [`SignError::EmptyInput`] when `sentences` (or any single
    /// sentence) is empty; [`SignError::Unresolved`] for lookup
    /// failures; [`SignError::IncompatibleClips`] when resolved clips
    /// disagree on schema or frame rate.
    pub fn resolve(
        &self,
        sentences: &[Gloss],
        spoken_language: &str,
        signed_language: &str,
    ) -> Result<PoseClip, SignError> {
        if sentences.is_empty() {
            return Err(SignError::EmptyInput {
                message: "no gloss sentences to resolve".to_string(),
            });
        }

        let mut sentence_clips = Vec::with_capacity(sentences.len());
        for (sentence_index, sentence) in sentences.iter().enumerate() {
            if sentence.is_empty() {
                return Err(SignError::EmptyInput {
                    message: format!("gloss sentence {sentence_index} has no tokens"),
                });
            }

            let mut clips = Vec::with_capacity(sentence.len());
            for (position, item) in sentence.iter().enumerate() {
                let clip = self
                    .resolve_item(item, spoken_language, signed_language)
                    .map_err(|source| SignError::Unresolved {
                        word: item.word.clone(),
                        sentence: sentence_index,
                        position,
                        source: Box::new(source),
                    })?;
                clips.push(clip);
            }
            // Within a sentence: trim rest frames for smooth transitions.
            sentence_clips.push(concatenate(clips, true)?);
        }

        // Across sentences: no trimming, the pause marks the boundary.
        concatenate(sentence_clips, false)
    }

    /// The fallback chain for one token: whole-word lookup first; on a
    /// whole-word miss, fingerspelling (when enabled). Storage errors
    /// propagate immediately — a bad reference is not a missing word.
    fn resolve_item(
        &self,
        item: &GlossItem,
        spoken_language: &str,
        signed_language: &str,
    ) -> Result<PoseClip, SignError> {
        let whole = self
            .whole_word
            .lookup(&item.word, &item.gloss, spoken_language, signed_language);
        match (whole, &self.fingerspelling) {
            (Err(SignError::NotFound { .. }), Some(fingerspelling)) => {
                tracing::debug!(word = %item.word, "whole-word miss, fingerspelling");
                fingerspelling.lookup(&item.word, &item.gloss, spoken_language, signed_language)
            }
            (result, _) => result,
        }
    }
}
