//! Whole-word clip lookup against the lexicon index.

use std::sync::Arc;

use signpose_core::{read_clip, PoseClip, SignError};
use signpose_lexicon::{BestMatchSelector, LexiconIndex, RowSelector};

/// Capability of resolving a single gloss token to a pose clip.
pub trait PoseLookup {
    /// Resolves one token.
    ///
    /// `word` is the spoken-language surface form, `gloss` its canonical
    /// sign label; implementations key on whichever their backing data
    /// uses. Fails with [`SignError::NotFound`] when no clip can be
    /// resolved, [`SignError::StorageRead`] when a referenced clip
    /// cannot be loaded.
    fn lookup(
        &self,
        word: &str,
        gloss: &str,
        spoken_language: &str,
        signed_language: &str,
    ) -> Result<PoseClip, SignError>;
}

/// Index-backed exact-match lookup: the word's candidate rows come from
/// [`LexiconIndex::records_for`], one row is picked by the configured
/// [`RowSelector`], and its referenced clip is loaded from storage.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use signpose_lexicon::LexiconIndex;
/// use signpose_resolve::{PoseLookup, WholeWordLookup};
///
/// let index = Arc::new(LexiconIndex::build("assets/lexicon").unwrap());
/// let lookup = WholeWordLookup::new(index);
/// let clip = lookup.lookup("xin chào", "xin chào", "vi", "vsl").unwrap();
/// assert!(!clip.is_empty());
/// ```
pub struct WholeWordLookup {
    index: Arc<LexiconIndex>,
    selector: Box<dyn RowSelector>,
}

impl WholeWordLookup {
    /// Creates a lookup with the default [`BestMatchSelector`].
    pub fn new(index: Arc<LexiconIndex>) -> Self {
        Self::with_selector(index, Box::new(BestMatchSelector))
    }

    /// Creates a lookup with a custom row selection policy.
    pub fn with_selector(index: Arc<LexiconIndex>, selector: Box<dyn RowSelector>) -> Self {
        Self { index, selector }
    }
}

impl PoseLookup for WholeWordLookup {
    fn lookup(
        &self,
        word: &str,
        _gloss: &str,
        spoken_language: &str,
        signed_language: &str,
    ) -> Result<PoseClip, SignError> {
        let rows = self.index.records_for(spoken_language, signed_language, word);
        let Some(row) = self.selector.select_best(rows, word) else {
            return Err(SignError::NotFound {
                word: word.to_string(),
            });
        };
        read_clip(&self.index.clip_path(row))
    }
}
