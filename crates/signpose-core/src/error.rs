//! The shared error enum for the signpose workspace.

use thiserror::Error;

/// Errors produced by the gloss-to-pose engine.
///
/// Lookup and concatenation errors are structural — a word genuinely
/// absent from the lexicon will not succeed on retry — so none of them
/// are retried locally; they propagate to the pipeline caller with
/// enough context to report a precise message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignError {
    /// No clip is resolvable for a word (whole-word lookup miss).
    #[error("no sign found for \"{word}\"")]
    NotFound {
        /// The word that could not be resolved.
        word: String,
    },

    /// Fingerspelling failed because one symbol has no character entry.
    /// Partial fingerspelling output is never emitted.
    #[error("no fingerspelling entry for symbol \"{symbol}\" while spelling \"{word}\"")]
    MissingSymbol {
        /// The word being spelled out.
        word: String,
        /// The symbol with no character-index entry.
        symbol: String,
    },

    /// A referenced clip could not be loaded (missing or corrupt
    /// resource). Distinct from [`SignError::NotFound`]: "bad reference"
    /// rather than "no reference".
    #[error("failed to read pose clip {reference}: {message}")]
    StorageRead {
        /// Path or identifier of the clip resource.
        reference: String,
        /// Underlying I/O or decode failure.
        message: String,
    },

    /// A clip could not be written to storage.
    #[error("failed to write pose clip {path}: {message}")]
    StorageWrite {
        /// Destination path.
        path: String,
        /// Underlying I/O or encode failure.
        message: String,
    },

    /// Clips to be concatenated disagree on schema or frame rate.
    #[error("cannot concatenate incompatible clips: {message}")]
    IncompatibleClips {
        /// Which clip disagreed, and how.
        message: String,
    },

    /// Concatenation was invoked with no clips, or the upstream gloss
    /// list was empty.
    #[error("empty input: {message}")]
    EmptyInput {
        /// What was empty.
        message: String,
    },

    /// No glosser is registered under the requested strategy identifier.
    #[error("unknown glosser \"{name}\"")]
    UnknownGlosser {
        /// The requested strategy identifier.
        name: String,
    },

    /// Downstream rendering or encoding failed. Surfaced, not retried.
    #[error("rendering failed: {message}")]
    Render {
        /// Captured diagnostics (exit status, stderr).
        message: String,
    },

    /// A word could not be resolved; wraps the underlying lookup error
    /// with the word's location in the gloss sequence.
    #[error("word \"{word}\" (sentence {sentence}, position {position}) could not be resolved: {source}")]
    Unresolved {
        /// The offending word.
        word: String,
        /// Zero-based sentence index.
        sentence: usize,
        /// Zero-based token position within the sentence.
        position: usize,
        /// The underlying lookup failure.
        #[source]
        source: Box<SignError>,
    },

    /// An invariant of the surrounding runtime broke (poisoned lock,
    /// panicked worker). Never produced by the resolution core itself.
    #[error("internal error: {message}")]
    Internal {
        /// Description of the broken invariant.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_word() {
        let err = SignError::NotFound {
            word: "xin chào".to_string(),
        };
        assert_eq!(err.to_string(), "no sign found for \"xin chào\"");
    }

    #[test]
    fn missing_symbol_names_word_and_symbol() {
        let err = SignError::MissingSymbol {
            word: "Thành".to_string(),
            symbol: "dấu huyền".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("Thành"), "message: {text}");
        assert!(text.contains("dấu huyền"), "message: {text}");
    }

    #[test]
    fn unresolved_carries_location_and_source() {
        let err = SignError::Unresolved {
            word: "ghost".to_string(),
            sentence: 2,
            position: 1,
            source: Box::new(SignError::NotFound {
                word: "ghost".to_string(),
            }),
        };
        let text = err.to_string();
        assert!(text.contains("sentence 2"), "message: {text}");
        assert!(text.contains("position 1"), "message: {text}");
        assert!(text.contains("no sign found"), "message: {text}");
    }
}
