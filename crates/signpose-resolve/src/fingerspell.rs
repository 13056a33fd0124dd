//! Fingerspelling — resolving a word letter by letter when no
//! whole-word clip exists.
//!
//! A word is decomposed into atomic symbols: its letters (modified
//! vowels like `ă â ê ô ơ ư` and `đ` are letters of their own) followed
//! by the names of any tone marks, in reading order. Each symbol is
//! looked up in a character-keyed lexicon index and the per-symbol clips
//! are spliced without trimming.

use std::sync::Arc;

use signpose_core::{concatenate, read_clip, PoseClip, SignError};
use signpose_lexicon::{BestMatchSelector, LexiconIndex, RowSelector};

use crate::lookup::PoseLookup;

/// A Vietnamese tone mark, fingerspelled as its own symbol after the
/// word's letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Sac,
    Huyen,
    Hoi,
    Nga,
    Nang,
}

impl Tone {
    /// The symbol name used as the character-index key.
    fn symbol(self) -> &'static str {
        match self {
            Tone::Sac => "dấu sắc",
            Tone::Huyen => "dấu huyền",
            Tone::Hoi => "dấu hỏi",
            Tone::Nga => "dấu ngã",
            Tone::Nang => "dấu nặng",
        }
    }
}

/// Splits a precomposed toned vowel into its base letter and tone.
/// Returns `None` for characters that carry no tone mark.
fn split_toned_vowel(c: char) -> Option<(char, Tone)> {
    use Tone::{Hoi, Huyen, Nang, Nga, Sac};
    Some(match c {
        'á' => ('a', Sac), 'à' => ('a', Huyen), 'ả' => ('a', Hoi), 'ã' => ('a', Nga), 'ạ' => ('a', Nang),
        'ắ' => ('ă', Sac), 'ằ' => ('ă', Huyen), 'ẳ' => ('ă', Hoi), 'ẵ' => ('ă', Nga), 'ặ' => ('ă', Nang),
        'ấ' => ('â', Sac), 'ầ' => ('â', Huyen), 'ẩ' => ('â', Hoi), 'ẫ' => ('â', Nga), 'ậ' => ('â', Nang),
        'é' => ('e', Sac), 'è' => ('e', Huyen), 'ẻ' => ('e', Hoi), 'ẽ' => ('e', Nga), 'ẹ' => ('e', Nang),
        'ế' => ('ê', Sac), 'ề' => ('ê', Huyen), 'ể' => ('ê', Hoi), 'ễ' => ('ê', Nga), 'ệ' => ('ê', Nang),
        'í' => ('i', Sac), 'ì' => ('i', Huyen), 'ỉ' => ('i', Hoi), 'ĩ' => ('i', Nga), 'ị' => ('i', Nang),
        'ó' => ('o', Sac), 'ò' => ('o', Huyen), 'ỏ' => ('o', Hoi), 'õ' => ('o', Nga), 'ọ' => ('o', Nang),
        'ố' => ('ô', Sac), 'ồ' => ('ô', Huyen), 'ổ' => ('ô', Hoi), 'ỗ' => ('ô', Nga), 'ộ' => ('ô', Nang),
        'ớ' => ('ơ', Sac), 'ờ' => ('ơ', Huyen), 'ở' => ('ơ', Hoi), 'ỡ' => ('ơ', Nga), 'ợ' => ('ơ', Nang),
        'ú' => ('u', Sac), 'ù' => ('u', Huyen), 'ủ' => ('u', Hoi), 'ũ' => ('u', Nga), 'ụ' => ('u', Nang),
        'ứ' => ('ư', Sac), 'ừ' => ('ư', Huyen), 'ử' => ('ư', Hoi), 'ữ' => ('ư', Nga), 'ự' => ('ư', Nang),
        'ý' => ('y', Sac), 'ỳ' => ('y', Huyen), 'ỷ' => ('y', Hoi), 'ỹ' => ('y', Nga), 'ỵ' => ('y', Nang),
        _ => return None,
    })
}

/// Recognizes a combining tone mark, for input arriving in decomposed
/// (NFD) form.
fn combining_tone(c: char) -> Option<Tone> {
    Some(match c {
        '\u{0301}' => Tone::Sac,
        '\u{0300}' => Tone::Huyen,
        '\u{0309}' => Tone::Hoi,
        '\u{0303}' => Tone::Nga,
        '\u{0323}' => Tone::Nang,
        _ => return None,
    })
}

/// Decomposes a word into its fingerspelling symbols.
///
/// Letters come first in reading order, lowercased, with tone marks
/// split off; the tone symbols follow in the order they were met.
/// All-uppercase acronyms therefore become plain letter runs, and
/// proper nouns additionally yield their tone symbols. Characters that
/// carry no sign (hyphens, apostrophes) are ignored.
///
/// # Example
///
/// ```
/// use signpose_resolve::decompose;
///
/// assert_eq!(decompose("Thành"), ["t", "h", "a", "n", "h", "dấu huyền"]);
/// assert_eq!(decompose("UIT"), ["u", "i", "t"]);
/// ```
pub fn decompose(word: &str) -> Vec<String> {
    let mut letters: Vec<String> = Vec::new();
    let mut tones: Vec<Tone> = Vec::new();
    for original in word.chars() {
        for c in original.to_lowercase() {
            if let Some(tone) = combining_tone(c) {
                tones.push(tone);
            } else if let Some((base, tone)) = split_toned_vowel(c) {
                letters.push(base.to_string());
                tones.push(tone);
            } else if c.is_alphanumeric() {
                letters.push(c.to_string());
            }
        }
    }
    letters.extend(tones.into_iter().map(|tone| tone.symbol().to_string()));
    letters
}

/// Letter-by-letter lookup through a character-keyed index.
///
/// Used as the fallback after [`crate::WholeWordLookup`] misses, or as
/// the sole strategy. A single missing symbol fails the whole word with
/// [`SignError::MissingSymbol`] — partial fingerspelling output is never
/// emitted. Per-symbol clips are spliced with no boundary trimming.
pub struct FingerspellingLookup {
    index: Arc<LexiconIndex>,
    selector: Box<dyn RowSelector>,
}

impl FingerspellingLookup {
    /// Creates a lookup over a character-keyed index (an index whose
    /// word keys are single letters and tone-mark names).
    pub fn new(index: Arc<LexiconIndex>) -> Self {
        Self::with_selector(index, Box::new(BestMatchSelector))
    }

    /// Creates a lookup with a custom row selection policy.
    pub fn with_selector(index: Arc<LexiconIndex>, selector: Box<dyn RowSelector>) -> Self {
        Self { index, selector }
    }
}

impl PoseLookup for FingerspellingLookup {
    fn lookup(
        &self,
        word: &str,
        _gloss: &str,
        spoken_language: &str,
        signed_language: &str,
    ) -> Result<PoseClip, SignError> {
        let symbols = decompose(word);
        if symbols.is_empty() {
            return Err(SignError::NotFound {
                word: word.to_string(),
            });
        }

        let mut clips = Vec::with_capacity(symbols.len());
        for symbol in &symbols {
            let rows = self
                .index
                .records_for(spoken_language, signed_language, symbol);
            let Some(row) = self.selector.select_best(rows, symbol) else {
                return Err(SignError::MissingSymbol {
                    word: word.to_string(),
                    symbol: symbol.clone(),
                });
            };
            clips.push(read_clip(&self.index.clip_path(row))?);
        }

        tracing::debug!(word, symbols = symbols.len(), "fingerspelled word");
        concatenate(clips, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proper_noun_splits_letters_then_tone() {
        assert_eq!(decompose("Thành"), ["t", "h", "a", "n", "h", "dấu huyền"]);
        assert_eq!(decompose("Hà"), ["h", "a", "dấu huyền"]);
    }

    #[test]
    fn modified_vowels_stay_whole_letters() {
        assert_eq!(decompose("Hiển"), ["h", "i", "ê", "n", "dấu hỏi"]);
    }

    #[test]
    fn acronym_splits_into_lowercase_letters() {
        assert_eq!(decompose("UIT"), ["u", "i", "t"]);
        assert_eq!(decompose("HCMUS"), ["h", "c", "m", "u", "s"]);
    }

    #[test]
    fn multiple_tones_follow_letter_order() {
        // ấ carries sắc, ộ carries nặng: tones come after all letters,
        // in the order their vowels appeared.
        assert_eq!(
            decompose("ấộ"),
            ["â", "ô", "dấu sắc", "dấu nặng"]
        );
    }

    #[test]
    fn decomposed_unicode_input_is_accepted() {
        // "à" written as 'a' + U+0300.
        assert_eq!(decompose("a\u{0300}"), ["a", "dấu huyền"]);
    }

    #[test]
    fn unsignable_characters_are_ignored() {
        assert_eq!(decompose("đi-dạo"), ["đ", "i", "d", "a", "o", "dấu nặng"]);
        assert!(decompose("--").is_empty());
    }

    #[test]
    fn digits_are_their_own_symbols() {
        assert_eq!(decompose("B52"), ["b", "5", "2"]);
    }
}
