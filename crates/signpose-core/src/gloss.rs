//! Gloss types — the lexical tokens the resolution engine consumes.
//!
//! A [`Gloss`] is one sentence: an ordered sequence of [`GlossItem`]s.
//! Order is significant — it is the temporal order of the output video.

use serde::{Deserialize, Serialize};

/// One token within a gloss: the spoken-language surface form paired
/// with its canonical sign label (which may equal the surface form).
///
/// Immutable once produced by a glosser.
///
/// # Example
///
/// ```
/// use signpose_core::GlossItem;
///
/// let item = GlossItem::new("trường", "trường");
/// assert_eq!(item.word, item.gloss);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossItem {
    /// The literal spoken-language surface form.
    pub word: String,
    /// The canonical sign-language label.
    pub gloss: String,
}

impl GlossItem {
    /// Creates a gloss item.
    pub fn new(word: impl Into<String>, gloss: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            gloss: gloss.into(),
        }
    }
}

/// One sentence of gloss tokens, in temporal order.
///
/// # Example
///
/// ```
/// use signpose_core::{Gloss, GlossItem};
///
/// let sentence = Gloss::from(vec![
///     GlossItem::new("tôi", "tôi"),
///     GlossItem::new("đi học", "đi học"),
/// ]);
/// assert_eq!(sentence.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gloss {
    /// The tokens of this sentence.
    pub items: Vec<GlossItem>,
}

impl Gloss {
    /// Creates an empty sentence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the sentence has no tokens.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the tokens in temporal order.
    pub fn iter(&self) -> std::slice::Iter<'_, GlossItem> {
        self.items.iter()
    }
}

impl From<Vec<GlossItem>> for Gloss {
    fn from(items: Vec<GlossItem>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gloss_preserves_order() {
        let gloss = Gloss::from(vec![
            GlossItem::new("a", "a"),
            GlossItem::new("b", "b"),
            GlossItem::new("c", "c"),
        ]);
        let words: Vec<&str> = gloss.iter().map(|i| i.word.as_str()).collect();
        assert_eq!(words, ["a", "b", "c"]);
    }

    #[test]
    fn empty_gloss() {
        assert!(Gloss::new().is_empty());
        assert_eq!(Gloss::new().len(), 0);
    }
}
