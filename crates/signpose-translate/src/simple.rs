//! The simple glosser — every word becomes its own gloss token.

use signpose_core::{Gloss, GlossItem, SignError};

use crate::split_sentences;
use crate::TextToGloss;

/// Whitespace tokenization with lowercasing; one gloss sentence per
/// input sentence. Useful for lexicons whose word keys are plain
/// lowercase surface forms, and as a baseline strategy.
///
/// # Example
///
/// ```
/// use signpose_translate::{SimpleGlosser, TextToGloss};
///
/// let sentences = SimpleGlosser.text_to_gloss("Tôi đi học. Chào!", "vi").unwrap();
/// assert_eq!(sentences.len(), 2);
/// assert_eq!(sentences[0].items[0].word, "tôi");
/// assert_eq!(sentences[1].items[0].word, "chào");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleGlosser;

impl TextToGloss for SimpleGlosser {
    fn text_to_gloss(&self, text: &str, _language: &str) -> Result<Vec<Gloss>, SignError> {
        if text.trim().is_empty() {
            return Err(SignError::EmptyInput {
                message: "input text is empty".to_string(),
            });
        }

        let sentences = split_sentences(text)
            .into_iter()
            .filter_map(|sentence| {
                let items: Vec<GlossItem> = sentence
                    .split_whitespace()
                    .map(crate::strip_token)
                    .filter(|token| !token.is_empty())
                    .map(|token| {
                        let word = token.to_lowercase();
                        GlossItem::new(word.clone(), word)
                    })
                    .collect();
                (!items.is_empty()).then(|| Gloss::from(items))
            })
            .collect();
        Ok(sentences)
    }
}
