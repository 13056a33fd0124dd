//! The dictionary glosser — greedy longest-phrase matching against a
//! known vocabulary.

use std::collections::HashSet;

use signpose_core::{Gloss, GlossItem, SignError};

use crate::split_sentences;
use crate::strip_token;
use crate::TextToGloss;

/// Glosses text by scanning each sentence for the longest vocabulary
/// phrase starting at the current token. Multi-word signs ("xin chào",
/// "đánh giá năng lực") therefore stay whole instead of being split
/// into single-word tokens.
///
/// Tokens that match no phrase are kept verbatim when they look like a
/// proper noun or an acronym (leading uppercase) — downstream lookup
/// fingerspells them — and dropped otherwise, matching how vocabulary
/// glossing treats filler words.
///
/// # Example
///
/// ```
/// use signpose_translate::{DictionaryGlosser, TextToGloss};
///
/// let glosser = DictionaryGlosser::new(vec![
///     "tôi".to_string(),
///     "tên".to_string(),
///     "xin chào".to_string(),
/// ]);
/// let sentences = glosser.text_to_gloss("Xin chào, tôi tên là Thành", "vi").unwrap();
/// let words: Vec<&str> = sentences[0].iter().map(|i| i.word.as_str()).collect();
/// assert_eq!(words, ["xin chào", "tôi", "tên", "Thành"]);
/// ```
pub struct DictionaryGlosser {
    vocabulary: HashSet<String>,
    max_phrase_words: usize,
}

impl DictionaryGlosser {
    /// Creates a glosser over `vocabulary`. Phrases are matched
    /// case-insensitively; entries are stored lowercase.
    pub fn new(vocabulary: impl IntoIterator<Item = String>) -> Self {
        let vocabulary: HashSet<String> =
            vocabulary.into_iter().map(|p| p.to_lowercase()).collect();
        let max_phrase_words = vocabulary
            .iter()
            .map(|p| p.split_whitespace().count())
            .max()
            .unwrap_or(1);
        Self {
            vocabulary,
            max_phrase_words,
        }
    }

    /// Number of vocabulary phrases.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    fn gloss_sentence(&self, sentence: &str) -> Gloss {
        let tokens: Vec<&str> = sentence
            .split_whitespace()
            .map(strip_token)
            .filter(|token| !token.is_empty())
            .collect();

        let mut items: Vec<GlossItem> = Vec::new();
        let mut position = 0;
        while position < tokens.len() {
            let longest = (1..=self.max_phrase_words.min(tokens.len() - position))
                .rev()
                .map(|n| tokens[position..position + n].join(" ").to_lowercase())
                .find(|phrase| self.vocabulary.contains(phrase));

            if let Some(phrase) = longest {
                position += phrase.split_whitespace().count();
                items.push(GlossItem::new(phrase.clone(), phrase));
            } else {
                let token = tokens[position];
                if looks_fingerspellable(token) {
                    // Keep the original casing: it is the proper-noun /
                    // acronym signal for fingerspelling downstream.
                    items.push(GlossItem::new(token, token));
                } else {
                    tracing::debug!(token, "dropping token with no vocabulary match");
                }
                position += 1;
            }
        }
        Gloss::from(items)
    }
}

impl TextToGloss for DictionaryGlosser {
    fn text_to_gloss(&self, text: &str, _language: &str) -> Result<Vec<Gloss>, SignError> {
        if text.trim().is_empty() {
            return Err(SignError::EmptyInput {
                message: "input text is empty".to_string(),
            });
        }

        let sentences = split_sentences(text)
            .into_iter()
            .map(|sentence| self.gloss_sentence(sentence))
            .filter(|gloss| !gloss.is_empty())
            .collect();
        Ok(sentences)
    }
}

/// A token with a leading uppercase letter is a proper noun or acronym —
/// a fingerspelling candidate rather than a filler word.
fn looks_fingerspellable(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_uppercase)
}
