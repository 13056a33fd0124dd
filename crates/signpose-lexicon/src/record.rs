//! A parsed lexicon row.

use serde::Deserialize;

/// One row of a lexicon CSV file.
///
/// Required columns: `spoken_language`, `signed_language`, `word`,
/// `gloss`, `pose_reference`. The optional `priority` column feeds row
/// selection only. `pose_reference` identifies a clip file relative to
/// the lexicon root and is never mutated after load.
///
/// # Example
///
/// ```
/// use signpose_lexicon::LexiconRecord;
///
/// let csv = "spoken_language,signed_language,word,gloss,pose_reference\n\
///            vi,vsl,xin chào,xin chào,clips/xin_chao.pose.json\n";
/// let mut reader = csv::Reader::from_reader(csv.as_bytes());
/// let record: LexiconRecord = reader.deserialize().next().unwrap().unwrap();
/// assert_eq!(record.word, "xin chào");
/// assert!(record.priority.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LexiconRecord {
    /// Spoken-language code, e.g. `"vi"`.
    pub spoken_language: String,
    /// Signed-language code, e.g. `"vsl"`.
    pub signed_language: String,
    /// The spoken-language surface form this row matches.
    pub word: String,
    /// The canonical sign label for this row.
    pub gloss: String,
    /// Clip file path, relative to the lexicon root.
    pub pose_reference: String,
    /// Optional quality/priority rank; higher wins ties during row
    /// selection. Rows without a priority rank last.
    #[serde(default)]
    pub priority: Option<i32>,
}

impl LexiconRecord {
    /// Returns the reason this row is unusable, if any. Empty required
    /// fields come from ragged CSV rows and are treated as malformed.
    pub(crate) fn malformed_reason(&self) -> Option<&'static str> {
        if self.spoken_language.is_empty() {
            Some("empty spoken_language")
        } else if self.signed_language.is_empty() {
            Some("empty signed_language")
        } else if self.word.is_empty() {
            Some("empty word")
        } else if self.pose_reference.is_empty() {
            Some("empty pose_reference")
        } else {
            None
        }
    }
}
