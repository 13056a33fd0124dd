//! The lexicon index — a nested read-only lookup structure built once
//! from a directory of CSV files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use signpose_core::SignError;

use crate::record::LexiconRecord;

type WordMap = HashMap<String, Vec<LexiconRecord>>;
type SignedMap = HashMap<String, WordMap>;

/// Read-only mapping `spoken_language → signed_language → word → rows`.
///
/// Built once per instantiation and never mutated afterwards, so it is
/// safe to share behind an `Arc` across concurrent pipeline invocations.
/// Build order is deterministic: files are scanned in sorted file-name
/// order and rows keep their in-file order, so identical directory
/// contents always yield identical per-key row ordering.
///
/// # Example
///
/// ```no_run
/// use signpose_lexicon::LexiconIndex;
///
/// let index = LexiconIndex::build("assets/lexicon").unwrap();
/// for (spoken, signed) in index.known_language_pairs() {
///     println!("{spoken} -> {signed}");
/// }
/// let rows = index.records_for("vi", "vsl", "xin chào");
/// assert!(!rows.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct LexiconIndex {
    root: PathBuf,
    words: HashMap<String, SignedMap>,
}

impl LexiconIndex {
    /// Scans all `*.csv` files under `directory` into an index.
    ///
    /// A malformed row (missing required columns, or a pose reference
    /// that does not resolve to a readable file under the lexicon root)
    /// is skipped with a warning; it never aborts the build. Partial
    /// lexicons are common and expected.
    ///
    /// # Errors
    ///
    /// Returns [`SignError::StorageRead`] only when the directory itself
    /// cannot be scanned.
    pub fn build(directory: impl AsRef<Path>) -> Result<Self, SignError> {
        let root = directory.as_ref().to_path_buf();
        let mut files: Vec<PathBuf> = std::fs::read_dir(&root)
            .map_err(|e| SignError::StorageRead {
                reference: root.display().to_string(),
                message: e.to_string(),
            })?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "csv"))
            .collect();
        // Sorted scan order keeps the index deterministic across runs.
        files.sort();

        let mut index = Self {
            root,
            words: HashMap::new(),
        };
        for file in &files {
            index.load_file(file);
        }

        tracing::info!(
            lexicon = %index.root.display(),
            files = files.len(),
            words = index.word_count(),
            "lexicon index built"
        );
        Ok(index)
    }

    fn load_file(&mut self, file: &Path) {
        let mut reader = match csv::Reader::from_path(file) {
            Ok(reader) => reader,
            Err(e) => {
                tracing::warn!(file = %file.display(), error = %e, "skipping unreadable lexicon file");
                return;
            }
        };

        for (row, result) in reader.deserialize::<LexiconRecord>().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!(
                        file = %file.display(),
                        row,
                        error = %e,
                        "skipping malformed lexicon row"
                    );
                    continue;
                }
            };
            if let Some(reason) = record.malformed_reason() {
                tracing::warn!(file = %file.display(), row, reason, "skipping malformed lexicon row");
                continue;
            }
            let clip = self.root.join(&record.pose_reference);
            if !clip.is_file() {
                tracing::warn!(
                    file = %file.display(),
                    row,
                    pose_reference = %record.pose_reference,
                    "skipping row with unreadable pose reference"
                );
                continue;
            }

            self.words
                .entry(record.spoken_language.clone())
                .or_default()
                .entry(record.signed_language.clone())
                .or_default()
                .entry(record.word.clone())
                .or_default()
                .push(record);
        }
    }

    /// The directory this index was built from. Pose references resolve
    /// relative to it.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All rows for a `(spoken, signed, word)` key, in index order.
    /// An absent key yields an empty slice, not an error.
    pub fn records_for(&self, spoken_language: &str, signed_language: &str, word: &str) -> &[LexiconRecord] {
        self.words
            .get(spoken_language)
            .and_then(|signed| signed.get(signed_language))
            .and_then(|words| words.get(word))
            .map(|rows| rows.as_slice())
            .unwrap_or(&[])
    }

    /// Absolute path of the clip a record references.
    pub fn clip_path(&self, record: &LexiconRecord) -> PathBuf {
        self.root.join(&record.pose_reference)
    }

    /// Spoken-language codes present in the lexicon, sorted.
    pub fn known_spoken_languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.words.keys().cloned().collect();
        languages.sort();
        languages
    }

    /// All `(spoken, signed)` language pairs present, sorted.
    pub fn known_language_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .words
            .iter()
            .flat_map(|(spoken, signed)| {
                signed.keys().map(move |s| (spoken.clone(), s.clone()))
            })
            .collect();
        pairs.sort();
        pairs
    }

    /// Every distinct word key across all language pairs, sorted. Used
    /// to seed vocabulary-driven glossers.
    pub fn words(&self) -> Vec<String> {
        let mut words: Vec<String> = self
            .words
            .values()
            .flat_map(|signed| signed.values())
            .flat_map(|words| words.keys().cloned())
            .collect();
        words.sort();
        words.dedup();
        words
    }

    /// Number of distinct `(spoken, signed, word)` keys.
    pub fn word_count(&self) -> usize {
        self.words
            .values()
            .flat_map(|signed| signed.values())
            .map(|words| words.len())
            .sum()
    }

    /// Returns `true` when the index holds no rows at all.
    pub fn is_empty(&self) -> bool {
        self.word_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signpose_core::{write_clip, ClipHeader, PoseClip, PoseFrame};
    use tempfile::TempDir;

    fn write_test_clip(dir: &Path, name: &str) {
        let mut clip = PoseClip::new(ClipHeader::new(25.0, 512, 512, "openpose_135"));
        clip.frames = vec![PoseFrame::new(); 5];
        write_clip(&clip, &dir.join(name)).unwrap();
    }

    /// A lexicon directory with two CSV files sharing one duplicated word.
    fn fixture() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir(root.join("clips")).unwrap();
        for name in ["a.pose.json", "b.pose.json", "c.pose.json", "d.pose.json"] {
            write_test_clip(&root.join("clips"), name);
        }

        std::fs::write(
            root.join("01_words.csv"),
            "spoken_language,signed_language,word,gloss,pose_reference\n\
             vi,vsl,xin chào,xin chào,clips/a.pose.json\n\
             vi,vsl,tôi,tôi,clips/b.pose.json\n",
        )
        .unwrap();
        std::fs::write(
            root.join("02_more.csv"),
            "spoken_language,signed_language,word,gloss,pose_reference\n\
             vi,vsl,xin chào,chào,clips/c.pose.json\n\
             en,ase,hello,hello,clips/d.pose.json\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn build_indexes_all_well_formed_rows() {
        let dir = fixture();
        let index = LexiconIndex::build(dir.path()).unwrap();
        assert_eq!(index.word_count(), 3);
        assert!(!index.is_empty());
    }

    #[test]
    fn records_keep_file_then_row_order() {
        let dir = fixture();
        let index = LexiconIndex::build(dir.path()).unwrap();
        let rows = index.records_for("vi", "vsl", "xin chào");
        assert_eq!(rows.len(), 2);
        // 01_words.csv sorts before 02_more.csv.
        assert_eq!(rows[0].pose_reference, "clips/a.pose.json");
        assert_eq!(rows[1].pose_reference, "clips/c.pose.json");
    }

    #[test]
    fn absent_key_yields_empty_slice() {
        let dir = fixture();
        let index = LexiconIndex::build(dir.path()).unwrap();
        assert!(index.records_for("vi", "vsl", "ghost").is_empty());
        assert!(index.records_for("de", "gsg", "hallo").is_empty());
    }

    #[test]
    fn every_row_sits_under_its_own_key() {
        let dir = fixture();
        let index = LexiconIndex::build(dir.path()).unwrap();
        for (spoken, signed) in index.known_language_pairs() {
            for word in index.words() {
                for row in index.records_for(&spoken, &signed, &word) {
                    assert_eq!(row.spoken_language, spoken);
                    assert_eq!(row.signed_language, signed);
                    assert_eq!(row.word, word);
                }
            }
        }
    }

    #[test]
    fn discovery_accessors_are_sorted() {
        let dir = fixture();
        let index = LexiconIndex::build(dir.path()).unwrap();
        assert_eq!(index.known_spoken_languages(), ["en", "vi"]);
        assert_eq!(
            index.known_language_pairs(),
            [
                ("en".to_string(), "ase".to_string()),
                ("vi".to_string(), "vsl".to_string())
            ]
        );
    }

    #[test]
    fn malformed_rows_are_skipped_not_fatal() {
        let dir = fixture();
        std::fs::write(
            dir.path().join("03_broken.csv"),
            "spoken_language,signed_language,word,gloss,pose_reference\n\
             vi,vsl,,missing-word,clips/a.pose.json\n\
             vi,vsl,chạy,chạy,clips/nonexistent.pose.json\n\
             vi,vsl,chạy\n\
             vi,vsl,dạy,dạy,clips/b.pose.json\n",
        )
        .unwrap();

        let index = LexiconIndex::build(dir.path()).unwrap();
        // Only the last row of 03_broken.csv survives.
        assert_eq!(index.records_for("vi", "vsl", "dạy").len(), 1);
        assert!(index.records_for("vi", "vsl", "chạy").is_empty());
        assert_eq!(index.word_count(), 4);
    }

    #[test]
    fn rebuild_is_deterministic() {
        let dir = fixture();
        let first = LexiconIndex::build(dir.path()).unwrap();
        let second = LexiconIndex::build(dir.path()).unwrap();

        assert_eq!(first.known_language_pairs(), second.known_language_pairs());
        assert_eq!(first.words(), second.words());
        for (spoken, signed) in first.known_language_pairs() {
            for word in first.words() {
                assert_eq!(
                    first.records_for(&spoken, &signed, &word),
                    second.records_for(&spoken, &signed, &word),
                );
            }
        }
    }

    #[test]
    fn clip_path_joins_the_root() {
        let dir = fixture();
        let index = LexiconIndex::build(dir.path()).unwrap();
        let row = &index.records_for("vi", "vsl", "tôi")[0];
        assert_eq!(index.clip_path(row), dir.path().join("clips/b.pose.json"));
    }

    #[test]
    fn unreadable_directory_is_an_error() {
        let result = LexiconIndex::build("/no/such/lexicon/dir");
        assert!(matches!(result, Err(SignError::StorageRead { .. })));
    }
}
