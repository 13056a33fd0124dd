//! Row selection — picking one best row when several candidate clips
//! exist for the same word.

use std::cmp::Reverse;

use crate::record::LexiconRecord;

/// Comparator capability for row selection.
///
/// Implementations must be pure functions of their inputs — repeated
/// calls with the same candidate list return the same row. Reproducible
/// output videos depend on this.
pub trait RowSelector: Send + Sync {
    /// Picks the best row for `word` out of `rows` (index order).
    /// Returns `None` only when `rows` is empty.
    fn select_best<'a>(&self, rows: &'a [LexiconRecord], word: &str) -> Option<&'a LexiconRecord>;
}

/// The default selection policy.
///
/// Ranks candidates by, in order:
/// 1. exact case-sensitive `word` match over a fuzzy/alias match,
/// 2. higher `priority` (rows without a priority rank last),
/// 3. position in index order.
///
/// With no priority column present this is exactly "exact match first,
/// then first in index order".
///
/// # Example
///
/// ```
/// use signpose_lexicon::{BestMatchSelector, LexiconRecord, RowSelector};
///
/// let csv = "spoken_language,signed_language,word,gloss,pose_reference\n\
///            vi,vsl,Chào,chào,clips/alias.pose.json\n\
///            vi,vsl,chào,chào,clips/exact.pose.json\n";
/// let rows: Vec<LexiconRecord> = csv::Reader::from_reader(csv.as_bytes())
///     .deserialize()
///     .map(|r| r.unwrap())
///     .collect();
///
/// let best = BestMatchSelector.select_best(&rows, "chào").unwrap();
/// assert_eq!(best.pose_reference, "clips/exact.pose.json");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BestMatchSelector;

impl RowSelector for BestMatchSelector {
    fn select_best<'a>(&self, rows: &'a [LexiconRecord], word: &str) -> Option<&'a LexiconRecord> {
        rows.iter()
            .enumerate()
            .min_by_key(|(position, row)| {
                let alias = row.word != word;
                let priority = row.priority.unwrap_or(i32::MIN);
                (alias, Reverse(priority), *position)
            })
            .map(|(_, row)| row)
    }
}
