//! Integration tests for the resolution pipeline, against a real
//! on-disk lexicon fixture.

use std::path::Path;
use std::sync::Arc;

use signpose_core::{write_clip, ClipHeader, Gloss, GlossItem, Keypoint, PoseClip, PoseFrame, SignError};
use signpose_lexicon::LexiconIndex;
use signpose_resolve::GlossToPose;
use tempfile::TempDir;

/// A clip whose keypoints keep moving — boundary trimming removes
/// nothing, so frame counts stay predictable.
fn moving_clip(frames: usize) -> PoseClip {
    let mut clip = PoseClip::new(ClipHeader::new(25.0, 512, 512, "openpose_135"));
    clip.frames = (0..frames)
        .map(|i| {
            let mut frame = PoseFrame::new();
            frame.insert_part(
                "body",
                vec![Keypoint::new(10.0 + i as f32 * 3.0, 40.0, 1.0); 8],
            );
            frame
        })
        .collect();
    clip
}

/// Writes a lexicon directory holding one clip per `(word, frames)` entry.
fn write_lexicon(entries: &[(&str, usize)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    std::fs::create_dir(root.join("clips")).unwrap();

    let mut csv = String::from("spoken_language,signed_language,word,gloss,pose_reference\n");
    for (i, (word, frames)) in entries.iter().enumerate() {
        let reference = format!("clips/{i}.pose.json");
        write_clip(&moving_clip(*frames), &root.join(&reference)).unwrap();
        csv.push_str(&format!("vi,vsl,{word},{word},{reference}\n"));
    }
    std::fs::write(root.join("lexicon.csv"), csv).unwrap();
    dir
}

fn build_resolver(root: &Path) -> GlossToPose {
    let index = Arc::new(LexiconIndex::build(root).unwrap());
    GlossToPose::new(index)
}

fn sentence(words: &[&str]) -> Gloss {
    Gloss::from(words.iter().map(|w| GlossItem::new(*w, *w)).collect::<Vec<_>>())
}

#[test]
fn exact_match_returns_the_recorded_clip() {
    let dir = write_lexicon(&[("xin chào", 40)]);
    let resolver = build_resolver(dir.path());

    let pose = resolver
        .resolve(&[sentence(&["xin chào"])], "vi", "vsl")
        .unwrap();
    assert_eq!(pose.len(), 40);
}

#[test]
fn proper_noun_fingerspells_through_the_character_index() {
    // "Thành" has no whole-word entry; t, h, a, n and the tone mark
    // each have a 5-frame clip. Six symbols, spliced untrimmed: 30.
    let dir = write_lexicon(&[
        ("t", 5),
        ("h", 5),
        ("a", 5),
        ("n", 5),
        ("dấu huyền", 5),
    ]);
    let resolver = build_resolver(dir.path());

    let pose = resolver
        .resolve(&[sentence(&["Thành"])], "vi", "vsl")
        .unwrap();
    assert_eq!(pose.len(), 30);
}

#[test]
fn fallback_clip_length_matches_symbol_count() {
    let dir = write_lexicon(&[("b", 5), ("a", 5)]);
    let resolver = build_resolver(dir.path());

    let pose = resolver.resolve(&[sentence(&["ba"])], "vi", "vsl").unwrap();
    assert_eq!(pose.len(), 2 * 5);
}

#[test]
fn absent_word_fails_fast_naming_the_word() {
    let dir = write_lexicon(&[("tôi", 10)]);
    let resolver = build_resolver(dir.path());

    let err = resolver
        .resolve(
            &[sentence(&["tôi"]), sentence(&["tôi", "ghost"])],
            "vi",
            "vsl",
        )
        .unwrap_err();
    match err {
        SignError::Unresolved {
            word,
            sentence: sentence_index,
            position,
            source,
        } => {
            assert_eq!(word, "ghost");
            assert_eq!(sentence_index, 1);
            assert_eq!(position, 1);
            assert!(
                matches!(*source, SignError::MissingSymbol { .. }),
                "source: {source:?}"
            );
        }
        other => panic!("expected Unresolved, got {other:?}"),
    }
}

#[test]
fn whole_word_miss_without_fallback_is_not_found() {
    let dir = write_lexicon(&[("tôi", 10)]);
    let index = Arc::new(LexiconIndex::build(dir.path()).unwrap());
    let resolver = GlossToPose::without_fingerspelling(index);

    let err = resolver
        .resolve(&[sentence(&["ghost"])], "vi", "vsl")
        .unwrap_err();
    match err {
        SignError::Unresolved { source, .. } => {
            assert!(matches!(*source, SignError::NotFound { .. }), "source: {source:?}");
        }
        other => panic!("expected Unresolved, got {other:?}"),
    }
}

#[test]
fn empty_gloss_list_is_an_error() {
    let dir = write_lexicon(&[("tôi", 10)]);
    let resolver = build_resolver(dir.path());

    let err = resolver.resolve(&[], "vi", "vsl").unwrap_err();
    assert!(matches!(err, SignError::EmptyInput { .. }));
}

#[test]
fn empty_sentence_is_an_error() {
    let dir = write_lexicon(&[("tôi", 10)]);
    let resolver = build_resolver(dir.path());

    let err = resolver
        .resolve(&[sentence(&["tôi"]), Gloss::new()], "vi", "vsl")
        .unwrap_err();
    assert!(matches!(err, SignError::EmptyInput { .. }));
}

#[test]
fn sentence_boundaries_are_spliced_without_trimming() {
    let dir = write_lexicon(&[("tôi", 10), ("dạy", 10)]);
    let resolver = build_resolver(dir.path());

    let pose = resolver
        .resolve(&[sentence(&["tôi"]), sentence(&["dạy"])], "vi", "vsl")
        .unwrap();
    assert_eq!(pose.len(), 20);
}

#[test]
fn words_within_a_sentence_are_spliced_in_order() {
    let dir = write_lexicon(&[("tôi", 12), ("dạy", 8)]);
    let resolver = build_resolver(dir.path());

    // Both clips move continuously, so trimming removes nothing.
    let pose = resolver
        .resolve(&[sentence(&["tôi", "dạy"])], "vi", "vsl")
        .unwrap();
    assert_eq!(pose.len(), 20);
}

#[test]
fn unknown_language_pair_misses_the_whole_index() {
    let dir = write_lexicon(&[("tôi", 10)]);
    let resolver = build_resolver(dir.path());

    let err = resolver
        .resolve(&[sentence(&["tôi"])], "de", "gsg")
        .unwrap_err();
    assert!(matches!(err, SignError::Unresolved { .. }));
}

#[test]
fn corrupt_clip_is_a_storage_error_not_a_fallback() {
    // The word resolves in the whole-word index, its characters resolve
    // in the character index, but the whole-word clip is corrupt: the
    // pipeline must surface StorageRead rather than quietly fingerspell.
    let dir = write_lexicon(&[("ba", 10), ("b", 5), ("a", 5)]);
    let index = Arc::new(LexiconIndex::build(dir.path()).unwrap());
    std::fs::write(dir.path().join("clips/0.pose.json"), b"corrupt").unwrap();
    let resolver = GlossToPose::new(index);

    let err = resolver.resolve(&[sentence(&["ba"])], "vi", "vsl").unwrap_err();
    match err {
        SignError::Unresolved { source, .. } => {
            assert!(
                matches!(*source, SignError::StorageRead { .. }),
                "source: {source:?}"
            );
        }
        other => panic!("expected Unresolved, got {other:?}"),
    }
}
