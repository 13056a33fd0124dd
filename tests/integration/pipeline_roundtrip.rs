//! Integration test: text through glossing, resolution, and the clip
//! codec, end to end against an on-disk lexicon.

use std::sync::Arc;

use signpose::{
    read_clip, write_clip, ClipHeader, DictionaryGlosser, GlossToPose, Keypoint, LexiconIndex,
    PoseClip, PoseFrame, TextToGloss,
};

fn moving_clip(frames: usize) -> PoseClip {
    let mut clip = PoseClip::new(ClipHeader::new(25.0, 512, 512, "openpose_135"));
    clip.frames = (0..frames)
        .map(|i| {
            let mut frame = PoseFrame::new();
            frame.insert_part("body", vec![Keypoint::new(i as f32 * 2.0, 64.0, 1.0); 10]);
            frame
        })
        .collect();
    clip
}

#[test]
fn text_to_pose_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    std::fs::create_dir(root.join("clips")).unwrap();

    let entries = [("xin chào", 40), ("tôi", 10), ("dạy", 12)];
    let mut csv = String::from("spoken_language,signed_language,word,gloss,pose_reference\n");
    for (i, (word, frames)) in entries.iter().enumerate() {
        let reference = format!("clips/{i}.pose.json");
        write_clip(&moving_clip(*frames), &root.join(&reference)).unwrap();
        csv.push_str(&format!("vi,vsl,{word},{word},{reference}\n"));
    }
    std::fs::write(root.join("lexicon.csv"), csv).unwrap();

    let index = Arc::new(LexiconIndex::build(root).unwrap());

    // Gloss: two sentences over the lexicon vocabulary.
    let glosser = DictionaryGlosser::new(index.words());
    let sentences = glosser
        .text_to_gloss("xin chào. tôi dạy", "vi")
        .unwrap();
    assert_eq!(sentences.len(), 2);

    // Resolve: clips keep moving, so intra-sentence trimming removes
    // nothing and the counts stay exact.
    let resolver = GlossToPose::new(index);
    let pose = resolver.resolve(&sentences, "vi", "vsl").unwrap();
    assert_eq!(pose.len(), 40 + 10 + 12);

    // Codec: the written document reads back identically.
    let out = root.join("result.pose.json");
    write_clip(&pose, &out).unwrap();
    assert_eq!(read_clip(&out).unwrap(), pose);
}
