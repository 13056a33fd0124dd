//! Clip concatenation — splicing pose clips along the time axis.
//!
//! Consecutive signs are spliced either verbatim (`trim = false`) or with
//! each clip's leading/trailing rest frames removed first (`trim = true`),
//! so signs flow into each other without dead pauses.

use crate::clip::{PoseClip, PoseFrame};
use crate::error::SignError;

/// Mean per-keypoint displacement (pixels/frame) below which two
/// neighbouring frames count as "at rest" for boundary trimming.
///
/// Clips are recorded with the signer holding a neutral pose at both
/// ends; those stretches show sub-pixel jitter only, while actual signing
/// moves keypoints by several pixels per frame at typical frame sizes.
pub const REST_MOTION_EPSILON: f32 = 0.5;

/// Merges an ordered sequence of clips into one continuous clip.
///
/// - Empty input fails with [`SignError::EmptyInput`].
/// - A single clip is returned unchanged, regardless of `trim`.
/// - Multiple clips must agree with the first clip on skeleton schema and
///   frame rate, else [`SignError::IncompatibleClips`].
/// - With `trim = true`, each clip's boundary rest frames (see
///   [`REST_MOTION_EPSILON`]) are dropped before splicing; at least one
///   frame per clip is always kept. With `trim = false`, clips are
///   spliced verbatim.
///
/// The output header is copied from the first clip; the output frame
/// count is the sum of the (possibly trimmed) input frame counts.
///
/// # Example
///
/// ```
/// use signpose_core::{concatenate, ClipHeader, PoseClip, PoseFrame};
///
/// let header = ClipHeader::new(25.0, 512, 512, "openpose_135");
/// let mut a = PoseClip::new(header.clone());
/// a.frames = vec![PoseFrame::new(); 3];
/// let mut b = PoseClip::new(header);
/// b.frames = vec![PoseFrame::new(); 4];
///
/// let merged = concatenate(vec![a, b], false).unwrap();
/// assert_eq!(merged.len(), 7);
/// ```
pub fn concatenate(clips: Vec<PoseClip>, trim: bool) -> Result<PoseClip, SignError> {
    let mut clips = clips.into_iter();
    let Some(first) = clips.next() else {
        return Err(SignError::EmptyInput {
            message: "no clips to concatenate".to_string(),
        });
    };

    let header = first.header.clone();
    let mut frames: Vec<PoseFrame> = Vec::new();
    let mut splice = |clip: PoseClip| {
        if trim {
            let (start, end) = trimmed_range(&clip.frames);
            frames.extend_from_slice(&clip.frames[start..end]);
        } else {
            frames.extend(clip.frames);
        }
    };

    let Some(second) = clips.next() else {
        // Identity law: a single clip passes through untouched.
        return Ok(first);
    };

    splice(first);
    for (index, clip) in [second].into_iter().chain(clips).enumerate() {
        if !clip.header.compatible_with(&header) {
            return Err(SignError::IncompatibleClips {
                message: format!(
                    "clip {} ({} @ {} fps) does not match clip 0 ({} @ {} fps)",
                    index + 1,
                    clip.header.schema,
                    clip.header.fps,
                    header.schema,
                    header.fps
                ),
            });
        }
        splice(clip);
    }

    Ok(PoseClip { header, frames })
}

/// Frame range that survives boundary trimming: leading frames are
/// dropped while no movement happens between a frame and its successor,
/// trailing frames likewise against their predecessor. Always keeps at
/// least one frame of a non-empty clip.
fn trimmed_range(frames: &[PoseFrame]) -> (usize, usize) {
    let mut start = 0;
    let mut end = frames.len();
    while start + 1 < end && is_rest_pair(&frames[start], &frames[start + 1]) {
        start += 1;
    }
    while end > start + 1 && is_rest_pair(&frames[end - 2], &frames[end - 1]) {
        end -= 1;
    }
    (start, end)
}

fn is_rest_pair(a: &PoseFrame, b: &PoseFrame) -> bool {
    frame_motion(a, b).is_some_and(|m| m < REST_MOTION_EPSILON)
}

/// Mean keypoint displacement between two frames, over keypoints detected
/// in both. `None` when the frames share no comparable keypoint — an
/// undetected boundary is treated as moving, never trimmed.
fn frame_motion(a: &PoseFrame, b: &PoseFrame) -> Option<f32> {
    let mut total = 0.0f32;
    let mut count = 0usize;
    for (name, part_a) in &a.parts {
        let Some(part_b) = b.part(name) else {
            continue;
        };
        for (ka, kb) in part_a.iter().zip(part_b.iter()) {
            if !ka.is_detected() || !kb.is_detected() {
                continue;
            }
            total += ka.distance_to(kb);
            count += 1;
        }
    }
    (count > 0).then(|| total / count as f32)
}
