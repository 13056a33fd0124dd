//! The pose clip — a keypoint time series for one sign.
//!
//! A clip is an ordered sequence of [`PoseFrame`]s, each holding named
//! body-part keypoint arrays, plus a [`ClipHeader`] carrying frame rate,
//! frame dimensions, and the skeleton schema identifier.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single 2D keypoint with a detection confidence.
///
/// Coordinates are in pixels of the clip's frame dimensions. A confidence
/// of `0.0` marks a keypoint that was not detected in this frame.
///
/// # Example
///
/// ```
/// use signpose_core::Keypoint;
///
/// let kp = Keypoint::new(120.0, 96.5, 0.98);
/// assert!(kp.is_detected());
/// assert!(!Keypoint::new(0.0, 0.0, 0.0).is_detected());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    /// Horizontal position in pixels.
    pub x: f32,
    /// Vertical position in pixels.
    pub y: f32,
    /// Detection confidence in `[0, 1]`. `0.0` means undetected.
    pub confidence: f32,
}

impl Keypoint {
    /// Creates a keypoint.
    pub fn new(x: f32, y: f32, confidence: f32) -> Self {
        Self { x, y, confidence }
    }

    /// Returns `true` when the keypoint was detected (`confidence > 0`).
    pub fn is_detected(&self) -> bool {
        self.confidence > 0.0
    }

    /// Euclidean distance to another keypoint, ignoring confidence.
    pub fn distance_to(&self, other: &Keypoint) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// One frame of a clip: named body-part keypoint arrays.
///
/// Part names follow the clip's skeleton schema (for example `"body"`,
/// `"left_hand"`, `"right_hand"`, `"face"`). A `BTreeMap` keeps part
/// iteration order deterministic, which matters for reproducible output.
///
/// # Example
///
/// ```
/// use signpose_core::{Keypoint, PoseFrame};
///
/// let mut frame = PoseFrame::new();
/// frame.insert_part("right_hand", vec![Keypoint::new(10.0, 20.0, 1.0)]);
/// assert_eq!(frame.part("right_hand").map(|k| k.len()), Some(1));
/// assert!(frame.part("left_hand").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseFrame {
    /// Keypoints per body part, keyed by part name.
    pub parts: BTreeMap<String, Vec<Keypoint>>,
}

impl PoseFrame {
    /// Creates an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) the keypoint array for a body part.
    pub fn insert_part(&mut self, name: impl Into<String>, keypoints: Vec<Keypoint>) {
        self.parts.insert(name.into(), keypoints);
    }

    /// Returns the keypoint array for a body part, if present.
    pub fn part(&self, name: &str) -> Option<&[Keypoint]> {
        self.parts.get(name).map(|k| k.as_slice())
    }

    /// Total number of keypoints across all parts.
    pub fn keypoint_count(&self) -> usize {
        self.parts.values().map(|k| k.len()).sum()
    }
}

/// Clip-level metadata: frame rate, frame dimensions, skeleton schema.
///
/// Two clips can only be concatenated when their schema and frame rate
/// agree; see [`ClipHeader::compatible_with`].
///
/// # Example
///
/// ```
/// use signpose_core::ClipHeader;
///
/// let a = ClipHeader::new(25.0, 512, 512, "openpose_135");
/// let b = ClipHeader::new(25.0, 256, 256, "openpose_135");
/// let c = ClipHeader::new(30.0, 512, 512, "openpose_135");
/// assert!(a.compatible_with(&b));
/// assert!(!a.compatible_with(&c));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipHeader {
    /// Frames per second.
    pub fps: f32,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Skeleton schema identifier, e.g. `"openpose_135"`.
    pub schema: String,
}

impl ClipHeader {
    /// Creates a header.
    pub fn new(fps: f32, width: u32, height: u32, schema: impl Into<String>) -> Self {
        Self {
            fps,
            width,
            height,
            schema: schema.into(),
        }
    }

    /// Returns `true` when clips with these headers may be spliced:
    /// same skeleton schema and same frame rate. Frame dimensions are
    /// allowed to differ (keypoints are repositioned by the renderer).
    pub fn compatible_with(&self, other: &ClipHeader) -> bool {
        self.schema == other.schema && self.fps == other.fps
    }
}

/// A pose clip: an ordered frame sequence plus its header.
///
/// Clips are treated as immutable value objects by the resolution engine.
/// They are produced by [`crate::read_clip`] and consumed by
/// [`crate::concatenate`] within one request.
///
/// # Example
///
/// ```
/// use signpose_core::{ClipHeader, PoseClip, PoseFrame};
///
/// let mut clip = PoseClip::new(ClipHeader::new(25.0, 512, 512, "openpose_135"));
/// assert!(clip.is_empty());
///
/// clip.frames.push(PoseFrame::new());
/// assert_eq!(clip.len(), 1);
/// assert!((clip.duration_secs() - 0.04).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseClip {
    /// Clip metadata.
    pub header: ClipHeader,
    /// The frame sequence, in temporal order.
    pub frames: Vec<PoseFrame>,
}

impl PoseClip {
    /// Creates an empty clip with the given header.
    pub fn new(header: ClipHeader) -> Self {
        Self {
            header,
            frames: Vec::new(),
        }
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` when the clip has no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Clip duration in seconds at the header's frame rate.
    ///
    /// Returns `0.0` for a zero or negative frame rate.
    pub fn duration_secs(&self) -> f32 {
        if self.header.fps > 0.0 {
            self.frames.len() as f32 / self.header.fps
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keypoint_detection_flag() {
        assert!(Keypoint::new(1.0, 2.0, 0.5).is_detected());
        assert!(!Keypoint::new(1.0, 2.0, 0.0).is_detected());
    }

    #[test]
    fn keypoint_distance() {
        let a = Keypoint::new(0.0, 0.0, 1.0);
        let b = Keypoint::new(3.0, 4.0, 1.0);
        assert!((a.distance_to(&b) - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn frame_part_roundtrip() {
        let mut frame = PoseFrame::new();
        frame.insert_part("body", vec![Keypoint::new(0.0, 0.0, 1.0); 17]);
        frame.insert_part("left_hand", vec![Keypoint::new(0.0, 0.0, 1.0); 21]);

        assert_eq!(frame.part("body").map(|k| k.len()), Some(17));
        assert_eq!(frame.keypoint_count(), 38);
        assert!(frame.part("face").is_none());
    }

    #[test]
    fn header_compatibility_checks_schema_and_fps() {
        let base = ClipHeader::new(25.0, 512, 512, "openpose_135");
        assert!(base.compatible_with(&ClipHeader::new(25.0, 128, 128, "openpose_135")));
        assert!(!base.compatible_with(&ClipHeader::new(25.0, 512, 512, "holistic_543")));
        assert!(!base.compatible_with(&ClipHeader::new(24.0, 512, 512, "openpose_135")));
    }

    #[test]
    fn clip_duration() {
        let mut clip = PoseClip::new(ClipHeader::new(25.0, 512, 512, "openpose_135"));
        clip.frames = vec![PoseFrame::new(); 50];
        assert!((clip.duration_secs() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn clip_duration_zero_fps_is_zero() {
        let mut clip = PoseClip::new(ClipHeader::new(0.0, 512, 512, "openpose_135"));
        clip.frames = vec![PoseFrame::new(); 10];
        assert_eq!(clip.duration_secs(), 0.0);
    }
}
