//! Clip storage codec — the `read_clip`/`write_clip` contract.
//!
//! Clips are stored as versioned JSON documents. Callers treat the
//! layout as opaque: everything goes through [`read_clip`] and
//! [`write_clip`], and a version bump here is invisible to them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::clip::PoseClip;
use crate::error::SignError;

/// Current on-disk clip document version.
pub const CLIP_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct ClipDocument {
    version: u32,
    #[serde(flatten)]
    clip: PoseClip,
}

/// Loads a clip from storage.
///
/// Fails with [`SignError::StorageRead`] when the resource is missing,
/// unreadable, not a clip document, or of an unsupported version.
///
/// # Example
///
/// ```no_run
/// use signpose_core::read_clip;
/// use std::path::Path;
///
/// let clip = read_clip(Path::new("lexicon/xin_chao.pose.json")).unwrap();
/// assert!(!clip.is_empty());
/// ```
pub fn read_clip(path: &Path) -> Result<PoseClip, SignError> {
    let storage_read = |message: String| SignError::StorageRead {
        reference: path.display().to_string(),
        message,
    };

    let bytes = fs::read(path).map_err(|e| storage_read(e.to_string()))?;
    let document: ClipDocument =
        serde_json::from_slice(&bytes).map_err(|e| storage_read(e.to_string()))?;
    if document.version != CLIP_FORMAT_VERSION {
        return Err(storage_read(format!(
            "unsupported clip format version {} (expected {CLIP_FORMAT_VERSION})",
            document.version
        )));
    }
    Ok(document.clip)
}

/// Writes a clip to storage at `destination`.
///
/// Fails with [`SignError::StorageWrite`] when encoding or the write
/// itself fails.
///
/// # Example
///
/// ```no_run
/// use signpose_core::{write_clip, ClipHeader, PoseClip};
/// use std::path::Path;
///
/// let clip = PoseClip::new(ClipHeader::new(25.0, 512, 512, "openpose_135"));
/// write_clip(&clip, Path::new("out/result.pose.json")).unwrap();
/// ```
pub fn write_clip(clip: &PoseClip, destination: &Path) -> Result<(), SignError> {
    let storage_write = |message: String| SignError::StorageWrite {
        path: destination.display().to_string(),
        message,
    };

    let document = ClipDocument {
        version: CLIP_FORMAT_VERSION,
        clip: clip.clone(),
    };
    let bytes = serde_json::to_vec(&document).map_err(|e| storage_write(e.to_string()))?;
    fs::write(destination, bytes).map_err(|e| storage_write(e.to_string()))
}
