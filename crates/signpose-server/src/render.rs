//! The rendering boundary — turning a pose file into a video by
//! invoking an external renderer and an external encoder.
//!
//! Both are separate processes with a fixed argument contract; their
//! failures are surfaced as [`SignError::Render`] with captured
//! diagnostics, never retried.

use std::path::Path;
use std::process::Command;

use signpose_core::SignError;

/// External commands and encoder settings for rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Renderer command: draws a pose file into a raw video.
    /// Invoked as `<renderer> --pose <in> --video <out>`.
    pub renderer: String,
    /// Encoder command, normally `ffmpeg`.
    pub encoder: String,
    /// Output pixel format handed to the encoder.
    pub pix_fmt: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            renderer: "pose_to_video".to_string(),
            encoder: "ffmpeg".to_string(),
            pix_fmt: "yuv420p".to_string(),
        }
    }
}

/// Renders `pose_path` into an H.264 video at `video_path`.
///
/// Runs the renderer into a temporary raw video next to the output,
/// then re-encodes it at `frame_rate` with the configured pixel format.
/// The raw intermediate is removed on success.
///
/// # Errors
///
/// [`SignError::Render`] when either process cannot be spawned or exits
/// non-zero; the message carries the captured stderr.
pub fn render_video(
    config: &RenderConfig,
    pose_path: &Path,
    video_path: &Path,
    frame_rate: u32,
) -> Result<(), SignError> {
    let raw_path = video_path.with_extension("raw.mp4");

    let render = Command::new(&config.renderer)
        .arg("--pose")
        .arg(pose_path)
        .arg("--video")
        .arg(&raw_path)
        .output();
    check_process(&config.renderer, render)?;

    let encode = Command::new(&config.encoder)
        .arg("-y")
        .arg("-i")
        .arg(&raw_path)
        .args(["-c:v", "libx264", "-pix_fmt", &config.pix_fmt, "-r"])
        .arg(frame_rate.to_string())
        .arg(video_path)
        .output();
    check_process(&config.encoder, encode)?;

    if let Err(e) = std::fs::remove_file(&raw_path) {
        tracing::warn!(path = %raw_path.display(), error = %e, "failed to remove raw video");
    }
    Ok(())
}

fn check_process(
    command: &str,
    result: std::io::Result<std::process::Output>,
) -> Result<(), SignError> {
    let output = result.map_err(|e| SignError::Render {
        message: format!("failed to run {command}: {e}"),
    })?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SignError::Render {
            message: format!("{command} exited with {}: {}", output.status, stderr.trim()),
        });
    }
    Ok(())
}
