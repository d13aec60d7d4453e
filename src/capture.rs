//! Frame capture to PNG.
//!
//! Writes the canvas pixel buffer to numbered PNG files, for grabbing stills
//! of a nice burst or stitching a clip together afterwards.

use crate::error::CaptureError;
use crate::surface::Canvas;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes canvas frames as `frame_NNNNNN.png` into a directory.
///
/// # Example
///
/// ```ignore
/// let recorder = FrameRecorder::new("captures");
/// let path = recorder.capture(&canvas, clock.frame())?;
/// println!("saved {}", path.display());
/// ```
pub struct FrameRecorder {
    dir: PathBuf,
}

impl FrameRecorder {
    /// Create a recorder targeting the given directory. The directory is
    /// created on first capture.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the canvas as a PNG named after the frame number.
    pub fn capture(&self, canvas: &Canvas, frame: u64) -> Result<PathBuf, CaptureError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("frame_{frame:06}.png"));
        image::save_buffer(
            &path,
            canvas.pixels(),
            canvas.width(),
            canvas.height(),
            image::ColorType::Rgba8,
        )?;
        Ok(path)
    }
}
