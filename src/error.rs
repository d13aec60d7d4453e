//! Error types for skyburst.
//!
//! The simulation core is infallible; these types cover the window front-end
//! and frame capture, the two places that talk to the outside world.

use std::fmt;

/// Errors that can occur while running the demo window.
#[derive(Debug)]
pub enum RunError {
    /// Failed to create the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
    /// Failed to create or resize the presentation surface.
    Surface(softbuffer::SoftBufferError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            RunError::Window(e) => write!(f, "Failed to create window: {}", e),
            RunError::Surface(e) => write!(f, "Presentation surface error: {}", e),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::EventLoop(e) => Some(e),
            RunError::Window(e) => Some(e),
            RunError::Surface(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for RunError {
    fn from(e: winit::error::EventLoopError) -> Self {
        RunError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for RunError {
    fn from(e: winit::error::OsError) -> Self {
        RunError::Window(e)
    }
}

impl From<softbuffer::SoftBufferError> for RunError {
    fn from(e: softbuffer::SoftBufferError) -> Self {
        RunError::Surface(e)
    }
}

/// Errors that can occur while writing a frame to disk.
#[derive(Debug)]
pub enum CaptureError {
    /// Failed to encode the image.
    Image(image::ImageError),
    /// Failed to create the output directory or file.
    Io(std::io::Error),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Image(e) => write!(f, "Failed to encode frame: {}", e),
            CaptureError::Io(e) => write!(f, "Failed to write frame: {}", e),
        }
    }
}

impl std::error::Error for CaptureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CaptureError::Image(e) => Some(e),
            CaptureError::Io(e) => Some(e),
        }
    }
}

impl From<image::ImageError> for CaptureError {
    fn from(e: image::ImageError) -> Self {
        CaptureError::Image(e)
    }
}

impl From<std::io::Error> for CaptureError {
    fn from(e: std::io::Error) -> Self {
        CaptureError::Io(e)
    }
}
