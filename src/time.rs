//! Frame timing for the animation loop.
//!
//! The simulation itself is frame-counted, not wall-clock driven; this module
//! only tracks how fast frames are actually being produced and whether the
//! loop is paused.
//!
//! # Example
//!
//! ```ignore
//! use skyburst::time::FrameClock;
//!
//! let mut clock = FrameClock::new();
//!
//! // In your redraw handler:
//! if !clock.is_paused() {
//!     clock.tick();
//! }
//! println!("frame {} at {:.1} fps", clock.frame(), clock.fps());
//! ```

use std::time::{Duration, Instant};

/// Frame counting, FPS measurement and pause state for the animation loop.
#[derive(Debug)]
pub struct FrameClock {
    /// When the clock was created.
    start: Instant,
    /// Total ticks since start.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update the FPS calculation.
    fps_update_interval: Duration,
    /// Whether the loop is paused.
    paused: bool,
}

impl FrameClock {
    /// Create a clock starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
            paused: false,
        }
    }

    /// Count one produced frame and refresh the FPS estimate. Call once per
    /// simulated frame; a no-op while paused.
    pub fn tick(&mut self) -> u64 {
        if self.paused {
            return self.frame_count;
        }
        self.frame_count += 1;

        let now = Instant::now();
        let elapsed = now.duration_since(self.fps_update_time);
        if elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        self.frame_count
    }

    /// Total ticks since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Measured frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Seconds since the clock was created.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Whether the loop is paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the loop; ticks become no-ops.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume after pausing. Resets the FPS window so the pause gap does not
    /// drag the estimate down.
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.fps_update_time = Instant::now();
            self.fps_frame_count = self.frame_count;
        }
    }

    /// Toggle pause state.
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
