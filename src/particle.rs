//! Spark particles and their trail history.
//!
//! Particles are born in a charge's explosion, integrate simple kinematics
//! once per frame, and record a bounded FIFO trail of [`Trace`] samples. A
//! particle is never removed directly: past its lifetime the trail stops
//! growing and is drained instead, and the [`World`](crate::World) drops the
//! particle once the trail is empty. Particles flagged `explosive` trigger a
//! nested charge at their death position.

use crate::color::Rgba;
use crate::{Steppable, Trailed};
use glam::Vec2;
use std::collections::VecDeque;

/// A single historical position+color sample of an entity's trail.
///
/// Pure snapshot - never mutated after creation.
#[derive(Debug, Clone, Copy)]
pub struct Trace {
    pub position: Vec2,
    pub color: Rgba,
}

/// A short-lived moving point rendered with a fading trail.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Current (head) position.
    pub position: Vec2,
    /// Velocity, integrated into position each frame.
    pub v: Vec2,
    /// Acceleration, integrated into velocity each frame.
    pub a: Vec2,
    /// Frames lived so far.
    pub life_frames: u32,
    /// Frames after which the particle counts as dead.
    pub max_life_frames: u32,
    /// Nominal trail length in frames; the trace capacity is
    /// `trace_length / pass_trace`.
    pub trace_length: u32,
    /// A trace is recorded every `pass_trace`-th frame.
    pub pass_trace: u32,
    /// Whether death spawns a nested charge.
    pub explosive: bool,
    /// Base color; trail samples take this color with a fading alpha.
    pub color: Rgba,
    traces: VecDeque<Trace>,
}

impl Particle {
    /// Create a particle at rest. Velocity, acceleration and the `explosive`
    /// flag are set by the spawning code.
    pub fn new(
        position: Vec2,
        color: Rgba,
        max_life_frames: u32,
        trace_length: u32,
        pass_trace: u32,
    ) -> Self {
        Self {
            position,
            v: Vec2::ZERO,
            a: Vec2::ZERO,
            life_frames: 0,
            max_life_frames,
            trace_length,
            pass_trace: pass_trace.max(1),
            explosive: false,
            color,
            traces: VecDeque::new(),
        }
    }

    /// Maximum number of traces the trail holds.
    #[inline]
    pub fn trail_capacity(&self) -> usize {
        (self.trace_length / self.pass_trace.max(1)) as usize
    }

    /// Whether the particle has outlived `max_life_frames`.
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.life_frames > self.max_life_frames
    }

    /// Drain the trail of a dead particle.
    ///
    /// Called once per frame by the world's prune pass. While the live
    /// particle count is high (>= 1000) the oldest trace is dropped every
    /// frame to shed load; below that, only every 4th frame, so tails linger.
    pub fn decay_trail(&mut self, frame: u64, live_count: usize) {
        if !self.is_dead() {
            return;
        }
        if live_count >= 1000 || frame % 4 == 0 {
            self.traces.pop_front();
        }
    }

    fn record_trace(&mut self) {
        // Fades with age. The denominator is clamped so a just-born particle
        // (life_frames == 0) yields a finite alpha; with_alpha caps at 1.
        let alpha = self.max_life_frames as f32 / self.life_frames.max(1) as f32 / 2.0;
        self.traces.push_back(Trace {
            position: self.position,
            color: self.color.with_alpha(alpha),
        });
    }
}

impl Steppable for Particle {
    fn advance(&mut self) {
        if self.is_dead() || self.traces.len() >= self.trail_capacity() {
            self.traces.pop_front();
        } else if self.life_frames % self.pass_trace.max(1) == 0 {
            self.record_trace();
        }

        self.v += self.a;
        self.position += self.v;
        self.life_frames += 1;
    }
}

impl Trailed for Particle {
    fn traces(&self) -> &VecDeque<Trace> {
        &self.traces
    }

    fn head(&self) -> Vec2 {
        self.position
    }
}
