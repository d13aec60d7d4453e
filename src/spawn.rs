//! Spawn context for particle initialization.
//!
//! Explosions create many particles in one go; `SpawnContext` carries the
//! per-particle index, the burst size and a borrowed seedable generator so
//! spawn code never reaches for an ambient RNG. Seeding the generator at the
//! [`World`](crate::World) makes every burst reproducible.
//!
//! ```ignore
//! for i in 0..count {
//!     let mut ctx = SpawnContext::new(i, count, &mut rng);
//!     let speed = 2.0 + 0.1 * ctx.random();
//!     let color = if ctx.chance(0.1) { ctx.random_color() } else { base };
//!     // ...
//! }
//! ```

use crate::color::Rgba;
use rand::rngs::SmallRng;
use rand::Rng;

/// Context provided to spawn code with helpers for common spawn patterns.
pub struct SpawnContext<'r> {
    /// Index of the particle being spawned (0 to count-1).
    pub index: u32,
    /// Total number of particles in the burst.
    pub count: u32,
    /// Borrowed seedable RNG - use the helper methods instead of raw draws.
    rng: &'r mut SmallRng,
}

impl<'r> SpawnContext<'r> {
    /// Create a spawn context for one particle of a burst.
    pub fn new(index: u32, count: u32, rng: &'r mut SmallRng) -> Self {
        Self { index, count, rng }
    }

    /// Normalized progress through the burst (0.0 to 1.0).
    ///
    /// Useful for distributing particles evenly:
    /// ```ignore
    /// let angle = ctx.progress() * TAU;  // particles around a circle
    /// ```
    #[inline]
    pub fn progress(&self) -> f32 {
        self.index as f32 / self.count.max(1) as f32
    }

    /// This particle's angle in an even fan with the given step, in radians.
    ///
    /// `step_degrees` is typically `360 / count`.
    #[inline]
    pub fn fan_angle(&self, step_degrees: f32) -> f32 {
        (self.index as f32 * step_degrees).to_radians()
    }

    // ========== Random primitives ==========

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in the given range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// Random u32 in the given inclusive range.
    #[inline]
    pub fn random_uint(&mut self, min: u32, max: u32) -> u32 {
        self.rng.gen_range(min..=max)
    }

    /// Either `1.0` or `-1.0`, equally likely.
    #[inline]
    pub fn random_sign(&mut self) -> f32 {
        if self.rng.gen::<bool>() {
            1.0
        } else {
            -1.0
        }
    }

    /// True with the given probability.
    #[inline]
    pub fn chance(&mut self, probability: f32) -> bool {
        self.rng.gen::<f32>() < probability
    }

    // ========== Color helpers ==========

    /// Random fully opaque color.
    pub fn random_color(&mut self) -> Rgba {
        Rgba::random(self.rng)
    }
}
