//! Rising charges and their explosions.
//!
//! A charge is the "rocket" stage of a firework: it rises (screen y
//! decreasing) while recording a short trail, and once its `y` crosses the
//! configured explosion height it converts into a radial burst of
//! [`Particle`]s and is removed by the [`World`](crate::World).
//!
//! # Configuration
//!
//! Charges are built from a [`ChargeConfig`], a builder with defaults for
//! every physical and visual parameter:
//!
//! ```ignore
//! ChargeConfig::new(Vec2::new(600.0, 850.0))
//!     .count(48.0)
//!     .explosion_y(300.0)
//!     .nest_explosion(true)
//!     .effect(Effect::Heart)
//! ```
//!
//! `ChargeConfig::randomized` produces the click-launch defaults (random
//! horizontal drift, random burst height and color), and
//! `ChargeConfig::nested` the secondary charges synthesized when an explosive
//! particle dies - those explode on their first frame.

use crate::color::Rgba;
use crate::effect::Effect;
use crate::particle::{Particle, Trace};
use crate::spawn::SpawnContext;
use crate::{Steppable, Trailed};
use glam::Vec2;
use rand::rngs::SmallRng;
use std::collections::VecDeque;
use std::f32::consts::FRAC_PI_2;

/// Stable identity of a live charge.
///
/// Assigned monotonically by the world at spawn; removal is by id lookup, so
/// two charges can never be confused for one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChargeId(pub(crate) u64);

/// Configuration for a charge, with defaults for every parameter.
#[derive(Debug, Clone)]
pub struct ChargeConfig {
    /// Launch position.
    pub position: Vec2,
    /// Initial velocity. Defaults to straight up at 6 px/frame.
    pub v: Vec2,
    /// Constant acceleration (gravity is applied separately by the world).
    pub a: Vec2,
    /// Number of particles the explosion produces. May be fractional; the
    /// spawn loop uses `floor(count)` while the fan step uses the raw value.
    pub count: f32,
    /// Charge (and default particle) color.
    pub color: Rgba,
    /// Lifetime of spawned particles, in frames.
    pub particle_max_life_frames: u32,
    /// Length of the charge's own trail.
    pub trace_length: usize,
    /// The charge explodes once `position.y` drops below this (smaller y =
    /// higher on screen). `f32::INFINITY` means "explode immediately".
    pub explosion_y: f32,
    /// Lower bound for per-particle trail length, drawn per particle.
    pub particle_min_trace_length: u32,
    /// Upper bound for per-particle trail length, drawn per particle.
    pub particle_max_trace_length: u32,
    /// Whether spawned particles may themselves explode into a nested charge.
    pub nest_explosion: bool,
    /// Drawn radius of the charge body.
    pub charge_radius: f32,
    /// Trace-recording stride for spawned particles.
    pub particle_pass_trace: u32,
    /// Optional shape effect applied to the burst.
    pub effect: Option<Effect>,
}

impl ChargeConfig {
    /// Create a configuration with defaults at the given position.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            v: Vec2::new(0.0, -6.0),
            a: Vec2::ZERO,
            count: 30.0,
            color: Rgba::WHITE,
            particle_max_life_frames: 80,
            trace_length: 4,
            explosion_y: 450.0,
            particle_min_trace_length: 40,
            particle_max_trace_length: 80,
            nest_explosion: false,
            charge_radius: 4.0,
            particle_pass_trace: 2,
            effect: None,
        }
    }

    /// The click-launch defaults: random horizontal drift, random burst
    /// height in the upper third of the screen, random color, occasional
    /// nested explosions.
    pub fn randomized(position: Vec2, height: f32, rng: &mut SmallRng) -> Self {
        let mut ctx = SpawnContext::new(0, 1, rng);
        Self::new(position)
            .velocity(Vec2::new(ctx.random() * 2.0 * ctx.random_sign(), -6.0))
            .count(30.0 + ctx.random() * 30.0)
            .color(ctx.random_color())
            .particle_max_life_frames(40 + (ctx.random() * 80.0).floor() as u32)
            .explosion_y(height / 2.0 - (height / 3.0) * ctx.random())
            .nest_explosion(ctx.chance(0.25))
    }

    /// A secondary charge synthesized where an explosive particle died.
    ///
    /// Does not rise: `explosion_y` is infinite so the charge bursts on its
    /// first frame, and the burst is smaller and shorter-lived than a launch.
    pub fn nested(position: Vec2, color: Rgba, rng: &mut SmallRng) -> Self {
        let mut ctx = SpawnContext::new(0, 1, rng);
        Self::new(position)
            .velocity(Vec2::ZERO)
            .count(10.0 + ctx.random() * 10.0)
            .color(color)
            .particle_max_life_frames(20 + (ctx.random() * 30.0).floor() as u32)
            .particle_trace_lengths(20, 40)
            .explosion_y(f32::INFINITY)
    }

    // =========================================================================
    // BUILDER METHODS
    // =========================================================================

    /// Set the initial velocity.
    pub fn velocity(mut self, v: Vec2) -> Self {
        self.v = v;
        self
    }

    /// Set the constant acceleration.
    pub fn acceleration(mut self, a: Vec2) -> Self {
        self.a = a;
        self
    }

    /// Set the particle count of the explosion.
    pub fn count(mut self, count: f32) -> Self {
        self.count = count;
        self
    }

    /// Set the charge color.
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Set the lifetime of spawned particles, in frames.
    pub fn particle_max_life_frames(mut self, frames: u32) -> Self {
        self.particle_max_life_frames = frames;
        self
    }

    /// Set the explosion height (smaller y = higher on screen).
    pub fn explosion_y(mut self, y: f32) -> Self {
        self.explosion_y = y;
        self
    }

    /// Set the per-particle trail length bounds.
    pub fn particle_trace_lengths(mut self, min: u32, max: u32) -> Self {
        self.particle_min_trace_length = min;
        self.particle_max_trace_length = max.max(min);
        self
    }

    /// Enable or disable nested explosions.
    pub fn nest_explosion(mut self, nested: bool) -> Self {
        self.nest_explosion = nested;
        self
    }

    /// Set the drawn radius of the charge body.
    pub fn charge_radius(mut self, radius: f32) -> Self {
        self.charge_radius = radius;
        self
    }

    /// Set the trace-recording stride for spawned particles.
    pub fn particle_pass_trace(mut self, stride: u32) -> Self {
        self.particle_pass_trace = stride.max(1);
        self
    }

    /// Apply a shape effect to the burst.
    pub fn effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }
}

/// A live rising charge.
#[derive(Debug, Clone)]
pub struct Charge {
    id: ChargeId,
    /// Current position.
    pub position: Vec2,
    /// Velocity, integrated into position each frame while rising.
    pub v: Vec2,
    /// Acceleration, integrated into velocity each frame while rising.
    pub a: Vec2,
    /// Burst size (possibly fractional, see [`ChargeConfig::count`]).
    pub count: f32,
    /// Charge color.
    pub color: Rgba,
    /// Lifetime handed to spawned particles.
    pub particle_max_life_frames: u32,
    /// Length of the charge's own trail.
    pub trace_length: usize,
    /// Target explosion height.
    pub explosion_y: f32,
    /// Per-particle trail length bounds.
    pub particle_min_trace_length: u32,
    pub particle_max_trace_length: u32,
    /// Whether spawned particles may trigger nested explosions.
    pub nest_explosion: bool,
    /// Drawn radius of the charge body.
    pub charge_radius: f32,
    /// Trace-recording stride for spawned particles.
    pub particle_pass_trace: u32,
    /// Optional shape effect.
    pub effect: Option<Effect>,
    traces: VecDeque<Trace>,
}

impl Charge {
    /// Probability that a particle of a nesting charge is itself explosive.
    const EXPLOSIVE_CHANCE: f32 = 0.05;

    pub(crate) fn from_config(id: ChargeId, config: ChargeConfig) -> Self {
        Self {
            id,
            position: config.position,
            v: config.v,
            a: config.a,
            count: config.count,
            color: config.color,
            particle_max_life_frames: config.particle_max_life_frames,
            trace_length: config.trace_length,
            explosion_y: config.explosion_y,
            particle_min_trace_length: config.particle_min_trace_length,
            particle_max_trace_length: config.particle_max_trace_length,
            nest_explosion: config.nest_explosion,
            charge_radius: config.charge_radius,
            particle_pass_trace: config.particle_pass_trace,
            effect: config.effect,
            traces: VecDeque::new(),
        }
    }

    /// The charge's stable identity.
    #[inline]
    pub fn id(&self) -> ChargeId {
        self.id
    }

    /// True exactly when the target height has been reached. The world
    /// explodes and removes the charge in the same tick this first holds.
    #[inline]
    pub fn ready_to_explode(&self) -> bool {
        self.position.y < self.explosion_y
    }

    /// Burst into particles, arranged in an even angular fan.
    ///
    /// Produces `floor(count)` particles; the fan step is `360 / count`
    /// degrees using the raw (possibly fractional) count. Each particle gets
    /// a randomized speed scale and a randomized rotation on its acceleration
    /// (air drift). One in ten particles takes a random color of its own.
    pub fn explode(&self, rng: &mut SmallRng) -> Vec<Particle> {
        let n = self.count.floor() as u32;
        let step_degrees = 360.0 / self.count;
        let mut burst = Vec::with_capacity(n as usize);

        for i in 0..n {
            let mut ctx = SpawnContext::new(i, n, rng);
            let angle = ctx.fan_angle(step_degrees);
            let dir = Vec2::new(angle.cos(), angle.sin());

            let color = if ctx.chance(0.1) {
                ctx.random_color()
            } else {
                self.color
            };
            let trace_length = ctx.random_uint(
                self.particle_min_trace_length,
                self.particle_max_trace_length,
            );

            let mut particle = Particle::new(
                self.position,
                color,
                self.particle_max_life_frames,
                trace_length,
                self.particle_pass_trace,
            );
            particle.v = dir * (2.0 + 0.1 * ctx.random());
            particle.a = Vec2::from_angle(ctx.random() * FRAC_PI_2).rotate(dir * 0.01);
            particle.explosive = self.nest_explosion && ctx.chance(Self::EXPLOSIVE_CHANCE);

            if let Some(effect) = self.effect {
                effect.apply(&mut ctx, &mut particle);
            }

            burst.push(particle);
        }

        burst
    }

    fn record_trace(&mut self) {
        // Newer trails are more opaque; the clamp keeps the first sample
        // (empty deque) finite.
        let alpha = self.trace_length as f32 / self.traces.len().max(1) as f32 * 0.8;
        self.traces.push_back(Trace {
            position: self.position,
            color: self.color.with_alpha(alpha),
        });
    }
}

impl Steppable for Charge {
    fn advance(&mut self) {
        // Each frame either trims one trail entry or appends one, never both.
        if self.traces.len() > self.trace_length {
            self.traces.pop_front();
        } else {
            self.record_trace();
        }

        if !self.ready_to_explode() {
            self.v += self.a;
            self.position += self.v;
        }
    }
}

impl Trailed for Charge {
    fn traces(&self) -> &VecDeque<Trace> {
        &self.traces
    }

    fn head(&self) -> Vec2 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(1234)
    }

    fn charge(config: ChargeConfig) -> Charge {
        Charge::from_config(ChargeId(0), config)
    }

    #[test]
    fn test_config_builder_chain() {
        let config = ChargeConfig::new(Vec2::new(600.0, 850.0))
            .count(48.0)
            .explosion_y(300.0)
            .particle_trace_lengths(10, 20)
            .nest_explosion(true)
            .effect(Effect::Heart);

        assert_eq!(config.count, 48.0);
        assert_eq!(config.explosion_y, 300.0);
        assert_eq!(config.particle_min_trace_length, 10);
        assert_eq!(config.particle_max_trace_length, 20);
        assert!(config.nest_explosion);
        assert_eq!(config.effect, Some(Effect::Heart));
    }

    #[test]
    fn test_trace_length_bounds_stay_ordered() {
        let config = ChargeConfig::new(Vec2::ZERO).particle_trace_lengths(50, 10);
        assert_eq!(config.particle_max_trace_length, 50);
    }

    #[test]
    fn test_rises_while_velocity_up() {
        let mut c = charge(ChargeConfig::new(Vec2::new(600.0, 850.0)).explosion_y(0.0));
        let mut prev_y = c.position.y;
        for _ in 0..20 {
            c.advance();
            assert!(c.position.y < prev_y);
            prev_y = c.position.y;
        }
    }

    #[test]
    fn test_explode_count_exact() {
        let c = charge(ChargeConfig::new(Vec2::ZERO).count(30.0));
        assert_eq!(c.explode(&mut rng()).len(), 30);
    }

    #[test]
    fn test_explode_fractional_count_floors() {
        let c = charge(ChargeConfig::new(Vec2::ZERO).count(30.7));
        assert_eq!(c.explode(&mut rng()).len(), 30);
    }

    #[test]
    fn test_explode_fan_angles_even() {
        let c = charge(ChargeConfig::new(Vec2::ZERO).count(30.0));
        let burst = c.explode(&mut rng());
        let step = (360.0f32 / 30.0).to_radians();
        for (i, p) in burst.iter().enumerate() {
            let angle = i as f32 * step;
            let dir = Vec2::new(angle.cos(), angle.sin());
            // Speed scale is randomized but the direction is the fan angle.
            let speed = p.v.length();
            assert!((p.v - dir * speed).length() < 1e-3, "particle {i} off-fan");
            assert!((2.0..2.1).contains(&speed));
        }
    }

    #[test]
    fn test_explode_particles_inherit_lifetime() {
        let c = charge(
            ChargeConfig::new(Vec2::ZERO)
                .count(10.0)
                .particle_max_life_frames(55),
        );
        for p in c.explode(&mut rng()) {
            assert_eq!(p.max_life_frames, 55);
        }
    }

    #[test]
    fn test_explode_trace_lengths_within_bounds() {
        let c = charge(
            ChargeConfig::new(Vec2::ZERO)
                .count(40.0)
                .particle_trace_lengths(12, 24),
        );
        for p in c.explode(&mut rng()) {
            assert!((12..=24).contains(&p.trace_length));
        }
    }

    #[test]
    fn test_no_explosive_particles_without_nesting() {
        let c = charge(ChargeConfig::new(Vec2::ZERO).count(40.0));
        assert!(c.explode(&mut rng()).iter().all(|p| !p.explosive));
    }

    #[test]
    fn test_nested_config_explodes_immediately() {
        let config = ChargeConfig::nested(Vec2::new(300.0, 200.0), Rgba::WHITE, &mut rng());
        let c = charge(config);
        assert!(c.ready_to_explode());
    }

    #[test]
    fn test_charge_trail_bounded() {
        let mut c = charge(ChargeConfig::new(Vec2::new(600.0, 850.0)).explosion_y(0.0));
        for _ in 0..50 {
            c.advance();
        }
        // One trim or one append per frame keeps the deque near trace_length.
        assert!(c.traces().len() <= c.trace_length + 1);
    }

    #[test]
    fn test_stops_integrating_once_ready() {
        let mut c = charge(ChargeConfig::new(Vec2::new(600.0, 100.0)).explosion_y(450.0));
        assert!(c.ready_to_explode());
        let position = c.position;
        c.advance();
        assert_eq!(c.position, position);
    }

    #[test]
    fn test_explosion_deterministic_under_seed() {
        let c = charge(ChargeConfig::new(Vec2::ZERO).count(20.0).nest_explosion(true));
        let a = c.explode(&mut rng());
        let b = c.explode(&mut rng());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.v, y.v);
            assert_eq!(x.color, y.color);
            assert_eq!(x.explosive, y.explosive);
        }
    }
}
