//! The simulation world and its frame loop.
//!
//! `World` owns the two live collections - charges and particles - and is the
//! only place they are mutated. Each call to [`World::frame`] performs one
//! animation tick in a fixed order:
//!
//! 1. clear the surface;
//! 2. prune: drain dead particle trails, drop particles whose trail emptied,
//!    and synthesize a nested charge for each dropped `explosive` particle;
//! 3. particles: apply gravity, draw the trail (line segments while alive,
//!    faded points once dead) and the head, then advance physics;
//! 4. charges: apply gravity, draw the body and its trail (radius scaled by
//!    recency), advance physics; every charge that reached its target height
//!    explodes into the particle set and is removed by id.
//!
//! Drawing an entity always happens before advancing it, so the pixels on
//! screen reflect the state the frame started with.

use crate::charge::{Charge, ChargeConfig, ChargeId};
use crate::color::Rgba;
use crate::particle::Particle;
use crate::surface::Surface;
use crate::{Steppable, Trailed};
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Downward pull applied to every entity, per frame.
const GRAVITY: Vec2 = Vec2::new(0.0, 0.01);

/// Line width of particle trail segments.
const TRAIL_LINE_WIDTH: f32 = 2.0;

/// Radius of the faded points a dead particle's trail collapses into.
const TRAIL_POINT_RADIUS: f32 = 1.1;

/// Owner of all live simulation state.
pub struct World {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    charges: Vec<Charge>,
    rng: SmallRng,
    next_charge_id: u64,
    frame_index: u64,
}

impl World {
    /// Create a world of the given logical dimensions, seeded from entropy.
    pub fn new(width: f32, height: f32) -> Self {
        Self::from_rng(width, height, SmallRng::from_entropy())
    }

    /// Create a world with a fixed seed. Every run with the same seed and the
    /// same sequence of spawns produces identical frames.
    pub fn with_seed(width: f32, height: f32, seed: u64) -> Self {
        Self::from_rng(width, height, SmallRng::seed_from_u64(seed))
    }

    fn from_rng(width: f32, height: f32, rng: SmallRng) -> Self {
        Self {
            width,
            height,
            particles: Vec::new(),
            charges: Vec::new(),
            rng,
            next_charge_id: 0,
            frame_index: 0,
        }
    }

    /// Logical width of the scene.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Logical height of the scene.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Frames simulated so far.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// The live particles.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The live charges.
    #[inline]
    pub fn charges(&self) -> &[Charge] {
        &self.charges
    }

    /// Add a charge to the live set and return its id.
    pub fn spawn_charge(&mut self, config: ChargeConfig) -> ChargeId {
        let id = ChargeId(self.next_charge_id);
        self.next_charge_id += 1;
        self.charges.push(Charge::from_config(id, config));
        id
    }

    /// Launch a firework with the randomized click defaults at `(x, y)`.
    pub fn launch(&mut self, x: f32, y: f32) -> ChargeId {
        let config = ChargeConfig::randomized(Vec2::new(x, y), self.height, &mut self.rng);
        self.spawn_charge(config)
    }

    /// Remove a charge by id. Returns the charge if it was live.
    pub fn remove_charge(&mut self, id: ChargeId) -> Option<Charge> {
        let at = self.charges.iter().position(|c| c.id() == id)?;
        Some(self.charges.remove(at))
    }

    /// Build a randomized charge configuration without spawning it.
    ///
    /// Lets callers tweak the click defaults (add an effect, force nesting)
    /// before handing the config to [`World::spawn_charge`].
    pub fn launch_config(&mut self, x: f32, y: f32) -> ChargeConfig {
        ChargeConfig::randomized(Vec2::new(x, y), self.height, &mut self.rng)
    }

    /// Run one animation tick against the given surface.
    pub fn frame<S: Surface>(&mut self, surface: &mut S) {
        surface.clear();
        self.prune();
        self.step_particles(surface);
        self.step_charges(surface);
        self.frame_index += 1;
    }

    /// Drain dead trails and drop spent particles; explosive deaths turn into
    /// nested charges at the particle's last position.
    fn prune(&mut self) {
        let live = self.particles.len();
        let frame = self.frame_index;
        let mut nested: Vec<(Vec2, Rgba)> = Vec::new();

        self.particles.retain_mut(|p| {
            p.decay_trail(frame, live);
            // Newborns record their first trace on their first advance, which
            // happens after this pass; only an emptied trail counts as death.
            if p.life_frames > 0 && p.traces().is_empty() {
                if p.explosive {
                    nested.push((p.head(), p.color));
                }
                false
            } else {
                true
            }
        });

        for (position, color) in nested {
            let config = ChargeConfig::nested(position, color, &mut self.rng);
            self.spawn_charge(config);
        }
    }

    fn step_particles<S: Surface>(&mut self, surface: &mut S) {
        for particle in &mut self.particles {
            particle.v += GRAVITY;

            let dead = particle.is_dead();
            let traces = particle.traces();
            for (i, trace) in traces.iter().enumerate() {
                match traces.get(i + 1) {
                    Some(next) if !dead => {
                        surface.draw_line(
                            trace.position,
                            next.position,
                            TRAIL_LINE_WIDTH,
                            next.color,
                        );
                    }
                    // newest sample, or any sample once the particle is dead
                    _ => surface.draw_point(trace.position, TRAIL_POINT_RADIUS, trace.color),
                }
            }
            if !dead {
                surface.draw_point(particle.head(), TRAIL_POINT_RADIUS, particle.color);
            }

            particle.advance();
        }
    }

    fn step_charges<S: Surface>(&mut self, surface: &mut S) {
        for charge in &mut self.charges {
            charge.v += GRAVITY;

            surface.draw_point(charge.position, charge.charge_radius, charge.color);
            let len = charge.traces().len();
            for (i, trace) in charge.traces().iter().enumerate() {
                let radius = charge.charge_radius * (i + 1) as f32 / len as f32;
                surface.draw_point(trace.position, radius, trace.color);
            }

            charge.advance();
        }

        let ready: Vec<ChargeId> = self
            .charges
            .iter()
            .filter(|c| c.ready_to_explode())
            .map(|c| c.id())
            .collect();
        for id in ready {
            if let Some(charge) = self.remove_charge(id) {
                let burst = charge.explode(&mut self.rng);
                self.particles.extend(burst);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Canvas;
    use crate::Rgba;

    fn world() -> World {
        World::with_seed(1200.0, 900.0, 42)
    }

    fn canvas() -> Canvas {
        Canvas::new(64, 64)
    }

    #[test]
    fn test_charge_explodes_into_exact_count_same_tick() {
        let mut w = world();
        let mut c = canvas();
        w.spawn_charge(
            ChargeConfig::new(Vec2::new(600.0, 850.0))
                .count(30.0)
                .explosion_y(800.0),
        );

        // Rises ~6 px per frame; catch the tick the charge disappears on.
        loop {
            let before = w.particles().len();
            let was_live = !w.charges().is_empty();
            w.frame(&mut c);
            if was_live && w.charges().is_empty() {
                assert_eq!(w.particles().len(), before + 30);
                break;
            }
            assert!(w.frame_index() < 100, "charge never exploded");
        }
    }

    #[test]
    fn test_charge_removed_exactly_once() {
        let mut w = world();
        let mut c = canvas();
        let id = w.spawn_charge(ChargeConfig::new(Vec2::new(600.0, 850.0)).explosion_y(840.0));
        for _ in 0..10 {
            w.frame(&mut c);
        }
        assert!(w.charges().iter().all(|ch| ch.id() != id));
        assert!(w.remove_charge(id).is_none());
    }

    #[test]
    fn test_removal_is_by_id_not_position() {
        let mut w = world();
        let a = w.spawn_charge(ChargeConfig::new(Vec2::new(100.0, 850.0)).explosion_y(0.0));
        let b = w.spawn_charge(ChargeConfig::new(Vec2::new(200.0, 850.0)).explosion_y(0.0));
        assert_ne!(a, b);
        let removed = w.remove_charge(a).unwrap();
        assert_eq!(removed.id(), a);
        assert_eq!(w.charges().len(), 1);
        assert_eq!(w.charges()[0].id(), b);
    }

    #[test]
    fn test_explosive_particle_spawns_one_nested_charge() {
        let mut w = world();

        let mut p = Particle::new(Vec2::new(300.0, 400.0), Rgba::WHITE, 0, 4, 1);
        p.explosive = true;
        // a lone trace that the prune pass will drain
        p.advance();
        p.life_frames = 10; // past max_life_frames = 0
        let last = p.head();
        w.particles.push(p);

        // frame_index 0 is a decay frame, so the single trace pops here
        w.prune();

        assert!(w.particles().is_empty());
        assert_eq!(w.charges().len(), 1);
        let nested = &w.charges()[0];
        assert!(nested.explosion_y.is_infinite());
        assert_eq!(nested.position, last);
    }

    #[test]
    fn test_nested_charge_bursts_on_first_tick() {
        let mut w = world();
        let mut c = canvas();
        let config = ChargeConfig::nested(Vec2::new(300.0, 400.0), Rgba::WHITE, &mut w.rng);
        let expected = config.count.floor() as usize;
        w.spawn_charge(config);
        w.frame(&mut c);
        assert!(w.charges().is_empty());
        assert_eq!(w.particles().len(), expected);
    }

    #[test]
    fn test_particles_disappear_when_trails_empty() {
        let mut w = world();
        let mut c = canvas();
        w.spawn_charge(
            ChargeConfig::new(Vec2::new(600.0, 850.0))
                .count(10.0)
                .explosion_y(840.0)
                .particle_max_life_frames(5)
                .particle_trace_lengths(4, 6),
        );
        for _ in 0..400 {
            w.frame(&mut c);
            if w.particles().is_empty() && w.charges().is_empty() {
                return;
            }
        }
        panic!("particles never fully expired");
    }

    #[test]
    fn test_frame_deterministic_under_seed() {
        let run = |seed: u64| {
            let mut w = World::with_seed(1200.0, 900.0, seed);
            let mut c = canvas();
            w.launch(600.0, 850.0);
            for _ in 0..120 {
                w.frame(&mut c);
            }
            (
                w.particles().len(),
                w.charges().len(),
                w.particles().first().map(|p| p.position),
            )
        };
        assert_eq!(run(7), run(7));
    }

    #[test]
    fn test_launch_uses_click_position_and_bounds() {
        let mut w = world();
        w.launch(432.0, 765.0);
        let charge = &w.charges()[0];
        assert_eq!(charge.position, Vec2::new(432.0, 765.0));
        // burst height within H/2 - H/3 .. H/2
        assert!(charge.explosion_y <= 450.0);
        assert!(charge.explosion_y >= 450.0 - 300.0);
        assert_eq!(charge.v.y, -6.0);
        assert!(charge.v.x.abs() < 2.0);
    }

    #[test]
    fn test_frame_counter_advances() {
        let mut w = world();
        let mut c = canvas();
        assert_eq!(w.frame_index(), 0);
        w.frame(&mut c);
        w.frame(&mut c);
        assert_eq!(w.frame_index(), 2);
    }
}
