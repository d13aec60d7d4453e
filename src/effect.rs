//! Shape effects for explosions.
//!
//! An effect replaces a burst's radial velocity field with a parametric one so
//! the particles trace a recognizable figure instead of a circle.

use crate::particle::Particle;
use crate::spawn::SpawnContext;
use glam::Vec2;
use std::f32::consts::TAU;

/// Velocity-field overrides a [`Charge`](crate::Charge) can apply to the
/// particles it spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Particles fly along a parametric heart curve, tinted red-dominant.
    Heart,
}

impl Effect {
    /// Scale applied to the heart curve so it fits the usual burst footprint.
    const HEART_SCALE: f32 = 0.3;

    /// Override the particle's velocity (and possibly color) in place.
    ///
    /// Called after the radial fan defaults have been set, so an effect only
    /// has to touch what it changes.
    pub fn apply(&self, ctx: &mut SpawnContext<'_>, particle: &mut Particle) {
        match self {
            Effect::Heart => {
                let t = ctx.progress() * TAU;
                // Classic parametric heart. Screen y grows downward, so the
                // y term is negated to keep the heart upright.
                let x = 16.0 * t.sin().powi(3);
                let y = -(13.0 * t.cos()
                    - 5.0 * (2.0 * t).cos()
                    - 2.0 * (3.0 * t).cos()
                    - (4.0 * t).cos());
                particle.v = Vec2::new(x, y) * Self::HEART_SCALE;
                particle.color = crate::Rgba::new(
                    ctx.random_range(200.0, 255.0),
                    ctx.random_range(20.0, 80.0),
                    ctx.random_range(60.0, 100.0),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgba;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_heart_overrides_velocity() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut ctx = SpawnContext::new(8, 32, &mut rng);
        let mut p = Particle::new(Vec2::ZERO, Rgba::WHITE, 40, 20, 2);
        p.v = Vec2::new(2.0, 0.0);
        Effect::Heart.apply(&mut ctx, &mut p);
        assert_ne!(p.v, Vec2::new(2.0, 0.0));
        assert!(p.v.x.is_finite() && p.v.y.is_finite());
    }

    #[test]
    fn test_heart_tints_red_dominant() {
        let mut rng = SmallRng::seed_from_u64(2);
        for i in 0..32 {
            let mut ctx = SpawnContext::new(i, 32, &mut rng);
            let mut p = Particle::new(Vec2::ZERO, Rgba::WHITE, 40, 20, 2);
            Effect::Heart.apply(&mut ctx, &mut p);
            assert!(p.color.r > p.color.g);
            assert!(p.color.r > p.color.b);
        }
    }

    #[test]
    fn test_heart_top_of_curve_points_up() {
        // The t = PI sample sits at the bottom tip of the heart; in screen
        // coordinates (y down) its velocity must point downward.
        let mut rng = SmallRng::seed_from_u64(3);
        let mut ctx = SpawnContext::new(16, 32, &mut rng);
        let mut p = Particle::new(Vec2::ZERO, Rgba::WHITE, 40, 20, 2);
        Effect::Heart.apply(&mut ctx, &mut p);
        assert!(p.v.y > 0.0);
    }
}
