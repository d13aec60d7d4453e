//! RGBA color values.
//!
//! Channels follow the conventions of the original canvas demo this engine
//! grew out of: `r`/`g`/`b` in `0..=255`, alpha in `0..=1`. Alpha is the only
//! channel the simulation mutates over time - it encodes trail fade.

use rand::Rng;

/// An RGBA color. `r`/`g`/`b` in `0..=255`, `a` in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Fully opaque white.
    pub const WHITE: Rgba = Rgba {
        r: 255.0,
        g: 255.0,
        b: 255.0,
        a: 1.0,
    };

    /// Create a fully opaque color.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit channels.
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32, g as f32, b as f32)
    }

    /// A random fully opaque color, each channel drawn from `0..255`.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(
            (rng.gen::<f32>() * 255.0).floor(),
            (rng.gen::<f32>() * 255.0).floor(),
            (rng.gen::<f32>() * 255.0).floor(),
        )
    }

    /// The same color with a different alpha. Alpha is clamped to `0..=1` so
    /// fade formulas that overshoot never produce out-of-range values.
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// The color as 8-bit RGBA channels, alpha premultiplied out.
    pub fn to_bytes(self) -> [u8; 4] {
        [
            self.r.clamp(0.0, 255.0) as u8,
            self.g.clamp(0.0, 255.0) as u8,
            self.b.clamp(0.0, 255.0) as u8,
            (self.a.clamp(0.0, 1.0) * 255.0) as u8,
        ]
    }
}
