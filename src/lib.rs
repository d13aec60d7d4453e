//! # Skyburst - Interactive Firework Particle Simulations
//!
//! CPU-driven firework effects on a software canvas with a simple, explicit API.
//!
//! Skyburst simulates two kinds of entities: **charges** (rising points that
//! explode at a target height) and **particles** (short-lived sparks with
//! fading trails). A [`World`] owns both collections and advances them one
//! frame at a time, issuing draw calls against an abstract [`Surface`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use skyburst::prelude::*;
//!
//! let mut world = World::new(1200.0, 900.0);
//! let mut canvas = Canvas::default();
//!
//! // Launch a firework from the bottom of the screen...
//! world.launch(600.0, 850.0);
//!
//! // ...and drive the simulation, one redraw at a time.
//! loop {
//!     world.frame(&mut canvas);
//!     // present canvas.pixels() however you like
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Charges
//!
//! A charge rises until its `y` coordinate crosses its target explosion height
//! (screen coordinates: smaller `y` = higher), then converts into a radial
//! burst of particles and removes itself. Charges are configured through
//! [`ChargeConfig`], a builder with sensible defaults:
//!
//! ```ignore
//! world.spawn_charge(
//!     ChargeConfig::new(Vec2::new(600.0, 850.0))
//!         .count(48.0)
//!         .explosion_y(300.0)
//!         .effect(Effect::Heart),
//! );
//! ```
//!
//! ### Particles
//!
//! Each particle integrates velocity and acceleration once per frame and
//! records a bounded trail of [`Trace`] samples. Once a particle outlives its
//! lifetime its trail shrinks toward extinction; the particle leaves the live
//! set when the trail is empty. Particles marked `explosive` spawn a nested
//! charge where they die (nested fireworks).
//!
//! ### Surfaces
//!
//! All drawing goes through the [`Surface`] trait. [`Canvas`] is the built-in
//! implementation: an RGBA pixel buffer with alpha blending, line/disc/circle
//! rasterization and a small bitmap font for HUD text. The buffer can be
//! presented through any windowing stack or written to PNG with
//! [`FrameRecorder`].
//!
//! ## Determinism
//!
//! All randomness flows through a seedable generator owned by the [`World`].
//! Construct with [`World::with_seed`] to make runs reproducible.

pub mod app;
mod capture;
mod charge;
mod color;
mod effect;
pub mod error;
pub mod input;
mod particle;
mod spawn;
mod surface;
pub mod time;
mod world;

pub use capture::FrameRecorder;
pub use charge::{Charge, ChargeConfig, ChargeId};
pub use color::Rgba;
pub use effect::Effect;
pub use error::{CaptureError, RunError};
pub use glam::Vec2;
pub use particle::{Particle, Trace};
pub use spawn::SpawnContext;
pub use surface::{Canvas, Surface};
pub use world::World;

use std::collections::VecDeque;

/// Capability to advance one simulation step.
///
/// Both [`Particle`] and [`Charge`] share an informal "update once per frame"
/// protocol; this trait makes that seam explicit. `advance` performs trail
/// bookkeeping and kinematic integration, nothing else - spawning, removal and
/// gravity are the [`World`]'s job.
pub trait Steppable {
    /// Advance internal state by exactly one frame.
    fn advance(&mut self);
}

/// Capability to expose a trail of historical position samples.
///
/// Implemented by both [`Particle`] and [`Charge`]. Traces are ordered oldest
/// first; the newest sample is at the back.
pub trait Trailed {
    /// The recorded trail, oldest sample first.
    fn traces(&self) -> &VecDeque<Trace>;

    /// The entity's current (head) position.
    fn head(&self) -> Vec2;
}

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use skyburst::prelude::*;
/// ```
pub mod prelude {
    pub use crate::app::App;
    pub use crate::capture::FrameRecorder;
    pub use crate::charge::{Charge, ChargeConfig, ChargeId};
    pub use crate::color::Rgba;
    pub use crate::effect::Effect;
    pub use crate::input::Input;
    pub use crate::spawn::SpawnContext;
    pub use crate::surface::{Canvas, Surface};
    pub use crate::time::FrameClock;
    pub use crate::world::World;
    pub use crate::{Steppable, Trailed};
    pub use glam::Vec2;
}
