//! Input handling for the demo window.
//!
//! `Input` collects raw winit window events into per-frame state: charge
//! launch positions (pointer-down and touch-start), keys that went down this
//! frame, and the tracked cursor position in logical scene coordinates.
//!
//! The event handlers only record; the frame loop drains the recorded state
//! once per redraw via [`Input::begin_frame`], so simulation state is never
//! touched from the event path.

use glam::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

/// Keys the demo reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Toggle pause.
    Space,
    /// Quit.
    Escape,
    /// Toggle the heart-shaped burst effect for subsequent launches.
    H,
    /// Capture the current frame to disk.
    C,
}

impl Key {
    fn from_winit(key: WinitKeyCode) -> Option<Self> {
        match key {
            WinitKeyCode::Space => Some(Key::Space),
            WinitKeyCode::Escape => Some(Key::Escape),
            WinitKeyCode::KeyH => Some(Key::H),
            WinitKeyCode::KeyC => Some(Key::C),
            _ => None,
        }
    }
}

/// Per-frame input state.
#[derive(Debug, Default)]
pub struct Input {
    /// Launch positions recorded since the last frame, in scene coordinates.
    launches: Vec<Vec2>,
    /// Keys that went down since the last frame.
    keys_pressed: HashSet<Key>,
    /// Tracked cursor position, in scene coordinates.
    cursor: Vec2,
    /// Window scale factor, used to map physical event coordinates to the
    /// logical scene.
    scale_factor: f64,
}

impl Input {
    /// Create an input tracker.
    pub fn new() -> Self {
        Self {
            scale_factor: 1.0,
            ..Default::default()
        }
    }

    /// Positions where a charge should be launched this frame.
    pub fn launches(&self) -> &[Vec2] {
        &self.launches
    }

    /// Check if a key went down this frame.
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// The tracked cursor position in scene coordinates.
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Clear per-frame state. Call once per redraw, after draining.
    pub fn begin_frame(&mut self) {
        self.launches.clear();
        self.keys_pressed.clear();
    }

    /// Update the scale factor used for physical-to-logical mapping.
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    /// Record a winit window event.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = self.to_scene(position.x, position.y);
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.launches.push(self.cursor);
            }

            WindowEvent::Touch(touch) if touch.phase == TouchPhase::Started => {
                self.launches
                    .push(self.to_scene(touch.location.x, touch.location.y));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        if let Some(key) = Key::from_winit(code) {
                            self.keys_pressed.insert(key);
                        }
                    }
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.set_scale_factor(*scale_factor);
            }

            _ => {}
        }
    }

    fn to_scene(&self, x: f64, y: f64) -> Vec2 {
        Vec2::new(
            (x / self.scale_factor) as f32,
            (y / self.scale_factor) as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launches_accumulate_and_drain() {
        let mut input = Input::new();
        input.cursor = Vec2::new(100.0, 200.0);
        input.launches.push(input.cursor);
        input.launches.push(Vec2::new(5.0, 5.0));

        assert_eq!(input.launches().len(), 2);
        input.begin_frame();
        assert!(input.launches().is_empty());
    }

    #[test]
    fn test_key_pressed_cleared_by_begin_frame() {
        let mut input = Input::new();
        input.keys_pressed.insert(Key::Space);
        assert!(input.key_pressed(Key::Space));
        input.begin_frame();
        assert!(!input.key_pressed(Key::Space));
    }

    #[test]
    fn test_scale_factor_maps_to_scene() {
        let mut input = Input::new();
        input.set_scale_factor(2.0);
        assert_eq!(input.to_scene(200.0, 100.0), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_zero_scale_factor_rejected() {
        let mut input = Input::new();
        input.set_scale_factor(0.0);
        assert_eq!(input.to_scene(10.0, 10.0), Vec2::new(10.0, 10.0));
    }
}
