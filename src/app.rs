//! Window front-end for the demo.
//!
//! `App` wires winit events to the simulation: pointer/touch launches
//! charges, the keyboard drives pause / effect toggle / capture, and every
//! redraw runs one [`World::frame`] against the [`Canvas`] before presenting
//! the pixel buffer through softbuffer.
//!
//! Controls:
//!
//! | Input | Action |
//! |-------|--------|
//! | Left click / touch | Launch a charge |
//! | `H` | Toggle heart-shaped bursts |
//! | `Space` | Pause / resume |
//! | `C` | Capture the frame as PNG |
//! | `Escape` | Quit |

use crate::capture::FrameRecorder;
use crate::color::Rgba;
use crate::effect::Effect;
use crate::error::RunError;
use crate::input::{Input, Key};
use crate::surface::{Canvas, Surface, HEIGHT, WIDTH};
use crate::time::FrameClock;
use crate::world::World;
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

/// HUD backdrop; opaque so repeated draws while paused are idempotent.
const HUD_BACKDROP: Rgba = Rgba::from_u8(0x20, 0x28, 0x3a);

/// The demo application: world, canvas, clock, input and presentation state.
pub struct App {
    window: Option<Rc<Window>>,
    surface: Option<softbuffer::Surface<Rc<Window>, Rc<Window>>>,
    canvas: Canvas,
    world: World,
    clock: FrameClock,
    input: Input,
    recorder: FrameRecorder,
    effect: Option<Effect>,
}

impl App {
    /// Create the demo app with an entropy-seeded world.
    pub fn new() -> Self {
        Self::with_world(World::new(WIDTH as f32, HEIGHT as f32))
    }

    /// Create the demo app around an existing world (e.g. a seeded one).
    pub fn with_world(world: World) -> Self {
        Self {
            window: None,
            surface: None,
            canvas: Canvas::default(),
            world,
            clock: FrameClock::new(),
            input: Input::new(),
            recorder: FrameRecorder::new("captures"),
            effect: None,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if self.input.key_pressed(Key::Escape) {
            event_loop.exit();
            return;
        }
        if self.input.key_pressed(Key::Space) {
            self.clock.toggle_pause();
        }
        if self.input.key_pressed(Key::H) {
            self.effect = match self.effect {
                None => Some(Effect::Heart),
                Some(_) => None,
            };
        }
        let capture_requested = self.input.key_pressed(Key::C);

        let launches: Vec<_> = self.input.launches().to_vec();
        for at in launches {
            let mut config = self.world.launch_config(at.x, at.y);
            if let Some(effect) = self.effect {
                config = config.effect(effect);
            }
            self.world.spawn_charge(config);
        }
        self.input.begin_frame();

        if !self.clock.is_paused() {
            self.world.frame(&mut self.canvas);
            self.clock.tick();
        }
        self.draw_hud();

        if capture_requested {
            match self.recorder.capture(&self.canvas, self.clock.frame()) {
                Ok(path) => println!("Captured {}", path.display()),
                Err(e) => eprintln!("Capture error: {}", e),
            }
        }

        if let Err(e) = self.present() {
            eprintln!("Render error: {}", e);
        }
    }

    fn draw_hud(&mut self) {
        let hud = format!(
            "FPS {:.0}  CHARGES {}  PARTICLES {}",
            self.clock.fps(),
            self.world.charges().len(),
            self.world.particles().len(),
        );
        self.canvas.draw_rect(12.0, 12.0, 460.0, 26.0, HUD_BACKDROP);
        self.canvas.draw_text(20.0, 18.0, &hud, Rgba::WHITE);
        if self.clock.is_paused() {
            self.canvas.draw_rect(12.0, 44.0, 100.0, 26.0, HUD_BACKDROP);
            self.canvas
                .draw_text(20.0, 50.0, "PAUSED", Rgba::new(255.0, 200.0, 80.0));
        }
    }

    /// Copy the canvas into the softbuffer frame, nearest-neighbor scaled to
    /// the physical window size, and present it.
    fn present(&mut self) -> Result<(), RunError> {
        let (Some(window), Some(surface)) = (self.window.as_ref(), self.surface.as_mut()) else {
            return Ok(());
        };
        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }

        let mut frame = surface.buffer_mut()?;
        let (cw, ch) = (self.canvas.width() as usize, self.canvas.height() as usize);
        let (pw, ph) = (size.width as usize, size.height as usize);
        let pixels = self.canvas.pixels();

        for py in 0..ph {
            let row = (py * ch / ph) * cw;
            for px in 0..pw {
                let idx = (row + px * cw / pw) * 4;
                let r = u32::from(pixels[idx]);
                let g = u32::from(pixels[idx + 1]);
                let b = u32::from(pixels[idx + 2]);
                frame[py * pw + px] = (r << 16) | (g << 8) | b;
            }
        }

        frame.present()?;
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Skyburst - click to launch")
            .with_inner_size(LogicalSize::new(WIDTH, HEIGHT))
            .with_resizable(false);
        let window = Rc::new(
            event_loop
                .create_window(attrs)
                .expect("Failed to create window"),
        );
        self.input.set_scale_factor(window.scale_factor());

        let context =
            softbuffer::Context::new(window.clone()).expect("Failed to create softbuffer context");
        let mut surface = softbuffer::Surface::new(&context, window.clone())
            .expect("Failed to create softbuffer surface");
        let size = window.inner_size();
        if let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) {
            surface.resize(w, h).expect("Failed to size surface");
        }

        window.request_redraw();
        self.window = Some(window);
        self.surface = Some(surface);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let (Some(surface), Some(w), Some(h)) = (
                    self.surface.as_mut(),
                    NonZeroU32::new(size.width),
                    NonZeroU32::new(size.height),
                ) {
                    if let Err(e) = surface.resize(w, h) {
                        eprintln!("Render error: {}", e);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            other => self.input.handle_event(&other),
        }
    }
}
