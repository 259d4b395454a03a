/// The engine's command vocabulary.
pub mod command;
mod context;
/// Per-frame driver and the drawing seam.
pub mod render_loop;

use std::time::Duration;

use glam::Vec2;

pub use self::context::AppContext;
use self::command::NavCommand;
use self::render_loop::{FrameSink, RenderLoop};
use crate::animation::CameraAnimator;
use crate::camera::{Camera, OrbitController};
use crate::error::NavError;
use crate::input::{InputEvent, InputProcessor};
use crate::navigation::{ClickNavigator, ClickOutcome};
use crate::options::Options;
use crate::scene::SceneRegistry;

/// The click-to-navigate engine, independent of any window or GPU.
///
/// Owns the scene, the camera and its orbit controls, the camera animator,
/// and the input processor. Drive it with [`handle_event`](Self::handle_event)
/// or [`execute`](Self::execute), and draw it once per frame with
/// [`frame`](Self::frame).
///
/// # Example
///
/// ```ignore
/// let mut engine = NavEngine::new(Options::default(), (800, 600))?;
/// engine.execute(NavCommand::Click { x: 400.0, y: 300.0 });
/// engine.frame(&mut renderer)?;
/// ```
pub struct NavEngine {
    ctx: AppContext,
    render_loop: RenderLoop,
    navigator: ClickNavigator,
    input: InputProcessor,
    viewport: (u32, u32),
    options: Options,
}

impl NavEngine {
    /// Build the scene and camera for a `viewport`-sized surface.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Scene`] if the configured scene is invalid.
    pub fn new(options: Options, viewport: (u32, u32)) -> Result<Self, NavError> {
        let ctx = AppContext::new(&options, viewport)?;
        let animator = CameraAnimator::new(options.navigation.overlap, options.navigation.easing);
        let render_loop = RenderLoop::new(animator, options.window.target_fps);
        let navigator = ClickNavigator::new(&options.navigation);

        log::info!(
            "engine ready: {} objects, {} navigation rules",
            ctx.registry.len(),
            navigator.table().len()
        );

        Ok(Self {
            ctx,
            render_loop,
            navigator,
            input: InputProcessor::new(),
            viewport,
            options,
        })
    }

    /// Feed a raw input event through the input processor.
    pub fn handle_event(&mut self, event: InputEvent) {
        if let Some(cmd) = self.input.handle_event(event) {
            self.execute(cmd);
        }
    }

    /// Apply a single command.
    pub fn execute(&mut self, cmd: NavCommand) {
        match cmd {
            NavCommand::Click { x, y } => {
                let _ = self.click(Vec2::new(x, y));
            }
            NavCommand::RotateCamera { delta } => self.ctx.controls.rotate(&mut self.ctx.camera, delta),
            NavCommand::PanCamera { delta } => self.ctx.controls.pan(&mut self.ctx.camera, delta),
            NavCommand::Zoom { delta } => self.ctx.controls.zoom(&mut self.ctx.camera, delta),
            NavCommand::CancelNavigation => self.render_loop.animator_mut().cancel_all(),
        }
    }

    /// Pick at `screen` and start a camera run if it lands on a known object.
    pub fn click(&mut self, screen: Vec2) -> ClickOutcome {
        self.navigator.handle_click(
            &self.ctx,
            self.render_loop.animator_mut(),
            screen,
            self.viewport,
        )
    }

    /// Whether the frame limiter allows drawing now.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.render_loop.timing().should_render()
    }

    /// Draw one frame, measuring elapsed time from the wall clock.
    ///
    /// # Errors
    ///
    /// Propagates the sink's draw error.
    pub fn frame<S: FrameSink>(&mut self, sink: &mut S) -> Result<(), S::Error> {
        self.render_loop.tick(&mut self.ctx, sink)
    }

    /// Start wall-clock frame timing from now. Call when drawing begins
    /// after a delay, so the first [`frame`](Self::frame) does not see the
    /// whole wait as one step.
    pub fn restart_timing(&mut self) {
        self.render_loop.restart_timing();
    }

    /// Draw one frame as if `dt` had elapsed.
    ///
    /// # Errors
    ///
    /// Propagates the sink's draw error.
    pub fn frame_with_dt<S: FrameSink>(&mut self, sink: &mut S, dt: Duration) -> Result<(), S::Error> {
        self.render_loop.frame(&mut self.ctx, sink, dt)
    }

    /// Track a new surface size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = (width, height);
        self.ctx.camera.set_viewport(width, height);
    }

    /// Current surface size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.ctx.camera
    }

    /// The orbit controls.
    #[must_use]
    pub fn controls(&self) -> &OrbitController {
        &self.ctx.controls
    }

    /// The scene.
    #[must_use]
    pub fn registry(&self) -> &SceneRegistry {
        &self.ctx.registry
    }

    /// Shared state, read-only.
    #[must_use]
    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    /// The camera animator.
    #[must_use]
    pub fn animator(&self) -> &CameraAnimator {
        self.render_loop.animator()
    }

    /// Whether a camera run is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.render_loop.animator().is_animating()
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.render_loop.timing().fps()
    }

    /// Options the engine was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
