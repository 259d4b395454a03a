use std::time::Duration;

use super::context::AppContext;
use crate::animation::CameraAnimator;
use crate::camera::Camera;
use crate::scene::SceneRegistry;
use crate::util::frame_timing::FrameTiming;

/// Frames between FPS log lines.
const FPS_LOG_INTERVAL: u64 = 600;

/// Anything that can draw the scene from the camera's point of view.
///
/// Implemented by the GPU [`SceneRenderer`](crate::renderer::SceneRenderer);
/// tests use in-memory sinks.
pub trait FrameSink {
    /// Error a draw can fail with.
    type Error;

    /// Draw one frame.
    ///
    /// # Errors
    ///
    /// Whatever the implementation's presentation step reports.
    fn draw(&mut self, registry: &SceneRegistry, camera: &Camera) -> Result<(), Self::Error>;
}

/// Per-frame driver: advance camera runs, resync the controls, redraw.
pub struct RenderLoop {
    animator: CameraAnimator,
    timing: FrameTiming,
}

impl RenderLoop {
    /// Loop around an existing animator.
    #[must_use]
    pub fn new(animator: CameraAnimator, target_fps: u32) -> Self {
        Self {
            animator,
            timing: FrameTiming::new(target_fps),
        }
    }

    /// The camera animator.
    #[must_use]
    pub fn animator(&self) -> &CameraAnimator {
        &self.animator
    }

    /// Mutable access to the camera animator.
    pub fn animator_mut(&mut self) -> &mut CameraAnimator {
        &mut self.animator
    }

    /// Frame timing state.
    #[must_use]
    pub fn timing(&self) -> &FrameTiming {
        &self.timing
    }

    /// Measure the next wall-clock frame from now.
    pub fn restart_timing(&mut self) {
        self.timing.restart();
    }

    /// Run one frame, measuring `dt` from the wall clock.
    ///
    /// # Errors
    ///
    /// Propagates the sink's draw error.
    pub fn tick<S: FrameSink>(&mut self, ctx: &mut AppContext, sink: &mut S) -> Result<(), S::Error> {
        let dt = self.timing.begin_frame();
        self.step(ctx, sink, dt)
    }

    /// Run one frame with an explicit `dt`.
    ///
    /// # Errors
    ///
    /// Propagates the sink's draw error.
    pub fn frame<S: FrameSink>(
        &mut self,
        ctx: &mut AppContext,
        sink: &mut S,
        dt: Duration,
    ) -> Result<(), S::Error> {
        self.timing.record(dt);
        self.step(ctx, sink, dt)
    }

    fn step<S: FrameSink>(
        &mut self,
        ctx: &mut AppContext,
        sink: &mut S,
        dt: Duration,
    ) -> Result<(), S::Error> {
        if self.animator.advance(dt, &mut ctx.camera) {
            ctx.controls.update(&mut ctx.camera);
        }

        if self.timing.frame_count() % FPS_LOG_INTERVAL == 0 {
            log::debug!("{:.1} fps", self.timing.fps());
        }

        sink.draw(&ctx.registry, &ctx.camera)
    }
}
