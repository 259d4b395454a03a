use web_time::{Duration, Instant};

/// Longest delta a single frame may report. Stalls (startup, a hidden tab)
/// are folded into one frame of this length.
pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// Per-frame delta measurement with a smoothed FPS readout and optional
/// frame limiting.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Frames measured since creation
    frame_count: u64,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
            frame_count: 0,
        }
    }

    /// Whether enough time has passed since the last frame to render again.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Mark the start of a new frame and return the time since the last
    /// one, capped at [`MAX_FRAME_DELTA`].
    pub fn begin_frame(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = capped(now.duration_since(self.last_frame));
        self.last_frame = now;
        self.record(elapsed);
        elapsed
    }

    /// Start measuring from now, discarding the time since the last frame.
    pub fn restart(&mut self) {
        self.last_frame = Instant::now();
    }

    /// Fold a measured frame duration into the smoothed FPS.
    pub fn record(&mut self, elapsed: Duration) {
        self.frame_count += 1;
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Number of frames recorded so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

fn capped(elapsed: Duration) -> Duration {
    elapsed.min(MAX_FRAME_DELTA)
}
