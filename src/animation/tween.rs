use std::time::Duration;

use glam::Vec3;

use crate::util::easing::EasingFunction;

/// One camera run: interpolates the eye from `from` to `to` over
/// `duration`.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraTween {
    from: Vec3,
    to: Vec3,
    elapsed: Duration,
    duration: Duration,
    easing: EasingFunction,
}

impl CameraTween {
    /// New run starting now at `from`.
    #[must_use]
    pub fn new(from: Vec3, to: Vec3, duration: Duration, easing: EasingFunction) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
            easing,
        }
    }

    /// Start position.
    #[must_use]
    pub fn from(&self) -> Vec3 {
        self.from
    }

    /// End position.
    #[must_use]
    pub fn to(&self) -> Vec3 {
        self.to
    }

    /// Total run length.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear progress in [0, 1], before easing.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Whether the run has reached its end.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Position at the current progress. Exactly `to` once finished.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        if self.is_finished() {
            return self.to;
        }
        self.from.lerp(self.to, self.easing.evaluate(self.progress()))
    }

    /// Advance by `dt` and return the new position.
    pub fn advance(&mut self, dt: Duration) -> Vec3 {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.position()
    }
}
