use std::time::Duration;

use glam::Vec3;

use super::tween::CameraTween;
use crate::camera::Camera;
use crate::options::OverlapPolicy;
use crate::util::easing::EasingFunction;

/// Owns the active camera runs and applies them to the camera each frame.
///
/// Runs are kept in start order. Under [`OverlapPolicy::Concurrent`] every
/// run writes the camera in turn, so the newest run's position is the one
/// left standing at the end of a frame.
#[derive(Debug, Clone, Default)]
pub struct CameraAnimator {
    tweens: Vec<CameraTween>,
    policy: OverlapPolicy,
    easing: EasingFunction,
}

impl CameraAnimator {
    /// Animator with the given overlap policy and easing curve.
    #[must_use]
    pub fn new(policy: OverlapPolicy, easing: EasingFunction) -> Self {
        Self {
            tweens: Vec::new(),
            policy,
            easing,
        }
    }

    /// Start a run from the camera's current eye to `target`.
    pub fn animate(&mut self, camera: &Camera, target: Vec3, duration: Duration) {
        if self.policy == OverlapPolicy::Replace && !self.tweens.is_empty() {
            log::debug!("replacing {} in-flight camera run(s)", self.tweens.len());
            self.tweens.clear();
        }
        self.tweens
            .push(CameraTween::new(camera.eye, target, duration, self.easing));
    }

    /// Advance every run by `dt`, write the camera, and drop finished runs.
    ///
    /// Returns `true` if the camera was written this frame.
    pub fn advance(&mut self, dt: Duration, camera: &mut Camera) -> bool {
        if self.tweens.is_empty() {
            return false;
        }
        for tween in &mut self.tweens {
            camera.eye = tween.advance(dt);
        }
        self.tweens.retain(|tween| !tween.is_finished());
        true
    }

    /// Drop every in-flight run.
    pub fn cancel_all(&mut self) {
        self.tweens.clear();
    }

    /// Whether any run is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty()
    }

    /// Number of runs in flight.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.tweens.len()
    }

    /// In-flight runs, oldest first.
    #[must_use]
    pub fn tweens(&self) -> &[CameraTween] {
        &self.tweens
    }

    /// Current overlap policy.
    #[must_use]
    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }
}
