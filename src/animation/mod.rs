//! Camera runs: timed, eased moves of the camera eye.
//!
//! Each click that resolves to a target starts one [`CameraTween`]. The
//! [`CameraAnimator`] owns every in-flight run and is driven once per frame
//! by the render loop.

mod animator;
mod tween;

pub use animator::CameraAnimator;
pub use tween::CameraTween;
