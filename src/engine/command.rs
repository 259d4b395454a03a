//! The engine's interactive vocabulary.
//!
//! Every user-facing operation, whether it comes from a mouse gesture or a
//! programmatic call, is a `NavCommand`. Consumers construct commands and
//! pass them to [`NavEngine::execute`](super::NavEngine::execute).

use glam::Vec2;

/// A single user action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavCommand {
    /// Click at a surface position: pick and possibly start a camera run.
    Click {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Orbit the camera by a drag delta in pixels.
    RotateCamera {
        /// Cursor movement since the last event.
        delta: Vec2,
    },
    /// Pan the camera and its pivot by a drag delta in pixels.
    PanCamera {
        /// Cursor movement since the last event.
        delta: Vec2,
    },
    /// Dolly toward (positive) or away from (negative) the pivot.
    Zoom {
        /// Scroll amount.
        delta: f32,
    },
    /// Stop every in-flight camera run where it is.
    CancelNavigation,
}
