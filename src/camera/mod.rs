//! Camera system for 3D scene viewing.
//!
//! Provides the perspective camera, its GPU uniform, and the orbit controls
//! that let the user rotate, pan and zoom around a pivot.

/// Orbit controller: rotation, pan, zoom, and resync after external moves.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;

pub use controller::OrbitController;
pub use core::{Camera, CameraUniform};
