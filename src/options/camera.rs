use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and orbit-control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Camera position at startup.
    pub initial_eye: [f32; 3],
    /// Orbit pivot at startup.
    pub initial_target: [f32; 3],
    /// Radians of orbit per pixel dragged.
    pub rotate_speed: f32,
    /// Pan distance per pixel dragged, as a fraction of the orbit distance.
    pub pan_speed: f32,
    /// Fractional distance change per wheel notch.
    pub zoom_speed: f32,
    /// Closest the orbit may get to its pivot.
    pub min_distance: f32,
    /// Farthest the orbit may get from its pivot.
    pub max_distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            initial_eye: [0.0, 0.0, 10.0],
            initial_target: [0.0, 0.0, 0.0],
            rotate_speed: 0.005,
            pan_speed: 0.001,
            zoom_speed: 0.1,
            min_distance: 0.5,
            max_distance: 500.0,
        }
    }
}
