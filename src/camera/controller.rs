use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::camera::core::Camera;
use crate::options::CameraOptions;

/// Keeps dragged orbits off the poles so the orbit direction stays defined.
const POLAR_EPSILON: f32 = 1e-6;

/// Orbit controls: drag to orbit around a pivot, shift-drag to pan, wheel to
/// zoom.
///
/// The controller does not own the camera. Anything else that moves the
/// camera (the navigation tween) must call [`update`](Self::update)
/// afterwards so the camera keeps looking at the pivot and the next drag
/// starts from the new position.
#[derive(Debug, Clone)]
pub struct OrbitController {
    focus_point: Vec3,
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    min_distance: f32,
    max_distance: f32,
}

/// Eye offset from the pivot in spherical coordinates (y up).
#[derive(Debug, Clone, Copy)]
struct Spherical {
    radius: f32,
    /// Angle from +y.
    phi: f32,
    /// Angle around y, measured from +z toward +x.
    theta: f32,
}

impl Spherical {
    fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self {
                radius,
                phi: PI / 2.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            theta: offset.x.atan2(offset.z),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        )
    }
}

impl OrbitController {
    /// Controller tuned from options, pivoting on the configured target.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            focus_point: Vec3::from_array(options.initial_target),
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
            min_distance: options.min_distance,
            max_distance: options.max_distance,
        }
    }

    /// Current orbit pivot.
    #[must_use]
    pub fn focus_point(&self) -> Vec3 {
        self.focus_point
    }

    /// Distance from the camera eye to the pivot.
    #[must_use]
    pub fn distance(&self, camera: &Camera) -> f32 {
        camera.eye.distance(self.focus_point)
    }

    /// Orbit by a mouse-drag delta in pixels.
    pub fn rotate(&mut self, camera: &mut Camera, delta: Vec2) {
        let mut spherical = Spherical::from_offset(camera.eye - self.focus_point);
        spherical.theta -= delta.x * self.rotate_speed;
        spherical.phi = (spherical.phi - delta.y * self.rotate_speed)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        camera.eye = self.focus_point + spherical.to_offset();
        self.update(camera);
    }

    /// Slide camera and pivot together across the view plane.
    pub fn pan(&mut self, camera: &mut Camera, delta: Vec2) {
        let forward = camera.forward();
        let right = forward.cross(Vec3::Y).normalize_or(Vec3::X);
        let up = right.cross(forward);
        let scale = self.pan_speed * self.distance(camera).max(self.min_distance);

        let translation = right * (-delta.x * scale) + up * (delta.y * scale);
        self.focus_point += translation;
        camera.eye += translation;
        self.update(camera);
    }

    /// Dolly toward (positive) or away from (negative) the pivot.
    pub fn zoom(&mut self, camera: &mut Camera, delta: f32) {
        let offset = camera.eye - self.focus_point;
        let direction = offset.normalize_or(Vec3::Z);
        let distance = (offset.length() * (1.0 - delta * self.zoom_speed))
            .clamp(self.min_distance, self.max_distance);
        camera.eye = self.focus_point + direction * distance;
        self.update(camera);
    }

    /// Resynchronize with the camera after any camera mutation.
    ///
    /// Points the camera at the pivot and never moves the eye, so a camera
    /// run ends exactly where it was sent. Distance limits apply to zooming
    /// only.
    pub fn update(&mut self, camera: &mut Camera) {
        camera.target = self.focus_point;
        camera.up = Vec3::Y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (OrbitController, Camera) {
        let options = CameraOptions::default();
        (
            OrbitController::new(&options),
            Camera::from_options(&options, 1.0),
        )
    }

    #[test]
    fn rotate_keeps_distance_and_looks_at_pivot() {
        let (mut controls, mut camera) = setup();
        controls.rotate(&mut camera, Vec2::new(120.0, -40.0));
        assert!((controls.distance(&camera) - 10.0).abs() < 1e-4);
        assert_eq!(camera.target, Vec3::ZERO);
        assert!(camera.eye.x.abs() > 0.1);
    }

    #[test]
    fn rotate_never_flips_over_the_pole() {
        let (mut controls, mut camera) = setup();
        controls.rotate(&mut camera, Vec2::new(0.0, 1.0e6));
        assert!(camera.eye.y > 9.9);
        assert!(camera.eye.is_finite());
    }

    #[test]
    fn update_keeps_externally_set_eye() {
        let (mut controls, mut camera) = setup();
        camera.eye = Vec3::new(6.0, 6.0, 0.0);
        camera.target = Vec3::new(100.0, 0.0, 0.0);
        controls.update(&mut camera);
        assert_eq!(camera.eye, Vec3::new(6.0, 6.0, 0.0));
        assert_eq!(camera.target, Vec3::ZERO);
    }

    #[test]
    fn update_leaves_eye_inside_min_distance() {
        let (mut controls, mut camera) = setup();
        camera.eye = Vec3::new(0.0, 0.0, 0.2);
        controls.update(&mut camera);
        assert_eq!(camera.eye, Vec3::new(0.0, 0.0, 0.2));

        camera.eye = Vec3::new(0.0, 0.0, 800.0);
        controls.update(&mut camera);
        assert_eq!(camera.eye, Vec3::new(0.0, 0.0, 800.0));
    }

    #[test]
    fn update_leaves_eye_straight_above_pivot() {
        let (mut controls, mut camera) = setup();
        camera.eye = Vec3::new(0.0, 4.0, 0.0);
        controls.update(&mut camera);
        assert_eq!(camera.eye, Vec3::new(0.0, 4.0, 0.0));
        assert!(camera.build_matrix().is_finite());
    }

    #[test]
    fn zoom_clamps_to_limits() {
        let (mut controls, mut camera) = setup();
        for _ in 0..200 {
            controls.zoom(&mut camera, 1.0);
        }
        assert!((controls.distance(&camera) - 0.5).abs() < 1e-4);
        for _ in 0..500 {
            controls.zoom(&mut camera, -1.0);
        }
        assert!((controls.distance(&camera) - 500.0).abs() < 1e-2);
    }

    #[test]
    fn pan_moves_eye_and_pivot_together() {
        let (mut controls, mut camera) = setup();
        controls.pan(&mut camera, Vec2::new(-100.0, 0.0));
        assert!(controls.focus_point().x > 0.0);
        assert!((camera.eye - controls.focus_point() - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-4);
        assert_eq!(camera.target, controls.focus_point());
    }
}
