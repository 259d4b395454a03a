use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::camera::Camera;
use crate::scene::Aabb;

/// Half-line in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Point at distance `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Ray from the camera eye through a pixel of a `width`×`height`
    /// viewport.
    ///
    /// Returns `None` for non-finite coordinates, an empty viewport, or a
    /// camera whose view-projection cannot be inverted.
    #[must_use]
    pub fn from_screen(camera: &Camera, screen: Vec2, viewport: (u32, u32)) -> Option<Self> {
        let (width, height) = viewport;
        if !screen.is_finite() || width == 0 || height == 0 {
            return None;
        }

        // Convert to NDC (-1 to 1), y flipped for screen coordinates
        let ndc_x = (screen.x / width as f32) * 2.0 - 1.0;
        let ndc_y = 1.0 - (screen.y / height as f32) * 2.0;

        let view_proj = camera.build_matrix();
        let det = view_proj.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let far = unproject(view_proj.inverse(), Vec4::new(ndc_x, ndc_y, 1.0, 1.0))?;

        let direction = (far - camera.eye).try_normalize()?;
        camera.eye.is_finite().then_some(Self {
            origin: camera.eye,
            direction,
        })
    }

    /// Distance to where the ray enters `aabb`, if it does.
    ///
    /// A ray starting inside the box does not enter it and reports no hit.
    #[must_use]
    pub fn intersect_aabb(&self, aabb: &Aabb) -> Option<f32> {
        if aabb.contains_point(self.origin) {
            return None;
        }
        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;

        for axis in 0..3 {
            let origin = self.origin[axis];
            let direction = self.direction[axis];
            let (min, max) = (aabb.min[axis], aabb.max[axis]);

            if direction.abs() < f32::EPSILON {
                if origin < min || origin > max {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / direction;
            let (t0, t1) = {
                let a = (min - origin) * inv;
                let b = (max - origin) * inv;
                if a <= b { (a, b) } else { (b, a) }
            };
            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }

        (t_enter >= 0.0 && t_enter.is_finite()).then_some(t_enter)
    }
}

fn unproject(inverse_view_proj: Mat4, ndc: Vec4) -> Option<Vec3> {
    let world = inverse_view_proj * ndc;
    if world.w.abs() < f32::EPSILON {
        return None;
    }
    let point = world.truncate() / world.w;
    point.is_finite().then_some(point)
}
