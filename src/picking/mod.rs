//! Pointer picking: which scene objects lie under a screen pixel.
//!
//! A ray is cast from the camera eye through the pixel and tested against
//! every registered object, grouped children included. Hits come back
//! nearest first. Picking has no side effects; bad input (non-finite
//! coordinates, empty viewport) simply finds nothing.

mod ray;

use std::cmp::Ordering;

use glam::{Vec2, Vec3};
pub use ray::Ray;

use crate::camera::Camera;
use crate::scene::{ObjectId, SceneRegistry};

/// One object intersected by a pick ray.
#[derive(Debug, Clone, PartialEq)]
pub struct PickHit {
    /// Handle of the intersected object.
    pub id: ObjectId,
    /// Name of the intersected object.
    pub name: String,
    /// Distance from the camera eye along the ray.
    pub distance: f32,
    /// World-space point where the ray enters the object.
    pub point: Vec3,
}

/// Every object under `screen` (pixels from the top-left of a
/// `viewport`-sized surface), nearest first.
#[must_use]
pub fn pick(
    camera: &Camera,
    registry: &SceneRegistry,
    screen: Vec2,
    viewport: (u32, u32),
) -> Vec<PickHit> {
    let Some(ray) = Ray::from_screen(camera, screen, viewport) else {
        return Vec::new();
    };
    intersect_all(&ray, registry)
}

/// Every object the ray enters, nearest first.
#[must_use]
pub fn intersect_all(ray: &Ray, registry: &SceneRegistry) -> Vec<PickHit> {
    let mut hits: Vec<PickHit> = registry
        .iter()
        .filter_map(|(id, object)| {
            let bounds = registry.world_bounds(id)?;
            let distance = ray.intersect_aabb(&bounds)?;
            Some(PickHit {
                id,
                name: object.name.clone(),
                distance,
                point: ray.at(distance),
            })
        })
        .collect();

    hits.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(Ordering::Equal)
            .then(a.id.cmp(&b.id))
    });
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{CameraOptions, SceneOptions};
    use crate::scene::{SceneObject, Shape};

    const VIEWPORT: (u32, u32) = (800, 600);

    fn fixture() -> (Camera, SceneRegistry) {
        let camera = Camera::from_options(&CameraOptions::default(), 800.0 / 600.0);
        let registry = SceneRegistry::from_options(&SceneOptions::default()).unwrap();
        (camera, registry)
    }

    fn screen_of(camera: &Camera, world: Vec3) -> Vec2 {
        let ndc = camera.build_matrix().project_point3(world);
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * VIEWPORT.0 as f32,
            (1.0 - ndc.y) * 0.5 * VIEWPORT.1 as f32,
        )
    }

    #[test]
    fn empty_space_picks_nothing() {
        let (camera, registry) = fixture();
        assert!(pick(&camera, &registry, Vec2::new(5.0, 5.0), VIEWPORT).is_empty());
        assert!(pick(&camera, &registry, Vec2::new(795.0, 595.0), VIEWPORT).is_empty());
    }

    #[test]
    fn centered_object_is_first() {
        let (camera, registry) = fixture();
        for name in ["cube1", "cube2", "cube3"] {
            let center = registry.world_position(registry.id_of(name).unwrap()).unwrap();
            let hits = pick(&camera, &registry, screen_of(&camera, center), VIEWPORT);
            assert_eq!(hits.first().map(|hit| hit.name.as_str()), Some(name));
        }
    }

    #[test]
    fn hits_are_sorted_nearest_first() {
        let (camera, mut registry) = fixture();
        registry
            .add(SceneObject::new(
                "occluder",
                Vec3::new(0.0, 0.0, 5.0),
                Shape::UNIT_CUBE,
                [1.0; 3],
            ))
            .unwrap();

        let hits = pick(&camera, &registry, Vec2::new(400.0, 300.0), VIEWPORT);
        let names: Vec<_> = hits.iter().map(|hit| hit.name.as_str()).collect();
        assert_eq!(names, ["occluder", "cube1"]);
        assert!(hits[0].distance < hits[1].distance);
        assert!((hits[0].point.z - 5.5).abs() < 1e-4);
    }

    #[test]
    fn grouped_children_are_pickable() {
        let (camera, mut registry) = fixture();
        let group = registry
            .add(SceneObject::new(
                "group",
                Vec3::new(-4.0, -2.0, 0.0),
                Shape::Cuboid { size: Vec3::splat(0.2) },
                [1.0; 3],
            ))
            .unwrap();
        registry
            .add(
                SceneObject::new("child", Vec3::new(0.0, -1.0, 0.0), Shape::UNIT_CUBE, [1.0; 3])
                    .with_parent(group),
            )
            .unwrap();

        let at = screen_of(&camera, Vec3::new(-4.0, -3.0, 0.0));
        let hits = pick(&camera, &registry, at, VIEWPORT);
        assert_eq!(hits.first().map(|hit| hit.name.as_str()), Some("child"));
    }

    #[test]
    fn malformed_input_picks_nothing() {
        let (camera, registry) = fixture();
        assert!(pick(&camera, &registry, Vec2::new(f32::NAN, 300.0), VIEWPORT).is_empty());
        assert!(pick(&camera, &registry, Vec2::new(400.0, 300.0), (0, 0)).is_empty());
    }
}
