use crate::camera::{Camera, OrbitController};
use crate::error::NavError;
use crate::options::Options;
use crate::scene::SceneRegistry;

/// Shared application state: the scene, the one camera, and its controls.
///
/// Built once at startup in dependency order: registry, then camera, then
/// controls.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Every object in the scene.
    pub registry: SceneRegistry,
    /// The camera everything is drawn and picked through.
    pub camera: Camera,
    /// Orbit controls bound to `camera`.
    pub controls: OrbitController,
}

impl AppContext {
    /// Build the scene, camera and controls for a `viewport`-sized surface.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Scene`] if the configured scene is invalid.
    pub fn new(options: &Options, viewport: (u32, u32)) -> Result<Self, NavError> {
        let registry = SceneRegistry::from_options(&options.scene)?;

        let (width, height) = viewport;
        let aspect = if width > 0 && height > 0 {
            width as f32 / height as f32
        } else {
            1.0
        };
        let mut camera = Camera::from_options(&options.camera, aspect);

        let mut controls = OrbitController::new(&options.camera);
        controls.update(&mut camera);

        Ok(Self {
            registry,
            camera,
            controls,
        })
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::options::ObjectSpec;

    #[test]
    fn default_context_looks_at_the_origin() {
        let ctx = AppContext::new(&Options::default(), (800, 600)).unwrap();
        assert_eq!(ctx.registry.len(), 3);
        assert_eq!(ctx.camera.eye, Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(ctx.camera.target, Vec3::ZERO);
        assert!((ctx.camera.aspect - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn zero_viewport_falls_back_to_square_aspect() {
        let ctx = AppContext::new(&Options::default(), (0, 0)).unwrap();
        assert_eq!(ctx.camera.aspect, 1.0);
    }

    #[test]
    fn invalid_scene_is_an_error() {
        let mut options = Options::default();
        options.scene.objects.push(ObjectSpec {
            name: "cube1".into(),
            ..options.scene.objects[0].clone()
        });
        assert!(matches!(
            AppContext::new(&options, (800, 600)),
            Err(NavError::Scene(_))
        ));
    }
}
