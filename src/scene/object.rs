use glam::Vec3;

/// Stable handle to an object in a [`SceneRegistry`](super::SceneRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) u32);

impl ObjectId {
    /// Index into the registry's object list.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Solid shape of a scene object, centered on its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Axis-aligned box with the given edge lengths.
    Cuboid {
        /// Edge lengths along x, y and z.
        size: Vec3,
    },
}

impl Shape {
    /// Unit cube (1×1×1).
    pub const UNIT_CUBE: Self = Self::Cuboid { size: Vec3::ONE };

    /// Half the extent along each axis.
    #[must_use]
    pub fn half_extents(&self) -> Vec3 {
        match *self {
            Self::Cuboid { size } => size * 0.5,
        }
    }
}

/// A named, interactive solid in the scene.
///
/// Objects are created once at startup and never move; only the camera is
/// animated.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Unique name within the registry.
    pub name: String,
    /// Position relative to the parent (or world, for root objects).
    pub position: Vec3,
    /// Solid shape used for drawing and picking.
    pub shape: Shape,
    /// Linear RGB color.
    pub color: [f32; 3],
    /// Grouping parent, if any.
    pub parent: Option<ObjectId>,
}

impl SceneObject {
    /// Root-level object with the given name, position, shape and color.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        position: Vec3,
        shape: Shape,
        color: [f32; 3],
    ) -> Self {
        Self {
            name: name.into(),
            position,
            shape,
            color,
            parent: None,
        }
    }

    /// Attach this object to `parent`.
    #[must_use]
    pub fn with_parent(mut self, parent: ObjectId) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Box centered on `center` spanning `half_extents` in each direction.
    #[must_use]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Whether `point` lies inside or on the box.
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Convert a packed `0xRRGGBB` color into normalized RGB.
#[must_use]
pub fn rgb_from_hex(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_unpack() {
        assert_eq!(rgb_from_hex(0x00ff00), [0.0, 1.0, 0.0]);
        assert_eq!(rgb_from_hex(0xff00ff), [1.0, 0.0, 1.0]);
    }

    #[test]
    fn aabb_contains_its_center_and_edges() {
        let aabb = Aabb::from_center_half_extents(Vec3::new(3.0, 3.0, 0.0), Vec3::splat(0.5));
        assert_eq!(aabb.center(), Vec3::new(3.0, 3.0, 0.0));
        assert!(aabb.contains_point(Vec3::new(3.5, 2.5, 0.0)));
        assert!(!aabb.contains_point(Vec3::new(3.6, 3.0, 0.0)));
    }

    #[test]
    fn unit_cube_half_extents() {
        assert_eq!(Shape::UNIT_CUBE.half_extents(), Vec3::splat(0.5));
    }
}
