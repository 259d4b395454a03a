//! Scene registry: the named interactive objects and their fixed positions.
//!
//! Objects live in a flat list addressed by [`ObjectId`], with a name index
//! for the click-to-navigate lookups. Names are unique. An object may be
//! grouped under an earlier object, in which case its position is relative
//! to that parent.

mod object;

use std::fmt;

use glam::Vec3;
use rustc_hash::FxHashMap;

pub use object::{rgb_from_hex, Aabb, ObjectId, SceneObject, Shape};

use crate::options::SceneOptions;

/// Errors raised while populating a [`SceneRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// An object with this name is already registered.
    DuplicateName(String),
    /// The object names a parent that is not registered.
    UnknownParent {
        /// The object being added.
        object: String,
        /// The parent it asked for.
        parent: String,
    },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName(name) => {
                write!(f, "duplicate scene object name: {name}")
            }
            Self::UnknownParent { object, parent } => {
                write!(f, "object {object} refers to unknown parent {parent}")
            }
        }
    }
}

impl std::error::Error for SceneError {}

/// Holds every interactive object in the scene.
#[derive(Debug, Default, Clone)]
pub struct SceneRegistry {
    objects: Vec<SceneObject>,
    by_name: FxHashMap<String, ObjectId>,
}

impl SceneRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from the configured object list, in order.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError`] on duplicate names or a parent that has not
    /// been declared earlier in the list.
    pub fn from_options(options: &SceneOptions) -> Result<Self, SceneError> {
        let mut registry = Self::new();
        for spec in &options.objects {
            let mut object = SceneObject::new(
                spec.name.clone(),
                Vec3::from_array(spec.position),
                Shape::Cuboid {
                    size: Vec3::from_array(spec.size),
                },
                rgb_from_hex(spec.color),
            );
            if let Some(parent_name) = &spec.parent {
                let parent = registry.id_of(parent_name).ok_or_else(|| {
                    SceneError::UnknownParent {
                        object: spec.name.clone(),
                        parent: parent_name.clone(),
                    }
                })?;
                object = object.with_parent(parent);
            }
            let _ = registry.add(object)?;
        }
        log::info!("scene registry holds {} objects", registry.len());
        Ok(registry)
    }

    /// Register an object and return its handle.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DuplicateName`] if the name is taken, or
    /// [`SceneError::UnknownParent`] if the parent handle is not registered.
    pub fn add(&mut self, object: SceneObject) -> Result<ObjectId, SceneError> {
        if self.by_name.contains_key(&object.name) {
            return Err(SceneError::DuplicateName(object.name));
        }
        if let Some(parent) = object.parent {
            if parent.index() >= self.objects.len() {
                return Err(SceneError::UnknownParent {
                    object: object.name,
                    parent: format!("#{}", parent.0),
                });
            }
        }

        let id = ObjectId(self.objects.len() as u32);
        let _ = self.by_name.insert(object.name.clone(), id);
        self.objects.push(object);
        Ok(id)
    }

    /// Look up an object by handle.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.index())
    }

    /// Handle of the object with this name.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<ObjectId> {
        self.by_name.get(name).copied()
    }

    /// Look up an object by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&SceneObject> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    /// Iterate all objects, parents before children.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, object)| (ObjectId(i as u32), object))
    }

    /// Number of registered objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// World-space position: the object's position plus its ancestors'.
    #[must_use]
    pub fn world_position(&self, id: ObjectId) -> Option<Vec3> {
        let mut object = self.get(id)?;
        let mut position = object.position;
        while let Some(parent) = object.parent {
            object = self.get(parent)?;
            position += object.position;
        }
        Some(position)
    }

    /// World-space bounding box of an object's shape.
    #[must_use]
    pub fn world_bounds(&self, id: ObjectId) -> Option<Aabb> {
        let center = self.world_position(id)?;
        let object = self.get(id)?;
        Some(Aabb::from_center_half_extents(
            center,
            object.shape.half_extents(),
        ))
    }
}
