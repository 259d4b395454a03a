use serde::{Deserialize, Serialize};

/// Declaration of one scene object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObjectSpec {
    /// Unique object name.
    pub name: String,
    /// Position relative to the parent (or world).
    pub position: [f32; 3],
    /// Box edge lengths.
    #[serde(default = "unit_size")]
    pub size: [f32; 3],
    /// Packed `0xRRGGBB` color.
    pub color: u32,
    /// Name of an earlier object to group under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

fn unit_size() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

impl ObjectSpec {
    fn cube(name: &str, position: [f32; 3], color: u32) -> Self {
        Self {
            name: name.to_owned(),
            position,
            size: unit_size(),
            color,
            parent: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Objects placed in the scene at startup.
pub struct SceneOptions {
    /// Objects, parents before children.
    pub objects: Vec<ObjectSpec>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            objects: vec![
                ObjectSpec::cube("cube1", [0.0, 0.0, 0.0], 0x00ff00),
                ObjectSpec::cube("cube2", [3.0, 3.0, 0.0], 0xff0000),
                ObjectSpec::cube("cube3", [2.0, 0.0, 3.0], 0xff00ff),
            ],
        }
    }
}
