//! Unit-cube geometry and per-object instance records.

use glam::Vec3;

use crate::scene::SceneRegistry;

/// Vertex of the shared unit cube.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeVertex {
    /// Position on the unit cube centered at the origin.
    pub position: [f32; 3],
    /// Outward face normal.
    pub normal: [f32; 3],
}

impl CubeVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    /// Buffer layout for slot 0.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// One drawn object: where, how big, what color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeInstance {
    /// World-space center.
    pub center: [f32; 3],
    /// Edge lengths.
    pub size: [f32; 3],
    /// Linear RGB.
    pub color: [f32; 3],
}

impl CubeInstance {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![2 => Float32x3, 3 => Float32x3, 4 => Float32x3];

    /// Buffer layout for slot 1.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// (normal, u, v) per face, with `u × v = normal` so the quads wind
/// counter-clockwise seen from outside.
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::NEG_Z, Vec3::Y),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::X, Vec3::NEG_Z),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
];

/// Indices into [`cube_vertices`], two triangles per face.
pub const CUBE_INDICES: [u16; 36] = {
    let mut indices = [0u16; 36];
    let mut face = 0;
    while face < 6 {
        let base = (face * 4) as u16;
        let i = face * 6;
        indices[i] = base;
        indices[i + 1] = base + 1;
        indices[i + 2] = base + 2;
        indices[i + 3] = base;
        indices[i + 4] = base + 2;
        indices[i + 5] = base + 3;
        face += 1;
    }
    indices
};

/// The 24 vertices of a unit cube, four per face so each face gets a flat
/// normal.
#[must_use]
pub fn cube_vertices() -> Vec<CubeVertex> {
    const CORNERS: [(f32, f32); 4] = [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)];
    FACES
        .iter()
        .flat_map(|&(normal, u, v)| {
            CORNERS.iter().map(move |&(su, sv)| CubeVertex {
                position: (normal * 0.5 + u * su + v * sv).to_array(),
                normal: normal.to_array(),
            })
        })
        .collect()
}

/// One instance per registered object, at its world position.
#[must_use]
pub fn instances(registry: &SceneRegistry) -> Vec<CubeInstance> {
    registry
        .iter()
        .filter_map(|(id, object)| {
            let center = registry.world_position(id)?;
            Some(CubeInstance {
                center: center.to_array(),
                size: (object.shape.half_extents() * 2.0).to_array(),
                color: object.color,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SceneOptions;

    #[test]
    fn cube_has_flat_shaded_faces() {
        let vertices = cube_vertices();
        assert_eq!(vertices.len(), 24);
        for v in &vertices {
            assert!(v.position.iter().all(|c| c.abs() == 0.5));
            let n = Vec3::from_array(v.normal);
            assert!((Vec3::from_array(v.position).dot(n) - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn triangles_face_outward() {
        let vertices = cube_vertices();
        for tri in CUBE_INDICES.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]]
                .map(|i| Vec3::from_array(vertices[usize::from(i)].position));
            let normal = Vec3::from_array(vertices[usize::from(tri[0])].normal);
            assert!((b - a).cross(c - a).dot(normal) > 0.0);
        }
    }

    #[test]
    fn default_scene_yields_three_instances() {
        let registry = SceneRegistry::from_options(&SceneOptions::default()).unwrap();
        let instances = instances(&registry);
        assert_eq!(instances.len(), 3);
        assert_eq!(instances[1].center, [3.0, 3.0, 0.0]);
        assert_eq!(instances[1].size, [1.0, 1.0, 1.0]);
        assert_eq!(instances[1].color, [1.0, 0.0, 0.0]);
    }
}
