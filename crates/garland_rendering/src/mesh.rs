//! Unit meshes for the instanced object categories.
//!
//! One mesh per shape, generated once at startup: a uv-sphere for baubles
//! and lamps, a cube for gifts, a plane for the floor. Meshes are unit
//! sized (sphere radius 1, cube side 1) so the per-instance scale carries
//! all sizing.

use bytemuck::{Pod, Zeroable};

/// One mesh vertex: position + normal.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Outward normal.
    pub normal: [f32; 3],
}

impl MeshVertex {
    /// Size in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Shader locations 0 and 1; instance data owns 2 and 3.
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    /// Vertex buffer layout for the mesh slot.
    #[must_use]
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::SIZE as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// An indexed triangle mesh, CPU-side.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Vertex data in draw order.
    pub vertices: Vec<MeshVertex>,
    /// Triangle list indices into `vertices`.
    pub indices: Vec<u32>,
}

impl Mesh {
    /// A uv-sphere of radius 1 centered at the origin.
    #[must_use]
    pub fn unit_sphere(rings: u32, segments: u32) -> Self {
        let mut vertices =
            Vec::with_capacity(((rings + 1) * (segments + 1)) as usize);
        for ring in 0..=rings {
            let phi = std::f32::consts::PI * ring as f32 / rings as f32;
            for segment in 0..=segments {
                let theta = std::f32::consts::TAU * segment as f32 / segments as f32;
                let position = [
                    phi.sin() * theta.cos(),
                    phi.cos(),
                    phi.sin() * theta.sin(),
                ];
                vertices.push(MeshVertex {
                    position,
                    normal: position,
                });
            }
        }

        let mut indices = Vec::with_capacity((rings * segments * 6) as usize);
        let stride = segments + 1;
        for ring in 0..rings {
            for segment in 0..segments {
                let a = ring * stride + segment;
                let b = a + stride;
                indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
            }
        }

        Self { vertices, indices }
    }

    /// An axis-aligned cube with side 1 centered at the origin, one normal
    /// per face.
    #[must_use]
    pub fn unit_cube() -> Self {
        // normal, up, right per face
        const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
            ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
            ([-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]),
            ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
            ([0.0, -1.0, 0.0], [0.0, 0.0, -1.0], [1.0, 0.0, 0.0]),
            ([0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]),
            ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
        ];
        const CORNERS: [(f32, f32); 4] = [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);
        for (normal, up, right) in FACES {
            let base = vertices.len() as u32;
            for (u, v) in CORNERS {
                let position = [
                    normal[0] * 0.5 + right[0] * u + up[0] * v,
                    normal[1] * 0.5 + right[1] * u + up[1] * v,
                    normal[2] * 0.5 + right[2] * u + up[2] * v,
                ];
                vertices.push(MeshVertex { position, normal });
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self { vertices, indices }
    }

    /// A square plane in XZ at y = 0 with the given half extent, facing up.
    #[must_use]
    pub fn unit_plane(half_extent: f32) -> Self {
        let normal = [0.0, 1.0, 0.0];
        let vertices = vec![
            MeshVertex {
                position: [-half_extent, 0.0, -half_extent],
                normal,
            },
            MeshVertex {
                position: [half_extent, 0.0, -half_extent],
                normal,
            },
            MeshVertex {
                position: [half_extent, 0.0, half_extent],
                normal,
            },
            MeshVertex {
                position: [-half_extent, 0.0, half_extent],
                normal,
            },
        ];
        Self {
            vertices,
            indices: vec![0, 1, 2, 0, 2, 3],
        }
    }

    /// Index count for the draw call.
    #[must_use]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Vertex data as bytes for buffer creation.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as bytes for buffer creation.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
