//! Instance data structures for GPU upload.

use bytemuck::{Pod, Zeroable};
use garland_core::{Rgb, Vec3};

/// Per-instance data sent to the GPU.
///
/// One of these per ornament and per photo frame, rewritten every frame and
/// consumed by the instanced vertex shaders. Two vec4s keep it 16-byte
/// stride friendly.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct OrnamentInstance {
    /// World position (x, y, z) + uniform scale packed in w.
    pub position_scale: [f32; 4],

    /// Instance color in rgb + emissive boost in w.
    pub color_emission: [f32; 4],
}

impl OrnamentInstance {
    /// Size in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Shader locations 2 and 3; the unit meshes own 0 and 1.
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![2 => Float32x4, 3 => Float32x4];

    /// Creates an instance from a blended position and frozen attributes.
    #[must_use]
    pub fn new(position: Vec3, scale: f32, color: Rgb, emission: f32) -> Self {
        Self {
            position_scale: [position.x, position.y, position.z, scale],
            color_emission: color.to_vec4(emission),
        }
    }

    /// Vertex buffer layout for the instance-stepped slot.
    #[must_use]
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::SIZE as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}
