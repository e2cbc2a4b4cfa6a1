//! Foliage Field Stream
//!
//! The foliage points upload once and never change; the blend between the
//! cloud and the tree happens in the vertex stage. This module describes
//! that static stream to the pipeline: one instance per point, six vertices
//! per instance for the billboard quad.

use garland_core::{FoliagePoint, SceneLayout};

/// Draw-call bookkeeping for the foliage pass.
#[derive(Debug, Clone, Copy)]
pub struct FoliageField {
    point_count: u32,
}

impl FoliageField {
    /// Billboard quad, two triangles.
    pub const VERTICES_PER_POINT: u32 = 6;

    const ATTRIBS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32];

    /// Captures the point count of a generated layout.
    #[must_use]
    pub fn new(layout: &SceneLayout) -> Self {
        Self {
            point_count: u32::try_from(layout.foliage().len()).unwrap_or(u32::MAX),
        }
    }

    /// Buffer layout for the point stream. Instance-stepped: the corner
    /// expansion runs off the vertex index, not a second buffer.
    #[must_use]
    pub const fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: FoliagePoint::SIZE as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }

    /// The point stream as bytes, ready for a one-time buffer upload.
    #[must_use]
    pub fn point_bytes(layout: &SceneLayout) -> &[u8] {
        bytemuck::cast_slice(layout.foliage())
    }

    /// Instances to draw.
    #[must_use]
    pub const fn point_count(&self) -> u32 {
        self.point_count
    }
}
