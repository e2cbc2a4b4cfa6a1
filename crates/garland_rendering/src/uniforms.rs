//! The shared uniform block.
//!
//! One buffer, refreshed once per frame, bound by every pipeline: camera
//! matrices, the animation scalars, and the foliage palette. Scalars pack
//! into vec4s to keep the WGSL struct layout identical to the Rust one.

use bytemuck::{Pod, Zeroable};
use garland_core::Palette;

/// Per-frame uniforms shared by all pipelines.
///
/// Field order must match the `Scene` struct in every WGSL source. All
/// offsets are naturally 16-byte aligned, so the byte cast needs no manual
/// padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SceneUniforms {
    /// View matrix, column-major.
    pub view: [[f32; 4]; 4],
    /// Projection matrix, column-major.
    pub proj: [[f32; 4]; 4],
    /// x = global progress, y = elapsed seconds, z and w unused.
    pub progress_time: [f32; 4],
    /// Foliage base hue.
    pub foliage_low: [f32; 4],
    /// Foliage shimmer hue.
    pub foliage_high: [f32; 4],
    /// Hue the field glows toward as the tree completes.
    pub foliage_glow: [f32; 4],
}

impl SceneUniforms {
    /// Size in bytes, for buffer creation.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Packs a frame's camera and animation state.
    #[must_use]
    pub fn new(
        view: [[f32; 4]; 4],
        proj: [[f32; 4]; 4],
        progress: f32,
        elapsed: f32,
        palette: &Palette,
    ) -> Self {
        Self {
            view,
            proj,
            progress_time: [progress, elapsed, 0.0, 0.0],
            foliage_low: palette.foliage_low.to_vec4(1.0),
            foliage_high: palette.foliage_high.to_vec4(1.0),
            foliage_glow: palette.foliage_glow.to_vec4(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniforms_are_192_bytes() {
        // Two mat4s plus four vec4s; a multiple of 16 as uniform buffers
        // require.
        assert_eq!(SceneUniforms::SIZE, 192);
        assert_eq!(SceneUniforms::SIZE % 16, 0);
    }

    #[test]
    fn test_packing() {
        let identity = [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        let uniforms = SceneUniforms::new(identity, identity, 0.5, 12.25, &Palette::default());
        assert_eq!(uniforms.progress_time[0], 0.5);
        assert_eq!(uniforms.progress_time[1], 12.25);
        assert_eq!(uniforms.foliage_high[1], 1.0);
        let bytes: &[u8] = bytemuck::bytes_of(&uniforms);
        assert_eq!(bytes.len(), SceneUniforms::SIZE);
    }
}
