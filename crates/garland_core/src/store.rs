//! # Scene Layout Store
//!
//! The dual-position data every renderer reads: for each entity, where it
//! floats in the chaos cloud and where it lands on the formed tree, plus the
//! static attributes (size, kind, lag weight, color) fixed at generation.
//!
//! [`SceneLayout`] is built once by `garland_procedural` and never mutated.
//! Per-frame code derives transient positions from it and throws them away;
//! nothing ever writes back.

use bytemuck::{Pod, Zeroable};

use crate::color::Rgb;
use crate::config::LagWeights;
use crate::math::Vec3;

/// One foliage point of the particle field.
///
/// This struct is also the GPU vertex format: the field's vertex buffer is a
/// straight `bytemuck` cast of the foliage slice, stepped per instance, and
/// the vertex stage blends the two positions itself. Keep it tightly packed;
/// the layout tests below pin the exact size.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct FoliagePoint {
    /// Position in the dispersed cloud.
    pub chaos_position: Vec3,
    /// Position on the formed tree.
    pub target_position: Vec3,
    /// Sprite size in world units.
    pub size: f32,
}

impl FoliagePoint {
    /// Size of one point in bytes, as uploaded to the GPU.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Creates a foliage point.
    #[must_use]
    pub const fn new(chaos_position: Vec3, target_position: Vec3, size: f32) -> Self {
        Self {
            chaos_position,
            target_position,
            size,
        }
    }
}

/// Ornament category. Each kind shares one unit mesh and one lag weight;
/// instances differ only in transform and color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrnamentKind {
    /// Polished sphere, medium lag.
    Bauble,
    /// Wrapped box, the heavy laggard.
    Gift,
    /// Small emissive sphere, light and quick.
    Lamp,
}

impl OrnamentKind {
    /// Every kind, in the order instances are grouped and drawn.
    pub const ALL: [Self; 3] = [Self::Bauble, Self::Gift, Self::Lamp];

    /// World-unit scale of the kind's unit mesh (sphere radius, or full side
    /// length for the gift cube), before the per-frame formation scale.
    #[must_use]
    pub const fn base_radius(self) -> f32 {
        match self {
            Self::Bauble => 0.18,
            Self::Gift => 0.25,
            Self::Lamp => 0.08,
        }
    }

    /// Emissive boost for the kind. Lamps glow; everything else relies on
    /// plain shading.
    #[must_use]
    pub const fn emission(self) -> f32 {
        match self {
            Self::Lamp => 5.0,
            Self::Bauble | Self::Gift => 0.0,
        }
    }

    /// Looks up this kind's lag weight in the configured set.
    #[must_use]
    pub const fn lag_weight(self, weights: LagWeights) -> f32 {
        match self {
            Self::Bauble => weights.bauble,
            Self::Gift => weights.gift,
            Self::Lamp => weights.lamp,
        }
    }
}

/// One instanced ornament with its frozen attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ornament {
    /// Position in the dispersed cloud.
    pub chaos_position: Vec3,
    /// Position on the formed tree.
    pub target_position: Vec3,
    /// Category, selecting mesh and draw group.
    pub kind: OrnamentKind,
    /// Easing exponent parameter; smaller settles later.
    pub lag_weight: f32,
    /// Instance color.
    pub color: Rgb,
    /// Emissive boost, nonzero only for lamps.
    pub emission: f32,
}

/// Placement of one photo frame slot.
///
/// Frames have no per-instance weight; they all follow one fixed easing
/// curve ([`Self::DRIFT_EXPONENT`]) and drift into place ahead of the
/// ornaments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramePlacement {
    /// Position in the dispersed cloud (on the chaos sphere's shell).
    pub chaos_position: Vec3,
    /// Position floating just outside the cone.
    pub target_position: Vec3,
}

impl FramePlacement {
    /// Easing exponent shared by every frame. Below 1, so frames lead the
    /// global progress.
    pub const DRIFT_EXPONENT: f32 = 0.6;
}

/// The complete generated scene: every entity's two positions and frozen
/// attributes.
///
/// Immutable after construction. Renderers borrow slices; nobody writes.
#[derive(Clone, Debug)]
pub struct SceneLayout {
    foliage: Vec<FoliagePoint>,
    ornaments: Vec<Ornament>,
    frames: Vec<FramePlacement>,
}

impl SceneLayout {
    /// Assembles a layout from generated parts.
    #[must_use]
    pub fn new(
        foliage: Vec<FoliagePoint>,
        ornaments: Vec<Ornament>,
        frames: Vec<FramePlacement>,
    ) -> Self {
        Self {
            foliage,
            ornaments,
            frames,
        }
    }

    /// The particle field points.
    #[must_use]
    pub fn foliage(&self) -> &[FoliagePoint] {
        &self.foliage
    }

    /// Every ornament, grouped contiguously by kind.
    #[must_use]
    pub fn ornaments(&self) -> &[Ornament] {
        &self.ornaments
    }

    /// Photo frame placements in slot order.
    #[must_use]
    pub fn frames(&self) -> &[FramePlacement] {
        &self.frames
    }

    /// Ornament count per kind, ordered as [`OrnamentKind::ALL`].
    #[must_use]
    pub fn kind_counts(&self) -> [usize; 3] {
        let mut counts = [0_usize; 3];
        for ornament in &self.ornaments {
            match ornament.kind {
                OrnamentKind::Bauble => counts[0] += 1,
                OrnamentKind::Gift => counts[1] += 1,
                OrnamentKind::Lamp => counts[2] += 1,
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foliage_point_is_tightly_packed() {
        // Two Vec3 plus one f32, no padding. The GPU vertex layout counts
        // on these exact offsets.
        assert_eq!(FoliagePoint::SIZE, 28);
        assert_eq!(std::mem::align_of::<FoliagePoint>(), 4);
    }

    #[test]
    fn test_foliage_points_cast_to_contiguous_bytes() {
        let points = [
            FoliagePoint::new(Vec3::ZERO, Vec3::Y, 0.05),
            FoliagePoint::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, 0.08),
        ];
        let bytes: &[u8] = bytemuck::cast_slice(&points);
        assert_eq!(bytes.len(), 2 * FoliagePoint::SIZE);
    }

    #[test]
    fn test_kind_base_radii_and_emission() {
        assert_eq!(OrnamentKind::Bauble.base_radius(), 0.18);
        assert_eq!(OrnamentKind::Gift.base_radius(), 0.25);
        assert_eq!(OrnamentKind::Lamp.base_radius(), 0.08);
        assert_eq!(OrnamentKind::Lamp.emission(), 5.0);
        assert_eq!(OrnamentKind::Bauble.emission(), 0.0);
    }

    #[test]
    fn test_kind_lag_weight_lookup() {
        let weights = LagWeights::default();
        assert_eq!(OrnamentKind::Gift.lag_weight(weights), weights.gift);
        assert_eq!(OrnamentKind::Bauble.lag_weight(weights), weights.bauble);
        assert_eq!(OrnamentKind::Lamp.lag_weight(weights), weights.lamp);
    }

    #[test]
    fn test_kind_counts_follow_all_order() {
        let ornament = |kind: OrnamentKind| Ornament {
            chaos_position: Vec3::ZERO,
            target_position: Vec3::ZERO,
            kind,
            lag_weight: kind.lag_weight(LagWeights::default()),
            color: Rgb::new(1.0, 1.0, 1.0),
            emission: kind.emission(),
        };

        let layout = SceneLayout::new(
            Vec::new(),
            vec![
                ornament(OrnamentKind::Lamp),
                ornament(OrnamentKind::Bauble),
                ornament(OrnamentKind::Lamp),
                ornament(OrnamentKind::Gift),
            ],
            Vec::new(),
        );

        assert_eq!(layout.kind_counts(), [1, 1, 2]);
        assert_eq!(layout.foliage().len(), 0);
        assert_eq!(layout.frames().len(), 0);
        assert_eq!(layout.ornaments().len(), 4);
    }
}
