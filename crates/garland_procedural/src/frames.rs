//! # Photo Frame Ring
//!
//! Six slots spread around the tree at even ring angles, each nudged by
//! jitter and pushed a little outside the cone surface so the frames float
//! clear of the foliage. Their chaos positions sit on the sphere's shell;
//! with so few of them, interior sampling tends to clump.

use std::f32::consts::TAU;

use garland_core::{FramePlacement, SceneConfig, Vec3};
use rand::Rng;

use crate::chaos;

/// Full width of the jitter on the even ring angles, radians.
const RING_JITTER: f32 = 1.2;

/// Lowest frame height in world units.
const HEIGHT_FLOOR: f32 = 1.5;

/// Random spread added on top of the height floor.
const HEIGHT_SPREAD: f32 = 5.5;

/// Minimum clearance outside the cone surface.
const OFFSET_FLOOR: f32 = 0.4;

/// Random spread added on top of the clearance.
const OFFSET_SPREAD: f32 = 1.2;

/// Generates the frame placements in slot order.
#[must_use]
pub fn generate(config: &SceneConfig, rng: &mut impl Rng) -> Vec<FramePlacement> {
    let tree = config.tree;
    let cloud = config.chaos;
    let count = config.population.frames;

    let mut frames = Vec::with_capacity(count);
    for slot in 0..count {
        let angle = (slot as f32 / count as f32) * TAU + (rng.gen::<f32>() - 0.5) * RING_JITTER;
        let h = HEIGHT_FLOOR + rng.gen::<f32>() * HEIGHT_SPREAD;
        let radius_at_h = (1.0 - h / tree.height) * tree.radius;
        let radius = radius_at_h + OFFSET_FLOOR + rng.gen::<f32>() * OFFSET_SPREAD;

        frames.push(FramePlacement {
            chaos_position: chaos::sample_shell(rng, cloud.radius, cloud.frame_lift),
            target_position: Vec3::new(angle.cos() * radius, h, angle.sin() * radius),
        });
    }
    frames
}
