//! # Ornament Generation
//!
//! A single uniform draw partitions every ornament into its category, then
//! target and chaos positions are sampled exactly like the foliage's, minus
//! the spiral: ornaments hang anywhere on the cone surface.
//!
//! The returned vector is grouped contiguously by kind, in
//! [`OrnamentKind::ALL`] order, so the instanced renderer can draw each
//! category as one range of a shared buffer.

use std::f32::consts::TAU;

use garland_core::{Ornament, OrnamentKind, SceneConfig, Vec3};
use rand::Rng;

use crate::chaos;

/// Cumulative partition threshold: draws below this are baubles.
const BAUBLE_SHARE: f32 = 0.4;

/// Draws between the bauble share and this are gifts; the rest are lamps.
const GIFT_SHARE: f32 = 0.3;

/// Generates all ornaments, grouped by kind.
///
/// Colors alternate by draw index parity within the two-color kinds, so
/// reordering into contiguous groups never changes which ornament got which
/// color.
#[must_use]
pub fn generate(config: &SceneConfig, rng: &mut impl Rng) -> Vec<Ornament> {
    let tree = config.tree;
    let cloud = config.chaos;
    let palette = config.palette;

    let mut baubles = Vec::new();
    let mut gifts = Vec::new();
    let mut lamps = Vec::new();

    for index in 0..config.population.ornaments {
        let draw = rng.gen::<f32>();
        let kind = if draw < BAUBLE_SHARE {
            OrnamentKind::Bauble
        } else if draw < BAUBLE_SHARE + GIFT_SHARE {
            OrnamentKind::Gift
        } else {
            OrnamentKind::Lamp
        };

        let h = rng.gen::<f32>() * tree.height;
        let radius_at_h = (1.0 - h / tree.height) * tree.radius;
        let angle = rng.gen::<f32>() * TAU;
        let target_position = Vec3::new(radius_at_h * angle.cos(), h, radius_at_h * angle.sin());

        let chaos_position =
            chaos::sample_biased(rng, cloud.radius, cloud.ornament_bias, cloud.lift);

        let even = index % 2 == 0;
        let color = match kind {
            OrnamentKind::Bauble => {
                if even {
                    palette.bauble_primary
                } else {
                    palette.bauble_alternate
                }
            }
            OrnamentKind::Gift => {
                if even {
                    palette.gift_primary
                } else {
                    palette.gift_alternate
                }
            }
            OrnamentKind::Lamp => palette.lamp,
        };

        let ornament = Ornament {
            chaos_position,
            target_position,
            kind,
            lag_weight: kind.lag_weight(config.weights),
            color,
            emission: kind.emission(),
        };

        match kind {
            OrnamentKind::Bauble => baubles.push(ornament),
            OrnamentKind::Gift => gifts.push(ornament),
            OrnamentKind::Lamp => lamps.push(ornament),
        }
    }

    let mut ornaments = Vec::with_capacity(config.population.ornaments);
    ornaments.append(&mut baubles);
    ornaments.append(&mut gifts);
    ornaments.append(&mut lamps);
    ornaments
}
