//! # Foliage Field Generation
//!
//! Thirty thousand points arranged into helical arms around the cone. Each
//! arm is a strand of the same spiral, offset by a fixed phase; jitter on
//! the angle and the radial thickness turns the clean curve into a dense
//! ruff that still reads as structure from a distance.

use std::f32::consts::TAU;

use garland_core::{FoliagePoint, SceneConfig, Vec3};
use rand::Rng;

use crate::chaos;

/// Full width of the angular jitter around an arm, radians.
const ANGULAR_JITTER: f32 = 1.0;

/// Full width of the radial thickness jitter at the base. Scales with the
/// cone taper so the apex stays sharp.
const THICKNESS_JITTER: f32 = 0.7;

/// Smallest sprite size in world units.
const SIZE_FLOOR: f32 = 0.025;

/// Random spread added on top of the size floor.
const SIZE_SPREAD: f32 = 0.06;

/// Generates the particle field.
///
/// Arms are assigned round-robin by point index, so every arm carries the
/// same share of the field regardless of the RNG draws.
#[must_use]
pub fn generate(config: &SceneConfig, rng: &mut impl Rng) -> Vec<FoliagePoint> {
    let tree = config.tree;
    let cloud = config.chaos;
    let arm_phase = TAU / tree.spiral_arms as f32;

    let mut points = Vec::with_capacity(config.population.foliage);
    for index in 0..config.population.foliage {
        let chaos_position =
            chaos::sample_biased(rng, cloud.radius, cloud.foliage_bias, cloud.lift);

        let h = rng.gen::<f32>() * tree.height;
        let taper = 1.0 - h / tree.height;
        let arm = (index as u32 % tree.spiral_arms) as f32;
        let angle = (h / tree.height) * TAU * tree.windings
            + arm * arm_phase
            + (rng.gen::<f32>() - 0.5) * ANGULAR_JITTER;
        let radius = taper * tree.radius + (rng.gen::<f32>() - 0.5) * THICKNESS_JITTER * taper;

        let target_position = Vec3::new(angle.cos() * radius, h, angle.sin() * radius);
        let size = rng.gen::<f32>() * SIZE_SPREAD + SIZE_FLOOR;
        points.push(FoliagePoint::new(chaos_position, target_position, size));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_field_matches_population() {
        let config = SceneConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let points = generate(&config, &mut rng);
        assert_eq!(points.len(), config.population.foliage);
    }

    #[test]
    fn test_sizes_stay_in_band() {
        let config = SceneConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for point in generate(&config, &mut rng) {
            assert!(point.size >= SIZE_FLOOR);
            assert!(point.size < SIZE_FLOOR + SIZE_SPREAD);
        }
    }

    #[test]
    fn test_targets_taper_toward_apex() {
        let config = SceneConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for point in generate(&config, &mut rng) {
            let target = point.target_position;
            assert!(target.y >= 0.0 && target.y <= config.tree.height);

            let taper = 1.0 - target.y / config.tree.height;
            let horizontal = (target.x * target.x + target.z * target.z).sqrt();
            let ceiling = taper * config.tree.radius + taper * THICKNESS_JITTER / 2.0;
            assert!(horizontal <= ceiling + 1e-4);
        }
    }
}
