//! # Chaos Cloud Sampling
//!
//! Every entity shares the same dispersed-state distribution: a solid
//! sphere, lifted above the floor, with samples pulled toward the center by
//! a power-law radius. The direction is uniform on the sphere (`theta`
//! uniform, `cos(phi)` uniform); only the radial law differs per category.
//!
//! Photo frames are the exception and scatter onto the sphere's shell, so
//! the six of them spread wide instead of clumping in the dense core.

use std::f32::consts::TAU;

use garland_core::Vec3;
use rand::Rng;

/// Samples a point inside the chaos sphere.
///
/// `bias` is the power-law exponent on the radial draw: 1.0 would spread
/// radii uniformly along the axis, larger values pack samples toward the
/// center and leave a wispy outer halo.
pub fn sample_biased(rng: &mut impl Rng, radius: f32, bias: f32, lift: f32) -> Vec3 {
    let r = radius * rng.gen::<f32>().powf(bias);
    let (theta, phi) = direction(rng);
    point(r, theta, phi, lift)
}

/// Samples a point on the chaos sphere's shell.
pub fn sample_shell(rng: &mut impl Rng, radius: f32, lift: f32) -> Vec3 {
    let (theta, phi) = direction(rng);
    point(radius, theta, phi, lift)
}

/// Uniform direction on the sphere: `theta ~ U(0, tau)`, `phi = acos(2u-1)`.
fn direction(rng: &mut impl Rng) -> (f32, f32) {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    (theta, phi)
}

/// Spherical-to-Cartesian with the cloud's axis convention: `phi` measures
/// from the Z axis and the lift raises the whole cloud along Y.
fn point(r: f32, theta: f32, phi: f32, lift: f32) -> Vec3 {
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin() + lift,
        r * phi.cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_biased_samples_stay_inside_lifted_sphere() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let center = Vec3::new(0.0, 3.5, 0.0);
        for _ in 0..5_000 {
            let p = sample_biased(&mut rng, 4.0, 2.5, 3.5);
            assert!(p.distance(center) <= 4.0 + 1e-4);
        }
    }

    #[test]
    fn test_shell_samples_sit_on_the_surface() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let center = Vec3::new(0.0, 4.0, 0.0);
        for _ in 0..1_000 {
            let p = sample_shell(&mut rng, 4.0, 4.0);
            assert!((p.distance(center) - 4.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_higher_bias_packs_samples_inward() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let center = Vec3::new(0.0, 0.0, 0.0);
        let mean = |bias: f32, rng: &mut ChaCha8Rng| {
            let total: f32 = (0..2_000)
                .map(|_| sample_biased(rng, 4.0, bias, 0.0).distance(center))
                .sum();
            total / 2_000.0
        };
        let loose = mean(1.0, &mut rng);
        let tight = mean(2.5, &mut rng);
        assert!(tight < loose, "bias 2.5 must pull mass toward the center");
    }
}
