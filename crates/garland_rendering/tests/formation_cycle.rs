//! End-to-end formation runs over the full animator stack, headless.
//!
//! Generates a real (small) layout, then steps `SceneAnimator` exactly the
//! way the viewer does: drained controls, fixed frame delta, staged
//! instance bytes each frame.

use garland_core::{SceneConfig, SceneControls, ScenePhase, Vec3};
use garland_procedural::{generate_layout, SceneSeed};
use garland_rendering::{OrnamentInstance, PhotoLibrary, SceneAnimator};

const FRAME_DELTA: f32 = 1.0 / 60.0;

fn small_config() -> SceneConfig {
    let mut config = SceneConfig::default();
    config.population.foliage = 600;
    config.population.ornaments = 24;
    config.population.frames = 4;
    config
}

fn staged(bytes: &[u8]) -> &[OrnamentInstance] {
    bytemuck::cast_slice(bytes)
}

#[test]
fn test_formation_reaches_exact_endpoint_within_300_frames() {
    let config = small_config();
    let layout = generate_layout(&config, SceneSeed::new(11));
    let mut animator = SceneAnimator::new(&config, &layout, ScenePhase::Chaos);
    let controls = SceneControls::new();
    let mut photos = PhotoLibrary::new(config.population.frames);

    controls.request_toggle();
    let mut previous = 0.0_f32;
    for _ in 0..300 {
        let update = animator.frame(&layout, &controls, &mut photos, FRAME_DELTA);
        assert!(update.progress >= previous, "progress moved backwards");
        assert!(update.progress <= 1.0, "progress overshot the target");
        previous = update.progress;
    }
    assert_eq!(previous, 1.0, "300 frames must reach the exact endpoint");

    // Absent another toggle the scene holds the endpoint exactly.
    let update = animator.frame(&layout, &controls, &mut photos, FRAME_DELTA);
    assert_eq!(update.progress, 1.0);
    assert!(update.stats.settled);
}

#[test]
fn test_settled_endpoints_stage_exact_stored_positions() {
    let config = small_config();
    let layout = generate_layout(&config, SceneSeed::new(3));
    let controls = SceneControls::new();
    let ornament_count = layout.ornaments().len();

    // Settled chaos: every staged position equals its stored chaos position.
    let mut dispersed = SceneAnimator::new(&config, &layout, ScenePhase::Chaos);
    let mut photos = PhotoLibrary::new(config.population.frames);
    let update = dispersed.frame(&layout, &controls, &mut photos, FRAME_DELTA);
    assert_eq!(update.progress, 0.0);
    let instances = staged(update.instance_bytes);
    for (instance, ornament) in instances.iter().zip(layout.ornaments()) {
        let p = ornament.chaos_position;
        assert_eq!(&instance.position_scale[..3], &[p.x, p.y, p.z]);
    }
    for (instance, frame) in instances[ornament_count..].iter().zip(layout.frames()) {
        let p = frame.chaos_position;
        assert_eq!(&instance.position_scale[..3], &[p.x, p.y, p.z]);
    }

    // Settled formed: every staged position equals its stored target.
    let mut formed = SceneAnimator::new(&config, &layout, ScenePhase::Formed);
    let update = formed.frame(&layout, &controls, &mut photos, FRAME_DELTA);
    assert_eq!(update.progress, 1.0);
    let instances = staged(update.instance_bytes);
    for (instance, ornament) in instances.iter().zip(layout.ornaments()) {
        let p = ornament.target_position;
        assert_eq!(&instance.position_scale[..3], &[p.x, p.y, p.z]);
    }
    for (instance, frame) in instances[ornament_count..].iter().zip(layout.frames()) {
        let p = frame.target_position;
        assert_eq!(&instance.position_scale[..3], &[p.x, p.y, p.z]);
    }
}

#[test]
fn test_mid_flight_toggle_continues_without_jump() {
    let config = small_config();
    let layout = generate_layout(&config, SceneSeed::new(5));
    let mut animator = SceneAnimator::new(&config, &layout, ScenePhase::Chaos);
    let controls = SceneControls::new();
    let mut photos = PhotoLibrary::new(config.population.frames);

    controls.request_toggle();
    let mut progress = 0.0;
    while progress < 0.5 {
        progress = animator
            .frame(&layout, &controls, &mut photos, FRAME_DELTA)
            .progress;
    }

    controls.request_toggle();
    let update = animator.frame(&layout, &controls, &mut photos, FRAME_DELTA);
    assert_eq!(update.stats.phase, ScenePhase::Chaos);
    assert!(update.progress < progress, "drive must reverse");

    // One frame may close at most one smoothing step of the distance.
    let step_ceiling = progress * FRAME_DELTA * config.driver.rate * config.driver.gain;
    assert!(
        progress - update.progress <= step_ceiling + 1e-6,
        "reversal jumped further than one smoothing step"
    );
}

#[test]
fn test_staged_positions_stay_inside_scene_bounds() {
    let config = small_config();
    let layout = generate_layout(&config, SceneSeed::new(13));
    let mut animator = SceneAnimator::new(&config, &layout, ScenePhase::Chaos);
    let controls = SceneControls::new();
    let mut photos = PhotoLibrary::new(config.population.frames);

    // Bounding box of every stored endpoint; blends can never leave it.
    let mut low = Vec3::new(f32::MAX, f32::MAX, f32::MAX);
    let mut high = Vec3::new(f32::MIN, f32::MIN, f32::MIN);
    let endpoints = layout
        .ornaments()
        .iter()
        .flat_map(|o| [o.chaos_position, o.target_position])
        .chain(
            layout
                .frames()
                .iter()
                .flat_map(|f| [f.chaos_position, f.target_position]),
        );
    for p in endpoints {
        low = Vec3::new(low.x.min(p.x), low.y.min(p.y), low.z.min(p.z));
        high = Vec3::new(high.x.max(p.x), high.y.max(p.y), high.z.max(p.z));
    }

    controls.request_toggle();
    for frame_index in 0..300 {
        let update = animator.frame(&layout, &controls, &mut photos, FRAME_DELTA);
        if frame_index % 30 != 0 {
            continue;
        }
        for instance in staged(update.instance_bytes) {
            let [x, y, z, _] = instance.position_scale;
            assert!(x >= low.x - 1e-4 && x <= high.x + 1e-4);
            assert!(y >= low.y - 1e-4 && y <= high.y + 1e-4);
            assert!(z >= low.z - 1e-4 && z <= high.z + 1e-4);
        }
    }
}

#[test]
fn test_identical_runs_stage_identical_bytes() {
    let config = small_config();
    let layout = generate_layout(&config, SceneSeed::new(21));

    let mut first = SceneAnimator::new(&config, &layout, ScenePhase::Chaos);
    let mut second = SceneAnimator::new(&config, &layout, ScenePhase::Chaos);
    let controls_a = SceneControls::new();
    let controls_b = SceneControls::new();
    let mut photos_a = PhotoLibrary::new(config.population.frames);
    let mut photos_b = PhotoLibrary::new(config.population.frames);

    controls_a.request_toggle();
    controls_b.request_toggle();
    for _ in 0..120 {
        let a = first
            .frame(&layout, &controls_a, &mut photos_a, FRAME_DELTA)
            .instance_bytes
            .to_vec();
        let b = second
            .frame(&layout, &controls_b, &mut photos_b, FRAME_DELTA)
            .instance_bytes
            .to_vec();
        assert_eq!(a, b, "same inputs must stage the same bytes");
    }
}
