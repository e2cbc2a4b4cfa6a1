//! # Layout Invariant Tests
//!
//! Whole-scene checks over the generated layout: determinism, population,
//! and the geometric bounds every renderer quietly relies on.

use garland_core::{SceneConfig, Vec3};
use garland_procedural::{generate_layout, SceneSeed};

/// Test: the same seed and config reproduce the layout exactly.
#[test]
fn test_same_seed_reproduces_layout_exactly() {
    let config = SceneConfig::default();
    let first = generate_layout(&config, SceneSeed::new(42));
    let second = generate_layout(&config, SceneSeed::new(42));

    assert_eq!(first.foliage(), second.foliage());
    assert_eq!(first.ornaments(), second.ornaments());
    assert_eq!(first.frames(), second.frames());
}

/// Test: different seeds give different scenes.
#[test]
fn test_different_seeds_differ() {
    let config = SceneConfig::default();
    let a = generate_layout(&config, SceneSeed::new(42));
    let b = generate_layout(&config, SceneSeed::new(43));
    assert_ne!(a.foliage()[0], b.foliage()[0]);
}

/// Test: populations match the config, and the ornament partition covers
/// every kind and sums back to the total.
#[test]
fn test_populations_and_partition() {
    let config = SceneConfig::default();
    let layout = generate_layout(&config, SceneSeed::new(42));

    assert_eq!(layout.foliage().len(), config.population.foliage);
    assert_eq!(layout.ornaments().len(), config.population.ornaments);
    assert_eq!(layout.frames().len(), config.population.frames);

    let counts = layout.kind_counts();
    assert_eq!(counts.iter().sum::<usize>(), config.population.ornaments);
    for (i, count) in counts.iter().enumerate() {
        assert!(*count > 0, "kind {i} got no instances at the default split");
    }
}

/// Test: every chaos position lies inside the lifted chaos sphere.
#[test]
fn test_chaos_positions_inside_sphere() {
    let config = SceneConfig::default();
    let layout = generate_layout(&config, SceneSeed::new(42));
    let center = Vec3::new(0.0, config.chaos.lift, 0.0);
    let frame_center = Vec3::new(0.0, config.chaos.frame_lift, 0.0);
    let radius = config.chaos.radius;

    for point in layout.foliage() {
        assert!(point.chaos_position.distance(center) <= radius + 1e-4);
    }
    for ornament in layout.ornaments() {
        assert!(ornament.chaos_position.distance(center) <= radius + 1e-4);
    }
    for frame in layout.frames() {
        let distance = frame.chaos_position.distance(frame_center);
        assert!((distance - radius).abs() < 1e-3, "frames sit on the shell");
    }
}

/// Test: every formed target respects the cone.
#[test]
fn test_formed_targets_respect_the_cone() {
    let config = SceneConfig::default();
    let layout = generate_layout(&config, SceneSeed::new(42));
    let height = config.tree.height;
    let radius = config.tree.radius;

    for point in layout.foliage() {
        let t = point.target_position;
        assert!(t.y >= 0.0 && t.y <= height);
        let horizontal = (t.x * t.x + t.z * t.z).sqrt();
        let taper = 1.0 - t.y / height;
        // Thickness jitter widens the cone by at most 0.35 at the base.
        assert!(horizontal <= taper * radius + taper * 0.35 + 1e-4);
    }

    for ornament in layout.ornaments() {
        let t = ornament.target_position;
        assert!(t.y >= 0.0 && t.y <= height);
        let horizontal = (t.x * t.x + t.z * t.z).sqrt();
        assert!(horizontal <= radius + 1e-4);
    }

    for frame in layout.frames() {
        let t = frame.target_position;
        let horizontal = (t.x * t.x + t.z * t.z).sqrt();
        let cone = (1.0 - t.y / height) * radius;
        assert!(horizontal > cone, "frames must float outside the foliage");
    }
}

/// Test: shrunken populations generate consistently too.
#[test]
fn test_small_scene_generates() {
    let config = SceneConfig::from_toml_str(
        r#"
        [population]
        foliage = 100
        ornaments = 12
        frames = 3
        "#,
    )
    .expect("small config must validate");

    let layout = generate_layout(&config, SceneSeed::default());
    assert_eq!(layout.foliage().len(), 100);
    assert_eq!(layout.ornaments().len(), 12);
    assert_eq!(layout.frames().len(), 3);
    assert_eq!(layout.kind_counts().iter().sum::<usize>(), 12);
}
