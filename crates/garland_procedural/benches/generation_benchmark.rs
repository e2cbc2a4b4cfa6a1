//! # Layout Generation Benchmark
//!
//! Generation runs once at startup, but startup still has a budget: the
//! reference scene (30000 foliage points, 180 ornaments, 6 frames) should
//! land comfortably under a frame's worth of time.
//!
//! Run with: `cargo bench --package garland_procedural`

// Benchmarks don't need docs and may have intentionally unused code
#![allow(missing_docs)]
#![allow(dead_code)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use garland_core::SceneConfig;
use garland_procedural::{foliage, generate_layout, SceneSeed};

/// Benchmark: the full reference scene.
fn bench_full_layout(c: &mut Criterion) {
    let config = SceneConfig::default();
    c.bench_function("generate_layout_reference_scene", |b| {
        b.iter(|| black_box(generate_layout(&config, SceneSeed::new(42))));
    });
}

/// Benchmark: the foliage field alone at several populations.
fn bench_foliage_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("foliage_field");

    for count in [1_000_usize, 10_000, 30_000] {
        let toml = format!("[population]\nfoliage = {count}");
        let config = SceneConfig::from_toml_str(&toml).expect("bench config");

        group.bench_with_input(BenchmarkId::from_parameter(count), &config, |b, config| {
            b.iter(|| {
                let mut rng = SceneSeed::new(42).derive(b"foliage").rng();
                black_box(foliage::generate(config, &mut rng))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_layout, bench_foliage_scaling);
criterion_main!(benches);
