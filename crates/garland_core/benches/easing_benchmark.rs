//! # Easing Hot-Path Benchmark
//!
//! The instanced path evaluates `lagged_progress` plus a position blend for
//! every ornament every frame, and the driver steps once per frame. Both
//! must stay far below frame budget at the reference population.
//!
//! Run with: `cargo bench --package garland_core`

// Benchmarks don't need docs and may have intentionally unused code
#![allow(missing_docs)]
#![allow(dead_code)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use garland_core::{lagged_progress, DriverTuning, ProgressDriver, ScenePhase, Vec3};

/// Ornament count in the reference scene.
const ORNAMENT_COUNT: usize = 180;

/// Benchmark: one full formation inside the driver (300 frames at 60 fps).
fn bench_driver_formation(c: &mut Criterion) {
    c.bench_function("driver_formation_300_frames", |b| {
        b.iter(|| {
            let mut driver = ProgressDriver::new(ScenePhase::Chaos, DriverTuning::default());
            driver.set_phase(ScenePhase::Formed);
            for _ in 0..300 {
                black_box(driver.advance(1.0 / 60.0));
            }
            driver.progress()
        });
    });
}

/// Benchmark: per-frame instanced easing + blend at several populations.
fn bench_weighted_blend(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_blend");

    for count in [ORNAMENT_COUNT, 1_000, 10_000] {
        let entities: Vec<(Vec3, Vec3, f32)> = (0..count)
            .map(|i| {
                let f = i as f32;
                (
                    Vec3::new(f * 0.01, f * 0.02, f * 0.03),
                    Vec3::new(-f * 0.01, f * 0.01, 0.0),
                    if i % 3 == 0 { 0.04 } else { 0.08 },
                )
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(count), &entities, |b, entities| {
            b.iter(|| {
                let progress = black_box(0.73_f32);
                let mut sum = Vec3::ZERO;
                for &(chaos, target, weight) in entities {
                    let local = lagged_progress(progress, weight);
                    sum = sum + chaos.lerp(target, local);
                }
                sum
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_driver_formation, bench_weighted_blend);
criterion_main!(benches);
