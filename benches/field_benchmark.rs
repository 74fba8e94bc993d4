/*
 * Particle Field Benchmark
 *
 * Measures one frame of the field (movement, reflection and the O(n^2)
 * proximity line pass) for a few viewport sizes, up to the 80 point cap.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use particle_field::{FieldParams, ParticleField, RecordingSurface};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

// Benchmark a full frame at different viewport sizes
fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    for (width, height) in [(640.0, 480.0), (1280.0, 720.0), (1920.0, 1080.0)] {
        let mut field = ParticleField::new(
            width,
            height,
            FieldParams::default(),
            &mut StdRng::seed_from_u64(1),
        )
        .expect("default params are valid");
        let id = format!("{}x{}-{}pts", width, height, field.points().len());
        let mut surface = RecordingSurface::new();

        group.bench_function(BenchmarkId::from_parameter(id), |b| {
            b.iter(|| {
                surface.reset();
                black_box(field.frame(&mut surface));
            });
        });
    }

    group.finish();
}

// Benchmark seeding a full batch of points
fn bench_reseed(c: &mut Criterion) {
    let mut field = ParticleField::new(1920.0, 1080.0, FieldParams::default(), &mut StdRng::seed_from_u64(2))
        .expect("default params are valid");
    let mut rng = StdRng::seed_from_u64(3);

    c.bench_function("reseed_80", |b| {
        b.iter(|| {
            field.reseed(&mut rng);
            black_box(field.points().len());
        });
    });
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_frame, bench_reseed
}

criterion_main!(benches);
