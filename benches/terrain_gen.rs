//! Benchmarks for terrain generation.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use faultline::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn unit_domain() -> Domain {
    Domain::new(-1.0, 1.0, -1.0, 1.0)
}

fn bench_grid_construction(c: &mut Criterion) {
    c.bench_function("build_grid_64", |b| {
        b.iter(|| {
            let mesh: TerrainMesh = build_grid(64, unit_domain()).unwrap();
            mesh
        })
    });

    c.bench_function("build_grid_256", |b| {
        b.iter(|| {
            let mesh: TerrainMesh = build_grid(256, unit_domain()).unwrap();
            mesh
        })
    });
}

fn bench_fault_sculpt(c: &mut Criterion) {
    let base: TerrainMesh = build_grid(128, unit_domain()).unwrap();

    c.bench_function("fault_sculpt_128", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter_batched(
            || base.clone(),
            |mut mesh| fault_sculpt(&mut mesh, &FaultOptions::default(), &mut rng),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("fault_sculpt_128_sequential", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        let options = FaultOptions::default().sequential();
        b.iter_batched(
            || base.clone(),
            |mut mesh| fault_sculpt(&mut mesh, &options, &mut rng),
            BatchSize::LargeInput,
        )
    });
}

fn bench_normal_estimation(c: &mut Criterion) {
    let mut sculpted: TerrainMesh = build_grid(128, unit_domain()).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    fault_sculpt(&mut sculpted, &FaultOptions::default(), &mut rng);

    c.bench_function("compute_normals_128", |b| {
        b.iter_batched(
            || sculpted.clone(),
            |mut mesh| compute_normals(&mut mesh),
            BatchSize::LargeInput,
        )
    });
}

fn bench_full_generate(c: &mut Criterion) {
    c.bench_function("generate_90", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| {
            let mesh: TerrainMesh = generate(
                90,
                Domain::new(-50.0, 50.0, -50.0, 50.0),
                &FaultOptions::default(),
                &mut rng,
            )
            .unwrap();
            mesh
        })
    });
}

criterion_group!(
    benches,
    bench_grid_construction,
    bench_fault_sculpt,
    bench_normal_estimation,
    bench_full_generate
);
criterion_main!(benches);
