//! Gauss-Jordan reduction and the bounded minimal-sum search on generated
//! machine joltage systems.
use std::hint::black_box;

use aoc25_bench::{SizeTier, generate_machine};
use aoc25_core::{SolverConfig, parametrize, reduce, solve_min_sum};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const TIERS: [SizeTier; 3] = [SizeTier::Small, SizeTier::Medium, SizeTier::Large];

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("linalg_reduce");

    for tier in TIERS {
        let (matrix, _) = generate_machine(tier.machine_shape(), 42);
        group.bench_function(BenchmarkId::new("rref", tier.label()), |b| {
            b.iter(|| black_box(reduce(&matrix)));
        });

        let config = SolverConfig::default();
        if let Ok(rref) = reduce(&matrix) {
            group.bench_function(BenchmarkId::new("parametrize", tier.label()), |b| {
                b.iter(|| black_box(parametrize(&rref, &config)));
            });
        }
    }

    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("linalg_solve_min_sum");
    group.sample_size(20);

    let config = SolverConfig::default();
    for tier in TIERS {
        let machines: Vec<_> = (0..8)
            .map(|seed| generate_machine(tier.machine_shape(), seed).0)
            .collect();
        group.bench_function(BenchmarkId::new("machines", tier.label()), |b| {
            b.iter(|| {
                for m in &machines {
                    // Oversized search spaces are part of the workload.
                    black_box(solve_min_sum(m, &config).ok());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reduce, bench_solve);
criterion_main!(benches);
