//! Criterion micro-benchmarks for circular sequence operations.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use whorl_bench::{profile_cycle, step_schedule, BenchProfile};

/// Benchmark: 1K single-step rightward rotations on a 10K-element cycle.
fn bench_rotate_right_steps(c: &mut Criterion) {
    let profile = BenchProfile::reference();
    let cycle = profile_cycle(&profile).unwrap();

    c.bench_function("rotate_right_1k_steps_10k", |b| {
        b.iter(|| {
            let mut current = cycle.clone();
            for _ in 0..profile.ops {
                current = current.rotate_right();
            }
            black_box(current.focus());
        });
    });
}

/// Benchmark: alternating left/right steps, which repeatedly crosses the
/// rebalance threshold near a freshly built cycle.
fn bench_rotate_zigzag(c: &mut Criterion) {
    let profile = BenchProfile::reference();
    let cycle = profile_cycle(&profile).unwrap();

    c.bench_function("rotate_zigzag_1k_10k", |b| {
        b.iter(|| {
            let mut current = cycle.clone();
            for i in 0..profile.ops {
                current = if i % 2 == 0 {
                    current.rotate_left()
                } else {
                    current.rotate_right()
                };
            }
            black_box(current.focus());
        });
    });
}

/// Benchmark: per-step cost of long walks on the reference and stress
/// cycles. Throughput is per step, so the two sizes should report about
/// the same rate in each direction.
fn bench_rotate_step_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotate_step_scaling");
    for profile in [BenchProfile::reference(), BenchProfile::stress()] {
        let cycle = profile_cycle(&profile).unwrap();
        group.throughput(Throughput::Elements(profile.ops as u64));

        group.bench_with_input(BenchmarkId::new("right", profile.len), &cycle, |b, cycle| {
            b.iter(|| {
                let mut current = cycle.clone();
                for _ in 0..profile.ops {
                    current = current.rotate_right();
                }
                black_box(current.focus());
            });
        });

        group.bench_with_input(BenchmarkId::new("left", profile.len), &cycle, |b, cycle| {
            b.iter(|| {
                let mut current = cycle.clone();
                for _ in 0..profile.ops {
                    current = current.rotate_left();
                }
                black_box(current.focus());
            });
        });
    }
    group.finish();
}

/// Benchmark: 1K seeded multi-step jumps on a 10K-element cycle.
fn bench_rotate_right_by(c: &mut Criterion) {
    let profile = BenchProfile::reference();
    let cycle = profile_cycle(&profile).unwrap();
    let schedule = step_schedule(&profile);

    c.bench_function("rotate_right_by_1k_jumps_10k", |b| {
        b.iter(|| {
            let mut current = cycle.clone();
            for &k in &schedule {
                current = current.rotate_right_by(k).unwrap();
            }
            black_box(current.focus());
        });
    });
}

/// Benchmark: seeded jumps on a 1M-element cycle.
fn bench_rotate_right_by_stress(c: &mut Criterion) {
    let profile = BenchProfile::stress();
    let cycle = profile_cycle(&profile).unwrap();
    let schedule = step_schedule(&profile);

    c.bench_function("rotate_right_by_10k_jumps_1m", |b| {
        b.iter(|| {
            let mut current = cycle.clone();
            for &k in &schedule {
                current = current.rotate_right_by(k).unwrap();
            }
            black_box(current.focus());
        });
    });
}

/// Benchmark: search for the element furthest from the focus.
fn bench_find_rotate_to(c: &mut Criterion) {
    let profile = BenchProfile {
        len: 1_000,
        ..BenchProfile::reference()
    };
    let cycle = profile_cycle(&profile).unwrap();
    let target = profile.len as u64 - 1;

    c.bench_function("rotate_to_worst_case_1k", |b| {
        b.iter(|| black_box(cycle.rotate_to(&target)));
    });
}

/// Benchmark: direction reversal of a 10K-element cycle.
fn bench_reverse_direction(c: &mut Criterion) {
    let profile = BenchProfile::reference();
    let cycle = profile_cycle(&profile).unwrap();

    c.bench_function("reverse_direction_10k", |b| {
        b.iter(|| black_box(cycle.reverse_direction()));
    });
}

criterion_group!(
    benches,
    bench_rotate_right_steps,
    bench_rotate_zigzag,
    bench_rotate_step_scaling,
    bench_rotate_right_by,
    bench_rotate_right_by_stress,
    bench_find_rotate_to,
    bench_reverse_direction
);
criterion_main!(benches);
