//! Criterion benchmarks for `OpRotateInPlace`.
//!
//! Rotation mutates its input, so each iteration rotates the same grid
//! again; after every four iterations the grid is back in its original
//! state, keeping the measured work identical across iterations.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quarter_turn::{OpRotateInPlace, RotateDirection, bench_utils};

fn bench_size_scaling_cw(c: &mut Criterion) {
    let mut group = c.benchmark_group("size_scaling_cw");
    let rotate = OpRotateInPlace::new(RotateDirection::Cw);
    for side in bench_utils::BENCH_SIDES {
        let mut grid = bench_utils::create_test_grid(side);
        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_function(BenchmarkId::from_parameter(side), |b| {
            b.iter(|| {
                rotate.apply(black_box(&mut grid));
            });
        });
    }
    group.finish();
}

fn bench_cw_vs_ccw(c: &mut Criterion) {
    let mut group = c.benchmark_group("cw_vs_ccw");
    let side = 1024_usize;
    for (label, direction) in [("cw", RotateDirection::Cw), ("ccw", RotateDirection::Ccw)] {
        let rotate = OpRotateInPlace::new(direction);
        let mut grid = bench_utils::create_test_grid(side);
        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_function(BenchmarkId::new(label, side), |b| {
            b.iter(|| {
                rotate.apply(black_box(&mut grid));
            });
        });
    }
    group.finish();
}

fn bench_half_turn(c: &mut Criterion) {
    let mut group = c.benchmark_group("half_turn");
    let mut rotate = OpRotateInPlace::new(RotateDirection::Cw);
    rotate.set_quarter_turns(2);
    for side in bench_utils::BENCH_SIDES {
        let mut grid = bench_utils::create_test_grid(side);
        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_function(BenchmarkId::from_parameter(side), |b| {
            b.iter(|| {
                rotate.apply(black_box(&mut grid));
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_size_scaling_cw,
    bench_cw_vs_ccw,
    bench_half_turn
);
criterion_main!(benches);
