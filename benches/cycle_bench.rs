use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tilt_cycle::platform::{tilt, Cell, Direction, Grid};
use tilt_cycle::simulation::{north_load, spin_cycle, state_after};
use tilt_cycle::SimulationConfig;

/// Deterministic 100x100 platform with a mix of rolling and fixed rocks
fn platform(size: usize) -> Grid {
    let rows = (0..size)
        .map(|r| {
            (0..size)
                .map(|c| match (r * 31 + c * 17 + r * c) % 11 {
                    0 | 5 => Cell::Fixed,
                    1 | 3 | 8 => Cell::Movable,
                    _ => Cell::Empty,
                })
                .collect()
        })
        .collect();
    Grid::from_rows(rows).expect("generated platform is rectangular")
}

// ============================================================================
// Tilting
// ============================================================================

fn bench_tilt(c: &mut Criterion) {
    let grid = platform(100);

    c.bench_function("tilt_north_100x100", |b| {
        b.iter(|| black_box(tilt(black_box(&grid), Direction::North)))
    });

    c.bench_function("tilt_west_100x100", |b| {
        b.iter(|| black_box(tilt(black_box(&grid), Direction::West)))
    });
}

fn bench_spin_cycle(c: &mut Criterion) {
    let grid = platform(100);

    c.bench_function("spin_cycle_100x100", |b| {
        b.iter(|| black_box(spin_cycle(black_box(&grid))))
    });
}

// ============================================================================
// Accelerated run
// ============================================================================

fn bench_billion_cycles(c: &mut Criterion) {
    let grid = platform(100);
    let config = SimulationConfig::default();

    let mut group = c.benchmark_group("accelerator");
    group.sample_size(10);
    group.bench_function("billion_cycles_100x100", |b| {
        b.iter(|| {
            let result = state_after(black_box(&grid), 1_000_000_000, &config)
                .expect("finite platform always repeats");
            black_box(north_load(&result))
        })
    });
    group.finish();
}

criterion_group!(benches, bench_tilt, bench_spin_cycle, bench_billion_cycles);
criterion_main!(benches);
