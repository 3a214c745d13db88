//! Benchmarks for the crossword interlock engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use crossgen::{Direction, Layout, Placement, Solver};

const NAMES: [&str; 4] = ["FRANK", "KRISTEN", "ZACH", "ALEXIS"];

/// Benchmark a complete four-word run, all 24 permutations.
fn bench_solve(c: &mut Criterion) {
    c.bench_function("solve_four_names", |b| {
        let solver = Solver::new();
        b.iter(|| solver.solve(black_box(&NAMES)).unwrap())
    });
}

/// Benchmark a three-word run with heavy letter sharing.
fn bench_solve_dense(c: &mut Criterion) {
    let words = ["CAT", "ACT", "TACK"];
    c.bench_function("solve_dense_three", |b| {
        let solver = Solver::new();
        b.iter(|| solver.solve(black_box(&words)).unwrap())
    });
}

/// Benchmark intersection candidate generation against a two-word layout.
fn bench_intersection_candidates(c: &mut Criterion) {
    let layout = Layout::seeded(Placement::new("KRISTEN", 0, 0, Direction::Horizontal))
        .with(Placement::new("FRANK", 1, -1, Direction::Vertical));

    c.bench_function("intersection_candidates", |b| {
        b.iter(|| layout.intersection_candidates(black_box("ALEXIS")))
    });
}

/// Benchmark canonical keying of a layout.
fn bench_canonical_key(c: &mut Criterion) {
    let solver = Solver::new();
    let report = solver.solve(&NAMES).unwrap();
    let layout = &report.solutions.as_slice()[0];

    c.bench_function("canonical_key", |b| {
        b.iter(|| black_box(layout).canonical_key())
    });
}

/// Benchmark rendering a layout to a character grid.
fn bench_render(c: &mut Criterion) {
    let solver = Solver::new();
    let report = solver.solve(&NAMES).unwrap();
    let layout = &report.solutions.as_slice()[0];

    c.bench_function("render", |b| b.iter(|| black_box(layout).render()));
}

criterion_group!(
    benches,
    bench_solve,
    bench_solve_dense,
    bench_intersection_candidates,
    bench_canonical_key,
    bench_render
);
criterion_main!(benches);
