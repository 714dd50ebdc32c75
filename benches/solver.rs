//! Benchmarks for the tetromino fitter.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tetrofit::grid::starting_edge;
use tetrofit::{parse, solver};

/// Eight pieces that fit a 6x6 board.
const MIXED: &str = "\
#...\n#...\n#...\n#...\n\n\
....\n....\n####\n....\n\n\
#...\n###.\n....\n....\n\n\
....\n##..\n.##.\n....\n\n\
....\n.##.\n.##.\n....\n\n\
...#\n..##\n...#\n....\n\n\
....\n..##\n.##.\n....\n\n\
....\n.###\n.#..\n....\n";

/// Benchmark parsing and validating the mixed input.
fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_mixed", |b| b.iter(|| parse(black_box(MIXED))));
}

/// Benchmark the full grow-the-board search.
fn bench_solve(c: &mut Criterion) {
    let pieces = parse(MIXED).expect("benchmark input is valid");

    c.bench_function("solve_mixed", |b| b.iter(|| solver::solve(black_box(&pieces))));
}

/// Benchmark an exhausted search one size below the solution.
fn bench_failed_attempt(c: &mut Criterion) {
    let pieces = parse(MIXED).expect("benchmark input is valid");
    let edge = starting_edge(pieces.len()) - 1;

    let mut group = c.benchmark_group("attempt");
    group.sample_size(10);
    group.bench_function("below_starting_edge", |b| {
        b.iter(|| solver::solve_at(black_box(edge), black_box(&pieces)))
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_solve, bench_failed_attempt);
criterion_main!(benches);
