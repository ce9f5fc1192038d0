use criterion::{criterion_group, criterion_main, Criterion};
use boggle_solver::{Board, Solver, Wordlist};
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;

const WORDFILE: &str = "wordlists/words.txt";
const TEST_BOARD: &str = "catdwofoirdgnoas";

fn bench_solve(c: &mut Criterion, name: &str, solver: &Solver, input: &str) {
    solver.configure(input).unwrap();
    c.bench_function(name, |b| b.iter(|| solver.start().unwrap()));
}

fn criterion_benchmark(c: &mut Criterion) {
    let wordlist = Arc::new(Wordlist::from_file(WORDFILE).unwrap());
    let solver = Solver::new(wordlist);
    bench_solve(c, "solver.4x4", &solver, TEST_BOARD);
}

fn random_benchmarks(c: &mut Criterion) {
    let wordlist = Arc::new(Wordlist::from_file(WORDFILE).unwrap());
    let solver = Solver::new(wordlist);
    let mut rng = StdRng::seed_from_u64(42);
    for &tiles in &solver.layouts().tile_counts() {
        let input = Board::random_input(&mut rng, tiles);
        bench_solve(c, &format!("solver.random.{}", tiles), &solver, &input);
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = criterion_benchmark
}

criterion_group! {
    name = random;
    config = Criterion::default()
        .sample_size(20);
    targets = random_benchmarks
}

criterion_main!(benches, random);
