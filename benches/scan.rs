//! Benchmarks for automaton construction and scanning.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use libaho::aho::build_automaton;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TEXT: &str = "bababbaabb";

/// Seeded random text over a small alphabet, identical on every run.
fn random_text(len: usize, alphabet: &[char]) -> String {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}

fn word_patterns(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("w{i:04}x")).collect()
}

fn bench_build_small(c: &mut Criterion) {
    c.bench_function("build_small", |b| {
        b.iter(|| build_automaton(black_box(["ab", "babb", "bb"])))
    });
}

fn bench_build_many(c: &mut Criterion) {
    let patterns = word_patterns(10_000);
    c.bench_function("build_10k_patterns", |b| {
        b.iter(|| build_automaton(black_box(&patterns)))
    });
}

fn bench_scan_small(c: &mut Criterion) {
    let ac = build_automaton(["ab", "babb", "bb"]);
    c.bench_function("scan_small", |b| b.iter(|| ac.scan(black_box(TEXT).chars())));
}

fn bench_scan_dense(c: &mut Criterion) {
    // Many overlapping matches over a two-symbol alphabet.
    let ac = build_automaton(["a", "ab", "aab", "abab", "bbb", "babb"]);
    let text = random_text(100_000, &['a', 'b']);
    c.bench_function("scan_dense_100k", |b| {
        b.iter(|| ac.count_matches(black_box(text.as_str()).chars()))
    });
}

fn bench_scan_sparse(c: &mut Criterion) {
    let patterns = word_patterns(1_000);
    let ac = build_automaton(&patterns);
    let text = random_text(100_000, &['w', '0', '1', '2', 'x', ' ']);
    c.bench_function("scan_sparse_100k", |b| {
        b.iter(|| ac.find_iter(black_box(text.as_str()).chars()).count())
    });
}

criterion_group!(
    benches,
    bench_build_small,
    bench_build_many,
    bench_scan_small,
    bench_scan_dense,
    bench_scan_sparse
);
criterion_main!(benches);
