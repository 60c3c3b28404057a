//! Criterion micro-benchmarks for sequence arena append, extend, and reset.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use seqarena::SeqArena;
use seqarena_bench::{path_workload, sequence_lengths};

/// Benchmark: 10K short `append_new` calls into a pre-sized arena.
fn bench_append_new_10k(c: &mut Criterion) {
    let lengths = sequence_lengths(10_000, 8, 42);
    let values: Vec<i64> = (0..8).collect();
    let mut arena = SeqArena::new(64 * 1024);

    c.bench_function("append_new_10k", |b| {
        b.iter(|| {
            arena.reset();
            for &len in &lengths {
                black_box(arena.append_new(&values[..len]).unwrap());
            }
        });
    });
}

/// Benchmark: path workload where every extension hits the tail path.
fn bench_tail_extend_10k(c: &mut Criterion) {
    let lengths = sequence_lengths(10_000, 8, 42);
    let mut arena = SeqArena::new(128 * 1024);

    c.bench_function("tail_extend_10k", |b| {
        b.iter(|| {
            arena.reset();
            black_box(path_workload(&mut arena, &lengths, 1).unwrap());
        });
    });
}

/// Benchmark: path workload where every extension copies.
fn bench_copy_extend_10k(c: &mut Criterion) {
    let lengths = sequence_lengths(10_000, 8, 42);
    let mut arena = SeqArena::new(256 * 1024);

    c.bench_function("copy_extend_10k", |b| {
        b.iter(|| {
            arena.reset();
            black_box(path_workload(&mut arena, &lengths, 2).unwrap());
        });
    });
}

/// Benchmark: growth from the floor plus the shrinking reset that follows.
fn bench_grow_and_reset(c: &mut Criterion) {
    let lengths = sequence_lengths(10_000, 8, 42);
    let mut arena = SeqArena::new(0);

    c.bench_function("grow_and_reset", |b| {
        b.iter(|| {
            black_box(path_workload(&mut arena, &lengths, 1).unwrap());
            arena.reset();
        });
    });
}

/// Baseline: the same workload with one `Vec` per sequence.
fn bench_vec_per_sequence_10k(c: &mut Criterion) {
    let lengths = sequence_lengths(10_000, 8, 42);

    c.bench_function("vec_per_sequence_10k", |b| {
        b.iter(|| {
            let mut seqs: Vec<Vec<i64>> = Vec::with_capacity(lengths.len());
            for (step, &len) in lengths.iter().enumerate() {
                let values = (0..len as i64).map(|v| v + step as i64);
                if step % 2 == 1 {
                    let mut extended = seqs[step - 1].clone();
                    extended.extend(values);
                    seqs.push(extended);
                } else {
                    seqs.push(values.collect());
                }
            }
            black_box(seqs.len());
        });
    });
}

criterion_group!(
    benches,
    bench_append_new_10k,
    bench_tail_extend_10k,
    bench_copy_extend_10k,
    bench_grow_and_reset,
    bench_vec_per_sequence_10k
);
criterion_main!(benches);
