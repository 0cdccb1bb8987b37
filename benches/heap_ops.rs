//! Benchmarks for heap insertion and root extraction
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_ops
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use navheap::Heap;
use std::hint::black_box;

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for size in [100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut heap = Heap::default();
                // Descending input keeps every sweep swap-free and valid.
                for value in (0..size).rev() {
                    heap.insert(black_box(value)).unwrap();
                }
                heap
            })
        });
    }
    group.finish();
}

fn bench_pop_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop_root");
    for size in [100, 1_000] {
        // Descending input keeps every intermediate sweep cheap and valid.
        let mut seed = Heap::default();
        for value in (0..size).rev() {
            seed.insert(value).unwrap();
        }
        group.bench_with_input(BenchmarkId::from_parameter(size), &seed, |b, seed| {
            b.iter(|| {
                let mut heap = seed.clone();
                while !heap.is_empty() {
                    let (root, result) = heap.pop_root();
                    black_box(root);
                    result.unwrap();
                }
            })
        });
    }
    group.finish();
}

fn bench_check_invariant(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_invariant");
    for size in [100, 1_000] {
        let mut heap = Heap::default();
        for value in (0..size).rev() {
            heap.insert(value).unwrap();
        }
        group.bench_with_input(BenchmarkId::from_parameter(size), &heap, |b, heap| {
            b.iter(|| heap.check_invariant().unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_pop_root, bench_check_invariant);
criterion_main!(benches);
