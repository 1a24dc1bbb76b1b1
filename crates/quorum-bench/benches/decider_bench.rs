//! Fast vs. slow decider benchmarks.
//!
//! Measures per-position decision cost for the three shapes the fast path
//! distinguishes (unanimous, two-way split, delegate) across a range of
//! quorum sizes, plus the slow path's cost once a predecessor chain forces
//! a delegation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use quorum_core::fast;
use quorum_core::node_table::NodeTable;
use quorum_core::slow;
use quorum_core::vector::Vector;

fn id(byte: u8) -> [u8; 16] {
    [byte; 16]
}

fn vector(own: u8, pred: u8) -> Vector {
    Vector {
        own_id: id(own),
        predecessor_id: id(pred),
    }
}

fn unanimous(sources_length: usize) -> Vec<Vector> {
    vec![vector(0xAA, 0x00); sources_length]
}

fn two_way_split(sources_length: usize) -> Vec<Vector> {
    (0..sources_length)
        .map(|i| if i % 2 == 0 { vector(0xAA, 0x00) } else { vector(0xBB, 0x00) })
        .collect()
}

fn repair_chain(sources_length: usize) -> Vec<Vector> {
    let mut vectors = vec![vector(0xAA, 0x00)];
    vectors.extend(std::iter::repeat(vector(0xBB, 0xAA)).take(sources_length - 1));
    vectors
}

fn bench_fast_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("fast_decide");
    for &sources_length in &[1usize, 8, 32, 255] {
        group.throughput(Throughput::Elements(sources_length as u64));

        let vectors = unanimous(sources_length);
        group.bench_with_input(
            BenchmarkId::new("unanimous", sources_length),
            &vectors,
            |b, vectors| b.iter(|| black_box(fast::decide(vectors).unwrap())),
        );

        let vectors = two_way_split(sources_length.max(2));
        group.bench_with_input(
            BenchmarkId::new("two_way_split", sources_length),
            &vectors,
            |b, vectors| b.iter(|| black_box(fast::decide(vectors).unwrap())),
        );
    }
    group.finish();
}

fn bench_slow_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("slow_decide");
    for &sources_length in &[2usize, 8, 32, 255] {
        group.throughput(Throughput::Elements(sources_length as u64));

        let vectors = repair_chain(sources_length);
        let mut nodes = NodeTable::new();
        group.bench_with_input(
            BenchmarkId::new("repair_chain", sources_length),
            &vectors,
            |b, vectors| {
                b.iter(|| black_box(slow::decide(vectors, &mut nodes).unwrap()));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_fast_path, bench_slow_path);
criterion_main!(benches);
