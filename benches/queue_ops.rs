//! Criterion benchmarks for core queue operations
//!
//! Covers enqueue-only, enqueue-then-drain, and a mixed workload at several
//! queue sizes. Keys come from a seeded LCG so runs are reproducible without
//! pulling in an RNG dependency.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use minqueue::MinQueue;

// ============================================================================
// Simple PRNG for reproducible benchmarks
// ============================================================================

/// Linear congruential generator for reproducible random numbers
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }
}

const SIZES: [usize; 3] = [1 << 8, 1 << 12, 1 << 16];

fn random_keys(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = Lcg::new(seed);
    (0..count).map(|_| rng.next()).collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_enqueue(c: &mut Criterion) {
    let mut group = c.benchmark_group("enqueue");
    for size in SIZES {
        let keys = random_keys(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter(|| {
                let mut queue = MinQueue::with_capacity(keys.len());
                for &key in keys {
                    queue.enqueue(key, key);
                }
                black_box(queue.len())
            })
        });
    }
    group.finish();
}

fn bench_enqueue_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("enqueue_drain");
    for size in SIZES {
        let keys = random_keys(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter(|| {
                let mut queue = MinQueue::with_capacity(keys.len());
                for &key in keys {
                    queue.enqueue(key, key);
                }
                let mut last = 0;
                while let Some((key, _)) = queue.try_dequeue() {
                    last = key;
                }
                black_box(last)
            })
        });
    }
    group.finish();
}

fn bench_mixed_workload(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_ops");
    for size in SIZES {
        // One element is a round of two enqueues and one dequeue
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut rng = Lcg::new(12345);
                let mut queue = MinQueue::new();
                for _ in 0..64 {
                    queue.enqueue(rng.next(), 0u64);
                }
                for _ in 0..size {
                    queue.enqueue(rng.next(), 0u64);
                    queue.enqueue(rng.next(), 0u64);
                    black_box(queue.dequeue());
                }
                black_box(queue.len())
            })
        });
    }
    group.finish();
}

fn bench_peek(c: &mut Criterion) {
    let mut group = c.benchmark_group("peek");
    for size in SIZES {
        let keys = random_keys(size, 42);
        let queue: MinQueue<u64, u64> = keys.iter().map(|&key| (key, key)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &queue, |b, queue| {
            b.iter(|| black_box(queue.peek()))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_enqueue,
    bench_enqueue_drain,
    bench_mixed_workload,
    bench_peek,
);

criterion_main!(benches);
