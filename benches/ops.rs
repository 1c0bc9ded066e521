//! Micro-operation benchmarks for the random-access map.
//!
//! Run with: `cargo bench --bench ops`
//!
//! Measures per-operation latency (nanoseconds) for put, get, delete, and
//! random retrieval, including a stale-heavy retrieval workload.

use std::hint::black_box;
use std::time::Instant;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rotamap::map::RandomAccessMap;
use rotamap::rng::XorShift64;

const CAPACITY: usize = 16_384;
const OPS: u64 = 100_000;

fn filled_map(seed: u64) -> RandomAccessMap<u64, u64, XorShift64> {
    let mut map = RandomAccessMap::new(CAPACITY, XorShift64::new(seed)).unwrap();
    for i in 0..CAPACITY as u64 {
        map.put(i, i).unwrap();
    }
    map
}

// ============================================================================
// Get Hit Latency (ns/op)
// ============================================================================

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_hit_ns");
    group.throughput(Throughput::Elements(OPS));

    group.bench_function("get", |b| {
        b.iter_custom(|iters| {
            let map = filled_map(1);
            let start = Instant::now();
            for _ in 0..iters {
                for i in 0..OPS {
                    let key = i % (CAPACITY as u64);
                    black_box(map.get(&key).ok());
                }
            }
            start.elapsed()
        })
    });

    group.finish();
}

// ============================================================================
// Put Latency (ns/op)
// ============================================================================

fn bench_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_ns");
    group.throughput(Throughput::Elements(CAPACITY as u64));

    group.bench_function("put", |b| {
        b.iter_custom(|iters| {
            let mut total = std::time::Duration::ZERO;
            for _ in 0..iters {
                let mut map = RandomAccessMap::new(CAPACITY, XorShift64::new(2)).unwrap();
                let start = Instant::now();
                for i in 0..CAPACITY as u64 {
                    map.put(i, i).unwrap();
                }
                total += start.elapsed();
                black_box(&map);
            }
            total
        })
    });

    group.finish();
}

// ============================================================================
// Delete Latency (ns/op)
// ============================================================================

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_ns");
    group.throughput(Throughput::Elements(CAPACITY as u64));

    // Keys deleted in shuffled order so the hash table sees no sequential
    // sweep pattern.
    group.bench_function("delete", |b| {
        b.iter_custom(|iters| {
            let mut order: Vec<u64> = (0..CAPACITY as u64).collect();
            order.shuffle(&mut SmallRng::seed_from_u64(42));

            let mut total = std::time::Duration::ZERO;
            for _ in 0..iters {
                let mut map = filled_map(3);
                let start = Instant::now();
                for key in &order {
                    black_box(map.delete(key));
                }
                total += start.elapsed();
            }
            total
        })
    });

    group.finish();
}

// ============================================================================
// Random Retrieval (ns/op)
// ============================================================================

fn bench_get_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_random_ns");
    group.throughput(Throughput::Elements(OPS));

    // All entries live: pure rotation.
    group.bench_function("live_ring", |b| {
        b.iter_custom(|iters| {
            let mut map = filled_map(4);
            let start = Instant::now();
            for _ in 0..iters {
                for _ in 0..OPS {
                    black_box(map.get_random().ok());
                }
            }
            start.elapsed()
        })
    });

    // Half the ring stale: measures tombstone discard plus fallback picks.
    group.bench_function("stale_heavy", |b| {
        b.iter_custom(|iters| {
            let mut deleted: Vec<u64> = (0..CAPACITY as u64).collect();
            deleted.shuffle(&mut SmallRng::seed_from_u64(7));
            deleted.truncate(CAPACITY / 2);

            let mut total = std::time::Duration::ZERO;
            for _ in 0..iters {
                let mut map = filled_map(5);
                for key in &deleted {
                    map.delete(key);
                }
                let start = Instant::now();
                for _ in 0..OPS {
                    black_box(map.get_random().ok());
                }
                total += start.elapsed();
            }
            total
        })
    });

    group.finish();
}

// ============================================================================
// Mixed Workload (put + get + delete + get_random)
// ============================================================================

fn bench_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_ops_ns");
    group.throughput(Throughput::Elements(OPS));

    // 60% random retrieval, 20% get, 10% put of fresh keys, 10% delete.
    group.bench_function("mixed", |b| {
        b.iter_custom(|iters| {
            let mut total = std::time::Duration::ZERO;
            for _ in 0..iters {
                let mut map = filled_map(6);
                let mut next_key = CAPACITY as u64;
                let start = Instant::now();
                for i in 0..OPS {
                    match i % 10 {
                        0 => {
                            map.put(next_key, next_key).unwrap();
                            next_key += 1;
                        },
                        1 => {
                            black_box(map.delete(&(i % next_key)));
                        },
                        2 | 3 => {
                            black_box(map.get(&(i % next_key)).ok());
                        },
                        _ => {
                            black_box(map.get_random().ok());
                        },
                    }
                }
                total += start.elapsed();
            }
            total
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_get_hit,
    bench_put,
    bench_delete,
    bench_get_random,
    bench_mixed
);
criterion_main!(benches);
