use cartograph::AdaptablePriorityQueue;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

const N: u64 = 1000;

fn scrambled(i: u64) -> u64 {
    i.wrapping_mul(2_654_435_761) % 100_003
}

fn bench_priority_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("priority_queue");

    group.bench_function("std_binary_heap_push_pop", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in 0..N {
                heap.push(Reverse(scrambled(i)));
            }
            while let Some(x) = heap.pop() {
                black_box(x);
            }
        });
    });

    group.bench_function("adaptable_insert_remove_min", |b| {
        b.iter(|| {
            let mut pq: AdaptablePriorityQueue<u64, u64> = AdaptablePriorityQueue::with_capacity(N as usize);
            for i in 0..N {
                black_box(pq.insert(scrambled(i), i).ok());
            }
            while let Some(x) = pq.remove_min() {
                black_box(x);
            }
        });
    });

    group.bench_function("adaptable_from_entries", |b| {
        b.iter(|| {
            let pq: Result<AdaptablePriorityQueue<u64, u64>, _> =
                AdaptablePriorityQueue::from_entries((0..N).map(|i| (scrambled(i), i)));
            black_box(pq.map(|q| q.len()).ok());
        });
    });

    // Decrease-key workload, the pattern Dijkstra relies on.
    group.bench_function("adaptable_replace_key", |b| {
        b.iter(|| {
            let mut pq: AdaptablePriorityQueue<u64, u64> = AdaptablePriorityQueue::with_capacity(N as usize);
            let locators: Vec<_> = (0..N).filter_map(|i| pq.insert(u64::MAX - i, i).ok()).collect();
            for (i, &loc) in locators.iter().enumerate() {
                black_box(pq.replace_key(loc, scrambled(i as u64)).ok());
            }
            while let Some(x) = pq.remove_min() {
                black_box(x);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_priority_queue);
criterion_main!(benches);
