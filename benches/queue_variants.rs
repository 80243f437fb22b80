use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use trailblazer::{
    BinaryHeapQueue, BucketQueue, LinkedQueue, PriorityQueue, SortedArrayQueue,
    UnsortedArrayQueue,
};

/// Enqueue `n` random entries, lower a third of them, then drain the queue
fn workload<Q: PriorityQueue<u32, u32>>(pairs: &[(u32, u32)]) -> u64 {
    let mut queue = Q::default();
    for &(value, priority) in pairs {
        let _ = queue.enqueue(value, priority);
    }
    for &(value, priority) in pairs.iter().step_by(3) {
        let _ = queue.change_priority(&value, priority / 2);
    }
    let mut checksum = 0u64;
    while let Ok(value) = queue.dequeue() {
        checksum = checksum.wrapping_mul(31).wrapping_add(value as u64);
    }
    checksum
}

fn bench_queue_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_variants");
    for &n in &[100usize, 1_000] {
        let mut rng = StdRng::seed_from_u64(n as u64);
        let pairs: Vec<(u32, u32)> = (0..n as u32).map(|v| (v, rng.gen_range(0..1000))).collect();

        group.bench_with_input(BenchmarkId::new("unsorted_array", n), &pairs, |b, p| {
            b.iter(|| workload::<UnsortedArrayQueue<u32, u32>>(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("sorted_array", n), &pairs, |b, p| {
            b.iter(|| workload::<SortedArrayQueue<u32, u32>>(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("bucket_map", n), &pairs, |b, p| {
            b.iter(|| workload::<BucketQueue<u32, u32>>(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("linked_list", n), &pairs, |b, p| {
            b.iter(|| workload::<LinkedQueue<u32, u32>>(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("binary_heap", n), &pairs, |b, p| {
            b.iter(|| workload::<BinaryHeapQueue<u32, u32>>(black_box(p)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_queue_variants);
criterion_main!(benches);
