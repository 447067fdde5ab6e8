use apq_dijkstra::data_structures::{AdaptablePriorityQueue, BinaryHeapApq, PriorityQueue, UnsortedListApq};
use apq_dijkstra::graph::generators::{weighted_grid_with_rng, GridVertex};
use apq_dijkstra::{Dijkstra, QueueKind, UndirectedGraph};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn grid(size: usize) -> UndirectedGraph<GridVertex, f64> {
    let mut rng = StdRng::seed_from_u64(size as u64);
    weighted_grid_with_rng(size, size, &mut rng)
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_grid");

    for size in [20, 60, 100].iter() {
        let graph = grid(*size);
        let target = (size / 2, size / 2);
        for queue in QueueKind::ALL {
            let dijkstra = Dijkstra::new().with_queue(queue);
            group.bench_with_input(BenchmarkId::new(queue.name(), size), &graph, |b, graph| {
                b.iter(|| dijkstra.run(black_box(graph), (0, 0), target).unwrap())
            });
        }
    }

    group.finish();
}

fn bench_early_stop(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_early_stop");
    let graph = grid(100);

    for queue in QueueKind::ALL {
        let dijkstra = Dijkstra::new().with_queue(queue).with_early_stop(true);
        group.bench_function(queue.name(), |b| {
            b.iter(|| dijkstra.run(black_box(&graph), (0, 0), (50, 50)).unwrap())
        });
    }

    group.finish();
}

fn bench_update_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("apq_update_then_drain");
    let mut rng = StdRng::seed_from_u64(42);
    let keys: Vec<u32> = (0..2_000).map(|_| rng.gen_range(0..1_000_000)).collect();

    group.bench_function("binary-heap", |b| {
        b.iter(|| {
            let mut heap = BinaryHeapApq::with_capacity(keys.len());
            let handles: Vec<_> = keys.iter().map(|&k| heap.insert_with_handle(k, k)).collect();
            for (handle, &k) in handles.iter().zip(&keys) {
                heap.update_key(*handle, k / 2).unwrap();
            }
            while let Some(v) = heap.extract_min() {
                black_box(v);
            }
        })
    });

    group.bench_function("unsorted-list", |b| {
        b.iter(|| {
            let mut list = UnsortedListApq::with_capacity(keys.len());
            let handles: Vec<_> = keys.iter().map(|&k| list.insert_with_handle(k, k)).collect();
            for (handle, &k) in handles.iter().zip(&keys) {
                list.update_key(*handle, k / 2).unwrap();
            }
            while let Some(v) = list.extract_min() {
                black_box(v);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_dijkstra, bench_early_stop, bench_update_key);
criterion_main!(benches);
