//! Benchmarks for graph mutation and shortest-path queries.
//!
//! Measures:
//! - Structural mutation (add node, connect, remove node)
//! - BFS path queries on unit-weight graphs
//! - Dijkstra path queries on weighted graphs
//! - Memoized repeat queries and `copy()`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ugraph_core::{Graph, GraphAlgorithms, Node, NodeKey};

const SIZES: [u64; 3] = [1_000, 10_000, 50_000];
const EXTRA_EDGES_PER_NODE: u64 = 4;

/// Linear congruential step, enough to scatter edges without a rand dependency.
fn lcg(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add(1_442_695_040_888_963_407);
    *state >> 33
}

/// Spanning path plus pseudo-random chords, so every query has an answer.
#[allow(clippy::cast_precision_loss)] // values below 16
fn build_graph(nodes: u64, weighted: bool) -> Graph {
    let edges = usize::try_from(nodes * (EXTRA_EDGES_PER_NODE + 1)).unwrap_or(0);
    let mut graph = Graph::with_capacity(usize::try_from(nodes).unwrap_or(0), edges);
    for key in 0..nodes {
        graph.add_node(Node::new(key));
    }
    for key in 1..nodes {
        graph.connect(key - 1, key);
    }
    let mut state = 0x5eed_u64;
    for _ in 0..nodes * EXTRA_EDGES_PER_NODE {
        let u = lcg(&mut state) % nodes;
        let v = lcg(&mut state) % nodes;
        if weighted {
            let weight = 0.5 + (lcg(&mut state) % 16) as f64 * 0.25;
            graph.connect_weighted(u, v, weight);
        } else {
            graph.connect(u, v);
        }
    }
    graph
}

fn bench_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_mutation");
    for &size in &SIZES {
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("build", size), &size, |b, &size| {
            b.iter(|| black_box(build_graph(size, false)));
        });
    }
    group.finish();

    let base = build_graph(10_000, false);
    c.bench_function("graph_remove_node_10k", |b| {
        b.iter_batched(
            || GraphAlgorithms::new(&base).copy(),
            |mut graph| {
                for key in (0..10_000).step_by(97) {
                    black_box(graph.remove_node(key));
                }
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

fn bench_bfs_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path_bfs");
    for &size in &SIZES {
        let graph = build_graph(size, false);
        let dest: NodeKey = size - 1;
        group.bench_with_input(BenchmarkId::new("cold", size), &graph, |b, graph| {
            b.iter(|| {
                let mut algo = GraphAlgorithms::new(graph);
                black_box(algo.shortest_path_dist(0, dest))
            });
        });
    }
    group.finish();
}

fn bench_dijkstra_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path_dijkstra");
    for &size in &SIZES {
        let graph = build_graph(size, true);
        let dest: NodeKey = size - 1;
        group.bench_with_input(BenchmarkId::new("cold", size), &graph, |b, graph| {
            b.iter(|| {
                let mut algo = GraphAlgorithms::new(graph);
                black_box(algo.shortest_path(0, dest))
            });
        });
    }
    group.finish();
}

fn bench_memoized_and_copy(c: &mut Criterion) {
    let graph = build_graph(10_000, true);
    let mut algo = GraphAlgorithms::new(&graph);
    algo.shortest_path(0, 1);

    c.bench_function("shortest_path_memoized_10k", |b| {
        let mut dest = 0;
        b.iter(|| {
            dest = (dest + 7) % 10_000;
            black_box(algo.shortest_path(0, dest))
        });
    });

    c.bench_function("graph_copy_10k", |b| {
        b.iter(|| black_box(algo.copy()));
    });
}

criterion_group!(
    benches,
    bench_mutation,
    bench_bfs_path,
    bench_dijkstra_path,
    bench_memoized_and_copy
);
criterion_main!(benches);
