//! Benchmarks for the graph resolvers.
//!
//! These benchmarks measure each resolver on layered graphs of increasing
//! size, where every unit depends on a handful of units in the next layer
//! with a rotating mix of edge types.

// Benchmark code - performance of the benchmark setup is not critical
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ripple::{
    find_compile_gated_shortest_path, find_compile_impact, find_depth_map, find_shortest_path,
    find_typed_closure, DependencyGraph, EdgeType,
};

const WIDTH: u32 = 50;
const FAN_OUT: u32 = 4;

/// Generate a layered graph.
///
/// ```text
/// layer 0:  0   1   2  ... WIDTH-1
///           │ ╲ │ ╲ │
/// layer 1:  WIDTH ...
/// ```
///
/// The last layer points back at the first so that every resolver has to
/// deal with cycles.
fn layered_graph(layers: u32) -> DependencyGraph<u32> {
    let kinds = [EdgeType::Compile, EdgeType::Runtime, EdgeType::Export];
    let mut graph = DependencyGraph::new();

    for layer in 0..layers {
        let next_layer = (layer + 1) % layers;
        for i in 0..WIDTH {
            let from = layer * WIDTH + i;
            for k in 0..FAN_OUT {
                let to = next_layer * WIDTH + (i + k) % WIDTH;
                graph.add_edge(from, to, kinds[((i + k) % 3) as usize]);
            }
        }
    }

    graph
}

fn bench_resolvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolvers");

    for layers in &[10u32, 50, 200] {
        let graph = layered_graph(*layers);
        let units = u64::from(layers * WIDTH);
        group.throughput(Throughput::Elements(units));

        group.bench_with_input(BenchmarkId::new("compile_impact", units), &graph, |b, g| {
            b.iter(|| find_compile_impact(g, black_box(&0)));
        });

        group.bench_with_input(BenchmarkId::new("typed_closure", units), &graph, |b, g| {
            b.iter(|| find_typed_closure(g, black_box(&0)));
        });

        group.bench_with_input(BenchmarkId::new("depth_map", units), &graph, |b, g| {
            b.iter(|| find_depth_map(g, black_box(&0)));
        });

        let target = layers * WIDTH - 1;
        group.bench_with_input(BenchmarkId::new("shortest_path", units), &graph, |b, g| {
            b.iter(|| find_shortest_path(g, black_box(&0), black_box(&target)));
        });

        group.bench_with_input(
            BenchmarkId::new("compile_gated_shortest_path", units),
            &graph,
            |b, g| {
                b.iter(|| find_compile_gated_shortest_path(g, black_box(&0), black_box(&target)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_resolvers);
criterion_main!(benches);
