//! Benchmarks for the edge connectivity algorithms
//!
//! Measures:
//! - Both algorithms on graph families with known edge connectivity
//! - Both algorithms on random multigraphs of growing size
//! - Sequential vs. parallel all-pairs maximum flow

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use edgecon::{algo::*, gens::*, prelude::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

fn random_multigraph(n: NumNodes, p: f64, seed: u64) -> MultiGraph {
    let rng = &mut Pcg64Mcg::seed_from_u64(seed);
    let edges = Gnp::new()
        .nodes(n)
        .prob(p)
        .max_multiplicity(2)
        .loops(true)
        .generate(rng);
    MultiGraph::from_edges(n, edges)
}

fn bench_families(c: &mut Criterion) {
    let mut group = c.benchmark_group("families");

    let families = [
        ("cycle_64", MultiGraph::cycle(64)),
        ("complete_24", MultiGraph::complete(24)),
        ("bipartite_12_16", MultiGraph::complete_bipartite(12, 16)),
        ("bridged_cycles_32", MultiGraph::two_cycles_with_bridge(32, 32)),
    ];

    for (name, graph) in &families {
        group.bench_with_input(BenchmarkId::new("max_flow", name), graph, |b, g| {
            b.iter(|| black_box(g.edge_connectivity_max_flow()))
        });
        group.bench_with_input(BenchmarkId::new("stoer_wagner", name), graph, |b, g| {
            b.iter(|| black_box(g.edge_connectivity_stoer_wagner()))
        });
    }

    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_multigraphs");
    group.sample_size(20);

    for n in [16, 32, 64] {
        let graph = random_multigraph(n, 0.3, n as u64);

        group.bench_with_input(BenchmarkId::new("max_flow", n), &graph, |b, g| {
            b.iter(|| black_box(g.edge_connectivity_max_flow()))
        });
        group.bench_with_input(BenchmarkId::new("max_flow_parallel", n), &graph, |b, g| {
            let algo = MaxFlowConnectivity::new().parallel(true);
            b.iter(|| black_box(algo.compute(g)))
        });
        group.bench_with_input(BenchmarkId::new("stoer_wagner", n), &graph, |b, g| {
            b.iter(|| black_box(g.edge_connectivity_stoer_wagner()))
        });
    }

    group.finish();
}

criterion_group!(families, bench_families);
criterion_group!(random, bench_random);
criterion_main!(families, random);
