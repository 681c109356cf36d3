/*!
# Edge Connectivity

The **edge connectivity** `λ(G)` of an undirected multigraph is the minimum number of edges whose
removal disconnects it. Parallel edges count with their multiplicity, self-loops never matter.
Graphs with at most one node have edge connectivity `0` by convention, as do disconnected graphs.

Two algorithms are provided:
- [`MaxFlowConnectivity`] seeds the answer with the minimum degree and lowers it with a unit
  capacity maximum flow between every unordered pair of nodes. By Menger's theorem, the minimum
  over all pairs is `λ(G)`.
- [`StoerWagner`] computes a global minimum cut directly.

Both are available on every graph through the [`EdgeConnectivity`] trait.
*/

use std::sync::atomic::{AtomicU32, Ordering};

use rayon::prelude::*;
use tracing::debug;

use super::*;

/// All-pairs maximum-flow edge connectivity.
///
/// Every pair `s < t` gets a fresh [`FlowNetwork`]; the graph itself is only read.
/// In parallel mode, sources are distributed over the rayon thread pool and all workers share
/// the best value found so far, stopping as soon as it drops to `0`. Both modes return the same
/// value.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxFlowConnectivity {
    parallel: bool,
}

impl MaxFlowConnectivity {
    /// Creates a new sequential instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables parallel evaluation of the source/sink pairs
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Setter variant of [`MaxFlowConnectivity::parallel`]
    pub fn set_parallel(&mut self, parallel: bool) -> &mut Self {
        self.parallel = parallel;
        self
    }

    /// Computes the edge connectivity of the graph.
    /// ** Panics if an edge endpoint is `>= n` **
    pub fn compute<G>(&self, graph: &G) -> NumEdges
    where
        G: EdgeList + Sync,
    {
        let n = graph.number_of_nodes();
        if n <= 1 {
            return 0;
        }

        let min_degree = graph.min_degree();
        let result = if min_degree == 0 {
            0
        } else if self.parallel {
            Self::all_pairs_parallel(graph, min_degree)
        } else {
            Self::all_pairs_sequential(graph, min_degree)
        };

        debug!(
            n,
            m = graph.number_of_edges(),
            min_degree,
            parallel = self.parallel,
            result,
            "max-flow edge connectivity finished"
        );

        result
    }

    fn all_pairs_sequential<G>(graph: &G, mut best: NumEdges) -> NumEdges
    where
        G: EdgeList,
    {
        let n = graph.number_of_nodes();
        for s in 0..n {
            for t in (s + 1)..n {
                let flow = FlowNetwork::undirected_unit(graph, s, t).max_flow() as NumEdges;
                if flow < best {
                    best = flow;
                    if best == 0 {
                        return 0;
                    }
                }
            }
        }
        best
    }

    fn all_pairs_parallel<G>(graph: &G, seed: NumEdges) -> NumEdges
    where
        G: EdgeList + Sync,
    {
        let n = graph.number_of_nodes();
        let best = AtomicU32::new(seed);

        (0..n).into_par_iter().for_each(|s| {
            for t in (s + 1)..n {
                if best.load(Ordering::Relaxed) == 0 {
                    return;
                }

                let flow = FlowNetwork::undirected_unit(graph, s, t).max_flow() as NumEdges;
                best.fetch_min(flow, Ordering::Relaxed);
            }
        });

        best.into_inner()
    }
}

/// Edge connectivity queries implemented on every graph exposing its edges
pub trait EdgeConnectivity: EdgeList + Sync {
    /// Computes the edge connectivity using sequential all-pairs maximum flows.
    /// ** Panics if an edge endpoint is `>= n` **
    fn edge_connectivity_max_flow(&self) -> NumEdges {
        MaxFlowConnectivity::new().compute(self)
    }

    /// Computes the edge connectivity using Stoer–Wagner.
    /// ** Panics if an edge endpoint is `>= n` **; use [`StoerWagner::try_compute`] to handle
    /// this case.
    fn edge_connectivity_stoer_wagner(&self) -> NumEdges {
        match StoerWagner::try_compute(self) {
            Ok(lambda) => lambda,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns *true* if at least `k` edges have to be removed to disconnect the graph.
    /// Every graph is `0`-edge-connected.
    /// ** Panics if an edge endpoint is `>= n` **
    fn is_k_edge_connected(&self, k: NumEdges) -> bool {
        k == 0 || self.edge_connectivity_stoer_wagner() >= k
    }
}

impl<G> EdgeConnectivity for G where G: EdgeList + Sync {}

crate::testing::test_edge_connectivity!(
    test_max_flow_connectivity,
    edge_connectivity_max_flow,
    (Degenerate, Families, Weighted)
);

crate::testing::test_edge_connectivity!(
    test_stoer_wagner_connectivity,
    edge_connectivity_stoer_wagner,
    (Degenerate, Families, Weighted)
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn random_multigraph<R: Rng>(rng: &mut R, n: NumNodes) -> MultiGraph {
        let edges = Gnp::new()
            .nodes(n)
            .prob(rng.random_range(0.1..0.9))
            .max_multiplicity(rng.random_range(1..4))
            .loops(rng.random_bool(0.5))
            .generate(rng);
        MultiGraph::from_edges(n, edges)
    }

    #[test]
    fn algorithms_agree_on_random_multigraphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for _ in 0..200 {
            let n = rng.random_range(0..14);
            let graph = random_multigraph(rng, n);

            let max_flow = graph.edge_connectivity_max_flow();
            let stoer_wagner = graph.edge_connectivity_stoer_wagner();
            assert_eq!(max_flow, stoer_wagner, "{graph:?}");
            assert!(max_flow <= graph.min_degree());
        }
    }

    #[test]
    fn parallel_agrees_with_sequential() {
        let rng = &mut Pcg64Mcg::seed_from_u64(12);
        let sequential = MaxFlowConnectivity::new();
        let parallel = MaxFlowConnectivity::new().parallel(true);

        for _ in 0..50 {
            let n = rng.random_range(0..20);
            let graph = random_multigraph(rng, n);
            assert_eq!(sequential.compute(&graph), parallel.compute(&graph));
        }

        let mut algo = MaxFlowConnectivity::new();
        algo.set_parallel(true);
        assert_eq!(algo.compute(&MultiGraph::complete(7)), 6);
    }

    #[test]
    fn adding_edges_never_decreases_connectivity() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for _ in 0..30 {
            let n = rng.random_range(2..12);
            let mut graph = random_multigraph(rng, n);

            let mut lambda = graph.edge_connectivity_stoer_wagner();
            for _ in 0..10 {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                graph.add_edge(u, v);

                let next = graph.edge_connectivity_stoer_wagner();
                assert!(next >= lambda);
                assert_eq!(next, graph.edge_connectivity_max_flow());
                lambda = next;
            }
        }
    }

    #[test]
    fn computation_leaves_graph_untouched() {
        let graph = MultiGraph::two_cycles_with_bridge(4, 3);
        let copy = graph.clone();

        for _ in 0..2 {
            assert_eq!(graph.edge_connectivity_max_flow(), 1);
            assert_eq!(graph.edge_connectivity_stoer_wagner(), 1);
        }
        assert_eq!(graph, copy);
    }

    #[test]
    fn k_edge_connected() {
        let graph = MultiGraph::complete(5);
        assert!(graph.is_k_edge_connected(0));
        assert!(graph.is_k_edge_connected(4));
        assert!(!graph.is_k_edge_connected(5));

        let disconnected = MultiGraph::new(3);
        assert!(disconnected.is_k_edge_connected(0));
        assert!(!disconnected.is_k_edge_connected(1));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn stoer_wagner_panics_on_invalid_graph() {
        // bypasses the validation of `MultiGraph`
        struct Broken;

        impl GraphNodeOrder for Broken {
            fn number_of_nodes(&self) -> NumNodes {
                2
            }
        }

        impl GraphEdgeOrder for Broken {
            fn number_of_edges(&self) -> NumEdges {
                1
            }
        }

        impl EdgeList for Broken {
            fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
                std::iter::once(Edge(0, 5))
            }
        }

        Broken.edge_connectivity_stoer_wagner();
    }
}
