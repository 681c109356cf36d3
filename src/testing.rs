/// Every edge connectivity method on `MultiGraph` has to pass the same table of graphs with
/// known edge connectivity
macro_rules! test_edge_connectivity {
    ($env:ident, $method:ident, ($($case:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{algo::*, gens::*, testing::test_edge_connectivity};

            $(
                test_edge_connectivity!($method: $case);
            )*
        }
    };
    ($method:ident: Degenerate) => {
        #[test]
        fn degenerate_graphs() {
            assert_eq!(MultiGraph::new(0).$method(), 0);
            assert_eq!(MultiGraph::new(1).$method(), 0);
            assert_eq!(MultiGraph::cycle(1).$method(), 0);

            // disconnected or isolated nodes
            assert_eq!(MultiGraph::new(2).$method(), 0);
            assert_eq!(MultiGraph::from_edges(3, [(0, 1), (0, 1), (2, 2)]).$method(), 0);
            assert_eq!(MultiGraph::from_edges(4, [(0, 1), (2, 3)]).$method(), 0);
            assert_eq!(MultiGraph::from_edges(2, [(0, 0), (1, 1)]).$method(), 0);
        }
    };
    ($method:ident: Families) => {
        #[test]
        fn known_families() {
            assert_eq!(MultiGraph::path(2).$method(), 1);
            assert_eq!(MultiGraph::path(5).$method(), 1);

            assert_eq!(MultiGraph::cycle(2).$method(), 2);
            assert_eq!(MultiGraph::cycle(3).$method(), 2);
            assert_eq!(MultiGraph::cycle(8).$method(), 2);

            for n in 2..8 {
                assert_eq!(MultiGraph::complete(n).$method(), n - 1);
            }

            assert_eq!(MultiGraph::complete_bipartite(3, 3).$method(), 3);
            assert_eq!(MultiGraph::complete_bipartite(2, 5).$method(), 2);
            assert_eq!(MultiGraph::complete_bipartite(1, 4).$method(), 1);

            assert_eq!(MultiGraph::two_cycles_with_bridge(5, 6).$method(), 1);

            assert_eq!(MultiGraph::parallel_edges(1).$method(), 1);
            assert_eq!(MultiGraph::parallel_edges(4).$method(), 4);
        }

        #[test]
        fn self_loops_do_not_count() {
            let mut graph = MultiGraph::cycle(6);
            graph.connect_parallel(0, 0, 5);
            graph.connect_parallel(3, 3, 2);
            assert_eq!(graph.$method(), 2);

            let mut bundle = MultiGraph::parallel_edges(3);
            bundle.connect_parallel(1, 1, 10);
            assert_eq!(bundle.$method(), 3);
        }
    };
    ($method:ident: Weighted) => {
        #[test]
        fn parallel_edges_as_weights() {
            // weighted example of Stoer and Wagner, weights encoded as parallel edges
            let mut graph = MultiGraph::new(8);
            for (u, v, w) in [
                (0, 1, 2),
                (0, 4, 3),
                (1, 2, 3),
                (1, 4, 2),
                (1, 5, 2),
                (2, 3, 4),
                (2, 6, 2),
                (3, 6, 2),
                (3, 7, 2),
                (4, 5, 3),
                (5, 6, 1),
                (6, 7, 3),
            ] {
                graph.connect_parallel(u, v, w);
            }
            assert_eq!(graph.$method(), 4);

            // doubling every edge doubles the edge connectivity
            let mut doubled = MultiGraph::two_cycles_with_bridge(4, 4);
            doubled.add_edges(MultiGraph::two_cycles_with_bridge(4, 4).into_edges());
            assert_eq!(doubled.$method(), 2);
        }
    };
}

pub(crate) use test_edge_connectivity;
