/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing multigraph, and the **graph families** with known edge
connectivity built from them:

| Family | Edge connectivity |
|---|---|
| path on `n >= 2` nodes | `1` |
| cycle on `n >= 3` nodes | `2` |
| complete graph `K_n` | `n - 1` |
| complete bipartite graph `K_{a,b}` | `min(a, b)` |
| two cycles joined by a bridge | `1` |
| `k` parallel edges between two nodes | `k` |

# Example

```rust
use edgecon::{prelude::*, gens::*};

let mut g = MultiGraph::new(5);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);

assert_eq!(
    g.edges().collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 4), Edge(4, 2)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques, bicliques, bundles
/// of parallel edges) inside an already existing graph.
///
/// As multigraphs accept every edge, connecting the same nodes twice yields parallel edges.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    /// ** Panics if any node is `>= n` **
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: consecutive nodes are connected and the last
    /// node is connected back to the first. A single node receives a self-loop.
    /// ** Panics if any node is `>= n` **
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects every pair of distinct given nodes exactly once.
    /// ** Panics if any node is `>= n` **
    fn connect_clique(&mut self, nodes: &[Node]);

    /// Connects every node in `left` with every node in `right`.
    /// ** Panics if any node is `>= n` **
    fn connect_biclique(&mut self, left: &[Node], right: &[Node]);

    /// Adds `k` parallel edges between `u` and `v`.
    /// ** Panics if `u >= n || v >= n` **
    fn connect_parallel(&mut self, u: Node, v: Node, k: NumEdges);
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur);
                prev = cur;
            }

            self.add_edge(prev, first);
        }
    }

    fn connect_clique(&mut self, nodes: &[Node]) {
        for (&u, &v) in nodes.iter().tuple_combinations() {
            self.add_edge(u, v);
        }
    }

    fn connect_biclique(&mut self, left: &[Node], right: &[Node]) {
        for (&u, &v) in left.iter().cartesian_product(right.iter()) {
            self.add_edge(u, v);
        }
    }

    fn connect_parallel(&mut self, u: Node, v: Node, k: NumEdges) {
        for _ in 0..k {
            self.add_edge(u, v);
        }
    }
}

/// Deterministic graph families with known edge connectivity.
///
/// Implemented for every graph that can be created from scratch and edited.
pub trait GraphFamilies: GraphNew + GraphEdgeEditing + Sized {
    /// Path `0 - 1 - ... - (n-1)`
    fn path(n: NumNodes) -> Self {
        let mut graph = Self::new(n);
        graph.connect_path(0..n);
        graph
    }

    /// Cycle `0 - 1 - ... - (n-1) - 0`.
    /// For `n = 1` this is a single self-loop, for `n = 2` two parallel edges.
    fn cycle(n: NumNodes) -> Self {
        let mut graph = Self::new(n);
        graph.connect_cycle(0..n);
        graph
    }

    /// Complete graph `K_n`
    fn complete(n: NumNodes) -> Self {
        let mut graph = Self::new(n);
        graph.connect_clique(&(0..n).collect_vec());
        graph
    }

    /// Complete bipartite graph `K_{a,b}` with sides `0..a` and `a..a+b`
    fn complete_bipartite(a: NumNodes, b: NumNodes) -> Self {
        let mut graph = Self::new(a + b);
        graph.connect_biclique(&(0..a).collect_vec(), &(a..a + b).collect_vec());
        graph
    }

    /// Cycle on `0..a` and cycle on `a..a+b`, joined by the bridge `{0, a}`
    fn two_cycles_with_bridge(a: NumNodes, b: NumNodes) -> Self {
        let mut graph = Self::new(a + b);
        graph.connect_cycle(0..a);
        graph.connect_cycle(a..a + b);
        if a > 0 && b > 0 {
            graph.add_edge(0, a);
        }
        graph
    }

    /// Two nodes joined by `k` parallel edges
    fn parallel_edges(k: NumEdges) -> Self {
        let mut graph = Self::new(2);
        graph.connect_parallel(0, 1, k);
        graph
    }
}

impl<G> GraphFamilies for G where G: GraphNew + GraphEdgeEditing + Sized {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_path() {
        let mut g = MultiGraph::new(6);
        g.connect_path([]);
        g.connect_path([1]);
        assert_eq!(g.number_of_edges(), 0);

        g.connect_path([0, 3, 1, 4]);
        assert_eq!(g.edges().collect_vec(), vec![Edge(0, 3), Edge(3, 1), Edge(1, 4)]);
    }

    #[test]
    fn test_connect_cycle() {
        let mut g = MultiGraph::new(6);
        g.connect_cycle([]);
        assert_eq!(g.number_of_edges(), 0);

        g.connect_cycle([1]);
        assert_eq!(g.edges().collect_vec(), vec![Edge(1, 1)]);

        let mut g = MultiGraph::new(6);
        g.connect_cycle([0, 3, 1, 4]);
        assert_eq!(
            g.edges().collect_vec(),
            vec![Edge(0, 3), Edge(3, 1), Edge(1, 4), Edge(4, 0)]
        );
    }

    #[test]
    fn test_connect_clique_and_biclique() {
        let mut g = MultiGraph::new(6);
        g.connect_clique(&[]);
        g.connect_clique(&[2]);
        assert_eq!(g.number_of_edges(), 0);

        g.connect_clique(&[1, 2, 4]);
        assert_eq!(g.edges().collect_vec(), vec![Edge(1, 2), Edge(1, 4), Edge(2, 4)]);

        let mut g = MultiGraph::new(5);
        g.connect_biclique(&[0, 1], &[2, 3, 4]);
        assert_eq!(g.number_of_edges(), 6);
        assert_eq!(g.degrees(), vec![3, 3, 2, 2, 2]);
    }

    #[test]
    fn test_families() {
        assert_eq!(MultiGraph::path(0).number_of_edges(), 0);
        assert_eq!(MultiGraph::path(5).number_of_edges(), 4);
        assert_eq!(MultiGraph::cycle(1).number_of_self_loops(), 1);
        assert_eq!(MultiGraph::cycle(2).degrees(), vec![2, 2]);
        assert_eq!(MultiGraph::complete(5).number_of_edges(), 10);
        assert_eq!(MultiGraph::complete_bipartite(2, 5).number_of_edges(), 10);

        let bridged = MultiGraph::two_cycles_with_bridge(5, 6);
        assert_eq!(bridged.number_of_nodes(), 11);
        assert_eq!(bridged.number_of_edges(), 12);

        let bundle = MultiGraph::parallel_edges(4);
        assert_eq!(bundle.edges().collect_vec(), vec![Edge(0, 1); 4]);
    }
}
