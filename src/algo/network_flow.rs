/*!
# Maximum Flow (FIFO Push–Relabel)

This module provides [`FlowNetwork`], a directed residual network together with a
**preflow-push** maximum-flow solver that processes active vertices in FIFO order.

## Core concepts
- Every call to [`FlowNetwork::add_edge`] creates a **forward arc** with the given capacity and a
  paired **reverse arc** with capacity `0`. Both store the index of their partner, so pushing flow
  along one arc and crediting its partner is `O(1)`.
- An undirected edge of capacity `c` is modelled by adding the arc pair in both directions, see
  [`FlowNetwork::undirected_unit`].
- A vertex is **active** if it is neither source nor sink and carries positive excess.
  Active vertices are **discharged**: excess is pushed along admissible arcs
  (`height[u] == height[v] + 1`) and the vertex is **relabeled** once its arc list is exhausted.

No gap heuristic and no global relabeling is applied. Networks built here stem from small
unit-capacity graphs where neither pays off.

## Example
```rust
use edgecon::algo::FlowNetwork;

let mut network = FlowNetwork::new(4, 0, 3);
network.add_edge(0, 1, 100);
network.add_edge(1, 2, 1);
network.add_edge(2, 3, 100);
assert_eq!(network.max_flow(), 1);
```
*/

use std::collections::VecDeque;

use tracing::trace;

use super::*;

/// Capacities, residuals and excesses are 64-bit signed values.
/// The source is the only vertex whose excess becomes negative.
pub type Capacity = i64;

/// Height label of a vertex
pub type Height = u32;

/// Height assigned to a vertex that has no residual arc left
const UNREACHABLE_HEIGHT: Height = Height::MAX / 4;

/// A directed arc in the residual network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowArc {
    /// Head of the arc
    pub to: Node,
    /// Remaining capacity of the arc
    pub residual: Capacity,
    /// Index of the paired arc in the arc list of `to`
    rev: usize,
}

impl FlowArc {
    /// Returns the index of the paired arc in the arc list of `self.to`
    pub fn reverse_index(&self) -> usize {
        self.rev
    }
}

/// Counters collected during a single [`FlowNetwork::max_flow`] run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlowStatistics {
    /// Number of (saturating or non-saturating) pushes
    pub pushes: u64,
    /// Number of relabel operations
    pub relabels: u64,
}

/// A residual network between a fixed source and sink.
///
/// All scratch state (heights, excesses, arc cursors and the FIFO queue) is owned by the
/// instance. Networks are cheap to build and meant to be used for a single source/sink query;
/// concurrent queries need one network each.
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    source: Node,
    sink: Node,
    arcs: Vec<Vec<FlowArc>>,

    height: Vec<Height>,
    excess: Vec<Capacity>,
    cursor: Vec<usize>,

    queue: VecDeque<Node>,
    in_queue: Vec<bool>,

    statistics: FlowStatistics,
}

impl FlowNetwork {
    /// Creates a network with `n` nodes and no arcs.
    /// ** Panics if `source >= n || sink >= n` **
    pub fn new(n: NumNodes, source: Node, sink: Node) -> Self {
        assert!(source < n, "source {source} out of range for {n} nodes");
        assert!(sink < n, "sink {sink} out of range for {n} nodes");

        let n = n as usize;
        Self {
            source,
            sink,
            arcs: vec![Vec::new(); n],
            height: vec![0; n],
            excess: vec![0; n],
            cursor: vec![0; n],
            queue: VecDeque::with_capacity(n),
            in_queue: vec![false; n],
            statistics: FlowStatistics::default(),
        }
    }

    /// Builds the unit-capacity network of an undirected multigraph: every edge `{u, v}` with
    /// `u != v` contributes one arc pair `u -> v` and one arc pair `v -> u`, each of capacity `1`.
    /// The maximum flow then equals the minimum number of edges separating `s` from `t`.
    /// ** Panics if `s >= n || t >= n` or an endpoint is `>= n` **
    pub fn undirected_unit<G>(graph: &G, s: Node, t: Node) -> Self
    where
        G: EdgeList,
    {
        let mut network = Self::new(graph.number_of_nodes(), s, t);
        for Edge(u, v) in graph.edges_without_loops() {
            network.add_edge(u, v, 1);
            network.add_edge(v, u, 1);
        }
        network
    }

    /// Returns the number of nodes in the network
    pub fn number_of_nodes(&self) -> NumNodes {
        self.arcs.len() as NumNodes
    }

    /// Returns the source node
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the sink node
    pub fn sink(&self) -> Node {
        self.sink
    }

    /// Returns the arcs leaving `u` (forward and reverse arcs alike)
    /// ** Panics if `u >= n` **
    pub fn arcs_of(&self, u: Node) -> &[FlowArc] {
        &self.arcs[u as usize]
    }

    /// Returns the current height label of `u`
    /// ** Panics if `u >= n` **
    pub fn height_of(&self, u: Node) -> Height {
        self.height[u as usize]
    }

    /// Returns the current excess of `u`
    /// ** Panics if `u >= n` **
    pub fn excess_of(&self, u: Node) -> Capacity {
        self.excess[u as usize]
    }

    /// Returns the counters of the last [`FlowNetwork::max_flow`] run
    pub fn statistics(&self) -> FlowStatistics {
        self.statistics
    }

    /// Adds an arc `u -> v` with the given capacity and its reverse arc `v -> u` with capacity `0`.
    /// Self-loops and non-positive capacities are ignored.
    /// ** Panics if `u >= n || v >= n` **
    pub fn add_edge(&mut self, u: Node, v: Node, capacity: Capacity) {
        if u == v || capacity <= 0 {
            return;
        }

        let forward = FlowArc {
            to: v,
            residual: capacity,
            rev: self.arcs[v as usize].len(),
        };
        let backward = FlowArc {
            to: u,
            residual: 0,
            rev: self.arcs[u as usize].len(),
        };

        self.arcs[u as usize].push(forward);
        self.arcs[v as usize].push(backward);
    }

    /// Computes the value of a maximum flow from source to sink.
    ///
    /// The residual network is modified in place; calling this method again on the saturated
    /// network returns the same value. A network whose source equals its sink has flow `0`.
    pub fn max_flow(&mut self) -> u64 {
        if self.source == self.sink {
            return 0;
        }

        self.statistics = FlowStatistics::default();
        self.saturate_source();

        while let Some(u) = self.pop() {
            self.discharge(u);
            self.enqueue(u);
        }

        let stats = self.statistics;
        trace!(
            n = self.arcs.len(),
            pushes = stats.pushes,
            relabels = stats.relabels,
            flow = self.excess[self.sink as usize],
            "push-relabel finished"
        );

        self.excess[self.sink as usize].max(0) as u64
    }

    /// Lifts the source to height `n` and pushes the full capacity of every leaving arc
    fn saturate_source(&mut self) {
        let s = self.source as usize;
        self.height[s] = self.arcs.len() as Height;

        for i in 0..self.arcs[s].len() {
            let FlowArc { to, residual, rev } = self.arcs[s][i];
            if residual <= 0 {
                continue;
            }

            self.arcs[s][i].residual = 0;
            self.arcs[to as usize][rev].residual += residual;

            self.excess[to as usize] += residual;
            self.excess[s] -= residual;
            self.enqueue(to);
        }
    }

    fn is_active(&self, u: Node) -> bool {
        u != self.source && u != self.sink && self.excess[u as usize] > 0
    }

    fn enqueue(&mut self, u: Node) {
        if !self.in_queue[u as usize] && self.is_active(u) {
            self.in_queue[u as usize] = true;
            self.queue.push_back(u);
        }
    }

    fn pop(&mut self) -> Option<Node> {
        while let Some(u) = self.queue.pop_front() {
            self.in_queue[u as usize] = false;
            if self.is_active(u) {
                return Some(u);
            }
        }
        None
    }

    /// Pushes excess along the `i`-th arc of `u` if it is admissible.
    /// Returns *true* if the arc is still admissible afterwards.
    fn push(&mut self, u: Node, i: usize) -> bool {
        let FlowArc { to, residual, rev } = self.arcs[u as usize][i];
        if residual <= 0 || self.height[u as usize] != self.height[to as usize] + 1 {
            return false;
        }

        let delta = self.excess[u as usize].min(residual);
        self.arcs[u as usize][i].residual -= delta;
        self.arcs[to as usize][rev].residual += delta;

        self.excess[u as usize] -= delta;
        self.excess[to as usize] += delta;
        self.statistics.pushes += 1;

        self.enqueue(to);

        residual > delta
    }

    /// Sets the height of `u` to one above its lowest residual neighbor and rewinds its cursor.
    /// Returns *false* if `u` has no residual arc left.
    fn relabel(&mut self, u: Node) -> bool {
        let min_height = self.arcs[u as usize]
            .iter()
            .filter(|arc| arc.residual > 0)
            .map(|arc| self.height[arc.to as usize])
            .min();

        let old_height = self.height[u as usize];
        let new_height = min_height.map_or(UNREACHABLE_HEIGHT, |h| h + 1);
        debug_assert!(new_height >= old_height);

        self.height[u as usize] = new_height;
        self.cursor[u as usize] = 0;
        self.statistics.relabels += 1;

        min_height.is_some()
    }

    fn discharge(&mut self, u: Node) {
        while self.excess[u as usize] > 0 {
            let i = self.cursor[u as usize];
            if i == self.arcs[u as usize].len() {
                if !self.relabel(u) {
                    break;
                }
                continue;
            }

            if !self.push(u, i) {
                self.cursor[u as usize] += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn classical_textbook_network() {
        let mut network = FlowNetwork::new(6, 0, 5);
        for (u, v, c) in [
            (0, 1, 16),
            (0, 2, 13),
            (1, 2, 10),
            (2, 1, 4),
            (1, 3, 12),
            (3, 2, 9),
            (2, 4, 14),
            (4, 3, 7),
            (3, 5, 20),
            (4, 5, 4),
        ] {
            network.add_edge(u, v, c);
        }

        assert_eq!(network.max_flow(), 23);

        let stats = network.statistics();
        assert!(stats.pushes >= 2);
        assert!(stats.relabels >= 1);
        assert_eq!(network.height_of(0), 6);
        assert_eq!(network.height_of(5), 0);

        // repeated calls do not change the result
        assert_eq!(network.max_flow(), 23);
    }

    #[test]
    fn no_path() {
        let mut network = FlowNetwork::new(4, 0, 3);
        network.add_edge(0, 1, 5);
        network.add_edge(2, 3, 5);
        assert_eq!(network.max_flow(), 0);
    }

    #[test]
    fn parallel_arcs() {
        let mut network = FlowNetwork::new(3, 0, 2);
        network.add_edge(0, 1, 3);
        network.add_edge(0, 1, 4);
        network.add_edge(1, 2, 10);
        assert_eq!(network.max_flow(), 7);
    }

    #[test]
    fn bottleneck() {
        let mut network = FlowNetwork::new(4, 0, 3);
        network.add_edge(0, 1, 100);
        network.add_edge(1, 2, 1);
        network.add_edge(2, 3, 100);
        assert_eq!(network.max_flow(), 1);
    }

    #[test]
    fn small_unit_grid() {
        let mut network = FlowNetwork::new(6, 0, 5);
        for (u, v) in [(0, 1), (0, 2), (1, 3), (2, 3), (2, 4), (4, 3), (3, 5), (4, 5)] {
            network.add_edge(u, v, 1);
        }
        assert_eq!(network.max_flow(), 2);
    }

    #[test]
    fn zero_capacity_arcs() {
        let mut network = FlowNetwork::new(4, 0, 3);
        network.add_edge(0, 1, 0);
        network.add_edge(0, 2, 5);
        network.add_edge(2, 1, 5);
        network.add_edge(1, 3, 5);
        assert!(network.arcs_of(0).iter().all(|arc| arc.to == 2));
        assert_eq!(network.max_flow(), 5);
    }

    #[test]
    fn self_loops_ignored() {
        let mut network = FlowNetwork::new(3, 0, 2);
        network.add_edge(0, 0, 100);
        network.add_edge(1, 1, 100);
        network.add_edge(2, 2, 100);
        network.add_edge(0, 1, 4);
        network.add_edge(1, 2, 3);
        assert!((0..3).all(|u| network.arcs_of(u).iter().all(|arc| arc.to != u)));
        assert_eq!(network.max_flow(), 3);
    }

    #[test]
    fn source_equals_sink() {
        let mut network = FlowNetwork::new(2, 1, 1);
        network.add_edge(0, 1, 3);
        assert_eq!(network.max_flow(), 0);
        assert_eq!(network.statistics(), FlowStatistics::default());
    }

    #[test]
    fn undirected_unit_network() {
        let graph = MultiGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0), (1, 1), (0, 2)]);

        let mut network = FlowNetwork::undirected_unit(&graph, 0, 2);
        // five non-loop edges, two arc pairs each
        let arcs: usize = (0..4).map(|u| network.arcs_of(u).len()).sum();
        assert_eq!(arcs, 20);
        assert_eq!(network.max_flow(), 3);

        let mut network = FlowNetwork::undirected_unit(&graph, 1, 3);
        assert_eq!(network.max_flow(), 2);
    }

    #[test]
    fn residual_invariants_hold() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [2 as NumNodes, 5, 10, 20] {
            for _ in 0..20 {
                let arcs = (0..3 * n)
                    .map(|_| {
                        (
                            rng.random_range(0..n),
                            rng.random_range(0..n),
                            rng.random_range(0..10) as Capacity,
                        )
                    })
                    .collect_vec();

                let mut network = FlowNetwork::new(n, 0, n - 1);
                for &(u, v, c) in &arcs {
                    network.add_edge(u, v, c);
                }

                let original = network.arcs.clone();
                let flow = network.max_flow();

                let mut excess = vec![0 as Capacity; n as usize];
                for u in 0..n {
                    for (i, arc) in network.arcs_of(u).iter().enumerate() {
                        // pairing
                        let partner = network.arcs_of(arc.to)[arc.reverse_index()];
                        assert_eq!(partner.to, u);
                        assert_eq!(partner.reverse_index(), i);

                        // conservation of residual capacity per arc pair
                        let before = original[u as usize][i].residual
                            + original[arc.to as usize][arc.reverse_index()].residual;
                        assert_eq!(arc.residual + partner.residual, before);
                        assert!(arc.residual >= 0);

                        // net flow into `arc.to` along this arc
                        let pushed = original[u as usize][i].residual - arc.residual;
                        if pushed > 0 {
                            excess[arc.to as usize] += pushed;
                            excess[u as usize] -= pushed;
                        }
                    }
                }

                // valid labeling: residual arcs never drop by more than one level
                for u in 0..n {
                    for arc in network.arcs_of(u).iter().filter(|arc| arc.residual > 0) {
                        assert!(network.height_of(u) <= network.height_of(arc.to) + 1);
                    }
                }
                assert_eq!(network.height_of(network.source()), n);
                assert_eq!(network.height_of(network.sink()), 0);

                for u in 0..n {
                    assert_eq!(excess[u as usize], network.excess_of(u));
                    if u != network.source() && u != network.sink() {
                        assert_eq!(network.excess_of(u), 0);
                    }
                }
                assert_eq!(network.excess_of(network.source()), -(flow as Capacity));
                assert_eq!(flow as Capacity, network.excess_of(network.sink()));
            }
        }
    }
}
