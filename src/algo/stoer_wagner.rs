/*!
# Stoer–Wagner Minimum Cut

Computes the global minimum cut of an undirected multigraph without any flow computation.
The graph is turned into a dense [`WeightMatrix`] (parallel edges are summed, self-loops
dropped) and the algorithm repeats **minimum cut phases** until a single super-node remains:

1. A **maximum-adjacency ordering** adds, one by one, the active node most strongly connected
   to the already ordered ones (ties go to the lowest index).
2. The weight connecting the last ordered node to all others is the **cut of the phase**.
3. The last two ordered nodes are merged.

The smallest cut of the phase over all phases is the global minimum cut.

Merged nodes are removed by swapping them with the last active index, so the matrix never
reallocates and merging costs `O(active)`.
*/

use std::cmp::Reverse;

use tracing::debug;

use super::*;

/// Dense symmetric weight matrix over the currently active super-nodes `0..active`.
///
/// Rows and columns beyond `active` are stale and never read. The diagonal is kept at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightMatrix {
    n: usize,
    active: usize,
    weights: Vec<i64>,
}

impl WeightMatrix {
    /// Builds the weight matrix of a multigraph: `w[u][v]` is the number of edges between `u`
    /// and `v`. Self-loops are ignored.
    ///
    /// Returns [`GraphError::NodeOutOfRange`] if an edge endpoint is not a node of the graph.
    pub fn try_from_graph<G>(graph: &G) -> Result<Self>
    where
        G: EdgeList,
    {
        let n = graph.number_of_nodes();
        let mut matrix = Self {
            n: n as usize,
            active: n as usize,
            weights: vec![0; (n as usize) * (n as usize)],
        };

        for edge in graph.edges_without_loops() {
            let node = edge.max_node();
            if node >= n {
                return Err(GraphError::NodeOutOfRange { node, n });
            }

            let Edge(u, v) = edge;
            *matrix.weight_mut(u as usize, v as usize) += 1;
            *matrix.weight_mut(v as usize, u as usize) += 1;
        }

        Ok(matrix)
    }

    /// Returns the number of active super-nodes
    pub fn number_of_active(&self) -> usize {
        self.active
    }

    /// Returns the weight between two active super-nodes
    /// ** Panics if `u >= n || v >= n` **
    pub fn weight(&self, u: usize, v: usize) -> i64 {
        self.weights[u * self.n + v]
    }

    fn weight_mut(&mut self, u: usize, v: usize) -> &mut i64 {
        &mut self.weights[u * self.n + v]
    }

    /// Returns the total weight of all edges between `u` and the other active super-nodes
    pub fn weighted_degree(&self, u: usize) -> i64 {
        (0..self.active).map(|v| self.weight(u, v)).sum()
    }

    /// Merges `sel` into `prev` and removes `sel` from the active set by moving the last active
    /// super-node into its slot.
    /// ** Panics if `prev == sel` or either is not active **
    fn merge(&mut self, prev: usize, sel: usize) {
        assert_ne!(prev, sel);
        assert!(prev < self.active && sel < self.active);

        for v in 0..self.active {
            if v == prev || v == sel {
                continue;
            }
            let w = self.weight(prev, v) + self.weight(sel, v);
            *self.weight_mut(prev, v) = w;
            *self.weight_mut(v, prev) = w;
        }

        let last = self.active - 1;
        if sel != last {
            for v in 0..self.active {
                *self.weight_mut(sel, v) = self.weight(last, v);
                *self.weight_mut(v, sel) = self.weight(v, last);
            }
            *self.weight_mut(sel, sel) = 0;
        }

        self.active -= 1;
    }
}

/// Result of a single minimum cut phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutPhase {
    /// Weight between the last ordered super-node and all others
    pub cut_of_the_phase: i64,
    /// Second to last super-node in the maximum-adjacency ordering
    pub prev: usize,
    /// Last super-node in the maximum-adjacency ordering
    pub last: usize,
}

/// Stoer–Wagner minimum cut on a private [`WeightMatrix`].
///
/// The matrix is consumed destructively; the input graph is never touched.
#[derive(Debug, Clone)]
pub struct StoerWagner {
    matrix: WeightMatrix,
    keys: Vec<i64>,
    added: Vec<bool>,
}

impl StoerWagner {
    /// Creates a new instance working on the given matrix
    pub fn new(matrix: WeightMatrix) -> Self {
        let n = matrix.number_of_active();
        Self {
            matrix,
            keys: vec![0; n],
            added: vec![false; n],
        }
    }

    /// Computes the edge connectivity of a multigraph.
    ///
    /// Returns `0` for graphs with at most one node and for graphs with an isolated node.
    /// Returns [`GraphError::NodeOutOfRange`] if an edge endpoint is not a node of the graph.
    pub fn try_compute<G>(graph: &G) -> Result<NumEdges>
    where
        G: EdgeList,
    {
        if graph.number_of_nodes() <= 1 {
            return Ok(0);
        }

        let matrix = WeightMatrix::try_from_graph(graph)?;
        let cut = Self::new(matrix).min_cut();

        debug!(
            n = graph.number_of_nodes(),
            m = graph.number_of_edges(),
            cut,
            "stoer-wagner finished"
        );

        Ok(cut as NumEdges)
    }

    /// Runs all phases and returns the weight of a global minimum cut.
    /// Returns `0` if fewer than two super-nodes are active or one of them is isolated.
    pub fn min_cut(mut self) -> i64 {
        let active = self.matrix.number_of_active();
        if active <= 1 || (0..active).any(|u| self.matrix.weighted_degree(u) == 0) {
            return 0;
        }

        let mut best: Option<i64> = None;
        while self.matrix.number_of_active() > 1 {
            let Some(phase) = self.minimum_cut_phase() else {
                break;
            };

            if best.is_none_or(|b| phase.cut_of_the_phase < b) {
                best = Some(phase.cut_of_the_phase);
            }

            if best == Some(0) {
                break;
            }

            self.matrix.merge(phase.prev, phase.last);
        }

        best.unwrap_or(0)
    }

    /// Computes a maximum-adjacency ordering of the active super-nodes starting at `0` and
    /// returns its last two nodes together with the cut of the phase.
    /// Returns `None` if fewer than two super-nodes are active.
    pub fn minimum_cut_phase(&mut self) -> Option<CutPhase> {
        let active = self.matrix.number_of_active();
        if active < 2 {
            return None;
        }

        self.keys[..active].fill(0);
        self.added[..active].fill(false);

        let mut prev = 0;
        for i in 0..active {
            // the first maximum key wins ties
            let sel = (0..active)
                .filter(|&v| !self.added[v])
                .min_by_key(|&v| (Reverse(self.keys[v]), v))?;

            self.added[sel] = true;

            if i + 1 == active {
                return Some(CutPhase {
                    cut_of_the_phase: self.keys[sel],
                    prev,
                    last: sel,
                });
            }

            for v in 0..active {
                if !self.added[v] {
                    self.keys[v] += self.matrix.weight(sel, v);
                }
            }

            prev = sel;
        }

        None
    }
}
