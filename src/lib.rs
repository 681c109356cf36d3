/*!
`edgecon` computes the **edge connectivity** of undirected multigraphs: the minimum number of
edges whose removal disconnects the graph.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; `Edge(u, v)` and `Edge(v, u)`
describe the same undirected edge.

Graphs are **multigraphs**: the same pair of nodes may be connected by several parallel edges,
and self-loops are allowed. Parallel edges count with their multiplicity when computing cuts,
self-loops never contribute to a cut. See [`repr::MultiGraph`].

# Algorithms

Two independent algorithms are provided and always agree (see [`algo`]):
- an all-pairs **maximum-flow** approach based on a FIFO push–relabel solver,
- the **Stoer–Wagner** global minimum cut algorithm.

Graphs with at most one node and disconnected graphs have edge connectivity `0`.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations and the graph representation,
- [`algo`] includes the connectivity algorithms, implemented on graphs itself (`graph.edge_connectivity_stoer_wagner()`),
- [`gens`] includes graph families with known edge connectivity and a random multigraph generator,
- [`io`] includes handlers for reading and writing MatrixMarket files as well as extracting node ranges from them.

```rust
use edgecon::{prelude::*, algo::*};

let mut graph = MultiGraph::new(4);
graph.add_edges([(0, 1), (1, 2), (2, 3), (3, 0), (0, 1)]);

assert_eq!(graph.edge_connectivity_max_flow(), 2);
assert_eq!(graph.edge_connectivity_stoer_wagner(), 2);
```

In most use-cases, `use edgecon::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use node::*;

/// `edgecon::prelude` includes definitions for nodes and edges, the error type, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}
