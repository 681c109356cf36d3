/*!
# Connectivity Algorithms

This module provides the algorithms computing the **edge connectivity** of an undirected
multigraph, i.e. the minimum number of edges whose removal disconnects it.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use edgecon::{prelude::*, algo::*};

let graph = MultiGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
assert_eq!(graph.edge_connectivity_max_flow(), 2);
assert_eq!(graph.edge_connectivity_stoer_wagner(), 2);
```

Two independent algorithms are available and must always agree:
- [`MaxFlowConnectivity`] runs a [`FlowNetwork`] maximum flow between every pair of nodes,
- [`StoerWagner`] computes a global minimum cut on a dense weight matrix.
*/

mod edge_connectivity;
mod network_flow;
mod stoer_wagner;

use crate::{
    error::{GraphError, Result},
    prelude::*,
};

pub use edge_connectivity::*;
pub use network_flow::*;
pub use stoer_wagner::*;
