/*!
# Graph Representations

Currently a single representation is provided:
- [`MultiGraph`]: number of nodes plus an edge list, allowing parallel edges and self-loops.

It implements all traits in [`ops`](crate::ops) the connectivity algorithms need. Algorithms
are written against [`EdgeList`] so further representations only need to expose their edges.
*/

use crate::{
    error::{GraphError, Result},
    ops::*,
    *,
};

mod multigraph;

pub use multigraph::*;
