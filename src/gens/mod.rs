/*!
# Graph Generators

This module provides generators for multigraphs used to test and benchmark the
connectivity algorithms:

- [`GraphFamilies`] creates deterministic families (paths, cycles, cliques, bicliques, bridged
  cycles, bundles of parallel edges) whose edge connectivity is known in closed form,
- [`GeneratorSubstructures`] plants such substructures into an existing graph,
- [`Gnp`] is a random edge generator for multigraphs following a builder-style pattern:

```rust
use edgecon::{prelude::*, gens::*};
use rand::SeedableRng;

let rng = &mut rand::rngs::StdRng::seed_from_u64(3);
let edges = Gnp::new().nodes(10).prob(0.5).max_multiplicity(2).generate(rng);
let graph = MultiGraph::from_edges(10, edges);
assert_eq!(graph.number_of_nodes(), 10);
```
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or an iterator (stream) over the generated edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec<Edge>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates an iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Helper trait for probabilities
pub trait Probability {
    /// Returns *true* if the probability is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl Probability for f64 {
    fn is_valid_probability(&self) -> bool {
        (0.0..=1.0).contains(self)
    }
}
