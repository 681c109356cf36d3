use rand_distr::{Binomial, Distribution};

use super::*;

/// Random undirected multigraphs in the spirit of `G(n,p)`.
///
/// For every unordered pair `{u, v}` with `u < v` the generator draws the number of parallel
/// edges from `Binomial(max_multiplicity, p)`. With `max_multiplicity = 1` this is the classical
/// `G(n,p)` model. Optionally, every node also receives self-loops drawn from the same
/// distribution, which the connectivity algorithms have to ignore.
#[derive(Debug, Copy, Clone)]
pub struct Gnp {
    n: NumNodes,
    p: Option<f64>,
    max_multiplicity: u64,
    loops: bool,
}

impl Default for Gnp {
    fn default() -> Self {
        Self {
            n: 0,
            p: None,
            max_multiplicity: 1,
            loops: false,
        }
    }
}

impl Gnp {
    /// Creates a new empty generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    /// ** Panics if `p` is not within `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probability(), "invalid probability {prob}");
        self.p = Some(prob);
        self
    }

    /// Updates the maximum number of parallel edges per node pair
    pub fn max_multiplicity(mut self, k: u64) -> Self {
        self.max_multiplicity = k;
        self
    }

    /// Allows the generation of self-loops
    pub fn loops(mut self, loops: bool) -> Self {
        self.loops = loops;
        self
    }
}

impl NumNodesGen for Gnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for Gnp {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let Some(p) = self.p else {
            panic!("Probability of Gnp was not set!");
        };
        let Ok(distr) = Binomial::new(self.max_multiplicity, p) else {
            panic!("invalid probability {p}");
        };

        let n = self.n;
        let loops = self.loops;

        // Draw eagerly so that the returned iterator does not borrow `rng`
        let mut edges = Vec::new();
        for u in 0..n {
            let first = if loops { u } else { u + 1 };
            for v in first..n {
                let k = distr.sample(rng);
                edges.extend((0..k).map(|_| Edge(u, v)));
            }
        }

        edges.into_iter()
    }
}
