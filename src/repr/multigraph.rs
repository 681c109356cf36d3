use super::*;

/// An undirected multigraph stored as its number of nodes and a list of edges.
///
/// Parallel edges and self-loops are kept exactly as inserted; it is up to the
/// algorithms to interpret them (both connectivity algorithms count parallel
/// edges and ignore self-loops). Every stored endpoint is guaranteed to be `< n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiGraph {
    n: NumNodes,
    edges: Vec<Edge>,
}

impl MultiGraph {
    /// Consumes the graph and returns its edge list
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

impl GraphNodeOrder for MultiGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl GraphEdgeOrder for MultiGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl EdgeList for MultiGraph {
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }
}

impl GraphNew for MultiGraph {
    fn new(n: NumNodes) -> Self {
        Self {
            n,
            edges: Vec::new(),
        }
    }
}

impl GraphEdgeEditing for MultiGraph {
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        let node = u.max(v);
        if node >= self.n {
            return Err(GraphError::NodeOutOfRange { node, n: self.n });
        }

        self.edges.push(Edge(u, v));
        Ok(())
    }
}
