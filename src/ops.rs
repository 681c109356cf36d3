use crate::{error::Result, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph, counting parallel edges and self-loops
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Read access to an undirected multigraph as a sequence of edges.
///
/// This is all the connectivity algorithms need: they either sum parallel edges into
/// a weight matrix or turn every edge into a pair of unit arcs.
pub trait EdgeList: GraphNodeOrder + GraphEdgeOrder + Sized {
    /// Returns an iterator over all edges in insertion order, including
    /// parallel edges and self-loops.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_;

    /// Returns an iterator over all edges that are not self-loops
    fn edges_without_loops(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges().filter(|e| !e.is_loop())
    }

    /// Returns the number of self-loops in the graph
    fn number_of_self_loops(&self) -> NumEdges {
        self.edges().filter(|e| e.is_loop()).count() as NumEdges
    }

    /// Returns the degree of every node. Parallel edges are counted with their
    /// multiplicity, self-loops are ignored.
    /// ** Panics if an endpoint is `>= n` **
    fn degrees(&self) -> Vec<NumEdges> {
        let mut degrees = vec![0; self.len()];
        for Edge(u, v) in self.edges_without_loops() {
            degrees[u as usize] += 1;
            degrees[v as usize] += 1;
        }
        degrees
    }

    /// Returns the minimum degree (see [`EdgeList::degrees`]) or `0` for the empty graph
    fn min_degree(&self) -> NumEdges {
        self.degrees().into_iter().min().unwrap_or(0)
    }

    /// Returns *true* if some node has no incident non-loop edge
    fn has_isolated_node(&self) -> bool {
        self.degrees().contains(&0)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges.
///
/// Multigraphs accept every edge: inserting an existing edge adds a parallel copy.
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge *{u,v}* to the graph.
    /// Returns an error if `u >= n || v >= n`; the graph is left unchanged in this case.
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<()>;

    /// Adds the edge *{u,v}* to the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node) {
        if let Err(err) = self.try_add_edge(u, v) {
            panic!("{err}");
        }
    }

    /// Adds all edges in the collection
    /// ** Panics if any endpoint is `>= n` **
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v);
        }
    }

    /// Adds all edges in the collection and stops at the first invalid edge.
    /// Edges before the invalid one remain in the graph.
    fn try_add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<()> {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.try_add_edge(u, v)?;
        }
        Ok(())
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and an iterator over Edges
    /// ** Panics if any endpoint is `>= n` **
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;

    /// Create a graph from a number of nodes and an iterator over Edges,
    /// validating that every endpoint is a node of the graph
    fn try_from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>)
    -> Result<Self>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }

    fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self> {
        let mut graph = Self::new(n);
        graph.try_add_edges(edges)?;
        Ok(graph)
    }
}
