use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};

/// Trait representing a weighted undirected graph
///
/// This is the read interface consumed by the shortest path engine. Vertices are
/// identified by caller-supplied labels, so they compare, order and hash the
/// way their labels do.
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Vertex identity
    type Vertex: Copy + Eq + Hash + Ord + Debug;

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every vertex of the graph
    fn vertices(&self) -> Box<dyn Iterator<Item = Self::Vertex> + '_>;

    /// Returns an iterator over the edges incident to a vertex as (opposite endpoint, weight)
    fn incident_edges(&self, vertex: Self::Vertex) -> Box<dyn Iterator<Item = (Self::Vertex, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: Self::Vertex) -> bool;

    /// Gets the weight of the edge between two vertices if it exists
    fn edge_weight(&self, a: Self::Vertex, b: Self::Vertex) -> Option<W>;

    /// Returns the number of edges incident to a vertex
    fn degree(&self, vertex: Self::Vertex) -> usize {
        self.incident_edges(vertex).count()
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex to the graph, returning false if it was already present
    fn add_vertex(&mut self, vertex: Self::Vertex) -> bool;

    /// Adds an undirected edge between two existing vertices with the given weight
    ///
    /// Adding an edge that already exists replaces its weight. Returns false if an
    /// endpoint is missing or the weight is negative.
    fn add_edge(&mut self, a: Self::Vertex, b: Self::Vertex, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, a: Self::Vertex, b: Self::Vertex) -> bool;
}
