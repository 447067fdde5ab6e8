use crate::graph::traits::{Graph, MutableGraph};
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// An undirected graph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct UndirectedGraph<L, W>
where
    L: Copy + Eq + Hash + Ord + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Vertices in insertion order
    vertices: Vec<L>,

    /// Incident edges for each vertex: vertex -> [(opposite vertex, weight)]
    adjacency: HashMap<L, Vec<(L, W)>>,

    /// Number of undirected edges
    edge_count: usize,
}

impl<L, W> UndirectedGraph<L, W>
where
    L: Copy + Eq + Hash + Ord + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty undirected graph
    pub fn new() -> Self {
        UndirectedGraph {
            vertices: Vec::new(),
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates a new empty graph with room for the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        UndirectedGraph {
            vertices: Vec::with_capacity(vertices),
            adjacency: HashMap::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Builds a graph from a list of weighted edges, adding endpoints as they appear
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (L, L, W)>,
    {
        let mut graph = Self::new();
        for (a, b, weight) in edges {
            graph.add_vertex(a);
            graph.add_vertex(b);
            graph.add_edge(a, b, weight);
        }
        graph
    }

    /// Returns the vertex with the most incident edges, the earliest added on ties
    pub fn highest_degree_vertex(&self) -> Option<L> {
        let mut best: Option<(L, usize)> = None;
        for &v in &self.vertices {
            let degree = self.degree(v);
            if best.map_or(true, |(_, d)| degree > d) {
                best = Some((v, degree));
            }
        }
        best.map(|(v, _)| v)
    }

    /// Iterates over every edge once as (a, b, weight)
    pub fn edges(&self) -> impl Iterator<Item = (L, L, W)> + '_ {
        self.vertices.iter().flat_map(move |&a| {
            self.adjacency
                .get(&a)
                .into_iter()
                .flatten()
                .filter(move |(b, _)| a <= *b)
                .map(move |&(b, weight)| (a, b, weight))
        })
    }

    fn set_half_edge(&mut self, from: L, to: L, weight: W) -> bool {
        let incident = self.adjacency.entry(from).or_default();
        match incident.iter_mut().find(|(other, _)| *other == to) {
            Some(edge) => {
                edge.1 = weight;
                false
            }
            None => {
                incident.push((to, weight));
                true
            }
        }
    }
}

impl<L, W> Default for UndirectedGraph<L, W>
where
    L: Copy + Eq + Hash + Ord + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L, W> Graph<W> for UndirectedGraph<L, W>
where
    L: Copy + Eq + Hash + Ord + Debug,
    W: Float + Zero + Debug + Copy,
{
    type Vertex = L;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = L> + '_> {
        Box::new(self.vertices.iter().copied())
    }

    fn incident_edges(&self, vertex: L) -> Box<dyn Iterator<Item = (L, W)> + '_> {
        if let Some(edges) = self.adjacency.get(&vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: L) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    fn edge_weight(&self, a: L, b: L) -> Option<W> {
        self.adjacency
            .get(&a)?
            .iter()
            .find(|(other, _)| *other == b)
            .map(|(_, weight)| *weight)
    }

    fn degree(&self, vertex: L) -> usize {
        self.adjacency.get(&vertex).map_or(0, Vec::len)
    }
}

impl<L, W> MutableGraph<W> for UndirectedGraph<L, W>
where
    L: Copy + Eq + Hash + Ord + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self, vertex: L) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, Vec::new());
        self.vertices.push(vertex);
        true
    }

    fn add_edge(&mut self, a: L, b: L, weight: W) -> bool {
        if !self.has_vertex(a) || !self.has_vertex(b) || weight < W::zero() {
            return false;
        }

        let added = self.set_half_edge(a, b, weight);
        if a != b {
            self.set_half_edge(b, a, weight);
        }
        if added {
            self.edge_count += 1;
        }
        true
    }

    fn remove_edge(&mut self, a: L, b: L) -> bool {
        let mut removed = false;

        if let Some(incident) = self.adjacency.get_mut(&a) {
            let len_before = incident.len();
            incident.retain(|(other, _)| *other != b);
            removed = len_before > incident.len();
        }

        if let Some(incident) = self.adjacency.get_mut(&b) {
            incident.retain(|(other, _)| *other != a);
        }

        if removed {
            self.edge_count -= 1;
        }
        removed
    }
}
