//! APQ Dijkstra - single-source shortest paths over interchangeable priority queues
//!
//! This library implements Dijkstra's algorithm on weighted, undirected graphs and
//! lets the caller choose the priority queue that drives it:
//!
//! - [`UnsortedListApq`]: adaptable queue with O(1) insert/update and O(n) extract-min
//! - [`BinaryHeapApq`]: adaptable queue with O(log n) insert/update/extract-min/remove
//! - [`PlainQueue`]: non-adaptable queue where priority updates become duplicate entries
//!
//! Adaptable queues hand out [`Handle`]s so the engine can update a vertex's priority
//! in place; plain queues rely on the engine skipping entries for vertices it has
//! already finalized.

pub mod algorithm;
pub mod benchmark;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{shortest_paths, Dijkstra, QueueKind},
    ClosedSet, ShortestPathAlgorithm,
};
pub use data_structures::{
    AdaptablePriorityQueue, BinaryHeapApq, Handle, PlainQueue, PriorityQueue, UnsortedListApq,
};
/// Re-export main types for convenient use
pub use graph::undirected::UndirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Handle refers to an element that is no longer in the queue")]
    StaleHandle,

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(String, String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
