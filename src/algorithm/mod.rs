pub mod traits;
pub mod frontier;
pub mod dijkstra;

pub use frontier::{AdaptableFrontier, DuplicatingFrontier, Frontier};
pub use traits::{ClosedSet, SearchStats, ShortestPathAlgorithm};
