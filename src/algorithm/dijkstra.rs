use std::collections::HashMap;
use std::fmt::{self, Debug};
use clap::ValueEnum;
use log::{debug, trace, warn};
use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};

use crate::algorithm::frontier::{AdaptableFrontier, DuplicatingFrontier, Frontier};
use crate::algorithm::{ClosedSet, SearchStats, ShortestPathAlgorithm};
use crate::data_structures::{BinaryHeapApq, PlainQueue, UnsortedListApq};
use crate::graph::Graph;
use crate::Result;

/// Priority queue used to drive a Dijkstra run
///
/// Parsed from the command line by name (`unsorted-list`, `binary-heap`,
/// `plain`) or by the short aliases `unsorted` and `heap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
#[value(rename_all = "kebab-case")]
pub enum QueueKind {
    /// Adaptable queue over an unsorted list
    #[value(alias = "unsorted")]
    UnsortedList,
    /// Adaptable binary heap
    #[value(alias = "heap")]
    BinaryHeap,
    /// Non-adaptable queue that receives duplicate entries
    Plain,
}

impl QueueKind {
    pub const ALL: [QueueKind; 3] = [QueueKind::UnsortedList, QueueKind::BinaryHeap, QueueKind::Plain];

    pub fn name(&self) -> &'static str {
        match self {
            QueueKind::UnsortedList => "unsorted-list",
            QueueKind::BinaryHeap => "binary-heap",
            QueueKind::Plain => "plain",
        }
    }

    /// Returns true if the queue supports in-place key updates
    pub fn is_adaptable(&self) -> bool {
        !matches!(self, QueueKind::Plain)
    }
}

impl fmt::Display for QueueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Computes shortest paths from `source` using the given frontier
///
/// Vertices are finalized in nondecreasing distance order and recorded in the
/// returned closed set. With `stop_at_target`, the search ends right after
/// `target` is finalized and the closed set only covers the vertices finalized
/// up to that point.
///
/// A `source` missing from the graph yields an empty closed set; an unreachable
/// `target` is simply absent from it. Edge weights must be non-negative, which
/// is not checked here.
pub fn shortest_paths<G, W, F>(
    graph: &G,
    source: G::Vertex,
    target: G::Vertex,
    mut frontier: F,
    stop_at_target: bool,
) -> Result<ClosedSet<G::Vertex, W>>
where
    G: Graph<W>,
    W: Float + Zero + Debug + Copy,
    F: Frontier<G::Vertex, W>,
{
    let mut closed = ClosedSet::new(source);
    if !graph.has_vertex(source) {
        warn!("Source vertex {:?} not found in graph", source);
        return Ok(closed);
    }

    // Initialize distances and predecessors
    let mut distances: HashMap<G::Vertex, W> =
        graph.vertices().map(|v| (v, W::infinity())).collect();
    let mut predecessors: HashMap<G::Vertex, Option<G::Vertex>> =
        graph.vertices().map(|v| (v, None)).collect();

    distances.insert(source, W::zero());
    frontier.offer(source, W::zero())?;

    let mut extractions = 0;
    let mut stale_skips = 0;

    while let Some(u) = frontier.take_min() {
        extractions += 1;

        // Stale duplicate of a vertex that is already final
        if closed.contains(u) {
            stale_skips += 1;
            continue;
        }

        let dist_u = distances.get(&u).copied().unwrap_or_else(W::infinity);
        let pred_u = predecessors.get(&u).copied().flatten();
        closed.close(u, dist_u, pred_u);
        trace!("Closed {:?} at distance {:?} via {:?}", u, dist_u, pred_u);

        if stop_at_target && u == target {
            break;
        }

        // Relax all incident edges
        for (w, weight) in graph.incident_edges(u) {
            let candidate = dist_u + weight;
            let current = distances.get(&w).copied().unwrap_or_else(W::infinity);

            if candidate < current {
                distances.insert(w, candidate);
                predecessors.insert(w, Some(u));
                frontier.offer(w, candidate)?;
            }
        }
    }

    let stats = SearchStats {
        extractions,
        stale_skips,
        ..frontier.stats()
    };
    debug!(
        "Closed {} of {} vertices ({} extractions, {} stale, {} updates, peak queue {})",
        closed.len(),
        graph.vertex_count(),
        stats.extractions,
        stats.stale_skips,
        stats.updates,
        stats.peak_queue_len
    );
    closed.set_stats(stats);

    Ok(closed)
}

/// Dijkstra's algorithm over a selectable priority queue
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra {
    /// Queue driving the search
    queue: QueueKind,

    /// Stop as soon as the target is finalized
    stop_at_target: bool,

    /// After a full run, add unreached vertices with infinite distance
    include_unreachable: bool,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Dijkstra {
            queue: QueueKind::BinaryHeap,
            stop_at_target: false,
            include_unreachable: false,
        }
    }
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance using the binary heap
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the priority queue implementation
    pub fn with_queue(mut self, queue: QueueKind) -> Self {
        self.queue = queue;
        self
    }

    /// Stops the search once the target vertex is finalized
    pub fn with_early_stop(mut self, stop_at_target: bool) -> Self {
        self.stop_at_target = stop_at_target;
        self
    }

    /// Lists vertices the search never reached with an infinite distance
    ///
    /// Only applies to full runs; early-stopped results are left partial.
    pub fn with_unreachable_included(mut self, include: bool) -> Self {
        self.include_unreachable = include;
        self
    }

    pub fn queue(&self) -> QueueKind {
        self.queue
    }

    pub fn stops_at_target(&self) -> bool {
        self.stop_at_target
    }

    /// Runs the search from `source`, optionally stopping at `target`
    pub fn run<G, W>(&self, graph: &G, source: G::Vertex, target: G::Vertex) -> Result<ClosedSet<G::Vertex, W>>
    where
        G: Graph<W>,
        W: Float + Zero + Debug + Copy,
    {
        let stop = self.stop_at_target;
        let mut closed = match self.queue {
            QueueKind::UnsortedList => {
                let queue = UnsortedListApq::<W, G::Vertex>::new();
                shortest_paths(graph, source, target, AdaptableFrontier::new(queue), stop)?
            }
            QueueKind::BinaryHeap => {
                let queue = BinaryHeapApq::<W, G::Vertex>::new();
                shortest_paths(graph, source, target, AdaptableFrontier::new(queue), stop)?
            }
            QueueKind::Plain => {
                let queue = PlainQueue::<W, G::Vertex>::new();
                shortest_paths(graph, source, target, DuplicatingFrontier::new(queue), stop)?
            }
        };

        if self.include_unreachable && !stop && graph.has_vertex(source) {
            for v in graph.vertices() {
                closed.close(v, W::infinity(), None);
            }
        }

        Ok(closed)
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        match self.queue {
            QueueKind::UnsortedList => "Dijkstra (unsorted-list APQ)",
            QueueKind::BinaryHeap => "Dijkstra (binary-heap APQ)",
            QueueKind::Plain => "Dijkstra (plain queue)",
        }
    }

    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: G::Vertex,
        target: G::Vertex,
    ) -> Result<ClosedSet<G::Vertex, W>> {
        self.run(graph, source, target)
    }
}
