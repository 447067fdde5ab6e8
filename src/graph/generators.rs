use crate::graph::{MutableGraph, UndirectedGraph};
use num_traits::{Float, Zero};
use rand::prelude::*;
use std::fmt::Debug;

/// Grid vertex label: (row, column)
pub type GridVertex = (usize, usize);

/// Upper bound for random grid edge weights: half the longer side, at least 1
pub fn max_grid_weight(rows: usize, cols: usize) -> u32 {
    (rows.max(cols) / 2).max(1) as u32
}

/// Generates a `rows x cols` grid graph with random integer edge weights
///
/// Vertex `(i, j)` is connected to its south neighbour `(i + 1, j)` and its east
/// neighbour `(i, j + 1)`. Weights are drawn uniformly from `1..=max(rows, cols) / 2`.
pub fn weighted_grid(rows: usize, cols: usize) -> UndirectedGraph<GridVertex, f64> {
    let mut rng = rand::thread_rng();
    weighted_grid_with_rng(rows, cols, &mut rng)
}

/// Generates a weighted grid graph drawing its weights from the given RNG
pub fn weighted_grid_with_rng<W, R>(rows: usize, cols: usize, rng: &mut R) -> UndirectedGraph<GridVertex, W>
where
    W: Float + Zero + Debug + Copy,
    R: Rng,
{
    let max_weight = max_grid_weight(rows, cols);
    let mut graph = UndirectedGraph::with_capacity(rows * cols);

    for i in 0..rows {
        for j in 0..cols {
            graph.add_vertex((i, j));
        }
    }

    let mut random_weight = || num_traits::cast::<u32, W>(rng.gen_range(1..=max_weight)).unwrap_or_else(W::one);

    for i in 0..rows {
        for j in 0..cols {
            if i + 1 < rows {
                let weight = random_weight();
                graph.add_edge((i, j), (i + 1, j), weight);
            }
            if j + 1 < cols {
                let weight = random_weight();
                graph.add_edge((i, j), (i, j + 1), weight);
            }
        }
    }

    graph
}
