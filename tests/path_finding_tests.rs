use apq_dijkstra::algorithm::dijkstra::{shortest_paths, Dijkstra, QueueKind};
use apq_dijkstra::algorithm::frontier::{AdaptableFrontier, DuplicatingFrontier};
use apq_dijkstra::algorithm::ShortestPathAlgorithm;
use apq_dijkstra::data_structures::{BinaryHeapApq, PlainQueue, UnsortedListApq};
use apq_dijkstra::graph::generators::{weighted_grid_with_rng, GridVertex};
use apq_dijkstra::graph::{Graph, MutableGraph, UndirectedGraph};
use clap::ValueEnum;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{BTreeSet, HashMap};

type W = OrderedFloat<f64>;

fn w(x: f64) -> W {
    OrderedFloat(x)
}

// A - B (1) - C (2) - D (3)
fn create_path_graph() -> UndirectedGraph<char, W> {
    UndirectedGraph::from_edges(vec![('A', 'B', w(1.0)), ('B', 'C', w(2.0)), ('C', 'D', w(3.0))])
}

// Classic example with a shortcut that is longer than the detour
fn create_diamond_graph() -> UndirectedGraph<u32, f64> {
    UndirectedGraph::from_edges(vec![
        (0, 1, 4.0),
        (0, 2, 1.0),
        (2, 1, 2.0),
        (1, 3, 1.0),
        (2, 3, 5.0),
        (3, 4, 3.0),
    ])
}

fn seeded_grid(rows: usize, cols: usize, seed: u64) -> UndirectedGraph<GridVertex, f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    weighted_grid_with_rng(rows, cols, &mut rng)
}

/// Reference distances by exhaustive relaxation (Bellman-Ford style)
fn reference_distances<G: Graph<f64>>(graph: &G, source: G::Vertex) -> HashMap<G::Vertex, f64> {
    let mut dist: HashMap<G::Vertex, f64> = graph.vertices().map(|v| (v, f64::INFINITY)).collect();
    dist.insert(source, 0.0);
    loop {
        let mut changed = false;
        for u in graph.vertices() {
            let du = dist[&u];
            for (v, c) in graph.incident_edges(u) {
                if du + c < dist[&v] {
                    dist.insert(v, du + c);
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}

#[test]
fn test_path_graph_distances_and_predecessors() {
    let graph = create_path_graph();

    for queue in QueueKind::ALL {
        let closed = Dijkstra::new().with_queue(queue).run(&graph, 'A', 'D').unwrap();

        assert_eq!(closed.get('A'), Some((w(0.0), None)), "{}", queue);
        assert_eq!(closed.get('B'), Some((w(1.0), Some('A'))), "{}", queue);
        assert_eq!(closed.get('C'), Some((w(3.0), Some('B'))), "{}", queue);
        assert_eq!(closed.get('D'), Some((w(6.0), Some('C'))), "{}", queue);
        assert_eq!(closed.finalization_order(), &['A', 'B', 'C', 'D']);
        assert_eq!(closed.path_to('D'), Some(vec!['A', 'B', 'C', 'D']));
    }
}

#[test]
fn test_detour_beats_direct_edge() {
    let graph = create_diamond_graph();
    let dijkstra = Dijkstra::new();
    let closed = dijkstra.compute_shortest_paths(&graph, 0, 4).unwrap();

    assert_eq!(closed.distance(1), 3.0);
    assert_eq!(closed.predecessor(1), Some(2));
    assert_eq!(closed.distance(3), 4.0);
    assert_eq!(closed.distance(4), 7.0);

    let path = <Dijkstra as ShortestPathAlgorithm<f64, UndirectedGraph<u32, f64>>>::get_path(&dijkstra, &closed, 4);
    assert_eq!(path, Some(vec![0, 2, 1, 3, 4]));
}

#[test]
fn test_finalization_order_is_nondecreasing() {
    let graph = seeded_grid(15, 15, 3);
    for queue in QueueKind::ALL {
        let closed = Dijkstra::new().with_queue(queue).run(&graph, (0, 0), (14, 14)).unwrap();
        let distances: Vec<f64> = closed.iter().map(|(_, d, _)| d).collect();
        assert_eq!(distances.len(), graph.vertex_count());
        assert!(distances.windows(2).all(|p| p[0] <= p[1]), "{}", queue);
    }
}

#[test]
fn test_all_queues_agree_with_reference() {
    for seed in 0..5 {
        let graph = seeded_grid(12, 9, seed);
        let source = (3, 4);
        let expected = reference_distances(&graph, source);

        let mut tables = Vec::new();
        for queue in QueueKind::ALL {
            let closed = Dijkstra::new().with_queue(queue).run(&graph, source, (0, 0)).unwrap();
            assert_eq!(closed.len(), graph.vertex_count());
            for v in graph.vertices() {
                assert_eq!(closed.distance(v), expected[&v], "{} at {:?}", queue, v);
            }
            tables.push(closed.distances());
        }
        assert!(tables.windows(2).all(|t| t[0] == t[1]));
    }
}

#[test]
fn test_paths_sum_to_distances() {
    let graph = seeded_grid(10, 10, 42);
    let closed = Dijkstra::new().run(&graph, (0, 0), (9, 9)).unwrap();

    for v in graph.vertices() {
        let path = closed.path_to(v).expect("grid is connected");
        assert_eq!(path.first(), Some(&(0, 0)));
        assert_eq!(path.last(), Some(&v));
        let length: f64 = path
            .windows(2)
            .map(|hop| graph.edge_weight(hop[0], hop[1]).expect("path uses graph edges"))
            .sum();
        assert_eq!(length, closed.distance(v));
    }
}

#[test]
fn test_early_stop_returns_prefix_of_full_run() {
    let graph = seeded_grid(20, 20, 9);
    let source = (0, 0);
    let target = (10, 10);

    for queue in QueueKind::ALL {
        let full = Dijkstra::new().with_queue(queue).run(&graph, source, target).unwrap();
        let early = Dijkstra::new()
            .with_queue(queue)
            .with_early_stop(true)
            .run(&graph, source, target)
            .unwrap();

        assert!(early.len() <= full.len());
        assert_eq!(early.finalization_order(), &full.finalization_order()[..early.len()]);
        assert_eq!(early.finalization_order().last(), Some(&target));
        assert_eq!(early.distance(target), full.distance(target));
        for (v, d, _) in early.iter() {
            assert!(full.contains(v));
            assert_eq!(d, full.distance(v));
            assert!(d <= early.distance(target));
        }

        let path = early.path_to(target).unwrap();
        assert_eq!(path.first(), Some(&source));
        assert_eq!(path.last(), Some(&target));
    }
}

#[test]
fn test_early_stop_at_source() {
    let graph = create_path_graph();
    let closed = Dijkstra::new().with_early_stop(true).run(&graph, 'A', 'A').unwrap();
    assert_eq!(closed.len(), 1);
    assert_eq!(closed.path_to('A'), Some(vec!['A']));
}

#[test]
fn test_disconnected_vertex() {
    let mut graph = create_path_graph();
    graph.add_vertex('E');

    for queue in QueueKind::ALL {
        let closed = Dijkstra::new().with_queue(queue).run(&graph, 'A', 'E').unwrap();
        assert!(!closed.contains('E'));
        assert!(closed.distance('E').is_infinite());
        assert_eq!(closed.path_to('E'), None);
        assert_eq!(closed.len(), 4);

        let drained = Dijkstra::new()
            .with_queue(queue)
            .with_unreachable_included(true)
            .run(&graph, 'A', 'E')
            .unwrap();
        assert_eq!(drained.get('E'), Some((w(f64::INFINITY), None)));
        assert_eq!(drained.len(), 5);
        assert_eq!(drained.path_to('E'), None);
    }
}

#[test]
fn test_unreachable_target_with_early_stop_drains_component() {
    let mut graph = create_path_graph();
    graph.add_vertex('E');
    let closed = Dijkstra::new()
        .with_early_stop(true)
        .with_unreachable_included(true)
        .run(&graph, 'B', 'E')
        .unwrap();

    let closed_vertices: BTreeSet<char> = closed.finalization_order().iter().copied().collect();
    assert_eq!(closed_vertices, ['A', 'B', 'C', 'D'].into_iter().collect::<BTreeSet<char>>());
}

#[test]
fn test_missing_source_yields_empty_result() {
    let graph = create_path_graph();
    for queue in QueueKind::ALL {
        let closed = Dijkstra::new()
            .with_queue(queue)
            .with_unreachable_included(true)
            .run(&graph, 'Z', 'A')
            .unwrap();
        assert!(closed.is_empty());
        assert!(closed.distance('A').is_infinite());
    }
}

#[test]
fn test_plain_queue_skips_stale_entries() {
    // Hub with a direct expensive edge and a cheaper detour to each spoke
    let mut graph: UndirectedGraph<u32, f64> = UndirectedGraph::new();
    for v in 0..=6 {
        graph.add_vertex(v);
    }
    graph.add_edge(0, 1, 1.0);
    for spoke in 2..=6 {
        graph.add_edge(0, spoke, 100.0);
        graph.add_edge(1, spoke, 1.0);
    }

    let plain = Dijkstra::new().with_queue(QueueKind::Plain).run(&graph, 0, 6).unwrap();
    let heap = Dijkstra::new().with_queue(QueueKind::BinaryHeap).run(&graph, 0, 6).unwrap();

    assert_eq!(plain.distances(), heap.distances());
    assert_eq!(plain.stats().stale_skips, 5);
    assert_eq!(plain.stats().updates, 0);
    assert_eq!(heap.stats().stale_skips, 0);
    assert_eq!(heap.stats().updates, 5);
    assert_eq!(plain.stats().insertions, heap.stats().insertions + 5);
}

#[test]
fn test_engine_accepts_explicit_frontiers() {
    let graph = create_diamond_graph();

    let unsorted = shortest_paths(&graph, 0, 4, AdaptableFrontier::new(UnsortedListApq::<f64, u32>::new()), false).unwrap();
    let heap = shortest_paths(&graph, 0, 4, AdaptableFrontier::new(BinaryHeapApq::<f64, u32>::new()), false).unwrap();
    let plain = shortest_paths(&graph, 0, 4, DuplicatingFrontier::new(PlainQueue::<f64, u32>::new()), false).unwrap();

    assert_eq!(unsorted.distances(), heap.distances());
    assert_eq!(heap.distances(), plain.distances());
    assert_eq!(heap.predecessors(), plain.predecessors());
}

#[test]
fn test_zero_weight_edges() {
    let graph: UndirectedGraph<u8, f64> =
        UndirectedGraph::from_edges(vec![(0, 1, 0.0), (1, 2, 0.0), (0, 2, 1.0)]);
    let closed = Dijkstra::new().with_queue(QueueKind::UnsortedList).run(&graph, 0, 2).unwrap();
    assert_eq!(closed.distance(2), 0.0);
    assert_eq!(closed.path_to(2), Some(vec![0, 1, 2]));
}

#[test]
fn test_queue_kind_names_round_trip() {
    for queue in QueueKind::ALL {
        assert_eq!(QueueKind::from_str(queue.name(), false).unwrap(), queue);
        assert_eq!(queue.to_string(), queue.name());
    }
    assert_eq!(QueueKind::from_str("heap", false).unwrap(), QueueKind::BinaryHeap);
    assert_eq!(QueueKind::from_str("unsorted", false).unwrap(), QueueKind::UnsortedList);
    assert!(QueueKind::BinaryHeap.is_adaptable());
    assert!(!QueueKind::Plain.is_adaptable());
    assert!(QueueKind::from_str("fibonacci", false).is_err());
}
