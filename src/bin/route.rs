use std::path::PathBuf;

use apq_dijkstra::graph::reader::read_graph_file;
use apq_dijkstra::graph::Graph;
use apq_dijkstra::{Dijkstra, QueueKind};
use clap::Parser;

/// Shortest paths from one node of a graph file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph file in the Node/Edge record format
    graph: PathBuf,
    /// Source node id
    source: u64,
    /// Target node id
    target: u64,
    /// Priority queue driving the search
    #[arg(short, long, value_enum, default_value_t = QueueKind::BinaryHeap)]
    queue: QueueKind,
    /// Stop once the target is finalized
    #[arg(long)]
    early_stop: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    let (source, target) = (args.source, args.target);
    let graph = read_graph_file(&args.graph)?;

    println!(
        "Graph has {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    if let Some(hub) = graph.highest_degree_vertex() {
        println!("Highest degree vertex: {} ({} edges)", hub, graph.degree(hub));
    }

    let dijkstra = Dijkstra::new().with_queue(args.queue).with_early_stop(args.early_stop);
    let closed = dijkstra.run(&graph, source, target)?;

    println!("\nShortest distances from {} ({} queue):", source, args.queue);
    for (vertex, distance, _) in closed.iter() {
        println!("  {:>8}: {}", vertex, distance);
    }

    println!("\nShortest paths:");
    for &vertex in closed.finalization_order() {
        if vertex == source {
            continue;
        }
        if let Some(path) = closed.path_to(vertex) {
            let hops: Vec<String> = path.iter().map(|v| v.to_string()).collect();
            println!("  {}", hops.join(" -> "));
        }
    }

    match closed.get(target) {
        Some((distance, predecessor)) => {
            println!("\nDistance to {} is {}", target, distance);
            match predecessor {
                Some(p) => println!("And {}'s predecessor is {}", target, p),
                None => println!("{} is the source", target),
            }
        }
        None => println!("\n{} is not reachable from {}", target, source),
    }

    Ok(())
}
