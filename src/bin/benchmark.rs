use apq_dijkstra::benchmark::{self, BenchmarkArgs, BenchmarkConfig, OutputFormat};
use clap::Parser;
use std::process;

fn main() {
    // Initialize logging
    env_logger::init();

    let config = match BenchmarkConfig::from_parsed(BenchmarkArgs::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    if config.output == OutputFormat::Table {
        println!("=====================================================");
        println!("Benchmark: Dijkstra across priority queues");
        println!("Grids per size: {}", config.repetitions);
        println!("=====================================================");
    }

    let report = match benchmark::run(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("benchmark failed: {}", e);
            process::exit(1);
        }
    };

    match config.output {
        OutputFormat::Table => print!("{}", report.render_table()),
        OutputFormat::Json => match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("cannot serialize report: {}", e);
                process::exit(1);
            }
        },
    }

    if !report.mismatches.is_empty() {
        eprintln!("queues disagreed on grid sizes {:?}", report.mismatches);
        process::exit(1);
    }
}
