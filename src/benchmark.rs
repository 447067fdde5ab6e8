//! Timing harness comparing the queue implementations on random grid graphs
//!
//! For every grid size `n`, `repetitions` random `n x n` grids are generated and
//! searched from the north-west corner `(0, 0)` towards the centre `(n/2, n/2)`
//! with each selected queue and early-stop mode. Every run is an independent,
//! sequential invocation; the same grids are reused across queues so their
//! results can be cross-checked.

use std::ffi::OsString;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::algorithm::dijkstra::{Dijkstra, QueueKind};
use crate::graph::generators::{weighted_grid_with_rng, GridVertex};
use crate::graph::UndirectedGraph;
use crate::{Error, Result};

/// How the report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Early-stop settings to benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EarlyStop {
    /// Stop once the target is finalized
    On,
    /// Drain the whole grid
    Off,
    /// Run both modes
    Both,
}

impl EarlyStop {
    pub fn modes(self) -> Vec<bool> {
        match self {
            EarlyStop::On => vec![true],
            EarlyStop::Off => vec![false],
            EarlyStop::Both => vec![false, true],
        }
    }
}

/// Times Dijkstra with each priority queue on random grid graphs
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct BenchmarkArgs {
    /// Grid side lengths to test
    #[arg(long, value_delimiter = ',', default_values_t = [20, 40, 60, 80, 100, 120, 140, 160, 180, 200])]
    pub sizes: Vec<usize>,

    /// Grids generated per size
    #[arg(long, default_value_t = 10)]
    pub reps: usize,

    /// Queue implementations to compare
    #[arg(long, value_enum, value_delimiter = ',', default_values_t = QueueKind::ALL)]
    pub queues: Vec<QueueKind>,

    /// Early-stop settings to run each queue with
    #[arg(long, value_enum, default_value_t = EarlyStop::Off)]
    pub early_stop: EarlyStop,

    /// Seed for grid generation; random when absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Grid side lengths to test
    pub sizes: Vec<usize>,
    /// Grids generated per size
    pub repetitions: usize,
    /// Queue implementations to compare
    pub queues: Vec<QueueKind>,
    /// Early-stop settings to run each queue with
    pub stop_modes: Vec<bool>,
    /// Seed for grid generation; random when absent
    pub seed: Option<u64>,
    pub output: OutputFormat,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: (20..=200).step_by(20).collect(),
            repetitions: 10,
            queues: QueueKind::ALL.to_vec(),
            stop_modes: vec![false],
            seed: None,
            output: OutputFormat::Table,
        }
    }
}

impl From<BenchmarkArgs> for BenchmarkConfig {
    fn from(args: BenchmarkArgs) -> Self {
        Self {
            sizes: args.sizes,
            repetitions: args.reps,
            queues: args.queues,
            stop_modes: args.early_stop.modes(),
            seed: args.seed,
            output: if args.json { OutputFormat::Json } else { OutputFormat::Table },
        }
    }
}

impl BenchmarkConfig {
    /// Builds a validated configuration from command line arguments (program name excluded)
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv = std::iter::once(OsString::from("benchmark")).chain(args.into_iter().map(Into::into));
        let args = BenchmarkArgs::try_parse_from(argv).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        Self::from_parsed(args)
    }

    /// Converts parsed arguments, rejecting values clap cannot check
    pub fn from_parsed(args: BenchmarkArgs) -> Result<Self> {
        let config = Self::from(args);
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that would produce an empty or meaningless report
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() || self.sizes.contains(&0) {
            return Err(Error::InvalidConfig("grid sizes must be non-empty and positive".into()));
        }
        if self.repetitions == 0 {
            return Err(Error::InvalidConfig("repetitions must be positive".into()));
        }
        if self.queues.is_empty() || self.stop_modes.is_empty() {
            return Err(Error::InvalidConfig("at least one queue and early-stop mode is required".into()));
        }
        Ok(())
    }
}

/// Timing of one queue / early-stop combination on one grid size
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkRow {
    pub size: usize,
    pub queue: QueueKind,
    pub stop_at_target: bool,
    /// Mean wall time per search in milliseconds
    pub mean_ms: f64,
    /// Distance to the centre vertex on the first grid
    pub target_distance: f64,
    /// Vertices closed, averaged over the grids
    pub mean_closed: f64,
    /// Largest queue length seen across the grids
    pub peak_queue_len: usize,
    /// Stale queue entries skipped, summed over the grids
    pub stale_skips: usize,
}

/// Full benchmark output
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub generated_at: DateTime<Utc>,
    pub repetitions: usize,
    pub seed: Option<u64>,
    pub rows: Vec<BenchmarkRow>,
    /// Grid sizes where queues disagreed on a target distance
    pub mismatches: Vec<usize>,
}

impl BenchmarkReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Renders the report as a fixed-width table
    pub fn render_table(&self) -> String {
        let mut out = format!(
            "{:<10} | {:<14} | {:<10} | {:<12} | {:<10} | {:<10} | {:<8}\n",
            "Grid", "Queue", "Early stop", "Mean (ms)", "Distance", "Closed", "Stale"
        );
        out.push_str(&"-".repeat(90));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&format!(
                "{:<10} | {:<14} | {:<10} | {:<12.3} | {:<10} | {:<10.1} | {:<8}\n",
                format!("{}x{}", row.size, row.size),
                row.queue.name(),
                row.stop_at_target,
                row.mean_ms,
                row.target_distance,
                row.mean_closed,
                row.stale_skips
            ));
        }
        out
    }
}

/// Runs the benchmark described by `config`
pub fn run(config: &BenchmarkConfig) -> Result<BenchmarkReport> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut rows = Vec::new();
    let mut mismatches = Vec::new();

    for &size in &config.sizes {
        info!("Generating {} grids of {}x{}", config.repetitions, size, size);
        let grids: Vec<UndirectedGraph<GridVertex, f64>> = (0..config.repetitions)
            .map(|_| weighted_grid_with_rng(size, size, &mut rng))
            .collect();
        let source = (0, 0);
        let target = (size / 2, size / 2);

        let mut reference: Option<Vec<f64>> = None;
        let mut agreed = true;

        for &stop in &config.stop_modes {
            for &queue in &config.queues {
                let dijkstra = Dijkstra::new().with_queue(queue).with_early_stop(stop);
                let mut total = Duration::ZERO;
                let mut distances = Vec::with_capacity(grids.len());
                let mut closed_total = 0;
                let mut peak_queue_len = 0;
                let mut stale_skips = 0;

                for grid in &grids {
                    let start = Instant::now();
                    let closed = dijkstra.run(grid, source, target)?;
                    total += start.elapsed();

                    distances.push(closed.distance(target));
                    closed_total += closed.len();
                    peak_queue_len = peak_queue_len.max(closed.stats().peak_queue_len);
                    stale_skips += closed.stats().stale_skips;
                }

                if reference.is_none() {
                    reference = Some(distances.clone());
                } else if reference.as_ref() != Some(&distances) {
                    error!("{} (early stop: {}) disagrees on {}x{} grids", queue, stop, size, size);
                    agreed = false;
                }

                let runs = grids.len() as f64;
                rows.push(BenchmarkRow {
                    size,
                    queue,
                    stop_at_target: stop,
                    mean_ms: total.as_secs_f64() * 1000.0 / runs,
                    target_distance: distances[0],
                    mean_closed: closed_total as f64 / runs,
                    peak_queue_len,
                    stale_skips,
                });
            }
        }

        if !agreed {
            mismatches.push(size);
        }
    }

    Ok(BenchmarkReport {
        generated_at: Utc::now(),
        repetitions: config.repetitions,
        seed: config.seed,
        rows,
        mismatches,
    })
}
