//! Measures the running time of the edge connectivity algorithms on MatrixMarket files.
//!
//! For every input file one CSV line `file,ms,ms,...` is printed, one column per timed iteration.

use std::{
    io::{Write, stdout},
    path::PathBuf,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use edgecon::{algo::*, io::*, prelude::*};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// All-pairs push-relabel maximum flow
    MaxFlow,
    /// Stoer-Wagner minimum cut
    StoerWagner,
}

#[derive(Parser)]
#[command(name = "ec-bench")]
#[command(about = "Benchmark edge connectivity algorithms on MatrixMarket files", long_about = None)]
struct Cli {
    /// Input files in MatrixMarket coordinate format
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Algorithm to measure
    #[arg(short, long, value_enum, default_value_t = Algorithm::StoerWagner)]
    algorithm: Algorithm,

    /// Number of timed iterations per file
    #[arg(short, long, default_value_t = 20)]
    iterations: usize,

    /// Number of untimed warm-up runs per file
    #[arg(short, long, default_value_t = 2)]
    warmup: usize,

    /// Evaluate source/sink pairs in parallel (max-flow only)
    #[arg(short, long)]
    parallel: bool,
}

fn run(graph: &MultiGraph, cli: &Cli) -> NumEdges {
    match cli.algorithm {
        Algorithm::MaxFlow => MaxFlowConnectivity::new()
            .parallel(cli.parallel)
            .compute(graph),
        Algorithm::StoerWagner => graph.edge_connectivity_stoer_wagner(),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut out = stdout().lock();

    for path in &cli.files {
        let graph = MultiGraph::try_read_mtx_file(path)
            .with_context(|| format!("read {}", path.display()))?;

        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());

        info!(
            file = %name,
            n = graph.number_of_nodes(),
            m = graph.number_of_edges(),
            algorithm = ?cli.algorithm,
            "benchmarking"
        );

        for _ in 0..cli.warmup {
            run(&graph, &cli);
        }

        write!(out, "{name}")?;
        let mut lambda = 0;
        for _ in 0..cli.iterations {
            let start = Instant::now();
            lambda = run(&graph, &cli);
            let elapsed = start.elapsed();
            write!(out, ",{:.0}", elapsed.as_micros() as f64 / 1000.0)?;
        }
        writeln!(out)?;
        out.flush()?;

        info!(file = %name, edge_connectivity = lambda, "done");
    }

    Ok(())
}
