//! Extracts the subgraph induced by a `1`-indexed node range from a MatrixMarket file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use edgecon::io::RangeReducer;
use tracing::info;

#[derive(Parser)]
#[command(name = "mtx-reduce")]
#[command(about = "Reduce a MatrixMarket graph to a contiguous range of vertices", long_about = None)]
struct Cli {
    /// Input file in MatrixMarket coordinate format
    input: PathBuf,

    /// Output file
    output: PathBuf,

    /// First vertex to keep (1-indexed)
    start: u32,

    /// Last vertex to keep (inclusive)
    end: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let reducer = RangeReducer::new(cli.start, cli.end)?;
    let entries = reducer
        .reduce_file(&cli.input, &cli.output)
        .with_context(|| {
            format!(
                "reduce {} into {}",
                cli.input.display(),
                cli.output.display()
            )
        })?;

    info!(
        output = %cli.output.display(),
        nodes = reducer.number_of_nodes(),
        entries,
        "wrote reduced graph"
    );

    Ok(())
}
