use std::{
    fs::File,
    io::BufReader,
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{bail, Context};
use clap::Parser;
use indicatif::ProgressIterator;
use location_paths::{
    graphs::graph_functions::validate_path,
    reading_graph,
    search::{dijkstra::Dijkstra, path::ShortestPathTestCase, PathFinding},
    utility::setup_logging,
};
use tracing::warn;

/// Checks stored test cases against fresh queries and reports timings.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Edge-list file. Uses the built-in nine-location map if omitted.
    #[arg(short, long)]
    graph: Option<PathBuf>,

    /// Path of test cases
    #[arg(short, long)]
    test_cases: PathBuf,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let graph = reading_graph(args.graph.as_deref()).context("failed to load graph")?;
    let test_cases: Vec<ShortestPathTestCase> = {
        let reader = BufReader::new(
            File::open(&args.test_cases)
                .with_context(|| format!("failed to open {}", args.test_cases.display()))?,
        );
        serde_json::from_reader(reader)?
    };

    let dijkstra = Dijkstra::new(&graph);
    let mut durations = Vec::new();
    let mut failures = 0;

    for test_case in test_cases.iter().progress() {
        let start = Instant::now();
        let path = dijkstra.shortest_path(&test_case.request)?;
        durations.push(start.elapsed());

        if let Err(message) = validate_path(&graph, test_case, &path) {
            warn!(request = ?test_case.request, "{}", message);
            failures += 1;
        }
    }

    if !durations.is_empty() {
        println!(
            "Average duration {:?}",
            durations.iter().sum::<Duration>() / durations.len() as u32
        );
    }
    if failures > 0 {
        bail!("{} of {} test cases failed", failures, test_cases.len());
    }
    println!("All {} test cases passed", test_cases.len());

    Ok(())
}
