use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use location_paths::{reading_graph, utility::gen_test_cases, utility::setup_logging};

/// Solves random requests on a graph and stores them as JSON test cases.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Edge-list file. Uses the built-in nine-location map if omitted.
    #[arg(short, long)]
    graph: Option<PathBuf>,

    /// Number of test cases to generate.
    #[arg(short, long)]
    number_of_test_cases: u32,

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
    let test_cases = gen_test_cases(&graph, args.number_of_test_cases)?;

    let writer = BufWriter::new(
        File::create(&args.test_cases)
            .with_context(|| format!("failed to create {}", args.test_cases.display()))?,
    );
    serde_json::to_writer(writer, &test_cases)?;

    Ok(())
}
