use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use location_paths::{
    reading_graph,
    search::{
        dijkstra::shortest_path,
        path::{render_outcome, ShortestPathRequest},
    },
    utility::setup_logging,
};
use tracing::info;

/// Computes a shortest path between two locations.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Edge-list file. Uses the built-in nine-location map if omitted.
    #[arg(short, long)]
    graph: Option<PathBuf>,

    /// Vertex the path starts at.
    #[arg(short, long)]
    source: u32,

    /// Vertex the path ends at.
    #[arg(short, long)]
    target: u32,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let graph = reading_graph(args.graph.as_deref()).context("failed to load graph")?;

    info!(source = args.source, target = args.target, "running query");
    let path = shortest_path(&graph, args.source, args.target)?;

    if args.json {
        let output = serde_json::json!({
            "request": ShortestPathRequest::new(args.source, args.target),
            "distance": path.as_ref().map(|path| path.distance),
            "vertices": path.as_ref().map(|path| &path.vertices),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", render_outcome(args.source, args.target, path.as_ref()));
    }

    Ok(())
}
