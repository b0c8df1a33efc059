use std::time::Duration;

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{
    error::Result,
    graphs::{graph_functions::random_request, Graph},
    search::{
        dijkstra::shortest_path_distance,
        path::{ShortestPathRequest, ShortestPathTestCase},
    },
};

pub fn get_progressbar_long_jobs(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) =
        ProgressStyle::with_template(" {msg} {wide_bar} estimated remaining: {eta_precise}")
    {
        bar.set_style(style);
    }
    bar
}

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Installs a stderr subscriber. `RUST_LOG` overrides the default level.
pub fn setup_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

/// Draws random requests and solves them in parallel.
///
/// The graph is only read, so every rayon worker queries it independently.
pub fn gen_test_cases(
    graph: &dyn Graph,
    number_of_test_cases: u32,
) -> Result<Vec<ShortestPathTestCase>> {
    let requests: Vec<ShortestPathRequest> = {
        let mut rng = rand::thread_rng();
        (0..number_of_test_cases)
            .filter_map(|_| random_request(graph, &mut rng))
            .collect()
    };

    let bar = get_progressbar_long_jobs("Generating test cases", requests.len() as u64);
    let test_cases = requests
        .into_par_iter()
        .progress_with(bar)
        .map(|request| {
            let distance = shortest_path_distance(graph, request.source, request.target)?;
            Ok(ShortestPathTestCase { request, distance })
        })
        .collect::<Result<Vec<_>>>()?;

    info!(number_of_test_cases = test_cases.len(), "generated test cases");
    Ok(test_cases)
}
