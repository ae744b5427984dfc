//! Quadtree workload driver.
//!
//! Builds a tree from `qtree.toml` (or the path given as the first argument),
//! fills it with random rectangles and reports how queries behave.

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod workload;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("qtree v{}", env!("CARGO_PKG_VERSION"));

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("qtree.toml"));
    let config = config::Config::load(&path)?;
    info!("Loaded configuration");
    info!("  Bounds: {}", config.tree.bounds);
    info!("  Max objects: {}", config.tree.max_objects);
    info!("  Max levels: {}", config.tree.max_levels);

    let mut tree = config.tree.build();
    let report = workload::Workload::new(config.workload).run(&mut tree)?;
    info!(
        inserted = report.inserted,
        nodes = report.nodes,
        candidates = report.candidates,
        hits = report.hits,
        returned = report.everything,
        "Done"
    );

    Ok(())
}
