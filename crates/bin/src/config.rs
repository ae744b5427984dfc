//! Driver configuration.

use std::path::Path;

use quadtree::TreeConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,
    #[serde(default)]
    pub workload: WorkloadConfig,
}

impl Config {
    /// Load configuration from `path` or create it with defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            info!("No {} found, creating default config", path.display());
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            Ok(default_config)
        }
    }
}

/// Randomized insert/query workload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkloadConfig {
    /// Rectangles to insert.
    #[serde(default = "default_objects")]
    pub objects: usize,
    /// Positions and sizes snap to multiples of this.
    #[serde(default = "default_grid")]
    pub grid: f64,
    /// Random queries to run after inserting.
    #[serde(default = "default_queries")]
    pub queries: usize,
    /// Side length of each query square.
    #[serde(default = "default_query_size")]
    pub query_size: f64,
    /// RNG seed. Omit for a different run each time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            objects: default_objects(),
            grid: default_grid(),
            queries: default_queries(),
            query_size: default_query_size(),
            seed: None,
        }
    }
}

fn default_objects() -> usize {
    1000
}
fn default_grid() -> f64 {
    10.0
}
fn default_queries() -> usize {
    20
}
fn default_query_size() -> f64 {
    100.0
}
