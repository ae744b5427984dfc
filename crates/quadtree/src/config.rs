//! Tree configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::bounds::Bounds;
use crate::error::ConfigError;
use crate::quadtree::QuadTree;

/// Parameters of a root node.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TreeConfig {
    /// Objects a node holds before splitting.
    #[serde(default = "default_max_objects")]
    pub max_objects: usize,
    /// Deepest level that may still split.
    #[serde(default = "default_max_levels")]
    pub max_levels: usize,
    /// Area covered by the root node.
    #[serde(default = "default_bounds")]
    pub bounds: Bounds,
}

impl TreeConfig {
    /// Parse a configuration from TOML text. Missing keys use defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.check_bounds();
        Ok(config)
    }

    /// Load configuration from `path`, writing the defaults there if the file
    /// does not exist yet.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Self::from_toml_str(&contents)
        } else {
            info!("No {} found, creating default config", path.display());
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            Ok(default_config)
        }
    }

    /// Build an empty root node.
    pub fn build(&self) -> QuadTree {
        QuadTree::root(self.bounds, self.max_objects, self.max_levels)
    }

    fn check_bounds(&self) {
        if self.bounds.width < 0.0 || self.bounds.height < 0.0 {
            warn!(bounds = %self.bounds, "root bounds have a negative extent, queries will be meaningless");
        }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_objects: default_max_objects(),
            max_levels: default_max_levels(),
            bounds: default_bounds(),
        }
    }
}

fn default_bounds() -> Bounds {
    Bounds::new(0.0, 0.0, 640.0, 480.0)
}
fn default_max_objects() -> usize {
    10
}
fn default_max_levels() -> usize {
    4
}
