//! Region quadtree for axis-aligned rectangles.
//!
//! This crate contains:
//! - `Bounds`, the rectangle (or point) being indexed
//! - `QuadTree`, the recursive node with broad-phase and exact retrieval
//! - `TreeConfig`, a serde-backed way to describe a root node

mod bounds;
mod config;
mod error;
mod quadtree;

pub use bounds::Bounds;
pub use config::TreeConfig;
pub use error::ConfigError;
pub use quadtree::{QuadTree, Quadrant};
