//! Randomized workload against a single tree.

use glam::DVec2;
use quadtree::{Bounds, QuadTree, Quadrant};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::WorkloadConfig;

/// Summary of one workload run.
#[derive(Debug, Default)]
pub struct Report {
    pub inserted: usize,
    pub nodes: usize,
    pub candidates: usize,
    pub hits: usize,
    pub everything: usize,
}

pub struct Workload {
    config: WorkloadConfig,
    rng: StdRng,
}

impl Workload {
    pub fn new(config: WorkloadConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { config, rng }
    }

    /// A grid-snapped rectangle whose corner lies inside `area`, 1 to 4 grid
    /// cells on a side.
    fn random_rect(&mut self, area: &Bounds) -> Bounds {
        let grid = self.config.grid;
        let cells = DVec2::new(area.width / grid, area.height / grid);
        let corner = DVec2::new(
            self.rng.random_range(0.0..cells.x.max(f64::MIN_POSITIVE)),
            self.rng.random_range(0.0..cells.y.max(f64::MIN_POSITIVE)),
        );
        let size = DVec2::new(self.rng.random_range(1.0..4.0), self.rng.random_range(1.0..4.0));
        Bounds::from_origin_size(area.origin() + corner * grid, size * grid)
    }

    /// Fill `tree`, query it and finally clear it.
    pub fn run(&mut self, tree: &mut QuadTree) -> anyhow::Result<Report> {
        let area = *tree.bounds();
        let mut report = Report::default();

        for _ in 0..self.config.objects {
            let rect = self.random_rect(&area);
            tree.insert(rect);
        }
        report.inserted = tree.insert_count();
        report.nodes = tree.total_nodes();

        info!(
            inserted = report.inserted,
            stored = tree.len(),
            nodes = report.nodes,
            "Inserted objects"
        );
        for quadrant in Quadrant::ALL {
            if let Some(node) = tree.nodes().get(quadrant.index()) {
                debug!(?quadrant, routed = node.insert_count(), stored = node.len(), "Quadrant");
            }
        }

        let mut buf = Vec::new();
        for _ in 0..self.config.queries {
            let corner = self.random_rect(&area).origin();
            let size = DVec2::splat(self.config.query_size);
            let query = Bounds::from_origin_size(corner, size);

            buf.clear();
            tree.retrieve_into(&query, &mut buf);
            let hits = buf.iter().filter(|candidate| candidate.intersects(&query)).count();
            debug!(%query, candidates = buf.len(), hits, "Query");

            report.candidates += buf.len();
            report.hits += hits;
        }
        if self.config.queries > 0 {
            let queries = self.config.queries as f64;
            info!(
                queries = self.config.queries,
                avg_candidates = report.candidates as f64 / queries,
                avg_hits = report.hits as f64 / queries,
                "Ran queries"
            );
        }

        // Rectangles may stick out of the root by up to four grid cells.
        let pad = 4.0 * self.config.grid;
        let all = Bounds::new(area.x - pad, area.y - pad, area.width + 2.0 * pad, area.height + 2.0 * pad);
        report.everything = tree.retrieve(&all).len();
        anyhow::ensure!(
            report.everything == self.config.objects,
            "whole-world query returned {} of {} objects",
            report.everything,
            self.config.objects
        );
        info!(returned = report.everything, "Whole-world query returned every object");

        tree.clear();
        info!(nodes = tree.total_nodes(), inserted = tree.insert_count(), "Cleared tree");

        Ok(report)
    }
}
