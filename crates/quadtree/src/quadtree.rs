//! QuadTree for broad-phase spatial queries.
//!
//! Each node stores the rectangles that do not fit strictly inside one of its
//! quadrants and delegates the rest to its four children. Children are created
//! the first time a node overflows and are never merged back.

use tracing::trace;

use crate::bounds::Bounds;

/// Child slot of a split node. Y grows downward, so "top" means smaller Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    TopRight = 0,
    TopLeft = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopRight,
        Quadrant::TopLeft,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Position of this quadrant in a node's child list.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A quadtree node. The root is simply the node at level 0.
#[derive(Clone)]
pub struct QuadTree {
    bounds: Bounds,
    /// Objects a node holds before it splits.
    max_objects: usize,
    /// Depth at which nodes stop splitting and hold any number of objects.
    max_levels: usize,
    level: usize,
    objects: Vec<Bounds>,
    /// Either absent or exactly four children, indexed by `Quadrant`.
    nodes: Option<Box<[QuadTree; 4]>>,
    /// Bumped at every node an insertion passes through.
    insert_count: usize,
}

impl QuadTree {
    pub fn new(bounds: Bounds, max_objects: usize, max_levels: usize, level: usize) -> Self {
        Self {
            bounds,
            max_objects,
            max_levels,
            level,
            objects: Vec::new(),
            nodes: None,
            insert_count: 0,
        }
    }

    /// Create a root node (level 0).
    pub fn root(bounds: Bounds, max_objects: usize, max_levels: usize) -> Self {
        Self::new(bounds, max_objects, max_levels, 0)
    }

    #[inline]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    #[inline]
    pub fn max_objects(&self) -> usize {
        self.max_objects
    }

    #[inline]
    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Rectangles stored at this node only.
    #[inline]
    pub fn objects(&self) -> &[Bounds] {
        &self.objects
    }

    /// Child nodes: empty, or four entries in `Quadrant` order.
    #[inline]
    pub fn nodes(&self) -> &[QuadTree] {
        match &self.nodes {
            Some(nodes) => &nodes[..],
            None => &[],
        }
    }

    #[inline]
    pub fn is_split(&self) -> bool {
        self.nodes.is_some()
    }

    /// Number of insertions that passed through this node.
    ///
    /// On the node `insert` is called on, this equals the number of calls.
    /// On descendants it counts every rectangle that was routed through them,
    /// including ones that ended up stored further down.
    #[inline]
    pub fn insert_count(&self) -> usize {
        self.insert_count
    }

    /// Number of rectangles stored in this subtree.
    pub fn len(&self) -> usize {
        self.objects.len() + self.nodes().iter().map(QuadTree::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Determine which quadrant fully contains `rect`.
    ///
    /// Containment is strict: a rectangle touching either midpoint belongs to
    /// no quadrant and `None` is returned. This is pure geometry and does not
    /// depend on whether the node has been split.
    #[inline]
    pub fn quadrant_index(&self, rect: &Bounds) -> Option<Quadrant> {
        classify(&self.bounds, rect)
    }

    /// Create the four children. Does nothing if they already exist.
    pub fn split(&mut self) {
        if self.nodes.is_some() {
            return;
        }

        let level = self.level + 1;
        let half_w = self.bounds.width / 2.0;
        let half_h = self.bounds.height / 2.0;
        let Bounds { x, y, .. } = self.bounds;
        let (max_objects, max_levels) = (self.max_objects, self.max_levels);

        trace!(level = self.level, bounds = %self.bounds, objects = self.objects.len(), "splitting node");

        let child = |x: f64, y: f64| {
            QuadTree::new(Bounds::new(x, y, half_w, half_h), max_objects, max_levels, level)
        };

        self.nodes = Some(Box::new([
            child(x + half_w, y),
            child(x, y),
            child(x, y + half_h),
            child(x + half_w, y + half_h),
        ]));
    }

    /// Insert a rectangle.
    ///
    /// If the node overflows and is above the depth limit it splits and pushes
    /// every object that now fits a single quadrant down into that child.
    pub fn insert(&mut self, rect: Bounds) {
        self.insert_count += 1;

        let quadrant = self.quadrant_index(&rect);
        if let (Some(nodes), Some(quadrant)) = (self.nodes.as_mut(), quadrant) {
            nodes[quadrant.index()].insert(rect);
            return;
        }

        self.objects.push(rect);

        if self.objects.len() > self.max_objects && self.level < self.max_levels {
            self.split();
            self.redistribute();
        }
    }

    /// Move every held object that fits a child into it. Objects that stay
    /// keep their relative order.
    fn redistribute(&mut self) {
        let Some(nodes) = self.nodes.as_mut() else {
            return;
        };

        let pending = std::mem::take(&mut self.objects);
        for object in pending {
            match classify(&self.bounds, &object) {
                Some(quadrant) => nodes[quadrant.index()].insert(object),
                None => self.objects.push(object),
            }
        }
    }

    /// Return every stored rectangle that could overlap `query`.
    ///
    /// The result is a superset of the true overlaps; see
    /// [`QuadTree::retrieve_intersections`] for the exact set.
    pub fn retrieve(&self, query: &Bounds) -> Vec<Bounds> {
        let mut found = Vec::new();
        self.retrieve_into(query, &mut found);
        found
    }

    /// Like [`QuadTree::retrieve`] but appends into a caller-owned buffer.
    pub fn retrieve_into(&self, query: &Bounds, out: &mut Vec<Bounds>) {
        out.extend_from_slice(&self.objects);

        let Some(nodes) = &self.nodes else {
            return;
        };

        match self.quadrant_index(query) {
            Some(quadrant) => nodes[quadrant.index()].retrieve_into(query, out),
            None => {
                for node in nodes.iter() {
                    node.retrieve_into(query, out);
                }
            }
        }
    }

    /// Stored rectangles that actually overlap `query` (edges included).
    pub fn retrieve_intersections(&self, query: &Bounds) -> Vec<Bounds> {
        let mut found = self.retrieve(query);
        found.retain(|candidate| candidate.intersects(query));
        found
    }

    /// Find stored points sitting exactly at `query`'s origin.
    ///
    /// Each match yields a copy of `query` itself, not the stored point.
    pub fn retrieve_points(&self, query: &Bounds) -> Vec<Bounds> {
        self.retrieve(query)
            .into_iter()
            .filter(|candidate| {
                candidate.is_point() && candidate.x == query.x && candidate.y == query.y
            })
            .map(|_| *query)
            .collect()
    }

    /// Drop all objects and children, returning the node to its freshly
    /// constructed state.
    pub fn clear(&mut self) {
        if let Some(nodes) = self.nodes.as_mut() {
            for node in nodes.iter_mut() {
                node.clear();
            }
            trace!(level = self.level, bounds = %self.bounds, "dropping child nodes");
        }

        self.nodes = None;
        self.objects.clear();
        self.insert_count = 0;
    }

    /// Count descendant nodes, not including this one.
    pub fn total_nodes(&self) -> usize {
        self.nodes()
            .iter()
            .map(|node| 1 + node.total_nodes())
            .sum()
    }
}

fn classify(area: &Bounds, rect: &Bounds) -> Option<Quadrant> {
    let mid_x = area.x + area.width / 2.0;
    let mid_y = area.y + area.height / 2.0;

    let top = rect.y < mid_y && rect.bottom() < mid_y;
    let bottom = rect.y > mid_y;

    if rect.x < mid_x && rect.right() < mid_x {
        if top {
            return Some(Quadrant::TopLeft);
        } else if bottom {
            return Some(Quadrant::BottomLeft);
        }
    } else if rect.x > mid_x {
        if top {
            return Some(Quadrant::TopRight);
        } else if bottom {
            return Some(Quadrant::BottomRight);
        }
    }

    None
}

impl std::fmt::Debug for QuadTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuadTree")
            .field("bounds", &self.bounds)
            .field("level", &self.level)
            .field("objects", &self.objects.len())
            .field("nodes", &self.total_nodes())
            .field("insert_count", &self.insert_count)
            .finish()
    }
}
