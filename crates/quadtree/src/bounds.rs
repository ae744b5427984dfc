//! Axis-aligned rectangles.
//!
//! Coordinates are Y-down: `y` is the top edge and `y + height` the bottom.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box given by its top-left corner and extent.
///
/// A box with zero width and zero height is a point. There is no identity
/// beyond geometry: two boxes with the same coordinates compare equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create a zero-sized box at the given position.
    #[inline]
    pub const fn point(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, 0.0)
    }

    /// Create bounds from a corner position and a size vector.
    #[inline]
    pub fn from_origin_size(origin: DVec2, size: DVec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True if both width and height are exactly zero.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Check if two bounds overlap. Boxes that only share an edge count as
    /// overlapping.
    #[inline]
    pub fn intersects(&self, other: &Bounds) -> bool {
        !(other.x > self.right()
            || other.right() < self.x
            || other.y > self.bottom()
            || other.bottom() < self.y)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bounds({}, {}, {}x{})",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_intersects() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(5.0, 5.0, 10.0, 10.0);
        let c = Bounds::new(20.0, 20.0, 10.0, 10.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));
    }

    #[test]
    fn test_touching_edges_intersect() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let right = Bounds::new(10.0, 0.0, 5.0, 10.0);
        let below = Bounds::new(0.0, 10.0, 10.0, 5.0);
        let corner = Bounds::new(10.0, 10.0, 5.0, 5.0);

        assert!(a.intersects(&right));
        assert!(right.intersects(&a));
        assert!(a.intersects(&below));
        assert!(below.intersects(&a));
        assert!(a.intersects(&corner));
    }

    #[test]
    fn test_separated_by_each_axis() {
        let a = Bounds::new(10.0, 10.0, 10.0, 10.0);

        assert!(!a.intersects(&Bounds::new(20.5, 10.0, 1.0, 1.0)));
        assert!(!a.intersects(&Bounds::new(8.0, 10.0, 1.0, 1.0)));
        assert!(!a.intersects(&Bounds::new(10.0, 20.5, 1.0, 1.0)));
        assert!(!a.intersects(&Bounds::new(10.0, 8.0, 1.0, 1.0)));
    }

    #[test]
    fn test_point_inside_box() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);

        assert!(a.intersects(&Bounds::point(5.0, 5.0)));
        assert!(a.intersects(&Bounds::point(10.0, 10.0)));
        assert!(!a.intersects(&Bounds::point(10.5, 5.0)));
    }

    #[test]
    fn test_is_point() {
        assert!(Bounds::point(3.0, 4.0).is_point());
        assert!(!Bounds::new(3.0, 4.0, 0.0, 1.0).is_point());
        assert!(!Bounds::new(3.0, 4.0, 1.0, 0.0).is_point());
    }

    #[test]
    fn test_edges_and_center() {
        let b = Bounds::from_origin_size(DVec2::new(2.0, 4.0), DVec2::new(6.0, 8.0));

        assert_eq!(b.right(), 8.0);
        assert_eq!(b.bottom(), 12.0);
        assert_eq!(b.origin(), DVec2::new(2.0, 4.0));
        assert_eq!(b.center(), DVec2::new(5.0, 8.0));
        assert_eq!(b.to_string(), "Bounds(2, 4, 6x8)");
    }
}
