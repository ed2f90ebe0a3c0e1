//! Axis-aligned rectangles with inclusive bounds.

use serde::{Deserialize, Serialize};

use crate::Coord;

/// Axis-aligned rectangle.
///
/// Built from any two opposite corners; stored normalized so that
/// `min <= max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum corner.
    pub min: Coord,
    /// Maximum corner.
    pub max: Coord,
}

impl Rect {
    /// Creates a rectangle spanning two opposite corners.
    ///
    /// ```
    /// use sightline_geom::{Coord, Rect};
    ///
    /// let r = Rect::new(Coord::new(10.0, -10.0), Coord::new(-10.0, 10.0));
    /// assert_eq!(r.min, Coord::new(-10.0, -10.0));
    /// assert_eq!(r.max, Coord::new(10.0, 10.0));
    /// ```
    #[must_use]
    pub fn new(corner: Coord, opposite: Coord) -> Self {
        Self {
            min: corner.min(opposite),
            max: corner.max(opposite),
        }
    }

    /// Square of half-size `half` centered at the origin.
    #[must_use]
    pub fn centered(half: f64) -> Self {
        Self::new(Coord::splat(-half), Coord::splat(half))
    }

    /// True iff `p` lies within the bounds, edges included.
    #[must_use]
    pub fn contains(&self, p: Coord) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    /// Extent along X.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along Y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Midpoint.
    #[must_use]
    pub fn center(&self) -> Coord {
        (self.min + self.max) * 0.5
    }

    /// True when the rectangle has positive, finite area.
    #[must_use]
    pub fn is_proper(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.width() > 0.0 && self.height() > 0.0
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::centered(10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let r = Rect::default();
        assert!(r.contains(Coord::new(10.0, 0.0)));
        assert!(r.contains(Coord::new(-10.0, -10.0)));
        assert!(!r.contains(Coord::new(10.000_001, 0.0)));
        assert!(!r.contains(Coord::new(0.0, -10.5)));
    }

    #[test]
    fn dimensions() {
        let r = Rect::new(Coord::new(0.0, 0.0), Coord::new(4.0, 2.0));
        assert_eq!(r.width(), 4.0);
        assert_eq!(r.height(), 2.0);
        assert_eq!(r.center(), Coord::new(2.0, 1.0));
        assert!(r.is_proper());
    }

    #[test]
    fn flat_rect_is_not_proper() {
        let r = Rect::new(Coord::new(0.0, 0.0), Coord::new(4.0, 0.0));
        assert!(!r.is_proper());
    }
}
