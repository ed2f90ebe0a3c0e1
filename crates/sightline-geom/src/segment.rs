//! Line segments and the strict-crossing test.

use serde::{Deserialize, Serialize};

use crate::{ccw, Coord, Vector};

/// Ordered pair of endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// First endpoint.
    pub a: Coord,
    /// Second endpoint.
    pub b: Coord,
}

impl Segment {
    /// Creates a segment from `a` to `b`.
    #[must_use]
    pub const fn new(a: Coord, b: Coord) -> Self {
        Self { a, b }
    }

    /// Displacement from `a` to `b`.
    #[must_use]
    pub fn direction(&self) -> Vector {
        self.b - self.a
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// Returns true only when each segment's endpoints lie strictly on
    /// opposite sides of the other segment.
    ///
    /// Touching, collinear overlap and an endpoint resting on the other
    /// segment all report `false`.
    #[must_use]
    pub fn crosses(&self, other: &Segment) -> bool {
        let straddles = |s: &Segment, t: &Segment| {
            let first = ccw(s.a, s.b, t.a).signum();
            let second = ccw(s.a, s.b, t.b).signum();
            first * second < 0
        };

        straddles(self, other) && straddles(other, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(x: f64, y: f64) -> Coord {
        Coord::new(x, y)
    }

    fn s(a: Coord, b: Coord) -> Segment {
        Segment::new(a, b)
    }

    #[test]
    fn crossing_cases() {
        let cases = [
            // Disjoint: vertical segment well above a horizontal one.
            (s(c(1.0, 0.0), c(1.0, 1.0)), s(c(0.0, -1.0), c(2.0, -1.0)), false),
            // Endpoint resting on the other segment.
            (s(c(1.0, 0.0), c(1.0, 1.0)), s(c(0.0, 0.0), c(2.0, 0.0)), false),
            // Proper X.
            (s(c(1.0, -1.0), c(1.0, 1.0)), s(c(0.0, 0.0), c(2.0, 0.0)), true),
            // Collinear overlap.
            (s(c(0.0, 0.0), c(2.0, 0.0)), s(c(1.0, 0.0), c(3.0, 0.0)), false),
            // Shared endpoint.
            (s(c(0.0, 0.0), c(1.0, 1.0)), s(c(1.0, 1.0), c(2.0, 0.0)), false),
        ];

        for (a, b, expected) in cases {
            assert_eq!(a.crosses(&b), expected, "{a:?} x {b:?}");
        }
    }

    #[test]
    fn degenerate_segment_never_crosses() {
        let wall = s(c(0.0, 2.0), c(0.0, -2.0));
        let point = s(c(0.0, 0.0), c(0.0, 0.0));
        assert!(!wall.crosses(&point));
        assert!(!point.crosses(&wall));
    }

    #[test]
    fn length_and_direction() {
        let seg = s(c(0.0, 0.0), c(3.0, 4.0));
        assert!((seg.length() - 5.0).abs() < 1e-12);
        assert_eq!(seg.direction(), Vector::new(3.0, 4.0));
    }

    proptest! {
        #[test]
        fn crossing_is_symmetric(
            ax in -50.0f64..50.0, ay in -50.0f64..50.0,
            bx in -50.0f64..50.0, by in -50.0f64..50.0,
            cx in -50.0f64..50.0, cy in -50.0f64..50.0,
            dx in -50.0f64..50.0, dy in -50.0f64..50.0,
        ) {
            let p = s(c(ax, ay), c(bx, by));
            let q = s(c(cx, cy), c(dx, dy));
            prop_assert_eq!(p.crosses(&q), q.crosses(&p));
        }

        #[test]
        fn endpoint_order_does_not_matter(
            ax in -50.0f64..50.0, ay in -50.0f64..50.0,
            bx in -50.0f64..50.0, by in -50.0f64..50.0,
            cx in -50.0f64..50.0, cy in -50.0f64..50.0,
            dx in -50.0f64..50.0, dy in -50.0f64..50.0,
        ) {
            let p = s(c(ax, ay), c(bx, by));
            let q = s(c(cx, cy), c(dx, dy));
            let p_rev = s(c(bx, by), c(ax, ay));
            prop_assert_eq!(p.crosses(&q), p_rev.crosses(&q));
        }
    }
}
