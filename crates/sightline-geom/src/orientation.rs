//! Orientation test for point triples.

use serde::{Deserialize, Serialize};

use crate::{cross, Coord};

/// Cross products whose magnitude does not exceed this are treated as zero.
pub const COLLINEAR_EPSILON: f64 = 1e-8;

/// Turn direction of the path `a -> b -> c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Left turn.
    CounterClockwise,
    /// Right turn.
    Clockwise,
    /// The three points lie on one line (within [`COLLINEAR_EPSILON`]).
    Collinear,
}

impl Orientation {
    /// Returns `+1`, `-1` or `0` for counter-clockwise, clockwise and
    /// collinear respectively.
    #[must_use]
    pub const fn signum(self) -> i8 {
        match self {
            Self::CounterClockwise => 1,
            Self::Clockwise => -1,
            Self::Collinear => 0,
        }
    }
}

/// Classifies the turn made by `a -> b -> c`.
///
/// # Example
///
/// ```
/// use sightline_geom::{ccw, Coord, Orientation};
///
/// let o = ccw(Coord::new(1.0, 0.0), Coord::new(1.0, 1.0), Coord::new(0.0, 1.0));
/// assert_eq!(o, Orientation::CounterClockwise);
/// ```
#[must_use]
pub fn ccw(a: Coord, b: Coord, c: Coord) -> Orientation {
    let det = cross(b - a, c - a);
    if det.abs() <= COLLINEAR_EPSILON {
        Orientation::Collinear
    } else if det > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(x: f64, y: f64) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn classifies_basic_triples() {
        let cases = [
            (c(1.0, 0.0), c(1.0, 1.0), c(0.0, 1.0), 1),
            (c(0.0, 1.0), c(1.0, 1.0), c(1.0, 0.0), -1),
            (c(0.0, 0.0), c(1.0, 1.0), c(2.0, 2.0), 0),
        ];

        for (a, b, cc, expected) in cases {
            assert_eq!(ccw(a, b, cc).signum(), expected, "ccw({a}, {b}, {cc})");
        }
    }

    #[test]
    fn tiny_cross_products_are_collinear() {
        // |cross| = 1e-9, under the tolerance
        let o = ccw(c(0.0, 0.0), c(1.0, 0.0), c(2.0, 1e-9));
        assert_eq!(o, Orientation::Collinear);
    }

    proptest! {
        #[test]
        fn swapping_last_two_points_flips_orientation(
            ax in -100.0f64..100.0, ay in -100.0f64..100.0,
            bx in -100.0f64..100.0, by in -100.0f64..100.0,
            cx in -100.0f64..100.0, cy in -100.0f64..100.0,
        ) {
            let forward = ccw(c(ax, ay), c(bx, by), c(cx, cy)).signum();
            let backward = ccw(c(ax, ay), c(cx, cy), c(bx, by)).signum();
            prop_assert_eq!(forward, -backward);
        }

        #[test]
        fn rotation_preserves_orientation(
            ax in -100.0f64..100.0, ay in -100.0f64..100.0,
            bx in -100.0f64..100.0, by in -100.0f64..100.0,
            cx in -100.0f64..100.0, cy in -100.0f64..100.0,
        ) {
            let abc = ccw(c(ax, ay), c(bx, by), c(cx, cy));
            let bca = ccw(c(bx, by), c(cx, cy), c(ax, ay));
            // All three rotations share the same determinant up to rounding;
            // only compare when we are clearly away from the tolerance band.
            let det = cross(c(bx, by) - c(ax, ay), c(cx, cy) - c(ax, ay));
            prop_assume!(det.abs() > 1e-6);
            prop_assert_eq!(abc, bca);
        }
    }
}
