//! # Sightline Geom
//!
//! Planar geometry kernel for the Sightline hunter/runner game.
//!
//! Everything here works in `f64` on top of [`glam::DVec2`]:
//!
//! - **Vectors and coordinates**: [`Vector`] and [`Coord`] (both `DVec2`)
//! - **Polar vectors**: [`PolarVector`], the shape of a movement intent
//! - **Orientation**: [`ccw`] classifies three points with a fixed tolerance
//! - **Segments**: [`Segment::crosses`] is the strict-crossing test used for
//!   sightline blocking
//! - **Rectangles**: [`Rect`] with inclusive bounds
//!
//! ## Quick Start
//!
//! ```
//! use sightline_geom::{Coord, Segment};
//!
//! let wall = Segment::new(Coord::new(0.0, 2.0), Coord::new(0.0, -2.0));
//! let sight = Segment::new(Coord::new(-1.0, 0.0), Coord::new(1.0, 0.0));
//! assert!(wall.crosses(&sight));
//!
//! // Touching an endpoint never counts as a crossing.
//! let grazing = Segment::new(Coord::new(-1.0, 2.0), Coord::new(1.0, 2.0));
//! assert!(!wall.crosses(&grazing));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod orientation;
pub mod polar;
pub mod rect;
pub mod segment;

pub use orientation::{ccw, Orientation, COLLINEAR_EPSILON};
pub use polar::PolarVector;
pub use rect::Rect;
pub use segment::Segment;

/// Free displacement in the plane.
pub type Vector = glam::DVec2;

/// Absolute position in the plane.
///
/// Same representation as [`Vector`]; the alias only documents intent.
pub type Coord = glam::DVec2;

/// 2-D cross product (z component of `a × b`).
#[must_use]
pub fn cross(a: Vector, b: Vector) -> f64 {
    a.perp_dot(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_of_unit_axes() {
        assert!((cross(Vector::X, Vector::Y) - 1.0).abs() < 1e-12);
        assert!((cross(Vector::Y, Vector::X) + 1.0).abs() < 1e-12);
        assert!(cross(Vector::X, Vector::X * 3.0).abs() < 1e-12);
    }

    #[test]
    fn add_and_scale() {
        let v = Vector::new(1.0, 2.0) + Vector::new(0.5, -1.0) * 2.0;
        assert_eq!(v, Vector::new(2.0, 0.0));
    }
}
