//! Polar vectors.

use serde::{Deserialize, Serialize};

use crate::Vector;

/// A displacement expressed as radius and angle.
///
/// `theta` is in radians, measured counter-clockwise from +X. A negative
/// radius points the opposite way, exactly as `to_vector` computes it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarVector {
    /// Magnitude (signed).
    pub r: f64,
    /// Angle in radians.
    pub theta: f64,
}

impl PolarVector {
    /// Creates a polar vector.
    #[must_use]
    pub const fn new(r: f64, theta: f64) -> Self {
        Self { r, theta }
    }

    /// Unit-length vector pointing at `theta`.
    #[must_use]
    pub const fn unit(theta: f64) -> Self {
        Self::new(1.0, theta)
    }

    /// Polar form of a Cartesian vector. The zero vector maps to `(0, 0)`.
    #[must_use]
    pub fn from_vector(v: Vector) -> Self {
        Self::new(v.length(), v.y.atan2(v.x))
    }

    /// Converts to Cartesian form.
    #[must_use]
    pub fn to_vector(self) -> Vector {
        let (sin, cos) = self.theta.sin_cos();
        Vector::new(self.r * cos, self.r * sin)
    }

    /// Absolute magnitude.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.r.abs()
    }

    /// Returns a copy whose radius lies in `[-max, max]`, same angle.
    #[must_use]
    pub fn clamp_radius(self, max: f64) -> Self {
        let max = max.abs();
        Self::new(self.r.clamp(-max, max), self.theta)
    }
}
