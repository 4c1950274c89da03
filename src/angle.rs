// src/angle.rs
//! Angles between vectors and the tolerance-based relational predicates.

use std::f64::consts::PI;

use num_traits::ToPrimitive;

use crate::error::{Result, VectorError};
use crate::vector::{Vector, DEFAULT_TOLERANCE};

/// Tolerance for the parallelism test. Near cos = ±1 the arccosine turns an
/// ulp-level error in the cosine into ~1e-8 radians, so this is looser than
/// [`DEFAULT_TOLERANCE`].
pub const PARALLEL_ANGLE_TOLERANCE: f64 = 1e-6;

impl Vector {
    /// Angle with `v` in radians: `acos(û · v̂)`.
    ///
    /// The unit-vector dot product is clamped to [-1, 1] before the
    /// arccosine, since the rounding in `normalized` can push it a hair
    /// outside the acos domain.
    pub fn angle_with(&self, v: &Self) -> Result<f64> {
        self.check_dimension(v)?;
        if self.is_zero() || v.is_zero() {
            return Err(VectorError::ZeroVectorAngle);
        }
        let cosine = self
            .normalized()?
            .dot(&v.normalized()?)?
            .to_f64()
            .unwrap_or(0.0)
            .clamp(-1.0, 1.0);
        Ok(cosine.acos())
    }

    /// Angle with `v` in degrees.
    pub fn angle_with_degrees(&self, v: &Self) -> Result<f64> {
        Ok(self.angle_with(v)?.to_degrees())
    }

    /// True iff the dot product is within [`DEFAULT_TOLERANCE`] of zero.
    pub fn is_orthogonal_to(&self, v: &Self) -> Result<bool> {
        self.is_orthogonal_to_within(v, DEFAULT_TOLERANCE)
    }

    /// Orthogonality with an explicit tolerance.
    pub fn is_orthogonal_to_within(&self, v: &Self, tolerance: f64) -> Result<bool> {
        let dot = self.dot(v)?;
        Ok(dot.abs().to_f64().unwrap_or(f64::INFINITY) < tolerance)
    }

    /// True iff either vector is zero, or the angle between them is within
    /// [`PARALLEL_ANGLE_TOLERANCE`] of 0 or π.
    ///
    /// Vectors of mismatched dimension (neither zero) are not parallel.
    pub fn is_parallel_to(&self, v: &Self) -> bool {
        if self.is_zero() || v.is_zero() {
            return true;
        }
        match self.angle_with(v) {
            Ok(angle) => angle.min(PI - angle) < PARALLEL_ANGLE_TOLERANCE,
            Err(_) => false,
        }
    }
}
