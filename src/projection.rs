// src/projection.rs
//! Decomposition of a vector against a basis vector.

use crate::error::{Result, VectorError};
use crate::vector::Vector;

impl Vector {
    /// Orthogonal projection of `self` onto `b`: `b̂ · (self · b̂)`.
    ///
    /// A zero basis has no direction, so no unique parallel component
    /// exists.
    pub fn component_parallel_to(&self, b: &Self) -> Result<Self> {
        let unit = b.normalized().map_err(|e| match e {
            VectorError::ZeroVectorNormalization => VectorError::NoUniqueParallelComponent,
            other => other,
        })?;
        let weight = self.dot(&unit)?;
        Ok(unit.times_scalar(&weight))
    }

    /// The remainder of `self` after subtracting its projection onto `b`.
    pub fn component_orthogonal_to(&self, b: &Self) -> Result<Self> {
        let projection = self.component_parallel_to(b)?;
        self.minus(&projection)
    }
}
