// src/cross.rs
//! Cross product and the areas it spans.
//!
//! The cross product is native to R³. Two-dimensional operands are embedded
//! into R³ by appending an exact zero coordinate; every other dimension is
//! rejected.

use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, Zero};

use crate::error::{Result, VectorError};
use crate::vector::{Vector, PRECISION};

impl Vector {
    /// Cross product via the determinant expansion, exact in the decimal
    /// domain.
    ///
    /// Defined for a pair of 3-D vectors, or a pair of 2-D vectors (embedded
    /// into R³ first). Mixed dimensions are a `DimensionMismatch`; any other
    /// dimension is a `CrossDimension` error.
    pub fn cross(&self, v: &Self) -> Result<Self> {
        self.check_dimension(v)?;
        match self.dimension() {
            2 => self.embedded_in_r3()?.cross(&v.embedded_in_r3()?),
            3 => {
                let a = self.coordinates();
                let b = v.coordinates();
                let (x1, y1, z1) = (&a[0], &a[1], &a[2]);
                let (x2, y2, z2) = (&b[0], &b[1], &b[2]);
                Vector::new(vec![
                    y1 * z2 - y2 * z1,
                    -(x1 * z2 - x2 * z1),
                    x1 * y2 - x2 * y1,
                ])
            }
            dimension => Err(VectorError::CrossDimension { dimension }),
        }
    }

    /// Embed a 2-D vector into R³ with a zero third coordinate.
    pub fn embedded_in_r3(&self) -> Result<Self> {
        if self.dimension() != 2 {
            return Err(VectorError::CrossDimension {
                dimension: self.dimension(),
            });
        }
        let mut coordinates = self.coordinates().to_vec();
        coordinates.push(BigDecimal::zero());
        Vector::new(coordinates)
    }

    /// Area of the parallelogram spanned with `v`: the magnitude of the
    /// cross product.
    pub fn area_of_parallelogram_with(&self, v: &Self) -> Result<f64> {
        Ok(self.cross(v)?.magnitude())
    }

    /// Area of the triangle spanned with `v`.
    ///
    /// The parallelogram area re-enters the decimal domain (rounded to
    /// [`PRECISION`]) and is halved there.
    pub fn area_of_triangle_with(&self, v: &Self) -> Result<BigDecimal> {
        let area = self.area_of_parallelogram_with(v)?;
        let area = BigDecimal::from_f64(area)
            .ok_or(VectorError::NonFiniteScalar)?
            .with_prec(PRECISION);
        Ok(area / BigDecimal::from(2))
    }
}
