// src/vector.rs
//! Arbitrary-dimension Euclidean vector over exact decimal coordinates.

use std::fmt;
use std::ops::Neg;

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

use crate::error::{Result, VectorError};

/// Significant digits kept after any inexact decimal step (division, re-entry
/// from `f64`). Exact steps (addition, subtraction, multiplication) are never
/// rounded.
pub const PRECISION: u64 = 30;

/// Tolerance used by the near-zero predicates (`is_orthogonal_to`,
/// `is_parallel_to`).
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// An N-dimensional Euclidean vector with exact decimal coordinates.
///
/// Immutable by convention: there are no public mutators, and every operation
/// returns a new `Vector`. Equality is element-wise decimal value equality,
/// so two vectors of different dimension are never equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vector {
    coordinates: Vec<BigDecimal>,
}

impl Vector {
    /// Construct from an owned coordinate sequence.
    pub fn new(coordinates: Vec<BigDecimal>) -> Result<Self> {
        if coordinates.is_empty() {
            return Err(VectorError::EmptyCoordinates);
        }
        Ok(Self { coordinates })
    }

    /// Construct from binary floats, converting each eagerly to its exact
    /// decimal expansion. NaN and infinite entries are rejected.
    pub fn from_f64s(coordinates: &[f64]) -> Result<Self> {
        if coordinates.is_empty() {
            return Err(VectorError::EmptyCoordinates);
        }
        let converted = coordinates
            .iter()
            .enumerate()
            .map(|(index, &x)| {
                BigDecimal::from_f64(x).ok_or(VectorError::InvalidCoordinate { index })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            coordinates: converted,
        })
    }

    /// Construct from decimal literals, e.g. `Vector::parse(&["3.039", "1.879"])`.
    ///
    /// Unlike [`from_f64s`](Self::from_f64s) this carries no binary rounding:
    /// the stored coordinate is exactly the written literal.
    pub fn parse(coordinates: &[&str]) -> Result<Self> {
        if coordinates.is_empty() {
            return Err(VectorError::EmptyCoordinates);
        }
        let converted = coordinates
            .iter()
            .enumerate()
            .map(|(index, s)| {
                s.parse::<BigDecimal>()
                    .map_err(|_| VectorError::InvalidCoordinate { index })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            coordinates: converted,
        })
    }

    /// The zero vector of the given dimension.
    pub fn zero(dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(VectorError::EmptyCoordinates);
        }
        Ok(Self {
            coordinates: vec![BigDecimal::zero(); dimension],
        })
    }

    /// Number of coordinates.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    /// The coordinate sequence.
    #[inline]
    pub fn coordinates(&self) -> &[BigDecimal] {
        &self.coordinates
    }

    /// Coordinate at `index`, if in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&BigDecimal> {
        self.coordinates.get(index)
    }

    pub(crate) fn check_dimension(&self, other: &Self) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(VectorError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        Ok(())
    }

    /// Element-wise sum. Both operands must share a dimension.
    pub fn plus(&self, v: &Self) -> Result<Self> {
        self.check_dimension(v)?;
        Ok(Self {
            coordinates: self
                .coordinates
                .iter()
                .zip(&v.coordinates)
                .map(|(x, y)| x + y)
                .collect(),
        })
    }

    /// Element-wise difference. Both operands must share a dimension.
    pub fn minus(&self, v: &Self) -> Result<Self> {
        self.check_dimension(v)?;
        Ok(Self {
            coordinates: self
                .coordinates
                .iter()
                .zip(&v.coordinates)
                .map(|(x, y)| x - y)
                .collect(),
        })
    }

    /// Multiply every coordinate by an exact decimal scalar.
    pub fn times_scalar(&self, c: &BigDecimal) -> Self {
        Self {
            coordinates: self.coordinates.iter().map(|x| c * x).collect(),
        }
    }

    /// Multiply every coordinate by a float scalar, converting it into the
    /// decimal domain first.
    pub fn scale(&self, s: f64) -> Result<Self> {
        let c = BigDecimal::from_f64(s).ok_or(VectorError::NonFiniteScalar)?;
        Ok(self.times_scalar(&c))
    }

    /// Euclidean norm: √(Σ coordinate²).
    ///
    /// The squared sum is exact decimal; the square root is the one step that
    /// crosses into binary floating point, so the result is `f64`.
    pub fn magnitude(&self) -> f64 {
        let squared_sum = self
            .coordinates
            .iter()
            .fold(BigDecimal::zero(), |acc, x| acc + x * x);
        squared_sum.to_f64().unwrap_or(f64::INFINITY).sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// The reciprocal magnitude is a decimal division rounded to
    /// [`PRECISION`] significant digits.
    pub fn normalized(&self) -> Result<Self> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(VectorError::ZeroVectorNormalization);
        }
        let magnitude = BigDecimal::from_f64(magnitude).ok_or(VectorError::NonFiniteScalar)?;
        let inverse = (BigDecimal::one() / magnitude).with_prec(PRECISION);
        Ok(self.times_scalar(&inverse))
    }

    /// Dot product, exact in the decimal domain.
    pub fn dot(&self, v: &Self) -> Result<BigDecimal> {
        self.check_dimension(v)?;
        Ok(self
            .coordinates
            .iter()
            .zip(&v.coordinates)
            .fold(BigDecimal::zero(), |acc, (x, y)| acc + x * y))
    }

    /// True iff every coordinate is exactly decimal zero.
    pub fn is_zero(&self) -> bool {
        self.coordinates.iter().all(|c| c.is_zero())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, c) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector {
            coordinates: self.coordinates.iter().map(|c| -c).collect(),
        }
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        -&self
    }
}

/// A tiny wrapper for printing a `Vector` with every coordinate rounded to
/// `decimals` places.
pub struct Rounded<'a>(pub &'a Vector, pub usize);

impl<'a> Rounded<'a> {
    /// Wrap a `&Vector` for pretty-printing with `decimals` digits.
    #[inline]
    pub fn new(v: &'a Vector, decimals: usize) -> Self {
        Rounded(v, decimals)
    }
}

impl fmt::Display for Rounded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rounded(v, decimals) = *self;
        write!(f, "Vector: (")?;
        for (i, c) in v.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(
                f,
                "{}",
                c.with_scale_round(decimals as i64, RoundingMode::HalfUp)
            )?;
        }
        write!(f, ")")
    }
}
