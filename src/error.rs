// src/error.rs
//! Error kinds for vector construction and operations.
//!
//! Every failure mode carries its own variant so callers branch on kind, not
//! on message text.

use thiserror::Error;

/// Result type alias for fallible vector operations.
pub type Result<T> = std::result::Result<T, VectorError>;

/// The ways a vector construction or operation can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// Construction was given an empty coordinate sequence.
    #[error("coordinates must be nonempty")]
    EmptyCoordinates,

    /// A construction input could not be converted to an exact decimal
    /// (non-finite float, unparsable string).
    #[error("coordinate {index} cannot be represented as an exact decimal")]
    InvalidCoordinate {
        /// Position of the offending input.
        index: usize,
    },

    /// Two operands of unequal dimension were combined where no
    /// accommodation is defined.
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch {
        /// Dimension of the left operand.
        left: usize,
        /// Dimension of the right operand.
        right: usize,
    },

    /// Cross product requested outside R² / R³.
    #[error("cross product only defined in two or three dimensions (got {dimension})")]
    CrossDimension {
        /// Dimension of the operands.
        dimension: usize,
    },

    /// Normalization of the zero vector.
    #[error("cannot normalize the zero vector")]
    ZeroVectorNormalization,

    /// Angle against the zero vector.
    #[error("cannot compute an angle with the zero vector")]
    ZeroVectorAngle,

    /// Projection onto a zero basis vector.
    #[error("no unique parallel component")]
    NoUniqueParallelComponent,

    /// A float scalar that is NaN or infinite cannot enter the decimal
    /// domain.
    #[error("scalar is not a finite number")]
    NonFiniteScalar,
}
