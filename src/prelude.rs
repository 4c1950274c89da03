// src/prelude.rs
//! The “everything” import for vector_engine.
//!
//! Brings you the most commonly used types and constants with one glob:
//! ```rust
//! use vector_engine::prelude::*;
//! ```

// core data types
pub use crate::error::{Result, VectorError};
pub use crate::vector::{Rounded, Vector};

// numeric knobs
pub use crate::angle::PARALLEL_ANGLE_TOLERANCE;
pub use crate::vector::{DEFAULT_TOLERANCE, PRECISION};
