//! # vector_engine Quickstart
//!
//! ```rust
//! use vector_engine::prelude::*;
//!
//! // Cross product of two 3-D vectors
//! let v = Vector::from_f64s(&[8.462, 7.893, -8.187]).unwrap();
//! let w = Vector::from_f64s(&[6.984, -5.975, 4.778]).unwrap();
//! let c = v.cross(&w).unwrap();
//!
//! // Its magnitude is the area of the parallelogram they span
//! let area = v.area_of_parallelogram_with(&w).unwrap();
//! assert!((c.magnitude() - area).abs() < 1e-9);
//! ```
//!
#![doc = include_str!("../README.md")]

// Core modules
pub mod angle;
pub mod cross;
pub mod error;
pub mod prelude;
pub mod projection;
pub mod vector;

// --- Public API exports ---

pub use angle::PARALLEL_ANGLE_TOLERANCE;
pub use error::{Result, VectorError};
pub use vector::{Rounded, Vector, DEFAULT_TOLERANCE, PRECISION};
