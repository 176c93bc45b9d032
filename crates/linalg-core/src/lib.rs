//! linalg-core: a small linear-algebra toolkit.
//!
//! This crate provides `Vector` and `Matrix` value types with shape-checked
//! arithmetic (dot and cross products, matrix products, trace, determinant,
//! rank), a rank-based linear dependence check for sets of vectors, and a
//! 3D array type that can be parsed from text and cut into 2D slices.
//!
//! Everything is synchronous and allocation-per-result; failures come back as
//! [`error::LinalgError`].
pub mod config;
pub mod dependency;
pub mod error;
pub mod math;
pub mod volume;

pub use error::{LinalgError, Result};
pub use math::{Matrix, Vector};
