//! Vector and matrix types used throughout the crate.
//!
//! Provides `Vector` (1D) and `Matrix` (2D, row-major) value types. Every
//! operation validates operand shapes first and returns a freshly allocated
//! result; nothing is mutated in place.
pub mod elimination;
pub mod matrix;
pub mod validate;
pub mod vector;

pub use elimination::DeterminantMethod;
pub use matrix::Matrix;
pub use validate::DEFAULT_TOLERANCE;
pub use vector::Vector;
