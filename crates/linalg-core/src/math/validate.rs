//! Shape checks run at the start of every operation.
//!
//! Each helper returns a `LinalgError::Dimension` naming the operation and
//! both shapes, so callers can bail out with `?` before touching any data.

use crate::error::{LinalgError, Result};

/// Pivot threshold below which an entry is treated as zero during elimination.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

pub fn same_len(op: &'static str, lhs: usize, rhs: usize) -> Result<()> {
    if lhs != rhs {
        return Err(LinalgError::dimension(
            op,
            format!("length {}", lhs),
            format!("length {}", rhs),
        ));
    }
    Ok(())
}

pub fn same_shape(op: &'static str, lhs: (usize, usize), rhs: (usize, usize)) -> Result<()> {
    if lhs != rhs {
        return Err(LinalgError::dimension(
            op,
            format!("shape {}x{}", lhs.0, lhs.1),
            format!("shape {}x{}", rhs.0, rhs.1),
        ));
    }
    Ok(())
}

pub fn square(op: &'static str, shape: (usize, usize)) -> Result<()> {
    if shape.0 != shape.1 {
        return Err(LinalgError::dimension(
            op,
            "a square matrix",
            format!("shape {}x{}", shape.0, shape.1),
        ));
    }
    Ok(())
}

/// Convert a signed size coming from user input into a `usize`.
///
/// Negative sizes are rejected with `LinalgError::Value`.
pub fn dimension(value: i64, name: &str) -> Result<usize> {
    if value < 0 {
        return Err(LinalgError::value(format!(
            "{} must be non-negative, got {}",
            name, value
        )));
    }
    usize::try_from(value)
        .map_err(|_| LinalgError::value(format!("{} is too large: {}", name, value)))
}

/// Number of elements in a buffer of shape `dims`.
///
/// A product that overflows `usize` is rejected with `LinalgError::Value`.
pub fn element_count(dims: &[usize]) -> Result<usize> {
    dims.iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| LinalgError::value(format!("shape {:?} has too many elements", dims)))
}
