use anyhow::Result;
use linalg_core::math::Vector;

/// The worked dot-product example: `3*1 + 2*7 + 6*(-2) = 5`.
pub fn run_demo() -> Result<String> {
    let a = Vector::from_vec(vec![3.0, 2.0, 6.0]);
    let b = Vector::from_vec(vec![1.0, 7.0, -2.0]);
    let dot = a.dot(&b)?;
    Ok(format!("dot({}, {}) = {}", a, b, dot))
}
