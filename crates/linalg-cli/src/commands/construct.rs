//! `identity`, `zero` and `diagonal` constructors.
//!
//! Sizes arrive as signed integers so negative input can be reported as an
//! invalid value rather than a parse failure.

use anyhow::Result;
use linalg_core::config::ToolConfig;
use linalg_core::math::{validate, Matrix, Vector};

pub fn run_identity(n: i64, config: &ToolConfig) -> Result<String> {
    let n = validate::dimension(n, "size")?;
    let m: Matrix = Matrix::identity(n);
    Ok(format!("{:.*}", config.precision, m))
}

pub fn run_zero(rows: i64, cols: i64, config: &ToolConfig) -> Result<String> {
    let rows = validate::dimension(rows, "rows")?;
    let cols = validate::dimension(cols, "cols")?;
    let m: Matrix = Matrix::zero(rows, cols);
    Ok(format!("{:.*}", config.precision, m))
}

pub fn run_diagonal(values: &Vector, config: &ToolConfig) -> Result<String> {
    let m = Matrix::diagonal(values.as_slice());
    Ok(format!("{:.*}", config.precision, m))
}
