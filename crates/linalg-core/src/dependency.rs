//! Linear dependence check for a set of vectors.
//!
//! The vectors are stacked as the rows of a matrix and its rank is computed by
//! Gaussian elimination. The set is independent exactly when the rank equals
//! the number of vectors; more vectors than the dimension are always dependent.

use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::{LinalgError, Result};
use crate::math::{Matrix, Vector};

pub const GAUSSIAN_ELIMINATION: &str = "gaussian elimination";

/// Outcome of a dependence check.
#[derive(Debug, Clone, Serialize)]
pub struct DependencyReport {
    pub method: &'static str,
    pub rank: usize,
    pub vector_count: usize,
    pub dimension: usize,
    pub independent: bool,
    pub elapsed: Duration,
}

impl DependencyReport {
    pub fn status(&self) -> &'static str {
        if self.independent {
            "Independent"
        } else {
            "Dependent"
        }
    }
}

impl fmt::Display for DependencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} => {:<12} | rank {} of {} | time: {:.6}s",
            self.method,
            self.status(),
            self.rank,
            self.vector_count,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Decide whether `vectors` are linearly independent.
///
/// # Arguments
///
/// * `vectors` - The vectors to test. All must have the same length.
/// * `tolerance` - Magnitude below which a pivot is treated as zero.
///
/// # Errors
///
/// `LinalgError::Value` for an empty set and `LinalgError::Dimension` when the
/// vectors have different lengths.
pub fn check_linear_dependence(vectors: &[Vector<f64>], tolerance: f64) -> Result<DependencyReport> {
    if vectors.is_empty() {
        return Err(LinalgError::value("at least one vector is required"));
    }
    let rows = vectors.iter().map(Vector::to_vec).collect::<Vec<_>>();
    let matrix = Matrix::from_rows(rows)?;
    let (vector_count, dimension) = matrix.shape();
    log::debug!(
        "checking dependence of {} vectors in dimension {}",
        vector_count,
        dimension
    );

    let start = Instant::now();
    let rank = matrix.rank(tolerance);
    let elapsed = start.elapsed();

    let independent = vector_count <= dimension && rank == vector_count;
    Ok(DependencyReport {
        method: GAUSSIAN_ELIMINATION,
        rank,
        vector_count,
        dimension,
        independent,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_renders_status_and_rank() {
        let report = DependencyReport {
            method: GAUSSIAN_ELIMINATION,
            rank: 2,
            vector_count: 3,
            dimension: 3,
            independent: false,
            elapsed: Duration::from_micros(45),
        };
        assert_eq!(
            report.to_string(),
            "gaussian elimination => Dependent    | rank 2 of 3 | time: 0.000045s"
        );
    }
}
