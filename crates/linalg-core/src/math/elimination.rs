//! Row-reduction kernels behind `Matrix::determinant` and `Matrix::rank`.
//!
//! All routines take a row-major buffer plus its shape and work on a private
//! copy, so the caller's matrix is never touched.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Algorithm used for determinants of matrices larger than 2x2.
///
/// `Elimination` is LU factorisation with partial pivoting: O(n^3) and stable
/// for well-conditioned input. `Cofactor` is exact Laplace expansion along the
/// first row: O(n!) so only practical for small matrices, but it performs no
/// division and is useful as a reference.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeterminantMethod {
    #[default]
    Elimination,
    Cofactor,
}

impl FromStr for DeterminantMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "elimination" | "lu" => Ok(DeterminantMethod::Elimination),
            "cofactor" | "laplace" => Ok(DeterminantMethod::Cofactor),
            _ => Err(format!(
                "Unknown determinant method: {}. Expected one of: elimination, cofactor",
                s
            )),
        }
    }
}

impl fmt::Display for DeterminantMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeterminantMethod::Elimination => write!(f, "elimination"),
            DeterminantMethod::Cofactor => write!(f, "cofactor"),
        }
    }
}

/// Determinant of an `n x n` row-major matrix by LU elimination with partial
/// pivoting. A zero pivot column means the matrix is singular.
pub fn lu_determinant<T: Float>(data: &[T], n: usize) -> T {
    let mut m = data.to_vec();
    let mut det = T::one();

    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&a, &b| {
                m[a * n + col]
                    .abs()
                    .partial_cmp(&m[b * n + col].abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(col);

        let pivot = m[pivot_row * n + col];
        if pivot.is_zero() {
            return T::zero();
        }
        if pivot_row != col {
            swap_rows(&mut m, n, pivot_row, col);
            det = -det;
        }
        det = det * pivot;

        for row in (col + 1)..n {
            let factor = m[row * n + col] / pivot;
            for k in col..n {
                let upper = m[col * n + k];
                m[row * n + k] = m[row * n + k] - factor * upper;
            }
        }
    }

    det
}

/// Determinant by cofactor expansion along the first row.
pub fn cofactor_determinant<T: Float>(data: &[T], n: usize) -> T {
    match n {
        0 => T::one(),
        1 => data[0],
        2 => data[0] * data[3] - data[1] * data[2],
        _ => {
            let mut det = T::zero();
            let mut minor = Vec::with_capacity((n - 1) * (n - 1));
            for col in 0..n {
                minor.clear();
                for row in 1..n {
                    for k in (0..n).filter(|&k| k != col) {
                        minor.push(data[row * n + k]);
                    }
                }
                let term = data[col] * cofactor_determinant(&minor, n - 1);
                det = if col % 2 == 0 { det + term } else { det - term };
            }
            det
        }
    }
}

/// Rank of a `rows x cols` row-major matrix by Gauss-Jordan elimination.
///
/// Entries whose magnitude does not exceed `tolerance` count as zero.
pub fn rank<T: Float>(data: &[T], rows: usize, cols: usize, tolerance: T) -> usize {
    let mut m = data.to_vec();
    let mut rank = 0;

    for col in 0..cols {
        if rank == rows {
            break;
        }
        let pivot_row = (rank..rows)
            .filter(|&r| m[r * cols + col].abs() > tolerance)
            .max_by(|&a, &b| {
                m[a * cols + col]
                    .abs()
                    .partial_cmp(&m[b * cols + col].abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        let Some(pivot_row) = pivot_row else {
            continue;
        };
        swap_rows(&mut m, cols, pivot_row, rank);

        let pivot = m[rank * cols + col];
        for k in 0..cols {
            m[rank * cols + k] = m[rank * cols + k] / pivot;
        }
        for r in (0..rows).filter(|&r| r != rank) {
            let factor = m[r * cols + col];
            if factor.abs() <= tolerance {
                continue;
            }
            for k in 0..cols {
                let reduced = m[rank * cols + k];
                m[r * cols + k] = m[r * cols + k] - factor * reduced;
            }
        }
        rank += 1;
    }

    rank
}

fn swap_rows<T>(m: &mut [T], cols: usize, a: usize, b: usize) {
    if a == b {
        return;
    }
    for k in 0..cols {
        m.swap(a * cols + k, b * cols + k);
    }
}
