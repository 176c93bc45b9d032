//! Integration tests for the Matrix type.

use linalg_core::math::{DeterminantMethod, Matrix, Vector};

fn m(rows: Vec<Vec<f64>>) -> Matrix {
    Matrix::from_rows(rows).unwrap()
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn matrix_from_rows() {
    let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    assert_eq!(a.shape(), (2, 3));
    assert_eq!(a.row_slice(1), &[4.0, 5.0, 6.0]);
    assert_eq!(a[(0, 2)], 3.0);
}

#[test]
fn matrix_ragged_rows_error() {
    let result = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
    assert!(result.unwrap_err().is_dimension());
}

#[test]
fn matrix_from_shape_vec_mismatch_errors() {
    assert!(Matrix::from_shape_vec((2, 3), vec![1.0, 2.0, 3.0]).is_err());
    let overflow = Matrix::from_shape_vec((usize::MAX, 2), vec![1.0, 2.0]).unwrap_err();
    assert!(overflow.is_value());
    assert!(Matrix::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).is_ok());
}

#[test]
fn empty_matrix_is_representable() {
    let e: Matrix<f64> = Matrix::from_rows(vec![]).unwrap();
    assert_eq!(e.shape(), (0, 0));
    assert!(e.is_square());
    assert_eq!(e.to_string(), "[]");
}

#[test]
fn identity_zero_diagonal() {
    let i: Matrix = Matrix::identity(3);
    assert_eq!(i.to_rows(), vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 1.0]]);

    let z: Matrix = Matrix::zero(2, 3);
    assert_eq!(z.shape(), (2, 3));
    assert!(z.as_slice().iter().all(|&v| v == 0.0));

    let d = Matrix::diagonal(&[2.0, 5.0]);
    assert_eq!(d.to_rows(), vec![vec![2.0, 0.0], vec![0.0, 5.0]]);
}

#[test]
fn rows_and_columns_as_vectors() {
    let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
    assert_eq!(a.row(2), Vector::from_vec(vec![5.0, 6.0]));
    assert_eq!(a.column(1).to_vec(), vec![2.0, 4.0, 6.0]);
    assert_eq!(a.rows().count(), 3);
}

#[test]
#[should_panic(expected = "column index out of bounds")]
fn column_out_of_bounds_panics() {
    let a = m(vec![vec![1.0, 2.0]]);
    let _ = a.column(2);
}

#[test]
fn matrix_display() {
    let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.5]]);
    assert_eq!(a.to_string(), "[[1, 2],\n [3, 4.5]]");
    assert_eq!(format!("{:.1}", a), "[[1.0, 2.0],\n [3.0, 4.5]]");
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[test]
fn matrix_add_subtract() {
    let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    let b = m(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
    assert_eq!(a.add(&b).unwrap().to_rows(), vec![vec![6.0, 8.0], vec![10.0, 12.0]]);
    assert_eq!(b.subtract(&a).unwrap().to_rows(), vec![vec![4.0, 4.0], vec![4.0, 4.0]]);
}

#[test]
fn matrix_add_shape_mismatch_errors() {
    let a = m(vec![vec![1.0, 2.0]]);
    let b = m(vec![vec![1.0], vec![2.0]]);
    assert!(a.add(&b).unwrap_err().is_dimension());
    assert!(a.subtract(&b).unwrap_err().is_dimension());
}

#[test]
fn multiply_identity_by_matrix() {
    let b = m(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
    let product = Matrix::identity(2).multiply(&b).unwrap();
    assert_eq!(product, b);
}

#[test]
fn multiply_rectangular() {
    let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    let b = m(vec![vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]]);
    let c = a.multiply(&b).unwrap();
    assert_eq!(c.shape(), (2, 2));
    assert_eq!(c.to_rows(), vec![vec![58.0, 64.0], vec![139.0, 154.0]]);
}

#[test]
fn multiply_propagates_non_finite_entries() {
    let b = m(vec![vec![f64::INFINITY, 1.0], vec![1.0, 1.0]]);
    let product = Matrix::identity(2).multiply(&b).unwrap();
    // 0 * inf + 1 * 1 is NaN under IEEE rules
    assert!(product[(1, 0)].is_nan());
    assert_eq!(product[(0, 0)], f64::INFINITY);
    assert_eq!(product[(1, 1)], 1.0);

    let col = b.column(0);
    let via_vector = Matrix::identity(2).mul_vector(&col).unwrap();
    assert!(via_vector[1].is_nan());
}

#[test]
fn multiply_inner_dimension_mismatch_errors() {
    let a = m(vec![vec![1.0, 2.0, 3.0]]);
    let b = m(vec![vec![1.0, 2.0]]);
    assert!(a.multiply(&b).unwrap_err().is_dimension());
}

#[test]
fn mul_vector() {
    let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    let v = Vector::from_vec(vec![1.0, -1.0]);
    assert_eq!(a.mul_vector(&v).unwrap().to_vec(), vec![-1.0, -1.0]);
    let w = Vector::from_vec(vec![1.0]);
    assert!(a.mul_vector(&w).unwrap_err().is_dimension());
}

#[test]
fn scale_matrix() {
    let a = m(vec![vec![1.0, -2.0]]);
    assert_eq!((&a * 3.0).to_rows(), vec![vec![3.0, -6.0]]);
}

#[test]
fn transpose_swaps_shape() {
    let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    let t = a.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.to_rows(), vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
}

// ---------------------------------------------------------------------------
// Trace, determinant, rank
// ---------------------------------------------------------------------------

#[test]
fn trace_of_square() {
    let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    assert_eq!(a.trace().unwrap(), 5.0);
}

#[test]
fn trace_non_square_errors() {
    let a = m(vec![vec![1.0, 2.0, 3.0]]);
    assert!(a.trace().unwrap_err().is_dimension());
}

#[test]
fn determinant_base_cases() {
    assert_eq!(m(vec![vec![7.0]]).determinant().unwrap(), 7.0);
    assert_eq!(m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).determinant().unwrap(), -2.0);
    let e: Matrix<f64> = Matrix::from_rows(vec![]).unwrap();
    assert_eq!(e.determinant().unwrap(), 1.0);
}

#[test]
fn determinant_of_3x3_both_methods() {
    let a = m(vec![
        vec![6.0, 1.0, 1.0],
        vec![4.0, -2.0, 5.0],
        vec![2.0, 8.0, 7.0],
    ]);
    let lu = a.determinant().unwrap();
    let cof = a.determinant_with(DeterminantMethod::Cofactor).unwrap();
    assert!((lu - -306.0).abs() < 1e-9, "lu = {}", lu);
    assert_eq!(cof, -306.0);
    assert_eq!(a.cofactor_determinant().unwrap(), cof);
}

#[test]
fn determinant_of_singular_matrix() {
    let a = m(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ]);
    assert!(a.determinant().unwrap().abs() < 1e-9);
    assert_eq!(a.cofactor_determinant().unwrap(), 0.0);
}

#[test]
fn determinant_non_square_errors() {
    let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    assert!(a.determinant().unwrap_err().is_dimension());
}

#[test]
fn rank_counts_independent_rows() {
    let full = m(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    assert_eq!(full.rank(1e-10), 2);
    let deficient = m(vec![vec![1.0, 2.0], vec![2.0, 4.0], vec![3.0, 6.0]]);
    assert_eq!(deficient.rank(1e-10), 1);
    let zero: Matrix = Matrix::zero(3, 3);
    assert_eq!(zero.rank(1e-10), 0);
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn matrix_serializes_as_rows() {
    let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(json, "[[1.0,2.0],[3.0,4.0]]");
    let back: Matrix = serde_json::from_str(&json).unwrap();
    assert_eq!(back, a);
}

#[test]
fn matrix_deserialize_rejects_ragged_rows() {
    let result: Result<Matrix, _> = serde_json::from_str("[[1.0,2.0],[3.0]]");
    assert!(result.is_err());
}
