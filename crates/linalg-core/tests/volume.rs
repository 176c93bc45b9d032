//! Integration tests for 3D volume parsing and slicing.

use linalg_core::volume::{Axis, Volume};

const SAMPLE: &str = "1 2\n3 4\n---\n5 6\n7 8";

fn sample() -> Volume<i64> {
    Volume::parse(SAMPLE, 2, 2, 2).unwrap()
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[test]
fn parse_sample_volume() {
    let v = sample();
    assert_eq!(v.shape(), (2, 2, 2));
    assert_eq!(*v.get(0, 0, 0), 1);
    assert_eq!(*v.get(1, 1, 0), 7);
}

#[test]
fn parse_tolerates_surrounding_whitespace() {
    let text = "\n  1 2 3\n  4 5 6\n ---\n 7 8 9\n10 11 12\n\n";
    let v: Volume<i64> = Volume::parse(text, 2, 2, 3).unwrap();
    assert_eq!(*v.get(1, 1, 2), 12);
}

#[test]
fn parse_wrong_layer_count_errors() {
    let err = Volume::<i64>::parse(SAMPLE, 3, 2, 2).unwrap_err();
    assert!(err.is_value());
    assert!(err.to_string().contains("does not match depth"));
}

#[test]
fn parse_wrong_row_count_errors() {
    let err = Volume::<i64>::parse("1 2\n---\n5 6\n7 8", 2, 2, 2).unwrap_err();
    assert!(err.to_string().contains("Layer 0 has 1 rows, expected 2."));
}

#[test]
fn parse_wrong_value_count_errors() {
    let err = Volume::<i64>::parse("1 2\n3\n---\n5 6\n7 8", 2, 2, 2).unwrap_err();
    assert!(err.to_string().contains("Row 1 in layer 0 has 1 values, expected 2."));
}

#[test]
fn parse_non_numeric_errors() {
    let err = Volume::<i64>::parse("1 a\n3 4\n---\n5 6\n7 8", 2, 2, 2).unwrap_err();
    assert!(err.is_value());
    assert!(err.to_string().contains("non-numeric"));
}

#[test]
fn parse_huge_declared_rows_errors() {
    let err = Volume::<i64>::parse("1 2\n3 4", 1, 1 << 40, 2).unwrap_err();
    assert!(err.is_value());
    assert!(err.to_string().contains("Layer 0 has 2 rows"));
}

#[test]
fn parse_overflowing_shape_errors() {
    let err = Volume::<i64>::parse("1 2\n3 4", 1, usize::MAX, 2).unwrap_err();
    assert!(err.is_value());
    assert!(err.to_string().contains("too many elements"));
}

#[test]
fn from_shape_vec_mismatch_errors() {
    assert!(Volume::from_shape_vec((2, 2, 2), vec![0i64; 7]).unwrap_err().is_dimension());
    let overflow = Volume::from_shape_vec((usize::MAX, 2, 2), vec![0i64; 4]).unwrap_err();
    assert!(overflow.is_value());
}

// ---------------------------------------------------------------------------
// Slicing
// ---------------------------------------------------------------------------

#[test]
fn z_slice_is_a_layer() {
    let s = sample().slice(Axis::Z, 1).unwrap();
    assert_eq!(s.to_rows(), vec![vec![5, 6], vec![7, 8]]);
}

#[test]
fn y_slice_takes_a_row_from_each_layer() {
    let s = sample().slice(Axis::Y, 0).unwrap();
    assert_eq!(s.to_rows(), vec![vec![1, 2], vec![5, 6]]);
}

#[test]
fn x_slice_takes_a_column_from_each_layer() {
    let s = sample().slice(Axis::X, 1).unwrap();
    assert_eq!(s.to_rows(), vec![vec![2, 4], vec![6, 8]]);
}

#[test]
fn slice_shapes_follow_axis() {
    let v = Volume::from_shape_vec((2, 3, 4), (0..24).collect::<Vec<i64>>()).unwrap();
    assert_eq!(v.slice(Axis::Z, 0).unwrap().shape(), (3, 4));
    assert_eq!(v.slice(Axis::Y, 0).unwrap().shape(), (2, 4));
    assert_eq!(v.slice(Axis::X, 0).unwrap().shape(), (2, 3));
    assert_eq!(v.slice(Axis::X, 3).unwrap().to_rows(), vec![vec![3, 7, 11], vec![15, 19, 23]]);
}

#[test]
fn slice_out_of_range_errors() {
    let err = sample().slice(Axis::Z, 2).unwrap_err();
    assert!(err.is_value());
}

#[test]
fn normalized_slice_divides_by_max() {
    let n = sample().normalized_slice(Axis::Z, 1).unwrap();
    assert_eq!(n.to_rows(), vec![vec![5.0 / 8.0, 6.0 / 8.0], vec![7.0 / 8.0, 1.0]]);
}

#[test]
fn normalized_slice_of_zeros_is_unchanged() {
    let v = Volume::from_shape_vec((1, 2, 2), vec![0i64; 4]).unwrap();
    let n = v.normalized_slice(Axis::Z, 0).unwrap();
    assert!(n.as_slice().iter().all(|&x| x == 0.0));
}
