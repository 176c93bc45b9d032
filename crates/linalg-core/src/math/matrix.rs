use std::fmt;
use std::ops::{Index, Mul};

use num_traits::Float;
use serde::de::Error as _;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{LinalgError, Result};
use crate::math::elimination::{self, DeterminantMethod};
use crate::math::validate;
use crate::math::vector::{write_row, Vector};

/// Rectangular grid of real numbers, stored row-major.
///
/// Every row has the same length. A `0x0` matrix is valid.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T = f64> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        let (rows, cols) = shape;
        let expected = validate::element_count(&[rows, cols])?;
        if data.len() != expected {
            return Err(LinalgError::dimension(
                "from_shape_vec",
                format!("{} elements for shape {}x{}", expected, rows, cols),
                format!("{} elements", data.len()),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from a list of rows. Ragged input is rejected.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(LinalgError::dimension(
                    "from_rows",
                    format!("{} columns", ncols),
                    format!("{} columns in row {}", row.len(), idx),
                ));
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| self.row_slice(r))
    }

    pub fn row(&self, row: usize) -> Vector<T>
    where
        T: Clone,
    {
        assert!(row < self.rows, "row index out of bounds");
        Vector::from_vec(self.row_slice(row).to_vec())
    }

    pub fn column(&self, col: usize) -> Vector<T>
    where
        T: Clone,
    {
        assert!(col < self.cols, "column index out of bounds");
        (0..self.rows).map(|row| self[(row, col)].clone()).collect()
    }

    pub fn mapv<U, F>(&self, f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            data: self.data.iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Rows swapped with columns.
    pub fn transpose(&self) -> Matrix<T>
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self[(row, col)].clone());
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

impl<T: Float> Matrix<T> {
    pub fn zero(rows: usize, cols: usize) -> Self {
        Matrix {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    pub fn identity(n: usize) -> Self {
        Self::diagonal(&vec![T::one(); n])
    }

    /// Square matrix with `values` on the main diagonal and zeros elsewhere.
    pub fn diagonal(values: &[T]) -> Self {
        let n = values.len();
        let mut m = Self::zero(n, n);
        for (i, &v) in values.iter().enumerate() {
            let offset = m.offset(i, i);
            m.data[offset] = v;
        }
        m
    }

    fn zip_with<F>(&self, other: &Matrix<T>, op: &'static str, f: F) -> Result<Matrix<T>>
    where
        F: Fn(T, T) -> T,
    {
        validate::same_shape(op, self.shape(), other.shape())?;
        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_with(other, "matrix add", |a, b| a + b)
    }

    pub fn subtract(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_with(other, "matrix subtract", |a, b| a - b)
    }

    pub fn scale(&self, k: T) -> Matrix<T> {
        self.mapv(|&v| v * k)
    }

    /// Matrix product `self * other`, of shape `(self.rows, other.cols)`.
    pub fn multiply(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != other.rows {
            return Err(LinalgError::dimension(
                "multiply",
                format!("{} rows on the right-hand side", self.cols),
                format!("shape {}x{}", other.rows, other.cols),
            ));
        }
        log::trace!(
            "multiply {}x{} by {}x{}",
            self.rows,
            self.cols,
            other.rows,
            other.cols
        );
        let mut out = Matrix::zero(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self[(i, k)];
                for j in 0..other.cols {
                    let offset = out.offset(i, j);
                    out.data[offset] = out.data[offset] + a * other[(k, j)];
                }
            }
        }
        Ok(out)
    }

    /// Matrix-vector product `self * v`.
    pub fn mul_vector(&self, v: &Vector<T>) -> Result<Vector<T>> {
        validate::same_len("mul_vector", self.cols, v.len())?;
        self.rows()
            .map(|row| Vector::from_vec(row.to_vec()).dot(v))
            .collect::<Result<Vec<T>>>()
            .map(Vector::from_vec)
    }

    /// Sum of the main diagonal.
    pub fn trace(&self) -> Result<T> {
        validate::square("trace", self.shape())?;
        Ok((0..self.rows).fold(T::zero(), |acc, i| acc + self[(i, i)]))
    }

    /// Determinant using LU elimination for anything larger than 2x2.
    pub fn determinant(&self) -> Result<T> {
        self.determinant_with(DeterminantMethod::Elimination)
    }

    /// Determinant by exact cofactor expansion.
    pub fn cofactor_determinant(&self) -> Result<T> {
        self.determinant_with(DeterminantMethod::Cofactor)
    }

    pub fn determinant_with(&self, method: DeterminantMethod) -> Result<T> {
        validate::square("determinant", self.shape())?;
        let d = &self.data;
        let det = match self.rows {
            0 => {
                log::warn!("determinant of a 0x0 matrix is defined as 1");
                T::one()
            }
            1 => d[0],
            2 => d[0] * d[3] - d[1] * d[2],
            n => {
                log::trace!("determinant of {}x{} via {}", n, n, method);
                match method {
                    DeterminantMethod::Elimination => elimination::lu_determinant(d, n),
                    DeterminantMethod::Cofactor => elimination::cofactor_determinant(d, n),
                }
            }
        };
        Ok(det)
    }

    /// Number of linearly independent rows, treating `|x| <= tolerance` as zero.
    pub fn rank(&self, tolerance: T) -> usize {
        elimination::rank(&self.data, self.rows, self.cols, tolerance)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<'a, T: Float> Mul<T> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = LinalgError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Matrix::from_rows(rows)
    }
}

impl<T: Serialize> Serialize for Matrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Matrix::from_rows(rows).map_err(D::Error::custom)
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows == 0 {
            return write!(f, "[]");
        }
        write!(f, "[")?;
        for (idx, row) in self.rows().enumerate() {
            if idx > 0 {
                write!(f, ",\n ")?;
            }
            write_row(f, row)?;
        }
        write!(f, "]")
    }
}
