use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, Mul};
use std::slice::Iter;

use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{LinalgError, Result};
use crate::math::validate;

/// Fixed-length ordered sequence of real components.
///
/// The length is set at construction. Arithmetic never mutates its operands;
/// every operation allocates a fresh `Vector`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector<T = f64> {
    components: Vec<T>,
}

impl<T> Vector<T> {
    pub fn from_vec(components: Vec<T>) -> Self {
        Self { components }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.components.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    pub fn shape(&self) -> (usize,) {
        (self.len(),)
    }

    pub fn mapv<U, F>(&self, f: F) -> Vector<U>
    where
        F: FnMut(&T) -> U,
    {
        Vector::from_vec(self.components.iter().map(f).collect())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.components.clone()
    }
}

impl<T> Vector<T>
where
    T: Clone,
{
    pub fn from_elem(len: usize, value: T) -> Self {
        Vector::from_vec(vec![value; len])
    }
}

impl<T> Vector<T>
where
    T: Clone + Zero,
{
    pub fn zeros(len: usize) -> Self {
        Vector::from_vec(vec![T::zero(); len])
    }
}

impl<T: Float> Vector<T> {
    fn zip_with<F>(&self, other: &Vector<T>, op: &'static str, f: F) -> Result<Vector<T>>
    where
        F: Fn(T, T) -> T,
    {
        validate::same_len(op, self.len(), other.len())?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| f(a, b))
            .collect())
    }

    /// Elementwise sum.
    pub fn add(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_with(other, "vector add", |a, b| a + b)
    }

    /// Elementwise difference `self - other`.
    pub fn subtract(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_with(other, "vector subtract", |a, b| a - b)
    }

    pub fn scale(&self, k: T) -> Vector<T> {
        self.mapv(|&v| v * k)
    }

    /// Inner product `sum(a_i * b_i)`, accumulated left to right.
    ///
    /// Two empty vectors give zero.
    pub fn dot(&self, other: &Vector<T>) -> Result<T> {
        validate::same_len("dot", self.len(), other.len())?;
        Ok(dot_scalar(self.as_slice(), other.as_slice()))
    }

    /// Right-handed 3D cross product. Both operands must have length 3.
    pub fn cross(&self, other: &Vector<T>) -> Result<Vector<T>> {
        validate::same_len("cross", 3, self.len())?;
        validate::same_len("cross", 3, other.len())?;
        let (a, b) = (self.as_slice(), other.as_slice());
        Ok(Vector::from_vec(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    pub fn magnitude(&self) -> T {
        dot_scalar(self.as_slice(), self.as_slice()).sqrt()
    }

    /// Unit vector pointing the same way. Fails for a zero-magnitude vector.
    pub fn normalize(&self) -> Result<Vector<T>> {
        let norm = self.magnitude();
        if norm.is_zero() {
            return Err(LinalgError::value("cannot normalize a zero-magnitude vector"));
        }
        Ok(self.mapv(|&v| v / norm))
    }
}

fn dot_scalar<T: Float>(lhs: &[T], rhs: &[T]) -> T {
    lhs.iter()
        .zip(rhs.iter())
        .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.components
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl<'a, T: Float> Mul<T> for &'a Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_row(f, &self.components)
    }
}

/// Write `[a, b, c]`, honouring a `{:.N}` precision if one was requested.
pub(crate) fn write_row<T: fmt::Display>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (idx, value) in values.iter().enumerate() {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, value)?,
            None => write!(f, "{}", value)?,
        }
        if idx + 1 != values.len() {
            write!(f, ", ")?;
        }
    }
    write!(f, "]")
}
